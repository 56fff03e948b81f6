//! One full pass: read the log, correlate, classify, report.

use crate::classifier::{classify, Classification};
use crate::config::JobtimerConfig;
use crate::correlator::Correlation;
use crate::formatters::{create_formatter, Formatter};
use crate::report::{classification_events, ReportEvent};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

/// Result of pipeline processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
    pub classification: Classification,
    pub invalid_lines: usize,
}

/// Open the configured log file and run the whole pipeline over it.
///
/// Failing to open the file is reported before anything is written to
/// `output`. The file handle is dropped on every return path.
pub fn run_pipeline<W: Write>(config: &JobtimerConfig, output: &mut W) -> Result<PipelineResult> {
    let path = &config.input.file;
    let file = File::open(path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

    let formatter = create_formatter(&config.output);
    process_reader(BufReader::new(file), formatter.as_ref(), output)
        .with_context(|| format!("Failed to process log file '{}'", path.display()))
}

/// Run the pipeline over any buffered reader
pub fn process_reader<R: BufRead, W: Write>(
    reader: R,
    formatter: &dyn Formatter,
    output: &mut W,
) -> Result<PipelineResult> {
    let correlation = correlate_reader(reader, formatter, output)?;
    let classification = classify(&correlation);
    let invalid_lines = correlation.invalid_lines().len();

    for event in classification_events(invalid_lines, &classification) {
        write_event(formatter, &event, output)?;
    }
    output.flush().context("Failed to flush report output")?;

    Ok(PipelineResult {
        classification,
        invalid_lines,
    })
}

/// Consume every line, reporting rejected ones as they are found
fn correlate_reader<R: BufRead, W: Write>(
    mut reader: R,
    formatter: &dyn Formatter,
    output: &mut W,
) -> Result<Correlation> {
    let mut correlation = Correlation::new();
    let mut buf = Vec::new();
    let mut line_num = 0;

    loop {
        buf.clear();
        let bytes_read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Failed to read input after line {}", line_num))?;
        if bytes_read == 0 {
            break; // EOF
        }
        line_num += 1;

        let decoded = String::from_utf8_lossy(&buf);
        let line = decoded.strip_suffix('\n').unwrap_or(&decoded);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Err(err) = correlation.ingest(line) {
            write_event(
                formatter,
                &ReportEvent::skipped_line(line_num, line, &err),
                output,
            )?;
        }
    }

    Ok(correlation)
}

fn write_event<W: Write>(
    formatter: &dyn Formatter,
    event: &ReportEvent,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "{}", formatter.format(event))
        .context("Failed to write report output")
}
