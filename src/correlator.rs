//! Start/end correlation of parsed job events, keyed by process id.

use crate::event::{EventKind, LogEvent};
use crate::parsers::{parse_line, ParseError};
use chrono::NaiveTime;
use std::collections::BTreeMap;

/// Accumulated state after one pass over the input.
///
/// Both maps are ordered by process id so downstream iteration is
/// deterministic. A repeated START (or END) for the same pid replaces the
/// earlier timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Correlation {
    start_times: BTreeMap<String, NaiveTime>,
    end_times: BTreeMap<String, NaiveTime>,
    invalid_lines: Vec<String>,
}

impl Correlation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and record one raw line. Rejected lines are kept verbatim and the
    /// parse error is handed back so the caller can report it right away.
    pub fn ingest(&mut self, raw: &str) -> Result<(), ParseError> {
        match parse_line(raw) {
            Ok(event) => {
                self.record(event);
                Ok(())
            }
            Err(err) => {
                self.invalid_lines.push(raw.to_string());
                Err(err)
            }
        }
    }

    pub fn record(&mut self, event: LogEvent) {
        let times = match event.kind {
            EventKind::Start => &mut self.start_times,
            EventKind::End => &mut self.end_times,
        };
        times.insert(event.pid, event.timestamp);
    }

    pub fn start_times(&self) -> &BTreeMap<String, NaiveTime> {
        &self.start_times
    }

    pub fn end_times(&self) -> &BTreeMap<String, NaiveTime> {
        &self.end_times
    }

    pub fn end_time(&self, pid: &str) -> Option<NaiveTime> {
        self.end_times.get(pid).copied()
    }

    /// Raw text of every rejected line, in input order
    pub fn invalid_lines(&self) -> &[String] {
        &self.invalid_lines
    }
}

/// Correlate an in-memory sequence of lines in one go.
///
/// Meant for tests and benchmarks. Rejected lines are still collected in
/// [`Correlation::invalid_lines`], but their [`ParseError`]s are not
/// surfaced; use [`Correlation::ingest`] to report each one as it happens.
pub fn correlate_lines<I, S>(lines: I) -> Correlation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut correlation = Correlation::new();
    for line in lines {
        // Rejected lines land in `invalid_lines`
        correlation.ingest(line.as_ref()).ok();
    }
    correlation
}
