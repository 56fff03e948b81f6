//! Report events emitted while checking a job log
//!
//! Every line the tool prints is one `ReportEvent`. Events carry a severity
//! and their data; how they look on screen is left to a formatter.

use crate::classifier::{Classification, JobOutcome, Summary, Verdict};
use crate::parsers::{ParseError, ParseErrorKind};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReportEvent {
    SkippedLine {
        line_number: usize,
        line: String,
        kind: ParseErrorKind,
        reason: String,
    },
    InvalidLineCount {
        count: usize,
    },
    JobDuration {
        pid: String,
        minutes: i64,
        seconds: i64,
    },
    MissingEnd {
        pid: String,
    },
    ExceedsWarnThreshold {
        pid: String,
    },
    ExceedsFailThreshold {
        pid: String,
    },
    Summary(Summary),
}

impl ReportEvent {
    pub fn skipped_line(line_number: usize, line: &str, err: &ParseError) -> Self {
        ReportEvent::SkippedLine {
            line_number,
            line: line.to_string(),
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ReportEvent::JobDuration { .. } | ReportEvent::Summary(_) => Severity::Info,
            ReportEvent::SkippedLine { .. }
            | ReportEvent::MissingEnd { .. }
            | ReportEvent::ExceedsWarnThreshold { .. } => Severity::Warn,
            ReportEvent::InvalidLineCount { .. } | ReportEvent::ExceedsFailThreshold { .. } => {
                Severity::Error
            }
        }
    }
}

/// Lines for a single job: the elapsed time, then any limit breach; or just
/// the missing-END warning.
pub fn job_events(outcome: &JobOutcome) -> Vec<ReportEvent> {
    let pid = outcome.pid.clone();
    let (minutes, seconds) = match (outcome.minutes(), outcome.seconds()) {
        (Some(m), Some(s)) => (m, s),
        _ => return vec![ReportEvent::MissingEnd { pid }],
    };

    let mut events = vec![ReportEvent::JobDuration {
        pid: pid.clone(),
        minutes,
        seconds,
    }];
    match outcome.verdict {
        Verdict::Warn => events.push(ReportEvent::ExceedsWarnThreshold { pid }),
        Verdict::Fail => events.push(ReportEvent::ExceedsFailThreshold { pid }),
        Verdict::Pass | Verdict::MissingEnd => {}
    }
    events
}

/// Everything reported after input has been consumed, in print order
pub fn classification_events(
    invalid_lines: usize,
    classification: &Classification,
) -> Vec<ReportEvent> {
    let mut events = Vec::new();
    if invalid_lines > 0 {
        events.push(ReportEvent::InvalidLineCount {
            count: invalid_lines,
        });
    }
    for outcome in &classification.outcomes {
        events.extend(job_events(outcome));
    }
    events.push(ReportEvent::Summary(classification.summary));
    events
}
