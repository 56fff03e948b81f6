use chrono::NaiveTime;
use serde::Serialize;
use std::fmt;

/// Which edge of a job a log line records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventKind {
    Start,
    End,
}

impl EventKind {
    /// Accepts only the exact tokens `START` and `END`
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "START" => Some(EventKind::Start),
            "END" => Some(EventKind::End),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Start => "START",
            EventKind::End => "END",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validated job log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEvent {
    pub timestamp: NaiveTime,
    pub job_description: String,
    pub kind: EventKind,
    pub pid: String,
}

impl LogEvent {
    /// Render back into the `HH:MM:SS, description, KIND, pid` line form
    pub fn to_line(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.timestamp.format("%H:%M:%S"),
            self.job_description,
            self.kind,
            self.pid
        )
    }
}
