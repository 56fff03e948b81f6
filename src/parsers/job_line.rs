use crate::event::{EventKind, LogEvent};
use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

const FIELD_SEPARATOR: char = ',';
const FIELD_COUNT: usize = 4;

static TIME_OF_DAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})$").expect("time-of-day pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    MalformedFieldCount,
    InvalidTimestamp,
    InvalidEventKind,
}

/// Why a line was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid log format on line: {line} (expected 4 fields, found {found})")]
    MalformedFieldCount { line: String, found: usize },

    #[error("Invalid timestamp format: '{value}' (expected HH:MM:SS)")]
    InvalidTimestamp { value: String },

    #[error("Invalid log entry type on line: {value} (must be START or END)")]
    InvalidEventKind { value: String },
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::MalformedFieldCount { .. } => ParseErrorKind::MalformedFieldCount,
            ParseError::InvalidTimestamp { .. } => ParseErrorKind::InvalidTimestamp,
            ParseError::InvalidEventKind { .. } => ParseErrorKind::InvalidEventKind,
        }
    }
}

/// Parse one `HH:MM:SS, description, START|END, pid` line
pub fn parse_line(line: &str) -> Result<LogEvent, ParseError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(ParseError::MalformedFieldCount {
            line: line.to_string(),
            found: fields.len(),
        });
    }

    let timestamp = parse_time_of_day(fields[0].trim())?;

    let kind_token = fields[2].trim();
    let kind = EventKind::from_token(kind_token).ok_or_else(|| ParseError::InvalidEventKind {
        value: kind_token.to_string(),
    })?;

    Ok(LogEvent {
        timestamp,
        job_description: fields[1].trim().to_string(),
        kind,
        pid: fields[3].trim().to_string(),
    })
}

/// Strict zero-padded 24-hour `HH:MM:SS`; leap seconds are rejected
fn parse_time_of_day(value: &str) -> Result<NaiveTime, ParseError> {
    TIME_OF_DAY_RE
        .captures(value)
        .and_then(|caps| {
            let hour = caps[1].parse().ok()?;
            let minute = caps[2].parse().ok()?;
            let second = caps[3].parse().ok()?;
            NaiveTime::from_hms_opt(hour, minute, second)
        })
        .ok_or_else(|| ParseError::InvalidTimestamp {
            value: value.to_string(),
        })
}
