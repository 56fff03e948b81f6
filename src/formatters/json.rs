use crate::report::{ReportEvent, Severity};
use serde::Serialize;

use super::Formatter;

#[derive(Serialize)]
struct Record<'a> {
    severity: Severity,
    #[serde(flatten)]
    event: &'a ReportEvent,
}

// JSON formatter: one tagged object per event
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, event: &ReportEvent) -> String {
        let record = Record {
            severity: event.severity(),
            event,
        };
        serde_json::to_string(&record).unwrap_or_else(|_| "{}".to_string())
    }
}
