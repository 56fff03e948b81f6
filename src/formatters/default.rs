use crate::classifier::{Summary, FAIL_AFTER_MINUTES, WARN_AFTER_MINUTES};
use crate::colors::ColorScheme;
use crate::report::{ReportEvent, Severity};

use super::Formatter;

pub const SUMMARY_HEADER: &str = "==================== Summary ====================";
pub const SUMMARY_FOOTER: &str = "===================== END =======================";

// Default formatter (tagged lines, colored by severity)
pub struct DefaultFormatter {
    colors: ColorScheme,
}

impl DefaultFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self {
            colors: ColorScheme::new(use_colors),
        }
    }

    fn tag(&self, severity: Severity) -> String {
        let label = match severity {
            Severity::Info => "[INFO]",
            Severity::Warn => "[WARNING]",
            Severity::Error => "[ERROR]",
        };
        format!(
            "{}{}{}",
            self.colors.for_severity(severity),
            label,
            self.colors.reset
        )
    }

    fn painted(&self, severity: Severity, text: &str) -> String {
        format!(
            "{}{}{}",
            self.colors.for_severity(severity),
            text,
            self.colors.reset
        )
    }

    fn format_summary(&self, summary: &Summary) -> String {
        let rows = [
            (
                Severity::Info,
                format!("{} jobs in total", summary.total_jobs),
            ),
            (
                Severity::Warn,
                format!("{} job(s) missing END", summary.missing_end),
            ),
            (
                Severity::Info,
                format!(
                    "{} passed within {} minutes",
                    summary.passed, WARN_AFTER_MINUTES
                ),
            ),
            (
                Severity::Warn,
                format!(
                    "{} exceeded {} minutes but not {}",
                    summary.warned, WARN_AFTER_MINUTES, FAIL_AFTER_MINUTES
                ),
            ),
            (
                Severity::Error,
                format!(
                    "{} failed (more than {} minutes)",
                    summary.failed, FAIL_AFTER_MINUTES
                ),
            ),
        ];

        let mut output = String::new();
        output.push('\n');
        output.push_str(SUMMARY_HEADER);
        for (severity, text) in rows {
            output.push('\n');
            output.push_str(&self.painted(severity, &text));
        }
        output.push('\n');
        output.push_str(SUMMARY_FOOTER);
        output
    }
}

impl Formatter for DefaultFormatter {
    fn format(&self, event: &ReportEvent) -> String {
        let tag = self.tag(event.severity());
        match event {
            ReportEvent::SkippedLine {
                line_number,
                reason,
                ..
            } => format!("{} Skipping line {}: {}", tag, line_number, reason),
            ReportEvent::InvalidLineCount { count } => {
                let noun = if *count == 1 { "line" } else { "lines" };
                format!("{} Skipped {} invalid {}", tag, count, noun)
            }
            ReportEvent::JobDuration {
                pid,
                minutes,
                seconds,
            } => format!("{} PID {} took {}m {}s", tag, pid, minutes, seconds),
            ReportEvent::MissingEnd { pid } => format!("{} Missing END for job {}", tag, pid),
            ReportEvent::ExceedsWarnThreshold { pid } => {
                format!("{} Job {} exceeds {} minutes", tag, pid, WARN_AFTER_MINUTES)
            }
            ReportEvent::ExceedsFailThreshold { pid } => {
                format!("{} PID {} exceeds {} minutes", tag, pid, FAIL_AFTER_MINUTES)
            }
            ReportEvent::Summary(summary) => self.format_summary(summary),
        }
    }
}
