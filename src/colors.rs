use crate::report::Severity;

/// ANSI color codes for the default report output
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub info: &'static str,  // Green for informational lines
    pub warn: &'static str,  // Yellow for warnings
    pub error: &'static str, // Red for errors
    pub reset: &'static str, // Reset to default color
}

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if use_colors {
            Self {
                info: "\x1b[32m",
                warn: "\x1b[33m",
                error: "\x1b[31m",
                reset: "\x1b[0m",
            }
        } else {
            // All empty strings for no-color mode
            Self {
                info: "",
                warn: "",
                error: "",
                reset: "",
            }
        }
    }

    pub fn for_severity(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Info => self.info,
            Severity::Warn => self.warn,
            Severity::Error => self.error,
        }
    }
}
