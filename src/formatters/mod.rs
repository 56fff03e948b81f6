mod default;
mod json;

pub use default::DefaultFormatter;
pub use json::JsonFormatter;

use crate::config::{OutputConfig, OutputFormat};
use crate::report::ReportEvent;

/// Render a report event as one or more output lines (no trailing newline)
pub trait Formatter {
    fn format(&self, event: &ReportEvent) -> String;
}

pub fn create_formatter(output: &OutputConfig) -> Box<dyn Formatter> {
    match output.format {
        OutputFormat::Default => Box::new(DefaultFormatter::new(output.use_colors())),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}
