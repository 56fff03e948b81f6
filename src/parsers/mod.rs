pub mod job_line;

pub use job_line::{parse_line, ParseError, ParseErrorKind};
