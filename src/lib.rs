// Core library for the jobtimer job log checker

pub mod classifier;
pub mod cli;
pub mod colors;
pub mod config;
pub mod correlator;
pub mod event;
pub mod formatters;
pub mod parsers;
pub mod platform;
pub mod report;
pub mod runner;
pub mod tty;

pub use classifier::{classify, classify_duration, Classification, JobOutcome, Summary, Verdict};
pub use config::JobtimerConfig;
pub use correlator::{correlate_lines, Correlation};
pub use event::{EventKind, LogEvent};
pub use parsers::{parse_line, ParseError, ParseErrorKind};
pub use runner::{process_reader, run_pipeline, PipelineResult};
