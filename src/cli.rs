// CLI-specific types and structures

use clap::Parser;

pub const USAGE: &str = "Usage: jobtimer --file path/to/logfile.log";

#[derive(clap::ValueEnum, Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Default,
    Json,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "jobtimer")]
#[command(about = "Check a START/END job log and report how long each job took")]
#[command(
    long_about = "Check a START/END job log and report how long each job took\n\nINPUT FORMAT (one event per line):\n  HH:MM:SS, <job description>, START|END, <process id>\n\nLIMITS:\n  over 5 minutes   warning\n  over 10 minutes  error"
)]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Path to the job log file (required)
    #[arg(short = 'f', long = "file", help_heading = "Input Options")]
    pub file: Option<String>,

    /// Output format
    #[arg(
        short = 'F',
        long = "output-format",
        value_enum,
        default_value = "default",
        help_heading = "Output Options"
    )]
    pub output_format: OutputFormat,

    /// When to color the default output
    #[arg(
        long = "color",
        value_enum,
        default_value = "auto",
        help_heading = "Display Options"
    )]
    pub color: ColorMode,

    /// Disable colored output (same as --color never)
    #[arg(long = "no-color", help_heading = "Display Options")]
    pub no_color: bool,
}
