use clap::Parser;
use std::io::{self, Write};

use jobtimer::cli::{Cli, USAGE};
use jobtimer::config::{ConfigError, JobtimerConfig};
use jobtimer::platform::{is_broken_pipe, ExitCode};
use jobtimer::run_pipeline;

fn main() {
    let cli = Cli::parse();

    let config = match JobtimerConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(ConfigError::MissingInputFile) => {
            println!("{}", USAGE);
            ExitCode::InvalidUsage.exit();
        }
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();

    if let Err(e) = run_pipeline(&config, &mut output) {
        // Exit quietly when the reader of our output went away
        if !is_broken_pipe(&e) {
            let _ = output.flush();
            eprintln!("jobtimer: Error: {:#}", e);
        }
        ExitCode::for_error(&e).exit();
    }

    ExitCode::Success.exit();
}
