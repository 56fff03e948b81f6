use std::path::PathBuf;
use thiserror::Error;

/// Main configuration struct for jobtimer
#[derive(Debug, Clone)]
pub struct JobtimerConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Input configuration
#[derive(Debug, Clone)]
pub struct InputConfig {
    pub file: PathBuf,
}

/// Output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: ColorMode,
}

/// Output format enumeration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Default,
    Json,
}

/// Color output mode
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no input file given")]
    MissingInputFile,
}

impl JobtimerConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self, ConfigError> {
        let file = cli
            .file
            .as_deref()
            .filter(|path| !path.is_empty())
            .ok_or(ConfigError::MissingInputFile)?;

        let color = if cli.no_color {
            ColorMode::Never
        } else {
            cli.color.clone().into()
        };

        Ok(Self {
            input: InputConfig {
                file: PathBuf::from(file),
            },
            output: OutputConfig {
                format: cli.output_format.clone().into(),
                color,
            },
        })
    }

    pub fn with_file(file: impl Into<PathBuf>) -> Self {
        Self {
            input: InputConfig { file: file.into() },
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Default,
            color: ColorMode::Auto,
        }
    }
}

impl OutputConfig {
    pub fn use_colors(&self) -> bool {
        crate::tty::should_use_colors_with_mode(&self.color)
    }
}

// Conversion traits to keep the clap types out of the core
impl From<crate::cli::OutputFormat> for OutputFormat {
    fn from(format: crate::cli::OutputFormat) -> Self {
        match format {
            crate::cli::OutputFormat::Default => OutputFormat::Default,
            crate::cli::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

impl From<crate::cli::ColorMode> for ColorMode {
    fn from(mode: crate::cli::ColorMode) -> Self {
        match mode {
            crate::cli::ColorMode::Auto => ColorMode::Auto,
            crate::cli::ColorMode::Always => ColorMode::Always,
            crate::cli::ColorMode::Never => ColorMode::Never,
        }
    }
}
