use crate::config::ColorMode;
use std::io::IsTerminal;

/// Check if stdout is connected to a TTY
pub fn is_stdout_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Determine if colors should be used for the given color mode.
///
/// Only the flag and the terminal decide; no environment variable is read.
pub fn should_use_colors_with_mode(color_mode: &ColorMode) -> bool {
    match color_mode {
        ColorMode::Never => false,
        ColorMode::Always => true,
        ColorMode::Auto => is_stdout_tty(),
    }
}
