//! Error handling utilities for the CLI.

use thiserror::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Some inputs failed; their diagnostics have already been printed.
    #[error("{failed} of {total} file(s) failed to check")]
    Failed { failed: usize, total: usize },
}

/// Report an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError) -> ! {
    tracing::debug!("{error}");
    std::process::exit(1);
}
