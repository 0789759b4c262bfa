//! Error handling and display for the CLI.

use colored::Colorize;
use stockroom_custom_id::FormatError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No format file specified.")]
    NoFormatFile,

    #[error("{rejected} of {total} identifier(s) do not match the format")]
    Rejected { rejected: usize, total: usize },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = hint(err) {
        eprintln!("\n{}", hint.yellow());
    }
}

fn hint(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(format_err) = err.downcast_ref::<FormatError>() {
        return match format_err {
            FormatError::DuplicateSequence { .. } => {
                Some("Hint: A format may contain only one SEQUENCE element.")
            }
            FormatError::Json(_) => Some(
                "Hint: A format file is a JSON array of {elementType, config, sortOrder} records.",
            ),
            FormatError::Pattern(_) => {
                Some("Hint: The format is too large to validate; shorten its fixed text.")
            }
            _ => None,
        };
    }

    match err.downcast_ref::<CliError>() {
        Some(CliError::NoFormatFile) => Some(
            "Hint: Use --format-file, set STOCK_FORMAT, or run `stock config set-format <PATH>`.",
        ),
        _ => None,
    }
}
