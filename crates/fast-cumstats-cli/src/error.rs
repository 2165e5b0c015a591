//! CLI error types for file I/O, CSV parsing and statistic errors.
//!
//! [`CliError`] wraps every failure the CLI can hit. Messages say what went
//! wrong and, where there is an obvious fix, how to fix it.

use std::fmt;
use std::io;

/// CLI error type encompassing all possible error conditions.
#[derive(Debug)]
pub enum CliError {
    /// An I/O error occurred while reading or writing files.
    IoError {
        /// The underlying I/O error.
        source: io::Error,
        /// Path that caused the error, if known.
        path: Option<String>,
    },
    /// An error occurred while parsing CSV data.
    CsvParseError {
        /// Description of the parse error.
        message: String,
        /// Line number where the error occurred, if known.
        line: Option<usize>,
    },
    /// An error occurred while computing a statistic.
    StatisticError {
        /// The underlying fast-cumstats error.
        source: fast_cumstats::Error,
    },
    /// An invalid argument was provided.
    InvalidArgument {
        /// Name of the invalid argument.
        argument: String,
        /// Description of why it's invalid.
        reason: String,
        /// Suggestion for valid values.
        suggestion: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::IoError { source, path } => {
                if let Some(p) = path {
                    write!(f, "I/O error with file '{p}': {source}. ")?;
                    write!(f, "Check that the file exists and you have access to it.")
                } else {
                    write!(f, "I/O error: {source}")
                }
            }
            CliError::CsvParseError { message, line } => {
                if let Some(l) = line {
                    write!(f, "CSV parse error on line {l}: {message}. ")?;
                } else {
                    write!(f, "CSV parse error: {message}. ")?;
                }
                write!(f, "Ensure your CSV has a header row and a numeric value column.")
            }
            CliError::StatisticError { source } => {
                write!(f, "Statistic computation error: {source}")?;
                if matches!(source, fast_cumstats::Error::EmptyInput) {
                    write!(f, ". The input needs at least one data row")?;
                }
                Ok(())
            }
            CliError::InvalidArgument {
                argument,
                reason,
                suggestion,
            } => {
                write!(f, "Invalid argument '{argument}': {reason}")?;
                if let Some(s) = suggestion {
                    write!(f, ". {s}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::IoError { source, .. } => Some(source),
            CliError::StatisticError { source } => Some(source),
            CliError::CsvParseError { .. } | CliError::InvalidArgument { .. } => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::IoError {
            source: err,
            path: None,
        }
    }
}

impl From<fast_cumstats::Error> for CliError {
    fn from(err: fast_cumstats::Error) -> Self {
        CliError::StatisticError { source: err }
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        let line = err
            .position()
            .and_then(|p| usize::try_from(p.line()).ok());
        CliError::CsvParseError {
            message: err.to_string(),
            line,
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
