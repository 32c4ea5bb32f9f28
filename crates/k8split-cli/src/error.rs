//! CLI error types with exit code handling
//!
//! Every fatal condition ends up as a `CliError`, which knows its exit code
//! and renders as a miette diagnostic.

use k8split_core::SplitError;
use miette::Diagnostic;
use thiserror::Error;

use crate::exit_codes;

/// Hint shown for documents that fail to parse
const PARSE_HELP: &str =
    "documents must be yaml mappings separated by a line containing only `---`";

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum CliError {
    /// Invalid invocation (input file missing)
    #[error("{message}")]
    #[diagnostic(code(k8split::cli::usage), help("usage: k8split -o <dir> <file>"))]
    Usage { message: String },

    /// Output directory is unusable
    #[error("{message}")]
    #[diagnostic(code(k8split::cli::environment))]
    Environment {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A document could not be parsed
    #[error("Parse error: {message}")]
    #[diagnostic(code(k8split::cli::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A document lacks a field needed to name its output file
    #[error("Schema error: {message}")]
    #[diagnostic(code(k8split::cli::schema))]
    Schema {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// IO error (unreadable input, unwritable output)
    #[error("IO error: {message}")]
    #[diagnostic(code(k8split::cli::io))]
    Io { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage { .. } => exit_codes::USAGE_ERROR,
            CliError::Environment { .. } => exit_codes::ENVIRONMENT_ERROR,
            CliError::Parse { .. } => exit_codes::PARSE_ERROR,
            CliError::Schema { .. } => exit_codes::SCHEMA_ERROR,
            CliError::Io { .. } => exit_codes::IO_ERROR,
        }
    }

    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create an environment error with help text
    pub fn environment_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Environment {
            message: message.into(),
            help: Some(help.into()),
        }
    }
}

impl From<SplitError> for CliError {
    fn from(err: SplitError) -> Self {
        let message = err.to_string();
        match err {
            SplitError::Parse { .. } | SplitError::NotAMapping { .. } => CliError::Parse {
                message,
                help: Some(PARSE_HELP.to_string()),
            },
            SplitError::Schema { source, .. } => CliError::Schema {
                message,
                help: Some(format!(
                    "every document needs a string `{}` to build its file name",
                    source.field
                )),
            },
            SplitError::Read { .. } | SplitError::Write { .. } => CliError::Io { message },
            // SplitError is non_exhaustive
            _ => CliError::Io { message },
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
