//! Error types for k8split-core

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for k8split-core operations
pub type Result<T> = std::result::Result<T, SplitError>;

/// Errors that abort a split run
///
/// `index` is the 1-based position of the offending document in the input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SplitError {
    /// Input file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid YAML
    #[error("error loading yaml for document #{index}: {source}")]
    Parse {
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },

    /// Document parsed, but its top level is not a mapping
    #[error("document #{index} is not a mapping (found {found})")]
    NotAMapping { index: usize, found: &'static str },

    /// A required resource field is missing or has the wrong type
    #[error("invalid resource in document #{index}: {source}")]
    Schema {
        index: usize,
        #[source]
        source: FieldError,
    },

    /// Output file could not be written
    #[error("error writing file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SplitError {
    /// Position of the document that caused the error, if any
    pub fn index(&self) -> Option<usize> {
        match self {
            SplitError::Parse { index, .. }
            | SplitError::NotAMapping { index, .. }
            | SplitError::Schema { index, .. } => Some(*index),
            SplitError::Read { .. } | SplitError::Write { .. } => None,
        }
    }
}

/// A required field that could not be extracted, with its dotted path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{field}` {problem}")]
pub struct FieldError {
    pub field: &'static str,
    pub problem: FieldProblem,
}

impl FieldError {
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            problem: FieldProblem::Missing,
        }
    }

    pub fn wrong_type(field: &'static str, expected: &'static str, found: &'static str) -> Self {
        Self {
            field,
            problem: FieldProblem::WrongType { expected, found },
        }
    }
}

/// Why a field could not be extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Missing,
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldProblem::Missing => write!(f, "is not specified"),
            FieldProblem::WrongType { expected, found } => {
                write!(f, "must be a {}, found {}", expected, found)
            }
        }
    }
}
