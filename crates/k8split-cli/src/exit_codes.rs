//! Standard exit codes for CLI operations
//!
//! These exit codes follow Unix conventions and sysexits.h where applicable.

/// Success - all documents processed (duplicates and blank documents included)
pub const SUCCESS: i32 = 0;

/// General error - unspecified failure
#[allow(dead_code)]
pub const ERROR: i32 = 1;

/// Parse error - a document is not valid YAML or not a mapping
pub const PARSE_ERROR: i32 = 2;

/// Schema error - `kind`, `metadata.name` or `metadata.namespace` missing or mistyped
pub const SCHEMA_ERROR: i32 = 3;

/// Environment error - output directory missing or not a directory
pub const ENVIRONMENT_ERROR: i32 = 4;

/// IO error - input unreadable or output file not writable
pub const IO_ERROR: i32 = 5;

/// Usage error - invalid arguments or options (following sysexits.h convention)
pub const USAGE_ERROR: i32 = 64;
