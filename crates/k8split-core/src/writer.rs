//! Deduplicating manifest writer

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitError};
use crate::identity::ResourceIdentity;

/// Result of handing one document to the writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The document was written to this path
    Written(PathBuf),
    /// A document with the same identity was already written in this run
    Duplicate,
}

/// Writes documents into an output directory, at most once per identity
///
/// Existing files in the directory are overwritten; only files written by this
/// writer count as duplicates.
#[derive(Debug)]
pub struct ManifestWriter {
    output_dir: PathBuf,
    created: HashSet<String>,
}

impl ManifestWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            created: HashSet::new(),
        }
    }

    /// Number of files written so far
    pub fn created(&self) -> usize {
        self.created.len()
    }

    /// Write `chunk` plus a trailing newline under the identity's file name
    pub fn write(&mut self, identity: &ResourceIdentity, chunk: &[u8]) -> Result<WriteOutcome> {
        let file_name = identity.file_name();
        if self.created.contains(&file_name) {
            return Ok(WriteOutcome::Duplicate);
        }

        let path = self.output_dir.join(&file_name);
        write_manifest(&path, chunk).map_err(|source| SplitError::Write {
            path: path.clone(),
            source,
        })?;
        self.created.insert(file_name);

        Ok(WriteOutcome::Written(path))
    }
}

fn write_manifest(path: &Path, chunk: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path)?;
    file.write_all(chunk)?;
    file.write_all(b"\n")?;
    Ok(())
}
