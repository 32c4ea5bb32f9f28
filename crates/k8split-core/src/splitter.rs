//! The split run: detect, split, parse, deduplicate, write
//!
//! Documents are handled strictly in input order. The first fatal error stops
//! the run; files written before it stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitError};
use crate::identity::{ResourceIdentity, parse_document};
use crate::split::{LineEnding, LineEndingPolicy, split_documents};
use crate::writer::{ManifestWriter, WriteOutcome};

/// Receives progress notices during a run
///
/// All methods default to doing nothing. `index` is the 1-based position of
/// the document in the input.
pub trait SplitObserver {
    /// The input was split into `chunks` documents
    fn on_split(&mut self, _chunks: usize) {}

    /// A document was written to `path`
    fn on_written(&mut self, _index: usize, _identity: &ResourceIdentity, _path: &Path) {}

    /// A document was skipped because its identity was already written
    fn on_duplicate(&mut self, _index: usize, _identity: &ResourceIdentity) {}

    /// A blank document was skipped
    fn on_blank(&mut self, _index: usize) {}
}

impl SplitObserver for () {}

/// What a completed run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitSummary {
    /// Documents found in the input, blank ones included
    pub chunks: usize,
    /// Files written, in input order
    pub written: Vec<PathBuf>,
    /// Identities skipped as duplicates, in input order
    pub duplicates: Vec<ResourceIdentity>,
    /// Blank documents skipped
    pub blank: usize,
}

/// Splits one composite input into per-resource files
#[derive(Debug, Clone)]
pub struct Splitter {
    output_dir: PathBuf,
    line_endings: LineEndingPolicy,
}

impl Splitter {
    /// Create a splitter writing into `output_dir`, which must already exist
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            line_endings: LineEndingPolicy::default(),
        }
    }

    /// Set how the separator's line break is chosen
    pub fn line_endings(mut self, policy: LineEndingPolicy) -> Self {
        self.line_endings = policy;
        self
    }

    /// Read `path` completely, then split it
    pub fn split_file<O>(&self, path: &Path, observer: &mut O) -> Result<SplitSummary>
    where
        O: SplitObserver + ?Sized,
    {
        let input = fs::read(path).map_err(|source| SplitError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = input.len(), "read input");

        self.split(&input, observer)
    }

    /// Split `input` and write one file per distinct resource
    pub fn split<O>(&self, input: &[u8], observer: &mut O) -> Result<SplitSummary>
    where
        O: SplitObserver + ?Sized,
    {
        let line_ending = LineEnding::detect(input, self.line_endings);
        tracing::debug!(?line_ending, policy = ?self.line_endings, "detected line ending");

        let chunks = split_documents(input, line_ending);
        observer.on_split(chunks.len());

        let mut writer = ManifestWriter::new(&self.output_dir);
        let mut summary = SplitSummary {
            chunks: chunks.len(),
            ..SplitSummary::default()
        };

        for (position, chunk) in chunks.into_iter().enumerate() {
            let index = position + 1;

            let Some(doc) = parse_document(index, chunk)? else {
                tracing::debug!(index, "skipping blank document");
                summary.blank += 1;
                observer.on_blank(index);
                continue;
            };

            let identity = ResourceIdentity::from_document(&doc)
                .map_err(|source| SplitError::Schema { index, source })?;

            match writer.write(&identity, chunk)? {
                WriteOutcome::Written(path) => {
                    tracing::debug!(index, path = %path.display(), "wrote document");
                    observer.on_written(index, &identity, &path);
                    summary.written.push(path);
                }
                WriteOutcome::Duplicate => {
                    tracing::debug!(index, file = %identity.file_name(), "skipping duplicate");
                    observer.on_duplicate(index, &identity);
                    summary.duplicates.push(identity);
                }
            }
        }

        Ok(summary)
    }
}
