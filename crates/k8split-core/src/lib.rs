//! k8split Core - Split composite Kubernetes manifests into one file per resource
//!
//! This crate provides the pieces behind the `k8split` binary:
//! - `split`: line-ending detection and document splitting on `---`
//! - `identity`: document parsing and (kind, name, namespace) extraction
//! - `writer`: deduplicating writer for `<kind>__<name>__<namespace>.yaml` files
//! - `splitter`: the single linear pass tying the above together

pub mod error;
pub mod identity;
pub mod split;
pub mod splitter;
pub mod writer;

pub use error::{FieldError, FieldProblem, Result, SplitError};
pub use identity::{ResourceIdentity, parse_document};
pub use split::{LineEnding, LineEndingPolicy, split_documents};
pub use splitter::{SplitObserver, SplitSummary, Splitter};
pub use writer::{ManifestWriter, WriteOutcome};
