//! Error types for document operations.
//!
//! Every failing lookup or write names the container path where it stopped
//! and the segment it could not apply, so deep paths are easy to debug.

use jsonref_path::{Path, PathError, PathSegment};
use thiserror::Error;

/// Renders a container location for error messages.
fn location(path: &Path) -> String {
    if path.is_empty() {
        "the root".to_owned()
    } else {
        format!("`{path}`")
    }
}

/// Malformed JSON text or a malformed path string.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid path: {0}")]
    Path(#[from] PathError),
    #[error("value nesting {depth} exceeds the maximum of {max}")]
    TooDeep { depth: usize, max: usize },
}

/// Read-side navigation failure.
///
/// `at` is the path of the container the failing segment was applied to.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("key `{key}` not found in {}", location(.at))]
    KeyNotFound { at: Path, key: String },
    #[error("index {index} out of bounds (len: {len}) in {}", location(.at))]
    IndexOutOfBounds { at: Path, index: usize, len: usize },
    #[error("type mismatch at {}: segment `{segment}` expects {expected}, found {found}", location(.at))]
    TypeMismatch {
        at: Path,
        segment: PathSegment,
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors returned by [`crate::Document::get`]. Navigation errors map 1:1.
pub type AccessError = NavError;

/// Write-side failure. A failed write leaves the document untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MutateError {
    #[error("type mismatch at {}: segment `{segment}` expects {expected}, found {found}", location(.at))]
    TypeMismatch {
        at: Path,
        segment: PathSegment,
        expected: &'static str,
        found: &'static str,
    },
    #[error("index {index} out of bounds (len: {len}) in {}", location(.at))]
    IndexOutOfBounds { at: Path, index: usize, len: usize },
    #[error("index {index} would pad {} slots (max: {max}) in {}", .index - .len, location(.at))]
    GapTooLarge {
        at: Path,
        index: usize,
        len: usize,
        max: usize,
    },
    #[error("write would nest {depth} containers deep (max: {max})")]
    TooDeep { depth: usize, max: usize },
}

/// A batch update failed; every earlier update of the batch was rolled back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("batch update {index} failed: {source}")]
pub struct BatchError {
    /// Position of the failing update within the batch.
    pub index: usize,
    pub source: MutateError,
}

/// Error type of the `json_*` entry points.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error(transparent)]
    Mutate(#[from] MutateError),
    #[error(transparent)]
    Batch(#[from] BatchError),
}

impl From<PathError> for Error {
    fn from(e: PathError) -> Self {
        Error::Parse(ParseError::Path(e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(ParseError::Json(e))
    }
}
