//! Dotted path utilities.
//!
//! A path such as `users.42.age` addresses a location inside a JSON
//! document. Segments are separated by `.`; a segment made only of ASCII
//! digits is an array index, every other segment is an object key.
//!
//! # Example
//!
//! ```
//! use jsonref_path::{parse_path, Path, PathSegment};
//!
//! let path = parse_path("users.42.age").unwrap();
//! assert_eq!(
//!     path.segments(),
//!     &[
//!         PathSegment::Key("users".to_string()),
//!         PathSegment::Index(42),
//!         PathSegment::Key("age".to_string()),
//!     ]
//! );
//!
//! // Format back to dotted text
//! assert_eq!(path.to_string(), "users.42.age");
//!
//! // Paths can also be built directly
//! assert_eq!(path, Path::root().key("users").index(42).key("age"));
//! ```
//!
//! # Ambiguities
//!
//! There is no escape syntax. A key that contains `.` cannot be addressed
//! through a path string, and a numeric-looking segment is always an array
//! index, even when the container at that position is an object with a key
//! such as `"0"`. Build the [`Path`] from segments when either case matters.

use thiserror::Error;

pub mod types;
pub mod util;
pub mod validate;

pub use types::{Path, PathSegment};
pub use util::{format_path, is_index_literal};
pub use validate::{validate_path, MAX_PATH_DEPTH};

/// Parse a dotted path string, allowing at most [`MAX_PATH_DEPTH`] segments.
///
/// # Errors
///
/// - `PathError::EmptyPath` - for the empty string
/// - `PathError::EmptySegment` - for leading, trailing or doubled `.`
/// - `PathError::IndexOverflow` - for a digit run that does not fit `usize`
/// - `PathError::TooDeep` - for more than [`MAX_PATH_DEPTH`] segments
///
/// # Example
///
/// ```
/// use jsonref_path::{parse_path, PathError};
///
/// assert!(parse_path("a.b").is_ok());
/// assert_eq!(parse_path(""), Err(PathError::EmptyPath));
/// assert_eq!(parse_path("a..b"), Err(PathError::EmptySegment { position: 1 }));
/// ```
pub fn parse_path(text: &str) -> Result<Path, PathError> {
    parse_path_with_limit(text, MAX_PATH_DEPTH)
}

/// Parse a dotted path string, allowing at most `max_depth` segments.
pub fn parse_path_with_limit(text: &str, max_depth: usize) -> Result<Path, PathError> {
    if text.is_empty() {
        return Err(PathError::EmptyPath);
    }
    let depth = text.bytes().filter(|&b| b == b'.').count() + 1;
    validate::validate_depth(depth, max_depth)?;

    let mut segments = Vec::with_capacity(depth);
    for (position, raw) in text.split('.').enumerate() {
        if raw.is_empty() {
            return Err(PathError::EmptySegment { position });
        }
        segments.push(parse_segment(raw)?);
    }
    Ok(Path::from_segments(segments))
}

/// Classify a single non-empty segment.
pub fn parse_segment(raw: &str) -> Result<PathSegment, PathError> {
    if !is_index_literal(raw) {
        return Ok(PathSegment::Key(raw.to_owned()));
    }
    raw.parse()
        .map(PathSegment::Index)
        .map_err(|_| PathError::IndexOverflow {
            segment: raw.to_owned(),
        })
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path is empty")]
    EmptyPath,
    #[error("empty segment at position {position}")]
    EmptySegment { position: usize },
    #[error("index segment `{segment}` is too large")]
    IndexOverflow { segment: String },
    #[error("path depth {depth} exceeds the maximum of {max}")]
    TooDeep { depth: usize, max: usize },
}
