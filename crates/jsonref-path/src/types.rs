//! Type definitions for dotted paths.

use std::fmt;
use std::str::FromStr;

use crate::util::format_path;
use crate::PathError;

/// A single step in a [`Path`].
///
/// Either an object key or an array index. Which one a textual segment
/// becomes is decided by [`Path::parse`]: all-digit segments are indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member access.
    Key(String),
    /// Array element access.
    Index(usize),
}

impl PathSegment {
    pub fn is_key(&self) -> bool {
        matches!(self, PathSegment::Key(_))
    }

    pub fn is_index(&self) -> bool {
        matches!(self, PathSegment::Index(_))
    }

    /// Get the key if this is a key segment.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(key) => Some(key),
            PathSegment::Index(_) => None,
        }
    }

    /// Get the index if this is an index segment.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Key(_) => None,
            PathSegment::Index(index) => Some(*index),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// A parsed path into a JSON document.
///
/// The empty path addresses the document root. Paths are cheap to reuse:
/// parse once, then pass the same `Path` to any number of lookups.
///
/// # Example
///
/// ```
/// use jsonref_path::{Path, PathSegment};
///
/// let path = Path::root().key("users").index(42).key("age");
/// assert_eq!(path.to_string(), "users.42.age");
/// assert_eq!(path.last(), Some(&PathSegment::Key("age".to_string())));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// The empty path, addressing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a dotted path string. See [`crate::parse_path`].
    pub fn parse(text: &str) -> Result<Self, PathError> {
        crate::parse_path(text)
    }

    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Append a key segment and return self.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.push_key(key);
        self
    }

    /// Append an index segment and return self.
    pub fn index(mut self, index: usize) -> Self {
        self.push_index(index);
        self
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(PathSegment::Key(key.into()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathSegment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the root path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn first(&self) -> Option<&PathSegment> {
        self.segments.first()
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// The path without its last segment, or `None` for the root.
    pub fn parent(&self) -> Option<Path> {
        self.segments
            .split_last()
            .map(|(_, init)| Path::from_segments(init.to_vec()))
    }

    /// The first `len` segments of this path (the whole path if shorter).
    pub fn prefix(&self, len: usize) -> Path {
        let len = len.min(self.segments.len());
        Path::from_segments(self.segments[..len].to_vec())
    }

    /// True if every segment of `self` matches the start of `other`.
    ///
    /// A path is a prefix of itself, and the root is a prefix of every path.
    pub fn is_prefix_of(&self, other: &Path) -> bool {
        other.segments.starts_with(&self.segments)
    }
}

/// Dotted text form, as accepted by [`Path::parse`].
///
/// There is no escaping, so the text is ambiguous for some keys: a
/// `Key("0")` segment prints as `0`, which parses back as `Index(0)`, and a
/// key containing `.` prints as several segments. Error messages for such
/// keys show the same text.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_path(&self.segments))
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_path(s)
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Path::from_segments(segments)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
