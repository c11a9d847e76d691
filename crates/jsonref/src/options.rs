//! Per-document configuration.

use jsonref_path::MAX_PATH_DEPTH;

/// Deepest container nesting a document may hold.
///
/// `serde_json` refuses to parse anything deeper, so writes that would go
/// past it are rejected to keep `to_text` output readable by `open`.
pub const MAX_NESTING: usize = MAX_PATH_DEPTH;

/// Default for [`DocumentOptions::max_array_gap`].
pub const DEFAULT_MAX_ARRAY_GAP: usize = 1 << 16;

/// How a write handles an array index past the end of the array.
///
/// A document keeps one policy for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayPolicy {
    /// Replace in bounds or append at exactly `len`; anything further fails
    /// with `IndexOutOfBounds`.
    #[default]
    Strict,
    /// Grow the array with `null` up to the written index, filling at most
    /// [`DocumentOptions::max_array_gap`] slots.
    Pad,
}

/// Options fixed when a [`crate::Document`] is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Array extension policy for writes.
    pub array_policy: ArrayPolicy,
    /// Maximum number of segments accepted when the document parses a path
    /// string.
    pub max_depth: usize,
    /// Most `null` slots a single write may insert under
    /// [`ArrayPolicy::Pad`].
    pub max_array_gap: usize,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            array_policy: ArrayPolicy::Strict,
            max_depth: MAX_PATH_DEPTH,
            max_array_gap: DEFAULT_MAX_ARRAY_GAP,
        }
    }
}

impl DocumentOptions {
    pub fn with_array_policy(mut self, array_policy: ArrayPolicy) -> Self {
        self.array_policy = array_policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_array_gap(mut self, max_array_gap: usize) -> Self {
        self.max_array_gap = max_array_gap;
        self
    }

    /// Default options with [`ArrayPolicy::Pad`].
    pub fn pad() -> Self {
        Self::default().with_array_policy(ArrayPolicy::Pad)
    }
}
