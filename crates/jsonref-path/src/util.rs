use crate::types::PathSegment;

/// Check if a string consists only of ASCII digits.
///
/// Such a segment is always read as an array index, never as an object key.
///
/// # Example
///
/// ```
/// use jsonref_path::is_index_literal;
///
/// assert!(is_index_literal("0"));
/// assert!(is_index_literal("042"));
/// assert!(!is_index_literal("-1"));
/// assert!(!is_index_literal("1e3"));
/// assert!(!is_index_literal(""));
/// ```
pub fn is_index_literal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Format path segments back into dotted text.
///
/// Returns an empty string for the root path.
pub fn format_path(segments: &[PathSegment]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        match segment {
            PathSegment::Key(key) => out.push_str(key),
            PathSegment::Index(index) => out.push_str(&index.to_string()),
        }
    }
    out
}
