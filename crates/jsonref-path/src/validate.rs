//! Validation functions for dotted paths.

use crate::types::Path;
use crate::PathError;

/// Maximum path depth accepted by default.
///
/// This equals the deepest container nesting `serde_json` parses (its
/// recursion limit is 128, exclusive), so a slot addressed by a valid path
/// can always be written out and parsed back.
pub const MAX_PATH_DEPTH: usize = 127;

/// Validate that a path has at most `max` segments.
///
/// # Example
///
/// ```
/// use jsonref_path::{validate_path, Path};
///
/// validate_path(&Path::root().key("a").key("b"), 2).unwrap();
/// validate_path(&Path::root().key("a").key("b"), 1).unwrap_err();
/// ```
pub fn validate_path(path: &Path, max: usize) -> Result<(), PathError> {
    validate_depth(path.len(), max)
}

pub(crate) fn validate_depth(depth: usize, max: usize) -> Result<(), PathError> {
    if depth > max {
        return Err(PathError::TooDeep { depth, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_short_path() {
        let path = Path::root().key("foo").key("bar");
        assert!(validate_path(&path, MAX_PATH_DEPTH).is_ok());
    }

    #[test]
    fn test_validate_max_depth_path() {
        let path = Path::from_segments((0..MAX_PATH_DEPTH).map(Into::into).collect());
        assert!(validate_path(&path, MAX_PATH_DEPTH).is_ok());
    }

    #[test]
    fn test_validate_too_deep_path() {
        let path = Path::from_segments((0..MAX_PATH_DEPTH + 1).map(Into::into).collect());
        assert_eq!(
            validate_path(&path, MAX_PATH_DEPTH),
            Err(PathError::TooDeep {
                depth: MAX_PATH_DEPTH + 1,
                max: MAX_PATH_DEPTH
            })
        );
    }
}
