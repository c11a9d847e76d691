//! Read access.

use jsonref_path::Path;
use serde_json::Value;

use crate::error::AccessError;
use crate::navigate;
use crate::node::Node;

/// Copy of the value at `path`. A missing slot is an error; a present
/// `null` is `Ok(Value::Null)`.
pub(crate) fn get(root: &Node, path: &Path) -> Result<Value, AccessError> {
    navigate::resolve(root, path).map(Node::to_value)
}

/// Whether `path` resolves to a slot, `null` included.
pub(crate) fn contains(root: &Node, path: &Path) -> bool {
    navigate::resolve(root, path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonref_path::parse_path;
    use serde_json::json;

    #[test]
    fn missing_and_null_stay_distinct() {
        let root = Node::from_value(json!({"a": null}));
        assert_eq!(get(&root, &parse_path("a").unwrap()), Ok(Value::Null));
        assert!(matches!(
            get(&root, &parse_path("b").unwrap()),
            Err(AccessError::KeyNotFound { .. })
        ));
        assert!(contains(&root, &parse_path("a").unwrap()));
        assert!(!contains(&root, &parse_path("b").unwrap()));
    }

    #[test]
    fn get_returns_an_independent_copy() {
        let root = Node::from_value(json!({"a": {"b": [1, 2]}}));
        let mut copy = get(&root, &parse_path("a").unwrap()).unwrap();
        copy["b"] = json!("changed");
        assert_eq!(
            get(&root, &parse_path("a.b").unwrap()).unwrap(),
            json!([1, 2])
        );
    }

    #[test]
    fn get_root() {
        let root = Node::from_value(json!([1]));
        assert_eq!(get(&root, &Path::root()).unwrap(), json!([1]));
    }
}
