//! In-memory document tree.
//!
//! A [`Node`] mirrors a JSON value and can carry a cached rendering of its
//! own subtree (its *fragment*). Writers clear the fragment of every
//! container they pass through, so after a `set` exactly the ancestor chain
//! of the written slot is stale and every other subtree keeps its cached
//! text.

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

/// Object members, in insertion order.
pub type ObjectMap = IndexMap<String, Node>;

/// The value stored in a [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Object(ObjectMap),
    Array(Vec<Node>),
}

impl NodeKind {
    /// JSON type name, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Null => "null",
            NodeKind::Bool(_) => "boolean",
            NodeKind::Number(_) => "number",
            NodeKind::String(_) => "string",
            NodeKind::Object(_) => "object",
            NodeKind::Array(_) => "array",
        }
    }
}

/// One node of the document tree.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    fragment: Option<String>,
    /// Length of the last rendered fragment; survives invalidation and is
    /// used as the buffer size for the next render.
    size_hint: usize,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            fragment: None,
            size_hint: 0,
        }
    }

    pub fn null() -> Self {
        Self::new(NodeKind::Null)
    }

    pub fn empty_object() -> Self {
        Self::new(NodeKind::Object(ObjectMap::new()))
    }

    pub fn empty_array() -> Self {
        Self::new(NodeKind::Array(Vec::new()))
    }

    /// Build a tree from a JSON value, taking ownership of its contents.
    pub fn from_value(value: Value) -> Self {
        let kind = match value {
            Value::Null => NodeKind::Null,
            Value::Bool(b) => NodeKind::Bool(b),
            Value::Number(n) => NodeKind::Number(n),
            Value::String(s) => NodeKind::String(s),
            Value::Array(items) => {
                NodeKind::Array(items.into_iter().map(Node::from_value).collect())
            }
            Value::Object(map) => {
                let mut members = ObjectMap::with_capacity(map.len());
                for (key, child) in map {
                    members.insert(key, Node::from_value(child));
                }
                NodeKind::Object(members)
            }
        };
        Self::new(kind)
    }

    /// Deep copy of this subtree as a JSON value.
    pub fn to_value(&self) -> Value {
        match &self.kind {
            NodeKind::Null => Value::Null,
            NodeKind::Bool(b) => Value::Bool(*b),
            NodeKind::Number(n) => Value::Number(n.clone()),
            NodeKind::String(s) => Value::String(s.clone()),
            NodeKind::Array(items) => Value::Array(items.iter().map(Node::to_value).collect()),
            NodeKind::Object(members) => {
                let mut map = Map::with_capacity(members.len());
                for (key, child) in members {
                    map.insert(key.clone(), child.to_value());
                }
                Value::Object(map)
            }
        }
    }

    /// Convert this subtree into a JSON value without copying strings.
    pub fn into_value(self) -> Value {
        match self.kind {
            NodeKind::Null => Value::Null,
            NodeKind::Bool(b) => Value::Bool(b),
            NodeKind::Number(n) => Value::Number(n),
            NodeKind::String(s) => Value::String(s),
            NodeKind::Array(items) => {
                Value::Array(items.into_iter().map(Node::into_value).collect())
            }
            NodeKind::Object(members) => {
                let mut map = Map::with_capacity(members.len());
                for (key, child) in members {
                    map.insert(key, child.into_value());
                }
                Value::Object(map)
            }
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Mutable access to the value. Clears this node's cached fragment, so
    /// callers must also go through the ancestors with this method.
    pub(crate) fn kind_mut(&mut self) -> &mut NodeKind {
        self.fragment = None;
        &mut self.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, NodeKind::Object(_) | NodeKind::Array(_))
    }

    /// Cached rendering of this subtree, if it is current.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn has_fragment(&self) -> bool {
        self.fragment.is_some()
    }

    pub(crate) fn size_hint(&self) -> usize {
        self.size_hint
    }

    pub(crate) fn set_fragment(&mut self, fragment: String) {
        self.size_hint = fragment.len();
        self.fragment = Some(fragment);
    }

    pub(crate) fn take_fragment(&mut self) -> Option<String> {
        self.fragment.take()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + match &self.kind {
            NodeKind::Object(members) => members.values().map(Node::count).sum(),
            NodeKind::Array(items) => items.iter().map(Node::count).sum(),
            _ => 0,
        }
    }
}

/// Deepest container nesting inside `value`: 0 for a scalar, 1 for a flat
/// array or object.
pub fn nesting(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(nesting).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(nesting).max().unwrap_or(0),
        _ => 0,
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Node::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_preserves_structure_and_order() {
        let value = json!({"z": 1, "a": [true, null, "s"], "m": {"k": 2.5}});
        let node = Node::from_value(value.clone());
        assert_eq!(node.to_value(), value);

        let NodeKind::Object(members) = node.kind() else {
            panic!("expected object");
        };
        let keys: Vec<&str> = members.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn into_value_roundtrip() {
        let value = json!([1, {"a": "b"}, [], {}]);
        assert_eq!(Node::from_value(value.clone()).into_value(), value);
    }

    #[test]
    fn type_names() {
        assert_eq!(Node::null().type_name(), "null");
        assert_eq!(Node::from_value(json!(false)).type_name(), "boolean");
        assert_eq!(Node::from_value(json!(1)).type_name(), "number");
        assert_eq!(Node::from_value(json!("x")).type_name(), "string");
        assert_eq!(Node::empty_object().type_name(), "object");
        assert_eq!(Node::empty_array().type_name(), "array");
    }

    #[test]
    fn kind_mut_clears_fragment_but_keeps_hint() {
        let mut node = Node::empty_array();
        node.set_fragment("[]".to_string());
        assert_eq!(node.fragment(), Some("[]"));

        node.kind_mut();
        assert!(!node.has_fragment());
        assert_eq!(node.size_hint(), 2);
    }

    #[test]
    fn equality_ignores_fragments() {
        let mut a = Node::from_value(json!({"a": 1}));
        let b = Node::from_value(json!({"a": 1}));
        a.set_fragment("{\"a\":1}".to_string());
        assert_eq!(a, b);
    }

    #[test]
    fn nesting_depth() {
        assert_eq!(nesting(&json!(1)), 0);
        assert_eq!(nesting(&json!([])), 1);
        assert_eq!(nesting(&json!({"a": [1, {"b": {}}], "c": []})), 3);
    }

    #[test]
    fn count_nodes() {
        assert_eq!(Node::from_value(json!({"a": [1, 2], "b": null})).count(), 5);
    }
}
