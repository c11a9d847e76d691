use serde_json::{json, Value};

pub const SINGLE_USER: &str = r#"{"users":[{"id":0,"age":30}]}"#;

/// Deterministic user list: `{"users":[{id,name,age,email,tags}...]}`.
pub fn users(count: usize) -> Value {
    let users: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("user{i}"),
                "age": 20 + (i % 50),
                "email": format!("user{i}@example.com"),
                "tags": ["a", "b"]
            })
        })
        .collect();
    json!({ "users": users })
}

pub fn users_text(count: usize) -> String {
    serde_json::to_string(&users(count)).unwrap()
}

/// A document touching every value kind and some awkward strings.
pub fn mixed() -> Value {
    json!({
        "null": null,
        "flags": [true, false],
        "numbers": {"int": -7, "big": u64::MAX, "float": 0.5},
        "text": "tab\tquote\"slash\\ é ✓",
        "nested": {"empty_obj": {}, "empty_arr": [], "deep": [[[{"k": "v"}]]]}
    })
}
