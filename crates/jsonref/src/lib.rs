//! Path-addressable JSON documents with incremental re-serialization.
//!
//! A [`Document`] is parsed once. Single fields are then read and written
//! through dotted paths such as `users.42.age`, at a cost proportional to
//! the path depth. The text form is rebuilt lazily: [`Document::to_text`]
//! re-renders only the containers on the path of a write and splices the
//! cached text of every untouched subtree.
//!
//! # Example
//!
//! ```
//! use jsonref::{Document, Path};
//! use serde_json::json;
//!
//! let mut doc = Document::open(r#"{"users":[{"id":0,"age":30}]}"#).unwrap();
//!
//! // Intermediate containers are created on write.
//! doc.set_str("users.0.tags.0", json!("x")).unwrap();
//! assert_eq!(doc.get_str("users.0.tags").unwrap(), json!(["x"]));
//!
//! // A compiled path can be reused.
//! let age = Path::parse("users.0.age").unwrap();
//! doc.set(&age, json!(31)).unwrap();
//!
//! assert_eq!(
//!     doc.to_text(),
//!     r#"{"users":[{"id":0,"age":31,"tags":["x"]}]}"#
//! );
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`] events under the `jsonref::document` and
//! `jsonref::render` targets and never installs a subscriber.

mod access;
pub mod api;
pub mod document;
pub mod error;
mod mutate;
pub mod navigate;
pub mod node;
pub mod options;
pub mod render;

pub use api::{
    json_compile_path, json_get, json_get_compiled, json_set, json_set_batch, json_set_str,
    JsonSource,
};
pub use document::Document;
pub use error::{AccessError, BatchError, Error, MutateError, NavError, ParseError};
pub use jsonref_path::{Path, PathError, PathSegment, MAX_PATH_DEPTH};
pub use options::{ArrayPolicy, DocumentOptions, DEFAULT_MAX_ARRAY_GAP, MAX_NESTING};
pub use serde_json::Value;
