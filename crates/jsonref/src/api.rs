//! Function-style entry points.
//!
//! These mirror the document methods for callers that work with path strings
//! or plain JSON text. A text source is parsed with default options on every
//! call; open a [`Document`] to amortize parsing across calls.

use jsonref_path::{parse_path, Path};
use serde_json::Value;

use crate::document::Document;
use crate::error::Error;

/// Where a read takes its JSON from.
#[derive(Debug, Clone, Copy)]
pub enum JsonSource<'a> {
    /// An open document.
    Document(&'a Document),
    /// JSON text, parsed for this call only.
    Text(&'a str),
}

impl<'a> From<&'a Document> for JsonSource<'a> {
    fn from(doc: &'a Document) -> Self {
        JsonSource::Document(doc)
    }
}

impl<'a> From<&'a str> for JsonSource<'a> {
    fn from(text: &'a str) -> Self {
        JsonSource::Text(text)
    }
}

impl<'a> From<&'a String> for JsonSource<'a> {
    fn from(text: &'a String) -> Self {
        JsonSource::Text(text)
    }
}

/// Read the value at a dotted `path`.
///
/// # Example
///
/// ```
/// use jsonref::json_get;
/// use serde_json::json;
///
/// let text = r#"{"users":[{"id":0,"age":30}]}"#;
/// assert_eq!(json_get(text, "users.0.age").unwrap(), json!(30));
/// ```
pub fn json_get<'a>(source: impl Into<JsonSource<'a>>, path: &str) -> Result<Value, Error> {
    match source.into() {
        JsonSource::Document(doc) => doc.get_str(path),
        JsonSource::Text(text) => json_get_compiled(JsonSource::Text(text), &parse_path(path)?),
    }
}

/// Read the value at a path compiled with [`json_compile_path`].
///
/// The path is checked against the source document's `max_depth`, as a path
/// string would be.
pub fn json_get_compiled<'a>(
    source: impl Into<JsonSource<'a>>,
    path: &Path,
) -> Result<Value, Error> {
    let opened;
    let doc = match source.into() {
        JsonSource::Document(doc) => doc,
        JsonSource::Text(text) => {
            opened = Document::open(text)?;
            &opened
        }
    };
    doc.check_path(path)?;
    Ok(doc.get(path)?)
}

/// Write `value` at `path` in place and return the same document.
pub fn json_set<'d>(
    doc: &'d mut Document,
    path: &str,
    value: Value,
) -> Result<&'d mut Document, Error> {
    doc.set_str(path, value)?;
    Ok(doc)
}

/// Text in, text out: parse `text`, write `value` at `path` and render.
///
/// ```
/// use jsonref::json_set_str;
/// use serde_json::json;
///
/// let out = json_set_str(r#"{"a":1}"#, "b.0", json!("x")).unwrap();
/// assert_eq!(out, r#"{"a":1,"b":["x"]}"#);
/// ```
pub fn json_set_str(text: &str, path: &str, value: Value) -> Result<String, Error> {
    let path = parse_path(path)?;
    let mut doc = Document::open(text)?;
    doc.set(&path, value)?;
    Ok(doc.into_text())
}

/// Apply `(path, value)` updates atomically.
///
/// Every path is parsed before anything is written, so a malformed path
/// leaves the document untouched as well.
pub fn json_set_batch<'d, I, S>(
    doc: &'d mut Document,
    updates: I,
) -> Result<&'d mut Document, Error>
where
    I: IntoIterator<Item = (S, Value)>,
    S: AsRef<str>,
{
    let updates = updates
        .into_iter()
        .map(|(path, value)| doc.parse_path(path.as_ref()).map(|path| (path, value)))
        .collect::<Result<Vec<_>, _>>()?;
    doc.set_batch(updates)?;
    Ok(doc)
}

/// Parse a path once for reuse with [`json_get_compiled`] or
/// [`Document::get`] / [`Document::set`].
pub fn json_compile_path(path: &str) -> Result<Path, Error> {
    Ok(parse_path(path)?)
}
