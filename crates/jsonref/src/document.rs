//! The document handle.
//!
//! A [`Document`] is parsed once and then read and written in place. Its
//! text form is produced lazily by [`Document::to_text`], which re-renders
//! only the containers changed since the previous call.

use std::fmt;
use std::str::FromStr;

use jsonref_path::{parse_path_with_limit, validate_path, Path, PathError};
use serde_json::Value;
use tracing::{debug, error};

use crate::access;
use crate::error::{AccessError, BatchError, Error, MutateError, ParseError};
use crate::mutate;
use crate::node::{self, Node};
use crate::options::{DocumentOptions, MAX_NESTING};
use crate::render;

/// A parsed JSON document addressable by path.
///
/// # Example
///
/// ```
/// use jsonref::{Document, Path};
/// use serde_json::json;
///
/// let mut doc = Document::open(r#"{"users":[{"id":0,"age":30}]}"#).unwrap();
/// let age = Path::parse("users.0.age").unwrap();
///
/// assert_eq!(doc.get(&age).unwrap(), json!(30));
/// doc.set(&age, json!(31)).unwrap();
/// assert_eq!(doc.to_text(), r#"{"users":[{"id":0,"age":31}]}"#);
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    root: Node,
    options: DocumentOptions,
}

impl Document {
    /// Parse `text` with default options.
    pub fn open(text: &str) -> Result<Self, ParseError> {
        Self::open_with(text, DocumentOptions::default())
    }

    pub fn open_with(text: &str, options: DocumentOptions) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(text)?;
        let root = Node::from_value(value);
        debug!(
            target: "jsonref::document",
            bytes = text.len(),
            nodes = root.count(),
            "opened document"
        );
        Ok(Self { root, options })
    }

    /// An empty object document.
    pub fn empty() -> Self {
        Self::with_options(DocumentOptions::default())
    }

    /// An empty object document with the given options.
    pub fn with_options(options: DocumentOptions) -> Self {
        Self {
            root: Node::empty_object(),
            options,
        }
    }

    /// Build a document from a value.
    ///
    /// Fails with `ParseError::TooDeep` when the value nests deeper than
    /// [`MAX_NESTING`], since its text could not be opened again.
    pub fn from_value(value: Value) -> Result<Self, ParseError> {
        Self::from_value_with(value, DocumentOptions::default())
    }

    pub fn from_value_with(value: Value, options: DocumentOptions) -> Result<Self, ParseError> {
        let depth = node::nesting(&value);
        if depth > MAX_NESTING {
            return Err(ParseError::TooDeep {
                depth,
                max: MAX_NESTING,
            });
        }
        Ok(Self {
            root: Node::from_value(value),
            options,
        })
    }

    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    /// Parse a path string under this document's depth limit.
    pub fn parse_path(&self, path: &str) -> Result<Path, ParseError> {
        Ok(parse_path_with_limit(path, self.options.max_depth)?)
    }

    /// Check a prebuilt path against this document's depth limit.
    pub fn check_path(&self, path: &Path) -> Result<(), PathError> {
        validate_path(path, self.options.max_depth)
    }

    /// Copy of the value at `path`.
    ///
    /// A missing key is `Err(KeyNotFound)`; a key holding `null` is
    /// `Ok(Value::Null)`.
    pub fn get(&self, path: &Path) -> Result<Value, AccessError> {
        access::get(&self.root, path)
    }

    /// [`Document::get`] with a path string.
    pub fn get_str(&self, path: &str) -> Result<Value, Error> {
        let path = self.parse_path(path)?;
        Ok(self.get(&path)?)
    }

    /// Whether `path` addresses an existing slot.
    pub fn contains(&self, path: &Path) -> bool {
        access::contains(&self.root, path)
    }

    /// Write `value` at `path`.
    ///
    /// Missing intermediate containers are created: an object, or an array
    /// when the following segment is an index. An empty path replaces the
    /// whole document. A failed write leaves the document unchanged.
    pub fn set(&mut self, path: &Path, value: Value) -> Result<(), MutateError> {
        mutate::set(&mut self.root, path, value, &self.options).map(|_| ())
    }

    /// [`Document::set`] with a path string.
    pub fn set_str(&mut self, path: &str, value: Value) -> Result<(), Error> {
        let path = self.parse_path(path)?;
        Ok(self.set(&path, value)?)
    }

    /// Apply several writes atomically.
    ///
    /// Updates are applied in order. If one fails, every earlier update of
    /// the batch is undone and the document is left exactly as it was.
    pub fn set_batch<I>(&mut self, updates: I) -> Result<(), BatchError>
    where
        I: IntoIterator<Item = (Path, Value)>,
    {
        let mut journal = Vec::new();
        for (index, (path, value)) in updates.into_iter().enumerate() {
            match mutate::set(&mut self.root, &path, value, &self.options) {
                Ok(displaced) => journal.push(displaced.into_undo(path)),
                Err(source) => {
                    debug!(
                        target: "jsonref::document",
                        index,
                        applied = journal.len(),
                        error = %source,
                        "batch update failed, rolling back"
                    );
                    self.rollback(journal);
                    return Err(BatchError { index, source });
                }
            }
        }
        Ok(())
    }

    fn rollback(&mut self, journal: Vec<mutate::Undo>) {
        for record in journal.into_iter().rev() {
            if let Err(e) = mutate::undo(&mut self.root, record) {
                error!(target: "jsonref::document", error = %e, "batch rollback step failed");
            }
        }
    }

    /// Compact JSON text of the document.
    ///
    /// Only containers changed since the last call are re-rendered; all
    /// other subtrees are spliced in from their cached text. Calling this
    /// twice without a write in between returns the same text.
    pub fn to_text(&mut self) -> &str {
        if !self.root.has_fragment() {
            let stats = render::refresh_root(&mut self.root);
            debug!(
                target: "jsonref::render",
                rendered = stats.rendered,
                reused = stats.reused,
                bytes = self.root.size_hint(),
                "rendered document"
            );
        }
        self.root.fragment().unwrap_or_default()
    }

    /// Consume the document and return its text.
    pub fn into_text(mut self) -> String {
        self.to_text();
        match self.root.take_fragment() {
            Some(text) => text,
            None => render::render(&self.root),
        }
    }

    /// Render without updating any cache. Clean subtrees are still reused.
    pub fn render(&self) -> String {
        render::render(&self.root)
    }

    /// Whether the document changed since the last [`Document::to_text`].
    pub fn is_dirty(&self) -> bool {
        !self.root.has_fragment()
    }

    pub fn to_value(&self) -> Value {
        self.root.to_value()
    }

    pub fn into_value(self) -> Value {
        self.root.into_value()
    }

    /// Release the document. The handle cannot be used afterwards.
    pub fn close(self) {}
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.fragment() {
            Some(text) => f.write_str(text),
            None => f.write_str(&self.render()),
        }
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::open(s)
    }
}

impl TryFrom<Value> for Document {
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavError;
    use jsonref_path::PathError;
    use serde_json::json;

    fn p(text: &str) -> Path {
        Path::parse(text).unwrap()
    }

    #[test]
    fn open_and_to_text() {
        let mut doc = Document::open(r#"{ "a" : [1, 2], "b": null }"#).unwrap();
        assert!(doc.is_dirty());
        assert_eq!(doc.to_text(), r#"{"a":[1,2],"b":null}"#);
        assert!(!doc.is_dirty());
    }

    #[test]
    fn open_rejects_bad_json() {
        assert!(matches!(Document::open("{"), Err(ParseError::Json(_))));
        assert!(matches!(Document::open(""), Err(ParseError::Json(_))));
    }

    #[test]
    fn open_scalar_roots() {
        assert_eq!(Document::open("null").unwrap().to_value(), Value::Null);
        let mut doc = Document::open(" 42 ").unwrap();
        assert_eq!(doc.to_text(), "42");
    }

    #[test]
    fn empty_document_is_an_object() {
        let mut doc = Document::empty();
        assert_eq!(doc.to_text(), "{}");
        assert_eq!(Document::default().to_value(), json!({}));
    }

    #[test]
    fn to_text_is_idempotent() {
        let mut doc = Document::open(r#"{"a":{"b":1}}"#).unwrap();
        let first = doc.to_text().to_owned();
        let second = doc.to_text().to_owned();
        assert_eq!(first, second);
    }

    #[test]
    fn set_marks_dirty_and_to_text_reflects_it() {
        let mut doc = Document::open(r#"{"a":{"b":1},"c":[true]}"#).unwrap();
        doc.to_text();
        doc.set(&p("a.b"), json!("x")).unwrap();
        assert!(doc.is_dirty());
        assert_eq!(doc.to_text(), r#"{"a":{"b":"x"},"c":[true]}"#);
    }

    #[test]
    fn set_root_to_scalar() {
        let mut doc = Document::open(r#"{"a":1}"#).unwrap();
        doc.to_text();
        doc.set(&Path::root(), json!("s")).unwrap();
        assert_eq!(doc.to_text(), "\"s\"");
    }

    #[test]
    fn get_str_and_set_str() {
        let mut doc = Document::empty();
        doc.set_str("a.b", json!(1)).unwrap();
        assert_eq!(doc.get_str("a.b").unwrap(), json!(1));
        assert!(matches!(
            doc.get_str("a..b"),
            Err(Error::Parse(ParseError::Path(PathError::EmptySegment { position: 1 })))
        ));
        assert!(matches!(
            doc.get_str("a.c"),
            Err(Error::Access(NavError::KeyNotFound { .. }))
        ));
    }

    #[test]
    fn max_depth_applies_to_path_strings() {
        let options = DocumentOptions::default().with_max_depth(2);
        let doc = Document::from_value_with(json!({}), options).unwrap();
        assert!(matches!(
            doc.get_str("a.b.c"),
            Err(Error::Parse(ParseError::Path(PathError::TooDeep { depth: 3, max: 2 })))
        ));
    }

    #[test]
    fn pad_policy_from_options() {
        let mut doc = Document::open_with(r#"{"arr":[]}"#, DocumentOptions::pad()).unwrap();
        doc.set(&p("arr.2"), json!(1)).unwrap();
        assert_eq!(doc.to_text(), r#"{"arr":[null,null,1]}"#);
    }

    #[test]
    fn batch_applies_in_order() {
        let mut doc = Document::empty();
        doc.set_batch([(p("a"), json!(1)), (p("a"), json!(2)), (p("b.0"), json!(3))])
            .unwrap();
        assert_eq!(doc.to_value(), json!({"a": 2, "b": [3]}));
    }

    #[test]
    fn batch_rolls_back_on_failure() {
        let text = r#"{"x":1,"arr":[1,2,3],"o":{"k":"v"}}"#;
        let mut doc = Document::open(text).unwrap();
        doc.to_text();

        let err = doc
            .set_batch([
                (p("x"), json!(10)),
                (p("new.deep"), json!(true)),
                (p("o.k"), json!(null)),
                (p("arr.9"), json!(0)),
            ])
            .unwrap_err();

        assert_eq!(err.index, 3);
        assert!(matches!(err.source, MutateError::IndexOutOfBounds { index: 9, len: 3, .. }));
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn display_matches_to_text() {
        let mut doc = Document::open(r#"{"a":[1]}"#).unwrap();
        assert_eq!(doc.to_string(), r#"{"a":[1]}"#);
        doc.set(&p("a.1"), json!(2)).unwrap();
        assert_eq!(doc.to_string(), doc.to_text().to_owned());
    }

    #[test]
    fn into_text_and_into_value() {
        let doc: Document = r#"{"k":"v"}"#.parse().unwrap();
        assert_eq!(doc.clone().into_text(), r#"{"k":"v"}"#);
        assert_eq!(doc.into_value(), json!({"k": "v"}));
    }

    #[test]
    fn check_path_uses_max_depth() {
        let options = DocumentOptions::default().with_max_depth(2);
        let doc = Document::with_options(options);
        assert!(doc.check_path(&p("a.b")).is_ok());
        assert_eq!(
            doc.check_path(&p("a.b.c")),
            Err(PathError::TooDeep { depth: 3, max: 2 })
        );
    }

    #[test]
    fn from_value_rejects_unparseable_nesting() {
        let mut deep = json!(1);
        for _ in 0..=MAX_NESTING {
            deep = json!([deep]);
        }
        assert!(matches!(
            Document::from_value(deep),
            Err(ParseError::TooDeep { depth, max: MAX_NESTING }) if depth == MAX_NESTING + 1
        ));

        let doc = Document::try_from(json!([[1]])).unwrap();
        assert_eq!(doc.to_value(), json!([[1]]));
    }

    #[test]
    fn close_consumes() {
        let doc = Document::empty();
        doc.close();
    }
}
