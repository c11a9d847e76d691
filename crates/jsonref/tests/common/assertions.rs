use jsonref::Document;
use serde_json::Value;

/// `to_text` agrees with the baseline encoder, with the read-only render and
/// with a fresh parse of its own output.
pub fn assert_text_consistent(doc: &mut Document) {
    let expected = serde_json::to_string(&doc.to_value()).unwrap();
    let rendered = doc.render();
    let text = doc.to_text().to_owned();
    assert_eq!(text, expected);
    assert_eq!(rendered, expected);

    let reparsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed, doc.to_value());
}
