use jsonref_util::{string_size, write_quoted};
use proptest::prelude::*;

fn quoted(s: &str) -> String {
    let mut out = String::new();
    write_quoted(&mut out, s);
    out
}

#[test]
fn escape_matches_serde_json_matrix() {
    let cases = [
        "",
        "plain",
        "quote \" and backslash \\",
        "controls \u{0000}\u{0001}\u{001f}",
        "short \u{0008}\u{000c}\n\r\t",
        "del \u{007f}",
        "unicode é 日本語 🦀",
    ];

    for case in cases {
        let expected = serde_json::to_string(case).expect("serialize");
        assert_eq!(quoted(case), expected, "case {case:?}");
        assert_eq!(string_size(case), expected.len(), "size of {case:?}");
    }
}

proptest! {
    #[test]
    fn escape_matches_serde_json(s in any::<String>()) {
        let expected = serde_json::to_string(&s).expect("serialize");
        prop_assert_eq!(quoted(&s), expected.clone());
        prop_assert_eq!(string_size(&s), expected.len());
    }
}
