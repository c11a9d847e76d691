const HEX: &[u8; 16] = b"0123456789abcdef";

/// Append the escaped form of `s` to `out`, without surrounding quotes.
///
/// This escapes:
/// - Control characters (0x00-0x1F), using the short forms where JSON has one
/// - Double quote (0x22)
/// - Backslash (0x5C)
///
/// Everything else, including non-ASCII text and DEL, is copied verbatim.
/// The output matches `serde_json`'s compact string encoding.
///
/// # Examples
///
/// ```
/// use jsonref_util::strings::escape_into;
///
/// let mut out = String::new();
/// escape_into(&mut out, "say \"hi\"\n");
/// assert_eq!(out, "say \\\"hi\\\"\\n");
/// ```
pub fn escape_into(out: &mut String, s: &str) {
    let bytes = s.as_bytes();
    let mut last = 0;

    for (i, &b) in bytes.iter().enumerate() {
        if b >= 0x20 && b != b'"' && b != b'\\' {
            continue;
        }

        // Only ASCII bytes are escaped, so `i` is always a char boundary.
        out.push_str(&s[last..i]);
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x08 => out.push_str("\\b"),
            0x0C => out.push_str("\\f"),
            _ => {
                out.push_str("\\u00");
                out.push(HEX[(b >> 4) as usize] as char);
                out.push(HEX[(b & 0x0f) as usize] as char);
            }
        }
        last = i + 1;
    }

    out.push_str(&s[last..]);
}

/// Append `s` to `out` as a quoted JSON string literal.
pub fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    escape_into(out, s);
    out.push('"');
}
