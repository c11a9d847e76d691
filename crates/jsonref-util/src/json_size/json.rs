/// Computes the encoded size of a JSON string literal, quotes included.
///
/// Agrees byte for byte with [`crate::strings::write_quoted`].
///
/// # Examples
///
/// ```
/// use jsonref_util::json_size::string_size;
///
/// assert_eq!(string_size("hello"), 7);
/// assert_eq!(string_size("a\"b"), 6);
/// assert_eq!(string_size("\u{0001}"), 8);
/// ```
pub fn string_size(s: &str) -> usize {
    let mut size = 2; // Opening and closing quotes

    for &b in s.as_bytes() {
        size += match b {
            b'"' | b'\\' | b'\n' | b'\r' | b'\t' | 0x08 | 0x0C => 2,
            0x00..=0x1F => 6, // \u00XX
            _ => 1,
        };
    }

    size
}
