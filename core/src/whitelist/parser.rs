//! Body list text format
//!
//! One metadata path per line. Empty lines and lines starting with `#` or
//! `//` are comments. Every other line is kept verbatim if it contains a
//! metadata-like path (`(\w+/)*\w+` anywhere in the line), and dropped
//! silently otherwise.

/// Parse body list content into its sorted entries.
pub fn parse_body_list(content: &str) -> Vec<String> {
    let mut entries: Vec<String> = content
        .lines()
        .filter(|line| !is_comment(line))
        .filter(|line| contains_metadata_path(line))
        .map(str::to_string)
        .collect();
    entries.sort();
    entries
}

#[inline]
pub fn is_comment(line: &str) -> bool {
    line.is_empty() || line.starts_with('#') || line.starts_with("//")
}

/// Whether `(\w+/)*\w+` matches somewhere in the line.
///
/// An unanchored match of that grammar needs exactly one thing: a word
/// character. The optional `segment/` prefixes can always match zero times.
pub fn contains_metadata_path(line: &str) -> bool {
    line.chars().any(is_word_char)
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
