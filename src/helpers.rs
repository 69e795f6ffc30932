/// Find the first `needle` at or after byte offset `from`.
/// ASCII separators go through SIMD-accelerated memchr.
pub fn find_char(haystack: &str, needle: char, from: usize) -> Option<usize> {
    let tail = haystack.get(from..)?;
    let found = if needle.is_ascii() {
        memchr::memchr(needle as u8, tail.as_bytes())
    } else {
        tail.find(needle)
    };
    found.map(|pos| pos + from)
}

/// Byte length of the char starting at `index`, 0 past the end.
pub fn char_len_at(input: &str, index: usize) -> usize {
    input
        .get(index..)
        .and_then(|rest| rest.chars().next())
        .map_or(0, char::len_utf8)
}

/// Cut `input` at the first occurrence of `marker`.
/// An empty marker falls back to the `#` hash marker.
pub fn truncate_at<'a>(input: &'a str, marker: &str) -> &'a str {
    let cut = if marker.is_empty() {
        find_char(input, '#', 0)
    } else {
        input.find(marker)
    };
    cut.map_or(input, |pos| &input[..pos])
}
