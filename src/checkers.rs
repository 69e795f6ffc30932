/// Check if a scheme token is acceptable: ASCII letters only.
/// An empty token passes, matching how `://host` is treated.
pub fn is_scheme_token(token: &str) -> bool {
    token.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Check if a query value looks like an absolute URL (`letters://something`).
/// The part after `://` must be non-empty and must not contain a line break.
pub fn is_absolute_url(value: &str) -> bool {
    let scheme_len = value
        .bytes()
        .position(|b| !b.is_ascii_alphabetic())
        .unwrap_or(value.len());
    if scheme_len == 0 {
        return false;
    }

    value[scheme_len..]
        .strip_prefix("://")
        .is_some_and(|rest| !rest.is_empty() && !rest.chars().any(is_line_terminator))
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
