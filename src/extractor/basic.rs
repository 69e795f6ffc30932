use crate::checkers::is_scheme_token;
use crate::scheme::default_port;

/// `://` must start before this byte offset to count as a protocol marker.
pub const MAX_PROTOCOL_OFFSET: usize = 10;

/// Protocol and authority pieces of a URL (zero-copy)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicParts<'a> {
    pub protocol: &'a str,
    pub host: &'a str,
    pub hostname: &'a str,
    /// Explicit port, or the scheme's default port
    pub port: &'a str,
}

/// Extract protocol, host, hostname and port.
///
/// Anything that does not start with `letters://` within the first
/// [`MAX_PROTOCOL_OFFSET`] bytes yields all-empty parts.
///
/// # Examples
///
/// ```
/// use urlsculpt::extract_basic;
///
/// let parts = extract_basic("https://example.com/path");
/// assert_eq!(parts.protocol, "https");
/// assert_eq!(parts.hostname, "example.com");
/// assert_eq!(parts.port, "443");
/// ```
pub fn extract_basic(url: &str) -> BasicParts<'_> {
    let Some(marker) = url.find("://") else {
        return BasicParts::default();
    };
    if marker >= MAX_PROTOCOL_OFFSET {
        return BasicParts::default();
    }

    let protocol = &url[..marker];
    if !is_scheme_token(protocol) {
        return BasicParts::default();
    }

    // Host stops at the path, and never swallows a query or fragment
    let authority = &url[marker + 3..];
    let host_end = authority.find(['/', '?', '#']).unwrap_or(authority.len());
    let host = &authority[..host_end];

    let mut host_split = host.split(':');
    let hostname = host_split.next().unwrap_or("");
    let port = match host_split.next() {
        Some(port) if !port.is_empty() => port,
        _ => default_port(protocol),
    };

    BasicParts {
        protocol,
        host,
        hostname,
        port,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basic() {
        let parts = extract_basic("http://example.com:8080/api?a=1");
        assert_eq!(parts.protocol, "http");
        assert_eq!(parts.host, "example.com:8080");
        assert_eq!(parts.hostname, "example.com");
        assert_eq!(parts.port, "8080");
    }

    #[test]
    fn test_default_ports() {
        assert_eq!(extract_basic("ftp://files.example.com/").port, "21");
        assert_eq!(extract_basic("http://example.com/path").port, "80");
        assert_eq!(extract_basic("ws://example.com/socket").port, "80");
        assert_eq!(extract_basic("https://example.com/path").port, "443");
        assert_eq!(extract_basic("wss://example.com/socket").port, "443");
        assert_eq!(extract_basic("gopher://example.com/").port, "");
        // An empty explicit port also falls back to the default
        assert_eq!(extract_basic("http://example.com:/").port, "80");
    }

    #[test]
    fn test_host_without_path() {
        let parts = extract_basic("https://example.com");
        assert_eq!(parts.host, "example.com");

        let parts = extract_basic("https://example.com?a=1#top");
        assert_eq!(parts.host, "example.com");
    }

    #[test]
    fn test_protocol_too_far() {
        // "://" starts at byte 10
        assert_eq!(
            extract_basic("abcdefghij://example.com/"),
            BasicParts::default()
        );
        assert_eq!(extract_basic("abcdefghi://example.com/").protocol, "abcdefghi");
    }

    #[test]
    fn test_invalid_scheme_token() {
        assert_eq!(extract_basic("h2c://example.com/"), BasicParts::default());
        assert_eq!(extract_basic("/api/users"), BasicParts::default());
        assert_eq!(extract_basic(""), BasicParts::default());
    }

    #[test]
    fn test_empty_scheme_token() {
        let parts = extract_basic("://example.com/a");
        assert_eq!(parts.protocol, "");
        assert_eq!(parts.host, "example.com");
        assert_eq!(parts.port, "");
    }
}
