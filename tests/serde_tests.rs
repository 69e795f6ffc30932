#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Snapshot serialization with the `serde` feature
use urlsculpt::{ParamSequence, ParseResult, ParserConfig, QuerySequence, UrlParser};

#[test]
fn test_parse_result_round_trip() {
    let mut parser = UrlParser::new();
    let result = parser.parse("https://a.com:8443/api/users?name=Tom&age=20&name=Jerry#top");

    let json = serde_json::to_string(&result).unwrap();
    let restored: ParseResult = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, result);
    assert_eq!(restored.query()["name"], ["Tom", "Jerry"]);
}

#[test]
fn test_restored_snapshot_feeds_resolver() {
    let mut parser = UrlParser::new();
    let json = serde_json::to_string(&parser.parse("http://a.com/a/b?k=v")).unwrap();

    let snapshot: ParseResult = serde_json::from_str(&json).unwrap();
    let mut resolver = parser.resolver(snapshot);
    resolver.append_param("c", Some("b"), 0).append_query("n", "1", None, 0);
    assert_eq!(resolver.url(), "http://a.com/a/b/c?k=v&n=1");
}

#[test]
fn test_sequences_are_rebuilt_from_order() {
    let params: ParamSequence = serde_json::from_str(r#"["x","y","x"]"#).unwrap();
    assert_eq!(params.count("x"), 2);
    assert_eq!(params.serialize(), "/x/y/x");

    let query: QuerySequence = serde_json::from_str(r#"[["a","1"],["b","2"],["a","3"]]"#).unwrap();
    assert_eq!(query.names(), ["a", "b", "a"]);
    assert_eq!(query.serialize(Some('?'), '&', '='), "?a=1&b=2&a=3");
}

#[test]
fn test_config_round_trip() {
    let config = ParserConfig::new().with_url_seps(['?', ';']).with_query_sep(',');
    let json = serde_json::to_string(&config).unwrap();
    let restored: ParserConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, config);
    assert!(UrlParser::with_config(restored).is_ok());
}
