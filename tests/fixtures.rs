#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Data-driven parse tests
///
/// Cases live in `fixtures/parse_cases.json`; bare strings are comments.
use serde::Deserialize;
use std::collections::BTreeMap;
use urlsculpt::{ParseResult, UrlParser};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FixtureEntry {
    Case(ParseCase),
    Comment(String),
}

#[derive(Debug, Deserialize)]
struct ParseCase {
    input: String,
    protocol: String,
    host: String,
    hostname: String,
    port: String,
    hash: String,
    pathname: String,
    queryname: String,
    param_sequence: Vec<String>,
    query_sequence: Vec<String>,
    query: BTreeMap<String, Vec<String>>,
}

fn load_cases() -> Vec<ParseCase> {
    let data = include_str!("./fixtures/parse_cases.json");
    let entries: Vec<FixtureEntry> =
        serde_json::from_str(data).expect("Failed to parse fixture data");
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            FixtureEntry::Case(case) => Some(case),
            FixtureEntry::Comment(_) => None,
        })
        .collect()
}

fn mismatches(case: &ParseCase, result: &ParseResult) -> Vec<String> {
    let mut failures = Vec::new();
    let mut check = |field: &str, expected: &dyn core::fmt::Debug, actual: &dyn core::fmt::Debug| {
        let (expected, actual) = (format!("{expected:?}"), format!("{actual:?}"));
        if expected != actual {
            failures.push(format!("{field}: expected {expected}, got {actual}"));
        }
    };

    check("protocol", &case.protocol, &result.protocol());
    check("host", &case.host, &result.host());
    check("hostname", &case.hostname, &result.hostname());
    check("port", &case.port, &result.port());
    check("hash", &case.hash, &result.hash());
    check("pathname", &case.pathname, &result.pathname());
    check("queryname", &case.queryname, &result.queryname());
    check("param_sequence", &case.param_sequence, &result.param_sequence());
    check("query_sequence", &case.query_sequence, &result.query_sequence());
    check("query", &case.query, result.query());
    failures
}

#[test]
fn test_fixture_cases() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    let mut parser = UrlParser::new();
    let mut failures = Vec::new();
    for case in &cases {
        let result = parser.parse(&case.input);
        for failure in mismatches(case, &result) {
            failures.push(format!("{}: {failure}", case.input));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
    assert_eq!(parser.parse_history().len(), cases.len());
}

#[test]
fn test_fixture_counts_are_consistent() {
    let mut parser = UrlParser::new();
    for case in load_cases() {
        let result = parser.parse(&case.input);
        let total: usize = result.params().values().sum();
        assert_eq!(total, result.param_sequence().len(), "{}", case.input);

        for (name, values) in result.query() {
            let occurrences = result.query_sequence().iter().filter(|n| *n == name).count();
            assert_eq!(values.len(), occurrences, "{}: {name}", case.input);
        }
    }
}
