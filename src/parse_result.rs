use crate::compat::{BTreeMap, String, Vec};
use crate::sequence::{ParamSequence, QuerySequence};

/// Snapshot of one parse call
///
/// Layout for `"https://example.com:8080/api/users?name=Tom&name=Jerry#top"`:
/// - `protocol`: `"https"`
/// - `host`: `"example.com:8080"`, `hostname`: `"example.com"`, `port`: `"8080"`
/// - `pathname`: `"/api/users"`
/// - `queryname`: `"?name=Tom&name=Jerry"`
/// - `hash`: `"#top"`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    pub(crate) origin_url: String,
    pub(crate) url: String,
    pub(crate) protocol: String,
    pub(crate) host: String,
    pub(crate) hostname: String,
    pub(crate) port: String,
    pub(crate) hash: String,
    pub(crate) pathname: String,
    pub(crate) params: ParamSequence,
    pub(crate) queryname: String,
    pub(crate) query: QuerySequence,
}

impl ParseResult {
    /// The input exactly as given to the parser
    pub fn origin_url(&self) -> &str {
        &self.origin_url
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Scheme without `://`, empty when absent
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Hostname plus port, as written
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Explicit port, or the scheme default
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Fragment including the leading `#`
    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn param_sequence(&self) -> &[String] {
        self.params.as_slice()
    }

    pub fn params(&self) -> &BTreeMap<String, usize> {
        self.params.counts()
    }

    /// Query string including the boundary character, hash excluded
    pub fn queryname(&self) -> &str {
        &self.queryname
    }

    pub fn query_sequence(&self) -> &[String] {
        self.query.names()
    }

    pub fn query(&self) -> &BTreeMap<String, Vec<String>> {
        self.query.values()
    }

    /// Path segments together with their counts
    pub fn param_entries(&self) -> &ParamSequence {
        &self.params
    }

    /// Query names together with their values
    pub fn query_entries(&self) -> &QuerySequence {
        &self.query
    }
}

impl core::fmt::Display for ParseResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.url)
    }
}
