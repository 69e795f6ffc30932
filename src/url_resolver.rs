use crate::compat::{BTreeMap, String, ToString, Vec, format};
use crate::config::ParserConfig;
use crate::parse_result::ParseResult;

/// Where [`UrlParser::resolver`](crate::UrlParser::resolver) takes its URL from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResolverSource {
    /// An existing result, used as given
    Snapshot(ParseResult),
    /// A URL that is parsed (and logged in history) first
    Url(String),
    /// A copy of the most recent history entry
    #[default]
    LastParse,
}

impl From<String> for ResolverSource {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<&str> for ResolverSource {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<ParseResult> for ResolverSource {
    fn from(result: ParseResult) -> Self {
        Self::Snapshot(result)
    }
}

/// Mutable view over one parsed URL
///
/// Path segments and query pairs can be inserted or removed at positions
/// anchored on existing entries. `pathname`, `queryname` and `url` are rebuilt
/// before every editing method returns.
///
/// An anchor is a `search` value plus an `order`: the `order`-th occurrence
/// (0-indexed) of `search`. Edits whose anchor does not exist leave the
/// resolver untouched.
///
/// # Examples
///
/// ```
/// use urlsculpt::UrlParser;
///
/// let mut parser = UrlParser::new();
/// let mut resolver = parser.resolver("http://a.com/api/users?name=Tom&name=Jerry&age=20");
///
/// resolver
///     .append_param("posts", Some("users"), 0)
///     .remove_query("name", 1);
///
/// assert_eq!(resolver.url(), "http://a.com/api/users/posts?name=Tom&age=20");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlResolver {
    url_sep: Option<char>,
    query_sep: char,
    equal_sep: char,
    result: ParseResult,
}

impl UrlResolver {
    /// Wrap `result`, recovering which url separator opened its queryname.
    /// Without a match the first configured separator is used, so a query
    /// added later still gets a boundary.
    pub fn new(result: ParseResult, config: &ParserConfig) -> Self {
        let url_sep = config
            .url_seps
            .iter()
            .copied()
            .find(|&sep| result.queryname.starts_with(sep))
            .or_else(|| config.url_seps.first().copied());

        Self {
            url_sep,
            query_sep: config.query_sep,
            equal_sep: config.equal_sep,
            result,
        }
    }

    /// Empty anchors count as "no anchor".
    fn anchor(search: Option<&str>) -> Option<&str> {
        search.filter(|search| !search.is_empty())
    }

    /// Insert `segment` after the anchor, or at the end without one.
    pub fn append_param(&mut self, segment: &str, search: Option<&str>, order: usize) -> &mut Self {
        let index = match Self::anchor(search) {
            Some(search) => match self.result.params.position(search, order) {
                Some(index) => index + 1,
                None => return self,
            },
            None => self.result.params.len(),
        };

        self.result.params.insert(index, segment);
        self.rebuild();
        self
    }

    /// Insert `segment` before the anchor, or at the start without one.
    pub fn prepend_param(&mut self, segment: &str, search: Option<&str>, order: usize) -> &mut Self {
        let index = match Self::anchor(search) {
            Some(search) => match self.result.params.position(search, order) {
                Some(index) => index,
                None => return self,
            },
            None => 0,
        };

        self.result.params.insert(index, segment);
        self.rebuild();
        self
    }

    /// Remove the `order`-th occurrence of `segment`.
    pub fn remove_param(&mut self, segment: &str, order: usize) -> &mut Self {
        if self.result.params.remove(segment, order) {
            self.rebuild();
        }
        self
    }

    /// Remove every occurrence of `segment`.
    pub fn remove_all_param(&mut self, segment: &str) -> &mut Self {
        if self.result.params.remove_all(segment) {
            self.rebuild();
        }
        self
    }

    /// Insert `name` after the anchor (or at the end) of the query sequence.
    ///
    /// `value` goes to index `order + 1` of the values of `name`, clamped to
    /// their length, so the order among repeated keys is chosen separately
    /// from the position in the query.
    pub fn append_query(
        &mut self,
        name: &str,
        value: &str,
        search: Option<&str>,
        order: usize,
    ) -> &mut Self {
        let index = match Self::anchor(search) {
            Some(search) => match self.result.query.position(search, order) {
                Some(index) => index + 1,
                None => return self,
            },
            None => self.result.query.len(),
        };

        self.result.query.insert(index, name, order + 1, value);
        self.rebuild();
        self
    }

    /// Insert `name` before the anchor (or at the start) of the query
    /// sequence; `value` goes to index `order` of the values of `name`.
    pub fn prepend_query(
        &mut self,
        name: &str,
        value: &str,
        search: Option<&str>,
        order: usize,
    ) -> &mut Self {
        let index = match Self::anchor(search) {
            Some(search) => match self.result.query.position(search, order) {
                Some(index) => index,
                None => return self,
            },
            None => 0,
        };

        self.result.query.insert(index, name, order, value);
        self.rebuild();
        self
    }

    /// Remove the `order`-th occurrence of `name` and its `order`-th value.
    pub fn remove_query(&mut self, name: &str, order: usize) -> &mut Self {
        if self.result.query.remove(name, order) {
            self.rebuild();
        }
        self
    }

    /// Remove every occurrence of `name` and all of its values.
    pub fn remove_all_query(&mut self, name: &str) -> &mut Self {
        if self.result.query.remove_all(name) {
            self.rebuild();
        }
        self
    }

    fn rebuild(&mut self) {
        self.result.pathname = self.serialize_pathname();
        self.result.queryname = self.serialize_queryname();
        self.result.url = self.serialize_url();
        log::trace!("rebuilt url {:?}", self.result.url);
    }

    /// `/` followed by the segments joined with `/`
    pub fn serialize_pathname(&self) -> String {
        self.result.params.serialize()
    }

    /// The url separator followed by `name=value` pairs in query order,
    /// empty once no pairs are left
    pub fn serialize_queryname(&self) -> String {
        self.result
            .query
            .serialize(self.url_sep, self.query_sep, self.equal_sep)
    }

    /// `protocol://host` followed by pathname, queryname and hash.
    /// A URL without protocol and host starts at its pathname.
    pub fn serialize_url(&self) -> String {
        let r = &self.result;
        if r.protocol.is_empty() && r.host.is_empty() {
            return format!("{}{}{}", r.pathname, r.queryname, r.hash);
        }
        format!(
            "{}://{}{}{}{}",
            r.protocol, r.host, r.pathname, r.queryname, r.hash
        )
    }

    pub fn url_sep(&self) -> Option<char> {
        self.url_sep
    }

    pub fn query_sep(&self) -> char {
        self.query_sep
    }

    pub fn equal_sep(&self) -> char {
        self.equal_sep
    }

    pub fn origin_url(&self) -> &str {
        &self.result.origin_url
    }

    pub fn url(&self) -> &str {
        &self.result.url
    }

    pub fn protocol(&self) -> &str {
        &self.result.protocol
    }

    pub fn host(&self) -> &str {
        &self.result.host
    }

    pub fn hostname(&self) -> &str {
        &self.result.hostname
    }

    pub fn port(&self) -> &str {
        &self.result.port
    }

    pub fn hash(&self) -> &str {
        &self.result.hash
    }

    pub fn pathname(&self) -> &str {
        &self.result.pathname
    }

    pub fn param_sequence(&self) -> &[String] {
        self.result.param_sequence()
    }

    pub fn params(&self) -> &BTreeMap<String, usize> {
        self.result.params()
    }

    pub fn queryname(&self) -> &str {
        &self.result.queryname
    }

    pub fn query_sequence(&self) -> &[String] {
        self.result.query_sequence()
    }

    pub fn query(&self) -> &BTreeMap<String, Vec<String>> {
        self.result.query()
    }

    pub fn as_parse_result(&self) -> &ParseResult {
        &self.result
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> ParseResult {
        self.result.clone()
    }

    pub fn into_parse_result(self) -> ParseResult {
        self.result
    }
}

impl core::fmt::Display for UrlResolver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.result.url)
    }
}
