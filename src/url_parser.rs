use crate::compat::{Box, ToString};
use crate::config::ParserConfig;
use crate::error::Result;
use crate::extractor::{
    DefaultHashExtractor, DefaultParamExtractor, DefaultQueryExtractor, DefaultUrlSlicer,
    HashExtractor, ParamExtractor, QueryExtractor, SliceContext, UrlSlicer, extract_basic,
};
use crate::history::ParseHistory;
use crate::parse_result::ParseResult;
use crate::url_resolver::{ResolverSource, UrlResolver};

/// Configurable URL parser that keeps a log of everything it parsed
///
/// The basic extractor is fixed; hash, slicer, param and query extraction
/// can each be swapped for any implementation of the matching trait,
/// closures included.
///
/// # Examples
///
/// ```
/// use urlsculpt::UrlParser;
///
/// let mut parser = UrlParser::new();
/// let result = parser.parse("http://a.com/api/users?name=Tom&name=Jerry&age=20");
///
/// assert_eq!(result.param_sequence(), ["api", "users"]);
/// assert_eq!(result.query_sequence(), ["name", "name", "age"]);
/// assert_eq!(result.query()["name"], ["Tom", "Jerry"]);
/// assert_eq!(parser.parse_history().len(), 1);
/// ```
pub struct UrlParser {
    config: ParserConfig,
    hash_extractor: Box<dyn HashExtractor>,
    url_slicer: Box<dyn UrlSlicer>,
    param_extractor: Box<dyn ParamExtractor>,
    query_extractor: Box<dyn QueryExtractor>,
    history: ParseHistory,
}

impl Default for UrlParser {
    fn default() -> Self {
        Self::from_valid_config(ParserConfig::default())
    }
}

impl core::fmt::Debug for UrlParser {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UrlParser")
            .field("config", &self.config)
            .field("history", &self.history.len())
            .finish_non_exhaustive()
    }
}

impl UrlParser {
    /// Parser with `?` / `&` / `&` / `=` separators and default extractors
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with custom separators.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](crate::ConfigError) when the separators
    /// collide.
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            log::debug!("rejected parser config {config:?}: {err}");
            return Err(err);
        }
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ParserConfig) -> Self {
        Self {
            config,
            hash_extractor: Box::new(DefaultHashExtractor),
            url_slicer: Box::new(DefaultUrlSlicer),
            param_extractor: Box::new(DefaultParamExtractor),
            query_extractor: Box::new(DefaultQueryExtractor),
            history: ParseHistory::new(),
        }
    }

    pub fn with_hash_extractor(mut self, extractor: impl HashExtractor + 'static) -> Self {
        self.set_hash_extractor(extractor);
        self
    }

    pub fn with_url_slicer(mut self, slicer: impl UrlSlicer + 'static) -> Self {
        self.set_url_slicer(slicer);
        self
    }

    pub fn with_param_extractor(mut self, extractor: impl ParamExtractor + 'static) -> Self {
        self.set_params_extractor(extractor);
        self
    }

    pub fn with_query_extractor(mut self, extractor: impl QueryExtractor + 'static) -> Self {
        self.set_query_extractor(extractor);
        self
    }

    pub fn set_hash_extractor(&mut self, extractor: impl HashExtractor + 'static) {
        self.hash_extractor = Box::new(extractor);
    }

    pub fn set_url_slicer(&mut self, slicer: impl UrlSlicer + 'static) {
        self.url_slicer = Box::new(slicer);
    }

    pub fn set_params_extractor(&mut self, extractor: impl ParamExtractor + 'static) {
        self.param_extractor = Box::new(extractor);
    }

    pub fn set_query_extractor(&mut self, extractor: impl QueryExtractor + 'static) {
        self.query_extractor = Box::new(extractor);
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `url` into a [`ParseResult`] and record it in the history.
    ///
    /// Never fails: anything that cannot be recognized is left empty.
    pub fn parse(&mut self, url: &str) -> ParseResult {
        let basic = extract_basic(url);
        let hash = self.hash_extractor.extract_hash(url);
        let slices = self.url_slicer.slice_url(
            url,
            &SliceContext {
                host: basic.host,
                hash: &hash,
                config: &self.config,
            },
        );
        let params = self.param_extractor.extract_params(&slices.pathname);
        let query = self
            .query_extractor
            .extract_query(&slices.queryname, &self.config);

        let result = ParseResult {
            origin_url: url.to_string(),
            url: url.to_string(),
            protocol: basic.protocol.to_string(),
            host: basic.host.to_string(),
            hostname: basic.hostname.to_string(),
            port: basic.port.to_string(),
            hash,
            pathname: slices.pathname,
            params,
            queryname: slices.queryname,
            query,
        };

        log::trace!(
            "parsed {url:?}: {} segment(s), {} query pair(s), history #{}",
            result.params.len(),
            result.query.len(),
            self.history.len()
        );

        self.history.push(result.clone());
        result
    }

    /// Every result produced so far, oldest first
    pub fn parse_history(&self) -> &[ParseResult] {
        self.history.as_slice()
    }

    pub fn parse_history_at(&self, index: usize) -> Option<&ParseResult> {
        self.history.get(index)
    }

    pub fn last_parse_history(&self) -> Option<&ParseResult> {
        self.history.last()
    }

    pub fn history(&self) -> &ParseHistory {
        &self.history
    }

    /// Build a resolver over a snapshot, a freshly parsed URL, or the last
    /// parse. The resolver owns its copy; editing it never touches history.
    ///
    /// An empty history with [`ResolverSource::LastParse`] gives a resolver
    /// over an empty result.
    pub fn resolver(&mut self, source: impl Into<ResolverSource>) -> UrlResolver {
        let result = match source.into() {
            ResolverSource::Snapshot(result) => result,
            ResolverSource::Url(url) => self.parse(&url),
            ResolverSource::LastParse => self.history.last().cloned().unwrap_or_default(),
        };
        UrlResolver::new(result, &self.config)
    }
}
