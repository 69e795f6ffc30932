use crate::compat::Vec;
use crate::error::{ConfigError, Result};

/// Separator settings shared by the extractors and resolvers of one parser.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParserConfig {
    /// Characters that may mark the path/query boundary
    pub url_seps: Vec<char>,
    /// Separator between query pairs
    pub query_sep: char,
    /// Separator used inside a query value that is itself a URL
    pub query_value_sep: char,
    /// Separator between a query key and its value
    pub equal_sep: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            url_seps: Vec::from(['?']),
            query_sep: '&',
            query_value_sep: '&',
            equal_sep: '=',
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url_seps(mut self, url_seps: impl IntoIterator<Item = char>) -> Self {
        self.url_seps = url_seps.into_iter().collect();
        self
    }

    pub fn with_query_sep(mut self, query_sep: char) -> Self {
        self.query_sep = query_sep;
        self
    }

    pub fn with_query_value_sep(mut self, query_value_sep: char) -> Self {
        self.query_value_sep = query_value_sep;
        self
    }

    pub fn with_equal_sep(mut self, equal_sep: char) -> Self {
        self.equal_sep = equal_sep;
        self
    }

    /// Check that the separators can be told apart while scanning.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first collision found.
    pub fn validate(&self) -> Result<()> {
        if self.url_seps.is_empty() {
            return Err(ConfigError::EmptyUrlSeps);
        }
        if self.equal_sep == self.query_sep {
            return Err(ConfigError::EqualSepIsQuerySep(self.equal_sep));
        }
        if self.url_seps.contains(&self.equal_sep) {
            return Err(ConfigError::EqualSepIsUrlSep(self.equal_sep));
        }
        Ok(())
    }

    /// Whether `c` is one of the path/query boundary characters
    pub fn is_url_sep(&self, c: char) -> bool {
        self.url_seps.contains(&c)
    }
}
