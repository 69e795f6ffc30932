mod basic;
mod hash;
mod params;
mod query;
mod slicer;

pub use basic::{BasicParts, MAX_PROTOCOL_OFFSET, extract_basic};
pub use hash::DefaultHashExtractor;
pub use params::DefaultParamExtractor;
pub use query::DefaultQueryExtractor;
pub use slicer::DefaultUrlSlicer;

use crate::compat::String;
use crate::config::ParserConfig;
use crate::sequence::{ParamSequence, QuerySequence};

/// Derives the fragment (`#...`) of a raw URL.
pub trait HashExtractor: Send + Sync {
    fn extract_hash(&self, url: &str) -> String;
}

/// Inputs a slicer may consult besides the raw URL
#[derive(Debug, Clone, Copy)]
pub struct SliceContext<'a> {
    /// Host found by [`extract_basic`], empty when there is none
    pub host: &'a str,
    /// Fragment found by the parser's [`HashExtractor`]
    pub hash: &'a str,
    pub config: &'a ParserConfig,
}

/// Pathname and queryname candidates produced by a [`UrlSlicer`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSlices {
    pub pathname: String,
    pub queryname: String,
}

impl UrlSlices {
    pub fn new(pathname: impl Into<String>, queryname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            queryname: queryname.into(),
        }
    }
}

/// Splits a raw URL at its path/query boundary.
pub trait UrlSlicer: Send + Sync {
    fn slice_url(&self, url: &str, ctx: &SliceContext<'_>) -> UrlSlices;
}

/// Turns a pathname into ordered, counted segments.
pub trait ParamExtractor: Send + Sync {
    fn extract_params(&self, pathname: &str) -> ParamSequence;
}

/// Turns a queryname into ordered key names and their values.
pub trait QueryExtractor: Send + Sync {
    fn extract_query(&self, queryname: &str, config: &ParserConfig) -> QuerySequence;
}

impl<F> HashExtractor for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn extract_hash(&self, url: &str) -> String {
        self(url)
    }
}

impl<F> UrlSlicer for F
where
    F: Fn(&str, &SliceContext<'_>) -> UrlSlices + Send + Sync,
{
    fn slice_url(&self, url: &str, ctx: &SliceContext<'_>) -> UrlSlices {
        self(url, ctx)
    }
}

impl<F> ParamExtractor for F
where
    F: Fn(&str) -> ParamSequence + Send + Sync,
{
    fn extract_params(&self, pathname: &str) -> ParamSequence {
        self(pathname)
    }
}

impl<F> QueryExtractor for F
where
    F: Fn(&str, &ParserConfig) -> QuerySequence + Send + Sync,
{
    fn extract_query(&self, queryname: &str, config: &ParserConfig) -> QuerySequence {
        self(queryname, config)
    }
}
