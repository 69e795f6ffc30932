#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod checkers;
mod helpers;
mod scheme;
mod types;

mod config;
mod error;
mod extractor;
mod history;
mod parse_result;
mod sequence;
mod url_parser;
mod url_resolver;

// Public API
pub use config::ParserConfig;
pub use error::ConfigError;
pub use extractor::{
    BasicParts, DefaultHashExtractor, DefaultParamExtractor, DefaultQueryExtractor,
    DefaultUrlSlicer, HashExtractor, MAX_PROTOCOL_OFFSET, ParamExtractor, QueryExtractor,
    SliceContext, UrlSlicer, UrlSlices, extract_basic,
};
pub use history::ParseHistory;
pub use parse_result::ParseResult;
pub use sequence::{ParamSequence, QuerySequence};
pub use url_parser::UrlParser;
pub use url_resolver::{ResolverSource, UrlResolver};

pub type Result<T> = core::result::Result<T, ConfigError>;
