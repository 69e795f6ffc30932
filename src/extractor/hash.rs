use super::HashExtractor;
use crate::compat::{String, ToString};
use crate::helpers::find_char;

/// Takes everything from the first `#` to the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHashExtractor;

impl HashExtractor for DefaultHashExtractor {
    fn extract_hash(&self, url: &str) -> String {
        find_char(url, '#', 0).map_or_else(String::new, |pos| url[pos..].to_string())
    }
}
