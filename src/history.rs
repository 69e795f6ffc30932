use crate::compat::Vec;
use crate::parse_result::ParseResult;

/// Append-only log of every result a parser produced, oldest first.
///
/// Entries are never evicted; the log lives as long as its parser.
#[derive(Debug, Clone, Default)]
pub struct ParseHistory {
    entries: Vec<ParseResult>,
}

impl ParseHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, result: ParseResult) {
        self.entries.push(result);
    }

    pub fn get(&self, index: usize) -> Option<&ParseResult> {
        self.entries.get(index)
    }

    pub fn last(&self) -> Option<&ParseResult> {
        self.entries.last()
    }

    pub fn as_slice(&self) -> &[ParseResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParseResult> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ParseHistory {
    type Item = &'a ParseResult;
    type IntoIter = core::slice::Iter<'a, ParseResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
