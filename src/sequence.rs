use crate::compat::{BTreeMap, String, ToString, Vec};

/// Position of the `order`-th occurrence (0-indexed) of `search` in `sequence`.
fn nth_position(sequence: &[String], search: &str, order: usize) -> Option<usize> {
    sequence
        .iter()
        .enumerate()
        .filter(|(_, item)| *item == search)
        .nth(order)
        .map(|(index, _)| index)
}

/// Path segments in their original order, plus an occurrence count per segment.
///
/// Both halves change together: every mutation goes through one method that
/// keeps `sequence.len() == counts.values().sum()`.
///
/// With the `serde` feature the sequence is written as its segment list and
/// the counts are rebuilt on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<String>", into = "Vec<String>")
)]
pub struct ParamSequence {
    sequence: Vec<String>,
    counts: BTreeMap<String, usize>,
}

impl ParamSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segments in order, duplicates included
    pub fn as_slice(&self) -> &[String] {
        &self.sequence
    }

    /// Occurrence count per distinct segment
    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    /// Occurrence count of one segment, 0 if absent
    pub fn count(&self, segment: &str) -> usize {
        self.counts.get(segment).copied().unwrap_or(0)
    }

    pub fn contains(&self, segment: &str) -> bool {
        self.counts.contains_key(segment)
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sequence.iter().map(String::as_str)
    }

    /// Index of the `order`-th occurrence of `segment`
    pub fn position(&self, segment: &str, order: usize) -> Option<usize> {
        nth_position(&self.sequence, segment, order)
    }

    pub fn push(&mut self, segment: &str) {
        self.insert(self.sequence.len(), segment);
    }

    /// Insert `segment` at `index` (clamped to the length) and bump its count.
    pub fn insert(&mut self, index: usize, segment: &str) {
        let index = index.min(self.sequence.len());
        self.sequence.insert(index, segment.to_string());
        *self.counts.entry(segment.to_string()).or_insert(0) += 1;
    }

    /// Remove the `order`-th occurrence of `segment`.
    /// Returns `false` when there is no such occurrence.
    pub fn remove(&mut self, segment: &str, order: usize) -> bool {
        let Some(index) = self.position(segment, order) else {
            return false;
        };
        self.sequence.remove(index);

        if let Some(count) = self.counts.get_mut(segment) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(segment);
            }
        }
        true
    }

    /// Remove every occurrence of `segment`.
    /// Returns `false` when the segment was absent.
    pub fn remove_all(&mut self, segment: &str) -> bool {
        if self.counts.remove(segment).is_none() {
            return false;
        }
        self.sequence.retain(|item| item != segment);
        true
    }

    /// `/`-joined path with a leading `/`
    pub fn serialize(&self) -> String {
        let mut result = String::with_capacity(self.sequence.iter().map(|s| s.len() + 1).sum());
        result.push('/');
        for (i, segment) in self.sequence.iter().enumerate() {
            if i > 0 {
                result.push('/');
            }
            result.push_str(segment);
        }
        result
    }
}

/// Query key names in their original order, plus every value per key.
///
/// The n-th occurrence of a key in the sequence pairs with the n-th value of
/// that key, so `values[key].len()` always equals the key's occurrence count.
///
/// With the `serde` feature the sequence is written as its `(name, value)`
/// pairs and replayed through [`QuerySequence::push`] on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<(String, String)>", into = "Vec<(String, String)>")
)]
pub struct QuerySequence {
    sequence: Vec<String>,
    values: BTreeMap<String, Vec<String>>,
}

impl QuerySequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key names in order, duplicates included
    pub fn names(&self) -> &[String] {
        &self.sequence
    }

    /// All values per key, in order of occurrence
    pub fn values(&self) -> &BTreeMap<String, Vec<String>> {
        &self.values
    }

    /// Values of one key
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// First value of one key
    pub fn first(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Index of the `order`-th occurrence of `name`
    pub fn position(&self, name: &str, order: usize) -> Option<usize> {
        nth_position(&self.sequence, name, order)
    }

    /// Append a pair at the end of both the sequence and the key's values.
    pub fn push(&mut self, name: &str, value: &str) {
        self.sequence.push(name.to_string());
        self.values
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
    }

    /// Insert `name` at `index` of the sequence and `value` at `value_index`
    /// of the key's values. Both indexes are clamped to their lengths.
    pub fn insert(&mut self, index: usize, name: &str, value_index: usize, value: &str) {
        let index = index.min(self.sequence.len());
        self.sequence.insert(index, name.to_string());

        let values = self.values.entry(name.to_string()).or_default();
        let value_index = value_index.min(values.len());
        values.insert(value_index, value.to_string());
    }

    /// Remove the `order`-th occurrence of `name` and the `order`-th value.
    /// Returns `false` when there is no such occurrence.
    pub fn remove(&mut self, name: &str, order: usize) -> bool {
        let Some(index) = self.position(name, order) else {
            return false;
        };
        self.sequence.remove(index);

        if let Some(values) = self.values.get_mut(name) {
            if order < values.len() {
                values.remove(order);
            }
            if values.is_empty() {
                self.values.remove(name);
            }
        }
        true
    }

    /// Remove every occurrence of `name` together with its values.
    /// Returns `false` when the key was absent.
    pub fn remove_all(&mut self, name: &str) -> bool {
        if !self.sequence.iter().any(|item| item == name) {
            return false;
        }
        self.sequence.retain(|item| item != name);
        self.values.remove(name);
        true
    }

    /// Iterate `(name, value)` pairs in sequence order.
    /// Repeated keys consume their values one after another.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut cursors: BTreeMap<&str, usize> = BTreeMap::new();
        self.sequence.iter().filter_map(move |name| {
            let values = self.values.get(name)?;
            let cursor = cursors.entry(name.as_str()).or_insert(0);
            let value = values.get(*cursor)?;
            *cursor += 1;
            Some((name.as_str(), value.as_str()))
        })
    }

    /// Rebuild the query string: `url_sep` followed by `name=value` pairs,
    /// or an empty string when there are no pairs.
    pub fn serialize(&self, url_sep: Option<char>, query_sep: char, equal_sep: char) -> String {
        let mut result = String::new();
        for (i, (name, value)) in self.pairs().enumerate() {
            if i > 0 {
                result.push(query_sep);
            } else if let Some(sep) = url_sep {
                result.push(sep);
            }
            result.push_str(name);
            result.push(equal_sep);
            result.push_str(value);
        }
        result
    }
}

impl From<Vec<String>> for ParamSequence {
    fn from(segments: Vec<String>) -> Self {
        let mut params = Self::new();
        for segment in &segments {
            params.push(segment);
        }
        params
    }
}

impl From<ParamSequence> for Vec<String> {
    fn from(params: ParamSequence) -> Self {
        params.sequence
    }
}

impl From<Vec<(String, String)>> for QuerySequence {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::new();
        for (name, value) in &pairs {
            query.push(name, value);
        }
        query
    }
}

impl From<QuerySequence> for Vec<(String, String)> {
    fn from(query: QuerySequence) -> Self {
        query
            .pairs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(segments: &[&str]) -> ParamSequence {
        let mut params = ParamSequence::new();
        for segment in segments {
            params.push(segment);
        }
        params
    }

    fn query(pairs: &[(&str, &str)]) -> QuerySequence {
        let mut query = QuerySequence::new();
        for (name, value) in pairs {
            query.push(name, value);
        }
        query
    }

    #[test]
    fn test_param_counts_follow_sequence() {
        let params = params(&["a", "b", "a"]);
        assert_eq!(params.as_slice(), ["a", "b", "a"]);
        assert_eq!(params.count("a"), 2);
        assert_eq!(params.count("b"), 1);
        assert_eq!(params.count("c"), 0);
        assert_eq!(params.len(), params.counts().values().sum::<usize>());
    }

    #[test]
    fn test_param_position() {
        let params = params(&["a", "b", "a"]);
        assert_eq!(params.position("a", 0), Some(0));
        assert_eq!(params.position("a", 1), Some(2));
        assert_eq!(params.position("a", 2), None);
        assert_eq!(params.position("z", 0), None);
    }

    #[test]
    fn test_param_remove() {
        let mut params = params(&["a", "b", "a"]);
        assert!(params.remove("a", 1));
        assert_eq!(params.as_slice(), ["a", "b"]);
        assert_eq!(params.count("a"), 1);

        assert!(params.remove("a", 0));
        assert!(!params.contains("a"));
        assert!(!params.remove("a", 0));
        assert_eq!(params.as_slice(), ["b"]);
    }

    #[test]
    fn test_param_remove_all() {
        let mut params = params(&["a", "b", "a"]);
        assert!(params.remove_all("a"));
        assert_eq!(params.as_slice(), ["b"]);
        assert!(!params.remove_all("a"));
    }

    #[test]
    fn test_param_serialize() {
        assert_eq!(params(&[]).serialize(), "/");
        assert_eq!(params(&["api", "users"]).serialize(), "/api/users");
    }

    #[test]
    fn test_query_pairs_use_cursors() {
        let query = query(&[("name", "Tom"), ("age", "20"), ("name", "Jerry")]);
        let pairs: Vec<(&str, &str)> = query.pairs().collect();
        assert_eq!(pairs, [("name", "Tom"), ("age", "20"), ("name", "Jerry")]);
        assert_eq!(query.get("name"), Some(&["Tom".to_string(), "Jerry".to_string()][..]));
        assert_eq!(query.first("age"), Some("20"));
    }

    #[test]
    fn test_query_insert_value_index_is_independent() {
        let mut query = query(&[("k", "1"), ("k", "2")]);
        // Last in the sequence, but first among the values of `k`
        query.insert(2, "k", 0, "0");
        assert_eq!(query.names(), ["k", "k", "k"]);
        assert_eq!(query.serialize(Some('?'), '&', '='), "?k=0&k=1&k=2");

        // Out of range indexes are clamped
        query.insert(99, "x", 99, "y");
        assert_eq!(query.names().last().map(String::as_str), Some("x"));
    }

    #[test]
    fn test_query_remove() {
        let mut query = query(&[("name", "Tom"), ("name", "Jerry"), ("age", "20")]);
        assert!(query.remove("name", 1));
        assert_eq!(query.names(), ["name", "age"]);
        assert_eq!(query.get("name"), Some(&["Tom".to_string()][..]));

        assert!(query.remove("age", 0));
        assert!(!query.contains("age"));
        assert!(!query.remove("age", 0));
    }

    #[test]
    fn test_query_remove_all() {
        let mut query = query(&[("a", "1"), ("b", "2"), ("a", "3")]);
        assert!(query.remove_all("a"));
        assert_eq!(query.names(), ["b"]);
        assert!(!query.contains("a"));
        assert!(!query.remove_all("a"));
    }

    #[test]
    fn test_query_serialize() {
        let query = query(&[("a", "1"), ("b", "")]);
        assert_eq!(query.serialize(Some('?'), '&', '='), "?a=1&b=");
        assert_eq!(query.serialize(None, ';', ':'), "a:1;b:");
        assert_eq!(QuerySequence::new().serialize(Some('?'), '&', '='), "");
        assert_eq!(QuerySequence::new().serialize(None, '&', '='), "");
    }

    #[test]
    fn test_param_from_segments() {
        let segments = Vec::from(["a".to_string(), "b".to_string(), "a".to_string()]);
        let params = ParamSequence::from(segments);
        assert_eq!(params.count("a"), 2);
        assert_eq!(Vec::<String>::from(params), ["a", "b", "a"]);
    }

    #[test]
    fn test_query_from_pairs_keeps_value_order() {
        let mut original = query(&[("k", "1"), ("k", "2")]);
        original.insert(2, "k", 0, "0");

        let pairs: Vec<(String, String)> = original.clone().into();
        assert_eq!(QuerySequence::from(pairs), original);
    }

    #[cfg(feature = "serde")]
    #[allow(clippy::unwrap_used)]
    #[test]
    fn test_serde_rebuilds_counts() {
        let params: ParamSequence = serde_json::from_str(r#"["a","b","a"]"#).unwrap();
        assert_eq!(params.count("a"), 2);
        assert_eq!(serde_json::to_string(&params).unwrap(), r#"["a","b","a"]"#);

        let query: QuerySequence =
            serde_json::from_str(r#"[["name","Tom"],["age","20"],["name","Jerry"]]"#).unwrap();
        assert_eq!(query.names(), ["name", "age", "name"]);
        assert_eq!(query.get("name"), Some(&["Tom".to_string(), "Jerry".to_string()][..]));
    }
}
