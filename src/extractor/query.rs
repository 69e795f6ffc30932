use super::QueryExtractor;
use crate::checkers::is_absolute_url;
use crate::config::ParserConfig;
use crate::helpers::{char_len_at, find_char};
use crate::sequence::QuerySequence;

/// Incremental scanner over a queryname.
///
/// `head` always sits on the separator that precedes the next key: the url
/// separator at position 0, then each `query_sep` that ended a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultQueryExtractor;

impl QueryExtractor for DefaultQueryExtractor {
    fn extract_query(&self, queryname: &str, config: &ParserConfig) -> QuerySequence {
        let mut query = QuerySequence::new();
        let mut head = 0;

        loop {
            // Collapse runs of pair separators
            loop {
                let next = head + char_len_at(queryname, head);
                if next > head
                    && queryname
                        .get(next..)
                        .is_some_and(|rest| rest.starts_with(config.query_sep))
                {
                    head = next;
                } else {
                    break;
                }
            }

            let Some(equal) = find_char(queryname, config.equal_sep, head) else {
                break;
            };
            let name_start = head + char_len_at(queryname, head);
            let name = queryname.get(name_start..equal).unwrap_or("");
            let value_start = equal + config.equal_sep.len_utf8();
            let rest = &queryname[value_start..];

            let tail = find_char(queryname, config.query_sep, value_start);
            // A URL value swallows the remainder, including its own pairs
            let embedded_url =
                config.query_sep == config.query_value_sep && is_absolute_url(rest);

            match tail {
                Some(tail) if !embedded_url => {
                    query.push(name, &queryname[value_start..tail]);
                    head = tail;
                }
                _ => {
                    query.push(name, rest);
                    break;
                }
            }
        }

        query
    }
}
