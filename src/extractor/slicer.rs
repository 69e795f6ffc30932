use super::{SliceContext, UrlSlicer, UrlSlices};
use crate::helpers::{find_char, truncate_at};

/// Finds the first `equal_sep`, then walks backward to the nearest url
/// separator. Walking back from the first pair lets url separators appear
/// earlier in the path.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUrlSlicer;

impl UrlSlicer for DefaultUrlSlicer {
    fn slice_url(&self, url: &str, ctx: &SliceContext<'_>) -> UrlSlices {
        let config = ctx.config;

        let boundary = find_char(url, config.equal_sep, 0).and_then(|equal| {
            url[..equal]
                .char_indices()
                .rev()
                .find(|&(_, c)| config.is_url_sep(c))
                .map(|(index, _)| index)
        });

        match boundary {
            Some(index) => UrlSlices::new(
                strip_host(&url[..index], ctx.host),
                truncate_at(&url[index..], ctx.hash),
            ),
            // No query: the path runs up to the fragment
            None => UrlSlices::new(truncate_at(strip_host(url, ctx.host), ctx.hash), ""),
        }
    }
}

/// Drop everything up to and including the first occurrence of `host`.
fn strip_host<'a>(prefix: &'a str, host: &str) -> &'a str {
    if host.is_empty() {
        return prefix;
    }
    prefix.split_once(host).map_or(prefix, |(_, rest)| rest)
}
