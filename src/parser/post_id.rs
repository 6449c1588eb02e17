use crate::document::class_tokens;
use scraper::ElementRef;

const POST_CLASS_PREFIX: &str = "post-";

/// Extracts the numeric post id from an element's `post-{id}` class token
///
/// The first token starting with `post-` whose next `-`-delimited segment
/// parses as an integer wins. Tokens such as `post-thumbnail` are passed over.
pub fn from_class_tokens(element: &ElementRef<'_>) -> Option<u64> {
    class_tokens(element).find_map(parse_post_token)
}

fn parse_post_token(token: &str) -> Option<u64> {
    let rest = token.strip_prefix(POST_CLASS_PREFIX)?;
    let digits = rest.split('-').next().unwrap_or(rest);
    digits.parse().ok()
}
