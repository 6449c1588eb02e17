//! Listing page parsing
//!
//! A listing page shows one `<article>` per wallpaper. Each article links to
//! the image's detail page and embeds a thumbnail whose `alt` text is the
//! image hash.

use super::post_id::from_class_tokens;
use crate::document::{attr, select_within, PageDocument};
use crate::model::ListingEntry;

const ARTICLE_SELECTOR: &str = "article";
const DETAIL_LINK_SELECTOR: &str = "a[href*='/images/']";
const THUMBNAIL_SELECTOR: &str = "img";

/// Extracts one [`ListingEntry`] per article, in document order
///
/// Articles without a usable `post-{id}` class are skipped.
pub fn parse(document: &PageDocument) -> Vec<ListingEntry> {
    let mut entries = Vec::new();

    for article in document.select_all(ARTICLE_SELECTOR) {
        let Some(id) = from_class_tokens(&article) else {
            tracing::trace!("Skipping article without a post id");
            continue;
        };

        let detail_url = select_within(&article, DETAIL_LINK_SELECTOR)
            .and_then(|link| attr(&link, "href"))
            .map(str::to_string);

        let thumbnail = select_within(&article, THUMBNAIL_SELECTOR);
        let thumbnail_url = thumbnail
            .and_then(|img| attr(&img, "src"))
            .map(str::to_string);
        let thumbnail_hash = thumbnail
            .and_then(|img| attr(&img, "alt"))
            .map(str::to_string);

        entries.push(ListingEntry {
            id,
            detail_url,
            thumbnail_url,
            thumbnail_hash,
        });
    }

    tracing::debug!("Parsed {} listing entries", entries.len());
    entries
}
