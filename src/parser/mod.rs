//! HTML parsers for the wallpaper gallery
//!
//! This module contains the three extraction operations:
//! - Pagination scanning on the root page
//! - Listing page parsing into image summaries
//! - Detail page parsing into full image metadata
//!
//! All of them are pure: they take a parsed [`PageDocument`] and never fail.

pub mod detail;
pub mod listing;
pub mod pagination;
mod post_id;
pub mod srcset;

pub use post_id::from_class_tokens;

use crate::document::PageDocument;
use crate::model::{ImageDetail, ListingEntry};

/// Parses root page HTML and returns the highest page number
///
/// # Example
///
/// ```
/// use spotlight_harvest::parser::parse_total_pages;
///
/// let html = r#"<nav class="navigation pagination">
///     <a class="page-numbers" href="/page/2">2</a>
///     <a class="page-numbers" href="/page/1263">1,263</a>
/// </nav>"#;
/// assert_eq!(parse_total_pages(html), 1263);
/// ```
pub fn parse_total_pages(html: &str) -> u64 {
    pagination::scan(&PageDocument::parse(html))
}

/// Parses listing page HTML into image summaries
pub fn parse_listing_page(html: &str) -> Vec<ListingEntry> {
    listing::parse(&PageDocument::parse(html))
}

/// Parses detail page HTML into image metadata
///
/// `fallback_id` is used when the page carries no usable `post-{id}` class.
pub fn parse_image_detail(html: &str, fallback_id: u64) -> ImageDetail {
    detail::parse(&PageDocument::parse(html), fallback_id)
}
