//! Pagination scanning for the root page

use crate::document::{trimmed_text, PageDocument};

/// Pagination links inside the WordPress navigation block
const PAGE_LINK_SELECTOR: &str = "nav.navigation.pagination a.page-numbers";

/// Returns the highest page number referenced by the pagination controls
///
/// Link texts are trimmed and stripped of thousands separators (`1,263`);
/// anything that is not then purely decimal digits ("Next", "…") is ignored.
/// Returns 1 when no numeric link exists.
pub fn scan(document: &PageDocument) -> u64 {
    let max = document
        .select_all(PAGE_LINK_SELECTOR)
        .iter()
        .filter_map(|link| page_number(&trimmed_text(link)))
        .max();

    match max {
        Some(pages) => {
            tracing::debug!("Pagination reports {} pages", pages);
            pages.max(1)
        }
        None => {
            tracing::debug!("No numeric pagination links found, assuming a single page");
            1
        }
    }
}

/// Parses a pagination link label such as `"1,263"` into a page number
fn page_number(label: &str) -> Option<u64> {
    let cleaned = label.replace(',', "");
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    cleaned.parse().ok()
}
