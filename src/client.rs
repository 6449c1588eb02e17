//! Caller-side pipeline over the fetcher and the parsers
//!
//! The parsers never call each other. [`SpotlightClient`] drives them the way
//! a sync tool would: scan the root page for the page count, list the pages,
//! then fetch each image's detail page.

use crate::config::Config;
use crate::fetch::Fetcher;
use crate::model::{ImageDetail, ListingEntry};
use crate::parser::{parse_image_detail, parse_listing_page, parse_total_pages};
use crate::Result;
use std::ops::RangeInclusive;

/// Client for the wallpaper gallery
#[derive(Debug, Clone)]
pub struct SpotlightClient {
    config: Config,
    fetcher: Fetcher,
}

impl SpotlightClient {
    /// Creates a client with an HTTP fetcher built from `config`
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = Fetcher::new(&config.http)?;
        Ok(Self { config, fetcher })
    }

    /// Returns the number of listing pages on the site
    pub async fn total_pages(&self) -> Result<u64> {
        let html = self.fetcher.fetch_text(&self.config.site.root_url()).await?;
        let pages = parse_total_pages(&html);
        tracing::info!("Site has {} listing pages", pages);
        Ok(pages)
    }

    /// Returns the image summaries on listing page `n`
    pub async fn page(&self, n: u64) -> Result<Vec<ListingEntry>> {
        let html = self.fetcher.fetch_text(&self.config.site.page_url(n)).await?;
        let entries = parse_listing_page(&html);
        tracing::info!("Page {}: {} images", n, entries.len());
        Ok(entries)
    }

    /// Returns the full metadata of image `id`
    pub async fn image_info(&self, id: u64) -> Result<ImageDetail> {
        let html = self.fetcher.fetch_text(&self.config.site.image_url(id)).await?;
        let detail = parse_image_detail(&html, id);
        tracing::debug!(
            "Image {}: {} variants, {} tags",
            detail.id,
            detail.all_images.len(),
            detail.tags.len()
        );
        Ok(detail)
    }

    /// Lists every page in `pages` and fetches the detail of each entry found
    ///
    /// Requests are issued one at a time. The first fetch error aborts the run.
    pub async fn harvest(&self, pages: RangeInclusive<u64>) -> Result<Vec<ImageDetail>> {
        let mut details = Vec::new();
        self.harvest_each(pages, |detail| {
            details.push(detail);
            Ok(())
        })
        .await?;
        Ok(details)
    }

    /// Like [`harvest`](Self::harvest), but hands each detail to `on_image` as soon as it is fetched
    ///
    /// An error from `on_image` aborts the run like a fetch error. Details
    /// delivered before an error are not rolled back.
    pub async fn harvest_each<F>(&self, pages: RangeInclusive<u64>, mut on_image: F) -> Result<u64>
    where
        F: FnMut(ImageDetail) -> Result<()>,
    {
        let mut count = 0;

        for n in pages {
            for entry in self.page(n).await? {
                on_image(self.image_info(entry.id).await?)?;
                count += 1;
            }
        }

        tracing::info!("Harvested {} images", count);
        Ok(count)
    }
}
