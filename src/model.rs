//! Records produced by the page parsers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One gallery entry on a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// Image id taken from the article's `post-{id}` class
    pub id: u64,

    /// Link to the image detail page
    pub detail_url: Option<String>,

    /// Thumbnail image source
    pub thumbnail_url: Option<String>,

    /// The thumbnail's `alt` text, which the site fills with an MD5 hash
    pub thumbnail_hash: Option<String>,
}

/// One rendition of an image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariant {
    pub url: String,

    /// Width in pixels from the srcset descriptor; `None` when taken from `src`
    pub width: Option<u32>,

    #[serde(default)]
    pub alt: String,
}

/// Full metadata of one image detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDetail {
    pub id: u64,

    /// Descriptive title, usually naming the location
    pub title: Option<String>,

    /// URL of the first image variant, if any
    pub full_resolution_url: Option<String>,

    /// Tag texts in document order, duplicates kept
    pub tags: Vec<String>,

    /// Human-readable publication date, as shown on the page
    pub date: Option<String>,

    /// Machine-readable timestamp, as found in the markup
    pub datetime: Option<String>,

    /// `og:*` property to content
    pub og_metadata: BTreeMap<String, String>,

    /// Highest-resolution rendition of every uploaded image, in document order
    pub all_images: Vec<ImageVariant>,
}
