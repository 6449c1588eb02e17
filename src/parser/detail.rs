//! Detail page parsing
//!
//! A detail page describes a single wallpaper: a title naming the location,
//! tag links, a publication date, Open Graph metadata and one or more uploaded
//! images (landscape and portrait), each with a `srcset` of resized copies.

use super::post_id::from_class_tokens;
use super::srcset;
use crate::document::{attr, trimmed_text, PageDocument};
use crate::model::{ImageDetail, ImageVariant};
use std::collections::BTreeMap;

/// Marker that identifies images hosted in the WordPress upload directory
const UPLOAD_PATH_MARKER: &str = "wp-content/uploads";

/// Extracts an [`ImageDetail`] from a detail page
///
/// Every field degrades independently: a missing element leaves its field
/// empty and never affects the others. `fallback_id` is used when the first
/// article carries no usable `post-{id}` class.
pub fn parse(document: &PageDocument, fallback_id: u64) -> ImageDetail {
    let id = extract_id(document).unwrap_or_else(|| {
        tracing::debug!("No post id on detail page, using {}", fallback_id);
        fallback_id
    });

    let (date, datetime) = extract_date(document);
    let all_images = extract_images(document);
    let full_resolution_url = all_images.first().map(|image| image.url.clone());

    ImageDetail {
        id,
        title: extract_title(document),
        full_resolution_url,
        tags: extract_tags(document),
        date,
        datetime,
        og_metadata: extract_og_metadata(document),
        all_images,
    }
}

fn extract_id(document: &PageDocument) -> Option<u64> {
    let article = document.find_all_by_tag("article").into_iter().next()?;
    from_class_tokens(&article)
}

/// First `<h1>`, falling back to the first `<h2>`
fn extract_title(document: &PageDocument) -> Option<String> {
    document
        .select_first("h1")
        .or_else(|| document.select_first("h2"))
        .map(|heading| trimmed_text(&heading))
}

fn extract_tags(document: &PageDocument) -> Vec<String> {
    document
        .find_all_by_attr("rel", |rel| rel == "tag")
        .iter()
        .map(trimmed_text)
        .collect()
}

/// Returns `(date, datetime)` from `<time>`, or from `span.date` when there is none
fn extract_date(document: &PageDocument) -> (Option<String>, Option<String>) {
    let element = document
        .select_first("time")
        .or_else(|| document.select_first("span.date"));

    match element {
        Some(element) => (
            Some(trimmed_text(&element)),
            attr(&element, "datetime").map(str::to_string),
        ),
        None => (None, None),
    }
}

/// Collects `og:*` meta properties; later duplicates overwrite earlier ones
fn extract_og_metadata(document: &PageDocument) -> BTreeMap<String, String> {
    let mut og_metadata = BTreeMap::new();

    for meta in document.select_all("meta[property^='og:']") {
        let property = attr(&meta, "property").filter(|p| !p.is_empty());
        let content = attr(&meta, "content").filter(|c| !c.is_empty());

        if let (Some(property), Some(content)) = (property, content) {
            og_metadata.insert(property.to_string(), content.to_string());
        }
    }

    og_metadata
}

/// Emits the best rendition of every uploaded image, in document order
fn extract_images(document: &PageDocument) -> Vec<ImageVariant> {
    let mut images = Vec::new();

    for img in document.find_all_by_attr("src", |src| src.contains(UPLOAD_PATH_MARKER)) {
        let Some(src) = attr(&img, "src") else {
            continue;
        };
        let alt = attr(&img, "alt").unwrap_or_default().to_string();

        let best = attr(&img, "srcset")
            .map(str::trim)
            .filter(|srcset| !srcset.is_empty())
            .and_then(srcset::best_candidate);

        let variant = match best {
            Some((url, width)) => ImageVariant {
                url,
                width: Some(width),
                alt,
            },
            None => ImageVariant {
                url: src.to_string(),
                width: None,
                alt,
            },
        };
        images.push(variant);
    }

    images
}
