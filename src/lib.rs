//! Spotlight-Harvest: wallpaper metadata extraction for windows10spotlight.com
//!
//! This crate turns the gallery's HTML pages into structured records: the
//! pagination maximum of the root page, the image summaries of a listing page,
//! and the full metadata (title, tags, dates, Open Graph, resolution variants)
//! of a detail page. The parsers are pure functions over an already-fetched
//! document; fetching lives in [`fetch`] and the caller-side pipeline in
//! [`client`].

pub mod client;
pub mod config;
pub mod document;
pub mod fetch;
pub mod model;
pub mod parser;

use thiserror::Error;

/// Main error type for Spotlight-Harvest operations
///
/// Only the fetch boundary and configuration loading produce errors. Missing or
/// malformed markup is never an error; it degrades to absent fields.
#[derive(Debug, Error)]
pub enum SpotlightError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Spotlight-Harvest operations
pub type Result<T> = std::result::Result<T, SpotlightError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use client::SpotlightClient;
pub use config::Config;
pub use document::PageDocument;
pub use model::{ImageDetail, ImageVariant, ListingEntry};
