//! Configuration module for Spotlight-Harvest
//!
//! The configuration is a small immutable value: the site's base URL and the
//! HTTP settings sent with every fetch. Built-in defaults target the public
//! site; a TOML file can override any key.
//!
//! # Example
//!
//! ```
//! use spotlight_harvest::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(
//!     config.site.image_url(42),
//!     "https://windows10spotlight.com/images/42"
//! );
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, SiteConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
