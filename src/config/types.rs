use serde::Deserialize;
use std::collections::BTreeMap;

/// Base URL of the wallpaper gallery
pub const DEFAULT_BASE_URL: &str = "https://windows10spotlight.com";

/// Browser-like user agent; the site blocks obvious bots
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36";

/// Main configuration structure for Spotlight-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub http: HttpConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Root URL of the gallery, without a trailing slash
    #[serde(rename = "base-url")]
    pub base_url: String,
}

/// HTTP request configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Extra headers sent with every request
    pub headers: BTreeMap<String, String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            headers: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Creates the default configuration pointed at another base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            site: SiteConfig {
                base_url: base_url.into(),
            },
            ..Self::default()
        }
    }
}

impl SiteConfig {
    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// URL of the root listing page
    pub fn root_url(&self) -> String {
        self.base().to_string()
    }

    /// URL of listing page `n`; page 1 is the root page
    pub fn page_url(&self, n: u64) -> String {
        if n == 1 {
            self.root_url()
        } else {
            format!("{}/page/{}", self.base(), n)
        }
    }

    /// URL of the detail page for image `id`
    pub fn image_url(&self, id: u64) -> String {
        format!("{}/images/{}", self.base(), id)
    }
}
