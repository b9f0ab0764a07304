//! # Configuration
//!
//! [`TmdbConfig`] holds everything the API client and the poster URLs need.
//! Values come from defaults, then the environment (a `.env` file is loaded
//! first through `dotenvy`), then CLI flags in `main`.

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Configuration for the TMDB-style movie API.
#[derive(Clone, Debug, PartialEq)]
pub struct TmdbConfig {
    /// Base URL for the REST API (e.g., "https://api.themoviedb.org/3")
    pub base_url: String,

    /// Prefix that a `poster_path` is appended to
    pub image_base_url: String,

    /// Bearer token sent with every request, if any
    pub api_key: Option<String>,

    /// Request timeout in seconds (default: 30)
    pub timeout_seconds: Option<u64>,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            api_key: None,
            timeout_seconds: Some(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl TmdbConfig {
    /// Create a configuration pointing at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the bearer token. An empty token clears it.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.api_key = (!api_key.is_empty()).then_some(api_key);
        self
    }

    /// Set the poster image prefix
    pub fn with_image_base_url(mut self, image_base_url: impl Into<String>) -> Self {
        self.image_base_url = image_base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Loads `.env` (if present) and reads `TMDB_*` variables over the defaults.
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let mut config = Self::default();

        if let Some(base_url) = lookup("TMDB_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(image_base_url) = lookup("TMDB_IMAGE_BASE_URL") {
            config.image_base_url = image_base_url;
        }
        config.api_key = lookup("TMDB_API_KEY").filter(|key| !key.is_empty());
        if let Some(raw) = lookup("TMDB_TIMEOUT_SECONDS") {
            let seconds = raw.parse::<u64>().map_err(|_| {
                ApiError::Config(format!("TMDB_TIMEOUT_SECONDS must be a number of seconds, got {raw:?}"))
            })?;
            config.timeout_seconds = Some(seconds);
        }

        Ok(config)
    }
}
