//! Client configuration.

use anyhow::{Context, bail};

/// Environment variable overriding the remote endpoint base.
pub const API_URL_ENV: &str = "TILLFRONT_API_URL";

/// Public demo product service.
pub const DEFAULT_API_URL: &str = "https://dummyjson.com";

/// Page size requested by `load()`.
pub const DEFAULT_PAGE_LIMIT: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: String,
    page_limit: u32,
}

impl ClientConfig {
    /// Build a config for `api_url`; trailing slashes are dropped.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize(api_url.into()),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit.max(1);
        self
    }

    /// Read the endpoint base from `TILLFRONT_API_URL`, falling back to the
    /// demo service.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var(API_URL_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::parse(raw.trim()),
            _ => Ok(Self::default()),
        }
    }

    /// Validate `raw` as an http(s) URL and build a config from it.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let url = reqwest::Url::parse(raw)
            .with_context(|| format!("invalid {API_URL_ENV} value: {raw:?}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("{API_URL_ENV} must be an http(s) URL, got scheme {:?}", url.scheme());
        }
        Ok(Self::new(raw))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn page_limit(&self) -> u32 {
        self.page_limit
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn normalize(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
