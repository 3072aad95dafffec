use anyhow::{anyhow, Result};

const ENV_API_KEY: &str = "ELFA_API_KEY";
const ENV_BASE_URL: &str = "ELFA_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.elfa.ai/v2/data";

/// Explicit scraper configuration; passed into [`crate::scrape::ElfaScraper`]
/// at construction, no process-wide globals.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Authenticates upstream calls (`x-elfa-api-key` header).
    pub api_key: String,
    /// Upstream API root. Overridable for testing.
    pub base_url: String,
}

impl ScraperConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load from the environment: `ELFA_API_KEY` required, `ELFA_BASE_URL`
    /// optional override.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| anyhow!("{ENV_API_KEY} not found in environment"))?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        Ok(config)
    }
}
