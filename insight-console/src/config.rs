use insight_client::ClientConfig;
use insight_client::shared::PageSize;

/// Console configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | INSIGHT_API_BASE_URL | http://localhost:8000 | Backend base URL |
/// | INSIGHT_API_PREFIX | /api | Route prefix |
/// | INSIGHT_API_TOKEN | (unset) | Bearer token |
/// | INSIGHT_REQUEST_TIMEOUT_SECS | 30 | Request timeout |
/// | INSIGHT_PAGE_SIZE | 100 | Initial page size (50, 100, 200) |
/// | INSIGHT_LOG_LEVEL | info | Fallback when RUST_LOG is unset |
/// | INSIGHT_LOG_DIR | (unset) | Daily rolling log files go here when it exists |
///
/// A `.env` file in the working directory is read first.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub base_url: String,
    pub api_prefix: String,
    pub token: Option<String>,
    pub request_timeout_secs: u64,
    pub page_size: PageSize,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl ConsoleConfig {
    /// Load from the environment; unset or unparsable values fall back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: get("INSIGHT_API_BASE_URL")
                .unwrap_or_else(|| "http://localhost:8000".into()),
            api_prefix: get("INSIGHT_API_PREFIX").unwrap_or_else(|| "/api".into()),
            token: get("INSIGHT_API_TOKEN").filter(|t| !t.trim().is_empty()),
            request_timeout_secs: get("INSIGHT_REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            page_size: get("INSIGHT_PAGE_SIZE")
                .and_then(|v| v.parse::<u32>().ok())
                .and_then(|v| PageSize::try_from(v).ok())
                .unwrap_or_default(),
            log_level: get("INSIGHT_LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: get("INSIGHT_LOG_DIR").filter(|d| !d.trim().is_empty()),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.base_url.clone())
            .with_api_prefix(self.api_prefix.clone())
            .with_timeout(self.request_timeout_secs)
            .with_page_size(self.page_size);

        match &self.token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
