//! Client configuration

use shared::PageSize;
use std::time::Duration;

use crate::error::{ClientError, ClientResult};

/// Window during which a second click on a finished row is ignored
pub const DEFAULT_SUGGESTION_DEBOUNCE: Duration = Duration::from_secs(2);

/// Client configuration for connecting to the InsightPilot API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Path prefix of the API routes
    pub api_prefix: String,

    /// Bearer token, attached when present
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Page size used before the user picks one
    pub page_size: PageSize,

    /// Debounce window for the follow-up suggestion button
    pub suggestion_debounce: Duration,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_prefix: "/api".to_string(),
            token: None,
            timeout: 30,
            page_size: PageSize::default(),
            suggestion_debounce: DEFAULT_SUGGESTION_DEBOUNCE,
        }
    }

    /// Set the API path prefix ("" for none)
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_suggestion_debounce(mut self, window: Duration) -> Self {
        self.suggestion_debounce = window;
        self
    }

    /// Base URL joined with the API prefix, without a trailing slash
    pub fn api_root(&self) -> ClientResult<String> {
        let base = self.base_url.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }

        let prefix = self.api_prefix.trim().trim_matches('/');
        if prefix.is_empty() {
            Ok(base.to_string())
        } else {
            Ok(format!("{}/{}", base, prefix))
        }
    }

    /// Create the HTTP gateway from this configuration
    pub fn build_gateway(&self) -> ClientResult<super::HttpGateway> {
        super::HttpGateway::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
