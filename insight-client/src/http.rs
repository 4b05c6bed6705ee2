//! HTTP gateway for the InsightPilot API

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::{
    CustomerId, DemoOutcome, FollowupSuggestion, HealthStatus, ImportReceipt, PageQuery,
    PageResult,
};

use crate::error::interpret_response;
use crate::gateway::CustomerGateway;
use crate::upload::{CSV_MIME, CsvUpload};
use crate::{ClientConfig, ClientError, ClientResult};

/// A reqwest builder failure is a setup problem, not a network one
fn client_build_error(e: impl std::fmt::Display) -> ClientError {
    ClientError::Config(format!("Failed to build HTTP client: {}", e))
}

/// Network gateway backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    api_root: String,
    token: Option<String>,
}

impl HttpGateway {
    /// Create a new gateway from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .map_err(client_build_error)?;

        Ok(Self {
            client,
            api_root: config.api_root()?,
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Base URL including the API prefix
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path.trim_start_matches('/'))
    }

    /// Attach the bearer token when there is one; no token is not an error here
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send, read the body as text, then interpret it
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = self.authorize(request).send().await.map_err(|e| {
            tracing::warn!("Request failed before a response: {}", e);
            ClientError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(status = status.as_u16(), bytes = text.len(), "Response received");

        interpret_response(status, &text)
    }

    /// Backend liveness check
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        tracing::debug!("GET /health");
        self.send(self.client.get(self.url("/health"))).await
    }
}

#[async_trait]
impl CustomerGateway for HttpGateway {
    async fn list_customers(&self, query: &PageQuery) -> ClientResult<PageResult> {
        tracing::debug!(
            limit = query.limit.get(),
            offset = query.offset,
            membership = %query.membership,
            risk = %query.risk,
            "GET /customers"
        );
        let request = self
            .client
            .get(self.url("/customers"))
            .query(&query.to_params());
        self.send(request).await
    }

    async fn import_customers(&self, upload: &CsvUpload) -> ClientResult<ImportReceipt> {
        tracing::debug!(file = %upload.file_name, size = upload.len(), "POST /customers/import");
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(CSV_MIME)
            .map_err(|e| ClientError::validation(format!("Failed to create multipart: {}", e)))?;
        let form = Form::new().part("file", part);

        let request = self
            .client
            .post(self.url("/customers/import"))
            .multipart(form);
        self.send(request).await
    }

    async fn load_demo(&self) -> ClientResult<DemoOutcome> {
        tracing::debug!("POST /customers/load_demo");
        self.send(self.client.post(self.url("/customers/load_demo")))
            .await
    }

    async fn followup_suggestion(&self, id: CustomerId) -> ClientResult<FollowupSuggestion> {
        tracing::debug!(customer_id = %id, "POST /customers/{{id}}/followup_suggestion");
        let path = format!("/customers/{}/followup_suggestion", id);
        self.send(self.client.post(self.url(&path))).await
    }
}
