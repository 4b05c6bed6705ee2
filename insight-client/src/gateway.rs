//! Remote data gateway
//!
//! The four backend operations the console depends on. Implementations are
//! stateless apart from connection settings; controllers only see this
//! trait, so tests drive them with an in-memory gateway.

use async_trait::async_trait;
use shared::{CustomerId, DemoOutcome, FollowupSuggestion, ImportReceipt, PageQuery, PageResult};

use crate::error::ClientResult;
use crate::upload::CsvUpload;

#[async_trait]
pub trait CustomerGateway: Send + Sync {
    /// `GET /customers` with paging and filters
    async fn list_customers(&self, query: &PageQuery) -> ClientResult<PageResult>;

    /// `POST /customers/import` as multipart field `file`
    async fn import_customers(&self, upload: &CsvUpload) -> ClientResult<ImportReceipt>;

    /// `POST /customers/load_demo`; replaces everything stored on the backend
    async fn load_demo(&self) -> ClientResult<DemoOutcome>;

    /// `POST /customers/{id}/followup_suggestion`
    async fn followup_suggestion(&self, id: CustomerId) -> ClientResult<FollowupSuggestion>;
}
