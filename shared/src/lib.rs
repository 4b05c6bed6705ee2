//! Shared types for InsightPilot
//!
//! Wire and domain types used by the client library and the console:
//! customer records, list queries with page arithmetic, and the payloads of
//! the import / demo / follow-up endpoints.

pub mod customer;
pub mod outcome;
pub mod page;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use customer::{CustomerId, CustomerRecord, MembershipTier, RiskLevel};
pub use outcome::{DemoOutcome, FollowupSuggestion, HealthStatus, ImportOutcome, ImportReceipt};
pub use page::{
    Filter, InvalidPageSize, MembershipFilter, PageQuery, PageResult, PageSize, RiskFilter,
    page_number, page_offset, total_pages,
};
