//! Insight Client - roster console core
//!
//! HTTP gateway to the InsightPilot API plus the state machines behind the
//! customer console: paging/filtering with stale-response protection, the
//! per-row follow-up suggestion action, and on-page KPIs.

pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod http;
pub mod projection;
pub mod session;
pub mod upload;

pub use config::ClientConfig;
pub use controller::{
    ClickOutcome, FilterChange, PageController, PageNav, RefreshOutcome, RefreshOverrides,
    RefreshTicket, RowActionController, RowActionState,
};
pub use error::{ClientError, ClientResult};
pub use gateway::CustomerGateway;
pub use http::HttpGateway;
pub use projection::PageKpis;
pub use session::{RosterSession, SuggestionOutcome};
pub use upload::CsvUpload;

// Re-export shared types for convenience
pub use shared;
