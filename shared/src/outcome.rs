//! Response payloads of the mutating endpoints

use crate::customer::RiskLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary returned by `POST /customers/import`
///
/// Counts only; the backend does not say which rows changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub inserted: u64,
    pub updated: u64,
    pub total_rows: u64,
}

/// Import response including the optional import job id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_id: Option<String>,
    #[serde(flatten)]
    pub outcome: ImportOutcome,
}

/// Result of `POST /customers/load_demo`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoOutcome {
    pub rows: u64,
}

/// AI follow-up recommendation for one customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowupSuggestion {
    pub summary: String,
    #[serde(default)]
    pub next_actions: Vec<String>,
    /// channel name → script text
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
