//! Customer Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable customer key assigned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub i64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Membership tier (会员等级)
///
/// The backend stores the tier as free text, so anything outside the three
/// known tiers is kept verbatim in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MembershipTier {
    Vip,
    Standard,
    Basic,
    Unknown(String),
}

impl MembershipTier {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Vip => "VIP",
            Self::Standard => "Standard",
            Self::Basic => "Basic",
            Self::Unknown(raw) => raw,
        }
    }

    pub fn is_vip(&self) -> bool {
        matches!(self, Self::Vip)
    }
}

impl From<String> for MembershipTier {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "VIP" => Self::Vip,
            "STANDARD" => Self::Standard,
            "BASIC" => Self::Basic,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<&str> for MembershipTier {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<MembershipTier> for String {
    fn from(tier: MembershipTier) -> Self {
        match tier {
            MembershipTier::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Churn risk assigned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown risk level: {}", other)),
        }
    }
}

/// Customer entity as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: CustomerId,
    #[serde(rename = "customer_code")]
    pub code: String,
    #[serde(rename = "membership_type")]
    pub membership_tier: MembershipTier,
    pub total_spent: Decimal,
    pub visit_count: u32,
    #[serde(default)]
    pub last_visit_date: Option<NaiveDate>,
    pub days_since_last_visit: u32,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub risk_reason: String,
}
