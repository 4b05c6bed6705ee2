//! 分页与过滤
//!
//! List query parameters and the page arithmetic shared by the client
//! controllers and the console renderer.

use crate::customer::{CustomerRecord, MembershipTier, RiskLevel};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Page sizes offered by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    Fifty,
    #[default]
    Hundred,
    TwoHundred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported page size {0} (expected 50, 100 or 200)")]
pub struct InvalidPageSize(pub u32);

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Fifty, PageSize::Hundred, PageSize::TwoHundred];

    pub fn get(self) -> u32 {
        match self {
            Self::Fifty => 50,
            Self::Hundred => 100,
            Self::TwoHundred => 200,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            50 => Ok(Self::Fifty),
            100 => Ok(Self::Hundred),
            200 => Ok(Self::TwoHundred),
            other => Err(InvalidPageSize(other)),
        }
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

/// A filter dimension: either unconstrained or pinned to one value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Filter<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(v) => Some(v),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.pad("all"),
            Self::Only(v) => v.fmt(f),
        }
    }
}

pub type MembershipFilter = Filter<MembershipTier>;
pub type RiskFilter = Filter<RiskLevel>;

/// List query sent to `GET /customers`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub limit: PageSize,
    pub offset: u32,
    pub membership: MembershipFilter,
    pub risk: RiskFilter,
}

impl PageQuery {
    /// Query-string pairs; `all` filters are left out
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", self.limit.get().to_string()),
            ("offset", self.offset.to_string()),
        ];
        if let Some(tier) = self.membership.value() {
            params.push(("membership_type", tier.as_str().to_string()));
        }
        if let Some(level) = self.risk.value() {
            params.push(("risk_level", level.as_str().to_string()));
        }
        params
    }

    pub fn page(&self) -> u32 {
        page_number(self.offset, self.limit)
    }
}

/// One page of the filtered customer universe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    pub items: Vec<CustomerRecord>,
    /// Size of the filtered universe, not of `items`
    pub total: u64,
}

/// 1-based page number for an offset
pub fn page_number(offset: u32, limit: PageSize) -> u32 {
    offset / limit.get() + 1
}

/// Number of pages for `total` rows, never less than one
pub fn total_pages(total: u64, limit: PageSize) -> u32 {
    let limit = u64::from(limit.get());
    let pages = total.div_ceil(limit).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Offset of the first row on a 1-based page
pub fn page_offset(page: u32, limit: PageSize) -> u32 {
    page.saturating_sub(1).saturating_mul(limit.get())
}
