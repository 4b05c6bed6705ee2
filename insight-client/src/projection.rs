//! On-page KPIs derived from the loaded rows

use shared::{CustomerRecord, RiskLevel};

/// KPI cards for the current page only, never the filtered total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageKpis {
    pub page_count: usize,
    pub vip_count: usize,
    pub high_risk_count: usize,
    /// Mean of `days_since_last_visit`, rounded half up; 0 for an empty page
    pub avg_days_since: u32,
}

impl PageKpis {
    pub fn from_rows(rows: &[CustomerRecord]) -> Self {
        if rows.is_empty() {
            return Self::default();
        }

        let vip_count = rows.iter().filter(|r| r.membership_tier.is_vip()).count();
        let high_risk_count = rows
            .iter()
            .filter(|r| r.risk_level == RiskLevel::High)
            .count();

        let n = rows.len() as u64;
        let sum: u64 = rows
            .iter()
            .map(|r| u64::from(r.days_since_last_visit))
            .sum();
        let avg = (2 * sum + n) / (2 * n);

        Self {
            page_count: rows.len(),
            vip_count,
            high_risk_count,
            avg_days_since: u32::try_from(avg).unwrap_or(u32::MAX),
        }
    }
}
