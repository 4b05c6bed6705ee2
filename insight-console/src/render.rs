//! Plain-text rendering of the console view

use insight_client::controller::{DisplayedSuggestion, PageController, RowActionController};
use std::fmt::Write;

/// Header, KPI cards, status line and customer table
pub fn render_page(page: &PageController, actions: &RowActionController) -> String {
    let mut out = String::new();

    let page_label = if page.has_loaded() {
        format!("Page {}/{}", page.page(), page.total_pages())
    } else {
        "Page -".to_string()
    };
    let _ = writeln!(
        out,
        "== Customers | {} | limit {} | membership: {} | risk: {} ==",
        page_label,
        page.limit(),
        page.membership_filter(),
        page.risk_filter()
    );

    if page.has_loaded() {
        let kpis = page.kpis();
        let _ = writeln!(
            out,
            "This page: {}  VIP: {}  High risk: {}  Avg days since last visit: {}",
            kpis.page_count, kpis.vip_count, kpis.high_risk_count, kpis.avg_days_since
        );
    }

    let _ = writeln!(out, "{}", page.status());

    if !page.has_loaded() {
        let _ = writeln!(out, "No data loaded yet. Import a CSV file or refresh.");
        return out;
    }
    if page.rows().is_empty() {
        let _ = writeln!(out, "Loaded, but there are no customers to show.");
        return out;
    }

    let _ = writeln!(
        out,
        "{:>6}  {:<10} {:<9} {:>12} {:>6} {:<10} {:>5}  {:<6} {:<8} REASON",
        "ID", "CODE", "TYPE", "SPENT", "VISITS", "LAST VISIT", "DAYS", "RISK", "AI"
    );
    for row in page.rows() {
        let last_visit = row
            .last_visit_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:>6}  {:<10} {:<9} {:>12} {:>6} {:<10} {:>5}  {:<6} {:<8} {}",
            row.id,
            row.code,
            row.membership_tier,
            row.total_spent.to_string(),
            row.visit_count,
            last_visit,
            row.days_since_last_visit,
            row.risk_level.as_str().to_uppercase(),
            actions.state(row.id).badge(),
            row.risk_reason
        );
    }

    let mut nav = Vec::new();
    if page.can_prev() {
        nav.push("prev");
    }
    if page.can_next() {
        nav.push("next");
    }
    if !nav.is_empty() {
        let _ = writeln!(out, "({})", nav.join(" | "));
    }

    out
}

/// Detail view of the last fetched follow-up suggestion
pub fn render_suggestion(shown: &DisplayedSuggestion) -> String {
    let mut out = String::new();
    let suggestion = &shown.suggestion;

    let _ = writeln!(out, "-- AI follow-up suggestion for customer {} --", shown.customer);
    let _ = writeln!(out, "Summary: {}", suggestion.summary);

    if !suggestion.next_actions.is_empty() {
        let _ = writeln!(out, "Next actions:");
        for (i, action) in suggestion.next_actions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, action);
        }
    }

    if !suggestion.scripts.is_empty() {
        let _ = writeln!(out, "Scripts:");
        for (channel, script) in &suggestion.scripts {
            let _ = writeln!(out, "  [{}]", channel);
            for line in script.lines() {
                let _ = writeln!(out, "    {}", line);
            }
        }
    }

    if !suggestion.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", suggestion.tags.join(", "));
    }
    let _ = writeln!(out, "(type `close` to dismiss)");
    out
}
