//! Pagination & filter controller
//!
//! Owns the list query (limit, offset, filters) and the last applied page.
//! It decides when a re-fetch is needed and with which parameters, but does
//! not perform I/O itself: every state change that needs data returns a
//! [`RefreshTicket`], the caller runs the query and hands the result back to
//! [`PageController::apply_refresh`].
//!
//! Tickets carry a monotonically increasing token. Only the response for the
//! most recently issued ticket is applied; anything older is dropped, so a
//! slow page-1 response can never overwrite a newer page-2 view.

use shared::{
    CustomerRecord, DemoOutcome, Filter, ImportOutcome, MembershipFilter, PageQuery, PageResult,
    PageSize, RiskFilter, page_number, page_offset, total_pages,
};

use crate::error::{ClientError, ClientResult};
use crate::projection::PageKpis;

pub const INITIAL_STATUS: &str = "Choose a CSV file and import it, or refresh to load stored customers.";

/// Page navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    Prev,
    Next,
    /// Direct jump to a 1-based page, clamped to the known page range
    Jump(u32),
}

/// Filter dimension change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Membership(MembershipFilter),
    Risk(RiskFilter),
}

/// Optional limit/offset to use instead of the current state for one refresh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshOverrides {
    pub limit: Option<PageSize>,
    pub offset: Option<u32>,
}

impl RefreshOverrides {
    pub fn offset(offset: u32) -> Self {
        Self {
            limit: None,
            offset: Some(offset),
        }
    }
}

/// An issued list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    token: u64,
    query: PageQuery,
}

impl RefreshTicket {
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn query(&self) -> &PageQuery {
        &self.query
    }
}

/// What happened to a refresh response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied { loaded: usize, total: u64 },
    Failed,
    /// A newer request was issued after this one; response dropped
    Stale,
}

/// Controller state
#[derive(Debug, Clone)]
pub struct PageController {
    limit: PageSize,
    offset: u32,
    membership: MembershipFilter,
    risk: RiskFilter,
    rows: Vec<CustomerRecord>,
    total: u64,
    kpis: PageKpis,
    has_loaded: bool,
    status: String,
    /// Last token handed out
    issued: u64,
    /// Token of the request whose response will be applied
    pending: Option<u64>,
    /// Import or demo reload in flight
    mutating: bool,
    /// Message from an import/demo reload, prefixed to the next page status
    notice: Option<String>,
}

impl PageController {
    pub fn new(limit: PageSize) -> Self {
        Self {
            limit,
            offset: 0,
            membership: Filter::All,
            risk: Filter::All,
            rows: Vec::new(),
            total: 0,
            kpis: PageKpis::default(),
            has_loaded: false,
            status: INITIAL_STATUS.to_string(),
            issued: 0,
            pending: None,
            mutating: false,
            notice: None,
        }
    }

    // ========== Read access ==========

    pub fn limit(&self) -> PageSize {
        self.limit
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn membership_filter(&self) -> &MembershipFilter {
        &self.membership
    }

    pub fn risk_filter(&self) -> &RiskFilter {
        &self.risk
    }

    pub fn rows(&self) -> &[CustomerRecord] {
        &self.rows
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn kpis(&self) -> PageKpis {
        self.kpis
    }

    pub fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some() || self.mutating
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn page(&self) -> u32 {
        page_number(self.offset, self.limit)
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.limit)
    }

    pub fn can_prev(&self) -> bool {
        self.can_navigate() && self.offset > 0
    }

    pub fn can_next(&self) -> bool {
        self.can_navigate() && self.page() < self.total_pages()
    }

    /// Jumps share the `next` guard: disabled on the last page
    pub fn can_jump(&self) -> bool {
        self.can_next()
    }

    fn can_navigate(&self) -> bool {
        self.has_loaded && !self.is_loading()
    }

    /// Query built from the current state
    pub fn current_query(&self) -> PageQuery {
        PageQuery {
            limit: self.limit,
            offset: self.offset,
            membership: self.membership.clone(),
            risk: self.risk.clone(),
        }
    }

    // ========== Refresh ==========

    /// Issue a list request. Limit/offset come from `overrides` when set,
    /// filters always from the current state. Never blocked by a request
    /// already in flight.
    pub fn begin_refresh(&mut self, overrides: RefreshOverrides) -> RefreshTicket {
        self.issued += 1;
        let token = self.issued;
        self.pending = Some(token);
        self.status = "Loading customers...".to_string();

        let query = PageQuery {
            limit: overrides.limit.unwrap_or(self.limit),
            offset: overrides.offset.unwrap_or(self.offset),
            membership: self.membership.clone(),
            risk: self.risk.clone(),
        };

        tracing::debug!(token, limit = query.limit.get(), offset = query.offset, "Refresh issued");
        RefreshTicket { token, query }
    }

    /// Apply the response for `ticket`. A failed fetch leaves rows and total
    /// untouched.
    pub fn apply_refresh(
        &mut self,
        ticket: &RefreshTicket,
        result: ClientResult<PageResult>,
    ) -> RefreshOutcome {
        if self.pending != Some(ticket.token) {
            tracing::debug!(
                token = ticket.token,
                latest = self.issued,
                "Discarding stale page response"
            );
            return RefreshOutcome::Stale;
        }
        self.pending = None;
        let notice = self.notice.take();

        match result {
            Ok(page) => {
                let loaded = page.items.len();
                let total = page.total;
                self.rows = page.items;
                self.total = total;
                self.kpis = PageKpis::from_rows(&self.rows);
                self.has_loaded = true;

                let query = &ticket.query;
                let summary = format!(
                    "Loaded {} customers (page {} of {}, {} total).",
                    loaded,
                    query.page(),
                    total_pages(total, query.limit),
                    total
                );
                self.status = join_status(notice, summary);

                tracing::info!(loaded, total, offset = query.offset, "Customer page applied");
                RefreshOutcome::Applied { loaded, total }
            }
            Err(e) => {
                tracing::warn!("Failed to load customers: {}", e);
                self.status = join_status(
                    notice,
                    format!("Failed to load customers: {}", e.user_message()),
                );
                RefreshOutcome::Failed
            }
        }
    }

    // ========== Filters & paging ==========

    /// Change one filter dimension. Before the first successful load this
    /// only records the filter; afterwards it resets to the first page and
    /// re-fetches.
    pub fn set_filter(&mut self, change: FilterChange) -> Option<RefreshTicket> {
        match change {
            FilterChange::Membership(filter) => self.membership = filter,
            FilterChange::Risk(filter) => self.risk = filter,
        }

        if !self.has_loaded {
            return None;
        }
        self.offset = 0;
        Some(self.begin_refresh(RefreshOverrides::offset(0)))
    }

    /// Change the page size, keeping the current page number when it still
    /// exists under the new size, else the last page
    pub fn set_limit(&mut self, limit: PageSize) -> Option<RefreshTicket> {
        if limit == self.limit {
            return None;
        }
        let page = self.page().min(total_pages(self.total, limit));
        self.limit = limit;
        self.offset = page_offset(page, limit);

        if !self.has_loaded {
            return None;
        }
        Some(self.begin_refresh(RefreshOverrides::default()))
    }

    /// Move to another page. The new offset is stored before the fetch
    /// resolves. Disabled navigation returns `None` and changes nothing.
    pub fn navigate(&mut self, nav: PageNav) -> Option<RefreshTicket> {
        let limit = self.limit.get();
        let next_offset = match nav {
            PageNav::Prev => {
                if !self.can_prev() {
                    return None;
                }
                self.offset.saturating_sub(limit)
            }
            PageNav::Next => {
                if !self.can_next() {
                    return None;
                }
                self.offset.saturating_add(limit)
            }
            PageNav::Jump(target) => {
                if !self.can_jump() {
                    return None;
                }
                let page = target.clamp(1, self.total_pages());
                page_offset(page, self.limit)
            }
        };

        self.offset = next_offset;
        Some(self.begin_refresh(RefreshOverrides::offset(next_offset)))
    }

    // ========== Import / demo data ==========

    pub fn begin_import(&mut self) {
        self.mutating = true;
        self.status = "Importing CSV...".to_string();
    }

    /// On success, go back to the first page and return the refresh to run
    pub fn finish_import(&mut self, result: ClientResult<ImportOutcome>) -> Option<RefreshTicket> {
        self.mutating = false;
        match result {
            Ok(outcome) => {
                tracing::info!(
                    inserted = outcome.inserted,
                    updated = outcome.updated,
                    total_rows = outcome.total_rows,
                    "CSV imported"
                );
                Some(self.reload_first_page(format!(
                    "Imported. inserted={}, updated={}, total_rows={}.",
                    outcome.inserted, outcome.updated, outcome.total_rows
                )))
            }
            Err(e) => {
                tracing::warn!("Import failed: {}", e);
                self.status = format!("Import failed: {}", e.user_message());
                None
            }
        }
    }

    pub fn begin_demo_load(&mut self) {
        self.mutating = true;
        self.status = "Loading demo data...".to_string();
    }

    pub fn finish_demo_load(&mut self, result: ClientResult<DemoOutcome>) -> Option<RefreshTicket> {
        self.mutating = false;
        match result {
            Ok(outcome) => {
                tracing::info!(rows = outcome.rows, "Demo data loaded");
                Some(self.reload_first_page(format!(
                    "Demo data loaded ({} rows).",
                    outcome.rows
                )))
            }
            Err(e) => {
                tracing::warn!("Demo data load failed: {}", e);
                self.status = format!("Loading demo data failed: {}", e.user_message());
                None
            }
        }
    }

    fn reload_first_page(&mut self, notice: String) -> RefreshTicket {
        self.offset = 0;
        let ticket = self.begin_refresh(RefreshOverrides::offset(0));
        self.status = format!("{} Loading customers...", notice);
        self.notice = Some(notice);
        ticket
    }

    /// Show a client-side precondition failure; nothing else changes
    pub fn reject(&mut self, error: &ClientError) {
        tracing::debug!("Rejected: {}", error);
        self.status = error.user_message();
    }
}

impl Default for PageController {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

fn join_status(notice: Option<String>, message: String) -> String {
    match notice {
        Some(notice) => format!("{} {}", notice, message),
        None => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::{CustomerId, MembershipTier, RiskLevel};

    fn rows(n: usize) -> Vec<CustomerRecord> {
        (0..n)
            .map(|i| CustomerRecord {
                id: CustomerId(i as i64 + 1),
                code: format!("C{:04}", i + 1),
                membership_tier: MembershipTier::Standard,
                total_spent: Decimal::from(100),
                visit_count: 1,
                last_visit_date: None,
                days_since_last_visit: 30,
                risk_level: RiskLevel::Low,
                risk_reason: String::new(),
            })
            .collect()
    }

    fn page(n: usize, total: u64) -> ClientResult<PageResult> {
        Ok(PageResult {
            items: rows(n),
            total,
        })
    }

    /// Controller with one page of a 250-row universe applied
    fn loaded(limit: PageSize, total: u64) -> PageController {
        let mut ctl = PageController::new(limit);
        let ticket = ctl.begin_refresh(RefreshOverrides::default());
        let n = total.min(u64::from(limit.get())) as usize;
        assert!(matches!(
            ctl.apply_refresh(&ticket, page(n, total)),
            RefreshOutcome::Applied { .. }
        ));
        ctl
    }

    #[test]
    fn test_initial_state() {
        let ctl = PageController::default();
        assert_eq!(ctl.page(), 1);
        assert_eq!(ctl.total_pages(), 1);
        assert!(!ctl.has_loaded());
        assert!(!ctl.is_loading());
        assert!(!ctl.can_prev());
        assert!(!ctl.can_next());
        assert_eq!(ctl.status(), INITIAL_STATUS);
    }

    #[test]
    fn test_refresh_success_replaces_rows_and_total() {
        let mut ctl = PageController::default();
        let ticket = ctl.begin_refresh(RefreshOverrides::default());
        assert!(ctl.is_loading());
        assert_eq!(ctl.status(), "Loading customers...");

        let outcome = ctl.apply_refresh(&ticket, page(100, 250));
        assert_eq!(
            outcome,
            RefreshOutcome::Applied {
                loaded: 100,
                total: 250
            }
        );
        assert!(ctl.has_loaded());
        assert!(!ctl.is_loading());
        assert_eq!(ctl.rows().len(), 100);
        assert_eq!(ctl.total(), 250);
        assert_eq!(ctl.kpis().page_count, 100);
        assert_eq!(
            ctl.status(),
            "Loaded 100 customers (page 1 of 3, 250 total)."
        );
    }

    #[test]
    fn test_refresh_failure_keeps_rows() {
        let mut ctl = loaded(PageSize::Hundred, 250);
        let ticket = ctl.begin_refresh(RefreshOverrides::default());
        let outcome = ctl.apply_refresh(&ticket, Err(ClientError::Decode("bad".into())));

        assert_eq!(outcome, RefreshOutcome::Failed);
        assert_eq!(ctl.rows().len(), 100);
        assert_eq!(ctl.total(), 250);
        assert!(!ctl.is_loading());
        assert!(ctl.status().starts_with("Failed to load customers:"));
    }

    #[test]
    fn test_refresh_overrides_take_precedence() {
        let mut ctl = PageController::new(PageSize::Fifty);
        let ticket = ctl.begin_refresh(RefreshOverrides {
            limit: Some(PageSize::TwoHundred),
            offset: Some(400),
        });
        assert_eq!(ticket.query().limit, PageSize::TwoHundred);
        assert_eq!(ticket.query().offset, 400);
        // state itself is not rewritten by overrides
        assert_eq!(ctl.limit(), PageSize::Fifty);
        assert_eq!(ctl.offset(), 0);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut ctl = loaded(PageSize::Hundred, 250);

        let first = ctl.navigate(PageNav::Next).unwrap();
        // Second request issued while the first is still in flight
        let second = ctl.begin_refresh(RefreshOverrides::offset(200));
        assert!(second.token() > first.token());

        // Newer response arrives first
        assert!(matches!(
            ctl.apply_refresh(&second, page(50, 250)),
            RefreshOutcome::Applied { loaded: 50, .. }
        ));
        let status = ctl.status().to_string();

        // Older one arrives late and must not overwrite anything
        assert_eq!(
            ctl.apply_refresh(&first, page(100, 999)),
            RefreshOutcome::Stale
        );
        assert_eq!(ctl.rows().len(), 50);
        assert_eq!(ctl.total(), 250);
        assert_eq!(ctl.status(), status);
    }

    #[test]
    fn test_stale_failure_is_discarded_too() {
        let mut ctl = loaded(PageSize::Hundred, 250);
        let first = ctl.begin_refresh(RefreshOverrides::default());
        let second = ctl.begin_refresh(RefreshOverrides::default());

        assert_eq!(
            ctl.apply_refresh(&first, Err(ClientError::validation("boom"))),
            RefreshOutcome::Stale
        );
        // Still waiting for the latest one
        assert!(ctl.is_loading());
        assert_eq!(ctl.status(), "Loading customers...");

        ctl.apply_refresh(&second, page(100, 250));
        assert!(!ctl.is_loading());
    }

    #[test]
    fn test_paging_scenario_250_rows() {
        let mut ctl = loaded(PageSize::Hundred, 250);
        assert_eq!(ctl.page(), 1);
        assert_eq!(ctl.total_pages(), 3);
        assert!(ctl.can_next());
        assert!(!ctl.can_prev());

        let ticket = ctl.navigate(PageNav::Next).unwrap();
        assert_eq!(ctl.offset(), 100);
        assert_eq!(ctl.page(), 2); // written before the response
        assert_eq!(ticket.query().offset, 100);
        ctl.apply_refresh(&ticket, page(100, 250));
        assert!(ctl.can_prev());
        assert!(ctl.can_next());

        let ticket = ctl.navigate(PageNav::Next).unwrap();
        assert_eq!(ctl.offset(), 200);
        ctl.apply_refresh(&ticket, page(50, 250));
        assert_eq!(ctl.page(), 3);
        assert!(!ctl.can_next());
        assert!(ctl.navigate(PageNav::Next).is_none());
        assert_eq!(ctl.offset(), 200);
    }

    #[test]
    fn test_prev_is_noop_on_first_page() {
        let mut ctl = loaded(PageSize::Hundred, 250);
        assert!(ctl.navigate(PageNav::Prev).is_none());
        assert_eq!(ctl.offset(), 0);
        assert!(!ctl.is_loading());
    }

    #[test]
    fn test_prev_goes_back_one_page() {
        let mut ctl = loaded(PageSize::Fifty, 250);
        let t = ctl.navigate(PageNav::Jump(4)).unwrap();
        ctl.apply_refresh(&t, page(50, 250));
        assert_eq!(ctl.offset(), 150);

        let t = ctl.navigate(PageNav::Prev).unwrap();
        assert_eq!(t.query().offset, 100);
        assert_eq!(ctl.page(), 3);
    }

    #[test]
    fn test_navigation_disabled_while_loading() {
        let mut ctl = loaded(PageSize::Hundred, 250);
        let _in_flight = ctl.navigate(PageNav::Next).unwrap();
        assert!(ctl.navigate(PageNav::Next).is_none());
        assert!(ctl.navigate(PageNav::Prev).is_none());
        assert!(ctl.navigate(PageNav::Jump(1)).is_none());
        assert_eq!(ctl.offset(), 100);
    }

    #[test]
    fn test_navigation_disabled_before_first_load() {
        let mut ctl = PageController::default();
        assert!(ctl.navigate(PageNav::Next).is_none());
        assert!(ctl.navigate(PageNav::Jump(2)).is_none());
    }

    #[test]
    fn test_jump_is_clamped() {
        let mut ctl = loaded(PageSize::Hundred, 250);
        let t = ctl.navigate(PageNav::Jump(99)).unwrap();
        assert_eq!(t.query().offset, 200);
        ctl.apply_refresh(&t, page(50, 250));
        assert_eq!(ctl.page(), ctl.total_pages());

        // last page reached: jump shares the next guard
        assert!(!ctl.can_jump());
        assert!(ctl.navigate(PageNav::Jump(1)).is_none());

        let mut ctl = loaded(PageSize::Hundred, 250);
        let t = ctl.navigate(PageNav::Jump(0)).unwrap();
        assert_eq!(t.query().offset, 0);
        assert_eq!(ctl.page(), 1);
    }

    #[test]
    fn test_jump_disabled_on_single_page() {
        let mut ctl = loaded(PageSize::Hundred, 40);
        assert!(!ctl.can_jump());
        assert!(ctl.navigate(PageNav::Jump(1)).is_none());
        assert!(!ctl.is_loading());
    }

    #[test]
    fn test_filter_before_first_load_does_not_fetch() {
        let mut ctl = PageController::default();
        let ticket = ctl.set_filter(FilterChange::Risk(Filter::Only(RiskLevel::High)));
        assert!(ticket.is_none());
        assert_eq!(ctl.risk_filter(), &Filter::Only(RiskLevel::High));
        assert!(!ctl.is_loading());
    }

    #[test]
    fn test_filter_after_load_resets_offset() {
        let mut ctl = loaded(PageSize::Hundred, 250);
        let t = ctl.navigate(PageNav::Next).unwrap();
        ctl.apply_refresh(&t, page(100, 250));
        assert_eq!(ctl.offset(), 100);

        let ticket = ctl
            .set_filter(FilterChange::Membership(Filter::Only(MembershipTier::Vip)))
            .unwrap();
        assert_eq!(ctl.offset(), 0);
        assert_eq!(ticket.query().offset, 0);
        assert_eq!(
            ticket.query().membership,
            Filter::Only(MembershipTier::Vip)
        );
    }

    #[test]
    fn test_filters_carry_into_later_queries() {
        let mut ctl = PageController::default();
        ctl.set_filter(FilterChange::Risk(Filter::Only(RiskLevel::Medium)));
        let ticket = ctl.begin_refresh(RefreshOverrides::default());
        assert_eq!(ticket.query().risk, Filter::Only(RiskLevel::Medium));
    }

    #[test]
    fn test_set_limit_keeps_page_number() {
        let mut ctl = loaded(PageSize::Fifty, 250);
        let t = ctl.navigate(PageNav::Jump(3)).unwrap();
        ctl.apply_refresh(&t, page(50, 250));
        assert_eq!(ctl.offset(), 100);

        let t = ctl.set_limit(PageSize::Hundred).unwrap();
        assert_eq!(ctl.page(), 3);
        assert_eq!(ctl.offset(), 200);
        assert_eq!(t.query().limit, PageSize::Hundred);
        assert_eq!(t.query().offset % 100, 0);
    }

    #[test]
    fn test_set_limit_clamps_page_to_new_range() {
        let mut ctl = loaded(PageSize::Fifty, 250);
        let t = ctl.navigate(PageNav::Jump(5)).unwrap();
        ctl.apply_refresh(&t, page(50, 250));
        assert_eq!(ctl.page(), 5);

        let t = ctl.set_limit(PageSize::TwoHundred).unwrap();
        assert_eq!(t.query().offset, 200);
        assert_eq!(ctl.offset(), 200);

        ctl.apply_refresh(&t, page(50, 250));
        assert_eq!(ctl.page(), 2);
        assert_eq!(ctl.total_pages(), 2);
        assert_eq!(ctl.rows().len(), 50);
        assert_eq!(ctl.status(), "Loaded 50 customers (page 2 of 2, 250 total).");
    }

    #[test]
    fn test_same_ticket_applies_once() {
        let mut ctl = loaded(PageSize::Hundred, 250);
        let t = ctl.navigate(PageNav::Next).unwrap();
        assert!(matches!(
            ctl.apply_refresh(&t, page(100, 250)),
            RefreshOutcome::Applied { .. }
        ));
        assert_eq!(ctl.apply_refresh(&t, page(7, 7)), RefreshOutcome::Stale);
        assert_eq!(ctl.rows().len(), 100);
        assert_eq!(ctl.total(), 250);
    }

    #[test]
    fn test_set_limit_before_load_only_records() {
        let mut ctl = PageController::default();
        assert!(ctl.set_limit(PageSize::TwoHundred).is_none());
        assert_eq!(ctl.limit(), PageSize::TwoHundred);
        assert!(ctl.set_limit(PageSize::TwoHundred).is_none());
    }

    #[test]
    fn test_import_success_reloads_first_page() {
        let mut ctl = loaded(PageSize::Hundred, 250);
        let t = ctl.navigate(PageNav::Next).unwrap();
        ctl.apply_refresh(&t, page(100, 250));

        ctl.begin_import();
        assert!(ctl.is_loading());
        assert_eq!(ctl.status(), "Importing CSV...");

        let ticket = ctl
            .finish_import(Ok(ImportOutcome {
                inserted: 40,
                updated: 10,
                total_rows: 50,
            }))
            .unwrap();
        assert_eq!(ctl.offset(), 0);
        assert_eq!(ticket.query().offset, 0);
        assert!(ctl.status().contains("inserted=40, updated=10, total_rows=50"));

        ctl.apply_refresh(&ticket, page(100, 300));
        assert!(ctl.status().contains("inserted=40, updated=10, total_rows=50"));
        assert!(ctl.status().contains("Loaded 100 customers"));
        assert!(!ctl.is_loading());
    }

    #[test]
    fn test_import_failure_leaves_page_untouched() {
        let mut ctl = loaded(PageSize::Hundred, 250);
        let t = ctl.navigate(PageNav::Next).unwrap();
        ctl.apply_refresh(&t, page(100, 250));

        ctl.begin_import();
        let ticket = ctl.finish_import(Err(ClientError::validation("Please upload a .csv file")));
        assert!(ticket.is_none());
        assert_eq!(ctl.offset(), 100);
        assert_eq!(ctl.rows().len(), 100);
        assert!(!ctl.is_loading());
        assert_eq!(ctl.status(), "Import failed: Please upload a .csv file");
    }

    #[test]
    fn test_demo_load_success_reloads_first_page() {
        let mut ctl = PageController::default();
        ctl.begin_demo_load();
        let ticket = ctl
            .finish_demo_load(Ok(DemoOutcome { rows: 500 }))
            .unwrap();
        assert_eq!(ticket.query().offset, 0);
        ctl.apply_refresh(&ticket, page(100, 500));
        assert!(ctl.status().starts_with("Demo data loaded (500 rows)."));
        assert!(ctl.has_loaded());
    }

    #[test]
    fn test_notice_survives_failed_reload() {
        let mut ctl = PageController::default();
        ctl.begin_import();
        let ticket = ctl
            .finish_import(Ok(ImportOutcome {
                inserted: 1,
                updated: 0,
                total_rows: 1,
            }))
            .unwrap();
        ctl.apply_refresh(&ticket, Err(ClientError::Decode("oops".into())));
        assert!(ctl.status().starts_with("Imported. inserted=1"));
        assert!(ctl.status().contains("Failed to load customers"));
    }

    #[test]
    fn test_reject_sets_status_only() {
        let mut ctl = loaded(PageSize::Hundred, 250);
        ctl.reject(&ClientError::validation("Please choose a CSV file first."));
        assert_eq!(ctl.status(), "Please choose a CSV file first.");
        assert_eq!(ctl.rows().len(), 100);
    }
}
