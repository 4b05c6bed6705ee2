//! Roster session - controllers wired to a gateway
//!
//! One session per console. Each method runs one user action to completion:
//! it updates controller state, performs the gateway call if one is needed
//! and feeds the result back.

use shared::{CustomerId, DemoOutcome, ImportOutcome, PageSize};

use crate::ClientConfig;
use crate::controller::{
    ClickOutcome, FilterChange, PageController, PageNav, RefreshOutcome, RefreshOverrides,
    RefreshTicket, RowActionController, failure_notice,
};
use crate::error::ClientError;
use crate::gateway::CustomerGateway;
use crate::upload::CsvUpload;

/// Result of asking for a row's follow-up suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    /// Fetched; available through `RowActionController::displayed`
    Shown,
    Busy,
    Debounced,
    /// Row reset to idle; the next request fetches again
    Reopened,
    /// Fetch failed; the text is meant for a blocking notice
    Failed(String),
}

pub struct RosterSession<G: CustomerGateway> {
    gateway: G,
    page: PageController,
    actions: RowActionController,
    selected_file: Option<CsvUpload>,
}

impl<G: CustomerGateway> RosterSession<G> {
    pub fn new(gateway: G, config: &ClientConfig) -> Self {
        Self {
            gateway,
            page: PageController::new(config.page_size),
            actions: RowActionController::new(config.suggestion_debounce),
            selected_file: None,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn page(&self) -> &PageController {
        &self.page
    }

    pub fn actions(&self) -> &RowActionController {
        &self.actions
    }

    pub fn selected_file(&self) -> Option<&CsvUpload> {
        self.selected_file.as_ref()
    }

    pub fn choose_file(&mut self, upload: CsvUpload) {
        tracing::debug!(file = %upload.file_name, "CSV file chosen");
        self.selected_file = Some(upload);
    }

    /// Report a problem found before any request was made
    pub fn reject(&mut self, error: &ClientError) {
        self.page.reject(error);
    }

    async fn run(&mut self, ticket: RefreshTicket) -> RefreshOutcome {
        let result = self.gateway.list_customers(ticket.query()).await;
        self.page.apply_refresh(&ticket, result)
    }

    async fn run_opt(&mut self, ticket: Option<RefreshTicket>) -> Option<RefreshOutcome> {
        match ticket {
            Some(ticket) => Some(self.run(ticket).await),
            None => None,
        }
    }

    /// Reload the current page
    pub async fn refresh(&mut self) -> RefreshOutcome {
        let ticket = self.page.begin_refresh(RefreshOverrides::default());
        self.run(ticket).await
    }

    pub async fn set_filter(&mut self, change: FilterChange) -> Option<RefreshOutcome> {
        let ticket = self.page.set_filter(change);
        self.run_opt(ticket).await
    }

    pub async fn set_limit(&mut self, limit: PageSize) -> Option<RefreshOutcome> {
        let ticket = self.page.set_limit(limit);
        self.run_opt(ticket).await
    }

    /// `None` when the navigation is disabled
    pub async fn navigate(&mut self, nav: PageNav) -> Option<RefreshOutcome> {
        let ticket = self.page.navigate(nav);
        self.run_opt(ticket).await
    }

    /// Upload the chosen file, then reload from the first page
    pub async fn import(&mut self) -> Option<ImportOutcome> {
        let Some(upload) = self.selected_file.clone() else {
            self.page
                .reject(&ClientError::validation("Please choose a CSV file first."));
            return None;
        };

        self.page.begin_import();
        let result = self
            .gateway
            .import_customers(&upload)
            .await
            .map(|receipt| receipt.outcome);
        let outcome = result.as_ref().ok().copied();

        let ticket = self.page.finish_import(result);
        self.run_opt(ticket).await;
        outcome
    }

    /// Reseed the backend with demo data. Destructive: the caller must have
    /// asked the user for confirmation.
    pub async fn load_demo(&mut self) -> Option<DemoOutcome> {
        self.page.begin_demo_load();
        let result = self.gateway.load_demo().await;
        let outcome = result.as_ref().ok().copied();

        let ticket = self.page.finish_demo_load(result);
        self.run_opt(ticket).await;
        outcome
    }

    /// Click on a row's suggestion button
    pub async fn request_suggestion(&mut self, id: CustomerId) -> SuggestionOutcome {
        match self.actions.click(id) {
            ClickOutcome::Fetch => {
                let result = self.gateway.followup_suggestion(id).await;
                match self.actions.complete(id, result) {
                    Ok(()) => SuggestionOutcome::Shown,
                    Err(e) => SuggestionOutcome::Failed(failure_notice(&e)),
                }
            }
            ClickOutcome::Busy => SuggestionOutcome::Busy,
            ClickOutcome::Debounced => SuggestionOutcome::Debounced,
            ClickOutcome::Reopened => SuggestionOutcome::Reopened,
        }
    }

    pub fn dismiss_suggestion(&mut self) {
        self.actions.dismiss();
    }
}
