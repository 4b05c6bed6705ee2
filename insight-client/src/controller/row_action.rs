//! Follow-up suggestion action, one state machine per customer row
//!
//! ```text
//!  Idle --click--> Loading --ok--> Done
//!   ^                 |             |
//!   +------err--------+             |
//!   +------click after debounce-----+
//! ```
//!
//! Clicks on a `Done` row inside the debounce window are ignored. Rows are
//! independent; only the most recent successful payload is kept for display.

use shared::{CustomerId, FollowupSuggestion};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

use crate::config::DEFAULT_SUGGESTION_DEBOUNCE;
use crate::error::{ClientError, ClientResult};

/// State of one row's action button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowActionState {
    Idle,
    Loading,
    Done { since: Instant },
}

impl RowActionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done { .. })
    }

    /// Short label for the row button
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Idle => "suggest",
            Self::Loading => "...",
            Self::Done { .. } => "done",
        }
    }
}

/// Result of clicking a row's button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Row moved to `Loading`; the caller must fetch and call `complete`
    Fetch,
    /// Request already in flight; button is disabled
    Busy,
    /// Done row clicked inside the debounce window
    Debounced,
    /// Done row clicked after the window; row is idle again
    Reopened,
}

/// Suggestion currently shown in the detail view
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedSuggestion {
    pub customer: CustomerId,
    pub suggestion: FollowupSuggestion,
}

#[derive(Debug, Clone)]
pub struct RowActionController {
    /// Only non-idle rows are stored
    states: HashMap<CustomerId, RowActionState>,
    debounce: Duration,
    displayed: Option<DisplayedSuggestion>,
}

impl RowActionController {
    pub fn new(debounce: Duration) -> Self {
        Self {
            states: HashMap::new(),
            debounce,
            displayed: None,
        }
    }

    pub fn state(&self, id: CustomerId) -> RowActionState {
        self.states.get(&id).copied().unwrap_or(RowActionState::Idle)
    }

    /// Number of rows that are not idle
    pub fn tracked(&self) -> usize {
        self.states.len()
    }

    pub fn displayed(&self) -> Option<&DisplayedSuggestion> {
        self.displayed.as_ref()
    }

    /// Close the detail view; row states are unaffected
    pub fn dismiss(&mut self) {
        self.displayed = None;
    }

    pub fn click(&mut self, id: CustomerId) -> ClickOutcome {
        self.click_at(id, Instant::now())
    }

    pub fn click_at(&mut self, id: CustomerId, now: Instant) -> ClickOutcome {
        match self.state(id) {
            RowActionState::Idle => {
                self.states.insert(id, RowActionState::Loading);
                ClickOutcome::Fetch
            }
            RowActionState::Loading => ClickOutcome::Busy,
            RowActionState::Done { since } => {
                if now.saturating_duration_since(since) < self.debounce {
                    tracing::debug!(customer_id = %id, "Suggestion click debounced");
                    ClickOutcome::Debounced
                } else {
                    self.states.remove(&id);
                    ClickOutcome::Reopened
                }
            }
        }
    }

    /// Finish a fetch started by [`ClickOutcome::Fetch`]. Failures put the row
    /// back to idle and are returned for the caller to show.
    pub fn complete(
        &mut self,
        id: CustomerId,
        result: ClientResult<FollowupSuggestion>,
    ) -> ClientResult<()> {
        self.complete_at(id, result, Instant::now())
    }

    pub fn complete_at(
        &mut self,
        id: CustomerId,
        result: ClientResult<FollowupSuggestion>,
        now: Instant,
    ) -> ClientResult<()> {
        if !self.state(id).is_loading() {
            tracing::debug!(customer_id = %id, "Suggestion response for a row that is not loading");
            return result.map(|_| ());
        }

        match result {
            Ok(suggestion) => {
                self.states.insert(id, RowActionState::Done { since: now });
                self.displayed = Some(DisplayedSuggestion {
                    customer: id,
                    suggestion,
                });
                Ok(())
            }
            Err(e) => {
                tracing::warn!(customer_id = %id, "Follow-up suggestion failed: {}", e);
                self.states.remove(&id);
                Err(e)
            }
        }
    }
}

impl Default for RowActionController {
    fn default() -> Self {
        Self::new(DEFAULT_SUGGESTION_DEBOUNCE)
    }
}

/// Convenience for callers that only need the failure text
pub fn failure_notice(error: &ClientError) -> String {
    format!("Could not fetch suggestion: {}", error.user_message())
}
