//! UI state controllers
//!
//! Both controllers are synchronous state machines. Anything that needs the
//! network is handed back to the caller as a request to run; the caller
//! feeds the result back in.

pub mod page;
pub mod row_action;

pub use page::{
    FilterChange, INITIAL_STATUS, PageController, PageNav, RefreshOutcome, RefreshOverrides,
    RefreshTicket,
};
pub use row_action::{
    ClickOutcome, DisplayedSuggestion, RowActionController, RowActionState, failure_notice,
};
