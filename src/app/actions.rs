//! Side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after each event; `main.rs` runs
//! them in order through the Zellij host API. Keeping host calls out of the
//! library lets every state transition be tested natively.

use crate::api::FetchRequest;
use std::time::Duration;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues an HTTP GET through `web_request`. The response comes back as
    /// an `Event::FetchResolved` carrying the same context.
    Fetch(FetchRequest),

    /// Arms a one-shot host timer that later produces `Event::TimerElapsed`.
    ArmTimer(Duration),
}
