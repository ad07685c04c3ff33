//! Application layer coordinating state, events, and actions.
//!
//! ```text
//! Key / Timer / WebRequestResult → Event → handle_event → AppState → Actions
//!                                                                      ↓
//!                                    main.rs: web_request, set_timeout, hide_self
//! ```
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and response routing
//! - [`modes`]: Input mode state machine
//! - [`state`]: Central state container and view model computation
//! - [`list`]: Character list controller (search, paging, location sync)
//! - [`detail`]: Character detail controller (two-stage fetch)
//! - [`debounce`]: Timer-driven debouncing

pub mod actions;
pub mod debounce;
pub mod detail;
pub mod handler;
pub mod list;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use debounce::Debouncer;
pub use detail::DetailView;
pub use handler::{handle_event, Event};
pub use list::{ListView, LoadPhase};
pub use modes::InputMode;
pub use state::{AppState, Screen, BACK_LABEL};
