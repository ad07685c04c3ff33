//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only entry point the runtime uses. It takes one
//! [`Event`], mutates [`AppState`] and returns whether the frame must be
//! redrawn plus the side effects to run.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `OpenSelected`, `NextPage`, `PrevPage`,
//!   `BackToHome`, `HistoryBack`
//! - **Input**: `FocusSearch`, `LeaveSearch`, `Char`, `Backspace`
//! - **System**: `Mount`, `TimerElapsed`, `FetchResolved`, `CloseFocus`
//!
//! Responses are routed by their [`RequestContext`]. A response whose view is
//! no longer mounted (another screen, an earlier list mount, or a detail view
//! for another character) is dropped.

use crate::api::{RawResponse, RequestContext};
use crate::app::state::Screen;
use crate::app::{Action, AppState, InputMode};
use crate::domain::error::Result;
use crate::domain::ListQuery;

/// Events produced by the runtime from key presses and host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mounts the screen for the current location (after permissions).
    Mount,
    /// Moves the list row cursor down (wraps to top) or scrolls the
    /// detail episodes.
    KeyDown,
    /// Moves the list row cursor up (wraps to bottom) or scrolls the detail
    /// episodes.
    KeyUp,
    /// Follows the name link of the selected row.
    OpenSelected,
    NextPage,
    PrevPage,
    /// Gives the search box input focus.
    FocusSearch,
    /// Returns focus to the table, keeping the typed text.
    LeaveSearch,
    /// Appends a character to the search box.
    Char(char),
    /// Removes the last character from the search box.
    Backspace,
    /// Activates the detail screen's back link.
    BackToHome,
    /// Returns to the previous location.
    HistoryBack,
    /// Hides the plugin pane.
    CloseFocus,
    /// A host timer armed by [`Action::ArmTimer`] expired.
    TimerElapsed,
    /// A fetch issued by [`Action::Fetch`] completed.
    FetchResolved {
        context: RequestContext,
        status: u16,
        body: Vec<u8>,
        url: String,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the frame should be redrawn.
///
/// # Errors
///
/// Returns location encoding errors from list synchronization.
///
/// # Example
///
/// ```rust
/// use charbrowser::app::{handle_event, Action, AppState, Event};
/// use charbrowser::api::ApiEndpoints;
/// use charbrowser::domain::Router;
/// use charbrowser::ui::Theme;
/// use std::time::Duration;
///
/// let mut state = AppState::new(ApiEndpoints::default(), Router::default(), Theme::default(), Duration::from_millis(300));
/// let (render, actions) = handle_event(&mut state, &Event::Mount)?;
/// assert!(render);
/// assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
/// # Ok::<(), charbrowser::domain::BrowserError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = %event_name(event)).entered();

    match event {
        Event::Mount => {
            if state.is_mounted() {
                tracing::debug!("already mounted");
                return Ok((false, vec![]));
            }
            Ok((true, state.mount()))
        }
        Event::KeyDown => match &mut state.screen {
            Screen::List(list) => {
                list.move_selection_down();
                Ok((true, vec![]))
            }
            Screen::Detail(detail) => Ok((detail.move_cursor_down(), vec![])),
            Screen::Blank => Ok((false, vec![])),
        },
        Event::KeyUp => match &mut state.screen {
            Screen::List(list) => {
                list.move_selection_up();
                Ok((true, vec![]))
            }
            Screen::Detail(detail) => Ok((detail.move_cursor_up(), vec![])),
            Screen::Blank => Ok((false, vec![])),
        },
        Event::OpenSelected => {
            let Screen::List(list) = &state.screen else {
                return Ok((false, vec![]));
            };
            let Some(character) = list.selected_character() else {
                tracing::debug!("no character selected");
                return Ok((false, vec![]));
            };
            let href = crate::ui::table::TableRow::link(character);
            tracing::debug!(id = %character.id, name = %character.name, "opening character");
            Ok((true, state.navigate(href)))
        }
        Event::NextPage | Event::PrevPage => {
            let Screen::List(list) = &mut state.screen else {
                return Ok((false, vec![]));
            };
            let pager = list.pager();
            let target = if *event == Event::NextPage { pager.next() } else { pager.prev() };
            let Some(page) = target else {
                tracing::debug!(page = pager.page, "pager button disabled");
                return Ok((false, vec![]));
            };
            if !list.set_page(page) {
                return Ok((false, vec![]));
            }
            Ok((true, state.sync_list()?))
        }
        Event::FocusSearch => {
            if !matches!(state.screen, Screen::List(_)) {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::LeaveSearch => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let Screen::List(list) = &mut state.screen else {
                return Ok((false, vec![]));
            };
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }
            let delay = list.type_char(*c);
            Ok((true, vec![Action::ArmTimer(delay)]))
        }
        Event::Backspace => {
            let Screen::List(list) = &mut state.screen else {
                return Ok((false, vec![]));
            };
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }
            Ok(list
                .delete_char()
                .map_or((false, vec![]), |delay| (true, vec![Action::ArmTimer(delay)])))
        }
        Event::BackToHome => {
            if !matches!(state.screen, Screen::Detail(_)) {
                return Ok((false, vec![]));
            }
            Ok((true, state.navigate("/")))
        }
        Event::HistoryBack => {
            let actions = state.history_back();
            Ok((!actions.is_empty(), actions))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::TimerElapsed => {
            if !state.expire_timer() {
                return Ok((false, vec![]));
            }
            Ok((true, state.sync_list()?))
        }
        Event::FetchResolved { context, status, body, url } => {
            let response = RawResponse {
                status: *status,
                body,
                url,
            };
            tracing::debug!(request = context.kind(), status = status, bytes = body.len(), url = %url, "fetch resolved");
            Ok(resolve_fetch(state, context, response))
        }
    }
}

/// Applies a response to the view that requested it.
fn resolve_fetch(state: &mut AppState, context: &RequestContext, response: RawResponse<'_>) -> (bool, Vec<Action>) {
    match (context, &mut state.screen) {
        (RequestContext::CharacterPage { view, name, page }, Screen::List(list)) if *view == list.view => {
            list.resolve(&ListQuery::new(name.clone(), *page), response.character_page());
            (true, vec![])
        }
        (RequestContext::Character { id }, Screen::Detail(detail)) if *id == detail.id => {
            let next = detail.resolve_character(&state.endpoints, response.character());
            (true, next.map(Action::Fetch).into_iter().collect())
        }
        (RequestContext::Episodes { character_id, .. }, Screen::Detail(detail)) if *character_id == detail.id => {
            detail.resolve_episodes(response.episodes());
            (true, vec![])
        }
        _ => {
            tracing::debug!(request = context.kind(), "dropping response for unmounted view");
            (false, vec![])
        }
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Mount => "mount",
        Event::KeyDown => "key_down",
        Event::KeyUp => "key_up",
        Event::OpenSelected => "open_selected",
        Event::NextPage => "next_page",
        Event::PrevPage => "prev_page",
        Event::FocusSearch => "focus_search",
        Event::LeaveSearch => "leave_search",
        Event::Char(_) => "char",
        Event::Backspace => "backspace",
        Event::BackToHome => "back_to_home",
        Event::HistoryBack => "history_back",
        Event::CloseFocus => "close_focus",
        Event::TimerElapsed => "timer_elapsed",
        Event::FetchResolved { .. } => "fetch_resolved",
    }
}
