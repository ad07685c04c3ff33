//! Zellij plugin wrapper and entry point.
//!
//! The only module that calls the host. It translates Zellij events into
//! library [`Event`]s and executes the returned [`Action`]s.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState`
//! 2. **Permissions**: Request `WebAccess`; mount once granted
//! 3. **Update**: Map keys, timers and web responses to events
//! 4. **Render**: Delegate to the library renderer
//!
//! # Event Mapping
//!
//! - `Key` → navigation / search events, per screen and input mode
//! - `Timer` → `Event::TimerElapsed`
//! - `WebRequestResult` → `Event::FetchResolved` (context decoded from the map)
//! - `PermissionRequestResult(Granted)` → `Event::Mount`
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! List, normal mode:
//! - `j`/`Down`, `k`/`Up`: Move the row cursor
//! - `Enter`: Open the selected character
//! - `l`/`Right`/`n`, `h`/`Left`/`p`: Next / previous page
//! - `/`: Focus the search box
//! - `Backspace`: History back
//! - `q`: Close
//!
//! List, search mode:
//! - Printable keys: Edit the search
//! - `Backspace`: Delete a character
//! - `Enter`/`Esc`: Leave the search box
//!
//! Detail:
//! - `j`/`Down`, `k`/`Up`: Scroll the episodes
//! - `b`/`Esc`: Back to the home page
//! - `Backspace`: History back
//! - `q`: Close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use charbrowser::api::{RequestContext, URL_KEY};
use charbrowser::app::{AppState, Screen};
use charbrowser::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: charbrowser::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        charbrowser::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        self.app = charbrowser::initialize(&config);
        tracing::debug!(location = %config.location, debounce_ms = config.debounce.as_millis(), "app state initialized");

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", otel.name = %format!("plugin_update::{event_name}"));
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::TimerElapsed,
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                tracing::debug!("web access granted");
                Event::Mount
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                tracing::warn!("web access denied - nothing can be fetched");
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render = should_render, "event handled");
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        charbrowser::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps a key press to an event for the mounted screen and input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match (&self.app.screen, self.app.input_mode) {
            (Screen::List(_), InputMode::Search) => Some(match key.bare_key {
                BareKey::Enter | BareKey::Esc => Event::LeaveSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            (Screen::List(_), InputMode::Normal) => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Enter => Event::OpenSelected,
                BareKey::Right | BareKey::Char('l' | 'n') => Event::NextPage,
                BareKey::Left | BareKey::Char('h' | 'p') => Event::PrevPage,
                BareKey::Char('/') => Event::FocusSearch,
                BareKey::Backspace => Event::HistoryBack,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            }),
            (Screen::Detail(_), _) => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char('b') | BareKey::Esc => Event::BackToHome,
                BareKey::Backspace => Event::HistoryBack,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            }),
            (Screen::Blank, _) => match key.bare_key {
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            },
        }
    }

    /// Recovers the request context; responses we did not issue are ignored.
    fn map_web_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        match RequestContext::from_map(context) {
            Ok(request) => Some(Event::FetchResolved {
                context: request,
                status,
                body,
                url: context.get(URL_KEY).cloned().unwrap_or_default(),
            }),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring web response without a request context");
                None
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::Fetch(request) => {
                tracing::debug!(url = %request.url, request = request.context.kind(), "web request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.context_map(),
                );
            }
            Action::ArmTimer(delay) => set_timeout(delay.as_secs_f64()),
        }
    }
}
