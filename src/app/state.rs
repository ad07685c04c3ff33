//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the location
//! history, the mounted screen and its view controller, the input mode and the
//! theme. The mounted screen is always derived from the current location;
//! every navigation goes through [`AppState::navigate`] or
//! [`AppState::history_back`], which remount it.
//!
//! # Example
//!
//! ```rust
//! use charbrowser::api::ApiEndpoints;
//! use charbrowser::app::{Action, AppState};
//! use charbrowser::domain::Router;
//! use charbrowser::ui::Theme;
//! use std::time::Duration;
//!
//! let mut state = AppState::new(
//!     ApiEndpoints::default(),
//!     Router::new("/?page=2"),
//!     Theme::default(),
//!     Duration::from_millis(300),
//! );
//! let actions = state.mount();
//! assert!(matches!(&actions[0], Action::Fetch(request) if request.url.contains("page=2")));
//! ```

use super::detail::DetailView;
use super::list::ListView;
use super::modes::InputMode;
use super::Action;
use crate::api::ApiEndpoints;
use crate::domain::error::Result;
use crate::domain::{ListQuery, Route, Router};
use crate::ui::table::{build_table, visible_window, CHARACTER_COLUMNS};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, DetailViewModel, FooterInfo, HeaderInfo, ImageInfo, SearchBarInfo, SpinnerInfo, UIViewModel,
};
use std::time::Duration;

/// Title bar text.
pub const TITLE: &str = " Rick and Morty Characters ";
/// Text of the detail screen's back link.
pub const BACK_LABEL: &str = "BACK TO THE HOME PAGE";
const SEARCH_PLACEHOLDER: &str = "Search characters by name (press /)";

/// Rows taken by everything but table rows on the list screen: blank line,
/// title, location, two borders, search box, table header, pager with its
/// spacer, and footer.
const LIST_CHROME_ROWS: usize = 13;

/// Rows taken on the detail screen by everything but attributes, the image
/// line and episode lines: blank line, title, location, border, spacer, back
/// link with its spacer, the Episodes heading with its spacer, the bottom
/// border, footer and the last pane row.
const DETAIL_CHROME_ROWS: usize = 12;
/// Image reference line plus its spacer.
const IMAGE_ROWS: usize = 2;

/// The mounted screen.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Nothing mounted yet (waiting for permissions).
    Blank,
    List(ListView),
    Detail(DetailView),
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    pub endpoints: ApiEndpoints,
    /// Location history; the last entry is the current location.
    pub router: Router,
    pub screen: Screen,
    pub input_mode: InputMode,
    pub theme: Theme,
    /// Search debounce delay handed to every list view.
    pub debounce: Duration,
    /// Debounce timers armed by list views that have since been unmounted.
    /// Their expirations are swallowed before reaching the mounted view.
    orphan_timers: usize,
    /// Lists mounted so far; the mounted list carries the latest count.
    list_mounts: u64,
}

impl AppState {
    /// Creates an unmounted state. Call [`AppState::mount`] to start fetching.
    #[must_use]
    pub fn new(endpoints: ApiEndpoints, router: Router, theme: Theme, debounce: Duration) -> Self {
        Self {
            endpoints,
            router,
            screen: Screen::Blank,
            input_mode: InputMode::Normal,
            theme,
            debounce,
            orphan_timers: 0,
            list_mounts: 0,
        }
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        !matches!(self.screen, Screen::Blank)
    }

    /// Mounts the screen for the current location and returns its first fetch.
    ///
    /// An unparseable location is replaced by `/`.
    pub fn mount(&mut self) -> Vec<Action> {
        let route = self.router.route().unwrap_or_else(|e| {
            tracing::warn!(location = %self.router.current(), error = %e, "invalid location, showing the list");
            self.router.replace("/");
            Route::List(ListQuery::default())
        });

        if let Screen::List(list) = &self.screen {
            self.orphan_timers += list.armed_timers();
        }
        self.input_mode = InputMode::Normal;

        let _span = tracing::debug_span!("mount", location = %self.router.current()).entered();
        match route {
            Route::List(query) => {
                self.list_mounts += 1;
                let mut list = ListView::new(&query, self.debounce, self.list_mounts);
                let request = list.fetch(&self.endpoints);
                self.screen = Screen::List(list);
                vec![Action::Fetch(request)]
            }
            Route::Character { id } => {
                let detail = DetailView::new(id);
                let request = detail.fetch_character(&self.endpoints);
                self.screen = Screen::Detail(detail);
                vec![Action::Fetch(request)]
            }
        }
    }

    /// Pushes `href` onto the history and mounts it.
    pub fn navigate(&mut self, href: impl Into<String>) -> Vec<Action> {
        self.router.push(href);
        self.mount()
    }

    /// Returns to the previous location, remounting it. Does nothing at the
    /// first entry.
    pub fn history_back(&mut self) -> Vec<Action> {
        if !self.router.back() {
            tracing::debug!("history exhausted");
            return vec![];
        }
        self.mount()
    }

    /// Re-fetches the list after its effective `(name, page)` changed and
    /// pushes the matching location if it diverged from the current one.
    ///
    /// # Errors
    ///
    /// Propagates query encoding errors.
    pub fn sync_list(&mut self) -> Result<Vec<Action>> {
        let current = match self.router.route() {
            Ok(Route::List(query)) => query,
            _ => ListQuery::default(),
        };

        let Screen::List(list) = &mut self.screen else {
            return Ok(vec![]);
        };

        if let Some(href) = list.location_update(&current)? {
            self.router.push(href);
        }
        Ok(vec![Action::Fetch(list.fetch(&self.endpoints))])
    }

    /// Consumes one host timer expiration.
    ///
    /// Returns `true` when the mounted list committed a changed search.
    pub fn expire_timer(&mut self) -> bool {
        if self.orphan_timers > 0 {
            self.orphan_timers -= 1;
            tracing::trace!(remaining = self.orphan_timers, "orphaned debounce timer expired");
            return false;
        }
        match &mut self.screen {
            Screen::List(list) => list.expire_debounce(),
            _ => false,
        }
    }

    /// Computes the complete view model for one frame.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let header = HeaderInfo {
            title: TITLE.to_string(),
            location: self.router.current().to_string(),
        };

        let (search_bar, body) = match &self.screen {
            Screen::Blank => (None, Self::spinner("Waiting for web access...")),
            Screen::List(list) => {
                let search_bar = SearchBarInfo {
                    query: list.search_input.clone(),
                    placeholder: SEARCH_PLACEHOLDER,
                    is_focused: self.input_mode.is_search(),
                };
                let body = list.data.as_ref().map_or_else(
                    || Self::spinner("Loading characters..."),
                    |data| {
                        Body::Table(build_table(
                            &CHARACTER_COLUMNS,
                            data,
                            list.pager(),
                            list.selected_index,
                            &list.search_text,
                            rows.saturating_sub(LIST_CHROME_ROWS).max(1),
                        ))
                    },
                );
                (Some(search_bar), body)
            }
            Screen::Detail(detail) => (None, Self::detail_body(detail, rows)),
        };

        UIViewModel {
            header,
            search_bar,
            body,
            footer: self.compute_footer(),
        }
    }

    fn detail_body(detail: &DetailView, rows: usize) -> Body {
        let Some(character) = &detail.character else {
            return Self::spinner("Loading character...");
        };

        let attributes: Vec<(String, String)> = character
            .attributes()
            .into_iter()
            .map(|(label, value)| (label.to_string(), value.to_string()))
            .collect();
        let image = (!character.image.is_empty()).then(|| ImageInfo {
            src: character.image.clone(),
            alt: character.name.clone(),
        });

        let chrome = DETAIL_CHROME_ROWS + attributes.len() + if image.is_some() { IMAGE_ROWS } else { 0 };
        let lines = detail.episode_lines();
        let total = lines.as_ref().map_or(0, Vec::len);
        let (start, end) = visible_window(total, detail.episode_cursor, rows.saturating_sub(chrome).max(1));

        Body::Detail(DetailViewModel {
            back_label: BACK_LABEL,
            attributes,
            image,
            episodes: lines.map(|lines| lines[start..end].to_vec()),
            selected_episode: detail.episode_cursor.saturating_sub(start),
            first_episode: start,
            total_episodes: total,
        })
    }

    fn spinner(message: &str) -> Body {
        Body::Spinner(SpinnerInfo {
            label: "spinner",
            message: message.to_string(),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (&self.screen, self.input_mode) {
            (Screen::Blank, _) => "Grant web access to browse characters  q: quit",
            (Screen::List(_), InputMode::Search) => "Type to search  Backspace: delete  Enter/ESC: done  Ctrl+n/p: navigate",
            (Screen::List(_), InputMode::Normal) => {
                "j/k: navigate  Enter: open  h/l: page  /: search  Backspace: back  q: quit"
            }
            (Screen::Detail(_), _) => "j/k: scroll episodes  b/ESC: home  Backspace: back  q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(location: &str) -> AppState {
        AppState::new(
            ApiEndpoints::from_root("https://example.test/api").unwrap(),
            Router::new(location),
            Theme::default(),
            Duration::from_millis(300),
        )
    }

    #[test]
    fn blank_state_shows_single_spinner() {
        let vm = state("/").compute_viewmodel(24, 80);
        assert!(matches!(vm.body, Body::Spinner(ref s) if s.label == "spinner"));
        assert!(vm.search_bar.is_none());
    }

    #[test]
    fn mount_fetches_location_query() {
        let mut state = state("/?page=3&name=rick");
        let actions = state.mount();
        assert_eq!(
            actions,
            vec![Action::Fetch(crate::api::FetchRequest {
                url: "https://example.test/api/character?page=3&name=rick".into(),
                context: crate::api::RequestContext::CharacterPage { view: 1, name: "rick".into(), page: 3 },
            })]
        );
        assert_eq!(state.router.entries().len(), 1);
    }

    #[test]
    fn invalid_location_mounts_the_list() {
        let mut state = state("/planets/earth");
        state.mount();
        assert_eq!(state.router.current(), "/");
        assert!(matches!(state.screen, Screen::List(_)));
    }

    #[test]
    fn every_list_mount_gets_a_new_view_number() {
        let mut state = state("/");
        state.mount();
        state.navigate("/character/1");
        state.history_back();
        assert!(matches!(state.screen, Screen::List(ref l) if l.view == 2));
    }

    #[test]
    fn detail_location_mounts_detail() {
        let mut state = state("/character/5");
        let actions = state.mount();
        assert!(matches!(&actions[0], Action::Fetch(r) if r.url == "https://example.test/api/character/5"));
        assert!(matches!(state.screen, Screen::Detail(ref d) if d.id == "5"));
    }

    #[test]
    fn timers_from_unmounted_list_are_swallowed() {
        let mut state = state("/");
        state.mount();
        if let Screen::List(list) = &mut state.screen {
            list.type_char('r');
        }
        state.navigate("/character/1");
        state.history_back();
        if let Screen::List(list) = &mut state.screen {
            list.type_char('m');
        }

        assert!(!state.expire_timer());
        assert!(state.expire_timer());
        assert!(matches!(state.screen, Screen::List(ref l) if l.search_text == "m"));
    }

    #[test]
    fn long_episode_lists_are_windowed_around_the_cursor() {
        let mut state = state("/character/1");
        state.mount();
        let Screen::Detail(detail) = &mut state.screen else {
            panic!("expected detail");
        };
        detail.character = Some(
            serde_json::from_value(serde_json::json!({ "id": 1, "name": "Rick Sanchez", "species": "Human" })).unwrap(),
        );
        detail.episodes = Some(
            (1..=51)
                .map(|id| {
                    serde_json::from_value(serde_json::json!({
                        "id": id, "name": format!("Episode {id}"), "air_date": "", "episode": format!("E{id}")
                    }))
                    .unwrap()
                })
                .collect(),
        );
        for _ in 0..40 {
            detail.move_cursor_down();
        }

        // three attributes and no image leave 40 - 12 - 3 rows
        let Body::Detail(vm) = state.compute_viewmodel(40, 80).body else {
            panic!("expected detail body");
        };
        let lines = vm.episodes.unwrap();
        assert_eq!(lines.len(), 25);
        assert_eq!(vm.total_episodes, 51);
        assert_eq!(vm.first_episode, 26);
        assert_eq!(lines[vm.selected_episode], "E41: Episode 41 ()");
        assert_eq!(lines.last().map(String::as_str), Some("E51: Episode 51 ()"));
    }

    #[test]
    fn footer_follows_screen_and_mode() {
        let mut state = state("/");
        state.mount();
        let normal = state.compute_viewmodel(24, 80).footer.keybindings;
        state.input_mode = InputMode::Search;
        let search = state.compute_viewmodel(24, 80).footer.keybindings;
        assert_ne!(normal, search);
        assert!(search.contains("Type to search"));
    }
}
