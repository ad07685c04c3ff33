//! Character list view controller.
//!
//! Owns the search text, the current page and the last fetched page of
//! results. The effective `(name, page)` pair drives fetching and is mirrored
//! into the location; keystrokes only reach it through the debouncer.
//!
//! # State Machine
//!
//! ```text
//! Idle ──mount──▶ Loading ──resolved──▶ Loaded
//!                    ▲                     │
//!                    └──(name, page) change┘
//! ```
//!
//! A failed fetch also ends in `Loaded`, with an empty, unpaginated page.

use super::debounce::Debouncer;
use crate::api::{ApiEndpoints, FetchRequest, RequestContext};
use crate::domain::error::Result;
use crate::domain::{Character, ListQuery, PagedResult};
use crate::ui::table::Pager;
use std::time::Duration;

/// Loading phase of the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Constructed, nothing requested yet.
    Idle,
    /// At least one fetch is in flight.
    Loading,
    /// Every issued fetch has resolved.
    Loaded,
}

/// State of the character list screen.
#[derive(Debug, Clone)]
pub struct ListView {
    /// Mount number stamped on every fetch this view issues.
    pub view: u64,
    /// Text shown in the search box, updated on every keystroke.
    pub search_input: String,
    /// Search text the current results were requested for.
    pub search_text: String,
    /// Current one-based page.
    pub page: u32,
    /// Last page of results, `None` until the first fetch resolves.
    pub data: Option<PagedResult<Character>>,
    pub has_next: bool,
    pub has_prev: bool,
    pub phase: LoadPhase,
    /// Row cursor within `data`.
    pub selected_index: usize,
    in_flight: usize,
    debouncer: Debouncer<String>,
}

impl ListView {
    /// Creates the view from the location's query.
    #[must_use]
    pub fn new(query: &ListQuery, debounce: Duration, view: u64) -> Self {
        Self {
            view,
            search_input: query.name.clone(),
            search_text: query.name.clone(),
            page: query.page.max(1),
            data: None,
            has_next: false,
            has_prev: false,
            phase: LoadPhase::Idle,
            selected_index: 0,
            in_flight: 0,
            debouncer: Debouncer::new(debounce),
        }
    }

    /// The effective `(name, page)` pair.
    #[must_use]
    pub fn query(&self) -> ListQuery {
        ListQuery::new(self.search_text.clone(), self.page)
    }

    /// Builds the fetch for the effective query and enters `Loading`.
    pub fn fetch(&mut self, endpoints: &ApiEndpoints) -> FetchRequest {
        self.in_flight += 1;
        self.phase = LoadPhase::Loading;

        let url = endpoints.character_page_url(&self.search_text, self.page);
        tracing::debug!(url = %url, in_flight = self.in_flight, "fetching characters");

        FetchRequest {
            url,
            context: RequestContext::CharacterPage {
                view: self.view,
                name: self.search_text.clone(),
                page: self.page,
            },
        }
    }

    /// Location to push when the effective query diverges from `current`.
    ///
    /// # Errors
    ///
    /// Propagates query encoding errors.
    pub fn location_update(&self, current: &ListQuery) -> Result<Option<String>> {
        let effective = self.query();
        if &effective == current {
            return Ok(None);
        }
        effective.href().map(Some)
    }

    /// Appends a character to the search box and returns the timer to arm.
    pub fn type_char(&mut self, c: char) -> Duration {
        self.search_input.push(c);
        tracing::trace!(input = %self.search_input, "search input updated");
        self.debouncer.push(self.search_input.clone())
    }

    /// Deletes the last search box character.
    ///
    /// Returns the timer to arm, or `None` if the box was already empty.
    pub fn delete_char(&mut self) -> Option<Duration> {
        self.search_input.pop()?;
        Some(self.debouncer.push(self.search_input.clone()))
    }

    /// Consumes a debounce timer expiration.
    ///
    /// When the last armed timer expires the pending search becomes effective
    /// and the page resets to 1. Returns `true` if `(name, page)` changed.
    pub fn expire_debounce(&mut self) -> bool {
        let Some(value) = self.debouncer.expire() else {
            return false;
        };

        let changed = value != self.search_text || self.page != 1;
        tracing::debug!(search = %value, changed = changed, "search committed");
        self.search_text = value;
        self.page = 1;
        changed
    }

    /// Debounce timers armed and not yet expired.
    #[must_use]
    pub const fn armed_timers(&self) -> usize {
        self.debouncer.armed()
    }

    /// Pagination state of the current results.
    #[must_use]
    pub const fn pager(&self) -> Pager {
        Pager {
            page: self.page,
            has_prev: self.has_prev,
            has_next: self.has_next,
        }
    }

    /// Moves to `page` if it differs from the current one.
    ///
    /// Returns `true` if the page changed.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if page == self.page {
            return false;
        }
        self.page = page;
        self.selected_index = 0;
        true
    }

    /// Applies a resolved character page fetch.
    ///
    /// Responses are applied in resolution order, even when they were issued
    /// for an older query. On failure the view shows an empty page with both
    /// pager buttons disabled.
    pub fn resolve(&mut self, requested: &ListQuery, outcome: Result<PagedResult<Character>>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.in_flight == 0 {
            self.phase = LoadPhase::Loaded;
        }

        if requested != &self.query() {
            tracing::debug!(
                requested_name = %requested.name,
                requested_page = requested.page,
                "applying response for a superseded query"
            );
        }

        match outcome {
            Ok(page) => {
                tracing::debug!(
                    items = page.items.len(),
                    page_count = page.page_count,
                    has_next = page.has_next,
                    has_prev = page.has_prev,
                    "characters loaded"
                );
                self.has_next = page.has_next;
                self.has_prev = page.has_prev;
                self.data = Some(page);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch characters");
                self.has_next = false;
                self.has_prev = false;
                self.data = Some(PagedResult::empty());
            }
        }

        let len = self.data.as_ref().map_or(0, |d| d.items.len());
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// The character under the row cursor.
    #[must_use]
    pub fn selected_character(&self) -> Option<&Character> {
        self.data.as_ref()?.items.get(self.selected_index)
    }

    /// Moves the row cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.row_count();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the row cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.row_count();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            len - 1
        } else {
            self.selected_index - 1
        };
    }

    fn row_count(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BrowserError;

    fn view(name: &str, page: u32) -> ListView {
        ListView::new(&ListQuery::new(name, page), Duration::from_millis(300), 1)
    }

    fn character(id: u32) -> Character {
        serde_json::from_value(serde_json::json!({ "id": id, "name": format!("Character {id}") })).unwrap()
    }

    #[test]
    fn fetch_moves_from_idle_to_loading() {
        let mut list = view("rick", 2);
        assert_eq!(list.phase, LoadPhase::Idle);

        let request = list.fetch(&ApiEndpoints::default());
        assert_eq!(list.phase, LoadPhase::Loading);
        assert_eq!(
            request.url,
            "https://rickandmortyapi.com/api/character?page=2&name=rick"
        );
    }

    #[test]
    fn typing_is_visible_before_commit() {
        let mut list = view("", 3);
        list.type_char('M');
        list.type_char('o');

        assert_eq!(list.search_input, "Mo");
        assert_eq!(list.search_text, "");
        assert_eq!(list.page, 3);

        assert!(!list.expire_debounce());
        assert!(list.expire_debounce());
        assert_eq!(list.search_text, "Mo");
        assert_eq!(list.page, 1);
    }

    #[test]
    fn retyping_the_same_search_on_first_page_changes_nothing() {
        let mut list = view("rick", 1);
        list.delete_char();
        list.type_char('k');
        list.expire_debounce();
        assert!(!list.expire_debounce());
    }

    #[test]
    fn delete_on_empty_input_arms_nothing() {
        let mut list = view("", 1);
        assert_eq!(list.delete_char(), None);
    }

    #[test]
    fn failure_leaves_empty_unpaginated_page() {
        let mut list = view("", 1);
        let query = list.query();
        list.fetch(&ApiEndpoints::default());
        list.resolve(
            &query,
            Err(BrowserError::Http { status: 500, url: "u".into() }),
        );

        assert_eq!(list.phase, LoadPhase::Loaded);
        assert!(!list.has_next && !list.has_prev);
        assert!(list.data.as_ref().is_some_and(PagedResult::is_empty));
    }

    #[test]
    fn phase_waits_for_every_fetch() {
        let mut list = view("", 1);
        let endpoints = ApiEndpoints::default();
        let first = list.query();
        list.fetch(&endpoints);
        list.set_page(2);
        list.fetch(&endpoints);

        list.resolve(&first, Ok(PagedResult::empty()));
        assert_eq!(list.phase, LoadPhase::Loading);
        list.resolve(&list.query(), Ok(PagedResult::empty()));
        assert_eq!(list.phase, LoadPhase::Loaded);
    }

    #[test]
    fn location_update_only_on_divergence() {
        let list = view("Morty", 1);
        assert_eq!(list.location_update(&ListQuery::new("Morty", 1)).unwrap(), None);
        assert_eq!(
            list.location_update(&ListQuery::default()).unwrap().as_deref(),
            Some("/?page=1&name=Morty")
        );
    }

    #[test]
    fn selection_wraps_and_clamps() {
        let mut list = view("", 1);
        let query = list.query();
        list.resolve(
            &query,
            Ok(PagedResult { items: vec![character(1), character(2)], page_count: 1, has_next: false, has_prev: false }),
        );
        list.move_selection_up();
        assert_eq!(list.selected_character().unwrap().id, "2");
        list.move_selection_down();
        assert_eq!(list.selected_character().unwrap().id, "1");

        list.selected_index = 1;
        list.resolve(&query, Ok(PagedResult { items: vec![character(9)], ..PagedResult::empty() }));
        assert_eq!(list.selected_index, 0);
    }
}
