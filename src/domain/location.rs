//! Locations, routes and navigation history.
//!
//! A location is the plugin's equivalent of a browser URL: a path plus an
//! optional query string. Two routes exist:
//!
//! - `/` with optional `page` and `name` query parameters (character list)
//! - `/character/{id}` (character detail)
//!
//! The list query is encoded as `page` first, then `name` only when non-empty,
//! so `(name = "Morty", page = 1)` renders as `/?page=1&name=Morty`.

use crate::domain::error::{BrowserError, Result};
use serde::{Deserialize, Serialize};

/// Query parameters of the list route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Search text, empty when not searching.
    pub name: String,
    /// One-based page number, never zero.
    pub page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            name: String::new(),
            page: 1,
        }
    }
}

#[derive(Deserialize)]
struct RawListQuery {
    page: Option<String>,
    name: Option<String>,
}

#[derive(Serialize)]
struct EncodedListQuery<'a> {
    page: u32,
    #[serde(skip_serializing_if = "str::is_empty")]
    name: &'a str,
}

impl ListQuery {
    /// Creates a query, clamping `page` to at least 1.
    #[must_use]
    pub fn new(name: impl Into<String>, page: u32) -> Self {
        Self {
            name: name.into(),
            page: page.max(1),
        }
    }

    /// Decodes a query string (without the leading `?`).
    ///
    /// A missing, non-numeric or non-positive `page` falls back to 1 and a
    /// missing `name` to the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Query`] if the string is not valid
    /// `application/x-www-form-urlencoded` data.
    pub fn parse(query: &str) -> Result<Self> {
        let raw: RawListQuery = serde_urlencoded::from_str(query)?;

        let page = raw
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .and_then(|p| u32::try_from(p).ok())
            .unwrap_or(1);

        Ok(Self {
            name: raw.name.unwrap_or_default(),
            page,
        })
    }

    /// Encodes the query string, omitting `name` when empty.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::QueryEncode`] if encoding fails.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_urlencoded::to_string(EncodedListQuery {
            page: self.page,
            name: &self.name,
        })?)
    }

    /// Full list location for this query, e.g. `/?page=2&name=rick`.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::QueryEncode`] if encoding fails.
    pub fn href(&self) -> Result<String> {
        Ok(format!("/?{}", self.encode()?))
    }
}

/// A parsed location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Character list with its query.
    List(ListQuery),
    /// Character detail for the given identifier.
    Character {
        /// Character identifier taken from the path.
        id: String,
    },
}

impl Route {
    /// Parses a location such as `/?page=2`, `/character/7` or `/`.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Location`] for unknown paths and
    /// [`BrowserError::Query`] for undecodable query strings.
    pub fn parse(href: &str) -> Result<Self> {
        let href = href.trim();
        let (path, query) = href.split_once('?').unwrap_or((href, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Ok(Self::List(ListQuery::parse(query)?)),
            ["character", id] => Ok(Self::Character { id: (*id).to_string() }),
            _ => Err(BrowserError::Location(href.to_string())),
        }
    }

    /// Canonical location string for this route.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::QueryEncode`] if the list query cannot be encoded.
    pub fn href(&self) -> Result<String> {
        match self {
            Self::List(query) => query.href(),
            Self::Character { id } => Ok(format!("/character/{id}")),
        }
    }
}

/// Navigation history.
///
/// Holds every location pushed so far; the last entry is the current one.
/// The history is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    entries: Vec<String>,
}

impl Router {
    /// Starts a history at `initial`.
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
        }
    }

    /// The current location.
    #[must_use]
    pub fn current(&self) -> &str {
        self.entries.last().map_or("/", String::as_str)
    }

    /// Parses the current location.
    ///
    /// # Errors
    ///
    /// Propagates [`Route::parse`] errors.
    pub fn route(&self) -> Result<Route> {
        Route::parse(self.current())
    }

    /// Pushes a new location and makes it current.
    pub fn push(&mut self, href: impl Into<String>) {
        let href = href.into();
        tracing::debug!(from = %self.current(), to = %href, "location pushed");
        self.entries.push(href);
    }

    /// Replaces the current location without adding a history entry.
    pub fn replace(&mut self, href: impl Into<String>) {
        let href = href.into();
        tracing::debug!(from = %self.current(), to = %href, "location replaced");
        if let Some(last) = self.entries.last_mut() {
            *last = href;
        }
    }

    /// Drops the current location, returning to the previous one.
    ///
    /// Returns `false` when already at the first entry.
    pub fn back(&mut self) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        self.entries.pop();
        tracing::debug!(to = %self.current(), "location popped");
        true
    }

    /// All locations in push order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_root_is_first_page_without_name() {
        assert_eq!(Route::parse("/").unwrap(), Route::List(ListQuery::default()));
        assert_eq!(Route::parse("").unwrap(), Route::List(ListQuery::default()));
    }

    #[test]
    fn list_query_is_decoded() {
        assert_eq!(
            Route::parse("/?page=3&name=Rick%20Sanchez").unwrap(),
            Route::List(ListQuery::new("Rick Sanchez", 3))
        );
    }

    #[test]
    fn invalid_page_falls_back_to_one() {
        for query in ["page=abc", "page=0", "page=-4", "page="] {
            assert_eq!(ListQuery::parse(query).unwrap().page, 1, "query {query}");
        }
    }

    #[test]
    fn name_is_omitted_when_empty() {
        assert_eq!(ListQuery::new("", 2).href().unwrap(), "/?page=2");
        assert_eq!(ListQuery::new("Morty", 1).href().unwrap(), "/?page=1&name=Morty");
    }

    #[test]
    fn encoded_query_round_trips_through_parse() {
        let query = ListQuery::new("Mr. Poopybutthole & co", 4);
        let href = query.href().unwrap();
        assert_eq!(Route::parse(&href).unwrap(), Route::List(query));
    }

    #[test]
    fn character_route() {
        assert_eq!(
            Route::parse("/character/42").unwrap(),
            Route::Character { id: "42".to_string() }
        );
        assert_eq!(Route::Character { id: "42".into() }.href().unwrap(), "/character/42");
    }

    #[test]
    fn unknown_path_is_an_error() {
        assert!(matches!(Route::parse("/episode/1"), Err(BrowserError::Location(_))));
    }

    #[test]
    fn router_back_stops_at_first_entry() {
        let mut router = Router::new("/?page=2");
        router.push("/character/1");
        assert_eq!(router.current(), "/character/1");
        assert!(router.back());
        assert_eq!(router.current(), "/?page=2");
        assert!(!router.back());
        assert_eq!(router.entries().len(), 1);
    }

    #[test]
    fn replace_keeps_history_length() {
        let mut router = Router::new("/nowhere");
        router.replace("/");
        assert_eq!(router.entries(), ["/".to_string()]);
    }
}
