//! Response decoding for the character and episode endpoints.
//!
//! The host hands back a status code and raw body bytes; these functions turn
//! them into domain types or a [`BrowserError`]. A non-2xx status is an error
//! even when the body is valid JSON (the API answers `404` with
//! `{"error": "There is nothing here"}` for searches without matches).

use crate::domain::error::{BrowserError, Result};
use crate::domain::{Character, Episode, PagedResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Envelope of paginated API responses.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub info: PageInfo,
    pub results: Vec<T>,
}

/// Pagination block of [`ApiResponse`].
#[derive(Debug, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

impl<T> From<ApiResponse<T>> for PagedResult<T> {
    fn from(response: ApiResponse<T>) -> Self {
        Self {
            items: response.results,
            page_count: response.info.pages,
            has_next: response.info.next.is_some(),
            has_prev: response.info.prev.is_some(),
        }
    }
}

/// The episode endpoint answers a single object for one id and an array for
/// several.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// A response as delivered by the host.
#[derive(Debug, Clone, Copy)]
pub struct RawResponse<'a> {
    pub status: u16,
    pub body: &'a [u8],
    pub url: &'a str,
}

impl RawResponse<'_> {
    fn json<T: DeserializeOwned>(&self) -> Result<T> {
        if !(200..300).contains(&self.status) {
            return Err(BrowserError::Http {
                status: self.status,
                url: self.url.to_string(),
            });
        }
        Ok(serde_json::from_slice(self.body)?)
    }

    /// Decodes a character search page.
    ///
    /// # Errors
    ///
    /// [`BrowserError::Http`] on a non-2xx status, [`BrowserError::Decode`] on
    /// a body without `info`/`results`.
    pub fn character_page(&self) -> Result<PagedResult<Character>> {
        Ok(self.json::<ApiResponse<Character>>()?.into())
    }

    /// Decodes a single character.
    ///
    /// # Errors
    ///
    /// [`BrowserError::Http`] on a non-2xx status, [`BrowserError::Decode`] on
    /// an undecodable body.
    pub fn character(&self) -> Result<Character> {
        self.json()
    }

    /// Decodes one or many episodes into a sequence.
    ///
    /// # Errors
    ///
    /// [`BrowserError::Http`] on a non-2xx status, [`BrowserError::Decode`] on
    /// an undecodable body.
    pub fn episodes(&self) -> Result<Vec<Episode>> {
        Ok(self.json::<OneOrMany<Episode>>()?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok(body: &serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(body).unwrap()
    }

    #[test]
    fn page_flags_follow_next_and_prev() {
        let body = ok(&json!({
            "info": { "count": 826, "pages": 42, "next": "https://rickandmortyapi.com/api/character?page=3", "prev": null },
            "results": [{ "id": 1, "name": "Rick Sanchez" }]
        }));
        let page = RawResponse { status: 200, body: &body, url: "u" }.character_page().unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.page_count, 42);
        assert!(page.has_next);
        assert!(!page.has_prev);
    }

    #[test]
    fn not_found_search_is_an_http_error() {
        let body = ok(&json!({ "error": "There is nothing here" }));
        let result = RawResponse { status: 404, body: &body, url: "u" }.character_page();
        assert!(matches!(result, Err(BrowserError::Http { status: 404, .. })));
    }

    #[test]
    fn envelope_without_info_is_a_decode_error() {
        let body = ok(&json!({ "error": "There is nothing here" }));
        let result = RawResponse { status: 200, body: &body, url: "u" }.character_page();
        assert!(matches!(result, Err(BrowserError::Decode(_))));
    }

    #[test]
    fn single_episode_is_wrapped() {
        let body = ok(&json!({ "id": 1, "name": "Pilot", "air_date": "December 2, 2013", "episode": "S01E01" }));
        let episodes = RawResponse { status: 200, body: &body, url: "u" }.episodes().unwrap();
        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].episode, "S01E01");
    }

    #[test]
    fn episode_array_is_kept_in_order() {
        let body = ok(&json!([
            { "id": 1, "name": "Pilot", "air_date": "December 2, 2013", "episode": "S01E01" },
            { "id": 2, "name": "Lawnmower Dog", "air_date": "December 9, 2013", "episode": "S01E02" }
        ]));
        let episodes = RawResponse { status: 200, body: &body, url: "u" }.episodes().unwrap();
        let codes: Vec<&str> = episodes.iter().map(|e| e.episode.as_str()).collect();
        assert_eq!(codes, ["S01E01", "S01E02"]);
    }
}
