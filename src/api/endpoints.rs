//! Request URL construction for the character and episode endpoints.

use crate::domain::error::Result;
use url::Url;

/// Default API root used when no endpoint is configured.
pub const DEFAULT_API_URL: &str = "https://rickandmortyapi.com/api";

/// Parsed base URLs of the two endpoints the browser talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    character: Url,
    episode: Url,
}

impl ApiEndpoints {
    /// Parses both endpoint base URLs.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BrowserError::Url`] if either URL is malformed.
    ///
    /// ```
    /// use charbrowser::api::ApiEndpoints;
    ///
    /// let endpoints = ApiEndpoints::new(
    ///     "https://rickandmortyapi.com/api/character",
    ///     "https://rickandmortyapi.com/api/episode",
    /// )?;
    /// assert_eq!(
    ///     endpoints.character_url("7"),
    ///     "https://rickandmortyapi.com/api/character/7"
    /// );
    /// # Ok::<(), charbrowser::BrowserError>(())
    /// ```
    pub fn new(character: &str, episode: &str) -> Result<Self> {
        Ok(Self {
            character: Url::parse(character.trim_end_matches('/'))?,
            episode: Url::parse(episode.trim_end_matches('/'))?,
        })
    }

    /// Endpoints derived from an API root (`{root}/character`, `{root}/episode`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::BrowserError::Url`] if the root is malformed.
    pub fn from_root(root: &str) -> Result<Self> {
        let root = root.trim_end_matches('/');
        Self::new(&format!("{root}/character"), &format!("{root}/episode"))
    }

    /// Character search URL: `{character}?page={page}&name={name}`.
    ///
    /// `name` is always sent, even when empty, matching what the API expects
    /// from the list view.
    #[must_use]
    pub fn character_page_url(&self, name: &str, page: u32) -> String {
        let mut url = self.character.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("page", &page.to_string())
            .append_pair("name", name);
        url.into()
    }

    /// Single character URL: `{character}/{id}`.
    #[must_use]
    pub fn character_url(&self, id: &str) -> String {
        Self::join_segment(&self.character, id)
    }

    /// Batched episode URL: `{episode}/{id1,id2,...}`.
    #[must_use]
    pub fn episodes_url(&self, ids: &[String]) -> String {
        Self::join_segment(&self.episode, &ids.join(","))
    }

    fn join_segment(base: &Url, segment: &str) -> String {
        let mut url = base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        url.into()
    }
}

impl Default for ApiEndpoints {
    /// Endpoints under [`DEFAULT_API_URL`].
    ///
    /// # Panics
    ///
    /// Panics if the built-in root fails to parse (should never occur).
    fn default() -> Self {
        Self::from_root(DEFAULT_API_URL).expect("Built-in API URL should always parse")
    }
}
