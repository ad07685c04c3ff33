//! Character detail view controller.
//!
//! A two-stage pipeline: fetch the character, then (only once it resolved and
//! only if it references episodes) fetch all referenced episodes in a single
//! batched request.

use crate::api::{ApiEndpoints, FetchRequest, RequestContext};
use crate::domain::error::Result;
use crate::domain::{Character, Episode};

/// State of the character detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Identifier from the location path.
    pub id: String,
    /// The character, once fetched.
    pub character: Option<Character>,
    /// The character's episodes, once fetched.
    pub episodes: Option<Vec<Episode>>,
    /// Highlighted episode line; the visible window follows it.
    pub episode_cursor: usize,
}

impl DetailView {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            character: None,
            episodes: None,
            episode_cursor: 0,
        }
    }

    /// First stage: the character fetch.
    #[must_use]
    pub fn fetch_character(&self, endpoints: &ApiEndpoints) -> FetchRequest {
        let url = endpoints.character_url(&self.id);
        tracing::debug!(url = %url, "fetching character");
        FetchRequest {
            url,
            context: RequestContext::Character { id: self.id.clone() },
        }
    }

    /// Applies the character fetch and derives the episode fetch.
    ///
    /// Returns the second-stage request when the character was loaded and
    /// references at least one episode.
    pub fn resolve_character(
        &mut self,
        endpoints: &ApiEndpoints,
        outcome: Result<Character>,
    ) -> Option<FetchRequest> {
        let character = match outcome {
            Ok(character) => character,
            Err(e) => {
                tracing::error!(id = %self.id, error = %e, "failed to fetch character");
                return None;
            }
        };

        let ids = character.episode_ids();
        tracing::debug!(id = %self.id, name = %character.name, episode_refs = ids.len(), "character loaded");
        self.character = Some(character);

        if ids.is_empty() {
            return None;
        }

        let url = endpoints.episodes_url(&ids);
        tracing::debug!(url = %url, "fetching episodes");
        Some(FetchRequest {
            url,
            context: RequestContext::Episodes {
                character_id: self.id.clone(),
                ids,
            },
        })
    }

    /// Applies the episode fetch. Failures leave the section loading.
    pub fn resolve_episodes(&mut self, outcome: Result<Vec<Episode>>) {
        match outcome {
            Ok(episodes) => {
                tracing::debug!(id = %self.id, count = episodes.len(), "episodes loaded");
                self.episode_cursor = self.episode_cursor.min(episodes.len().saturating_sub(1));
                self.episodes = Some(episodes);
            }
            Err(e) => {
                tracing::error!(id = %self.id, error = %e, "failed to fetch episodes");
            }
        }
    }

    /// Moves the episode cursor down, stopping at the last episode.
    ///
    /// Returns `true` if the cursor moved.
    pub fn move_cursor_down(&mut self) -> bool {
        if self.episode_cursor + 1 >= self.episode_count() {
            return false;
        }
        self.episode_cursor += 1;
        true
    }

    /// Moves the episode cursor up, stopping at the first episode.
    pub fn move_cursor_up(&mut self) -> bool {
        if self.episode_cursor == 0 {
            return false;
        }
        self.episode_cursor -= 1;
        true
    }

    fn episode_count(&self) -> usize {
        self.episodes.as_ref().map_or(0, Vec::len)
    }

    /// Episode lines, `None` while the section should show the spinner.
    #[must_use]
    pub fn episode_lines(&self) -> Option<Vec<String>> {
        self.episodes
            .as_ref()
            .filter(|episodes| !episodes.is_empty())
            .map(|episodes| episodes.iter().map(Episode::summary).collect())
    }
}
