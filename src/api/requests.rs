//! Outgoing fetch requests and the context attached to them.
//!
//! Zellij's `web_request` command answers asynchronously with a
//! `WebRequestResult` event carrying the same string map that was passed as
//! context. [`RequestContext`] is serialized into that map so the response can
//! be routed back to the view that asked for it.

use crate::domain::error::{BrowserError, Result};
use std::collections::BTreeMap;

const KIND_KEY: &str = "request";
const NAME_KEY: &str = "name";
const PAGE_KEY: &str = "page";
const ID_KEY: &str = "id";
const IDS_KEY: &str = "ids";
const VIEW_KEY: &str = "view";
/// Map key carrying the request URL, for error reporting.
pub const URL_KEY: &str = "url";

/// What a fetch was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestContext {
    /// A page of the character search.
    CharacterPage {
        /// Mount number of the list view that issued the fetch.
        view: u64,
        /// Search text the page was requested for.
        name: String,
        /// Requested page.
        page: u32,
    },
    /// A single character for the detail view.
    Character {
        /// Character identifier.
        id: String,
    },
    /// The batched episodes of a character.
    Episodes {
        /// Character whose episodes were requested.
        character_id: String,
        /// Episode identifiers in request order.
        ids: Vec<String>,
    },
}

impl RequestContext {
    /// Short name used in logs and as the map discriminator.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::CharacterPage { .. } => "character_page",
            Self::Character { .. } => "character",
            Self::Episodes { .. } => "episodes",
        }
    }

    /// Serializes into the string map Zellij echoes back.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert(KIND_KEY.to_string(), self.kind().to_string());
        match self {
            Self::CharacterPage { view, name, page } => {
                map.insert(VIEW_KEY.to_string(), view.to_string());
                map.insert(NAME_KEY.to_string(), name.clone());
                map.insert(PAGE_KEY.to_string(), page.to_string());
            }
            Self::Character { id } => {
                map.insert(ID_KEY.to_string(), id.clone());
            }
            Self::Episodes { character_id, ids } => {
                map.insert(ID_KEY.to_string(), character_id.clone());
                map.insert(IDS_KEY.to_string(), ids.join(","));
            }
        }
        map
    }

    /// Recovers a context from the map echoed by Zellij.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Context`] if the map was not produced by
    /// [`RequestContext::to_map`].
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let field = |key: &str| {
            map.get(key)
                .cloned()
                .ok_or_else(|| BrowserError::Context(format!("missing `{key}`")))
        };

        match field(KIND_KEY)?.as_str() {
            "character_page" => {
                let page = field(PAGE_KEY)?
                    .parse::<u32>()
                    .map_err(|e| BrowserError::Context(format!("bad page: {e}")))?;
                let view = field(VIEW_KEY)?
                    .parse::<u64>()
                    .map_err(|e| BrowserError::Context(format!("bad view: {e}")))?;
                Ok(Self::CharacterPage {
                    view,
                    name: field(NAME_KEY)?,
                    page,
                })
            }
            "character" => Ok(Self::Character { id: field(ID_KEY)? }),
            "episodes" => Ok(Self::Episodes {
                character_id: field(ID_KEY)?,
                ids: field(IDS_KEY)?
                    .split(',')
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect(),
            }),
            other => Err(BrowserError::Context(format!("unknown request kind `{other}`"))),
        }
    }
}

/// An HTTP GET to be issued by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub context: RequestContext,
}

impl FetchRequest {
    /// Context map handed to the host, including the URL itself.
    #[must_use]
    pub fn context_map(&self) -> BTreeMap<String, String> {
        let mut map = self.context.to_map();
        map.insert(URL_KEY.to_string(), self.url.clone());
        map
    }
}
