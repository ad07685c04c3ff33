//! Charbrowser: a Zellij plugin for browsing the Rick and Morty character API.
//!
//! - Paginated character table with a debounced name search
//! - Search and page mirrored into an in-plugin location (`/?page=2&name=rick`)
//!   with a back history, so any state can be reopened from its location
//! - Character detail view with a two-stage fetch: the character first, then
//!   all of its episodes in one batched request

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← host calls only
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and response routing              │
//! │  - List / detail view controllers, debounce         │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────┐          ┌───────────────────────┐
//! │ UI Layer (ui/)        │          │ API Layer (api/)      │
//! │ - Table primitive     │          │ - Endpoint URLs       │
//! │ - Components, themes  │          │ - Request context     │
//! │                       │          │ - Response decoding   │
//! └───────────────────────┘          └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) and Infrastructure                │
//! │  - Character, Episode, PagedResult                  │
//! │  - Locations, routes and history                    │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry spans to rotating OTLP JSON file   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The library never calls the host. HTTP requests and timers are described
//! as [`Action`]s and their results come back as [`Event`]s, so every state
//! transition runs natively under `cargo test`.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/charbrowser.wasm" {
//!         api_url "https://rickandmortyapi.com/api"
//!         location "/?page=2&name=rick"
//!         debounce_ms "300"
//!         theme "citadel"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use charbrowser::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert!(matches!(
//!     actions.as_slice(),
//!     [Action::Fetch(request)] if request.url == "https://rickandmortyapi.com/api/character?page=1&name="
//! ));
//! # Ok::<(), charbrowser::BrowserError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{BrowserError, Result};
pub use ui::Theme;

use api::{ApiEndpoints, DEFAULT_API_URL};
use domain::Router;
use std::collections::BTreeMap;
use std::time::Duration;

/// Default search debounce.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Character endpoint; `{api_url}/character` unless overridden.
    pub character_api_url: String,
    /// Episode endpoint; `{api_url}/episode` unless overridden.
    pub episode_api_url: String,
    /// Location opened on mount. Default: `/`
    pub location: String,
    /// Search debounce. Default: 300 ms
    pub debounce: Duration,
    /// Built-in theme name (`portal`, `citadel`). Ignored if `theme_file` is set.
    pub theme_name: Option<String>,
    /// Path to a custom TOML theme; `~` expands to `/host`.
    pub theme_file: Option<String>,
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_zellij(&BTreeMap::new())
    }
}

impl Config {
    /// Parses the configuration map with per-key fallbacks.
    ///
    /// Blank values count as unset; an unparseable `debounce_ms` falls back to
    /// the default.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use charbrowser::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_url".to_string(), "http://localhost:8080/api/".to_string());
    /// map.insert("debounce_ms".to_string(), "150".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.character_api_url, "http://localhost:8080/api/character");
    /// assert_eq!(config.debounce, Duration::from_millis(150));
    /// assert_eq!(config.location, "/");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let root = get("api_url").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let root = root.trim_end_matches('/');

        let debounce_ms = get("debounce_ms")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_DEBOUNCE_MS);

        Self {
            character_api_url: get("character_api_url").unwrap_or_else(|| format!("{root}/character")),
            episode_api_url: get("episode_api_url").unwrap_or_else(|| format!("{root}/episode")),
            location: get("location").unwrap_or_else(|| "/".to_string()),
            debounce: Duration::from_millis(debounce_ms),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level").unwrap_or_else(|| "info".to_string()),
        }
    }
}

/// Builds the unmounted application state from configuration.
///
/// Invalid endpoints and unloadable themes fall back to the defaults with a
/// warning. Tracing should already be initialized so those warnings land in
/// the trace file.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing charbrowser plugin");

    let endpoints = ApiEndpoints::new(&config.character_api_url, &config.episode_api_url).unwrap_or_else(|e| {
        tracing::warn!(
            character = %config.character_api_url,
            episode = %config.episode_api_url,
            error = %e,
            "invalid endpoint, using default API"
        );
        ApiEndpoints::default()
    });

    AppState::new(endpoints, Router::new(config.location.clone()), load_theme(config), config.debounce)
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |name| {
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %name, "unknown theme, using default");
            Theme::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.character_api_url, "https://rickandmortyapi.com/api/character");
        assert_eq!(config.episode_api_url, "https://rickandmortyapi.com/api/episode");
        assert_eq!(config.debounce, Duration::from_millis(300));
        assert_eq!(config.trace_level, "info");
    }

    #[test]
    fn explicit_endpoints_override_root() {
        let config = Config::from_zellij(&map(&[
            ("api_url", "https://a.test/api"),
            ("episode_api_url", "https://b.test/episodes"),
        ]));
        assert_eq!(config.character_api_url, "https://a.test/api/character");
        assert_eq!(config.episode_api_url, "https://b.test/episodes");
    }

    #[test]
    fn malformed_values_fall_back() {
        let config = Config::from_zellij(&map(&[("debounce_ms", "soon"), ("location", "  ")]));
        assert_eq!(config.debounce, Duration::from_millis(DEFAULT_DEBOUNCE_MS));
        assert_eq!(config.location, "/");
    }

    #[test]
    fn invalid_endpoint_uses_default_api() {
        let config = Config::from_zellij(&map(&[("api_url", "not a url")]));
        let state = initialize(&config);
        assert_eq!(state.endpoints, ApiEndpoints::default());
    }

    #[test]
    fn unknown_theme_uses_default() {
        let config = Config::from_zellij(&map(&[("theme", "plumbus")]));
        assert_eq!(initialize(&config).theme.name, "portal");
        let config = Config::from_zellij(&map(&[("theme", "citadel")]));
        assert_eq!(initialize(&config).theme.name, "citadel");
    }
}
