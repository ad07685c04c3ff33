//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data, which
//! makes them the natural place to assert on what a screen shows.

use crate::ui::table::TableViewModel;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    /// Present on the list screen.
    pub search_bar: Option<SearchBarInfo>,
    pub body: Body,
    pub footer: FooterInfo,
}

/// Main content area. Exactly one variant renders per frame, so at most one
/// spinner is ever visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Nothing loaded yet.
    Spinner(SpinnerInfo),
    /// Character list.
    Table(TableViewModel),
    /// Character detail.
    Detail(DetailViewModel),
}

/// Title and address bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Current location, e.g. `/?page=2&name=rick`.
    pub location: String,
}

/// Keybinding hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Search input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Text as typed, not yet necessarily committed.
    pub query: String,
    pub placeholder: &'static str,
    pub is_focused: bool,
}

/// Loading indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerInfo {
    /// Accessible label, always `spinner`.
    pub label: &'static str,
    pub message: String,
}

/// Character detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewModel {
    /// Back link text.
    pub back_label: &'static str,
    /// Present attributes as `(label, value)`.
    pub attributes: Vec<(String, String)>,
    /// Image reference, with the character name as alternative text.
    pub image: Option<ImageInfo>,
    /// Visible window of episode lines; `None` renders the spinner in their place.
    pub episodes: Option<Vec<String>>,
    /// Highlighted line within `episodes`.
    pub selected_episode: usize,
    /// Index of the first visible line among all episodes.
    pub first_episode: usize,
    pub total_episodes: usize,
}

/// An image the terminal cannot show, rendered as its reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub src: String,
    pub alt: String,
}
