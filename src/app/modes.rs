//! Input mode state machine.
//!
//! The list screen has two input modes; the detail screen is always in
//! [`InputMode::Normal`].
//!
//! ```text
//! Normal ──"/"──▶ Search ──Enter/Esc──▶ Normal
//! ```

/// Current input handling mode.
///
/// Controls which keybindings are active and the footer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation keys move the cursor, change page and open characters.
    #[default]
    Normal,

    /// Printable keys edit the search box.
    Search,
}

impl InputMode {
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search)
    }
}
