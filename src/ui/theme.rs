//! Theme management and ANSI escape sequence generation.
//!
//! Two built-in palettes ship with the plugin and custom palettes can be
//! loaded from TOML files.
//!
//! # Built-in Themes
//!
//! - `portal`: Green on brown (default)
//! - `citadel`: Cool blue on dark
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#97ce4c"
//! header_bg = "#44281d"      # optional
//! location_fg = "#e4a788"
//! selection_fg = "#44281d"
//! selection_bg = "#97ce4c"
//! text_normal = "#fafaf5"
//! text_dim = "#a89f91"
//! border = "#97ce4c"
//! search_bar_border = "#97ce4c"
//! match_highlight_fg = "#44281d"
//! match_highlight_bg = "#f0e14a"
//! link_fg = "#69c8ec"
//! disabled_fg = "#5c5148"
//! spinner_fg = "#97ce4c"
//! ```

use crate::domain::error::{BrowserError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions, as hex strings such as `"#97ce4c"`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title bar text.
    pub header_fg: String,
    /// Optional title bar background.
    #[serde(default)]
    pub header_bg: Option<String>,
    /// Address bar text.
    pub location_fg: String,

    /// Selected row foreground.
    pub selection_fg: String,
    /// Selected row background.
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer and secondary text.
    pub text_dim: String,

    pub border: String,
    pub search_bar_border: String,

    /// Search match foreground.
    pub match_highlight_fg: String,
    /// Search match background.
    pub match_highlight_bg: String,

    /// Name column links.
    pub link_fg: String,
    /// Disabled pager buttons.
    pub disabled_fg: String,
    /// Loading indicator.
    pub spinner_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name (`portal` or `citadel`).
    ///
    /// ```
    /// use charbrowser::ui::Theme;
    ///
    /// assert_eq!(Theme::from_name("citadel").unwrap().name, "citadel");
    /// assert!(Theme::from_name("unknown").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "portal" => include_str!("../../themes/portal.toml"),
            "citadel" => include_str!("../../themes/citadel.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BrowserError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| BrowserError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to RGB; malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `portal` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("portal").expect("Built-in portal theme should always parse")
    }
}
