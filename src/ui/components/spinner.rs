//! Loading indicator.

use crate::ui::helpers::{display_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SpinnerInfo;

/// Single static spinner frame.
const SPINNER_GLYPH: &str = "◌";

/// Renders a centred `◌ message` line at `row`.
pub fn render_spinner(row: usize, spinner: &SpinnerInfo, theme: &Theme, cols: usize) -> usize {
    let text = format!("{SPINNER_GLYPH} {}", spinner.message);
    let text_len = display_len(&text);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.spinner_fg));
    print!("{text}");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    row + 1
}
