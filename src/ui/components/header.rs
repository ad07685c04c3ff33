//! Title bar and address bar.

use crate::ui::helpers::{display_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centred title and, below it, the current location.
///
/// Returns the next free row (row + 2).
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = display_len(&header.title);
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    print!("{}", Theme::reset());

    let location = truncate(&format!(" location: {}", header.location), cols);
    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.location_fg));
    print!("{location}");
    print!("{}", " ".repeat(cols.saturating_sub(display_len(&location))));
    print!("{}", Theme::reset());

    row + 2
}
