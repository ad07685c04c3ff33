//! Search input box.

use crate::ui::helpers::{display_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin on both sides of the box.
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders a three-line bordered input box and returns row + 3.
///
/// ```text
///   ┌──────────────────────────┐
///   │ Search: rick▏            │
///   └──────────────────────────┘
/// ```
///
/// An empty query shows the placeholder dimmed. The caret is drawn only while
/// the box has focus.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let (text, color) = if search.query.is_empty() && !search.is_focused {
        (format!(" {}", search.placeholder), &theme.colors.text_dim)
    } else {
        let caret = if search.is_focused { "▏" } else { "" };
        (format!(" Search: {}{caret}", search.query), &theme.colors.text_normal)
    };
    let text = truncate(&text, inner_width);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}│");
    print!("{}", Theme::fg(color));
    print!("{text}");
    print!("{}", " ".repeat(inner_width.saturating_sub(display_len(&text))));
    print!("{border}│{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    row + 3
}
