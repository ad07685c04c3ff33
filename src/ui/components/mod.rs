//! Composable UI component renderers.
//!
//! Each component prints one region of the pane at a given row and returns
//! the next free row.
//!
//! - [`header`]: Title and location bar
//! - [`search`]: Search input box
//! - [`table`]: Character table with pager
//! - [`detail`]: Character attributes and episodes
//! - [`spinner`]: Loading indicator
//! - [`footer`]: Keybinding hints
//!
//! Layout:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Location]
//! [Border]
//! [SearchBar - list only]
//! [Body]
//! [Border]
//! [Footer]
//! ```

mod detail;
mod footer;
mod header;
mod search;
mod spinner;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

/// Renders a horizontal border line at `row`.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = header::render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = search::render_search_bar(current_row, search, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);

    match &vm.body {
        Body::Spinner(spinner) => {
            spinner::render_spinner(current_row + 2, spinner, theme, cols);
        }
        Body::Table(table) => {
            table::render_table(current_row, table, theme, cols);
        }
        Body::Detail(detail) => {
            detail::render_detail(current_row + 1, detail, theme, cols, border_row);
        }
    }

    render_border(border_row, &theme.colors.border, cols);
    footer::render_footer(footer_row, &vm.footer, theme, cols);
}
