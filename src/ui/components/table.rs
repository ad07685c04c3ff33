//! Character table and pager.

use crate::ui::helpers::{self, display_len, position_cursor};
use crate::ui::table::{RowView, TableViewModel};
use crate::ui::theme::Theme;

/// Renders headers, rows (or the empty message) and the pager line.
///
/// Returns the next free row.
pub fn render_table(row: usize, table: &TableViewModel, theme: &Theme, cols: usize) -> usize {
    let mut current_row = render_headers(row, table, theme);

    if let Some(message) = table.empty_message {
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!(" {message}");
        print!("{}", Theme::reset());
        current_row += 1;
    } else {
        for item in &table.rows {
            current_row = render_row(current_row, item, theme, cols);
        }
    }

    render_pager(current_row + 1, table, theme)
}

fn render_headers(row: usize, table: &TableViewModel, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(" ");
    for (header, width) in &table.headers {
        print!("{header:<width$}");
    }
    print!("{}", Theme::reset());
    row + 1
}

/// One row. Selection colours take precedence over match highlights.
fn render_row(row: usize, item: &RowView, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base_fg = if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };
    print!("{}", Theme::fg(base_fg));
    print!(" ");

    let mut line_len = 1;
    for cell in &item.cells {
        if cell.is_link && !item.is_selected {
            print!("{}{}", Theme::underline(), Theme::fg(&theme.colors.link_fg));
            helpers::render_highlighted_text(&cell.text, &cell.highlight_ranges, theme, false, &theme.colors.link_fg);
            print!("{}{}", Theme::reset(), Theme::fg(base_fg));
        } else {
            helpers::render_highlighted_text(&cell.text, &cell.highlight_ranges, theme, item.is_selected, base_fg);
        }
        if item.is_selected {
            print!("{}{}", Theme::bg(&theme.colors.selection_bg), Theme::fg(base_fg));
        }
        print!("{}", " ".repeat(cell.width.saturating_sub(display_len(&cell.text))));
        line_len += cell.width.max(display_len(&cell.text));
    }

    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// `[< Previous]  Page 2 of 42  [Next >]`, disabled buttons dimmed.
fn render_pager(row: usize, table: &TableViewModel, theme: &Theme) -> usize {
    let button = |label: &str, enabled: bool| {
        let color = if enabled { &theme.colors.link_fg } else { &theme.colors.disabled_fg };
        format!("{}{label}{}", Theme::fg(color), Theme::reset())
    };

    position_cursor(row, 1);
    print!(" {}", button("[< Previous]", table.prev_enabled));
    print!("  {}{}{}  ", Theme::fg(&theme.colors.text_normal), table.page_label, Theme::reset());
    print!("{}", button("[Next >]", table.next_enabled));
    row + 1
}
