//! Stateless table and pagination primitive.
//!
//! [`build_table`] turns a page of rows, the current page number and the
//! next/previous availability into a [`TableViewModel`]; it holds no state of
//! its own. Page changes are expressed through [`Pager`], which yields the
//! target page for an enabled direction and nothing for a disabled one.

use crate::domain::{Character, PagedResult};
use crate::ui::helpers::{fuzzy_highlight_ranges, truncate};

/// Message shown in place of rows for an empty page.
pub const NO_RESULTS: &str = "No results.";

/// Identifies what a column displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKey {
    Id,
    Avatar,
    Name,
    Species,
    Status,
}

/// A column definition: key, header text and display width in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: ColumnKey,
    pub header: &'static str,
    pub width: usize,
}

/// Columns of the character table, in display order.
pub const CHARACTER_COLUMNS: [Column; 5] = [
    Column { key: ColumnKey::Id, header: "ID", width: 6 },
    Column { key: ColumnKey::Avatar, header: "Avatar", width: 12 },
    Column { key: ColumnKey::Name, header: "Name", width: 32 },
    Column { key: ColumnKey::Species, header: "Species", width: 18 },
    Column { key: ColumnKey::Status, header: "Status", width: 10 },
];

/// Row types the table can display.
pub trait TableRow {
    /// Cell text for `key`.
    fn cell(&self, key: ColumnKey) -> String;

    /// Location the `Name` link navigates to.
    fn link(&self) -> String;
}

impl TableRow for Character {
    fn cell(&self, key: ColumnKey) -> String {
        match key {
            ColumnKey::Id => self.id.clone(),
            ColumnKey::Avatar => crate::domain::trailing_segment(&self.image).to_string(),
            ColumnKey::Name => self.name.clone(),
            ColumnKey::Species => self.species.clone(),
            ColumnKey::Status => self.status.clone(),
        }
    }

    fn link(&self) -> String {
        format!("/character/{}", self.id)
    }
}

/// Current page plus the availability of its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl Pager {
    /// Target of the Next button, `None` when disabled.
    #[must_use]
    pub fn next(&self) -> Option<u32> {
        self.has_next.then(|| self.page.saturating_add(1))
    }

    /// Target of the Previous button, `None` when disabled.
    #[must_use]
    pub fn prev(&self) -> Option<u32> {
        if self.has_prev && self.page > 1 {
            Some(self.page - 1)
        } else {
            None
        }
    }
}

/// A rendered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub text: String,
    pub width: usize,
    /// Whether the cell is the row's link.
    pub is_link: bool,
    /// Character ranges matching the search, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// A rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub cells: Vec<CellView>,
    pub link: String,
    pub is_selected: bool,
}

/// Complete table view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewModel {
    pub headers: Vec<(String, usize)>,
    pub rows: Vec<RowView>,
    /// Set when the page has no items.
    pub empty_message: Option<&'static str>,
    /// `Page {page} of {page_count}`.
    pub page_label: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Builds the table view model for one page.
///
/// At most `max_rows` rows are emitted, windowed so that the selected row
/// stays visible. `query` drives match highlighting in the `Name` column.
#[must_use]
pub fn build_table<T: TableRow>(
    columns: &[Column],
    data: &PagedResult<T>,
    pager: Pager,
    selected_index: usize,
    query: &str,
    max_rows: usize,
) -> TableViewModel {
    let headers = columns
        .iter()
        .map(|c| (c.header.to_string(), c.width))
        .collect();

    let (start, end) = visible_window(data.items.len(), selected_index, max_rows);

    let rows = data.items[start..end]
        .iter()
        .enumerate()
        .map(|(offset, item)| {
            let cells = columns
                .iter()
                .map(|column| {
                    let text = truncate(&item.cell(column.key), column.width.saturating_sub(1));
                    let is_link = column.key == ColumnKey::Name;
                    let highlight_ranges = if is_link {
                        fuzzy_highlight_ranges(&text, query)
                    } else {
                        Vec::new()
                    };
                    CellView {
                        text,
                        width: column.width,
                        is_link,
                        highlight_ranges,
                    }
                })
                .collect();

            RowView {
                cells,
                link: item.link(),
                is_selected: start + offset == selected_index,
            }
        })
        .collect();

    TableViewModel {
        headers,
        rows,
        empty_message: data.is_empty().then_some(NO_RESULTS),
        page_label: format!("Page {} of {}", pager.page, data.page_count),
        prev_enabled: pager.prev().is_some(),
        next_enabled: pager.next().is_some(),
    }
}

/// Window of at most `max_rows` items centred on `selected`.
pub fn visible_window(len: usize, selected: usize, max_rows: usize) -> (usize, usize) {
    if len <= max_rows {
        return (0, len);
    }
    let start = selected.saturating_sub(max_rows / 2).min(len - max_rows);
    (start, start + max_rows)
}
