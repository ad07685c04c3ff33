//! Shared rendering utilities.
//!
//! Cursor positioning, width-aware truncation and search match highlighting.
//! All index arithmetic is done on `char` positions, not bytes.

use crate::ui::theme::Theme;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates `text` to at most `max` characters, ending in `...` when cut.
///
/// ```
/// use charbrowser::ui::helpers::truncate;
///
/// assert_eq!(truncate("Abradolf Lincler", 10), "Abradol...");
/// assert_eq!(truncate("Beth", 10), "Beth");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut out: String = text.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

/// Number of characters in `text`.
#[must_use]
pub fn display_len(text: &str) -> usize {
    text.chars().count()
}

/// Character ranges of `text` matched by `query`, coalesced into runs.
///
/// Returns an empty list for an empty query or no match. Ranges are
/// `(start, end)` with exclusive end.
#[must_use]
pub fn fuzzy_highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let Some((_score, indices)) = SkimMatcherV2::default().fuzzy_indices(text, query.trim()) else {
        return Vec::new();
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

/// Prints `text` with `ranges` highlighted.
///
/// Highlighting is skipped on selected rows so the selection colours stay
/// intact. `base_fg` is restored after every highlighted run.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
    base_fg: &str,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal: String = chars[current_pos..start].iter().collect();
            print!("{normal}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted: String = chars[start..end].iter().collect();
        print!("{highlighted}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(base_fg));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
