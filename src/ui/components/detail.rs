//! Character detail screen.

use crate::ui::helpers::{display_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailViewModel, SpinnerInfo};

use super::spinner::render_spinner;

/// Width of the attribute label column.
const LABEL_WIDTH: usize = 12;

/// Renders back link, image reference, attributes and episodes, stopping at
/// `last_row`.
pub fn render_detail(row: usize, detail: &DetailViewModel, theme: &Theme, cols: usize, last_row: usize) -> usize {
    let mut current_row = row;

    position_cursor(current_row, 1);
    print!("{}{}", Theme::underline(), Theme::fg(&theme.colors.link_fg));
    print!(" < {}", detail.back_label);
    print!("{}", Theme::reset());
    current_row += 2;

    if let Some(image) = &detail.image {
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", truncate(&format!(" [image: {}] {}", image.alt, image.src), cols));
        print!("{}", Theme::reset());
        current_row += 2;
    }

    for (label, value) in &detail.attributes {
        if current_row >= last_row {
            return current_row;
        }
        position_cursor(current_row, 1);
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
        print!(" {label:<LABEL_WIDTH$}");
        print!("{}{}", Theme::reset(), Theme::fg(&theme.colors.text_normal));
        print!("{}", truncate(value, cols.saturating_sub(LABEL_WIDTH + 1)));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row += 1;
    position_cursor(current_row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!(" Episodes");
    print!("{}", Theme::reset());
    if let Some(episodes) = detail.episodes.as_ref().filter(|e| e.len() < detail.total_episodes) {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!(
            "  {}-{} of {}",
            detail.first_episode + 1,
            detail.first_episode + episodes.len(),
            detail.total_episodes
        );
        print!("{}", Theme::reset());
    }
    current_row += 1;

    let Some(episodes) = &detail.episodes else {
        let spinner = SpinnerInfo { label: "spinner", message: "Loading episodes...".to_string() };
        return render_spinner(current_row, &spinner, theme, cols);
    };

    for (index, line) in episodes.iter().enumerate() {
        if current_row >= last_row {
            break;
        }
        let text = truncate(&format!("   • {line}"), cols);
        position_cursor(current_row, 1);
        if index == detail.selected_episode {
            print!("{}{}", Theme::bg(&theme.colors.selection_bg), Theme::fg(&theme.colors.selection_fg));
            print!("{text}{}", " ".repeat(cols.saturating_sub(display_len(&text))));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{text}");
        }
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row
}
