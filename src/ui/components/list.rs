//! Document list renderer.
//!
//! One row per document: an open marker, the formatted name and, when the
//! column is wide enough, the extracted date right-aligned and dimmed.

use crate::ui::helpers::{pad_to_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ListPane};

const OPEN_MARKER: &str = "● ";
const NO_MARKER: &str = "  ";

/// Renders the list rows starting at `row`, returning the row after the last.
pub fn render_list(row: usize, list: &ListPane, theme: &Theme) -> usize {
    let mut current_row = row;
    for item in &list.items {
        current_row = render_list_row(current_row, item, theme, list.width);
    }
    current_row
}

/// Renders one row, filling `width` so the cursor background spans the column.
fn render_list_row(row: usize, item: &DisplayItem, theme: &Theme, width: usize) -> usize {
    let base_fg = if item.is_cursor {
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };

    position_cursor(row, 1);
    if item.is_cursor {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }

    if item.is_open {
        print!("{}{OPEN_MARKER}", Theme::fg(&theme.colors.open_marker_fg));
    } else {
        print!("{NO_MARKER}");
    }

    let date_width = if item.date.is_empty() { 0 } else { item.date.chars().count() + 1 };
    let name_width = width.saturating_sub(NO_MARKER.chars().count() + date_width);

    print!("{}", Theme::fg(base_fg));
    if item.is_cursor {
        print!("{}", Theme::bold());
    }
    print!("{}", pad_to_width(&item.name, name_width));

    if !item.date.is_empty() {
        if !item.is_cursor {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!(" {}", item.date);
    }

    print!("{}", Theme::reset());
    row + 1
}
