//! Viewer pane renderer.
//!
//! The pane is an action bar followed by a body. The bar carries the pane's
//! action (`Full Screen`, `Back` or `Exit Full Screen`), the document name and
//! the position indicator; the body shows the loading indicator, the failure
//! message or the visible window of content lines.

use crate::ui::helpers::{fit_to_width, pad_to_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ViewerPane, ViewerStatus};

const LOADING_TEXT: &str = "Loading PDF...";
const IDLE_TEXT: &str = "Select a document to read it here";
const NO_TEXT: &str = "(this document has no extractable text)";

/// Renders the action bar at `row` across the pane width.
pub fn render_viewer_bar(row: usize, pane: &ViewerPane, theme: &Theme) -> usize {
    position_cursor(row, pane.col);

    let Some(bar) = &pane.bar else {
        print!("{}", " ".repeat(pane.width));
        return row + 1;
    };

    let button = format!(" {} ", bar.button);
    let position = pane.position.as_ref().map_or_else(String::new, |p| format!(" {p} "));
    let title_width = pane
        .width
        .saturating_sub(button.chars().count() + position.chars().count() + 1);

    print!("{}{}", Theme::fg(&theme.colors.bar_fg), Theme::bg(&theme.colors.bar_bg));
    print!("{}", Theme::bold());
    print!("{}", fit_to_width(&button, pane.width));
    print!("{}", Theme::reset());

    if title_width > 0 {
        print!("{}", Theme::fg(&theme.colors.header_fg));
        print!(" {}", pad_to_width(&bar.title, title_width));
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{position}");
    }

    print!("{}", Theme::reset());
    row + 1
}

/// Renders `rows` body lines starting at `row`.
pub fn render_viewer_body(row: usize, rows: usize, pane: &ViewerPane, theme: &Theme) {
    match &pane.status {
        ViewerStatus::Idle => render_notice(row, pane, &theme.colors.text_dim, IDLE_TEXT),
        ViewerStatus::Loading => render_notice(row, pane, &theme.colors.loading_fg, LOADING_TEXT),
        ViewerStatus::Failed(message) => {
            render_notice(row, pane, &theme.colors.error_fg, "Could not load this document");
            for (offset, line) in message.lines().take(rows.saturating_sub(2)).enumerate() {
                position_cursor(row + 2 + offset, pane.col);
                print!("{}", Theme::fg(&theme.colors.text_dim));
                print!("{}", fit_to_width(line, pane.width));
                print!("{}", Theme::reset());
            }
        }
        ViewerStatus::Ready if pane.lines.is_empty() => {
            render_notice(row, pane, &theme.colors.text_dim, NO_TEXT);
        }
        ViewerStatus::Ready => {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            for (offset, line) in pane.lines.iter().take(rows).enumerate() {
                position_cursor(row + offset, pane.col);
                print!("{}", pad_to_width(line, pane.width));
            }
            print!("{}", Theme::reset());
        }
    }
}

fn render_notice(row: usize, pane: &ViewerPane, color: &str, text: &str) {
    let text = fit_to_width(text, pane.width);
    let padding = pane.width.saturating_sub(text.chars().count()) / 2;

    position_cursor(row, pane.col);
    print!("{}", Theme::fg(color));
    print!("{}{text}", " ".repeat(padding));
    print!("{}", Theme::reset());
}
