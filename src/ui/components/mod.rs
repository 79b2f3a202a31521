//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`footer`]: Keybinding hints
//! - [`list`]: Date-ordered document list
//! - [`viewer`]: Viewer bar and body
//! - [`empty`]: Message shown when the archive cannot be listed
//!
//! # Layouts
//!
//! - [`render_list_layout`]: Header + list (+ viewer on the right in split) + footer
//! - [`render_viewer_layout`]: Viewer bar + viewer body + footer

mod empty;
mod footer;
mod header;
mod list;
mod viewer;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use footer::render_footer;
use header::render_header;
use list::render_list;
use viewer::{render_viewer_bar, render_viewer_body};

/// Rows above the body: header or bar, then a border.
const BODY_START_ROW: usize = 3;

/// Renders a horizontal border line at `row`, returning the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws the vertical list/viewer separator over the body rows.
fn render_separator(col: usize, first_row: usize, rows: usize, color: &str) {
    print!("{}", Theme::fg(color));
    for row in first_row..first_row + rows {
        position_cursor(row, col);
        print!("│");
    }
    print!("{}", Theme::reset());
}

/// Renders the border and footer on the last two rows.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Renders the list layouts (`ListOnly` and `Split`).
///
/// ```text
/// [Header]
/// [Border]
/// [List rows]          │ [Viewer bar]   (split only)
///                      │ [Viewer body]
/// [Border]
/// [Footer]
/// ```
pub fn render_list_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let body_rows = rows.saturating_sub(BODY_START_ROW + 1);

    let mut current_row = render_header(1, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(list) = &vm.list {
        render_list(current_row, list, theme);
    }

    if let (Some(list), Some(pane)) = (&vm.list, &vm.viewer) {
        render_separator(list.width + 1, current_row, body_rows, &theme.colors.border);
        let body_row = render_viewer_bar(current_row, pane, theme);
        render_viewer_body(body_row, body_rows.saturating_sub(1), pane, theme);
    }

    render_bottom(vm, theme, cols, rows);
}

/// Renders the viewer layouts (`ViewerOnly` and `FullScreen`).
///
/// ```text
/// [Viewer bar: Back / Exit Full Screen]
/// [Border]
/// [Viewer body]
/// [Border]
/// [Footer]
/// ```
pub fn render_viewer_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let Some(pane) = &vm.viewer else {
        return;
    };
    let body_rows = rows.saturating_sub(BODY_START_ROW + 1);

    let mut current_row = render_viewer_bar(1, pane, theme);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_viewer_body(current_row, body_rows, pane, theme);

    render_bottom(vm, theme, cols, rows);
}
