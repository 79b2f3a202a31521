//! Empty state component renderer.
//!
//! Shown instead of the list when the manifest failed validation or holds no
//! documents.

use crate::ui::helpers::{fit_to_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// First row of the message block.
const MESSAGE_ROW: usize = 6;

/// Renders the empty state message and its subtitle, centered.
///
/// The message uses `empty_state_fg`; the subtitle is dimmed.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    let message = fit_to_width(&empty.message, cols);
    let msg_len = message.chars().count();
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(MESSAGE_ROW, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let subtitle = fit_to_width(&empty.subtitle, cols);
    let sub_len = subtitle.chars().count();
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    position_cursor(MESSAGE_ROW + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{subtitle}");
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
