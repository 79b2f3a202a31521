//! Top-level rendering coordinator.
//!
//! Computes the view model from state and dispatches on its layout: the empty
//! state, the list layouts or the viewer layouts.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI for a pane of `rows` x `cols` to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(empty) = &vm.empty_state {
        components::render_empty_state(empty, theme, cols);
        return;
    }

    if vm.layout.viewer_fills_pane() {
        components::render_viewer_layout(vm, theme, cols, rows);
    } else {
        components::render_list_layout(vm, theme, cols, rows);
    }
}
