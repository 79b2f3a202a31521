//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed
//! by the renderer. They hold display-ready strings and positions only; all
//! decisions about what is selected, loading or visible are made before the
//! view model exists.

use crate::app::Layout;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Pane arrangement to draw.
    pub layout: Layout,

    /// Title bar (list layouts only).
    pub header: HeaderInfo,

    /// Document list, when the layout shows it.
    pub list: Option<ListPane>,

    /// Viewer pane, when the layout shows it.
    pub viewer: Option<ViewerPane>,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// Replaces everything else when the archive cannot be shown.
    pub empty_state: Option<EmptyState>,
}

/// The visible window of the document list.
#[derive(Debug, Clone)]
pub struct ListPane {
    /// Rows to draw, already windowed around the cursor.
    pub items: Vec<DisplayItem>,

    /// Width of the list column in cells.
    pub width: usize,
}

/// One row of the document list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Formatted document name, already fitted to the column.
    pub name: String,

    /// Extracted date as `YYYY-MM-DD`, empty when the column is too narrow.
    pub date: String,

    /// Row under the list cursor.
    pub is_cursor: bool,

    /// Row of the document open in the viewer.
    pub is_open: bool,
}

/// The viewer pane.
#[derive(Debug, Clone)]
pub struct ViewerPane {
    /// First column of the pane (1-indexed).
    pub col: usize,

    /// Width of the pane in cells.
    pub width: usize,

    /// Bar with the pane's action and the open document's name.
    pub bar: Option<BarInfo>,

    /// What the body shows.
    pub status: ViewerStatus,

    /// Content lines in view, fitted to `width`.
    pub lines: Vec<String>,

    /// Position indicator, e.g. `12-40/310`.
    pub position: Option<String>,
}

/// Body state of the viewer pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerStatus {
    /// No document open.
    Idle,
    /// Waiting for the viewer command of the current selection.
    Loading,
    /// The viewer command of the current selection failed.
    Failed(String),
    /// Content available in `lines`.
    Ready,
}

/// Action bar drawn on top of the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarInfo {
    /// Action label, e.g. `Esc: Back`.
    pub button: String,

    /// Display name of the open document.
    pub title: String,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
