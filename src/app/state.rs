//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the sorted
//! catalog, the list cursor, the [`ViewState`], the last known viewport and
//! whatever the viewer command produced for the open document. View models
//! are computed on demand from a state snapshot and the pane size.
//!
//! # Example
//!
//! ```rust
//! use tie_archive::app::AppState;
//! use tie_archive::domain::Catalog;
//! use tie_archive::ui::Theme;
//!
//! let catalog = Catalog::builtin()?;
//! let state = AppState::new(catalog, Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.list.is_some());
//! # Ok::<(), tie_archive::ArchiveError>(())
//! ```

use super::actions::Action;
use super::modes::{Layout, Viewport};
use super::view::{LoadTicket, ViewState};
use crate::domain::{Catalog, Document, DocumentLocator};
use crate::ui::helpers::{fit_to_width, sanitize_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BarInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ListPane, UIViewModel, ViewerPane,
    ViewerStatus,
};

/// Rows taken by header or bar, the two borders and the footer.
const CHROME_ROWS: usize = 4;

/// Cells reserved for the cursor and open markers in front of a list row.
const MARKER_WIDTH: usize = 2;

/// Width of a `YYYY-MM-DD` date plus its separating space.
const DATE_COLUMN_WIDTH: usize = 11;

/// Narrowest list column that still shows dates.
const MIN_DATED_LIST_WIDTH: usize = 30;

/// Output of the viewer command for one load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewerContent {
    /// Nothing loaded for the current selection yet.
    #[default]
    Empty,
    /// Sanitized text lines.
    Text { ticket: LoadTicket, lines: Vec<String> },
    /// The viewer command failed.
    Failed { ticket: LoadTicket, message: String },
}

impl ViewerContent {
    /// Splits raw viewer output into displayable lines.
    ///
    /// Trailing blank lines (`pdftotext` ends every page with a form feed)
    /// are dropped.
    #[must_use]
    pub fn from_text(ticket: LoadTicket, text: &str) -> Self {
        let mut lines: Vec<String> = text.lines().map(sanitize_line).collect();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
        Self::Text { ticket, lines }
    }

    /// Flattens a failure report into one displayable line.
    #[must_use]
    pub fn failure(ticket: LoadTicket, error: &str) -> Self {
        let message = error
            .lines()
            .map(sanitize_line)
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Self::Failed { ticket, message }
    }

    const fn ticket(&self) -> Option<LoadTicket> {
        match self {
            Self::Empty => None,
            Self::Text { ticket, .. } | Self::Failed { ticket, .. } => Some(*ticket),
        }
    }

    fn line_count(&self) -> usize {
        match self {
            Self::Text { lines, .. } => lines.len(),
            _ => 0,
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Documents in date order.
    pub catalog: Catalog,

    /// Index of the list row under the cursor.
    pub cursor: usize,

    /// Selection, loading and full-screen flags.
    pub view: ViewState,

    /// Width class of the pane, unknown until the first render.
    pub viewport: Option<Viewport>,

    /// What the viewer command produced for the open document.
    pub content: ViewerContent,

    /// First content line shown in the viewer.
    pub scroll: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Text of the list header.
    pub title: String,

    /// Resolves documents to file locations.
    pub locator: DocumentLocator,

    /// Column count from which the pane counts as wide.
    pub wide_min_cols: usize,

    /// Set when the manifest failed validation at start-up.
    pub startup_error: Option<String>,
}

impl AppState {
    /// Creates a state with nothing selected and default settings.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        Self {
            catalog,
            cursor: 0,
            view: ViewState::new(),
            viewport: None,
            content: ViewerContent::Empty,
            scroll: 0,
            theme,
            title: crate::DEFAULT_TITLE.to_string(),
            locator: DocumentLocator::default(),
            wide_min_cols: crate::DEFAULT_WIDE_MIN_COLS,
            startup_error: None,
        }
    }

    /// Moves the list cursor down, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.catalog.len();
    }

    /// Moves the list cursor up, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.catalog.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Document under the list cursor.
    #[must_use]
    pub fn cursor_document(&self) -> Option<&Document> {
        self.catalog.get(self.cursor).map(|entry| &entry.document)
    }

    /// Viewport class, assuming narrow before the first render.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport.unwrap_or(Viewport::Narrow)
    }

    #[must_use]
    pub const fn layout(&self) -> Layout {
        match self.viewport {
            Some(viewport) => self.view.layout(viewport),
            None => self.view.layout(Viewport::Narrow),
        }
    }

    /// Opens `document`, returning the action that loads it.
    ///
    /// Moves the cursor onto the document and drops the previous content.
    pub fn open(&mut self, document: Document) -> Action {
        if let Some(position) = self.catalog.position(&document) {
            self.cursor = position;
        }
        let ticket = self.view.select(document.clone());
        self.reset_viewer();
        self.load_action(document, ticket)
    }

    /// Builds the action that loads an already selected document.
    #[must_use]
    pub fn load_action(&self, document: Document, ticket: LoadTicket) -> Action {
        let path = self.locator.locate(&document);
        Action::LoadDocument { document, ticket, path }
    }

    /// Clears viewer content and scroll position.
    pub fn reset_viewer(&mut self) {
        self.content = ViewerContent::Empty;
        self.scroll = 0;
    }

    /// Stores viewer output if it belongs to the current selection.
    pub fn apply_content(&mut self, document: &Document, ticket: LoadTicket, text: &str) -> bool {
        if !self.view.content_ready(document, ticket) {
            return false;
        }
        self.content = ViewerContent::from_text(ticket, text);
        self.scroll = 0;
        tracing::debug!(
            document = %document,
            ticket = %ticket,
            lines = self.content.line_count(),
            "viewer content stored"
        );
        true
    }

    /// Stores a viewer failure if it belongs to the current selection.
    pub fn apply_failure(&mut self, document: &Document, ticket: LoadTicket, error: &str) -> bool {
        if !self.view.content_ready(document, ticket) {
            return false;
        }
        tracing::warn!(document = %document, ticket = %ticket, error = %error, "viewer command failed");
        self.content = ViewerContent::failure(ticket, error);
        self.scroll = 0;
        true
    }

    /// Scrolls the viewer down by `lines`, stopping at the last line.
    pub fn scroll_down(&mut self, lines: usize) -> bool {
        let max = self.content.line_count().saturating_sub(1);
        let next = self.scroll.saturating_add(lines).min(max);
        let changed = next != self.scroll;
        self.scroll = next;
        changed
    }

    /// Scrolls the viewer up by `lines`, stopping at the first line.
    pub fn scroll_up(&mut self, lines: usize) -> bool {
        let next = self.scroll.saturating_sub(lines);
        let changed = next != self.scroll;
        self.scroll = next;
        changed
    }

    /// Computes a renderable view model for a pane of `rows` x `cols`.
    ///
    /// Uses the stored viewport when known; otherwise classifies `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let viewport = self
            .viewport
            .unwrap_or_else(|| Viewport::classify(cols, self.wide_min_cols));
        let layout = self.view.layout(viewport);

        let empty_state = self.compute_empty_state();
        if empty_state.is_some() {
            return UIViewModel {
                layout: Layout::ListOnly,
                header: self.compute_header(),
                list: None,
                viewer: None,
                footer: FooterInfo {
                    keybindings: "q: quit".to_string(),
                },
                empty_state,
            };
        }

        let body_rows = rows.saturating_sub(CHROME_ROWS);

        let (list, viewer) = match layout {
            Layout::ListOnly => (Some(self.compute_list(body_rows, cols)), None),
            Layout::Split => {
                let list_width = cols / 3;
                let viewer_col = list_width + 2;
                let viewer_width = cols.saturating_sub(list_width + 1);
                (
                    Some(self.compute_list(body_rows, list_width)),
                    Some(self.compute_viewer(layout, body_rows.saturating_sub(1), viewer_col, viewer_width)),
                )
            }
            Layout::ViewerOnly | Layout::FullScreen => {
                (None, Some(self.compute_viewer(layout, body_rows, 1, cols)))
            }
        };

        UIViewModel {
            layout,
            header: self.compute_header(),
            list,
            viewer,
            footer: Self::compute_footer(layout),
            empty_state: None,
        }
    }

    /// Windows the list around the cursor, like a centered scroll.
    fn compute_list(&self, available_rows: usize, width: usize) -> ListPane {
        let total = self.catalog.len();
        let visible_start = self
            .cursor
            .saturating_sub(available_rows / 2)
            .min(total.saturating_sub(available_rows));
        let visible_end = (visible_start + available_rows).min(total);

        let open = self.view.selected_document();
        let show_dates = width >= MIN_DATED_LIST_WIDTH;
        let name_width = if show_dates {
            width.saturating_sub(MARKER_WIDTH + DATE_COLUMN_WIDTH)
        } else {
            width.saturating_sub(MARKER_WIDTH)
        };

        let items = self.catalog.entries()[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, entry)| DisplayItem {
                name: fit_to_width(&entry.document.display_name(), name_width),
                date: if show_dates {
                    entry.date.format("%Y-%m-%d").to_string()
                } else {
                    String::new()
                },
                is_cursor: visible_start + relative_idx == self.cursor,
                is_open: open == Some(&entry.document),
            })
            .collect();

        ListPane { items, width }
    }

    fn compute_viewer(&self, layout: Layout, content_rows: usize, col: usize, width: usize) -> ViewerPane {
        let Some(selection) = self.view.selection() else {
            return ViewerPane {
                col,
                width,
                bar: None,
                status: ViewerStatus::Idle,
                lines: vec![],
                position: None,
            };
        };

        let button = match layout {
            Layout::ViewerOnly => "Esc: Back",
            Layout::FullScreen => "Esc: Exit Full Screen",
            Layout::Split | Layout::ListOnly => "f: Full Screen",
        };
        let bar = Some(BarInfo {
            button: button.to_string(),
            title: selection.document.display_name(),
        });

        let current = self.content.ticket() == Some(selection.ticket);
        let (status, lines, position) = match &self.content {
            _ if self.view.is_loading() || !current => (ViewerStatus::Loading, vec![], None),
            ViewerContent::Failed { message, .. } => (ViewerStatus::Failed(message.clone()), vec![], None),
            ViewerContent::Text { lines, .. } => {
                let start = self.scroll.min(lines.len());
                let end = (start + content_rows).min(lines.len());
                let window = lines[start..end].iter().map(|line| fit_to_width(line, width)).collect();
                let position = if lines.is_empty() {
                    "0/0".to_string()
                } else {
                    format!("{}-{}/{}", start + 1, end, lines.len())
                };
                (ViewerStatus::Ready, window, Some(position))
            }
            ViewerContent::Empty => (ViewerStatus::Loading, vec![], None),
        };

        ViewerPane {
            col,
            width,
            bar,
            status,
            lines,
            position,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" {} ({}) ", self.title, self.catalog.len()),
        }
    }

    fn compute_footer(layout: Layout) -> FooterInfo {
        let keybindings = match layout {
            Layout::ListOnly => "j/k: navigate  Enter: open  q: quit",
            Layout::Split => {
                "j/k: navigate  Enter: open  Ctrl+d/u: scroll  f: full screen  o: open externally  q: quit"
            }
            Layout::ViewerOnly => "j/k: scroll  Esc: back  o: open externally  q: quit",
            Layout::FullScreen => "j/k: scroll  Esc/f: exit full screen  o: open externally  q: quit",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if let Some(error) = &self.startup_error {
            return Some(EmptyState {
                message: "The archive manifest could not be read".to_string(),
                subtitle: error.clone(),
            });
        }
        if self.catalog.is_empty() {
            return Some(EmptyState {
                message: "No documents in the archive".to_string(),
                subtitle: "The manifest is empty".to_string(),
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Catalog::builtin().unwrap(), Theme::default())
    }

    fn open_cursor(state: &mut AppState) -> (Document, LoadTicket) {
        let document = state.cursor_document().cloned().unwrap();
        match state.open(document) {
            Action::LoadDocument { document, ticket, .. } => (document, ticket),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut state = state();
        state.move_cursor_up();
        assert_eq!(state.cursor, state.catalog.len() - 1);
        state.move_cursor_down();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn open_builds_located_load_action() {
        let mut state = state();
        state.locator = DocumentLocator::new("/srv/archive", "articles");
        state.cursor = 3;
        let document = state.cursor_document().cloned().unwrap();

        let action = state.open(document.clone());
        let Action::LoadDocument { path, .. } = action else {
            panic!("expected a load action");
        };
        assert_eq!(path, std::path::Path::new("/srv/archive/articles").join(document.filename()));
        assert!(state.view.is_loading());
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn stale_content_is_not_stored() {
        let mut state = state();
        let (first_doc, first_ticket) = open_cursor(&mut state);
        state.move_cursor_down();
        let (second_doc, second_ticket) = open_cursor(&mut state);

        assert!(!state.apply_content(&first_doc, first_ticket, "old text"));
        assert_eq!(state.content, ViewerContent::Empty);

        assert!(state.apply_content(&second_doc, second_ticket, "new text\n"));
        assert_eq!(
            state.content,
            ViewerContent::Text {
                ticket: second_ticket,
                lines: vec!["new text".to_string()]
            }
        );
    }

    #[test]
    fn failure_clears_loading_and_keeps_message() {
        let mut state = state();
        let (document, ticket) = open_cursor(&mut state);
        assert!(state.apply_failure(&document, ticket, "pdftotext: not found\n"));
        assert!(!state.view.is_loading());

        state.viewport = Some(Viewport::Narrow);
        let vm = state.compute_viewmodel(24, 80);
        let viewer = vm.viewer.unwrap();
        assert_eq!(viewer.status, ViewerStatus::Failed("pdftotext: not found".to_string()));
    }

    #[test]
    fn failure_message_has_no_control_characters() {
        let mut state = state();
        state.viewport = Some(Viewport::Narrow);
        let (document, ticket) = open_cursor(&mut state);
        state.apply_failure(&document, ticket, "Syntax Error\t(12): \u{1b}[2Jbad\rxref\n");

        let vm = state.compute_viewmodel(24, 80);
        let ViewerStatus::Failed(message) = vm.viewer.unwrap().status else {
            panic!("expected a failed viewer");
        };
        assert!(!message.chars().any(char::is_control));
        assert_eq!(message, "Syntax Error    (12): [2Jbadxref");
    }

    #[test]
    fn from_text_drops_trailing_page_breaks() {
        let content = ViewerContent::from_text(LoadTicket::new(1), "one\n\ttwo\n\u{c}\n\n");
        assert_eq!(
            content,
            ViewerContent::Text {
                ticket: LoadTicket::new(1),
                lines: vec!["one".to_string(), "    two".to_string()]
            }
        );
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut state = state();
        let (document, ticket) = open_cursor(&mut state);
        state.apply_content(&document, ticket, "a\nb\nc");

        assert!(state.scroll_down(10));
        assert_eq!(state.scroll, 2);
        assert!(!state.scroll_down(1));
        assert!(state.scroll_up(5));
        assert_eq!(state.scroll, 0);
        assert!(!state.scroll_up(1));
    }

    #[test]
    fn narrow_list_viewmodel_windows_around_cursor() {
        let mut state = state();
        state.viewport = Some(Viewport::Narrow);
        state.cursor = 15;

        let vm = state.compute_viewmodel(14, 60);
        assert_eq!(vm.layout, Layout::ListOnly);
        assert!(vm.viewer.is_none());

        let list = vm.list.unwrap();
        assert_eq!(list.items.len(), 10);
        assert_eq!(list.items.iter().filter(|item| item.is_cursor).count(), 1);
        assert_eq!(list.items[0].date.len(), 10);
    }

    #[test]
    fn tall_pane_shows_whole_catalog_with_cursor_at_end() {
        let mut state = state();
        state.viewport = Some(Viewport::Narrow);
        state.cursor = state.catalog.len() - 1;

        let vm = state.compute_viewmodel(40, 80);
        let list = vm.list.unwrap();
        assert_eq!(list.items.len(), state.catalog.len());
        assert_eq!(list.items[0].name, state.catalog.entries()[0].document.display_name());
        assert!(list.items.last().unwrap().is_cursor);
    }

    #[test]
    fn split_viewmodel_gives_list_a_third() {
        let mut state = state();
        state.viewport = Some(Viewport::Wide);
        let (document, ticket) = open_cursor(&mut state);
        state.apply_content(&document, ticket, "line one\nline two");

        let vm = state.compute_viewmodel(30, 120);
        assert_eq!(vm.layout, Layout::Split);

        let list = vm.list.unwrap();
        assert_eq!(list.width, 40);
        assert!(list.items[0].is_open);

        let viewer = vm.viewer.unwrap();
        assert_eq!(viewer.col, 42);
        assert_eq!(viewer.width, 79);
        assert_eq!(viewer.status, ViewerStatus::Ready);
        assert_eq!(viewer.lines, vec!["line one", "line two"]);
        assert_eq!(viewer.position.as_deref(), Some("1-2/2"));
        assert_eq!(viewer.bar.unwrap().title, document.display_name());
    }

    #[test]
    fn loading_viewer_shows_no_content() {
        let mut state = state();
        state.viewport = Some(Viewport::Narrow);
        open_cursor(&mut state);

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.layout, Layout::ViewerOnly);
        let viewer = vm.viewer.unwrap();
        assert_eq!(viewer.status, ViewerStatus::Loading);
        assert_eq!(viewer.bar.unwrap().button, "Esc: Back");
    }

    #[test]
    fn startup_error_renders_empty_state() {
        let mut state = AppState::new(Catalog::default(), Theme::default());
        state.startup_error = Some("bad filename".to_string());

        let vm = state.compute_viewmodel(24, 80);
        let empty = vm.empty_state.unwrap();
        assert_eq!(empty.subtitle, "bad filename");
        assert!(vm.list.is_none());
    }
}
