//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place where [`AppState`] changes in response
//! to the outside world. It pattern-matches the event, mutates state through
//! the state's own methods and returns whether the pane needs a re-render
//! along with the actions the plugin shim must execute.
//!
//! # Event Types
//!
//! - **Navigation**: `CursorDown`, `CursorUp`, `Select`
//! - **Viewer**: `Back`, `ToggleFullScreen`, `Escape`, `ScrollDown`, `ScrollUp`, `OpenExternal`
//! - **System**: `ViewportChanged`, `ContentReady`, `ContentFailed`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use tie_archive::app::{handle_event, Action, AppState, Event};
//! use tie_archive::domain::Catalog;
//! use tie_archive::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::builtin()?, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::ViewportChanged { cols: 160 })?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::LoadDocument { .. }));
//! # Ok::<(), tie_archive::ArchiveError>(())
//! ```

use super::actions::Action;
use super::modes::{Layout, Viewport};
use super::state::AppState;
use super::view::LoadTicket;
use crate::domain::error::Result;
use crate::domain::Document;

/// Events triggered by user input or by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the list cursor down by one row (wraps to top).
    CursorDown,
    /// Moves the list cursor up by one row (wraps to bottom).
    CursorUp,
    /// Opens the document under the cursor.
    Select,
    /// Leaves the narrow viewer for the list.
    Back,
    /// Enters or leaves full-screen on a wide pane.
    ToggleFullScreen,
    /// Back on a narrow pane, leave full-screen on a wide one.
    Escape,
    /// Scrolls the viewer down by the given number of lines.
    ScrollDown(usize),
    /// Scrolls the viewer up by the given number of lines.
    ScrollUp(usize),
    /// Hands the open document to the external opener.
    OpenExternal,
    /// Hides the plugin pane.
    CloseFocus,

    /// The pane was rendered with a new column count.
    ViewportChanged {
        /// Pane width in cells.
        cols: usize,
    },

    /// The viewer command finished for a document.
    ContentReady {
        document: Document,
        ticket: LoadTicket,
        /// Text written by the command to stdout.
        text: String,
    },

    /// The viewer command exited with an error.
    ContentFailed {
        document: Document,
        ticket: LoadTicket,
        /// Error output or exit status description.
        error: String,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the pane must be re-rendered.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for
/// handlers that touch the filesystem.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::CursorDown | Event::CursorUp if !state.layout().shows_list() => {
            tracing::debug!("list hidden, cursor not moved");
            Ok((false, vec![]))
        }
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Select => {
            let Some(document) = state.cursor_document().cloned() else {
                tracing::debug!("no document under cursor");
                return Ok((false, vec![]));
            };
            let action = state.open(document);
            Ok((true, vec![action]))
        }
        Event::Back => Ok((back(state), vec![])),
        Event::ToggleFullScreen => {
            if state.view.selection().is_none() {
                return Ok((false, vec![]));
            }
            let viewport = state.viewport();
            let toggled = state.view.toggle_full_screen(viewport);
            tracing::debug!(toggled, full_screen = state.view.is_full_screen(), "full-screen toggle");
            Ok((toggled, vec![]))
        }
        Event::Escape => match state.layout() {
            Layout::ViewerOnly => Ok((back(state), vec![])),
            Layout::FullScreen => {
                let viewport = state.viewport();
                Ok((state.view.toggle_full_screen(viewport), vec![]))
            }
            Layout::ListOnly | Layout::Split => Ok((false, vec![])),
        },
        Event::ScrollDown(lines) => Ok((state.scroll_down(*lines), vec![])),
        Event::ScrollUp(lines) => Ok((state.scroll_up(*lines), vec![])),
        Event::OpenExternal => {
            let Some(document) = state.view.selected_document() else {
                tracing::debug!("nothing open to hand to the external opener");
                return Ok((false, vec![]));
            };
            let path = state.locator.locate(document);
            Ok((false, vec![Action::OpenExternal { path }]))
        }
        Event::ViewportChanged { cols } => {
            let viewport = Viewport::classify(*cols, state.wide_min_cols);
            if state.viewport == Some(viewport) {
                return Ok((false, vec![]));
            }
            tracing::debug!(cols, ?viewport, previous = ?state.viewport, "viewport changed");
            state.viewport = Some(viewport);

            let earliest = state.catalog.earliest().cloned();
            let actions = match state.view.viewport_changed(viewport, earliest.as_ref()) {
                Some(ticket) => {
                    state.cursor = 0;
                    state.reset_viewer();
                    earliest
                        .map(|document| state.load_action(document, ticket))
                        .into_iter()
                        .collect()
                }
                None => vec![],
            };
            Ok((true, actions))
        }
        Event::ContentReady { document, ticket, text } => {
            Ok((state.apply_content(document, *ticket, text), vec![]))
        }
        Event::ContentFailed { document, ticket, error } => {
            Ok((state.apply_failure(document, *ticket, error), vec![]))
        }
    }
}

fn back(state: &mut AppState) -> bool {
    let viewport = state.viewport();
    let closed = state.view.back(viewport);
    if closed {
        state.reset_viewer();
    }
    closed
}

/// Short event name for spans, without the viewer text payload.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::CursorDown => "CursorDown",
        Event::CursorUp => "CursorUp",
        Event::Select => "Select",
        Event::Back => "Back",
        Event::ToggleFullScreen => "ToggleFullScreen",
        Event::Escape => "Escape",
        Event::ScrollDown(_) => "ScrollDown",
        Event::ScrollUp(_) => "ScrollUp",
        Event::OpenExternal => "OpenExternal",
        Event::CloseFocus => "CloseFocus",
        Event::ViewportChanged { .. } => "ViewportChanged",
        Event::ContentReady { .. } => "ContentReady",
        Event::ContentFailed { .. } => "ContentFailed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(Catalog::builtin().unwrap(), Theme::default())
    }

    fn load(actions: &[Action]) -> (Document, LoadTicket) {
        match actions {
            [Action::LoadDocument { document, ticket, .. }] => (document.clone(), *ticket),
            other => panic!("expected one load action, got {other:?}"),
        }
    }

    #[test]
    fn wide_viewport_auto_selects_earliest() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::ViewportChanged { cols: 120 }).unwrap();
        assert!(render);

        let (document, _) = load(&actions);
        assert_eq!(document.filename(), "Walter_Harvey_Titus_Interview_1975.pdf");
        assert!(state.view.is_loading());
        assert_eq!(state.layout(), Layout::Split);

        let (render, actions) = handle_event(&mut state, &Event::ViewportChanged { cols: 130 }).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn narrow_viewport_shows_list_without_selection() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::ViewportChanged { cols: 60 }).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.layout(), Layout::ListOnly);
    }

    #[test]
    fn select_then_ready_clears_loading() {
        let mut state = state();
        handle_event(&mut state, &Event::ViewportChanged { cols: 60 }).unwrap();
        handle_event(&mut state, &Event::CursorDown).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();
        let (document, ticket) = load(&actions);
        assert_eq!(state.layout(), Layout::ViewerOnly);
        assert!(state.view.is_loading());

        let ready = Event::ContentReady {
            document,
            ticket,
            text: "page one".to_string(),
        };
        let (render, _) = handle_event(&mut state, &ready).unwrap();
        assert!(render);
        assert!(!state.view.is_loading());
    }

    #[test]
    fn stale_ready_after_switch_keeps_loading() {
        let mut state = state();
        handle_event(&mut state, &Event::ViewportChanged { cols: 120 }).unwrap();
        state.cursor = 0;
        let (_, first) = handle_event(&mut state, &Event::Select).unwrap();
        let (first_doc, first_ticket) = load(&first);

        handle_event(&mut state, &Event::CursorDown).unwrap();
        handle_event(&mut state, &Event::Select).unwrap();

        let stale = Event::ContentReady {
            document: first_doc,
            ticket: first_ticket,
            text: "stale".to_string(),
        };
        let (render, _) = handle_event(&mut state, &stale).unwrap();
        assert!(!render);
        assert!(state.view.is_loading());
    }

    #[test]
    fn escape_leaves_full_screen_then_does_nothing_on_split() {
        let mut state = state();
        handle_event(&mut state, &Event::ViewportChanged { cols: 120 }).unwrap();

        handle_event(&mut state, &Event::ToggleFullScreen).unwrap();
        assert_eq!(state.layout(), Layout::FullScreen);

        let (render, _) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(render);
        assert_eq!(state.layout(), Layout::Split);
        assert!(state.view.selection().is_some());

        let (render, _) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(!render);
    }

    #[test]
    fn escape_on_narrow_viewer_goes_back() {
        let mut state = state();
        handle_event(&mut state, &Event::ViewportChanged { cols: 60 }).unwrap();
        handle_event(&mut state, &Event::Select).unwrap();
        assert_eq!(state.layout(), Layout::ViewerOnly);

        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.layout(), Layout::ListOnly);
        assert!(!state.view.is_loading());
    }

    #[test]
    fn cursor_stays_put_while_list_is_hidden() {
        let mut state = state();
        handle_event(&mut state, &Event::ViewportChanged { cols: 120 }).unwrap();
        handle_event(&mut state, &Event::ToggleFullScreen).unwrap();
        assert_eq!(state.layout(), Layout::FullScreen);

        let (render, _) = handle_event(&mut state, &Event::CursorDown).unwrap();
        assert!(!render);
        assert_eq!(state.cursor, 0);

        handle_event(&mut state, &Event::ViewportChanged { cols: 60 }).unwrap();
        assert_eq!(state.layout(), Layout::ViewerOnly);
        handle_event(&mut state, &Event::CursorUp).unwrap();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn full_screen_is_ignored_on_narrow_panes() {
        let mut state = state();
        handle_event(&mut state, &Event::ViewportChanged { cols: 60 }).unwrap();
        handle_event(&mut state, &Event::Select).unwrap();

        let (render, _) = handle_event(&mut state, &Event::ToggleFullScreen).unwrap();
        assert!(!render);
        assert_eq!(state.layout(), Layout::ViewerOnly);
    }

    #[test]
    fn open_external_uses_the_open_document() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::OpenExternal).unwrap();
        assert!(actions.is_empty());

        handle_event(&mut state, &Event::ViewportChanged { cols: 120 }).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::OpenExternal).unwrap();
        assert_eq!(
            actions,
            vec![Action::OpenExternal {
                path: std::path::PathBuf::from("./articles/Walter_Harvey_Titus_Interview_1975.pdf")
            }]
        );
    }

    #[test]
    fn failure_is_shown_for_current_load_only() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::ViewportChanged { cols: 120 }).unwrap();
        let (document, ticket) = load(&actions);

        let failed = Event::ContentFailed {
            document,
            ticket: LoadTicket::new(ticket.value() + 1),
            error: "boom".to_string(),
        };
        let (render, _) = handle_event(&mut state, &failed).unwrap();
        assert!(!render);
        assert!(state.view.is_loading());
    }

    #[test]
    fn close_focus_emits_action_without_render() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
