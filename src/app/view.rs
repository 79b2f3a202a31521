//! Selection, loading and full-screen state.
//!
//! [`ViewState`] is mutated only through its transition methods. Every
//! selection is issued a fresh [`LoadTicket`]; the content-ready signal of
//! the viewer must present the document and ticket it was started for, and
//! any signal that no longer matches the current selection is dropped. This
//! keeps a slow load of an abandoned document from clearing the loading flag
//! of the one the user has since opened, including when the same document
//! is opened twice in a row.

use super::modes::{Layout, Viewport};
use crate::domain::Document;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one selection, carried by the load it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LoadTicket(u64);

impl LoadTicket {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The currently open document and the ticket of its load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub document: Document,
    pub ticket: LoadTicket,
}

/// Selected document, loading flag and full-screen flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    selection: Option<Selection>,
    loading: bool,
    full_screen: bool,
    issued: u64,
}

impl ViewState {
    /// Starts with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn selected_document(&self) -> Option<&Document> {
        self.selection.as_ref().map(|s| &s.document)
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    /// Opens a document and marks it loading.
    ///
    /// Re-selecting the open document still issues a new ticket, so a load
    /// already in flight for it is treated as stale.
    pub fn select(&mut self, document: Document) -> LoadTicket {
        self.issued += 1;
        let ticket = LoadTicket(self.issued);
        tracing::debug!(document = %document, ticket = %ticket, "document selected");
        self.selection = Some(Selection { document, ticket });
        self.loading = true;
        ticket
    }

    /// Applies a content-ready signal.
    ///
    /// Returns `false` and leaves the state untouched when the signal belongs
    /// to anything but the current selection.
    pub fn content_ready(&mut self, document: &Document, ticket: LoadTicket) -> bool {
        if !self.is_current(document, ticket) {
            tracing::debug!(
                document = %document,
                ticket = %ticket,
                current = ?self.selection.as_ref().map(|s| s.ticket),
                "discarding stale content signal"
            );
            return false;
        }
        self.loading = false;
        true
    }

    /// Whether a signal for `(document, ticket)` addresses the open document.
    #[must_use]
    pub fn is_current(&self, document: &Document, ticket: LoadTicket) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|s| s.ticket == ticket && &s.document == document)
    }

    /// Flips full-screen. Only wide panes have a full-screen mode.
    pub fn toggle_full_screen(&mut self, viewport: Viewport) -> bool {
        if !viewport.is_wide() {
            return false;
        }
        self.full_screen = !self.full_screen;
        true
    }

    /// Closes the open document. Only narrow panes have a back action.
    pub fn back(&mut self, viewport: Viewport) -> bool {
        if viewport.is_wide() || self.selection.is_none() {
            return false;
        }
        self.selection = None;
        self.loading = false;
        self.full_screen = false;
        true
    }

    /// Reacts to the pane being shown or resized.
    ///
    /// On a wide pane with nothing open, `earliest` is selected and its
    /// ticket returned.
    pub fn viewport_changed(&mut self, viewport: Viewport, earliest: Option<&Document>) -> Option<LoadTicket> {
        if !viewport.is_wide() || self.selection.is_some() {
            return None;
        }
        earliest.map(|document| self.select(document.clone()))
    }

    /// Layout for the given viewport.
    #[must_use]
    pub const fn layout(&self, viewport: Viewport) -> Layout {
        match viewport {
            Viewport::Narrow if self.selection.is_some() => Layout::ViewerOnly,
            Viewport::Narrow => Layout::ListOnly,
            Viewport::Wide if self.full_screen => Layout::FullScreen,
            Viewport::Wide => Layout::Split,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> Document {
        Document::new(name)
    }

    #[test]
    fn select_sets_loading_and_ready_clears_it() {
        let mut view = ViewState::new();
        assert!(!view.is_loading());

        let ticket = view.select(doc("a.pdf"));
        assert!(view.is_loading());
        assert_eq!(view.selected_document(), Some(&doc("a.pdf")));

        assert!(view.content_ready(&doc("a.pdf"), ticket));
        assert!(!view.is_loading());
    }

    #[test]
    fn stale_ready_after_switch_is_ignored() {
        let mut view = ViewState::new();
        let first = view.select(doc("a.pdf"));
        let second = view.select(doc("b.pdf"));

        assert!(!view.content_ready(&doc("a.pdf"), first));
        assert!(view.is_loading());

        assert!(view.content_ready(&doc("b.pdf"), second));
        assert!(!view.is_loading());
    }

    #[test]
    fn reselecting_same_document_invalidates_previous_load() {
        let mut view = ViewState::new();
        let first = view.select(doc("a.pdf"));
        let second = view.select(doc("a.pdf"));
        assert_ne!(first, second);

        assert!(!view.content_ready(&doc("a.pdf"), first));
        assert!(view.is_loading());
        assert!(view.content_ready(&doc("a.pdf"), second));
    }

    #[test]
    fn ticket_must_match_document() {
        let mut view = ViewState::new();
        let ticket = view.select(doc("a.pdf"));
        assert!(!view.content_ready(&doc("b.pdf"), ticket));
        assert!(view.is_loading());
    }

    #[test]
    fn double_toggle_restores_full_screen() {
        let mut view = ViewState::new();
        let ticket = view.select(doc("a.pdf"));
        view.content_ready(&doc("a.pdf"), ticket);
        let before = view.clone();

        assert!(view.toggle_full_screen(Viewport::Wide));
        assert!(view.is_full_screen());
        assert!(!view.is_loading());
        assert!(view.toggle_full_screen(Viewport::Wide));

        assert_eq!(view, before);
    }

    #[test]
    fn full_screen_is_wide_only() {
        let mut view = ViewState::new();
        view.select(doc("a.pdf"));
        assert!(!view.toggle_full_screen(Viewport::Narrow));
        assert!(!view.is_full_screen());
    }

    #[test]
    fn back_is_narrow_only_and_clears_everything() {
        let mut view = ViewState::new();
        view.select(doc("a.pdf"));
        view.toggle_full_screen(Viewport::Wide);

        assert!(!view.back(Viewport::Wide));
        assert!(view.selection().is_some());

        assert!(view.back(Viewport::Narrow));
        assert!(view.selection().is_none());
        assert!(!view.is_loading());
        assert!(!view.is_full_screen());
        assert!(!view.back(Viewport::Narrow));
    }

    #[test]
    fn wide_viewport_auto_selects_earliest_once() {
        let mut view = ViewState::new();
        let earliest = doc("first.pdf");

        assert_eq!(view.viewport_changed(Viewport::Narrow, Some(&earliest)), None);
        assert!(view.selection().is_none());

        let ticket = view.viewport_changed(Viewport::Wide, Some(&earliest));
        assert!(ticket.is_some());
        assert_eq!(view.selected_document(), Some(&earliest));
        assert!(view.is_loading());

        assert_eq!(view.viewport_changed(Viewport::Wide, Some(&doc("other.pdf"))), None);
        assert_eq!(view.selected_document(), Some(&earliest));
    }

    #[test]
    fn layout_follows_viewport_and_flags() {
        let mut view = ViewState::new();
        assert_eq!(view.layout(Viewport::Narrow), Layout::ListOnly);
        assert_eq!(view.layout(Viewport::Wide), Layout::Split);

        view.select(doc("a.pdf"));
        assert_eq!(view.layout(Viewport::Narrow), Layout::ViewerOnly);
        assert_eq!(view.layout(Viewport::Wide), Layout::Split);

        view.toggle_full_screen(Viewport::Wide);
        assert_eq!(view.layout(Viewport::Wide), Layout::FullScreen);
        assert_eq!(view.layout(Viewport::Narrow), Layout::ViewerOnly);
    }
}
