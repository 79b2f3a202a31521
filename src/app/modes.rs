//! Viewport classes and the pane layouts derived from them.
//!
//! The plugin pane is classified as [`Viewport::Narrow`] or
//! [`Viewport::Wide`] from its column count. Combined with the view state,
//! the viewport decides which [`Layout`] is rendered:
//!
//! ```text
//!              nothing selected   selected        selected + full-screen
//! Narrow       ListOnly           ViewerOnly      ViewerOnly
//! Wide         Split              Split           FullScreen
//! ```

/// Width class of the plugin pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    /// Too narrow for list and viewer side by side.
    Narrow,
    /// Wide enough for the split layout.
    Wide,
}

impl Viewport {
    /// Buckets a column count against the configured threshold.
    ///
    /// ```
    /// use tie_archive::app::Viewport;
    ///
    /// assert_eq!(Viewport::classify(80, 100), Viewport::Narrow);
    /// assert_eq!(Viewport::classify(100, 100), Viewport::Wide);
    /// ```
    #[must_use]
    pub const fn classify(cols: usize, wide_min_cols: usize) -> Self {
        if cols >= wide_min_cols {
            Self::Wide
        } else {
            Self::Narrow
        }
    }

    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(self, Self::Wide)
    }
}

/// Arrangement of the list and viewer panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Narrow pane, no document open: the list fills the pane.
    ListOnly,
    /// Narrow pane with a document open: viewer with a Back bar.
    ViewerOnly,
    /// Wide pane: list on the left third, viewer on the rest.
    Split,
    /// Wide pane in full-screen: viewer with an Exit Full Screen bar.
    FullScreen,
}

impl Layout {
    /// Whether the document list is drawn.
    #[must_use]
    pub const fn shows_list(self) -> bool {
        matches!(self, Self::ListOnly | Self::Split)
    }

    /// Whether the viewer pane owns the whole plugin pane.
    #[must_use]
    pub const fn viewer_fills_pane(self) -> bool {
        matches!(self, Self::ViewerOnly | Self::FullScreen)
    }
}
