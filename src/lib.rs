//! tie-archive: a Zellij plugin for reading a fixed newsletter archive.
//!
//! The plugin lists the archive's documents in chronological order, using
//! the date embedded in each filename, and shows the text of the selected
//! document next to the list:
//! - Wide panes split into a list and a viewer, with a full-screen toggle
//! - Narrow panes show either the list or the viewer, with a Back action
//! - Document text comes from a host command (`pdftotext` by default)
//! - Late results of abandoned loads are recognised by load tickets and dropped

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, view state, load tickets         │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                     ┌───────────────┐
//! │ UI Layer      │                     │ Infrastructure│
//! │ (ui/)         │                     │ - Host paths  │
//! │ - Rendering   │                     │ - Command     │
//! │ - Theming     │                     │   templates   │
//! └───────────────┘                     └───────────────┘
//!         │                                     │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Documents, date extraction, sorted catalog       │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, rotated OTLP JSON file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/tie-archive.wasm" {
//!         base_path "/host/archive"
//!         subdirectory "articles"
//!         wide_min_cols "100"
//!         viewer_command "pdftotext -layout {path} -"
//!         open_command "xdg-open {path}"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use tie_archive::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::ViewportChanged { cols: 140 })?;
//! let Action::LoadDocument { document, ticket, .. } = &actions[0] else {
//!     unreachable!();
//! };
//!
//! let ready = Event::ContentReady {
//!     document: document.clone(),
//!     ticket: *ticket,
//!     text: "Walter Harvey Titus remembers...".to_string(),
//! };
//! handle_event(&mut state, &ready)?;
//! assert!(!state.view.is_loading());
//! # Ok::<(), tie_archive::ArchiveError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Layout, LoadTicket, ViewState, Viewport};
pub use domain::{ArchiveError, Catalog, Document, Result};
pub use infrastructure::CommandTemplate;
pub use ui::Theme;

use domain::DocumentLocator;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Header title shown above the list.
pub const DEFAULT_TITLE: &str = "The Tie That Binds - Archive";

/// Narrowest pane, in columns, that gets the split layout.
pub const DEFAULT_WIDE_MIN_COLS: usize = 100;

/// Command producing the text shown in the viewer.
pub const DEFAULT_VIEWER_COMMAND: &str = "pdftotext -layout {path} -";

/// Command handing a document to the desktop viewer.
pub const DEFAULT_OPEN_COMMAND: &str = "xdg-open {path}";

/// Plugin configuration parsed from Zellij's configuration map.
///
/// Missing or invalid values fall back to their defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Header title.
    pub title: String,

    /// Folder holding the archive, relative to the folder Zellij started in
    /// unless absolute. Default: `"."`
    pub base_path: PathBuf,

    /// Folder under `base_path` holding the documents. Default: `"articles"`
    pub subdirectory: String,

    /// Column count from which the pane counts as wide. Default: `100`
    pub wide_min_cols: usize,

    /// Command producing viewer text on stdout.
    pub viewer_command: CommandTemplate,

    /// Command opening a document outside Zellij.
    pub open_command: CommandTemplate,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing filter, e.g. `debug` or `tie_archive=trace`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Values that were rejected while parsing. Parsing runs before tracing
    /// is installed, so the shim logs these once it is.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            base_path: PathBuf::from("."),
            subdirectory: "articles".to_string(),
            wide_min_cols: DEFAULT_WIDE_MIN_COLS,
            viewer_command: CommandTemplate::builtin(DEFAULT_VIEWER_COMMAND),
            open_command: CommandTemplate::builtin(DEFAULT_OPEN_COMMAND),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `title`, `base_path`, `subdirectory`: taken as-is when non-empty
    ///   (`subdirectory` may be empty to read documents from `base_path`)
    /// - `wide_min_cols`: positive integer, else `100`
    /// - `viewer_command`, `open_command`: non-blank command line, else default
    /// - `theme`, `theme_file`, `trace_level`: optional strings
    ///
    /// Rejected values are described in [`Config::warnings`].
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use tie_archive::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("wide_min_cols".to_string(), "120".to_string());
    /// map.insert("subdirectory".to_string(), "".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.wide_min_cols, 120);
    /// assert_eq!(config.subdirectory, "");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let mut warnings = Vec::new();
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let wide_min_cols = match config.get("wide_min_cols") {
            None => defaults.wide_min_cols,
            Some(raw) => raw.trim().parse::<usize>().ok().filter(|cols| *cols > 0).unwrap_or_else(|| {
                warnings.push(format!("wide_min_cols: `{raw}` is not a positive integer, using default"));
                defaults.wide_min_cols
            }),
        };

        let mut command = |key: &str, fallback: CommandTemplate| match config.get(key) {
            None => fallback,
            Some(template) => CommandTemplate::parse(template).unwrap_or_else(|e| {
                warnings.push(format!("{key}: {e}, using default"));
                fallback
            }),
        };
        let viewer_command = command("viewer_command", defaults.viewer_command);
        let open_command = command("open_command", defaults.open_command);

        Self {
            title: non_empty("title").unwrap_or(defaults.title),
            base_path: non_empty("base_path").map_or(defaults.base_path, PathBuf::from),
            subdirectory: config
                .get("subdirectory")
                .map_or(defaults.subdirectory, |s| s.trim().to_string()),
            wide_min_cols,
            viewer_command,
            open_command,
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
            warnings,
        }
    }

    /// Locator for the configured archive folder.
    #[must_use]
    pub fn locator(&self) -> DocumentLocator {
        DocumentLocator::new(self.base_path.clone(), self.subdirectory.clone())
    }
}

/// Builds the initial application state.
///
/// Loads the theme (file, then name, then default) and sorts the built-in
/// manifest. A manifest that fails date extraction is logged and kept as the
/// state's start-up error, which the UI renders instead of the list.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing tie-archive plugin");

    let theme = load_theme(config);

    let (catalog, startup_error) = match Catalog::builtin() {
        Ok(catalog) => (catalog, None),
        Err(e) => {
            tracing::error!(error = %e, "archive manifest rejected");
            (Catalog::default(), Some(e.to_string()))
        }
    };

    let mut state = AppState::new(catalog, theme);
    state.title.clone_from(&config.title);
    state.locator = config.locator();
    state.wide_min_cols = config.wide_min_cols;
    state.startup_error = startup_error;
    state
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        return Theme::from_file(theme_file).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}
