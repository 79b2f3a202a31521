//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij. It returns a `Vec<Action>` that
//! the plugin shim executes in order: closing the pane, starting the viewer
//! command for a document, or handing a document to the external opener.
//!
//! # Example
//!
//! ```rust
//! use std::path::PathBuf;
//! use tie_archive::app::{Action, LoadTicket};
//! use tie_archive::domain::Document;
//!
//! let action = Action::LoadDocument {
//!     document: Document::new("Walter_Harvey_Titus_Interview_1975.pdf"),
//!     ticket: LoadTicket::new(1),
//!     path: PathBuf::from("articles/Walter_Harvey_Titus_Interview_1975.pdf"),
//! };
//! assert!(matches!(action, Action::LoadDocument { .. }));
//! ```

use super::view::LoadTicket;
use crate::domain::Document;
use std::collections::BTreeMap;
use std::path::PathBuf;

const PURPOSE_KEY: &str = "purpose";
const DOCUMENT_KEY: &str = "document";
const TICKET_KEY: &str = "ticket";

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Runs the viewer command for a document.
    ///
    /// The command result must be routed back as `ContentReady` or
    /// `ContentFailed` carrying the same document and ticket.
    LoadDocument {
        /// Document being opened.
        document: Document,
        /// Ticket of the selection that requested the load.
        ticket: LoadTicket,
        /// Location of the file, as given to the viewer command.
        path: PathBuf,
    },

    /// Hands a document to the configured external opener.
    OpenExternal {
        /// Location of the file.
        path: PathBuf,
    },
}

/// Why a host command was started, carried through its context map.
///
/// The host hands the map back untouched with the command result, which is
/// how a finished viewer command is matched to the selection that asked for
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandContext {
    /// Viewer command for a selection.
    View { document: Document, ticket: LoadTicket },
    /// External opener.
    Open,
}

impl CommandContext {
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        match self {
            Self::View { document, ticket } => {
                map.insert(PURPOSE_KEY.to_string(), "view".to_string());
                map.insert(DOCUMENT_KEY.to_string(), document.filename().to_string());
                map.insert(TICKET_KEY.to_string(), ticket.to_string());
            }
            Self::Open => {
                map.insert(PURPOSE_KEY.to_string(), "open".to_string());
            }
        }
        map
    }

    /// Reads a context map back; `None` for maps this plugin did not write.
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Option<Self> {
        match map.get(PURPOSE_KEY).map(String::as_str) {
            Some("view") => {
                let document = Document::new(map.get(DOCUMENT_KEY)?.as_str());
                let ticket = LoadTicket::new(map.get(TICKET_KEY)?.parse().ok()?);
                Some(Self::View { document, ticket })
            }
            Some("open") => Some(Self::Open),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_context_survives_the_host() {
        let context = CommandContext::View {
            document: Document::new("The_Tie_That_Binds_Vol_3_Issue_1_1989_March.pdf"),
            ticket: LoadTicket::new(7),
        };
        let map = context.to_map();
        assert_eq!(map.get("ticket").map(String::as_str), Some("7"));
        assert_eq!(CommandContext::from_map(&map), Some(context));
    }

    #[test]
    fn foreign_or_damaged_maps_are_rejected() {
        assert_eq!(CommandContext::from_map(&BTreeMap::new()), None);

        let mut map = CommandContext::View {
            document: Document::new("a.pdf"),
            ticket: LoadTicket::new(1),
        }
        .to_map();
        map.insert("ticket".to_string(), "one".to_string());
        assert_eq!(CommandContext::from_map(&map), None);

        assert_eq!(
            CommandContext::from_map(&CommandContext::Open.to_map()),
            Some(CommandContext::Open)
        );
    }
}
