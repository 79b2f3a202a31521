//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (main.rs) and the domain layer. Input and
//! host results arrive as [`Event`]s, [`handle_event`] mutates [`AppState`],
//! and the returned [`Action`]s are executed by the shim:
//!
//! ```text
//! Key / Resize → Events → Event Handler → State Mutations → Actions → run_command
//!                              ↑                                          ↓
//!                              └──────── ContentReady / ContentFailed ────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`gate`]: Holds host commands until the permission is answered
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Viewport classes and layouts
//! - [`view`]: Selection, loading and full-screen state with load tickets
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod gate;
pub mod handler;
pub mod modes;
pub mod state;
pub mod view;

pub use actions::{Action, CommandContext};
pub use gate::{CommandGate, Gated, Permission};
pub use handler::{handle_event, Event};
pub use modes::{Layout, Viewport};
pub use state::{AppState, ViewerContent};
pub use view::{LoadTicket, Selection, ViewState};
