//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the `tie_archive` library and the Zellij
//! plugin system: it maps Zellij events to library events, runs the actions
//! the library returns, and routes host command results back.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState`, request
//!    `RunCommands`, subscribe to `Key`, `RunCommandResult` and
//!    `PermissionRequestResult`
//! 2. **Render**: Report the pane width as `ViewportChanged` (which may
//!    auto-open the earliest document), then draw
//! 3. **Update**: Map keys and command results, delegate to `handle_event`
//!
//! Host commands wait in a [`CommandGate`] until the permission is answered.
//! A denial fails the pending load so the viewer leaves its loading state.
//!
//! # Keybindings
//!
//! - `j`/`Down`, `k`/`Up`: Move the cursor, or scroll when the viewer fills the pane
//! - `Ctrl+n`/`Ctrl+p`: Move the cursor
//! - `Ctrl+d`/`PageDown`, `Ctrl+u`/`PageUp`: Scroll the viewer a page
//! - `Enter`: Open the document under the cursor
//! - `f`: Toggle full-screen (wide panes)
//! - `Esc`: Back (narrow) or exit full-screen (wide)
//! - `Backspace`: Back (narrow)
//! - `o`: Open the document with the external opener
//! - `q`: Close plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use tie_archive::app::{CommandContext, CommandGate, Gated};
use tie_archive::infrastructure::host_path;
use tie_archive::{handle_event, Action, Config, Event};

/// Lines moved by one page scroll.
const PAGE_LINES: usize = 15;

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: tie_archive::AppState,

    /// Parsed plugin configuration (command templates).
    config: Config,

    /// `RunCommands` answer and the host commands waiting on it.
    gate: CommandGate,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: tie_archive::initialize(&config),
            config,
            gate: CommandGate::new(),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        tie_archive::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        for warning in &config.warnings {
            tracing::warn!(%warning, "ignored configuration value");
        }

        tracing::debug!(
            base_path = %config.base_path.display(),
            subdirectory = %config.subdirectory,
            wide_min_cols = config.wide_min_cols,
            viewer = config.viewer_command.program(),
            "parsed configuration"
        );
        self.app = tie_archive::initialize(&config);
        self.config = config;

        request_permission(&[PermissionType::RunCommands]);
        subscribe(&[
            EventType::Key,
            EventType::RunCommandResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::RunCommandResult(exit_code, stdout, stderr, context) => {
                match Self::map_command_result_event(exit_code, stdout, stderr, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                return self.handle_permission_result(permissions);
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.dispatch(&Event::ViewportChanged { cols });
        tie_archive::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs one event through the library and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled successfully");
                for action in actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current layout.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        let viewer_only = self.app.layout().viewer_fills_pane();
        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);

        if ctrl {
            return match key.bare_key {
                BareKey::Char('n') if !viewer_only => Some(Event::CursorDown),
                BareKey::Char('p') if !viewer_only => Some(Event::CursorUp),
                BareKey::Char('d') => Some(Event::ScrollDown(PAGE_LINES)),
                BareKey::Char('u') => Some(Event::ScrollUp(PAGE_LINES)),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') if viewer_only => Event::ScrollDown(1),
            BareKey::Up | BareKey::Char('k') if viewer_only => Event::ScrollUp(1),
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::PageDown => Event::ScrollDown(PAGE_LINES),
            BareKey::PageUp => Event::ScrollUp(PAGE_LINES),
            BareKey::Enter if !viewer_only => Event::Select,
            BareKey::Char('f') => Event::ToggleFullScreen,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace => Event::Back,
            BareKey::Char('o') => Event::OpenExternal,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn handle_permission_result(&mut self, permissions: PermissionStatus) -> bool {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!(pending = self.gate.pending(), "permissions granted");
                for action in self.gate.grant() {
                    self.execute_action(action);
                }
                false
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - documents cannot be loaded");
                let mut should_render = false;
                for event in self.gate.deny() {
                    should_render |= self.dispatch(&event);
                }
                should_render
            }
        }
    }

    /// Maps a host command result back to the load that started it.
    fn map_command_result_event(
        exit_code: Option<i32>,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        tracing::debug!(exit_code = ?exit_code, stdout_len = stdout.len(), "run command result event");

        match CommandContext::from_map(context) {
            Some(CommandContext::View { document, ticket }) => Some(if exit_code == Some(0) {
                Event::ContentReady {
                    document,
                    ticket,
                    text: String::from_utf8_lossy(&stdout).into_owned(),
                }
            } else {
                let stderr = String::from_utf8_lossy(&stderr);
                let error = if stderr.trim().is_empty() {
                    exit_code.map_or_else(
                        || "viewer command could not be started".to_string(),
                        |code| format!("viewer command exited with status {code}"),
                    )
                } else {
                    stderr.into_owned()
                };
                Event::ContentFailed { document, ticket, error }
            }),
            Some(CommandContext::Open) => {
                if exit_code != Some(0) {
                    tracing::warn!(
                        exit_code = ?exit_code,
                        stderr = %String::from_utf8_lossy(&stderr),
                        "external opener failed"
                    );
                }
                None
            }
            None => {
                tracing::debug!("ignoring result of a command this plugin did not start");
                None
            }
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: Action) {
        let action = match self.gate.submit(action) {
            Gated::Run(action) => action,
            Gated::Queued => {
                tracing::debug!("queueing action until permissions are answered");
                return;
            }
            Gated::Refused(event) => {
                tracing::debug!("permission denied, action dropped");
                if let Some(event) = event {
                    self.dispatch(&event);
                }
                return;
            }
        };

        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::LoadDocument { document, ticket, path } => {
                let args = self.config.viewer_command.render(&host_path(&path));
                tracing::debug!(document = %document, ticket = %ticket, ?args, "starting viewer command");
                Self::run(&args, CommandContext::View { document, ticket });
            }
            Action::OpenExternal { path } => {
                let args = self.config.open_command.render(&host_path(&path));
                tracing::debug!(?args, "starting external opener");
                Self::run(&args, CommandContext::Open);
            }
        }
    }

    fn run(args: &[String], context: CommandContext) {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_command(&args, context.to_map());
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("layout", &self.app.layout())
            .field("permission", &self.gate.permission())
            .field("pending", &self.gate.pending())
            .finish_non_exhaustive()
    }
}
