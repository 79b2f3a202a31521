//! Holds host command actions until Zellij answers the permission request.
//!
//! Only the newest load and the newest external open are kept while the
//! answer is outstanding; an older selection is already stale by the time a
//! grant arrives. Once the permission is denied nothing is queued again, and
//! a refused load is turned into a `ContentFailed` event so the viewer stops
//! showing the loading state.

use super::actions::Action;
use super::handler::Event;

/// Viewer text shown when the host refused to run commands.
pub const PERMISSION_DENIED_MESSAGE: &str =
    "Permission to run commands was denied; documents cannot be loaded";

/// Answer to the `RunCommands` permission request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Permission {
    #[default]
    Pending,
    Granted,
    Denied,
}

/// What to do with an action submitted to the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gated {
    /// Execute now.
    Run(Action),
    /// Held until the permission is answered.
    Queued,
    /// Will never run; the event, if any, must be dispatched instead.
    Refused(Option<Event>),
}

/// Permission state plus the actions waiting on it.
#[derive(Debug, Clone, Default)]
pub struct CommandGate {
    permission: Permission,
    load: Option<Action>,
    open: Option<Action>,
}

impl CommandGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn permission(&self) -> Permission {
        self.permission
    }

    /// Number of actions waiting for the permission answer.
    #[must_use]
    pub fn pending(&self) -> usize {
        usize::from(self.load.is_some()) + usize::from(self.open.is_some())
    }

    /// Routes one action through the gate.
    pub fn submit(&mut self, action: Action) -> Gated {
        if matches!(action, Action::CloseFocus) {
            return Gated::Run(action);
        }

        match self.permission {
            Permission::Granted => Gated::Run(action),
            Permission::Denied => Gated::Refused(refusal(&action)),
            Permission::Pending => {
                let slot = match action {
                    Action::LoadDocument { .. } => &mut self.load,
                    _ => &mut self.open,
                };
                if slot.replace(action).is_some() {
                    tracing::debug!("replaced an older queued action");
                }
                Gated::Queued
            }
        }
    }

    /// Records a grant and returns the queued actions to execute.
    pub fn grant(&mut self) -> Vec<Action> {
        self.permission = Permission::Granted;
        self.load.take().into_iter().chain(self.open.take()).collect()
    }

    /// Records a denial and returns the events for the refused actions.
    pub fn deny(&mut self) -> Vec<Event> {
        self.permission = Permission::Denied;
        self.load
            .take()
            .into_iter()
            .chain(self.open.take())
            .filter_map(|action| refusal(&action))
            .collect()
    }
}

fn refusal(action: &Action) -> Option<Event> {
    match action {
        Action::LoadDocument { document, ticket, .. } => Some(Event::ContentFailed {
            document: document.clone(),
            ticket: *ticket,
            error: PERMISSION_DENIED_MESSAGE.to_string(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, AppState, LoadTicket};
    use crate::domain::{Catalog, Document};
    use crate::ui::Theme;
    use std::path::PathBuf;

    fn load(ticket: u64) -> Action {
        Action::LoadDocument {
            document: Document::new("a.pdf"),
            ticket: LoadTicket::new(ticket),
            path: PathBuf::from("articles/a.pdf"),
        }
    }

    #[test]
    fn only_newest_load_waits_for_grant() {
        let mut gate = CommandGate::new();
        for ticket in 1..=5 {
            assert_eq!(gate.submit(load(ticket)), Gated::Queued);
        }
        let open = Action::OpenExternal {
            path: PathBuf::from("articles/a.pdf"),
        };
        assert_eq!(gate.submit(open.clone()), Gated::Queued);
        assert_eq!(gate.pending(), 2);

        assert_eq!(gate.grant(), vec![load(5), open]);
        assert_eq!(gate.pending(), 0);
        assert_eq!(gate.submit(load(6)), Gated::Run(load(6)));
    }

    #[test]
    fn close_focus_is_never_held() {
        let mut gate = CommandGate::new();
        assert_eq!(gate.submit(Action::CloseFocus), Gated::Run(Action::CloseFocus));
        gate.deny();
        assert_eq!(gate.submit(Action::CloseFocus), Gated::Run(Action::CloseFocus));
    }

    #[test]
    fn denial_fails_pending_and_later_loads() {
        let mut gate = CommandGate::new();
        gate.submit(load(1));
        gate.submit(load(2));

        let events = gate.deny();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            Event::ContentFailed { ticket, error, .. }
                if *ticket == LoadTicket::new(2) && error == PERMISSION_DENIED_MESSAGE
        ));

        assert!(matches!(gate.submit(load(3)), Gated::Refused(Some(Event::ContentFailed { .. }))));
        let open = Action::OpenExternal {
            path: PathBuf::from("articles/a.pdf"),
        };
        assert_eq!(gate.submit(open), Gated::Refused(None));
        assert_eq!(gate.pending(), 0);
        assert_eq!(gate.permission(), Permission::Denied);
    }

    #[test]
    fn denial_clears_loading_of_open_document() {
        let mut state = AppState::new(Catalog::builtin().unwrap(), Theme::default());
        let mut gate = CommandGate::new();

        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();
        for action in actions {
            gate.submit(action);
        }
        assert!(state.view.is_loading());

        for event in gate.deny() {
            handle_event(&mut state, &event).unwrap();
        }
        assert!(!state.view.is_loading());
    }
}
