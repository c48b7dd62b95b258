//! Dialog session configuration and state
//!
//! A [`DialogSession`] is one live instance of a mounted modal dialog: its
//! immutable caller configuration, its optional handler slots, the labels
//! resolved from the translation service, and the interaction state machine's
//! current state. Sessions are created when a caller opens a dialog and
//! destroyed when the session reaches a terminal state.

use crate::strings::{Labels, Translator};
use ratatui::text::Text;
use serde::{Deserialize, Serialize};

/// Unique identifier for dialog instances
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DialogId(pub String);

impl DialogId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DialogId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for DialogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A caller-supplied handler slot.
pub type Handler = Box<dyn FnMut()>;

/// Explicit set of optional handler slots for a session.
///
/// `on_confirm` runs on the submit path, before the default close request.
/// `on_close_override` replaces the default close request on the escape
/// path; the two effects are strictly exclusive per transition.
#[derive(Default)]
pub struct Handlers {
    pub on_confirm: Option<Handler>,
    pub on_close_override: Option<Handler>,
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_confirm(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_confirm = Some(Box::new(handler));
        self
    }

    pub fn on_close_override(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_close_override = Some(Box::new(handler));
        self
    }
}

impl std::fmt::Debug for Handlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handlers")
            .field("on_confirm", &self.on_confirm.is_some())
            .field("on_close_override", &self.on_close_override.is_some())
            .finish()
    }
}

/// Immutable dialog configuration, fixed for the lifetime of a session.
#[derive(Debug, Clone)]
pub struct DialogConfig {
    /// Dialog identifier
    pub id: DialogId,
    /// Title shown in the dialog chrome
    pub title: String,
    /// Body content, treated as an opaque renderable
    pub body: Text<'static>,
    /// Whether the dialog renders a submit/cancel footer
    pub has_footer: bool,
    /// Label for the submit button; falls back to "OK" when unset
    pub submit_label: Option<String>,
    /// Whether the submit action is currently allowed
    pub submit_enabled: bool,
    /// Whether input focus moves to the submit control after mount
    pub auto_focus_submit: bool,
}

impl DialogConfig {
    pub fn new(id: impl Into<DialogId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: Text::default(),
            has_footer: true,
            submit_label: None,
            submit_enabled: true,
            auto_focus_submit: false,
        }
    }

    pub fn body(mut self, body: impl Into<Text<'static>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn has_footer(mut self, has_footer: bool) -> Self {
        self.has_footer = has_footer;
        self
    }

    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = Some(label.into());
        self
    }

    pub fn submit_enabled(mut self, enabled: bool) -> Self {
        self.submit_enabled = enabled;
        self
    }

    pub fn auto_focus_submit(mut self, auto_focus: bool) -> Self {
        self.auto_focus_submit = auto_focus;
        self
    }
}

/// Interaction state machine states.
///
/// `Open` is the only non-terminal state; entering any terminal state
/// triggers unmount exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Open,
    Confirmed,
    Cancelled,
    ClosedByOverride,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        self != Self::Open
    }
}

/// One live modal dialog instance.
pub struct DialogSession {
    config: DialogConfig,
    handlers: Handlers,
    labels: Labels,
    state: SessionState,
}

impl DialogSession {
    /// Create a session from caller configuration, resolving labels through
    /// the translation service up front.
    pub fn new(config: DialogConfig, handlers: Handlers, translator: &dyn Translator) -> Self {
        Self {
            config,
            handlers,
            labels: Labels::resolve(translator),
            state: SessionState::Open,
        }
    }

    pub fn id(&self) -> &DialogId {
        &self.config.id
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Submit button label with the built-in fallback applied.
    pub fn submit_label(&self) -> &str {
        self.config.submit_label.as_deref().unwrap_or("OK")
    }

    /// Whether a close override is configured for the escape path.
    pub fn has_close_override(&self) -> bool {
        self.handlers.on_close_override.is_some()
    }

    pub(crate) fn set_state(&mut self, state: SessionState) {
        self.state = state;
    }

    /// Invoke the confirm handler if present. Returns whether a handler ran.
    pub(crate) fn fire_confirm(&mut self) -> bool {
        match self.handlers.on_confirm.as_mut() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Invoke the close override if present. Returns whether a handler ran.
    pub(crate) fn fire_close_override(&mut self) -> bool {
        match self.handlers.on_close_override.as_mut() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for DialogSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogSession")
            .field("id", &self.config.id)
            .field("state", &self.state)
            .field("handlers", &self.handlers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::DefaultStrings;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_config_defaults() {
        let config = DialogConfig::new("confirm-delete", "Delete?");
        assert!(config.has_footer);
        assert!(config.submit_enabled);
        assert!(!config.auto_focus_submit);
        assert!(config.submit_label.is_none());
    }

    #[test]
    fn test_submit_label_fallback() {
        let session = DialogSession::new(
            DialogConfig::new("d", "T"),
            Handlers::new(),
            &DefaultStrings,
        );
        assert_eq!(session.submit_label(), "OK");

        let session = DialogSession::new(
            DialogConfig::new("d", "T").submit_label("Remove"),
            Handlers::new(),
            &DefaultStrings,
        );
        assert_eq!(session.submit_label(), "Remove");
    }

    #[test]
    fn test_states_are_terminal_except_open() {
        assert!(!SessionState::Open.is_terminal());
        assert!(SessionState::Confirmed.is_terminal());
        assert!(SessionState::Cancelled.is_terminal());
        assert!(SessionState::ClosedByOverride.is_terminal());
    }

    #[test]
    fn test_fire_confirm_runs_handler() {
        let count = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&count);
        let mut session = DialogSession::new(
            DialogConfig::new("d", "T"),
            Handlers::new().on_confirm(move || seen.set(seen.get() + 1)),
            &DefaultStrings,
        );

        assert!(session.fire_confirm());
        assert!(session.fire_confirm());
        assert_eq!(count.get(), 2);
        assert!(!session.fire_close_override());
    }
}
