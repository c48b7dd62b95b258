//! Interaction dispatcher
//!
//! Interprets user actions against the mounted session and drives the
//! `Open -> {Confirmed, Cancelled, ClosedByOverride}` state machine. Submit
//! and cancel both issue the same default close request; only submit invokes
//! the confirm handler. The escape path substitutes the close override for
//! the default request when one is configured, never both.

use crate::events::{DialogEvent, EventSender};
use crate::session::{DialogSession, SessionState};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// A user action routed to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Submit action: the footer submit button, or Enter inside the body.
    Submit,
    /// Footer cancel button.
    CancelClick,
    /// Titlebar close control.
    CloseClick,
    /// Click on the backdrop outside the dialog.
    BackdropClick,
    /// Escape key while the dialog has focus.
    Escape,
}

/// Terminal result of a dispatched interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Confirm handler ran (if present) and the default close request fired.
    Confirmed,
    /// Default close request fired without invoking the confirm handler.
    Cancelled,
    /// The close override ran instead of the default close request.
    ClosedByOverride,
}

/// Routes triggers into session state transitions and outbound signals.
///
/// The dispatcher never touches the surfaces; surface restoration is the
/// lifecycle controller's job once a terminal outcome is reported.
pub struct InteractionDispatcher {
    close_request: EventSender,
}

impl InteractionDispatcher {
    /// Create a dispatcher that issues default close requests on the given
    /// channel.
    pub fn new(close_request: EventSender) -> Self {
        Self { close_request }
    }

    /// Apply one trigger to the session.
    ///
    /// Returns the terminal outcome when the session left `Open`, or `None`
    /// when the trigger had no effect (disabled submit, no-footer submit, or
    /// a trigger arriving after a terminal state).
    pub fn dispatch(&self, session: &mut DialogSession, trigger: Trigger) -> Option<Outcome> {
        if session.state().is_terminal() {
            trace!(?trigger, state = ?session.state(), "trigger after terminal state ignored");
            return None;
        }

        let outcome = match trigger {
            Trigger::Submit => {
                let config = session.config();
                if !config.has_footer || !config.submit_enabled {
                    trace!("submit ignored: no footer or submit disabled");
                    return None;
                }
                // Confirm handler runs before the close request fires
                session.fire_confirm();
                self.request_close();
                Outcome::Confirmed
            }
            Trigger::CancelClick | Trigger::CloseClick | Trigger::BackdropClick => {
                self.request_close();
                Outcome::Cancelled
            }
            Trigger::Escape => {
                if session.fire_close_override() {
                    Outcome::ClosedByOverride
                } else {
                    self.request_close();
                    Outcome::Cancelled
                }
            }
        };

        session.set_state(match outcome {
            Outcome::Confirmed => SessionState::Confirmed,
            Outcome::Cancelled => SessionState::Cancelled,
            Outcome::ClosedByOverride => SessionState::ClosedByOverride,
        });
        debug!(id = %session.id(), ?trigger, ?outcome, "dialog interaction dispatched");
        Some(outcome)
    }

    fn request_close(&self) {
        // Fire and forget; the core does not await a response
        if self.close_request.send(DialogEvent::CloseRequested).is_err() {
            warn!("close-request channel receiver dropped");
        }
    }
}
