//! Outbound dialog events
//!
//! The dialog system reports its lifecycle through a single injected
//! unbounded channel. The close request carries no payload; it means "this
//! dialog instance should be considered dismissed" and the core does not
//! await a response.

use crate::dispatch::Outcome;
use crate::session::DialogId;
use tokio::sync::mpsc;

/// Events emitted by the dialog system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    /// A session was mounted.
    Opened(DialogId),
    /// Default dismissal signal for the mounted session.
    CloseRequested,
    /// A session reached a terminal state and was unmounted.
    Closed(DialogId, Outcome),
}

/// Sender half of the dialog event channel.
pub type EventSender = mpsc::UnboundedSender<DialogEvent>;

/// Receiver half of the dialog event channel.
pub type EventReceiver = mpsc::UnboundedReceiver<DialogEvent>;

/// Create the event channel a manager is constructed with.
pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
