//! Modal dialog lifecycle management for ratatui applications
//!
//! `scrim` mounts one modal dialog at a time into an overlay surface, hides
//! the rest of the application from assistive technology for the mounted
//! duration, traps keyboard focus inside the dialog, and routes submit,
//! cancel, escape, and backdrop interactions into caller callbacks and a
//! global close-request signal.
//!
//! The core is split in two:
//! - [`lifecycle::LifecycleController`] owns mount/unmount sequencing
//!   against the external surfaces, with surface restoration guaranteed on
//!   every exit path through a drop guard.
//! - [`dispatch::InteractionDispatcher`] interprets user actions into the
//!   `Open -> {Confirmed, Cancelled, ClosedByOverride}` state machine.
//!
//! [`manager::DialogManager`] composes the two behind a single key/mouse/
//! render surface for host applications.
//!
//! ```no_run
//! use scrim::{events, DefaultStrings, DialogConfig, DialogManager, Handlers, Stage};
//!
//! let stage = Stage::with_app_surfaces();
//! let (tx, _rx) = events::channel();
//! let mut manager = DialogManager::new(&stage, tx)?;
//! manager.open(
//!     DialogConfig::new("remove", "Remove publication")
//!         .body("Really remove this publication?")
//!         .submit_label("Remove")
//!         .auto_focus_submit(true),
//!     Handlers::new().on_confirm(|| println!("removed")),
//!     &DefaultStrings,
//! )?;
//! # Ok::<(), scrim::DialogError>(())
//! ```

pub mod dispatch;
pub mod error;
pub mod events;
pub mod focus;
pub mod layer;
pub mod layout;
pub mod lifecycle;
pub mod manager;
pub mod session;
pub mod strings;
pub mod surface;
pub mod theme;

pub use dispatch::{InteractionDispatcher, Outcome, Trigger};
pub use error::{DialogError, DialogResult};
pub use events::{DialogEvent, EventReceiver, EventSender};
pub use focus::{Control, FocusRing};
pub use layout::{DialogLayout, HitTarget};
pub use lifecycle::{LifecycleController, MountGuard};
pub use manager::DialogManager;
pub use session::{DialogConfig, DialogId, DialogSession, Handlers, SessionState};
pub use strings::{DefaultStrings, Labels, Translator};
pub use surface::{Stage, SurfaceHandle, SurfaceNode, MAIN_SURFACE, OVERLAY_SURFACE};
pub use theme::Theme;
