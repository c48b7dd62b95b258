//! Dialog lifecycle controller
//!
//! Owns mount/unmount sequencing against the two external surfaces. Mounting
//! appends a fresh node to the overlay surface and hides the main surface
//! from assistive technology; unmounting undoes both, on every termination
//! path. The mounted state is held as a [`MountGuard`] so that even an
//! unwinding caller callback cannot leave the accessibility flag stuck.

use crate::error::{DialogError, DialogResult};
use crate::focus::{Control, FocusRing};
use crate::session::DialogSession;
use crate::surface::{NodeId, Stage, SurfaceHandle, MAIN_SURFACE, OVERLAY_SURFACE};
use std::rc::Rc;
use tracing::{debug, warn};

/// Sequences mount and unmount against the main and overlay surfaces.
///
/// The controller is the single writer of surface state; nothing else in the
/// dialog system touches the surfaces.
pub struct LifecycleController {
    main: SurfaceHandle,
    overlay: SurfaceHandle,
}

impl LifecycleController {
    /// Resolve the two standard surfaces from the stage.
    ///
    /// Fails fast when either surface is missing; a partial mount is never
    /// attempted.
    pub fn from_stage(stage: &Stage) -> DialogResult<Self> {
        let main = stage
            .surface(MAIN_SURFACE)
            .ok_or(DialogError::SurfaceMissing(MAIN_SURFACE))?;
        let overlay = stage
            .surface(OVERLAY_SURFACE)
            .ok_or(DialogError::SurfaceMissing(OVERLAY_SURFACE))?;
        Ok(Self::new(main, overlay))
    }

    /// Build a controller from explicit surface handles.
    pub fn new(main: SurfaceHandle, overlay: SurfaceHandle) -> Self {
        Self { main, overlay }
    }

    /// Mount a session: hide the main surface, attach a fresh mount node to
    /// the overlay, and move focus to the submit control when the session
    /// asks for it and the control exists.
    ///
    /// All side effects complete before this returns; the caller must call
    /// this exactly once per session.
    pub fn mount(&self, session: &DialogSession, focus: &mut FocusRing) -> MountGuard {
        self.main.borrow_mut().set_aria_hidden(true);
        let node = self.overlay.borrow_mut().append_child();
        debug!(id = %session.id(), ?node, "dialog mounted");

        if session.config().auto_focus_submit {
            // Best effort: the submit control is absent in no-footer mode
            let _ = focus.focus(Control::SubmitButton);
        }

        MountGuard {
            main: Rc::clone(&self.main),
            overlay: Rc::clone(&self.overlay),
            node,
            armed: true,
        }
    }
}

/// Live proof that a session is mounted.
///
/// Dropping the guard restores both surfaces, so the accessibility flag and
/// the mount node are cleaned up on every exit path, including unwinding.
/// The normal path calls [`MountGuard::release`] explicitly.
#[derive(Debug)]
pub struct MountGuard {
    main: SurfaceHandle,
    overlay: SurfaceHandle,
    node: NodeId,
    armed: bool,
}

impl MountGuard {
    /// The overlay node this guard owns.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Unmount now: detach the mount node and restore the accessibility
    /// flag. Consumes the guard, so unmount cannot run twice.
    pub fn release(mut self) {
        self.restore();
    }

    fn restore(&mut self) {
        if !self.armed {
            return;
        }
        self.armed = false;

        if !self.overlay.borrow_mut().remove_child(self.node) {
            warn!(node = ?self.node, "mount node already detached from overlay");
        }
        self.main.borrow_mut().set_aria_hidden(false);
        debug!(node = ?self.node, "dialog unmounted");
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
