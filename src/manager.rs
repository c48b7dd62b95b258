//! Dialog manager
//!
//! Composes the lifecycle controller and the interaction dispatcher around a
//! single mounted session. The manager routes key and mouse events into
//! triggers, renders the mounted dialog, and guarantees that unmount runs
//! exactly once when the session reaches a terminal state. Exactly one
//! session may be mounted at a time; overlapping dialogs must be serialized
//! by the caller.

use crate::dispatch::{InteractionDispatcher, Trigger};
use crate::error::{DialogError, DialogResult};
use crate::events::{DialogEvent, EventSender};
use crate::focus::{Control, FocusRing};
use crate::layer;
use crate::layout::{DialogLayout, HitTarget};
use crate::lifecycle::{LifecycleController, MountGuard};
use crate::session::{DialogConfig, DialogSession, Handlers};
use crate::strings::Translator;
use crate::surface::Stage;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;
use tracing::debug;

/// The one mounted session and everything scoped to it.
struct Mounted {
    session: DialogSession,
    focus: FocusRing,
    guard: MountGuard,
}

/// Manages one modal dialog session at a time.
pub struct DialogManager {
    lifecycle: LifecycleController,
    dispatcher: InteractionDispatcher,
    events: EventSender,
    theme: Theme,
    mounted: Option<Mounted>,
    /// Last known terminal area, kept for mouse hit-testing.
    area: Rect,
}

impl DialogManager {
    /// Create a manager bound to the stage's surfaces and an event channel.
    ///
    /// Fails when either required surface is missing from the stage.
    pub fn new(stage: &Stage, events: EventSender) -> DialogResult<Self> {
        Ok(Self {
            lifecycle: LifecycleController::from_stage(stage)?,
            dispatcher: InteractionDispatcher::new(events.clone()),
            events,
            theme: Theme::default(),
            mounted: None,
            area: Rect::default(),
        })
    }

    /// Replace the theme used for rendering.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Mount a new dialog session.
    ///
    /// Mount side effects (accessibility flag, overlay attach, focus move)
    /// complete before this returns. Errors if a session is already mounted.
    pub fn open(
        &mut self,
        config: DialogConfig,
        handlers: Handlers,
        translator: &dyn Translator,
    ) -> DialogResult<()> {
        if self.mounted.is_some() {
            return Err(DialogError::AlreadyMounted);
        }

        let session = DialogSession::new(config, handlers, translator);
        let mut focus = FocusRing::for_config(session.config());
        let guard = self.lifecycle.mount(&session, &mut focus);
        let id = session.id().clone();
        self.mounted = Some(Mounted {
            session,
            focus,
            guard,
        });
        self.send(DialogEvent::Opened(id));
        Ok(())
    }

    /// Whether a session is currently mounted.
    pub fn is_open(&self) -> bool {
        self.mounted.is_some()
    }

    /// The mounted session, if any.
    pub fn session(&self) -> Option<&DialogSession> {
        self.mounted.as_ref().map(|mounted| &mounted.session)
    }

    /// The control that currently holds focus, if a session is mounted.
    pub fn focused_control(&self) -> Option<Control> {
        self.mounted.as_ref().map(|mounted| mounted.focus.current())
    }

    /// Force teardown of the mounted session without any callback, as if the
    /// host were shutting down. Surfaces are restored; no close request is
    /// issued.
    pub fn force_close(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            let id = mounted.session.id().clone();
            mounted.guard.release();
            debug!(id = %id, "dialog force-closed");
        }
    }

    /// Update the area used for mouse hit-testing; `render` does this too.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Route a key event to the mounted dialog.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> DialogResult<()> {
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }
        let Some(focused) = self.focused_control() else {
            return Ok(());
        };

        match key.code {
            KeyCode::Esc => self.apply(Trigger::Escape),
            KeyCode::Tab => {
                if let Some(mounted) = self.mounted.as_mut() {
                    mounted.focus.focus_next();
                }
            }
            KeyCode::BackTab => {
                if let Some(mounted) = self.mounted.as_mut() {
                    mounted.focus.focus_prev();
                }
            }
            KeyCode::Enter => match focused {
                // Enter inside the body follows the form-submit path
                Control::Body | Control::SubmitButton => self.apply(Trigger::Submit),
                Control::CancelButton => self.apply(Trigger::CancelClick),
                Control::CloseButton => self.apply(Trigger::CloseClick),
            },
            KeyCode::Char(' ') => match focused {
                Control::SubmitButton => self.apply(Trigger::Submit),
                Control::CancelButton => self.apply(Trigger::CancelClick),
                Control::CloseButton => self.apply(Trigger::CloseClick),
                Control::Body => {}
            },
            _ => {}
        }
        Ok(())
    }

    /// Route a mouse event to the mounted dialog. Only left-button presses
    /// are interpreted.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> DialogResult<()> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }
        let Some(hit) = self.mounted.as_ref().map(|mounted| {
            DialogLayout::calculate(
                self.area,
                mounted.session.config().has_footer,
                body_height(&mounted.session),
            )
            .hit(mouse.column, mouse.row)
        }) else {
            return Ok(());
        };

        match hit {
            HitTarget::Backdrop => self.apply(Trigger::BackdropClick),
            HitTarget::CloseButton => self.apply(Trigger::CloseClick),
            HitTarget::CancelButton => self.apply(Trigger::CancelClick),
            HitTarget::SubmitButton => self.apply(Trigger::Submit),
            HitTarget::Dialog => {
                if let Some(mounted) = self.mounted.as_mut() {
                    let _ = mounted.focus.focus(Control::Body);
                }
            }
        }
        Ok(())
    }

    /// Render the mounted dialog, if any.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.area = area;
        if let Some(mounted) = &self.mounted {
            let layout = DialogLayout::calculate(
                area,
                mounted.session.config().has_footer,
                body_height(&mounted.session),
            );
            layer::render(frame, &layout, &mounted.session, &mounted.focus, &self.theme);
        }
    }

    /// Dispatch a trigger; on a terminal outcome, unmount exactly once and
    /// report the closure. All side effects complete before this returns.
    fn apply(&mut self, trigger: Trigger) {
        let Some(mut mounted) = self.mounted.take() else {
            return;
        };
        match self.dispatcher.dispatch(&mut mounted.session, trigger) {
            Some(outcome) => {
                let id = mounted.session.id().clone();
                mounted.guard.release();
                self.send(DialogEvent::Closed(id, outcome));
            }
            None => self.mounted = Some(mounted),
        }
    }

    fn send(&self, event: DialogEvent) {
        let _ = self.events.send(event);
    }
}

/// Preferred body height in rows for layout purposes.
fn body_height(session: &DialogSession) -> u16 {
    (session.config().body.height() as u16).saturating_add(2).max(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Outcome;
    use crate::events;
    use crate::events::EventReceiver;
    use crate::session::DialogId;
    use crate::strings::DefaultStrings;
    use crate::surface::{MAIN_SURFACE, OVERLAY_SURFACE};
    use crossterm::event::KeyModifiers;

    fn setup() -> (Stage, DialogManager, EventReceiver) {
        let stage = Stage::with_app_surfaces();
        let (tx, rx) = events::channel();
        let manager = DialogManager::new(&stage, tx).unwrap();
        (stage, manager, rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_second_open_is_rejected() {
        let (_stage, mut manager, _rx) = setup();
        manager
            .open(DialogConfig::new("a", "A"), Handlers::new(), &DefaultStrings)
            .unwrap();
        let err = manager
            .open(DialogConfig::new("b", "B"), Handlers::new(), &DefaultStrings)
            .unwrap_err();
        assert!(matches!(err, DialogError::AlreadyMounted));
        assert!(manager.is_open());
    }

    #[test]
    fn test_missing_surface_fails_construction() {
        let mut stage = Stage::new();
        stage.register(MAIN_SURFACE);
        let (tx, _rx) = events::channel();
        assert!(matches!(
            DialogManager::new(&stage, tx),
            Err(DialogError::SurfaceMissing(OVERLAY_SURFACE))
        ));
    }

    #[test]
    fn test_escape_cancels_and_restores_surfaces() {
        let (stage, mut manager, mut rx) = setup();
        let main = stage.surface(MAIN_SURFACE).unwrap();
        let overlay = stage.surface(OVERLAY_SURFACE).unwrap();

        manager
            .open(DialogConfig::new("a", "A"), Handlers::new(), &DefaultStrings)
            .unwrap();
        assert!(main.borrow().aria_hidden());
        assert_eq!(overlay.borrow().child_count(), 1);
        assert_eq!(
            rx.try_recv().unwrap(),
            DialogEvent::Opened(DialogId::new("a"))
        );

        manager.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert!(!manager.is_open());
        assert!(!main.borrow().aria_hidden());
        assert_eq!(overlay.borrow().child_count(), 0);
        assert_eq!(rx.try_recv().unwrap(), DialogEvent::CloseRequested);
        assert_eq!(
            rx.try_recv().unwrap(),
            DialogEvent::Closed(DialogId::new("a"), Outcome::Cancelled)
        );
    }

    #[test]
    fn test_enter_in_body_submits() {
        let (_stage, mut manager, mut rx) = setup();
        manager
            .open(DialogConfig::new("a", "A"), Handlers::new(), &DefaultStrings)
            .unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            DialogEvent::Opened(DialogId::new("a"))
        );

        // Tab from the close control to the body, then Enter
        manager.handle_key_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(manager.focused_control(), Some(Control::Body));
        manager.handle_key_event(key(KeyCode::Enter)).unwrap();

        assert!(!manager.is_open());
        assert_eq!(rx.try_recv().unwrap(), DialogEvent::CloseRequested);
        assert_eq!(
            rx.try_recv().unwrap(),
            DialogEvent::Closed(DialogId::new("a"), Outcome::Confirmed)
        );
    }

    #[test]
    fn test_disabled_submit_leaves_session_open() {
        let (_stage, mut manager, _rx) = setup();
        manager
            .open(
                DialogConfig::new("a", "A")
                    .submit_enabled(false)
                    .auto_focus_submit(true),
                Handlers::new(),
                &DefaultStrings,
            )
            .unwrap();
        assert_eq!(manager.focused_control(), Some(Control::SubmitButton));

        manager.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert!(manager.is_open());
    }

    #[test]
    fn test_backdrop_click_cancels() {
        let (_stage, mut manager, mut rx) = setup();
        manager
            .open(DialogConfig::new("a", "A"), Handlers::new(), &DefaultStrings)
            .unwrap();
        manager.set_area(Rect::new(0, 0, 100, 30));
        let _ = rx.try_recv();

        manager.handle_mouse_event(click(0, 0)).unwrap();
        assert!(!manager.is_open());
        assert_eq!(rx.try_recv().unwrap(), DialogEvent::CloseRequested);
    }

    #[test]
    fn test_click_inside_dialog_only_moves_focus() {
        let (_stage, mut manager, mut rx) = setup();
        manager
            .open(DialogConfig::new("a", "A"), Handlers::new(), &DefaultStrings)
            .unwrap();
        let area = Rect::new(0, 0, 100, 30);
        manager.set_area(area);
        let _ = rx.try_recv();

        // Matches the manager's minimum body height for an empty body
        let layout = DialogLayout::calculate(area, true, 4);
        let body = layout.body_area;
        manager.handle_mouse_event(click(body.x, body.y)).unwrap();
        assert!(manager.is_open());
        assert_eq!(manager.focused_control(), Some(Control::Body));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_force_close_restores_without_close_request() {
        let (stage, mut manager, mut rx) = setup();
        let main = stage.surface(MAIN_SURFACE).unwrap();

        manager
            .open(DialogConfig::new("a", "A"), Handlers::new(), &DefaultStrings)
            .unwrap();
        let _ = rx.try_recv();

        manager.force_close();
        assert!(!manager.is_open());
        assert!(!main.borrow().aria_hidden());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_events_after_close_are_ignored() {
        let (_stage, mut manager, _rx) = setup();
        manager
            .open(DialogConfig::new("a", "A"), Handlers::new(), &DefaultStrings)
            .unwrap();
        manager.handle_key_event(key(KeyCode::Esc)).unwrap();

        // Nothing mounted anymore; events are no-ops
        manager.handle_key_event(key(KeyCode::Esc)).unwrap();
        manager.handle_mouse_event(click(0, 0)).unwrap();
        assert!(!manager.is_open());
    }
}
