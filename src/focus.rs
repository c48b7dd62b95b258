//! In-dialog focus trap
//!
//! While a dialog is mounted, keyboard focus cycles across the dialog's own
//! interactive controls and never escapes to the rest of the application.
//! The ring's control order is fixed at mount time from the session
//! configuration; Tab and Shift-Tab wrap at both ends.

use crate::session::DialogConfig;

/// Interactive controls a dialog can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// The titlebar close control.
    CloseButton,
    /// The body content region.
    Body,
    /// The footer cancel button.
    CancelButton,
    /// The footer submit button, the focus anchor for auto-focus.
    SubmitButton,
}

/// Cyclic focus order over a dialog's controls.
#[derive(Debug, Clone)]
pub struct FocusRing {
    order: Vec<Control>,
    current: usize,
}

impl FocusRing {
    /// Build the ring for a session. Footer controls are only present when
    /// the configuration asks for a footer.
    pub fn for_config(config: &DialogConfig) -> Self {
        let mut order = vec![Control::CloseButton, Control::Body];
        if config.has_footer {
            order.push(Control::CancelButton);
            order.push(Control::SubmitButton);
        }
        Self { order, current: 0 }
    }

    /// The control that currently holds focus.
    pub fn current(&self) -> Control {
        self.order[self.current]
    }

    /// Whether the given control exists in this ring.
    pub fn contains(&self, control: Control) -> bool {
        self.order.contains(&control)
    }

    /// Move focus to the next control, wrapping at the end.
    pub fn focus_next(&mut self) {
        self.current = (self.current + 1) % self.order.len();
    }

    /// Move focus to the previous control, wrapping at the start.
    pub fn focus_prev(&mut self) {
        self.current = (self.current + self.order.len() - 1) % self.order.len();
    }

    /// Move focus directly to a control. Best effort: returns `false` and
    /// leaves focus untouched when the control does not exist.
    pub fn focus(&mut self, control: Control) -> bool {
        match self.order.iter().position(|c| *c == control) {
            Some(index) => {
                self.current = index;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footer_config() -> DialogConfig {
        DialogConfig::new("d", "T")
    }

    #[test]
    fn test_ring_order_with_footer() {
        let mut ring = FocusRing::for_config(&footer_config());
        assert_eq!(ring.current(), Control::CloseButton);
        ring.focus_next();
        assert_eq!(ring.current(), Control::Body);
        ring.focus_next();
        assert_eq!(ring.current(), Control::CancelButton);
        ring.focus_next();
        assert_eq!(ring.current(), Control::SubmitButton);
        ring.focus_next();
        // Wrapped, focus stays trapped inside the dialog
        assert_eq!(ring.current(), Control::CloseButton);
    }

    #[test]
    fn test_ring_wraps_backwards() {
        let mut ring = FocusRing::for_config(&footer_config());
        ring.focus_prev();
        assert_eq!(ring.current(), Control::SubmitButton);
    }

    #[test]
    fn test_no_footer_ring_has_no_buttons() {
        let config = footer_config().has_footer(false);
        let mut ring = FocusRing::for_config(&config);
        assert!(!ring.contains(Control::SubmitButton));
        assert!(!ring.contains(Control::CancelButton));
        ring.focus_next();
        assert_eq!(ring.current(), Control::Body);
        ring.focus_next();
        assert_eq!(ring.current(), Control::CloseButton);
    }

    #[test]
    fn test_focus_missing_control_is_noop() {
        let config = footer_config().has_footer(false);
        let mut ring = FocusRing::for_config(&config);
        assert!(!ring.focus(Control::SubmitButton));
        assert_eq!(ring.current(), Control::CloseButton);
    }

    #[test]
    fn test_direct_focus() {
        let mut ring = FocusRing::for_config(&footer_config());
        assert!(ring.focus(Control::SubmitButton));
        assert_eq!(ring.current(), Control::SubmitButton);
    }
}
