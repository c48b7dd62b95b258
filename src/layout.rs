//! Dialog placement and hit-testing
//!
//! Computes the centered dialog rectangle and the rectangles of its
//! interactive controls for a given terminal area, and classifies pointer
//! positions against them. Everything outside the dialog area counts as
//! backdrop.

use ratatui::layout::Rect;

const MIN_WIDTH: u16 = 40;
const MAX_WIDTH: u16 = 70;
const FOOTER_HEIGHT: u16 = 3;

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Outside the dialog entirely.
    Backdrop,
    /// The titlebar close control.
    CloseButton,
    /// The footer cancel button.
    CancelButton,
    /// The footer submit button.
    SubmitButton,
    /// Inside the dialog but not on a control.
    Dialog,
}

/// Calculated rectangles for one rendered dialog.
#[derive(Debug, Clone)]
pub struct DialogLayout {
    /// Full available area (the backdrop extent).
    pub available_area: Rect,
    /// Dialog area including the border.
    pub dialog_area: Rect,
    /// Area inside the border.
    pub content_area: Rect,
    /// Body content area.
    pub body_area: Rect,
    /// Footer row, present only when the dialog has a footer.
    pub footer_area: Option<Rect>,
    /// Close control on the top border line.
    pub close_area: Rect,
    /// Cancel button area within the footer.
    pub cancel_area: Option<Rect>,
    /// Submit button area within the footer.
    pub submit_area: Option<Rect>,
}

impl DialogLayout {
    /// Calculate the layout for a dialog centered in `available`.
    ///
    /// `body_height` is the preferred body height in rows; the dialog is
    /// clamped so it never exceeds the available area.
    pub fn calculate(available: Rect, has_footer: bool, body_height: u16) -> Self {
        let width = (available.width * 2 / 3)
            .clamp(MIN_WIDTH, MAX_WIDTH)
            .min(available.width);
        let footer = if has_footer { FOOTER_HEIGHT } else { 0 };
        // 2 border rows around body + footer
        let height = (body_height.max(1) + footer + 2).min(available.height);

        let x = available.x + (available.width.saturating_sub(width)) / 2;
        let y = available.y + (available.height.saturating_sub(height)) / 2;
        let dialog_area = Rect { x, y, width, height };

        let content_area = Rect {
            x: dialog_area.x + 1,
            y: dialog_area.y + 1,
            width: dialog_area.width.saturating_sub(2),
            height: dialog_area.height.saturating_sub(2),
        };

        let (body_area, footer_area) = if has_footer && content_area.height > footer {
            let body = Rect {
                height: content_area.height - footer,
                ..content_area
            };
            let footer_rect = Rect {
                y: content_area.y + body.height,
                height: footer,
                ..content_area
            };
            (body, Some(footer_rect))
        } else {
            (content_area, None)
        };

        // Close control sits on the top border line, right-aligned
        let close_area = Rect {
            x: dialog_area.right().saturating_sub(4),
            y: dialog_area.y,
            width: 3,
            height: 1,
        };

        let (cancel_area, submit_area) = match footer_area {
            Some(footer_rect) => {
                let half = footer_rect.width / 2;
                let cancel = Rect {
                    width: half,
                    ..footer_rect
                };
                let submit = Rect {
                    x: footer_rect.x + half,
                    width: footer_rect.width - half,
                    ..footer_rect
                };
                (Some(cancel), Some(submit))
            }
            None => (None, None),
        };

        Self {
            available_area: available,
            dialog_area,
            content_area,
            body_area,
            footer_area,
            close_area,
            cancel_area,
            submit_area,
        }
    }

    /// Classify a pointer position.
    pub fn hit(&self, x: u16, y: u16) -> HitTarget {
        if contains(self.close_area, x, y) {
            return HitTarget::CloseButton;
        }
        if let Some(area) = self.cancel_area {
            if contains(area, x, y) {
                return HitTarget::CancelButton;
            }
        }
        if let Some(area) = self.submit_area {
            if contains(area, x, y) {
                return HitTarget::SubmitButton;
            }
        }
        if contains(self.dialog_area, x, y) {
            HitTarget::Dialog
        } else {
            HitTarget::Backdrop
        }
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal() -> Rect {
        Rect::new(0, 0, 100, 30)
    }

    #[test]
    fn test_dialog_is_centered() {
        let layout = DialogLayout::calculate(terminal(), true, 4);
        let area = layout.dialog_area;
        let left = area.x;
        let right = 100 - (area.x + area.width);
        assert!(left.abs_diff(right) <= 1);
        let top = area.y;
        let bottom = 30 - (area.y + area.height);
        assert!(top.abs_diff(bottom) <= 1);
    }

    #[test]
    fn test_footer_split() {
        let layout = DialogLayout::calculate(terminal(), true, 4);
        let footer = layout.footer_area.expect("footer present");
        assert_eq!(footer.height, FOOTER_HEIGHT);
        let cancel = layout.cancel_area.unwrap();
        let submit = layout.submit_area.unwrap();
        assert_eq!(cancel.x + cancel.width, submit.x);
        assert_eq!(cancel.width + submit.width, footer.width);
    }

    #[test]
    fn test_no_footer_layout() {
        let layout = DialogLayout::calculate(terminal(), false, 4);
        assert!(layout.footer_area.is_none());
        assert!(layout.cancel_area.is_none());
        assert!(layout.submit_area.is_none());
        assert_eq!(layout.body_area, layout.content_area);
    }

    #[test]
    fn test_hit_testing() {
        let layout = DialogLayout::calculate(terminal(), true, 4);

        assert_eq!(layout.hit(0, 0), HitTarget::Backdrop);
        assert_eq!(layout.hit(99, 29), HitTarget::Backdrop);

        let close = layout.close_area;
        assert_eq!(layout.hit(close.x, close.y), HitTarget::CloseButton);

        let cancel = layout.cancel_area.unwrap();
        assert_eq!(
            layout.hit(cancel.x + 1, cancel.y + 1),
            HitTarget::CancelButton
        );

        let submit = layout.submit_area.unwrap();
        assert_eq!(
            layout.hit(submit.x + 1, submit.y + 1),
            HitTarget::SubmitButton
        );

        let body = layout.body_area;
        assert_eq!(layout.hit(body.x, body.y), HitTarget::Dialog);
    }

    #[test]
    fn test_never_exceeds_available_area() {
        let tiny = Rect::new(0, 0, 20, 5);
        let layout = DialogLayout::calculate(tiny, true, 10);
        assert!(layout.dialog_area.width <= tiny.width);
        assert!(layout.dialog_area.height <= tiny.height);
    }
}
