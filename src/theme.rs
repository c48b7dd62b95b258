//! Visual styling for dialog chrome
//!
//! A compact semantic palette plus the handful of pre-built styles the
//! renderer needs. Hosts that want their own look construct a [`Theme`]
//! directly.

use ratatui::style::{Color, Modifier, Style};

/// Semantic colors for the dialog chrome.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub is_dark: bool,

    pub primary: Color,
    pub bg_overlay: Color,
    pub fg_base: Color,
    pub fg_muted: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl Theme {
    /// Default dark theme.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            is_dark: true,
            primary: Color::Rgb(137, 180, 250),
            bg_overlay: Color::Black,
            fg_base: Color::Rgb(205, 214, 244),
            fg_muted: Color::Rgb(127, 132, 156),
            border: Color::Rgb(88, 91, 112),
            border_focus: Color::Rgb(137, 180, 250),
        }
    }

    /// Style for the dimmed backdrop behind the dialog.
    pub fn backdrop_style(&self) -> Style {
        Style::default()
            .bg(self.bg_overlay)
            .fg(self.fg_muted)
            .add_modifier(Modifier::DIM)
    }

    /// Style for a footer button, varying with focus.
    pub fn button_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .bg(self.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.fg_base)
        }
    }

    /// Style for a disabled button, focus or not.
    pub fn button_disabled_style(&self) -> Style {
        Style::default()
            .fg(self.fg_muted)
            .add_modifier(Modifier::DIM)
    }

    /// Style for the dialog border, varying with body focus.
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.border_focus } else { self.border })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
