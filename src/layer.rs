//! Dialog rendering
//!
//! Draws the backdrop dim, the dialog chrome (border, title, close control),
//! the body content, and the footer buttons. Rendering is a pure function of
//! the session, the focus ring, and the calculated layout; it never mutates
//! dialog state.

use crate::focus::{Control, FocusRing};
use crate::layout::DialogLayout;
use crate::session::DialogSession;
use crate::theme::Theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Render the mounted dialog into the frame.
pub fn render(
    frame: &mut Frame,
    layout: &DialogLayout,
    session: &DialogSession,
    focus: &FocusRing,
    theme: &Theme,
) {
    render_backdrop(frame, layout.available_area, theme);

    let title = Span::styled(
        session.config().title.clone(),
        Style::default().fg(theme.fg_base).add_modifier(Modifier::BOLD),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(focus.current() == Control::Body))
        .title(title);
    frame.render_widget(Clear, layout.dialog_area);
    frame.render_widget(block, layout.dialog_area);

    render_close_control(frame, layout.close_area, focus, theme);
    render_body(frame, layout.body_area, session, theme);

    if layout.footer_area.is_some() {
        render_footer(frame, layout, session, focus, theme);
    }
}

/// Dim everything behind the dialog.
fn render_backdrop(frame: &mut Frame, area: Rect, theme: &Theme) {
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(theme.backdrop_style()), area);
}

fn render_close_control(frame: &mut Frame, area: Rect, focus: &FocusRing, theme: &Theme) {
    let close = Paragraph::new("[x]")
        .style(theme.button_style(focus.current() == Control::CloseButton));
    frame.render_widget(close, area);
}

fn render_body(frame: &mut Frame, area: Rect, session: &DialogSession, theme: &Theme) {
    let body = Paragraph::new(session.config().body.clone())
        .style(Style::default().fg(theme.fg_base))
        .wrap(Wrap { trim: true });
    frame.render_widget(body, area);

    // Key hint in the last body row when there is room for it
    if area.height >= 3 {
        let hint_area = Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        };
        let hint = format!("Tab: focus · Enter: select · Esc: {}", session.labels().close);
        let hint = Paragraph::new(hint)
            .style(Style::default().fg(theme.fg_muted).add_modifier(Modifier::DIM))
            .alignment(Alignment::Center);
        frame.render_widget(hint, hint_area);
    }
}

fn render_footer(
    frame: &mut Frame,
    layout: &DialogLayout,
    session: &DialogSession,
    focus: &FocusRing,
    theme: &Theme,
) {
    let (Some(cancel_area), Some(submit_area)) = (layout.cancel_area, layout.submit_area) else {
        return;
    };

    let cancel = Paragraph::new(pad_label(&session.labels().cancel, cancel_area.width))
        .style(theme.button_style(focus.current() == Control::CancelButton))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(cancel, cancel_area);

    let submit_style = if session.config().submit_enabled {
        theme.button_style(focus.current() == Control::SubmitButton)
    } else {
        theme.button_disabled_style()
    };
    let submit = Paragraph::new(pad_label(session.submit_label(), submit_area.width))
        .style(submit_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(submit, submit_area);
}

/// Pad a button label with spaces so the highlighted area reads as a button
/// even for narrow labels. Width is measured in display columns.
fn pad_label(label: &str, max_width: u16) -> String {
    let width = label.width() as u16;
    if width + 2 <= max_width {
        format!(" {label} ")
    } else {
        label.to_string()
    }
}
