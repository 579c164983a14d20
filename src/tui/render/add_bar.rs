use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::input_spans;

/// Render the add-task row: title draft plus the priority selector.
pub fn render_add_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Add;

    let prefix_style = if focused {
        Style::default().fg(app.theme.accent).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let mut spans = vec![Span::styled(" + ", prefix_style)];

    if app.draft_title.is_empty() && !focused {
        spans.push(Span::styled(
            "add a task",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.extend(input_spans(
            &app.draft_title,
            focused,
            Style::default().fg(app.theme.text_bright).bg(bg),
            Style::default().fg(app.theme.accent).bg(bg),
        ));
    }

    spans.push(Span::styled(
        format!("  \u{2039}{}\u{203A}", app.draft_priority.label()),
        Style::default()
            .fg(app.theme.priority_color(app.draft_priority))
            .bg(bg),
    ));
    if focused {
        spans.push(Span::styled(
            "  Tab priority",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Render the validation error line under the add row (blank when clear).
pub fn render_error_line(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = match &app.error {
        Some(message) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(app.theme.error).bg(bg),
        )),
        None => Line::from(""),
    };
    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
