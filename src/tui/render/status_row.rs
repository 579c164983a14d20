use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): key hints for the current
/// mode on the left, task counts on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let hint = match app.mode {
        Mode::Navigate => "a add  e edit  space toggle  d delete  / search  f filter  ? help  q quit",
        Mode::Add => "Enter add  Tab priority  Esc back",
        Mode::Search => "Enter keep  Esc clear",
        Mode::Edit => "Enter save  Esc cancel  Tab priority",
    };
    let counts = format!("{} active \u{00B7} {} done", app.active_count(), app.completed_count());

    let mut spans = vec![Span::styled(
        format!(" {}", hint),
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    let used = hint.chars().count() + 1;
    let counts_width = counts.chars().count() + 1;
    if used + counts_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - counts_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            counts,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
