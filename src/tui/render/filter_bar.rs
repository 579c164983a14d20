use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::tui::app::App;

/// Render the status filter row (All / Active / Completed).
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];

    for (i, filter) in Filter::ALL.into_iter().enumerate() {
        let style = if filter == app.filter {
            Style::default()
                .fg(bg)
                .bg(app.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(
            format!(" {}:{} ", i + 1, filter.label()),
            style,
        ));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
