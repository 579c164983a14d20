use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::input_spans;

/// Render the search input row (top of screen).
pub fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Search;

    let prefix_style = if focused {
        Style::default().fg(app.theme.accent).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let mut spans = vec![Span::styled(" / ", prefix_style)];

    if app.search.is_empty() && !focused {
        spans.push(Span::styled(
            "search tasks",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.extend(input_spans(
            &app.search,
            focused,
            Style::default().fg(app.theme.text_bright).bg(bg),
            Style::default().fg(app.theme.accent).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
