use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const BINDINGS: &[(&str, &str)] = &[
    ("j / k, ↓ / ↑", "move the cursor"),
    ("g / G", "jump to top / bottom"),
    ("space, x", "toggle complete"),
    ("e, Enter", "edit title and priority"),
    ("d, Del", "delete task"),
    ("a, i", "add a task"),
    ("/", "search titles"),
    ("f, 1 / 2 / 3", "filter All / Active / Completed"),
    ("Esc", "clear search"),
    ("q", "quit"),
];

/// Render the help overlay (toggled with ?). Any key closes it.
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(46, (BINDINGS.len() + 4) as u16, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.accent)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (key, desc) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", key), key_style),
            Span::styled((*desc).to_string(), desc_style),
        ]));
    }

    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .style(Style::default().fg(app.theme.text).bg(bg));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}

/// A centered rect of fixed width/height inside `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(vertical[1]);
    horizontal[1]
}
