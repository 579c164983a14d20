pub mod add_bar;
pub mod filter_bar;
pub mod help_overlay;
pub mod search_bar;
pub mod status_row;
pub mod task_list;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use super::app::App;
use super::text_input::TextInput;

/// Main render function — dispatches to the per-region renderers.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: search | add | error | filters | task list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    search_bar::render_search_bar(frame, app, chunks[0]);
    add_bar::render_add_bar(frame, app, chunks[1]);
    add_bar::render_error_line(frame, app, chunks[2]);
    filter_bar::render_filter_bar(frame, app, chunks[3]);
    task_list::render_task_list(frame, app, chunks[4]);
    status_row::render_status_row(frame, app, chunks[5]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}

/// Spans for text with regex match highlighting. With no regex or no match,
/// a single span in `base_style`; otherwise the text split at match
/// boundaries with matches in `highlight_style`.
pub(super) fn highlighted_spans(
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) -> Vec<Span<'static>> {
    let Some(re) = search_re else {
        return vec![Span::styled(text.to_string(), base_style)];
    };

    let mut spans = Vec::new();
    let mut last_end = 0;
    for m in re.find_iter(text) {
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[m.start()..m.end()].to_string(),
            highlight_style,
        ));
        last_end = m.end();
    }
    if spans.is_empty() {
        return vec![Span::styled(text.to_string(), base_style)];
    }
    if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
    spans
}

/// Spans for a text input. A focused input shows a `▌` cursor block at the
/// edit position.
pub(super) fn input_spans(
    input: &TextInput,
    focused: bool,
    text_style: Style,
    cursor_style: Style,
) -> Vec<Span<'static>> {
    if !focused {
        return vec![Span::styled(input.text().to_string(), text_style)];
    }
    let (before, after) = input.split_at_cursor();
    let mut spans = vec![Span::styled(before.to_string(), text_style)];
    spans.push(Span::styled("\u{258C}", cursor_style));
    if !after.is_empty() {
        spans.push(Span::styled(after.to_string(), text_style));
    }
    spans
}
