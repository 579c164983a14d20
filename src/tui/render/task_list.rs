use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::{App, Mode};
use crate::util::text::{display_width, truncate_to_width};
use crate::view;

use super::{highlighted_spans, input_spans};

/// Render the task list. Each row shows a checkbox, the title, and a
/// priority badge; the row being edited shows the edit draft instead.
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let tasks = app.visible();

    if tasks.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            " No tasks found.",
            Style::default().fg(app.theme.dim).bg(bg),
        )))
        .style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
        return;
    }

    // Keep the cursor row on screen
    let height = area.height as usize;
    if height == 0 {
        return;
    }
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }

    let search_re = view::search_regex(app.search.text());
    let width = area.width as usize;

    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in tasks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let selected = i == app.cursor && app.mode != Mode::Add && app.mode != Mode::Search;
        let row_bg = if selected { app.theme.selection_bg } else { bg };

        let editing_this = app.mode == Mode::Edit
            && app
                .editing
                .as_ref()
                .is_some_and(|e| e.task_id == task.id);

        let mut spans = if editing_this {
            edit_row_spans(app, row_bg)
        } else {
            task_row_spans(app, task, row_bg, search_re.as_ref(), width)
        };

        // Pad the row so the selection background spans the full width
        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        if used < width {
            spans.push(Span::styled(
                " ".repeat(width - used),
                Style::default().bg(row_bg),
            ));
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn task_row_spans(
    app: &App,
    task: &Task,
    row_bg: ratatui::style::Color,
    search_re: Option<&regex::Regex>,
    width: usize,
) -> Vec<Span<'static>> {
    let checkbox = if task.completed { " [x] " } else { " [ ] " };
    let checkbox_style = if task.completed {
        Style::default().fg(app.theme.accent).bg(row_bg)
    } else {
        Style::default().fg(app.theme.text).bg(row_bg)
    };

    let title_style = if task.completed {
        Style::default()
            .fg(app.theme.dim)
            .bg(row_bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(app.theme.text_bright).bg(row_bg)
    };
    let highlight_style = Style::default()
        .fg(app.theme.search_match_fg)
        .bg(app.theme.search_match_bg);

    let badge = format!("  \u{2039}{}\u{203A}", task.priority.label());
    let badge_style = Style::default()
        .fg(app.theme.priority_color(task.priority))
        .bg(row_bg);

    // Truncate the title so checkbox and badge always fit
    let reserved = display_width(checkbox) + display_width(&badge);
    let title = truncate_to_width(&task.title, width.saturating_sub(reserved));

    let mut spans = vec![Span::styled(checkbox.to_string(), checkbox_style)];
    spans.extend(highlighted_spans(
        &title,
        title_style,
        highlight_style,
        search_re,
    ));
    spans.push(Span::styled(badge, badge_style));
    spans
}

fn edit_row_spans(app: &App, row_bg: ratatui::style::Color) -> Vec<Span<'static>> {
    let edit = app
        .editing
        .as_ref()
        .expect("edit row rendered without edit state");

    let mut spans = vec![Span::styled(
        " \u{270E}  ".to_string(),
        Style::default().fg(app.theme.accent).bg(row_bg),
    )];
    spans.extend(input_spans(
        &edit.title,
        true,
        Style::default().fg(app.theme.text_bright).bg(row_bg),
        Style::default().fg(app.theme.accent).bg(row_bg),
    ));
    spans.push(Span::styled(
        format!("  \u{2039}{}\u{203A}", edit.priority.label()),
        Style::default()
            .fg(app.theme.priority_color(edit.priority))
            .bg(row_bg),
    ));
    spans
}
