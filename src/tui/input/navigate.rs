use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Filter;
use crate::tui::app::{App, Mode};

pub(super) fn handle(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        // Cursor movement
        (_, KeyCode::Char('j') | KeyCode::Down) => {
            let len = app.visible().len();
            if len > 0 && app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        (_, KeyCode::Char('k') | KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (_, KeyCode::Char('g') | KeyCode::Home) => {
            app.cursor = 0;
        }
        (_, KeyCode::Char('G') | KeyCode::End) => {
            app.cursor = app.visible().len().saturating_sub(1);
        }

        // Task actions on the cursor row
        (_, KeyCode::Char(' ') | KeyCode::Char('x')) => {
            if let Some(id) = app.cursor_task_id() {
                app.toggle_task(&id);
            }
        }
        (_, KeyCode::Char('d') | KeyCode::Delete) => {
            if let Some(id) = app.cursor_task_id() {
                app.delete_task(&id);
            }
        }
        (_, KeyCode::Char('e') | KeyCode::Enter) => {
            if let Some(id) = app.cursor_task_id() {
                app.start_edit(&id);
            }
        }

        // Mode switches
        (_, KeyCode::Char('a') | KeyCode::Char('i')) => {
            app.mode = Mode::Add;
        }
        (_, KeyCode::Char('/')) => {
            app.mode = Mode::Search;
        }

        // Status filter: cycle with f, or jump directly
        (_, KeyCode::Char('f')) => {
            app.set_filter(app.filter.cycle());
        }
        (_, KeyCode::Char('1')) => app.set_filter(Filter::All),
        (_, KeyCode::Char('2')) => app.set_filter(Filter::Active),
        (_, KeyCode::Char('3')) => app.set_filter(Filter::Completed),

        // Esc clears an active search
        (_, KeyCode::Esc) => {
            if !app.search.is_empty() {
                app.search.clear();
                app.clamp_cursor();
            }
        }

        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        _ => {}
    }
}
