use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Keys while the add-task title input is focused.
pub(super) fn handle(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Back to the list; the draft survives for later.
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
        }

        // Submit. On success the input stays focused with an empty draft so
        // several tasks can be typed in a row.
        (_, KeyCode::Enter) => {
            app.submit_new_task();
        }

        // Priority control
        (_, KeyCode::Tab) | (_, KeyCode::Down) => {
            app.draft_priority = app.draft_priority.cycle();
        }
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => {
            app.draft_priority = app.draft_priority.cycle().cycle();
        }

        // Title editing; every change clears a pending validation error
        (_, KeyCode::Backspace) => {
            if app.draft_title.backspace() {
                app.draft_title_changed();
            }
        }
        (_, KeyCode::Delete) => {
            if app.draft_title.delete_forward() {
                app.draft_title_changed();
            }
        }
        (_, KeyCode::Left) => app.draft_title.move_left(),
        (_, KeyCode::Right) => app.draft_title.move_right(),
        (_, KeyCode::Home) => app.draft_title.move_home(),
        (_, KeyCode::End) => app.draft_title.move_end(),
        (mods, KeyCode::Char(c)) if !mods.contains(KeyModifiers::CONTROL) => {
            app.draft_title.insert(c);
            app.draft_title_changed();
        }

        _ => {}
    }
}
