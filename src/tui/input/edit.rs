use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

/// Keys while a task is being edited inline.
pub(super) fn handle(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Save commits via the store; an empty draft title is rejected
        // there and leaves the edit open.
        (_, KeyCode::Enter) => {
            app.save_edit();
        }
        (_, KeyCode::Esc) => {
            app.cancel_edit();
        }

        _ => {
            let Some(edit) = app.editing.as_mut() else {
                return;
            };
            match (key.modifiers, key.code) {
                (_, KeyCode::Tab) | (_, KeyCode::Down) => {
                    edit.priority = edit.priority.cycle();
                }
                (_, KeyCode::BackTab) | (_, KeyCode::Up) => {
                    edit.priority = edit.priority.cycle().cycle();
                }
                (_, KeyCode::Backspace) => {
                    edit.title.backspace();
                }
                (_, KeyCode::Delete) => {
                    edit.title.delete_forward();
                }
                (_, KeyCode::Left) => edit.title.move_left(),
                (_, KeyCode::Right) => edit.title.move_right(),
                (_, KeyCode::Home) => edit.title.move_home(),
                (_, KeyCode::End) => edit.title.move_end(),
                (mods, KeyCode::Char(c)) if !mods.contains(KeyModifiers::CONTROL) => {
                    edit.title.insert(c);
                }
                _ => {}
            }
        }
    }
}
