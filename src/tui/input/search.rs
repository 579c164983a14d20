use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Keys while the search input is focused. The search text feeds the view
/// pipeline live; there is nothing to "execute".
pub(super) fn handle(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Keep the search and go back to the list
        (_, KeyCode::Enter) => {
            app.mode = Mode::Navigate;
        }

        // Drop the search entirely
        (_, KeyCode::Esc) => {
            app.search.clear();
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }

        (_, KeyCode::Backspace) => {
            if app.search.backspace() {
                app.clamp_cursor();
            }
        }
        (_, KeyCode::Delete) => {
            if app.search.delete_forward() {
                app.clamp_cursor();
            }
        }
        (_, KeyCode::Left) => app.search.move_left(),
        (_, KeyCode::Right) => app.search.move_right(),
        (_, KeyCode::Home) => app.search.move_home(),
        (_, KeyCode::End) => app.search.move_end(),
        (mods, KeyCode::Char(c)) if !mods.contains(KeyModifiers::CONTROL) => {
            app.search.insert(c);
            app.clamp_cursor();
        }

        _ => {}
    }
}
