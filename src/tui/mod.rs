pub mod app;
pub mod input;
pub mod render;
pub mod text_input;
pub mod theme;

use std::io;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::storage::{JsonStorage, TaskStorage};
use crate::store::TaskStore;

use app::App;

/// Run the TUI application against the given data directory.
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Load once at startup, before anything renders.
    let storage = Rc::new(JsonStorage::new(data_dir));
    let mut store = TaskStore::new(storage.load());

    // The persistence write is a snapshot listener on the store — the only
    // writer to the storage boundary. It fires after every successful
    // mutation and never reports failure upward.
    let writer = Rc::clone(&storage);
    store.subscribe(Box::new(move |tasks| writer.save(tasks)));

    let mut app = App::new(store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
