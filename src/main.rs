use std::path::PathBuf;

use clap::Parser;
use taskpad::io::storage::default_data_dir;

/// A terminal task manager with priorities, filters, search, and inline editing.
#[derive(Parser)]
#[command(name = "taskpad", version, about)]
struct Cli {
    /// Directory for the task data file (defaults to the platform data dir)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);

    // Logging is best-effort: a read-only data dir should not keep the app
    // from starting.
    let _logger = taskpad::logging::init(&data_dir).ok();

    if let Err(e) = taskpad::tui::run(&data_dir) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
