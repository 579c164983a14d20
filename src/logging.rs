use std::path::Path;

use flexi_logger::{Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming};

const LOG_BASENAME: &str = "taskpad";
const LOG_ROTATE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const LOG_ROTATE_KEEP_FILES: usize = 3;

/// Start the file logger in the data directory. The TUI owns the terminal,
/// so nothing is ever duplicated to stdout/stderr.
///
/// The returned handle must stay alive for the duration of the program.
/// Level spec defaults to `warn,taskpad=info`; `TASKPAD_LOG` or `RUST_LOG`
/// override it.
pub fn init(data_dir: &Path) -> Result<LoggerHandle, FlexiLoggerError> {
    std::fs::create_dir_all(data_dir)?;

    let spec = std::env::var("TASKPAD_LOG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| {
            std::env::var("RUST_LOG")
                .ok()
                .filter(|v| !v.trim().is_empty())
        })
        .unwrap_or_else(|| "warn,taskpad=info".to_string());

    let handle = Logger::try_with_str(spec)?
        .log_to_file(
            FileSpec::default()
                .directory(data_dir)
                .basename(LOG_BASENAME),
        )
        .rotate(
            Criterion::Size(LOG_ROTATE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(LOG_ROTATE_KEEP_FILES),
        )
        .start()?;

    log::info!("logger initialized dir={}", data_dir.display());
    Ok(handle)
}
