use colored::Colorize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

static LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
static VERBOSITY: Mutex<u8> = Mutex::new(0);
static NO_CONSOLE: Mutex<bool> = Mutex::new(false);

/// Get the current verbosity level
pub fn get_verbosity() -> u8 {
    VERBOSITY.lock().ok().map(|v| *v).unwrap_or(0)
}

/// Set the verbosity level without touching the log file or tracing setup
pub fn set_verbosity(verbosity: u8) {
    if let Ok(mut v) = VERBOSITY.lock() {
        *v = verbosity;
    }
}

/// Get whether console logging is disabled
pub fn get_no_console() -> bool {
    NO_CONSOLE.lock().ok().map(|v| *v).unwrap_or(false)
}

/// Set whether console logging is disabled (file logging is unaffected)
pub fn set_no_console(disabled: bool) {
    if let Ok(mut v) = NO_CONSOLE.lock() {
        *v = disabled;
    }
}

/// Convert verbosity level to a tracing filter directive
/// 0 = warn only, 1 = debug (-v), 2 = trace (-vv)
pub fn verbosity_to_filter() -> &'static str {
    filter_for(get_verbosity())
}

fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize the logger with a verbosity level and an optional log file.
///
/// The log file is truncated on each initialization. A `tracing` subscriber
/// writing to stderr is installed as well, unless the host already installed
/// one; `RUST_LOG` takes precedence over the verbosity level.
pub fn init_with_verbosity(
    verbosity: u8,
    log_file: Option<&Path>,
    no_console: bool,
) -> Result<(), String> {
    set_verbosity(verbosity);
    set_no_console(no_console);

    if let Some(path) = log_file {
        init_log_file(path)?;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity_to_filter()));
    // A host that already set a global subscriber keeps it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    tracing::debug!(verbosity, no_console, "logger initialized");
    Ok(())
}

fn init_log_file(path: &Path) -> Result<(), String> {
    prepare_log_file(path)?;

    let mut log_file_guard = LOG_FILE
        .lock()
        .map_err(|_| "Log file lock poisoned".to_string())?;
    *log_file_guard = Some(path.to_path_buf());

    Ok(())
}

/// Create the log directory and truncate a previous log
fn prepare_log_file(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create log directory: {}", e))?;
    }

    // Truncate log file on each build (overwrite instead of append)
    if path.exists() {
        fs::remove_file(path).map_err(|e| format!("Failed to truncate log file: {}", e))?;
    }

    Ok(())
}

/// Write to log file
fn write_to_log(message: &str) {
    if let Ok(log_file_guard) = LOG_FILE.lock() {
        if let Some(ref log_path) = *log_file_guard {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_path) {
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "[{}] [actions-kit] {}", timestamp, message);
            }
        }
    }
}

fn console(message: &str) {
    if !get_no_console() {
        eprintln!("{}", message);
    }
}

/// Log a debug message (to console if verbose >= 1, always to file)
pub fn debug(message: &str) {
    write_to_log(&format!("DEBUG {}", message));
    if get_verbosity() >= 1 {
        console(&format!("{} {}", "DEBUG:".blue().bold(), message));
    }
}

/// Log a warning message (to both file and console)
pub fn warn(message: &str) {
    write_to_log(&format!("WARN {}", message));
    console(&format!("{} {}", "warning:".yellow().bold(), message));
}

/// Log a success message (to console if verbose >= 1, always to file)
pub fn success(message: &str) {
    write_to_log(&format!("SUCCESS {}", message));
    if get_verbosity() >= 1 {
        let check = "\u{2714}".green().bold();
        console(&format!("{} {}", check, message));
    }
}

/// Log a build step (console only at trace verbosity)
pub fn step(message: &str) {
    if get_verbosity() >= 2 {
        console(&format!("TRACE: {}", message));
    }
    write_to_log(&format!("STEP: {}", message));
}

/// Get the log file path for display
pub fn get_log_path() -> Option<PathBuf> {
    LOG_FILE.lock().ok().and_then(|guard| guard.clone())
}
