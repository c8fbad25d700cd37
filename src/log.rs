// src/log.rs
//
// `log` facade backend. Lines look like `[00:00:01.234][INFO] message`,
// elapsed since the logger was installed. The GUI appends to a file under
// `.store/`, the CLI writes to stderr.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: OnceLock<Logger> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Where log lines go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// `.store/debug.log`, relative to the working directory.
    pub fn default_file() -> Self {
        LogTarget::File(PathBuf::from(STORE_DIR).join(LOG_FILE))
    }
}

struct Logger {
    target: LogTarget,
    level: LevelFilter,
    lock: Mutex<()>,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.target().starts_with("smallcap_dir")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level().as_str(), &record.args().to_string());

        let Ok(_guard) = self.lock.lock() else { return };
        match &self.target {
            LogTarget::Stderr => {
                let _ = std::io::stderr().write_all(line.as_bytes());
            }
            LogTarget::File(path) => {
                if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                    let _ = file.write_all(line.as_bytes());
                }
            }
        }
    }

    fn flush(&self) {}
}

/// Format one log line (elapsed time, level, message, trailing newline).
pub fn format_line(level: &str, msg: &str) -> String {
    let elapsed = fmt_elapsed(start().elapsed().as_millis());
    format!("[{elapsed}][{level}] {msg}\n")
}

/// Install the process-wide logger. Later calls are ignored.
pub fn init(target: LogTarget, level: LevelFilter) {
    start();
    if let LogTarget::File(path) = &target {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = fs::create_dir_all(parent);
            }
        }
    }
    let logger = LOGGER.get_or_init(|| Logger { target, level, lock: Mutex::new(()) });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}

/// Map a `-v` count to a level filter.
pub fn level_from_verbosity(v: u8) -> LevelFilter {
    match v {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}
