use chrono::Utc;
use std::{
    fmt,
    sync::{
        atomic::{AtomicU8, Ordering},
        OnceLock,
    },
};

use crate::config::Config;

static LOG_PATH: OnceLock<Option<String>> = OnceLock::new();
static MIN_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// Only the first call picks the output file; the level can be changed later.
pub fn init_logger(path: Option<String>, level: Level) {
    let _ = LOG_PATH.set(path);
    set_level(level);
}

/// Applies the logging fields of `cfg`.
pub fn init_from_config(cfg: &Config) {
    init_logger(cfg.log_file_path.clone(), cfg.log_level);
}

pub fn set_level(level: Level) {
    MIN_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn enabled(level: Level) -> bool {
    level as u8 >= MIN_LEVEL.load(Ordering::Relaxed)
}

pub fn log_path() -> Option<&'static str> {
    LOG_PATH.get().and_then(|path| path.as_deref())
}

pub fn get_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)*) => {
        {
            use std::fs::OpenOptions;
            use std::io::Write;

            let level: $crate::logger::Level = $level;
            if $crate::logger::enabled(level) {
                let timestamp = $crate::logger::get_timestamp();
                let log_line = format!("[{}] [{}:{}] [{}] {}\n", timestamp, file!(), line!(), level, &format!($($arg)*));

                match $crate::logger::log_path() {
                    Some(file_path) => {
                        // write failures are dropped
                        if let Ok(mut file) = OpenOptions::new().append(true).create(true).open(file_path) {
                            let _ = file.write_all(log_line.as_bytes());
                        }
                    }
                    None => print!("{}", log_line),
                }
            }
        }
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log!($crate::logger::Level::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log!($crate::logger::Level::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log!($crate::logger::Level::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log!($crate::logger::Level::Error, $($arg)*)
    };
}
