use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Info,
    Debug,
}

pub struct Logger {
    prefix: Option<String>,
    verbosity: Verbosity,
}

impl Logger {
    fn new(prefix: Option<String>, verbosity: Verbosity) -> Self {
        Self { prefix, verbosity }
    }

    pub fn enabled(&self, level: Verbosity) -> bool {
        level <= self.verbosity
    }

    pub fn log(&self, level: Verbosity, file: &str, line: u32, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        let tag = match level {
            Verbosity::Info => "",
            Verbosity::Debug => "[debug]",
        };
        if let Some(ref prefix) = self.prefix {
            println!("[{}][{}][{}:{}]{} {}", timestamp, prefix, file_name, line, tag, message);
        } else {
            println!("[{}][{}:{}]{} {}", timestamp, file_name, line, tag, message);
        }
    }
}

/// Installs the process-wide logger. Later calls keep the first logger.
pub fn init_logger(prefix: Option<String>, verbosity: Verbosity) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbosity));
}

// Library code logs unconditionally; without an installed logger messages are dropped.
pub fn log(level: Verbosity, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    }
}

pub fn is_enabled(level: Verbosity) -> bool {
    LOGGER.get().is_some_and(|logger| logger.enabled(level))
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Verbosity::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::is_enabled($crate::logger::Verbosity::Debug) {
            $crate::logger::log($crate::logger::Verbosity::Debug, file!(), line!(), &format!($($arg)*))
        }
    };
}
