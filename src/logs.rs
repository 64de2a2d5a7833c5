//! Leveled progress logging for the pipeline.
//!
//! Supplementary diagnostics (row counts, drop summaries) go through these
//! helpers with a level prefix. The spec-mandated progress lines and the
//! per-row match diagnostic are printed verbatim by their own modules and
//! do not pass through here.

/// Log level for display.
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠",
            LogLevel::Error => "   ✗",
        }
    }
}

/// Print a log line with its level prefix.
pub fn log(level: LogLevel, message: impl Into<String>) {
    eprintln!("{} {}", level.prefix(), message.into());
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    log(LogLevel::Info, msg);
}

pub fn log_success(msg: impl Into<String>) {
    log(LogLevel::Success, msg);
}

pub fn log_warning(msg: impl Into<String>) {
    log(LogLevel::Warning, msg);
}

pub fn log_error(msg: impl Into<String>) {
    log(LogLevel::Error, msg);
}
