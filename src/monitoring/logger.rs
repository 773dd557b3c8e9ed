//! Frontend logging for Dioxus
//!
//! Logs to the browser console. Each entry is a single JSON line with a
//! timestamp and level so console output stays greppable in devtools.

use serde::Serialize;
use std::sync::Once;

static INIT: Once = Once::new();

#[derive(Debug, Clone, Serialize)]
struct LogEntry {
    timestamp: String,
    level: &'static str,
    message: String,
}

pub struct Logger;

impl Logger {
    /// Initialize logging (call once at app startup)
    pub fn init() {
        INIT.call_once(|| {
            Self::log("Frontend logging initialized");
        });
    }

    /// Log an info message
    pub fn log(msg: &str) {
        Self::log_with_level("INFO", msg);
    }

    /// Log a warning message
    pub fn warn(msg: &str) {
        Self::log_with_level("WARN", msg);
    }

    /// Log an error message
    pub fn error(msg: &str) {
        Self::log_with_level("ERROR", msg);
    }

    /// Log a debug message
    pub fn debug(msg: &str) {
        Self::log_with_level("DEBUG", msg);
    }

    fn log_with_level(level: &'static str, msg: &str) {
        let entry = LogEntry {
            timestamp: Self::timestamp(),
            level,
            message: msg.to_string(),
        };

        let line = serde_json::to_string(&entry)
            .unwrap_or_else(|_| format!("[{}] {}", level, msg));

        match level {
            "ERROR" => web_sys::console::error_1(&line.into()),
            "WARN" => web_sys::console::warn_1(&line.into()),
            "DEBUG" => web_sys::console::debug_1(&line.into()),
            _ => web_sys::console::log_1(&line.into()),
        }
    }

    fn timestamp() -> String {
        chrono::Local::now().format("%H:%M:%S%.3f").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_serialize_with_level_and_message() {
        let entry = LogEntry {
            timestamp: Logger::timestamp(),
            level: "INFO",
            message: "hello".to_string(),
        };
        let json = serde_json::to_string(&entry).expect("log entry serializes");
        assert!(json.contains("\"level\":\"INFO\""));
        assert!(json.contains("\"message\":\"hello\""));
    }
}
