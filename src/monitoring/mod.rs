//! Frontend monitoring module for Dioxus
//!
//! Provides:
//! - Client-side event logging
//! - Browser console logging

pub mod logger;

pub use logger::Logger;

/// Initialize frontend monitoring. Call once at app startup in main.rs.
pub fn init() {
    Logger::init();
}

/// Log an event
#[macro_export]
macro_rules! log_event {
    ($event:expr) => {
        $crate::monitoring::logger::Logger::log($event)
    };
}

/// Log an error
#[macro_export]
macro_rules! log_error {
    ($msg:expr) => {
        $crate::monitoring::logger::Logger::error($msg)
    };
}
