#![deny(missing_docs)]
//! Shared logging utilities for the summarizer workspace.
//!
//! Provides the `engine_*` logging macros used by the engine and the app,
//! a timer for long-running operations, and a test initializer for the
//! global logger.

use std::time::{Duration, Instant};

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Measures a named operation and logs its duration when finished.
///
/// Fetches, PDF loads and inference calls can each take seconds; the timer
/// gives the log a consistent `<label> took <ms> ms` line for all of them.
#[derive(Debug)]
pub struct OperationTimer {
    label: String,
    started: Instant,
}

impl OperationTimer {
    /// Starts timing `label`.
    pub fn start(label: impl Into<String>) -> Self {
        let label = label.into();
        log::debug!("{label} started");
        Self {
            label,
            started: Instant::now(),
        }
    }

    /// Time elapsed since the timer was started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Logs the elapsed time at info level and returns it.
    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        log::info!("{} took {} ms", self.label, elapsed.as_millis());
        elapsed
    }
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already own the global logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::OperationTimer;

    #[test]
    fn timer_reports_monotonic_elapsed() {
        super::initialize_for_tests();
        let timer = OperationTimer::start("unit");
        let first = timer.elapsed();
        let finished = timer.finish();
        assert!(finished >= first);
    }
}
