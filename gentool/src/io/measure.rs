//! Timed measurement scope around a tool run.
//!
//! A [`MeasureScope`] logs `start` when opened and `end` (with elapsed time)
//! when closed. Closing happens on drop, so every exit path of a run closes
//! the scope. Outcome lines in between go through the same [`MeasureLog`]
//! sink, which lets tests record them instead of emitting `tracing` events.

use std::time::{Duration, Instant};

use tracing::{error, info, warn};

/// Severity of a measurement log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Sink for measurement log lines.
pub trait MeasureLog {
    fn record(&self, tool: &str, level: Level, message: &str);
}

/// Production sink: forwards every line to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl MeasureLog for TracingLog {
    fn record(&self, tool: &str, level: Level, message: &str) {
        match level {
            Level::Info => info!(tool, "{message}"),
            Level::Warn => warn!(tool, "{message}"),
            Level::Error => error!(tool, "{message}"),
        }
    }
}

pub struct MeasureScope<'a> {
    tool: &'a str,
    log: &'a dyn MeasureLog,
    started: Instant,
    closed: bool,
}

impl<'a> MeasureScope<'a> {
    /// Open a scope and log its start.
    pub fn start(tool: &'a str, log: &'a dyn MeasureLog) -> Self {
        log.record(tool, Level::Info, "start");
        Self {
            tool,
            log,
            started: Instant::now(),
            closed: false,
        }
    }

    pub fn info(&self, message: &str) {
        self.log.record(self.tool, Level::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log.record(self.tool, Level::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log.record(self.tool, Level::Error, message);
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Close the scope explicitly; dropping does the same.
    pub fn end(mut self) {
        self.close();
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        let message = format!("end ({} ms)", self.started.elapsed().as_millis());
        self.log.record(self.tool, Level::Info, &message);
    }
}

impl Drop for MeasureScope<'_> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingLog;

    #[test]
    fn drop_closes_scope_once() {
        let log = RecordingLog::default();
        {
            let scope = MeasureScope::start("demo", &log);
            scope.warn("careful");
        }
        let lines = log.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].message, "start");
        assert_eq!(lines[1].level, Level::Warn);
        assert!(lines[2].message.starts_with("end ("));
    }

    #[test]
    fn explicit_end_does_not_log_twice() {
        let log = RecordingLog::default();
        let scope = MeasureScope::start("demo", &log);
        scope.end();
        assert_eq!(log.count(Level::Info), 2);
        assert!(log.lines().iter().all(|line| line.tool == "demo"));
    }
}
