//! Tracing-backed logger

use crate::domain::dispatch::logger::Logger;

/// [`Logger`] implementation that forwards to the `tracing` error level.
#[derive(Debug, Default, Clone)]
pub struct TracingLogger;

impl TracingLogger {
    /// Create a new tracing logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
