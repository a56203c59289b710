//! Progress notice capability.

/// Receives human-readable progress notices from the engine.
///
/// One method, no levels, no structured fields. Injected at engine
/// construction so tests can substitute a recording implementation; the
/// engine never reaches for a process-wide logger.
pub trait Logger {
    fn info(&self, message: &str);
}

/// Default logger that discards every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct NopLogger;

impl Logger for NopLogger {
    fn info(&self, _message: &str) {}
}
