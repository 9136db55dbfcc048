use crate::measure::is_debug_mode;
use crate::ports::LoggerPort;

/// Native logger writing tagged lines to stderr.
///
/// `debug` lines are only written while debug mode is on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }

    fn emit(&self, level: &str, message: &str) {
        eprintln!("[herald] [{level}] {message}");
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        self.emit("LOG", message);
    }

    fn debug(&self, message: &str) {
        if is_debug_mode() {
            self.emit("DEBUG", message);
        }
    }

    fn error(&self, message: &str) {
        self.emit("ERROR", message);
    }

    fn warn(&self, message: &str) {
        self.emit("WARN", message);
    }

    fn time(&self, label: &str) {
        self.emit("TIME:START", label);
    }

    fn time_end(&self, label: &str) {
        self.emit("TIME:END", label);
    }
}
