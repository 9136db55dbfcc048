use crate::measure::is_debug_mode;
use crate::ports::LoggerPort;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn debug(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn time(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = timeEnd)]
    fn time_end(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        log(&format!("[herald] {message}"));
    }

    fn debug(&self, message: &str) {
        if is_debug_mode() {
            debug(&format!("[herald] {message}"));
        }
    }

    fn error(&self, message: &str) {
        error(&format!("[herald] {message}"));
    }

    fn warn(&self, message: &str) {
        warn(&format!("[herald] {message}"));
    }

    fn time(&self, label: &str) {
        time(label);
    }

    fn time_end(&self, label: &str) {
        time_end(label);
    }
}
