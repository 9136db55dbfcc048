use crate::global::get_global_scope;
use crate::ports::ClockPort;
use wasm_bindgen::JsCast;
use web_sys::{Performance, WorkerGlobalScope};

/// `performance.now()` of the window or worker we run in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }

    fn performance(&self) -> Option<Performance> {
        let scope = get_global_scope().ok()?;
        if let Ok(worker) = scope.clone().dyn_into::<WorkerGlobalScope>() {
            worker.performance()
        } else if let Ok(window) = scope.dyn_into::<web_sys::Window>() {
            window.performance()
        } else {
            None
        }
    }
}

impl ClockPort for Clock {
    fn now(&self) -> f64 {
        self.performance().map(|perf| perf.now()).unwrap_or(0.0)
    }

    fn is_available(&self) -> bool {
        self.performance().is_some()
    }
}
