use std::sync::atomic::{AtomicBool, Ordering};

pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::SeqCst);
}

pub fn is_debug_mode() -> bool {
    DEBUG_MODE.load(Ordering::SeqCst)
}

/// Evaluates `$block`, bracketing it with `time`/`time_end` on the platform
/// logger when debug mode is on. `$block` may contain `.await`.
#[macro_export]
macro_rules! time_it {
    ($label:expr, $block:expr) => {{
        let debug = $crate::measure::is_debug_mode();
        if debug {
            let platform = $crate::platform::Platform::new();
            if platform.clock().is_available() {
                platform.logger().time($label);
            }
        }
        let result = $block;
        if debug {
            let platform = $crate::platform::Platform::new();
            if platform.clock().is_available() {
                platform.logger().time_end($label);
            }
        }
        result
    }};
}

pub use crate::time_it;
