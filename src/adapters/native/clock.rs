use crate::ports::ClockPort;
use once_cell::sync::Lazy;
use std::time::Instant;

static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);

/// Monotonic milliseconds since the clock was first read, like
/// `performance.now()` in a browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Lazy::force(&ORIGIN);
        Self
    }
}

impl ClockPort for Clock {
    fn now(&self) -> f64 {
        ORIGIN.elapsed().as_secs_f64() * 1000.0
    }

    fn is_available(&self) -> bool {
        true
    }
}
