use super::Clock;
use crate::ports::ClockPort;
use once_cell::sync::Lazy;

static CLOCK: Lazy<Clock> = Lazy::new(Clock::new);

/// Returns a reference to the global clock instance
#[inline]
pub fn clock() -> &'static dyn ClockPort {
    &*CLOCK
}
