/// Platform - Dependency injection container for the stateless ports.
///
/// Stateless ports are `&'static` references (zero-cost). Stateful ports
/// (transport, notifier) are handed to `Gateway` as `Arc<dyn Trait>`.

use crate::ports::{ClockPort, LoggerPort};

#[derive(Clone, Copy)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    clock: &'static dyn ClockPort,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
            clock: crate::adapters::clock(),
        }
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn clock(&self) -> &'static dyn ClockPort {
        self.clock
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
