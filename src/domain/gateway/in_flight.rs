use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts gateway calls currently in flight.
///
/// Every call holds an `InFlightGuard`; the count drops when the guard does,
/// so each call is released exactly once whichever way it ends.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    count: Arc<AtomicUsize>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&self) -> InFlightGuard {
        self.count.fetch_add(1, Ordering::SeqCst);
        InFlightGuard {
            count: Arc::clone(&self.count),
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn is_active(&self) -> bool {
        self.count() > 0
    }
}

#[must_use = "the call is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct InFlightGuard {
    count: Arc<AtomicUsize>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.count.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_by_default() {
        let in_flight = InFlight::new();
        assert_eq!(in_flight.count(), 0);
        assert!(!in_flight.is_active());
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let in_flight = InFlight::new();
        {
            let _guard = in_flight.enter();
            assert!(in_flight.is_active());
        }
        assert!(!in_flight.is_active());
    }

    #[test]
    fn test_overlapping_guards() {
        let in_flight = InFlight::new();
        let first = in_flight.enter();
        let second = in_flight.enter();
        assert_eq!(in_flight.count(), 2);

        drop(first);
        assert!(in_flight.is_active(), "second call is still running");

        drop(second);
        assert_eq!(in_flight.count(), 0);
    }

    #[test]
    fn test_clones_share_the_count() {
        let in_flight = InFlight::new();
        let observer = in_flight.clone();
        let _guard = in_flight.enter();
        assert_eq!(observer.count(), 1);
    }
}
