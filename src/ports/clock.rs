/// Port for accessing time, used to schedule toast dismissal and time calls.
pub trait ClockPort: Send + Sync {
    /// Returns a monotonic timestamp in milliseconds.
    fn now(&self) -> f64;

    /// Checks if performance timing is available
    fn is_available(&self) -> bool;
}
