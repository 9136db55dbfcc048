/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// The gateway and the toast model only ever talk to these traits. Browser
/// and native adapters live in `crate::adapters`.

pub mod clock;
pub mod logger;
pub mod notifier;
pub mod transport;

pub use clock::ClockPort;
pub use logger::LoggerPort;
pub use notifier::NotifierPort;
pub use transport::{TransportPort, TransportResponse};
