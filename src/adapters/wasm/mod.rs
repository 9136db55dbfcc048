/// WASM adapters - implementations using browser APIs.

pub mod clock;
pub mod console_logger;
pub mod error_conversions;
pub mod fetch_transport;
pub mod notifier;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use fetch_transport::FetchTransport;
pub use notifier::DomNotifier;
