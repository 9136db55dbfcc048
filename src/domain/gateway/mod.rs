pub mod error;
pub mod in_flight;
pub mod operations;
pub mod types;
pub mod validation;

pub use error::{GatewayError, GatewayErrorKind};
pub use in_flight::{InFlight, InFlightGuard};
pub use operations::Gateway;
pub use types::Envelope;
pub use validation::validate_action;
