pub mod stack;
pub mod types;

pub use stack::ToastStack;
pub use types::{Toast, ToastId, ToastKind, ToastPhase, DEFAULT_TOAST_DURATION_MS};
