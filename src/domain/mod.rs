pub mod gateway;
pub mod toast;
