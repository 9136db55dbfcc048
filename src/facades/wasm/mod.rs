pub mod api_store;
pub mod converters;
pub mod debug;
pub mod toast;

pub use api_store::ApiStore;
