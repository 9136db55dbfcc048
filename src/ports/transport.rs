use crate::domain::gateway::error::GatewayError;
use async_trait::async_trait;

/// Raw answer of the server to a JSON POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Port for issuing `POST` requests with a JSON body.
///
/// Implementations return `GatewayErrorKind::Transport` when no response
/// could be obtained at all. Non-2xx statuses are still a response.
#[async_trait(?Send)]
pub trait TransportPort: Send + Sync {
    async fn post_json(&self, path: &str, body: String) -> Result<TransportResponse, GatewayError>;
}
