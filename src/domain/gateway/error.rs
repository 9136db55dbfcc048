use super::types::Envelope;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GatewayErrorKind {
    /// The server answered `ok: false`.
    Rejected { message: String, envelope: Envelope },
    /// No response could be obtained.
    Transport(String),
    /// A response arrived but its body is not an envelope.
    Decode(String),
    InvalidAction(String),
    InvalidPayload(String),
}

/// Failure of a gateway call.
///
/// `notified` records whether a toast has already been shown for this
/// error, so whoever handles it next knows not to show another one.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayError {
    kind: GatewayErrorKind,
    notified: bool,
}

impl GatewayError {
    pub fn new(kind: GatewayErrorKind) -> Self {
        Self {
            kind,
            notified: false,
        }
    }

    pub fn rejected(message: impl Into<String>, envelope: Envelope) -> Self {
        Self::new(GatewayErrorKind::Rejected {
            message: message.into(),
            envelope,
        })
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Transport(message.into()))
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Decode(message.into()))
    }

    pub fn invalid_action(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::InvalidAction(message.into()))
    }

    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::InvalidPayload(message.into()))
    }

    pub fn kind(&self) -> &GatewayErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> GatewayErrorKind {
        self.kind
    }

    /// Text shown to the user for this error.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn envelope(&self) -> Option<&Envelope> {
        match &self.kind {
            GatewayErrorKind::Rejected { envelope, .. } => Some(envelope),
            _ => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self.kind, GatewayErrorKind::Rejected { .. })
    }

    pub fn is_notified(&self) -> bool {
        self.notified
    }

    pub fn mark_notified(&mut self) {
        self.notified = true;
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            GatewayErrorKind::Rejected { message, .. } => f.write_str(message),
            GatewayErrorKind::Transport(msg) => write!(f, "Network error: {msg}"),
            GatewayErrorKind::Decode(msg) => write!(f, "Invalid response: {msg}"),
            GatewayErrorKind::InvalidAction(msg) => write!(f, "Invalid action: {msg}"),
            GatewayErrorKind::InvalidPayload(msg) => write!(f, "Invalid payload: {msg}"),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<GatewayErrorKind> for GatewayError {
    fn from(kind: GatewayErrorKind) -> Self {
        GatewayError::new(kind)
    }
}
