use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

/// Visual flavour of a toast. Unknown names parse to `Info`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    pub fn parse(name: &str) -> Self {
        match name {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            _ => ToastKind::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }

    /// Alert class applied to the toast element.
    pub fn style_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "alert-success",
            ToastKind::Error => "alert-error",
            ToastKind::Info => "alert-info",
        }
    }

    /// Remix icon class of the leading `<i>` element.
    pub fn icon_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "ri-check-line",
            ToastKind::Error => "ri-error-warning-line",
            ToastKind::Info => "ri-information-line",
        }
    }

    /// Full class list of a freshly shown toast element.
    pub fn element_class(&self) -> String {
        format!("alert {} shadow-lg toast-enter text-sm py-3", self.style_class())
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastPhase {
    Entering,
    Exiting,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub duration_ms: u32,
    pub shown_at: f64,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn expires_at(&self) -> f64 {
        self.shown_at + f64::from(self.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!(ToastKind::parse("success"), ToastKind::Success);
        assert_eq!(ToastKind::parse("error"), ToastKind::Error);
        assert_eq!(ToastKind::parse("info"), ToastKind::Info);
    }

    #[test]
    fn test_parse_unknown_falls_back_to_info() {
        assert_eq!(ToastKind::parse("bogus"), ToastKind::Info);
        assert_eq!(ToastKind::parse(""), ToastKind::Info);
        assert_eq!(ToastKind::parse("Error"), ToastKind::Info);
    }

    #[test]
    fn test_classes() {
        assert_eq!(ToastKind::Success.style_class(), "alert-success");
        assert_eq!(ToastKind::Success.icon_class(), "ri-check-line");
        assert_eq!(ToastKind::Error.style_class(), "alert-error");
        assert_eq!(ToastKind::Error.icon_class(), "ri-error-warning-line");
        assert_eq!(ToastKind::Info.style_class(), "alert-info");
        assert_eq!(ToastKind::Info.icon_class(), "ri-information-line");
    }

    #[test]
    fn test_element_class_starts_in_enter_state() {
        assert_eq!(
            ToastKind::Error.element_class(),
            "alert alert-error shadow-lg toast-enter text-sm py-3"
        );
    }

    #[test]
    fn test_expires_at() {
        let toast = Toast {
            id: ToastId(1),
            kind: ToastKind::Info,
            message: "hi".to_string(),
            duration_ms: 250,
            shown_at: 1000.0,
            phase: ToastPhase::Entering,
        };
        assert_eq!(toast.expires_at(), 1250.0);
    }
}
