use crate::domain::toast::ToastKind;

/// Renders transient notifications ("toasts").
///
/// `show` must return immediately; dismissal after `duration_ms` is the
/// renderer's business.
pub trait NotifierPort: Send + Sync {
    fn show(&self, kind: ToastKind, message: &str, duration_ms: u32);
}
