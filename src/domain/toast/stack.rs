use super::types::{Toast, ToastId, ToastKind, ToastPhase};

/// Ordered set of live toasts, oldest first.
///
/// Mirrors what the DOM renderer does with elements: a toast enters when
/// pushed, switches to `Exiting` once its duration has elapsed, and is
/// dropped when its exit animation reports completion. There is no cap.
#[derive(Debug, Default)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, message: &str, duration_ms: u32, now: f64) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.toasts.push(Toast {
            id,
            kind,
            message: message.to_string(),
            duration_ms,
            shown_at: now,
            phase: ToastPhase::Entering,
        });
        id
    }

    /// Moves every entering toast whose duration has elapsed to `Exiting`
    /// and returns their ids.
    pub fn tick(&mut self, now: f64) -> Vec<ToastId> {
        self.toasts
            .iter_mut()
            .filter(|t| t.phase == ToastPhase::Entering && now >= t.expires_at())
            .map(|t| {
                t.phase = ToastPhase::Exiting;
                t.id
            })
            .collect()
    }

    /// Removes a toast whose exit has finished. Entering toasts are kept.
    pub fn finish_exit(&mut self, id: ToastId) -> bool {
        match self.toasts.iter().position(|t| t.id == id) {
            Some(index) if self.toasts[index].phase == ToastPhase::Exiting => {
                self.toasts.remove(index);
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
