use crate::domain::toast::{Toast, ToastId, ToastKind, ToastStack};
use crate::ports::{ClockPort, NotifierPort};
use parking_lot::Mutex;
use std::sync::Arc;

/// Notifier that keeps toasts in memory instead of the DOM.
///
/// Nothing happens on its own: `tick` plays the role of the dismissal
/// timers and `finish_exit` the role of `animationend`.
pub struct HeadlessNotifier {
    clock: Arc<dyn ClockPort>,
    stack: Mutex<ToastStack>,
    history: Mutex<Vec<Toast>>,
}

impl HeadlessNotifier {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            clock,
            stack: Mutex::new(ToastStack::new()),
            history: Mutex::new(Vec::new()),
        }
    }

    /// Starts the exit of every toast whose duration has elapsed.
    pub fn tick(&self) -> Vec<ToastId> {
        self.stack.lock().tick(self.clock.now())
    }

    pub fn finish_exit(&self, id: ToastId) -> bool {
        self.stack.lock().finish_exit(id)
    }

    /// Toasts currently on screen, oldest first.
    pub fn visible(&self) -> Vec<Toast> {
        self.stack.lock().visible().to_vec()
    }

    pub fn get(&self, id: ToastId) -> Option<Toast> {
        self.stack.lock().get(id).cloned()
    }

    /// Every toast ever shown, as it looked when it appeared.
    pub fn history(&self) -> Vec<Toast> {
        self.history.lock().clone()
    }

    pub fn count(&self, kind: ToastKind) -> usize {
        self.history.lock().iter().filter(|t| t.kind == kind).count()
    }

    pub fn last(&self) -> Option<Toast> {
        self.history.lock().last().cloned()
    }

    pub fn clear_history(&self) {
        self.history.lock().clear();
    }
}

impl NotifierPort for HeadlessNotifier {
    fn show(&self, kind: ToastKind, message: &str, duration_ms: u32) {
        let mut stack = self.stack.lock();
        let id = stack.push(kind, message, duration_ms, self.clock.now());
        if let Some(toast) = stack.get(id) {
            self.history.lock().push(toast.clone());
        }
    }
}
