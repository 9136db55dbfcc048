use crate::adapters::logger;
use crate::domain::toast::ToastKind;
use crate::global;
use crate::ports::NotifierPort;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Element};

const ENTER_CLASS: &str = "toast-enter";
const EXIT_CLASS: &str = "toast-exit";

/// Renders toasts as children of the element with id `container_id`.
///
/// Without that element (or without a document, e.g. in a worker) showing
/// a toast does nothing.
#[derive(Debug, Clone)]
pub struct DomNotifier {
    container_id: String,
}

impl DomNotifier {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    fn render(&self, kind: ToastKind, message: &str, duration_ms: u32) -> Result<(), JsValue> {
        let Some(document) = global::document() else {
            return Ok(());
        };
        let Some(container) = document.get_element_by_id(&self.container_id) else {
            return Ok(());
        };

        let toast = document.create_element("div")?;
        toast.set_class_name(&kind.element_class());

        let icon = document.create_element("i")?;
        icon.set_class_name(&format!("{} text-lg", kind.icon_class()));
        let text = document.create_element("span")?;
        text.set_text_content(Some(message));

        toast.append_child(&icon)?;
        toast.append_child(&text)?;
        container.append_child(&toast)?;

        schedule_exit(toast, duration_ms);
        Ok(())
    }
}

impl NotifierPort for DomNotifier {
    fn show(&self, kind: ToastKind, message: &str, duration_ms: u32) {
        if let Err(e) = self.render(kind, message, duration_ms) {
            logger().warn(&format!("Failed to render toast: {e:?}"));
        }
    }
}

fn schedule_exit(toast: Element, duration_ms: u32) {
    Timeout::new(duration_ms, move || {
        if let Err(e) = begin_exit(&toast) {
            logger().warn(&format!("Failed to dismiss toast: {e:?}"));
        }
    })
    .forget();
}

/// Swaps the enter class for the exit class and removes the element once
/// its exit animation ends.
fn begin_exit(toast: &Element) -> Result<(), JsValue> {
    let classes = toast.class_list();
    classes.remove_1(ENTER_CLASS)?;
    classes.add_1(EXIT_CLASS)?;

    let target = toast.clone();
    let on_end = Closure::once_into_js(move || target.remove());

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    toast.add_event_listener_with_callback_and_add_event_listener_options(
        "animationend",
        on_end.unchecked_ref(),
        &options,
    )
}
