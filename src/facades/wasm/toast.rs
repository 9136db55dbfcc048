use crate::adapters::wasm::DomNotifier;
use crate::config::CONFIG;
use crate::domain::toast::ToastKind;
use crate::ports::NotifierPort;
use wasm_bindgen::prelude::*;

/// `showToast(type, message, duration = 3000)`. Unknown types render as info.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(kind: &str, message: &str, duration: Option<u32>) {
    DomNotifier::new(CONFIG.container_id.as_str()).show(
        ToastKind::parse(kind),
        message,
        duration.unwrap_or(CONFIG.toast_duration),
    );
}
