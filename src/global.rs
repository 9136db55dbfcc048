use wasm_bindgen::prelude::*;
use web_sys::{DedicatedWorkerGlobalScope, Document, WorkerGlobalScope};

pub fn get_global_scope() -> Result<JsValue, JsValue> {
    // Try worker scope first
    if let Ok(scope) = js_sys::global().dyn_into::<DedicatedWorkerGlobalScope>() {
        return Ok(JsValue::from(scope));
    }

    // Fallback to window
    let window = web_sys::window()
        .ok_or_else(|| JsValue::from_str("Neither DedicatedWorkerGlobalScope nor Window found"))?;
    Ok(JsValue::from(window))
}

/// The page document, absent inside workers.
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// `fetch` from whichever global scope we run in.
pub fn fetch(request: &web_sys::Request) -> Result<js_sys::Promise, JsValue> {
    let global = get_global_scope()?;

    if let Ok(worker) = global.clone().dyn_into::<WorkerGlobalScope>() {
        Ok(worker.fetch_with_request(request))
    } else if let Ok(window) = global.dyn_into::<web_sys::Window>() {
        Ok(window.fetch_with_request(request))
    } else {
        Err(JsValue::from_str("Could not access fetch"))
    }
}
