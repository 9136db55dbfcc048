use crate::domain::gateway::GatewayError;
use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

/// Best-effort human text for a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{value:?}")
}

/// Serializes through JSON so maps become plain JS objects.
pub fn json_to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let text = serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize: {e}")))?;
    js_sys::JSON::parse(&text)
}

/// A rejected browser promise means no response was obtained.
impl From<JsValue> for GatewayError {
    fn from(err: JsValue) -> Self {
        GatewayError::transport(js_error_message(&err))
    }
}

/// Gateway errors cross into JavaScript as `Error` objects carrying
/// `notified` and, for rejected envelopes, `envelope`.
impl From<GatewayError> for JsValue {
    fn from(error: GatewayError) -> Self {
        let js_error = js_sys::Error::new(&error.message());

        let _ = Reflect::set(
            &js_error,
            &JsValue::from_str("notified"),
            &JsValue::from_bool(error.is_notified()),
        );
        if let Some(envelope) = error.envelope().and_then(|e| json_to_js(e).ok()) {
            let _ = Reflect::set(&js_error, &JsValue::from_str("envelope"), &envelope);
        }

        js_error.into()
    }
}
