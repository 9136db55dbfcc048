use crate::adapters::wasm::error_conversions::json_to_js;
use crate::config::Config;
use crate::domain::gateway::{Envelope, GatewayError};
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;

/// Turns a JS payload into JSON the way `JSON.stringify` would.
/// `undefined` means "no payload" and becomes `{}`.
pub fn payload_from_js(value: JsValue) -> Result<Value, GatewayError> {
    if value.is_undefined() {
        return Ok(Value::Object(Map::new()));
    }

    let text = js_sys::JSON::stringify(&value)
        .map_err(|_| GatewayError::invalid_payload("payload cannot be serialized to JSON"))?
        .as_string()
        .ok_or_else(|| GatewayError::invalid_payload("payload cannot be serialized to JSON"))?;

    serde_json::from_str(&text).map_err(|e| GatewayError::invalid_payload(e.to_string()))
}

pub fn envelope_to_js(envelope: &Envelope) -> Result<JsValue, JsValue> {
    json_to_js(envelope)
}

/// Reads a partial config object; `undefined`/`null` yield the defaults.
pub fn config_from_js(value: JsValue) -> Result<Config, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(Config::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))
}
