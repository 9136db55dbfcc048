use crate::measure;
use wasm_bindgen::prelude::*;

/// Turns on call timing and debug logging in the browser console.
#[wasm_bindgen(js_name = setDebugMode)]
pub fn set_debug_mode(enabled: bool) {
    measure::set_debug_mode(enabled);
}
