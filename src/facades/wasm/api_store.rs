use super::converters;
use crate::adapters::wasm::{DomNotifier, FetchTransport};
use crate::domain::gateway::Gateway;
use crate::platform::Platform;
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

/// JS entry point: `const api = new ApiStore(); await api.call("create_channel", {...})`.
#[wasm_bindgen]
pub struct ApiStore {
    gateway: Rc<Gateway>,
}

#[wasm_bindgen]
impl ApiStore {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ApiStore, JsValue> {
        let config = converters::config_from_js(config)?;
        let notifier = Arc::new(DomNotifier::new(config.container_id.clone()));
        let gateway = Gateway::new(
            Platform::new(),
            config,
            Arc::new(FetchTransport::new()),
            notifier,
        );

        Ok(Self {
            gateway: Rc::new(gateway),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn loading(&self) -> bool {
        self.gateway.is_loading()
    }

    #[wasm_bindgen(getter, js_name = inFlight)]
    pub fn in_flight(&self) -> u32 {
        self.gateway.in_flight() as u32
    }

    /// Resolves with the response envelope, rejects with an `Error` whose
    /// `notified` property is already `true`. `loading` is true as soon as
    /// this returns.
    pub fn call(&self, action: String, payload: JsValue) -> js_sys::Promise {
        let gateway = Rc::clone(&self.gateway);
        let guard = gateway.begin();

        future_to_promise(async move {
            let envelope = match converters::payload_from_js(payload) {
                Ok(payload) => gateway.call_with(guard, &action, &payload).await,
                Err(err) => {
                    drop(guard);
                    Err(gateway.report(err))
                }
            }?;
            converters::envelope_to_js(&envelope)
        })
    }
}
