use super::error_conversions::js_error_message;
use crate::domain::gateway::GatewayError;
use crate::global;
use crate::ports::{TransportPort, TransportResponse};
use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Transport over the browser `fetch` API.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl TransportPort for FetchTransport {
    async fn post_json(&self, path: &str, body: String) -> Result<TransportResponse, GatewayError> {
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(path, &init)?;
        request.headers().set("Content-Type", "application/json")?;

        let response: Response = JsFuture::from(global::fetch(&request)?).await?.dyn_into()?;
        let status = response.status();

        let text = JsFuture::from(response.text()?)
            .await
            .map_err(|e| GatewayError::decode(js_error_message(&e)))?;
        let body = text
            .as_string()
            .ok_or_else(|| GatewayError::decode("response body is not text"))?;

        Ok(TransportResponse::new(status, body))
    }
}
