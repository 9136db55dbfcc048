#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;

use gloo_timers::future::TimeoutFuture;
use herald::adapters::wasm::DomNotifier;
use herald::facades::wasm::toast::show_toast;
use herald::facades::wasm::ApiStore;
use herald::ports::NotifierPort;
use herald::ToastKind;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, Event};

wasm_bindgen_test_configure!(run_in_browser);

struct Container {
    element: Element,
}

impl Container {
    fn mount(id: &str) -> Self {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element("div").unwrap();
        element.set_id(id);
        document.body().unwrap().append_child(&element).unwrap();
        Self { element }
    }

    fn toasts(&self) -> u32 {
        self.element.child_element_count()
    }

    fn first(&self) -> Element {
        self.element.first_element_child().expect("no toast rendered")
    }
}

impl Drop for Container {
    fn drop(&mut self) {
        self.element.remove();
    }
}

/// Replaces `window.fetch` with one that answers `body` and records the
/// request on `globalThis.__heraldSent`. The real `fetch` comes back on drop.
struct FetchStub {
    original: JsValue,
}

impl FetchStub {
    fn install(body: &str) -> Self {
        let window = web_sys::window().unwrap();
        let original = Reflect::get(&window, &JsValue::from_str("fetch")).unwrap();

        let literal = serde_json::to_string(body).unwrap();
        let stub = js_sys::Function::new_with_args(
            "request",
            &format!(
                "return request.text().then(function (sent) {{
                    globalThis.__heraldSent = {{
                        url: request.url,
                        method: request.method,
                        contentType: request.headers.get('Content-Type'),
                        body: sent,
                    }};
                    return new Response({literal}, {{ status: 200 }});
                }});"
            ),
        );
        Reflect::set(&window, &JsValue::from_str("fetch"), &stub).unwrap();

        Self { original }
    }

    fn sent(&self, field: &str) -> Option<String> {
        let sent = Reflect::get(&js_sys::global(), &JsValue::from_str("__heraldSent")).ok()?;
        Reflect::get(&sent, &JsValue::from_str(field)).ok()?.as_string()
    }
}

impl Drop for FetchStub {
    fn drop(&mut self) {
        let window = web_sys::window().unwrap();
        let _ = Reflect::set(&window, &JsValue::from_str("fetch"), &self.original);
    }
}

fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

#[wasm_bindgen_test]
async fn error_toast_lifecycle() {
    let container = Container::mount("toast-container");

    show_toast("error", "X", Some(100));

    assert_eq!(container.toasts(), 1, "toast should appear synchronously");
    let toast = container.first();
    assert!(has_class(&toast, "alert"));
    assert!(has_class(&toast, "alert-error"));
    assert!(has_class(&toast, "toast-enter"));
    let icon = toast.first_element_child().unwrap();
    assert!(has_class(&icon, "ri-error-warning-line"));
    assert_eq!(toast.text_content().as_deref(), Some("X"));

    TimeoutFuture::new(150).await;
    assert!(has_class(&toast, "toast-exit"));
    assert!(!has_class(&toast, "toast-enter"));
    assert_eq!(container.toasts(), 1, "still visible until the animation ends");

    toast
        .dispatch_event(&Event::new("animationend").unwrap())
        .unwrap();
    assert_eq!(container.toasts(), 0);
}

#[wasm_bindgen_test]
fn unknown_type_renders_as_info() {
    let container = Container::mount("toast-container");

    show_toast("bogus", "Y", None);

    let toast = container.first();
    assert!(has_class(&toast, "alert-info"));
    let icon = toast.first_element_child().unwrap();
    assert!(has_class(&icon, "ri-information-line"));
}

#[wasm_bindgen_test]
fn missing_container_is_a_no_op() {
    let notifier = DomNotifier::new("no-such-container");
    notifier.show(ToastKind::Success, "nobody sees this", 10);

    let document = web_sys::window().unwrap().document().unwrap();
    assert!(document.get_element_by_id("no-such-container").is_none());
}

#[wasm_bindgen_test]
fn message_is_inserted_as_text() {
    let container = Container::mount("toast-text");
    let notifier = DomNotifier::new("toast-text");

    notifier.show(ToastKind::Info, "<b>bold</b>", 1000);

    let toast = container.first();
    let span = toast.last_element_child().unwrap();
    assert_eq!(span.text_content().as_deref(), Some("<b>bold</b>"));
    assert_eq!(span.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn toasts_stack_in_order() {
    let container = Container::mount("toast-stack");
    let notifier = DomNotifier::new("toast-stack");

    notifier.show(ToastKind::Success, "one", 1000);
    notifier.show(ToastKind::Error, "two", 1000);
    notifier.show(ToastKind::Info, "three", 1000);

    assert_eq!(container.toasts(), 3);
    assert_eq!(container.first().text_content().as_deref(), Some("one"));
}

#[wasm_bindgen_test]
async fn api_store_rejects_invalid_action_with_notified_error() {
    let container = Container::mount("toast-container");
    let store = ApiStore::new(JsValue::UNDEFINED).unwrap();
    assert!(!store.loading());

    let result = JsFuture::from(store.call("../admin".to_string(), JsValue::UNDEFINED)).await;

    let error = result.expect_err("invalid action must reject");
    let notified = Reflect::get(&error, &JsValue::from_str("notified")).unwrap();
    assert_eq!(notified.as_bool(), Some(true));
    assert!(!store.loading());
    assert_eq!(store.in_flight(), 0);

    assert_eq!(container.toasts(), 1);
    assert!(has_class(&container.first(), "alert-error"));
}

#[wasm_bindgen_test]
async fn api_store_resolves_flat_envelope_and_tracks_loading() {
    let container = Container::mount("toast-container");
    let fetch = FetchStub::install(r#"{"ok":true,"msg":"Created","data":{"id":7}}"#);
    let store = ApiStore::new(JsValue::UNDEFINED).unwrap();
    assert!(!store.loading());

    let promise = store.call("create_channel".to_string(), JsValue::UNDEFINED);
    assert!(store.loading(), "loading must be set before the call yields");
    assert_eq!(store.in_flight(), 1);

    let envelope = JsFuture::from(promise).await.expect("call should resolve");
    assert!(!store.loading());
    assert_eq!(store.in_flight(), 0);

    let ok = Reflect::get(&envelope, &JsValue::from_str("ok")).unwrap();
    assert_eq!(ok.as_bool(), Some(true));
    let msg = Reflect::get(&envelope, &JsValue::from_str("msg")).unwrap();
    assert_eq!(msg.as_string().as_deref(), Some("Created"));
    let data = Reflect::get(&envelope, &JsValue::from_str("data")).unwrap();
    let id = Reflect::get(&data, &JsValue::from_str("id")).unwrap();
    assert_eq!(id.as_f64(), Some(7.0));

    let url = fetch.sent("url").unwrap();
    assert!(url.ends_with("/api/create_channel"), "unexpected url {url}");
    assert_eq!(fetch.sent("method").as_deref(), Some("POST"));
    assert_eq!(fetch.sent("contentType").as_deref(), Some("application/json"));
    assert_eq!(fetch.sent("body").as_deref(), Some("{}"));

    assert_eq!(container.toasts(), 1);
    let toast = container.first();
    assert!(has_class(&toast, "alert-success"));
    assert_eq!(toast.text_content().as_deref(), Some("Created"));
}

#[wasm_bindgen_test]
async fn api_store_counts_calls_made_in_the_same_tick() {
    let _container = Container::mount("toast-container");
    let _fetch = FetchStub::install(r#"{"ok":true}"#);
    let store = ApiStore::new(JsValue::UNDEFINED).unwrap();

    let first = store.call("create_key".to_string(), JsValue::UNDEFINED);
    let second = store.call("delete_key".to_string(), JsValue::UNDEFINED);
    assert_eq!(store.in_flight(), 2);

    JsFuture::from(first).await.unwrap();
    JsFuture::from(second).await.unwrap();
    assert!(!store.loading());
}
