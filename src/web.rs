// ./src/web.rs
//
// Browser entry point: mounts the handler on the page's DOM.

use crate::config::HandlerConfig;
use crate::display::DisplayTarget;
use crate::error::FetchError;
use crate::fetch::{Fetcher, RawResponse};
use crate::handler::ClickToFetchHandler;
use async_trait::async_trait;
use gloo_net::http::Request;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{console, Document, Event, HtmlElement};

// ════════════════════════════════════════════════════════════
// 1. DOM collaborators
// ════════════════════════════════════════════════════════════

/// The result region, toggled through its inline `display` style.
pub struct ElementTarget(HtmlElement);

impl ElementTarget {
    pub fn new(element: HtmlElement) -> Self {
        Self(element)
    }
}

impl DisplayTarget for ElementTarget {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn show(&self) {
        if let Err(err) = self.0.style().set_property("display", "block") {
            tracing::warn!(id = %self.0.id(), "result region could not be shown");
            console::error_1(&err);
        }
    }
}

/// `fetch` through gloo-net, relative to the page origin.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooFetcher;

#[async_trait(?Send)]
impl Fetcher for GlooFetcher {
    async fn get(&self, endpoint: &str) -> Result<RawResponse, FetchError> {
        let response = Request::get(endpoint).send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        Ok(RawResponse { status, body })
    }
}

// A rejected fetch surfaces as a JS `TypeError`; keep only its message
// ("Failed to fetch") so the page reads like a plain fetch failure.
fn transport_error(err: gloo_net::Error) -> FetchError {
    match err {
        gloo_net::Error::JsError(js) => FetchError::network(js.message),
        other => FetchError::network(other.to_string()),
    }
}

// ════════════════════════════════════════════════════════════
// 2. Mounting
// ════════════════════════════════════════════════════════════

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    boot(HandlerConfig::default())
}

/// Mounts as soon as the DOM is parsed.
pub fn boot(config: HandlerConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no window document"))?;

    if document.ready_state() != "loading" {
        return mount(&document, &config);
    }

    let ready_document = document.clone();
    let on_ready = Closure::<dyn FnMut()>::new(move || {
        if let Err(err) = mount(&ready_document, &config) {
            console::error_1(&err);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    // Lives for the page; there is no teardown.
    on_ready.forget();
    Ok(())
}

fn mount(document: &Document, config: &HandlerConfig) -> Result<(), JsValue> {
    mount_with(document, config, GlooFetcher)
}

/// Resolves both elements and subscribes a click handler fetching through
/// `fetcher`. Fails without subscribing anything if either id is missing.
pub fn mount_with<F>(document: &Document, config: &HandlerConfig, fetcher: F) -> Result<(), JsValue>
where
    F: Fetcher + 'static,
{
    let trigger = element_by_id(document, &config.trigger_id)?;
    let target = ElementTarget::new(element_by_id(document, &config.target_id)?);
    let handler = Rc::new(ClickToFetchHandler::new(fetcher, target, config.clone()));

    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let handler = Rc::clone(&handler);
        spawn_local(async move {
            handler.activate().await;
        });
    });
    trigger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    tracing::debug!(trigger = %config.trigger_id, target = %config.target_id, "handler mounted");
    Ok(())
}

fn element_by_id(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} is not an HTML element")))
}
