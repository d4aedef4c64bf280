use std::time::Duration;

use leptos::prelude::set_timeout;
use nutri::lifecycle::ReadyState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

pub(super) fn window() -> Result<Window, String> {
    web_sys::window().ok_or("no window".to_string())
}

pub(super) fn document() -> Result<Document, String> {
    window()?.document().ok_or("no document".to_string())
}

pub(super) fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, String> {
    let list = doc
        .query_selector_all(selector)
        .map_err(|_| format!("query: invalid selector {selector:?}"))?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}

/// First match, or `None` when absent or the selector does not parse.
pub(super) fn query_one(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub(super) fn query_doc(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

/// Write one inline style property. An empty `value` removes it.
pub(super) fn set_style(el: &Element, prop: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(prop, value);
    }
}

pub(super) fn inline_style(el: &Element, prop: &str) -> String {
    el.dyn_ref::<HtmlElement>()
        .and_then(|html| html.style().get_property_value(prop).ok())
        .unwrap_or_default()
}

pub(super) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), String> {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|_| format!("listen: {event} failed"))?;
    // Page-lifetime listener.
    cb.forget();
    Ok(())
}

pub(super) fn listen_capture(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), String> {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback_and_bool(event, cb.as_ref().unchecked_ref(), true)
        .map_err(|_| format!("listen: {event} (capture) failed"))?;
    cb.forget();
    Ok(())
}

/// Run `f` once after `ms` milliseconds.
pub(super) fn after(ms: u32, f: impl FnOnce() + 'static) {
    set_timeout(f, Duration::from_millis(ms as u64));
}

/// Run `f` when the DOM is parsed; immediately if that already happened.
pub(super) fn on_dom_ready(f: impl FnOnce() + 'static) -> Result<(), String> {
    let doc = document()?;
    if ReadyState::parse(&doc.ready_state()).dom_parsed() {
        f();
        return Ok(());
    }
    let mut f = Some(f);
    listen(&doc, "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    })
}

/// Run `f` on window `load`; immediately if the page already finished loading.
pub(super) fn on_window_load(f: impl FnOnce() + 'static) -> Result<(), String> {
    let window = window()?;
    let doc = document()?;
    if ReadyState::parse(&doc.ready_state()).loaded() {
        f();
        return Ok(());
    }
    let mut f = Some(f);
    listen(&window, "load", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    })
}

pub(super) fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

pub(super) fn smooth_scroll(el: &Element, align_start: bool) {
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    if align_start {
        opts.set_block(web_sys::ScrollLogicalPosition::Start);
    }
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
