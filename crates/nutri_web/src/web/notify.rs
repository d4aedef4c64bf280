use std::cell::{Cell, RefCell};
use std::rc::Rc;

use nutri::config::NotificationConfig;
use nutri::notify::{Toast, ToastPhase, ToastProgress};
use wasm_bindgen::prelude::*;

use super::{dom, log};

thread_local! {
    static SETTINGS: RefCell<NotificationConfig> = RefCell::new(NotificationConfig::default());
}

pub(super) fn configure(cfg: &NotificationConfig) {
    SETTINGS.with(|s| *s.borrow_mut() = cfg.clone());
}

/// `showNotification(message, type = "info")` for page scripts.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) {
    if let Err(e) = show(message, kind.as_deref()) {
        log::warn(&e);
    }
}

pub(super) fn show(message: &str, kind: Option<&str>) -> Result<(), String> {
    let cfg = SETTINGS.with(|s| s.borrow().clone());
    let toast = Toast::new(message, kind);

    let doc = dom::document()?;
    let body = doc.body().ok_or("notify: no body".to_string())?;
    let el = doc
        .create_element("div")
        .map_err(|_| "notify: create_element failed".to_string())?;
    el.set_class_name(&toast.class_name());
    el.set_text_content(Some(&toast.message));
    for (prop, value) in toast.base_styles(&cfg.colors) {
        dom::set_style(&el, prop, &value);
    }
    body.append_child(&el)
        .map_err(|_| "notify: append failed".to_string())?;

    let progress = Rc::new(Cell::new(ToastProgress::default()));
    for (at_ms, phase) in cfg.timeline.schedule() {
        if phase == ToastPhase::Created {
            continue;
        }
        let el = el.clone();
        let progress = progress.clone();
        dom::after(at_ms, move || {
            let mut state = progress.get();
            if !state.advance(phase) {
                return;
            }
            progress.set(state);

            if let Some(transform) = phase.transform() {
                dom::set_style(&el, "transform", transform);
            }
            if phase == ToastPhase::Removed {
                // Page scripts may already have detached it.
                if let Some(parent) = el.parent_node() {
                    let _ = parent.remove_child(&el);
                }
            }
        });
    }
    Ok(())
}
