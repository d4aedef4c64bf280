use nutri::a11y::{shortcut_action, Landmark, ShortcutAction};
use nutri::config::AccessibilityConfig;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use super::dom;

pub(super) fn init(cfg: &AccessibilityConfig) -> Result<(), String> {
    let doc = dom::document()?;

    let landmarks = cfg.clone();
    dom::listen(&doc, "keydown", move |ev| {
        let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let Ok(doc) = dom::document() else {
            return;
        };
        let find =
            |landmark: Landmark| dom::query_doc(&doc, landmarks.landmark_selector(landmark));

        let action = shortcut_action(key_ev.alt_key(), &key_ev.key(), |l| find(l).is_some());
        if action.prevents_default() {
            ev.prevent_default();
        }
        if let ShortcutAction::ScrollTo(landmark) = action {
            if let Some(target) = find(landmark) {
                dom::smooth_scroll(&target, false);
            }
        }
    })?;

    for el in dom::query_all(&doc, &cfg.focusable_selector)? {
        let focus = cfg.focus_ring.focus_styles();
        let target = el.clone();
        dom::listen(&el, "focus", move |_| {
            for (prop, value) in &focus {
                dom::set_style(&target, prop, value);
            }
        })?;

        let blur = cfg.focus_ring.blur_styles();
        let target = el.clone();
        dom::listen(&el, "blur", move |_| {
            for (prop, value) in &blur {
                dom::set_style(&target, prop, value);
            }
        })?;
    }
    Ok(())
}
