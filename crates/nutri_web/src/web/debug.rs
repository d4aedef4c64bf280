use std::rc::Rc;

use nutri::cards::CardKind;
use nutri::config::PageConfig;
use nutri::debug::{is_dev_host, DebugReport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use super::{dom, log, motion};

fn collect(cfg: &PageConfig) -> Result<DebugReport, String> {
    let window = dom::window()?;
    let doc = dom::document()?;
    let (width, height) = dom::viewport_size(&window);
    Ok(DebugReport {
        is_mobile: motion::viewport_is_mobile(cfg.misc.mobile_breakpoint_px),
        reduced_motion: motion::prefers_reduced_motion(),
        viewport_width: width,
        viewport_height: height,
        reveal_targets: dom::query_all(&doc, &cfg.reveal.selector)?.len(),
        merienda_cards: dom::query_all(&doc, cfg.cards.selector(CardKind::Merienda))?.len(),
    })
}

/// Expose `window.debugNutricion()` on local development hosts.
pub(super) fn install(cfg: Rc<PageConfig>) -> Result<(), String> {
    let window = dom::window()?;
    let host = window.location().hostname().unwrap_or_default();
    if !is_dev_host(&host) {
        return Ok(());
    }

    let cb = Closure::<dyn Fn()>::new(move || match collect(&cfg) {
        Ok(report) => report.lines().iter().for_each(|line| log::info(line)),
        Err(e) => log::warn(&format!("debug: {e}")),
    });
    js_sys::Reflect::set(&window, &JsValue::from_str("debugNutricion"), cb.as_ref())
        .map_err(|_| "could not install debugNutricion".to_string())?;
    cb.forget();

    log::info("🚀 Modo desarrollo activado. Usa debugNutricion() para información de debug.");
    Ok(())
}
