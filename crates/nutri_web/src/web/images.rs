use nutri::config::MiscConfig;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use super::{dom, log};

/// Broken images are dimmed and relabelled; `error` does not bubble, so this
/// listens in the capture phase.
pub(super) fn init(cfg: &MiscConfig) -> Result<(), String> {
    let doc = dom::document()?;
    let opacity = cfg.broken_image_opacity.clone();
    let alt = cfg.broken_image_alt.clone();
    dom::listen_capture(&doc, "error", move |ev| {
        let Some(img) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlImageElement>().ok())
        else {
            return;
        };
        log::warn(&format!("Error cargando imagen: {}", img.src()));
        dom::set_style(&img, "opacity", &opacity);
        img.set_alt(&alt);
    })
}
