use nutri::anchors::{resolve, AnchorAction};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::dom;

pub(super) fn init(selector: &str) -> Result<(), String> {
    let doc = dom::document()?;
    for link in dom::query_all(&doc, selector)? {
        let href_source = link.clone();
        dom::listen(&link, "click", move |ev| {
            ev.prevent_default();

            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            let Ok(doc) = dom::document() else {
                return;
            };
            let AnchorAction::ScrollAndFocus(id) =
                resolve(&href, |id| doc.get_element_by_id(id).is_some())
            else {
                return;
            };
            let Some(target) = doc.get_element_by_id(id) else {
                return;
            };

            dom::smooth_scroll(&target, true);
            // Keep keyboard focus with the scrolled-to section.
            if let Some(html) = target.dyn_ref::<HtmlElement>() {
                let _ = html.focus();
            }
        })?;
    }
    Ok(())
}
