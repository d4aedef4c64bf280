use nutri::config::{PageConfig, CONFIG_ELEMENT_ID};

use super::{dom, log};

/// Defaults, overridden by `<script type="application/json" id="nutri-config">`
/// when present. A broken block is reported and ignored.
pub(super) fn load_page_config() -> PageConfig {
    let raw = dom::document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(raw) = raw else {
        return PageConfig::default();
    };

    match PageConfig::from_json(&raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn(&format!("{e}; using defaults"));
            PageConfig::default()
        }
    }
}
