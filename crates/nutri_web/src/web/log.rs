use wasm_bindgen::JsValue;

pub(super) fn info(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub(super) fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}
