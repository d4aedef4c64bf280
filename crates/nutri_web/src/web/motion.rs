use std::cell::Cell;

use nutri::motion::{is_mobile, MotionGuard, REDUCED_MOTION_CSS, REDUCED_MOTION_QUERY};

use super::{dom, log};

thread_local! {
    static GUARD: Cell<MotionGuard> = Cell::new(MotionGuard::default());
}

pub(super) fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub(super) fn viewport_is_mobile(breakpoint_px: f64) -> bool {
    let Ok(window) = dom::window() else {
        return false;
    };
    let (width, _) = dom::viewport_size(&window);
    is_mobile(width, breakpoint_px)
}

/// Inject the reduced-motion override on window load, once per session.
pub(super) fn init() -> Result<(), String> {
    dom::on_window_load(|| {
        if let Err(e) = apply_reduced_motion() {
            log::warn(&format!("motion: {e}"));
        }
    })
}

fn apply_reduced_motion() -> Result<(), String> {
    let claimed = GUARD.with(|g| {
        let mut guard = g.get();
        let claimed = guard.claim(prefers_reduced_motion());
        g.set(guard);
        claimed
    });
    if !claimed {
        return Ok(());
    }

    let doc = dom::document()?;
    let head = doc.head().ok_or("no <head>".to_string())?;
    let style = doc
        .create_element("style")
        .map_err(|_| "create_element(style) failed".to_string())?;
    style.set_text_content(Some(REDUCED_MOTION_CSS));
    head.append_child(&style)
        .map_err(|_| "append <style> failed".to_string())?;
    Ok(())
}

/// Phones rotating mid-page jump back to the top.
pub(super) fn init_orientation_reset(delay_ms: u32) -> Result<(), String> {
    let window = dom::window()?;
    dom::listen(&window, "orientationchange", move |_| {
        dom::after(delay_ms, || {
            if let Some(w) = web_sys::window() {
                w.scroll_to_with_x_and_y(0.0, 0.0);
            }
        });
    })
}
