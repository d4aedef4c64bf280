use std::rc::Rc;

use nutri::config::PageConfig;

mod a11y;
mod anchors;
mod cards;
mod config;
mod counters;
mod debug;
mod dom;
mod images;
mod log;
mod motion;
mod notify;
mod reveal;

/// Wire every page behaviour once the DOM is ready.
pub fn start() {
    console_error_panic_hook::set_once();

    let result = dom::on_dom_ready(|| {
        let cfg = Rc::new(config::load_page_config());
        init(cfg);
    });
    if let Err(e) = result {
        log::warn(&format!("start: {e}"));
    }
}

fn init(cfg: Rc<PageConfig>) {
    notify::configure(&cfg.notifications);

    report("reveal", reveal::init(&cfg.reveal));
    report("counters", counters::init(cfg.clone()));
    report("cards", cards::init(cfg.clone()));
    report("a11y", a11y::init(&cfg.accessibility));
    report("anchors", anchors::init(&cfg.misc.anchor_selector));

    report("motion", motion::init());
    report(
        "orientation",
        motion::init_orientation_reset(cfg.misc.orientation_reset_ms),
    );
    report("images", images::init(&cfg.misc));
    report("debug", debug::install(cfg));

    log::info("✅ Nutrición Infantil UCC - Sistema cargado correctamente");
}

fn report(area: &str, result: Result<(), String>) {
    if let Err(e) = result {
        log::warn(&format!("{area}: {e}"));
    }
}
