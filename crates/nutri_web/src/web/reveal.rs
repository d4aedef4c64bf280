use std::cell::RefCell;
use std::rc::Rc;

use nutri::config::RevealConfig;
use nutri::reveal::RevealTracker;
use nutri::throttle::Throttle;
use nutri::time::{millis_since, Instant};
use web_sys::Element;

use super::dom;

struct Targets {
    elements: Vec<Element>,
    tracker: RevealTracker,
    marker_class: String,
}

impl Targets {
    fn check(&mut self) {
        if self.tracker.all_revealed() {
            return;
        }
        let Ok(window) = dom::window() else {
            return;
        };
        let (_, viewport_height) = dom::viewport_size(&window);
        let tops: Vec<f64> = self
            .elements
            .iter()
            .map(|el| el.get_bounding_client_rect().top())
            .collect();
        for i in self.tracker.evaluate(&tops, viewport_height) {
            let _ = self.elements[i].class_list().add_1(&self.marker_class);
        }
    }
}

pub(super) fn init(cfg: &RevealConfig) -> Result<(), String> {
    let doc = dom::document()?;
    let elements = dom::query_all(&doc, &cfg.selector)?;
    let tracker = RevealTracker::with_ratio(elements.len(), cfg.trigger_ratio);
    if tracker.is_empty() {
        return Ok(());
    }
    let targets = Rc::new(RefCell::new(Targets {
        tracker,
        elements,
        marker_class: cfg.marker_class.clone(),
    }));

    dom::on_window_load({
        let targets = targets.clone();
        move || targets.borrow_mut().check()
    })?;

    let mut throttle = Throttle::new(cfg.throttle_ms);
    let origin = Instant::now();
    let window = dom::window()?;
    dom::listen(&window, "scroll", {
        let targets = targets.clone();
        move |_| {
            if throttle.try_fire(millis_since(origin)) {
                targets.borrow_mut().check();
            }
        }
    })?;

    // Elements already on screen.
    targets.borrow_mut().check();
    Ok(())
}
