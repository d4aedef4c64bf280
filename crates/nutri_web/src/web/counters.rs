use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::{set_interval_with_handle, IntervalHandle};
use nutri::config::{CounterConfig, PageConfig};
use nutri::counter::{CounterLatch, CounterRun, SectionDecision, SectionGate, PULSE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{dom, log};

pub(super) fn init(cfg: Rc<PageConfig>) -> Result<(), String> {
    let doc = dom::document()?;
    let Some(section) = dom::query_doc(&doc, &cfg.counters.section_selector) else {
        return Ok(());
    };

    let gate = SectionGate {
        start_delay_ms: cfg.counters.start_delay_ms,
    };
    let latch = Rc::new(Cell::new(CounterLatch::default()));
    let section_class = cfg.counters.section_class().map(str::to_string);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(cfg.counters.threshold));
    options.set_root_margin(&cfg.counters.root_margin);

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let is_section = section_class
                    .as_deref()
                    .map_or(true, |class| target.class_list().contains(class));

                if let SectionDecision::UnobserveAndStart { delay_ms } =
                    gate.on_entry(entry.is_intersecting(), is_section)
                {
                    observer.unobserve(&target);
                    let latch = latch.clone();
                    let cfg = cfg.clone();
                    dom::after(delay_ms, move || {
                        let mut state = latch.get();
                        let fire = state.trigger();
                        latch.set(state);
                        if fire {
                            start_all(&cfg.counters);
                        }
                    });
                }
            }
        },
    );

    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
            .map_err(|_| "IntersectionObserver: construction failed".to_string())?;
    on_intersect.forget();
    observer.observe(&section);
    Ok(())
}

fn start_all(cfg: &CounterConfig) {
    let Ok(doc) = dom::document() else {
        return;
    };
    for spec in &cfg.items {
        // Missing counters are skipped.
        let Some(el) = doc.get_element_by_id(&spec.element_id) else {
            continue;
        };
        let run = CounterRun::new(spec, cfg.tick_ms);
        if let Err(e) = animate(el, run, cfg.tick_ms, cfg.pulse_ms) {
            log::warn(&format!("counter {}: {e}", spec.element_id));
        }
    }
}

fn animate(el: Element, run: CounterRun, tick_ms: u32, pulse_ms: u32) -> Result<(), String> {
    let run = RefCell::new(run);
    let handle: Rc<Cell<Option<IntervalHandle>>> = Rc::new(Cell::new(None));

    let tick = {
        let handle = handle.clone();
        move || {
            let Some(frame) = run.borrow_mut().tick() else {
                return;
            };
            if frame.finished {
                if let Some(h) = handle.take() {
                    h.clear();
                }
                dom::set_style(&el, "transform", PULSE.peak);
                let el = el.clone();
                dom::after(pulse_ms, move || {
                    dom::set_style(&el, "transform", PULSE.rest)
                });
            }
            el.set_text_content(Some(&frame.text));
        }
    };

    let h = set_interval_with_handle(tick, Duration::from_millis(tick_ms as u64))
        .map_err(|_| "setInterval failed".to_string())?;
    handle.set(Some(h));
    Ok(())
}
