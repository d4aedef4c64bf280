use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use hashbrown::HashMap;
use leptos::prelude::{set_timeout_with_handle, TimeoutHandle};
use nutri::cards::{
    merienda_announcement, CardEffect, CardEvent, CardKind, CardView, MeriendaBoard, TimerToken,
    TipBoard,
};
use nutri::config::{CardConfig, PageConfig};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent};

use super::{dom, log, notify};

type Activate = Rc<dyn Fn(&Element, usize)>;

pub(super) fn init(cfg: Rc<PageConfig>) -> Result<(), String> {
    let doc = dom::document()?;
    for &kind in CardKind::all() {
        let cards = dom::query_all(&doc, cfg.cards.selector(kind))
            .map_err(|e| format!("{} cards: {e}", kind.label()))?;
        match kind {
            CardKind::Merienda => init_meriendas(&cfg.cards, cards)?,
            CardKind::Dato => {
                for (index, card) in cards.into_iter().enumerate() {
                    wire_card(card, kind, index, None)?;
                }
            }
            CardKind::Tip => init_tips(&cfg.cards, cards)?,
        }
    }
    Ok(())
}

fn init_meriendas(cfg: &CardConfig, cards: Vec<Element>) -> Result<(), String> {
    let board = Rc::new(RefCell::new(MeriendaBoard::new(cards.len())));
    let activate: Activate = {
        let cfg = cfg.clone();
        Rc::new(move |card: &Element, index: usize| toggle_merienda(&cfg, &board, card, index))
    };
    for (index, card) in cards.into_iter().enumerate() {
        wire_card(card, CardKind::Merienda, index, Some(activate.clone()))?;
    }
    Ok(())
}

fn init_tips(cfg: &CardConfig, cards: Vec<Element>) -> Result<(), String> {
    let tips = Rc::new(TipIcons {
        board: RefCell::new(TipBoard::new(cfg.tip_restore_ms)),
        timers: RefCell::new(HashMap::new()),
        icon_selector: cfg.tip_icon_selector.clone(),
    });
    for (index, card) in cards.into_iter().enumerate() {
        let tips = tips.clone();
        let target = card.clone();
        dom::listen(&card, "click", move |_| tips.spin(&target, index))?;
    }
    Ok(())
}

fn wire_card(
    card: Element,
    kind: CardKind,
    index: usize,
    activate: Option<Activate>,
) -> Result<(), String> {
    let view = Rc::new(Cell::new(CardView::new(kind)));

    let handler = {
        let card = card.clone();
        move |ev: Event| {
            let key: String;
            let event = match ev.type_().as_str() {
                "mouseenter" => CardEvent::PointerEnter,
                "mouseleave" => CardEvent::PointerLeave,
                "click" => CardEvent::Click,
                "keypress" => {
                    key = ev
                        .dyn_ref::<KeyboardEvent>()
                        .map(KeyboardEvent::key)
                        .unwrap_or_default();
                    CardEvent::KeyPress(&key)
                }
                _ => return,
            };

            let mut state = view.get();
            let fx = state.apply(event);
            view.set(state);

            if fx.prevent_default {
                ev.prevent_default();
            }
            apply_effect(&card, &view, fx);
            if fx.activate {
                if let Some(activate) = &activate {
                    activate(&card, index);
                }
            }
        }
    };

    let handler = Rc::new(handler);
    for name in ["click", "keypress", "mouseenter", "mouseleave"] {
        let handler = handler.clone();
        dom::listen(&card, name, move |ev| handler(ev))?;
    }
    Ok(())
}

fn apply_effect(card: &Element, view: &Rc<Cell<CardView>>, fx: CardEffect) {
    if let Some(transform) = fx.transform {
        dom::set_style(card, "transform", transform);
    }
    if let Some(ms) = fx.settle_after_ms {
        let card = card.clone();
        let view = view.clone();
        dom::after(ms, move || {
            let mut state = view.get();
            let settled = state.settle();
            view.set(state);
            if let Some(transform) = settled {
                dom::set_style(&card, "transform", transform);
            }
        });
    }
}

fn toggle_merienda(cfg: &CardConfig, board: &RefCell<MeriendaBoard>, card: &Element, index: usize) {
    let selected = board.borrow_mut().toggle(index);
    let _ = card
        .class_list()
        .toggle_with_force(&cfg.selected_class, selected);
    let _ = card.set_attribute("aria-pressed", if selected { "true" } else { "false" });

    if cfg.announce_selection {
        let title = dom::query_one(card, "h2, h3, h4").and_then(|h| h.text_content());
        let message = merienda_announcement(title.as_deref(), index, selected);
        let kind = if selected { "success" } else { "info" };
        if let Err(e) = notify::show(&message, Some(kind)) {
            log::warn(&e);
        }
    }
}

struct TipIcons {
    board: RefCell<TipBoard>,
    timers: RefCell<HashMap<TimerToken, TimeoutHandle>>,
    icon_selector: String,
}

impl TipIcons {
    fn spin(self: &Rc<Self>, card: &Element, index: usize) {
        let icon = dom::query_one(card, &self.icon_selector);
        let current = icon.as_ref().map(|i| dom::inline_style(i, "transform"));
        let press = self
            .board
            .borrow_mut()
            .press_icon(index, current.as_deref());
        let (Some(icon), Some(press)) = (icon, press) else {
            return;
        };

        if let Some(stale) = press.cancel {
            if let Some(handle) = self.timers.borrow_mut().remove(&stale) {
                handle.clear();
            }
        }
        dom::set_style(&icon, "transform", press.spin);

        let this = self.clone();
        let token = press.token;
        let restore = move || {
            this.timers.borrow_mut().remove(&token);
            if let Some(transform) = this.board.borrow_mut().restore(index, token) {
                dom::set_style(&icon, "transform", &transform);
            }
        };
        match set_timeout_with_handle(
            restore,
            Duration::from_millis(press.restore_after_ms as u64),
        ) {
            Ok(handle) => {
                self.timers.borrow_mut().insert(token, handle);
            }
            Err(_) => log::warn("tip: setTimeout failed"),
        }
    }
}
