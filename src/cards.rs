//! Card interaction poses.
//!
//! Three card categories live on the page. Each card owns a [`CardView`] whose
//! pose changes only through [`CardView::apply`]; the returned [`CardEffect`]
//! lists the inline transform to write and any follow-up the caller must
//! schedule. Tip cards animate their inner icon instead of the card itself and
//! go through [`TipBoard`], which owns the pending restore timer per icon.

use hashbrown::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    Merienda,
    Dato,
    Tip,
}

impl CardKind {
    pub fn label(self) -> &'static str {
        match self {
            CardKind::Merienda => "merienda",
            CardKind::Dato => "dato",
            CardKind::Tip => "tip",
        }
    }

    pub fn default_selector(self) -> &'static str {
        match self {
            CardKind::Merienda => ".merienda-card",
            CardKind::Dato => ".dato-card",
            CardKind::Tip => ".tip-card",
        }
    }

    pub fn all() -> &'static [CardKind] {
        &[CardKind::Merienda, CardKind::Dato, CardKind::Tip]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent<'a> {
    PointerEnter,
    PointerLeave,
    Click,
    KeyPress(&'a str),
}

/// Enter and Space activate a focused card.
pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pose {
    /// No inline transform written yet; external CSS decides.
    #[default]
    Untouched,
    MeriendaRest,
    MeriendaLifted,
    DatoRest,
    DatoTilted,
    DatoPressed,
    DatoSettled,
}

impl Pose {
    pub fn css(self) -> Option<&'static str> {
        match self {
            Pose::Untouched => None,
            Pose::MeriendaRest => Some("translateY(0) scale(1)"),
            Pose::MeriendaLifted => Some("translateY(-8px) scale(1.02)"),
            Pose::DatoRest => Some("scale(1) rotate(0deg)"),
            Pose::DatoTilted => Some("scale(1.05) rotate(1deg)"),
            Pose::DatoPressed => Some("scale(1.1)"),
            Pose::DatoSettled => Some("scale(1.05)"),
        }
    }
}

pub const DATO_SETTLE_MS: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardEffect {
    pub transform: Option<&'static str>,
    /// Call [`CardView::settle`] after this many milliseconds.
    pub settle_after_ms: Option<u32>,
    /// Invoke the card's click handler.
    pub activate: bool,
    pub prevent_default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    kind: CardKind,
    pose: Pose,
}

impl CardView {
    pub fn new(kind: CardKind) -> Self {
        Self {
            kind,
            pose: Pose::Untouched,
        }
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    fn enter(&mut self, pose: Pose) -> CardEffect {
        self.pose = pose;
        CardEffect {
            transform: pose.css(),
            ..CardEffect::default()
        }
    }

    pub fn apply(&mut self, event: CardEvent<'_>) -> CardEffect {
        match (self.kind, event) {
            (CardKind::Merienda, CardEvent::PointerEnter) => self.enter(Pose::MeriendaLifted),
            (CardKind::Merienda, CardEvent::PointerLeave) => self.enter(Pose::MeriendaRest),
            (CardKind::Merienda, CardEvent::Click) => CardEffect {
                activate: true,
                ..CardEffect::default()
            },
            (CardKind::Merienda, CardEvent::KeyPress(key)) if is_activation_key(key) => {
                CardEffect {
                    activate: true,
                    prevent_default: true,
                    ..CardEffect::default()
                }
            }

            (CardKind::Dato, CardEvent::PointerEnter) => self.enter(Pose::DatoTilted),
            (CardKind::Dato, CardEvent::PointerLeave) => self.enter(Pose::DatoRest),
            (CardKind::Dato, CardEvent::KeyPress(key)) if is_activation_key(key) => CardEffect {
                prevent_default: true,
                settle_after_ms: Some(DATO_SETTLE_MS),
                ..self.enter(Pose::DatoPressed)
            },

            // Tip cards spin their icon through `TipBoard`.
            _ => CardEffect::default(),
        }
    }

    /// Follow-up for a pressed dato card. The settle is unconditional, even if
    /// the pointer moved in the meantime.
    pub fn settle(&mut self) -> Option<&'static str> {
        if self.kind != CardKind::Dato {
            return None;
        }
        self.pose = Pose::DatoSettled;
        self.pose.css()
    }
}

/// Selection state for merienda cards, toggled by their click handler.
#[derive(Debug, Clone, Default)]
pub struct MeriendaBoard {
    selected: Vec<bool>,
}

impl MeriendaBoard {
    pub fn new(count: usize) -> Self {
        Self {
            selected: vec![false; count],
        }
    }

    /// Flip the selection of card `index`; returns the new state.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.selected.len() {
            self.selected.resize(index + 1, false);
        }
        self.selected[index] = !self.selected[index];
        self.selected[index]
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|s| **s).count()
    }
}

/// Toast text for a merienda selection change.
pub fn merienda_announcement(title: Option<&str>, index: usize, selected: bool) -> String {
    let name = match title.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => format!("Merienda {}", index + 1),
    };
    if selected {
        format!("Merienda seleccionada: {name}")
    } else {
        format!("Merienda deseleccionada: {name}")
    }
}

pub const TIP_SPIN: &str = "rotate(360deg) scale(1.3)";
pub const TIP_RESTORE_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone)]
struct TipIcon {
    restore_to: String,
    pending: Option<TimerToken>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipPress {
    pub spin: &'static str,
    pub token: TimerToken,
    /// Timer the caller must clear before scheduling `token`.
    pub cancel: Option<TimerToken>,
    pub restore_after_ms: u32,
}

/// Restore bookkeeping for every tip icon on the page.
#[derive(Debug, Clone)]
pub struct TipBoard {
    icons: HashMap<usize, TipIcon>,
    next_token: u64,
    restore_after_ms: u32,
}

impl Default for TipBoard {
    fn default() -> Self {
        Self::new(TIP_RESTORE_MS)
    }
}

impl TipBoard {
    pub fn new(restore_after_ms: u32) -> Self {
        Self {
            icons: HashMap::new(),
            next_token: 0,
            restore_after_ms,
        }
    }

    /// Record a click on tip card `index` whose icon currently carries
    /// `current_transform`.
    ///
    /// While a restore is pending the icon is mid-spin, so the value captured by
    /// the first click of the burst is kept and the pending timer is handed
    /// back for cancellation.
    pub fn press(&mut self, index: usize, current_transform: &str) -> TipPress {
        let token = TimerToken(self.next_token);
        self.next_token += 1;

        let icon = self.icons.entry(index).or_insert_with(|| TipIcon {
            restore_to: String::new(),
            pending: None,
        });
        let cancel = icon.pending.take();
        if cancel.is_none() {
            icon.restore_to = current_transform.to_string();
        }
        icon.pending = Some(token);

        TipPress {
            spin: TIP_SPIN,
            token,
            cancel,
            restore_after_ms: self.restore_after_ms,
        }
    }

    /// [`press`](Self::press) for a card whose icon may be missing. A card
    /// without an icon has nothing to spin and records nothing.
    pub fn press_icon(&mut self, index: usize, icon_transform: Option<&str>) -> Option<TipPress> {
        icon_transform.map(|current| self.press(index, current))
    }

    /// Called when the timer for `token` fires. Returns the transform to
    /// restore, or `None` if the token was superseded.
    pub fn restore(&mut self, index: usize, token: TimerToken) -> Option<String> {
        let icon = self.icons.get_mut(&index)?;
        if icon.pending != Some(token) {
            return None;
        }
        icon.pending = None;
        Some(std::mem::take(&mut icon.restore_to))
    }

    pub fn pending_count(&self) -> usize {
        self.icons.values().filter(|i| i.pending.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merienda_hover_lifts_and_settles_back() {
        let mut card = CardView::new(CardKind::Merienda);
        assert_eq!(card.pose().css(), None);
        let fx = card.apply(CardEvent::PointerEnter);
        assert_eq!(fx.transform, Some("translateY(-8px) scale(1.02)"));
        let fx = card.apply(CardEvent::PointerLeave);
        assert_eq!(fx.transform, Some("translateY(0) scale(1)"));
        assert!(!fx.activate);
    }

    #[test]
    fn merienda_activates_on_click_enter_and_space() {
        let mut card = CardView::new(CardKind::Merienda);
        let click = card.apply(CardEvent::Click);
        assert!(click.activate);
        assert!(!click.prevent_default);

        for key in ["Enter", " "] {
            let fx = card.apply(CardEvent::KeyPress(key));
            assert!(fx.activate);
            assert!(fx.prevent_default);
            assert_eq!(fx.transform, None);
        }

        assert_eq!(card.apply(CardEvent::KeyPress("a")), CardEffect::default());
    }

    #[test]
    fn dato_key_press_bumps_then_settles() {
        let mut card = CardView::new(CardKind::Dato);
        let fx = card.apply(CardEvent::KeyPress("Enter"));
        assert_eq!(fx.transform, Some("scale(1.1)"));
        assert_eq!(fx.settle_after_ms, Some(200));
        assert!(fx.prevent_default);
        assert!(!fx.activate);

        assert_eq!(card.settle(), Some("scale(1.05)"));
        assert_eq!(card.pose(), Pose::DatoSettled);
    }

    #[test]
    fn dato_hover_tilts() {
        let mut card = CardView::new(CardKind::Dato);
        assert_eq!(
            card.apply(CardEvent::PointerEnter).transform,
            Some("scale(1.05) rotate(1deg)")
        );
        assert_eq!(
            card.apply(CardEvent::PointerLeave).transform,
            Some("scale(1) rotate(0deg)")
        );
        assert_eq!(card.apply(CardEvent::Click), CardEffect::default());
    }

    #[test]
    fn tip_and_merienda_cards_never_settle() {
        assert_eq!(CardView::new(CardKind::Tip).settle(), None);
        assert_eq!(CardView::new(CardKind::Merienda).settle(), None);
    }

    #[test]
    fn tip_restores_captured_transform() {
        let mut board = TipBoard::default();
        let press = board.press(0, "rotate(10deg)");
        assert_eq!(press.spin, TIP_SPIN);
        assert_eq!(press.cancel, None);
        assert_eq!(press.restore_after_ms, 500);
        assert_eq!(board.pending_count(), 1);
        assert_eq!(board.restore(0, press.token).as_deref(), Some("rotate(10deg)"));
        assert_eq!(board.pending_count(), 0);
    }

    #[test]
    fn rapid_clicks_cancel_the_pending_restore_and_keep_first_capture() {
        let mut board = TipBoard::default();
        let first = board.press(2, "");
        // Second click lands mid-spin: the icon now reads TIP_SPIN.
        let second = board.press(2, TIP_SPIN);
        assert_eq!(second.cancel, Some(first.token));

        // A stale timer that slipped through is ignored.
        assert_eq!(board.restore(2, first.token), None);
        assert_eq!(board.restore(2, second.token).as_deref(), Some(""));
    }

    #[test]
    fn card_without_icon_is_ignored() {
        let mut board = TipBoard::default();
        assert_eq!(board.press_icon(4, None), None);
        assert_eq!(board.pending_count(), 0);

        let press = board.press_icon(4, Some("scale(1)")).unwrap();
        assert_eq!(press.cancel, None);
        assert_eq!(board.pending_count(), 1);
    }

    #[test]
    fn icons_are_tracked_independently() {
        let mut board = TipBoard::default();
        let a = board.press(0, "scale(1)");
        let b = board.press(1, "");
        assert_eq!(b.cancel, None);
        assert_eq!(board.pending_count(), 2);
        assert_eq!(board.restore(1, b.token).as_deref(), Some(""));
        assert_eq!(board.restore(0, a.token).as_deref(), Some("scale(1)"));
        assert_eq!(board.restore(7, a.token), None);
    }

    #[test]
    fn merienda_selection_toggles() {
        let mut board = MeriendaBoard::new(2);
        assert!(board.toggle(1));
        assert!(board.is_selected(1));
        assert!(!board.toggle(1));
        assert!(board.toggle(4));
        assert_eq!(board.selected_count(), 1);
    }

    #[test]
    fn announcement_falls_back_to_index() {
        assert_eq!(
            merienda_announcement(Some(" Yogur con fruta "), 0, true),
            "Merienda seleccionada: Yogur con fruta"
        );
        assert_eq!(
            merienda_announcement(None, 2, false),
            "Merienda deseleccionada: Merienda 3"
        );
        assert_eq!(
            merienda_announcement(Some("  "), 0, true),
            "Merienda seleccionada: Merienda 1"
        );
    }
}
