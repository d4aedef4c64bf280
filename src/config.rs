//! Page configuration.
//!
//! Defaults reproduce the markup and timings the page ships with. A page may
//! override any subset through a JSON block; missing fields keep their default.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::a11y::{FocusRing, Landmark, FOCUSABLE_SELECTOR};
use crate::anchors::SAME_PAGE_ANCHOR_SELECTOR;
use crate::cards::{CardKind, TIP_RESTORE_MS};
use crate::counter::{CounterSpec, DEFAULT_START_DELAY_MS, DEFAULT_TICK_MS, PULSE};
use crate::motion::MOBILE_BREAKPOINT_PX;
use crate::notify::{SeverityColors, ToastTimeline};
use crate::reveal::DEFAULT_TRIGGER_RATIO;

/// `id` of the optional `<script type="application/json">` override block.
pub const CONFIG_ELEMENT_ID: &str = "nutri-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[cfg(feature = "serde")]
    #[error("config: invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config: {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RevealConfig {
    pub selector: String,
    pub marker_class: String,
    pub trigger_ratio: f64,
    pub throttle_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".animate-on-scroll".to_string(),
            marker_class: "animated".to_string(),
            trigger_ratio: DEFAULT_TRIGGER_RATIO,
            throttle_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CounterConfig {
    /// Selector for the stats section; the class it names is also checked on
    /// intersection entries.
    pub section_selector: String,
    pub threshold: f64,
    pub root_margin: String,
    pub start_delay_ms: u32,
    pub tick_ms: u32,
    pub pulse_ms: u32,
    pub items: Vec<CounterSpec>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            section_selector: ".datos-importantes".to_string(),
            threshold: 0.5,
            root_margin: "0px 0px -100px 0px".to_string(),
            start_delay_ms: DEFAULT_START_DELAY_MS,
            tick_ms: DEFAULT_TICK_MS,
            pulse_ms: PULSE.hold_ms,
            items: CounterSpec::defaults(),
        }
    }
}

impl CounterConfig {
    /// Class name carried by the stats section, derived from a `.class` selector.
    pub fn section_class(&self) -> Option<&str> {
        let class = self.section_selector.strip_prefix('.')?;
        if class.is_empty() || class.contains([' ', '.', '#', '[', ':', '>']) {
            None
        } else {
            Some(class)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CardConfig {
    pub merienda_selector: String,
    pub dato_selector: String,
    pub tip_selector: String,
    pub tip_icon_selector: String,
    pub tip_restore_ms: u32,
    pub selected_class: String,
    /// Announce merienda selection changes with a toast.
    pub announce_selection: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            merienda_selector: CardKind::Merienda.default_selector().to_string(),
            dato_selector: CardKind::Dato.default_selector().to_string(),
            tip_selector: CardKind::Tip.default_selector().to_string(),
            tip_icon_selector: "i".to_string(),
            tip_restore_ms: TIP_RESTORE_MS,
            selected_class: "is-selected".to_string(),
            announce_selection: true,
        }
    }
}

impl CardConfig {
    pub fn selector(&self, kind: CardKind) -> &str {
        match kind {
            CardKind::Merienda => &self.merienda_selector,
            CardKind::Dato => &self.dato_selector,
            CardKind::Tip => &self.tip_selector,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AccessibilityConfig {
    pub header_selector: String,
    pub main_selector: String,
    pub footer_selector: String,
    pub focusable_selector: String,
    pub focus_ring: FocusRing,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            header_selector: "header".to_string(),
            main_selector: "main".to_string(),
            footer_selector: "footer".to_string(),
            focusable_selector: FOCUSABLE_SELECTOR.to_string(),
            focus_ring: FocusRing::default(),
        }
    }
}

impl AccessibilityConfig {
    pub fn landmark_selector(&self, landmark: Landmark) -> &str {
        match landmark {
            Landmark::Header => &self.header_selector,
            Landmark::Main => &self.main_selector,
            Landmark::Footer => &self.footer_selector,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NotificationConfig {
    pub timeline: ToastTimeline,
    pub colors: SeverityColors,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MiscConfig {
    pub anchor_selector: String,
    pub mobile_breakpoint_px: f64,
    pub orientation_reset_ms: u32,
    pub broken_image_opacity: String,
    pub broken_image_alt: String,
}

impl Default for MiscConfig {
    fn default() -> Self {
        Self {
            anchor_selector: SAME_PAGE_ANCHOR_SELECTOR.to_string(),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            orientation_reset_ms: 100,
            broken_image_opacity: "0.5".to_string(),
            broken_image_alt: "Imagen no disponible".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageConfig {
    pub reveal: RevealConfig,
    pub counters: CounterConfig,
    pub cards: CardConfig,
    pub accessibility: AccessibilityConfig,
    pub notifications: NotificationConfig,
    pub misc: MiscConfig,
}

impl PageConfig {
    #[cfg(feature = "serde")]
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: PageConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ratio = self.reveal.trigger_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(invalid("reveal.trigger_ratio", format!("{ratio} not in (0, 1]")));
        }
        if self.reveal.marker_class.trim().is_empty() {
            return Err(invalid("reveal.marker_class", "empty"));
        }

        let threshold = self.counters.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(invalid(
                "counters.threshold",
                format!("{threshold} not in [0, 1]"),
            ));
        }
        if self.counters.tick_ms == 0 {
            return Err(invalid("counters.tick_ms", "must be > 0"));
        }
        for item in &self.counters.items {
            if item.element_id.trim().is_empty() {
                return Err(invalid("counters.items", "empty element_id"));
            }
            if !item.target.is_finite() {
                return Err(invalid(
                    "counters.items",
                    format!("{}: target is not finite", item.element_id),
                ));
            }
        }

        if self.misc.mobile_breakpoint_px < 0.0 {
            return Err(invalid("misc.mobile_breakpoint_px", "negative"));
        }
        Ok(())
    }
}
