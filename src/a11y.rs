//! Keyboard landmark shortcuts and the manual focus ring.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landmark {
    Header,
    Main,
    Footer,
}

impl Landmark {
    pub fn default_selector(self) -> &'static str {
        match self {
            Landmark::Header => "header",
            Landmark::Main => "main",
            Landmark::Footer => "footer",
        }
    }

    pub fn all() -> &'static [Landmark] {
        &[Landmark::Header, Landmark::Main, Landmark::Footer]
    }
}

/// Alt+h, Alt+m and Alt+f jump to the header, main content and footer.
///
/// Keys compare exactly against `KeyboardEvent.key`, so Alt+Shift+H does not
/// match.
pub fn shortcut(alt: bool, key: &str) -> Option<Landmark> {
    if !alt {
        return None;
    }
    match key {
        "h" => Some(Landmark::Header),
        "m" => Some(Landmark::Main),
        "f" => Some(Landmark::Footer),
        _ => None,
    }
}

/// Outcome of a keydown on the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Not a shortcut; the browser keeps the key.
    Pass,
    /// A shortcut whose landmark is absent: swallowed, nothing scrolls.
    Swallow,
    ScrollTo(Landmark),
}

impl ShortcutAction {
    pub fn prevents_default(self) -> bool {
        self != ShortcutAction::Pass
    }
}

pub fn shortcut_action(
    alt: bool,
    key: &str,
    landmark_present: impl Fn(Landmark) -> bool,
) -> ShortcutAction {
    match shortcut(alt, key) {
        None => ShortcutAction::Pass,
        Some(landmark) if landmark_present(landmark) => ShortcutAction::ScrollTo(landmark),
        Some(_) => ShortcutAction::Swallow,
    }
}

pub const FOCUSABLE_SELECTOR: &str = "a, button, [tabindex]";

/// Outline drawn on focus and cleared on blur.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FocusRing {
    pub color: String,
    pub width_px: u32,
    pub offset_px: u32,
}

impl Default for FocusRing {
    fn default() -> Self {
        Self {
            color: "#FF6B6B".to_string(),
            width_px: 3,
            offset_px: 2,
        }
    }
}

impl FocusRing {
    pub fn focus_styles(&self) -> [(&'static str, String); 2] {
        [
            (
                "outline",
                format!("{}px solid {}", self.width_px, self.color),
            ),
            ("outline-offset", format!("{}px", self.offset_px)),
        ]
    }

    /// Empty values remove the inline properties.
    pub fn blur_styles(&self) -> [(&'static str, String); 2] {
        [("outline", String::new()), ("outline-offset", String::new())]
    }
}
