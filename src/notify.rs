//! Transient toast notifications.
//!
//! A toast is created off-screen to the right, slides in after a short delay,
//! slides back out once its hold time (counted from creation) has elapsed and
//! is detached when the exit transition is over.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Unknown kinds are shown as `Info`.
    pub fn parse(kind: &str) -> Severity {
        match kind {
            "success" => Severity::Success,
            "info" => Severity::Info,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SeverityColors {
    pub success: String,
    pub info: String,
    pub warning: String,
    pub error: String,
}

impl Default for SeverityColors {
    fn default() -> Self {
        Self {
            success: "#4CAF50".to_string(),
            info: "#4ECDC4".to_string(),
            warning: "#FFD166".to_string(),
            error: "#FF6B6B".to_string(),
        }
    }
}

impl SeverityColors {
    pub fn color(&self, severity: Severity) -> &str {
        match severity {
            Severity::Success => &self.success,
            Severity::Info => &self.info,
            Severity::Warning => &self.warning,
            Severity::Error => &self.error,
        }
    }
}

pub const HIDDEN_TRANSFORM: &str = "translateX(100%)";
pub const SHOWN_TRANSFORM: &str = "translateX(0)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    /// Kind as requested by the caller; kept verbatim for the CSS class.
    pub kind: String,
    pub severity: Severity,
}

impl Toast {
    pub fn new(message: &str, kind: Option<&str>) -> Self {
        let kind = kind.unwrap_or(Severity::Info.label());
        Self {
            message: message.to_string(),
            kind: kind.to_string(),
            severity: Severity::parse(kind),
        }
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.kind)
    }

    /// Inline styles for the freshly created, still hidden toast.
    pub fn base_styles(&self, colors: &SeverityColors) -> Vec<(&'static str, String)> {
        let fixed = [
            ("position", "fixed"),
            ("top", "20px"),
            ("right", "20px"),
            ("padding", "12px 20px"),
            ("border-radius", "8px"),
            ("color", "white"),
            ("font-weight", "bold"),
            ("z-index", "10000"),
            ("transform", HIDDEN_TRANSFORM),
            ("transition", "transform 0.3s ease"),
            ("max-width", "300px"),
            ("word-wrap", "break-word"),
        ];
        let mut out: Vec<(&'static str, String)> =
            fixed.iter().map(|(k, v)| (*k, v.to_string())).collect();
        out.push(("background-color", colors.color(self.severity).to_string()));
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ToastPhase {
    #[default]
    Created,
    Entering,
    Leaving,
    Removed,
}

impl ToastPhase {
    /// Transform to write when entering this phase, if any.
    pub fn transform(self) -> Option<&'static str> {
        match self {
            ToastPhase::Entering => Some(SHOWN_TRANSFORM),
            ToastPhase::Leaving => Some(HIDDEN_TRANSFORM),
            ToastPhase::Created | ToastPhase::Removed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ToastTimeline {
    pub enter_delay_ms: u32,
    pub hold_ms: u32,
    pub exit_ms: u32,
}

impl Default for ToastTimeline {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            hold_ms: 3000,
            exit_ms: 300,
        }
    }
}

impl ToastTimeline {
    /// Phase changes as offsets from creation, in order.
    pub fn schedule(&self) -> [(u32, ToastPhase); 4] {
        let leave_at = self.hold_ms.max(self.enter_delay_ms);
        [
            (0, ToastPhase::Created),
            (self.enter_delay_ms, ToastPhase::Entering),
            (leave_at, ToastPhase::Leaving),
            (leave_at + self.exit_ms, ToastPhase::Removed),
        ]
    }

    pub fn removal_at_ms(&self) -> u32 {
        self.schedule()[3].0
    }

    pub fn phase_at(&self, elapsed_ms: u32) -> ToastPhase {
        self.schedule()
            .iter()
            .rev()
            .find(|(at, _)| elapsed_ms >= *at)
            .map(|(_, phase)| *phase)
            .unwrap_or(ToastPhase::Created)
    }
}

/// Phase reached by one live toast.
///
/// Phases only move forward: a repeated or out-of-order timer is refused, so a
/// toast is never re-shown after leaving and never detached twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToastProgress {
    phase: ToastPhase,
}

impl ToastProgress {
    pub fn phase(self) -> ToastPhase {
        self.phase
    }

    /// Returns `true` when `next` is later than the current phase and the
    /// caller should apply it.
    pub fn advance(&mut self, next: ToastPhase) -> bool {
        if next <= self.phase {
            return false;
        }
        self.phase = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_kind_is_info() {
        let toast = Toast::new("Saved", None);
        assert_eq!(toast.severity, Severity::Info);
        assert_eq!(toast.class_name(), "notification notification-info");
        let styles = toast.base_styles(&SeverityColors::default());
        assert!(styles.contains(&("background-color", "#4ECDC4".to_string())));
        assert!(styles.contains(&("transform", HIDDEN_TRANSFORM.to_string())));
    }

    #[test]
    fn unknown_kind_keeps_class_but_uses_info_color() {
        let toast = Toast::new("Hola", Some("celebration"));
        assert_eq!(toast.severity, Severity::Info);
        assert_eq!(toast.class_name(), "notification notification-celebration");
        let colors = SeverityColors::default();
        assert_eq!(colors.color(toast.severity), "#4ECDC4");
    }

    #[test]
    fn each_severity_has_its_color() {
        let colors = SeverityColors::default();
        assert_eq!(colors.color(Severity::parse("success")), "#4CAF50");
        assert_eq!(colors.color(Severity::parse("warning")), "#FFD166");
        assert_eq!(colors.color(Severity::parse("error")), "#FF6B6B");
    }

    #[test]
    fn default_timeline() {
        let tl = ToastTimeline::default();
        assert_eq!(
            tl.schedule(),
            [
                (0, ToastPhase::Created),
                (100, ToastPhase::Entering),
                (3000, ToastPhase::Leaving),
                (3300, ToastPhase::Removed),
            ]
        );
        assert!((3300..=3600).contains(&tl.removal_at_ms()));
    }

    #[test]
    fn phase_at_walks_the_schedule() {
        let tl = ToastTimeline::default();
        assert_eq!(tl.phase_at(0), ToastPhase::Created);
        assert_eq!(tl.phase_at(99), ToastPhase::Created);
        assert_eq!(tl.phase_at(100), ToastPhase::Entering);
        assert_eq!(tl.phase_at(2999), ToastPhase::Entering);
        assert_eq!(tl.phase_at(3000), ToastPhase::Leaving);
        assert_eq!(tl.phase_at(5000), ToastPhase::Removed);
    }

    #[test]
    fn hold_shorter_than_enter_delay_still_orders_phases() {
        let tl = ToastTimeline {
            enter_delay_ms: 200,
            hold_ms: 50,
            exit_ms: 10,
        };
        let s = tl.schedule();
        assert!(s.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(tl.removal_at_ms(), 210);
    }

    #[test]
    fn phase_transforms() {
        assert_eq!(ToastPhase::Entering.transform(), Some("translateX(0)"));
        assert_eq!(ToastPhase::Leaving.transform(), Some("translateX(100%)"));
        assert_eq!(ToastPhase::Removed.transform(), None);
    }

    #[test]
    fn removal_applies_once() {
        let mut progress = ToastProgress::default();
        assert!(progress.advance(ToastPhase::Entering));
        assert!(progress.advance(ToastPhase::Removed));
        assert!(!progress.advance(ToastPhase::Removed));
        assert!(!progress.advance(ToastPhase::Leaving));
        assert_eq!(progress.phase(), ToastPhase::Removed);
    }
}
