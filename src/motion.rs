//! Viewport and reduced-motion utilities.

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Global override injected when the user prefers reduced motion.
pub const REDUCED_MOTION_CSS: &str = "
*, *::before, *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
}
";

pub fn is_mobile(viewport_width: f64, breakpoint_px: f64) -> bool {
    viewport_width <= breakpoint_px
}

/// Ensures the reduced-motion style is injected at most once per session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionGuard {
    applied: bool,
}

impl MotionGuard {
    /// Returns `true` if the caller should inject the style now.
    pub fn claim(&mut self, prefers_reduced_motion: bool) -> bool {
        if self.applied || !prefers_reduced_motion {
            return false;
        }
        self.applied = true;
        true
    }

    pub fn is_applied(self) -> bool {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(is_mobile(768.0, MOBILE_BREAKPOINT_PX));
        assert!(is_mobile(375.0, MOBILE_BREAKPOINT_PX));
        assert!(!is_mobile(768.5, MOBILE_BREAKPOINT_PX));
    }

    #[test]
    fn style_is_claimed_once_and_only_when_preferred() {
        let mut guard = MotionGuard::default();
        assert!(!guard.claim(false));
        assert!(guard.claim(true));
        assert!(guard.is_applied());
        assert!(!guard.claim(true));
    }

    #[test]
    fn css_covers_pseudo_elements() {
        assert!(REDUCED_MOTION_CSS.contains("*::before"));
        assert!(REDUCED_MOTION_CSS.contains("*::after"));
        assert!(REDUCED_MOTION_CSS.contains("transition-duration: 0.01ms !important"));
    }
}
