//! Scroll-triggered reveal tracking.
//!
//! Every reveal target starts `Hidden` and flips to `Revealed` the first time its
//! bounding-box top sits above `viewport_height * trigger_ratio`. The transition
//! is one-way: scrolling back never hides an element again.

/// Fraction of the viewport height an element's top must cross.
pub const DEFAULT_TRIGGER_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

pub fn should_reveal(element_top: f64, viewport_height: f64, trigger_ratio: f64) -> bool {
    element_top < viewport_height * trigger_ratio
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    states: Vec<RevealState>,
    trigger_ratio: f64,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self::with_ratio(count, DEFAULT_TRIGGER_RATIO)
    }

    pub fn with_ratio(count: usize, trigger_ratio: f64) -> Self {
        Self {
            states: vec![RevealState::Hidden; count],
            trigger_ratio,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Revealed)
            .count()
    }

    pub fn all_revealed(&self) -> bool {
        self.states.iter().all(|s| *s == RevealState::Revealed)
    }

    /// Evaluate the current element tops and return the indices that were
    /// revealed by this pass. `tops` is indexed like the tracked elements; extra
    /// entries are ignored.
    pub fn evaluate(&mut self, tops: &[f64], viewport_height: f64) -> Vec<usize> {
        let mut newly = Vec::new();
        for (i, (state, &top)) in self.states.iter_mut().zip(tops).enumerate() {
            if *state == RevealState::Revealed {
                continue;
            }
            if should_reveal(top, viewport_height, self.trigger_ratio) {
                *state = RevealState::Revealed;
                newly.push(i);
            }
        }
        newly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert!(should_reveal(799.9, 1000.0, 0.8));
        assert!(!should_reveal(800.0, 1000.0, 0.8));
        assert!(should_reveal(-50.0, 1000.0, 0.8));
    }

    #[test]
    fn reveal_is_one_way() {
        let mut tracker = RevealTracker::new(3);
        let first = tracker.evaluate(&[100.0, 900.0, 1500.0], 1000.0);
        assert_eq!(first, vec![0]);

        // Scrolling back up pushes element 0 below the fold again.
        let second = tracker.evaluate(&[1200.0, 700.0, 1400.0], 1000.0);
        assert_eq!(second, vec![1]);
        assert_eq!(tracker.revealed_count(), 2);
        assert!(!tracker.all_revealed());
    }

    #[test]
    fn already_revealed_elements_are_not_reported_twice() {
        let mut tracker = RevealTracker::new(1);
        assert_eq!(tracker.evaluate(&[10.0], 1000.0), vec![0]);
        assert!(tracker.evaluate(&[10.0], 1000.0).is_empty());
    }

    #[test]
    fn empty_match_set_is_fine() {
        let mut tracker = RevealTracker::new(0);
        assert!(tracker.is_empty());
        assert!(tracker.evaluate(&[], 800.0).is_empty());
        assert!(tracker.all_revealed());
    }

    #[test]
    fn custom_ratio_moves_the_trigger_line() {
        let mut tracker = RevealTracker::with_ratio(1, 0.5);
        assert!(tracker.evaluate(&[600.0], 1000.0).is_empty());
        assert_eq!(tracker.evaluate(&[499.0], 1000.0), vec![0]);
    }
}
