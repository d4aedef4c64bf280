//! Animated stat counters.
//!
//! The stats section is watched once; on its first qualifying intersection the
//! section is unobserved and, after a short delay, every configured counter
//! starts its own fixed-cadence linear interpolation from zero to its target.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_TICK_MS: u32 = 30;
pub const DEFAULT_START_DELAY_MS: u32 = 500;

/// One counter: which element to write, where to stop, and how long to take.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CounterSpec {
    pub element_id: String,
    pub target: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub suffix: String,
    pub duration_ms: u32,
}

impl CounterSpec {
    pub fn new(element_id: &str, target: f64, suffix: &str, duration_ms: u32) -> Self {
        Self {
            element_id: element_id.to_string(),
            target,
            suffix: suffix.to_string(),
            duration_ms,
        }
    }

    /// The three stats shown on the page.
    pub fn defaults() -> Vec<CounterSpec> {
        vec![
            CounterSpec::new("counter-1", 70.0, "%", 2000),
            CounterSpec::new("counter-2", 5.0, "", 1500),
            CounterSpec::new("counter-3", 15.0, "min", 1800),
        ]
    }
}

/// Text shown for a counter value: the value truncated toward zero, then the suffix.
pub fn display_text(value: f64, suffix: &str) -> String {
    // Integer formatting keeps float `Display` out of the wasm path.
    let whole = value.trunc() as i64;
    format!("{whole}{suffix}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    /// Set on the frame that clamped to the target; the caller stops ticking
    /// and plays the pulse.
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct CounterRun {
    target: f64,
    suffix: String,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterRun {
    pub fn new(spec: &CounterSpec, tick_ms: u32) -> Self {
        let steps = spec.duration_ms as f64 / tick_ms.max(1) as f64;
        // A zero duration reaches the target on the first tick.
        let increment = if steps > 0.0 {
            spec.target / steps
        } else {
            spec.target
        };
        Self {
            target: spec.target,
            suffix: spec.suffix.clone(),
            increment,
            current: 0.0,
            finished: false,
        }
    }

    /// Advance one tick. Returns `None` once the run has already finished.
    pub fn tick(&mut self) -> Option<CounterFrame> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target {
            self.current = self.target;
            self.finished = true;
        }
        Some(CounterFrame {
            text: display_text(self.current, &self.suffix),
            finished: self.finished,
        })
    }
}

/// Completion pulse played on a counter element once it reaches its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    pub peak: &'static str,
    pub rest: &'static str,
    pub hold_ms: u32,
}

pub const PULSE: Pulse = Pulse {
    peak: "scale(1.1)",
    rest: "scale(1)",
    hold_ms: 200,
};

/// Fire-once latch for the counter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterLatch {
    #[default]
    Pending,
    Triggered,
}

impl CounterLatch {
    /// Returns `true` exactly once per latch.
    pub fn trigger(&mut self) -> bool {
        match self {
            CounterLatch::Pending => {
                *self = CounterLatch::Triggered;
                true
            }
            CounterLatch::Triggered => false,
        }
    }

    pub fn is_triggered(self) -> bool {
        self == CounterLatch::Triggered
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionDecision {
    Ignore,
    /// Stop observing the section and start the counters after `delay_ms`.
    UnobserveAndStart { delay_ms: u32 },
}

/// Decides what an intersection entry on the stats section means.
#[derive(Debug, Clone, Copy)]
pub struct SectionGate {
    pub start_delay_ms: u32,
}

impl Default for SectionGate {
    fn default() -> Self {
        Self {
            start_delay_ms: DEFAULT_START_DELAY_MS,
        }
    }
}

impl SectionGate {
    pub fn on_entry(&self, is_intersecting: bool, is_stats_section: bool) -> SectionDecision {
        if is_intersecting && is_stats_section {
            SectionDecision::UnobserveAndStart {
                delay_ms: self.start_delay_ms,
            }
        } else {
            SectionDecision::Ignore
        }
    }
}
