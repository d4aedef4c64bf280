//! # nutri
//!
//! View-state logic for the interactive layer of the infant-nutrition page.
//!
//! Nothing in this crate touches the DOM. Each behaviour is a small typed state
//! object with pure update functions that return the class/style mutations to
//! apply; the `nutri_web` crate owns the browser side and applies them.
//!
//! ## Quick Start
//!
//! ```
//! use nutri::counter::{CounterRun, CounterSpec};
//!
//! let spec = CounterSpec::new("counter-1", 70.0, "%", 2000);
//! let mut run = CounterRun::new(&spec, 30);
//! let mut last = String::new();
//! while let Some(frame) = run.tick() {
//!     last = frame.text;
//! }
//! assert_eq!(last, "70%");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): deserialize [`config::PageConfig`] from JSON
//!
//! ## Modules
//!
//! - [`reveal`]: scroll-triggered reveal tracking
//! - [`throttle`]: leading-edge rate limiting for scroll checks
//! - [`counter`]: animated stat counters and the fire-once latch
//! - [`cards`]: hover/click/keyboard poses for the card categories
//! - [`a11y`]: landmark shortcuts and focus ring styles
//! - [`anchors`]: same-page fragment resolution
//! - [`notify`]: toast notifications and their timeline
//! - [`motion`]: viewport and reduced-motion utilities
//! - [`debug`]: developer diagnostics report
//! - [`lifecycle`]: document readiness checks
//! - [`config`]: page configuration with defaults matching the markup

pub mod a11y;
pub mod anchors;
pub mod cards;
pub mod config;
pub mod counter;
pub mod debug;
pub mod lifecycle;
pub mod motion;
pub mod notify;
pub mod reveal;
pub mod throttle;
pub mod time;

pub mod prelude {
    pub use crate::a11y::{FocusRing, Landmark};
    pub use crate::cards::{CardEffect, CardEvent, CardKind, CardView, TipBoard};
    pub use crate::config::{ConfigError, PageConfig};
    pub use crate::counter::{CounterFrame, CounterLatch, CounterRun, CounterSpec, SectionGate};
    pub use crate::notify::{Severity, Toast, ToastPhase, ToastTimeline};
    pub use crate::reveal::RevealTracker;
    pub use crate::throttle::Throttle;
}
