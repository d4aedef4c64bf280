//! Document readiness, as reported by `document.readyState`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Unrecognised values count as `Loading`, so callers wait for the event.
    pub fn parse(raw: &str) -> ReadyState {
        match raw {
            "interactive" => ReadyState::Interactive,
            "complete" => ReadyState::Complete,
            _ => ReadyState::Loading,
        }
    }

    /// `DOMContentLoaded` has already fired.
    pub fn dom_parsed(self) -> bool {
        self != ReadyState::Loading
    }

    /// The window `load` event has already fired.
    pub fn loaded(self) -> bool {
        self == ReadyState::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_browser_states() {
        assert_eq!(ReadyState::parse("loading"), ReadyState::Loading);
        assert_eq!(ReadyState::parse("interactive"), ReadyState::Interactive);
        assert_eq!(ReadyState::parse("complete"), ReadyState::Complete);
    }

    #[test]
    fn late_start_runs_hooks_immediately() {
        assert!(!ReadyState::Loading.dom_parsed());
        assert!(ReadyState::Interactive.dom_parsed());
        assert!(!ReadyState::Interactive.loaded());
        assert!(ReadyState::Complete.dom_parsed());
        assert!(ReadyState::Complete.loaded());
    }

    #[test]
    fn unknown_state_waits_for_the_event() {
        let state = ReadyState::parse("Complete");
        assert_eq!(state, ReadyState::Loading);
        assert!(!state.dom_parsed());
    }
}
