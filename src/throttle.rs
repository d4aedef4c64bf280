/// Leading-edge throttle.
///
/// The first call runs immediately and opens a cooldown window of `limit_ms`.
/// Calls landing inside the window are dropped, not queued; there is no
/// trailing invocation.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    ready_at_ms: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: u32) -> Self {
        Self {
            limit_ms: limit_ms as f64,
            ready_at_ms: None,
        }
    }

    /// Returns `true` when the caller should run its handler at `now_ms`.
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        if let Some(ready_at) = self.ready_at_ms {
            if now_ms < ready_at {
                return false;
            }
        }
        self.ready_at_ms = Some(now_ms + self.limit_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_fires_immediately() {
        let mut t = Throttle::new(100);
        assert!(t.try_fire(0.0));
        assert!(!t.try_fire(1.0));
    }

    #[test]
    fn burst_inside_window_collapses_to_one() {
        let mut t = Throttle::new(100);
        let fired = [0.0, 10.0, 40.0, 75.0, 99.9]
            .iter()
            .filter(|&&now| t.try_fire(now))
            .count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn dropped_calls_do_not_extend_the_window() {
        let mut t = Throttle::new(100);
        assert!(t.try_fire(0.0));
        assert!(!t.try_fire(90.0));
        assert!(t.try_fire(100.0));
        assert!(!t.try_fire(150.0));
        assert!(t.try_fire(205.0));
    }

    #[test]
    fn zero_limit_never_drops() {
        let mut t = Throttle::new(0);
        assert!(t.try_fire(5.0));
        assert!(t.try_fire(5.0));
    }
}
