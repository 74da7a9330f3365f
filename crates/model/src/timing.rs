//! Rate limiting for high-frequency browser events

/// Leading-edge throttle: the first call passes, then calls are dropped until
/// `limit_ms` has elapsed since the last call that passed.
///
/// Timestamps come from the caller (`performance.now()` in the browser).
#[derive(Clone, Debug)]
pub struct ThrottleGate {
    limit_ms: f64,
    last_pass: Option<f64>,
}

impl ThrottleGate {
    pub const fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last_pass: None,
        }
    }

    /// Returns true when the call at `now_ms` may run
    pub fn try_pass(&mut self, now_ms: f64) -> bool {
        match self.last_pass {
            Some(last) if now_ms - last < self.limit_ms => false,
            _ => {
                self.last_pass = Some(now_ms);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_passes() {
        let mut gate = ThrottleGate::new(16.0);
        assert!(gate.try_pass(1000.0));
    }

    #[test]
    fn test_drops_within_interval() {
        let mut gate = ThrottleGate::new(16.0);
        assert!(gate.try_pass(0.0));
        assert!(!gate.try_pass(5.0));
        assert!(!gate.try_pass(15.9));
        assert!(gate.try_pass(16.0));
        assert!(!gate.try_pass(20.0));
    }

    #[test]
    fn test_at_most_one_per_interval() {
        let mut gate = ThrottleGate::new(16.0);
        // a 1 kHz event stream for 160 ms
        let passed = (0..160).filter(|t| gate.try_pass(f64::from(*t))).count();
        assert_eq!(passed, 10);
    }
}
