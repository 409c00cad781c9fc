//! Drop scheduler - turns elapsed frame time into automatic soft drops.

/// Elapsed-time accumulator for gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DropScheduler {
    accumulator_ms: u32,
}

impl DropScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `elapsed_ms` and report whether a drop is due.
    ///
    /// A drop is due once the accumulated time strictly exceeds
    /// `interval_ms`; the accumulator then restarts from zero. At most one
    /// drop is reported per call, however long the frame was.
    pub fn advance(&mut self, elapsed_ms: u32, interval_ms: u32) -> bool {
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        if self.accumulator_ms > interval_ms {
            self.accumulator_ms = 0;
            true
        } else {
            false
        }
    }

    /// Restart the countdown (any manual drop does this).
    pub fn reset(&mut self) {
        self.accumulator_ms = 0;
    }

    pub fn accumulated_ms(&self) -> u32 {
        self.accumulator_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_exceeding_interval() {
        let mut s = DropScheduler::new();
        assert!(!s.advance(500, 1000));
        assert!(!s.advance(500, 1000));
        assert_eq!(s.accumulated_ms(), 1000);
        assert!(s.advance(1, 1000));
        assert_eq!(s.accumulated_ms(), 0);
    }

    #[test]
    fn long_frame_fires_once_and_discards_remainder() {
        let mut s = DropScheduler::new();
        assert!(s.advance(5000, 1000));
        assert_eq!(s.accumulated_ms(), 0);
        assert!(!s.advance(16, 1000));
    }

    #[test]
    fn reset_restarts_countdown() {
        let mut s = DropScheduler::new();
        s.advance(900, 1000);
        s.reset();
        assert!(!s.advance(900, 1000));
        assert!(s.advance(101, 1000));
    }
}
