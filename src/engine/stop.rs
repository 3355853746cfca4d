// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cooperative stop condition for long runs.

use std::time::Instant;

/// Sibling iterations between clock reads.
const CLOCK_INTERVAL: u32 = 1 << 12;

/// Decides whether the search should stop before trying the next sibling.
///
/// The check runs only between siblings, after the previous sibling has been
/// fully undone, so stopping never leaves the shape half-built.
#[derive(Debug, Clone)]
pub struct StopCheck {
    deadline: Option<Instant>,
    countdown: u32,
    stopped: bool,
}

impl StopCheck {
    /// Never stop.
    pub fn never() -> Self {
        Self {
            deadline: None,
            countdown: CLOCK_INTERVAL,
            stopped: false,
        }
    }

    /// Stop at the first check after `deadline`.
    pub fn at(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::never()
        }
    }

    /// True once the deadline has passed. Reads the clock only occasionally.
    #[inline]
    pub fn should_stop(&mut self) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if self.stopped {
            return true;
        }
        self.countdown -= 1;
        if self.countdown == 0 {
            self.countdown = CLOCK_INTERVAL;
            self.stopped = Instant::now() >= deadline;
        }
        self.stopped
    }

    /// True if a previous check fired.
    pub fn stopped(&self) -> bool {
        self.stopped
    }
}

impl Default for StopCheck {
    fn default() -> Self {
        Self::never()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_never_stops() {
        let mut check = StopCheck::never();
        for _ in 0..3 * CLOCK_INTERVAL {
            assert!(!check.should_stop());
        }
        assert!(!check.stopped());
    }

    #[test]
    fn test_past_deadline_stops_within_interval() {
        let mut check = StopCheck::at(Instant::now() - Duration::from_secs(1));
        let fired = (0..CLOCK_INTERVAL).any(|_| check.should_stop());
        assert!(fired);
        assert!(check.stopped());
        assert!(check.should_stop());
    }

    #[test]
    fn test_future_deadline_keeps_going() {
        let mut check = StopCheck::at(Instant::now() + Duration::from_secs(3600));
        for _ in 0..2 * CLOCK_INTERVAL {
            assert!(!check.should_stop());
        }
    }
}
