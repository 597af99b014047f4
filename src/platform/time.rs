//! Frame pacing

use std::time::{Duration, Instant};

/// Blocks until the next tick is due
pub trait Pacer {
    /// Wait for the next tick boundary. Returns how many tick periods elapsed
    /// since the previous call (1 when keeping up).
    fn wait_for_next_tick(&mut self) -> u32;
}

/// Sleeps to hold a fixed tick rate
#[derive(Debug)]
pub struct FixedRatePacer {
    period: Duration,
    next_deadline: Option<Instant>,
}

impl FixedRatePacer {
    pub fn new(rate_hz: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / rate_hz.max(1),
            next_deadline: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Pacer for FixedRatePacer {
    fn wait_for_next_tick(&mut self) -> u32 {
        let now = Instant::now();
        let deadline = match self.next_deadline {
            Some(deadline) => deadline,
            None => {
                self.next_deadline = Some(now + self.period);
                return 1;
            }
        };

        if now < deadline {
            std::thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + self.period);
            return 1;
        }

        // Fell behind: report the missed periods and resync to now
        let behind = now.duration_since(deadline);
        let missed = (behind.as_nanos() / self.period.as_nanos().max(1)) as u32;
        self.next_deadline = Some(now + self.period);
        missed.saturating_add(1)
    }
}

/// Never waits; for headless runs and tests
#[derive(Debug, Default, Clone, Copy)]
pub struct Unpaced;

impl Pacer for Unpaced {
    fn wait_for_next_tick(&mut self) -> u32 {
        1
    }
}
