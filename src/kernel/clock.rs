use std::thread;
use std::time::Duration;

use serde::Deserialize;

/// Source of execution latency for one scheduling quantum.
pub trait Clock {
    /// Accounts for `quantum` of execution time.
    fn advance(&mut self, quantum: Duration);

    /// Total time accounted for so far.
    fn elapsed(&self) -> Duration;
}

/// Advances virtual time only. Never blocks.
#[derive(Debug, Default)]
pub struct SimulatedClock {
    elapsed: Duration,
}

impl SimulatedClock {
    pub fn new() -> SimulatedClock {
        SimulatedClock::default()
    }
}

impl Clock for SimulatedClock {
    fn advance(&mut self, quantum: Duration) {
        self.elapsed = self.elapsed.saturating_add(quantum);
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Blocks the calling thread for every quantum.
#[derive(Debug, Default)]
pub struct WallClock {
    elapsed: Duration,
}

impl WallClock {
    pub fn new() -> WallClock {
        WallClock::default()
    }
}

impl Clock for WallClock {
    fn advance(&mut self, quantum: Duration) {
        log::debug!("Sleeping for {:?}", quantum);
        thread::sleep(quantum);
        self.elapsed = self.elapsed.saturating_add(quantum);
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClockKind {
    /// Virtual time, no real waiting.
    #[default]
    Simulated,
    /// Real blocking delay per quantum.
    Wall,
}

impl ClockKind {
    pub fn build(self) -> Box<dyn Clock> {
        match self {
            ClockKind::Simulated => Box::new(SimulatedClock::new()),
            ClockKind::Wall => Box::new(WallClock::new()),
        }
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn advance(&mut self, quantum: Duration) {
        (**self).advance(quantum);
    }

    fn elapsed(&self) -> Duration {
        (**self).elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_simulated_clock_accumulates() {
        let mut clock = SimulatedClock::new();
        clock.advance(Duration::from_millis(1000));
        clock.advance(Duration::from_millis(250));

        assert_eq!(clock.elapsed(), Duration::from_millis(1250));
    }

    #[test]
    fn test_simulated_clock_saturates() {
        let mut clock = SimulatedClock::new();
        clock.advance(Duration::MAX);
        clock.advance(Duration::from_millis(u64::MAX));

        assert_eq!(clock.elapsed(), Duration::MAX);
    }

    #[test]
    fn test_wall_clock_blocks_for_quantum() {
        let mut clock = WallClock::new();
        let quantum = Duration::from_millis(5);
        let start = Instant::now();
        clock.advance(quantum);

        assert!(start.elapsed() >= quantum);
        assert_eq!(clock.elapsed(), quantum);
    }

    #[test]
    fn test_clock_kind_builds_boxed_clock() {
        let mut clock = ClockKind::Simulated.build();
        clock.advance(Duration::from_secs(2));

        assert_eq!(clock.elapsed(), Duration::from_secs(2));
    }
}
