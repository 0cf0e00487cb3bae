/*
 * Fixed Timestep Module
 *
 * The swarm ticks at a fixed rate regardless of how fast frames are drawn.
 * Elapsed real time accumulates and is paid out in whole ticks; each tick
 * advances the simulated frame clock by exactly one step, so the clock the
 * noise field sees is monotonic and independent of rendering hiccups.
 */

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
    max_ticks: u32,
    simulated_ms: f64,
}

impl FixedTimestep {
    pub fn new(ticks_per_second: f32, max_ticks: u32) -> Self {
        Self {
            step: Duration::from_secs_f64(1.0 / f64::from(ticks_per_second)),
            accumulator: Duration::ZERO,
            max_ticks,
            simulated_ms: 0.0,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Frame clock in milliseconds of simulated time.
    pub fn simulated_ms(&self) -> f64 {
        self.simulated_ms
    }

    /// Add real elapsed time and return how many ticks are due.
    ///
    /// At most `max_ticks` are paid out per call. Anything beyond that is
    /// dropped so a long stall can't trigger a burst of catch-up ticks.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_ticks {
            self.accumulator -= self.step;
            ticks += 1;
        }

        if ticks == self.max_ticks && self.accumulator >= self.step {
            tracing::debug!(
                dropped_ms = self.accumulator.as_secs_f64() * 1000.0,
                "Simulation fell behind, dropping time"
            );
            self.accumulator = Duration::ZERO;
        }

        ticks
    }

    /// Move the frame clock forward by one tick and return the new time.
    pub fn tick(&mut self) -> f64 {
        self.simulated_ms += self.step.as_secs_f64() * 1000.0;
        self.simulated_ms
    }

    /// Throw away accumulated time, used while paused.
    pub fn reset_accumulator(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pays_out_whole_ticks_and_keeps_remainder() {
        let mut clock = FixedTimestep::new(100.0, 4);

        assert_eq!(clock.advance(Duration::from_millis(25)), 2);
        // 5ms carried over, another 5ms completes a tick
        assert_eq!(clock.advance(Duration::from_millis(5)), 1);
        assert_eq!(clock.advance(Duration::from_millis(3)), 0);
    }

    #[test]
    fn long_stalls_are_capped() {
        let mut clock = FixedTimestep::new(60.0, 4);

        assert_eq!(clock.advance(Duration::from_secs(2)), 4);
        // The backlog was dropped rather than replayed
        assert_eq!(clock.advance(Duration::ZERO), 0);
    }

    #[test]
    fn frame_clock_is_monotonic() {
        let mut clock = FixedTimestep::new(50.0, 4);

        let first = clock.tick();
        let second = clock.tick();
        assert!((first - 20.0).abs() < 1e-6);
        assert!(second > first);
        assert_eq!(clock.simulated_ms(), second);
    }
}
