//! Frame timing for the host loop. The animation core itself never reads the
//! clock; the loop ticks this once per iteration and feeds the returned delta
//! into `AnimationController::update`.

use std::time::Instant;

/// Tracks per-tick delta time and total elapsed time.
pub struct Timer {
    start: Instant,
    last_tick: Instant,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame_count: 0,
        }
    }

    /// Advances the timer and returns the seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.frame_count += 1;
        dt
    }

    /// Seconds since the timer was created.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Number of ticks so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
