use crate::core::config::CadenceConfig;

/// Converts variable frame time into a whole number of logical ticks.
///
/// The engine itself has no notion of seconds; it advances one fixed step per
/// `PoolMatch::tick`. Frame-driven callers use this to keep that cadence stable.
pub struct FixedTimestep {
    /// Wall-clock seconds per tick.
    dt: f64,
    /// Seconds of frame time not yet spent on ticks.
    accumulator: f64,
    max_ticks: u32,
}

impl FixedTimestep {
    pub fn new(dt: f64, max_ticks: u32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_ticks: max_ticks.max(1),
        }
    }

    pub fn from_config(cadence: &CadenceConfig) -> Self {
        Self::new(1.0 / cadence.ticks_per_second, cadence.max_ticks_per_frame)
    }

    /// Add frame time and return how many ticks to run now.
    /// Anything beyond `max_ticks` ticks is dropped rather than replayed later.
    pub fn accumulate(&mut self, frame_dt: f64) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }
        let due = (self.accumulator / self.dt).floor();
        if due >= f64::from(self.max_ticks) {
            self.accumulator = 0.0;
            return self.max_ticks;
        }
        let steps = due as u32;
        self.accumulator -= f64::from(steps) * self.dt;
        steps
    }

    /// Drop any accumulated time, so a fresh rack starts on a tick boundary.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
