use crate::config::duration_ms;
use std::time::Duration;

/// Rate limiter for trail recomputation.
///
/// The host calls the engine once per displayed frame; the clock decides which
/// of those frames also advance the trail so motion speed does not depend on
/// the refresh rate or on how often pointer events arrive.
#[derive(Clone, Debug)]
pub struct FrameClock {
    interval_ms: f64,
    last_step_ms: Option<f64>,
    frames: u64,
    steps: u64,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval_ms: duration_ms(interval),
            last_step_ms: None,
            frames: 0,
            steps: 0,
        }
    }

    /// Count a frame and report whether it should advance the trail.
    /// The first frame always steps.
    pub fn try_step(&mut self, now_ms: f64) -> bool {
        self.frames += 1;
        let due = match self.last_step_ms {
            None => true,
            Some(last) => now_ms - last >= self.interval_ms,
        };
        if due {
            self.last_step_ms = Some(now_ms);
            self.steps += 1;
        }
        due
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn last_step_ms(&self) -> Option<f64> {
        self.last_step_ms
    }
}
