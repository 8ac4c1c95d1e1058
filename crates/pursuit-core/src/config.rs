//! Engine configuration.
//!
//! Every option tunes a single threshold or speed; none of them changes which
//! transitions exist. Use [`EngineConfig::validate`] (called by
//! [`crate::PursuitEngine::mount`]) to reject values the engine cannot run with.

use crate::constants::*;
use glam::Vec2;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("trail length {0} is outside 2..=64")]
    TrailLength(usize),
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
    #[error("damping {0} must be within (0, 1]")]
    Damping(f32),
    #[error("{name} must be finite and non-negative, got {value}")]
    NegativeOrNan { name: &'static str, value: f32 },
    #[error("opacity floor {0} must be within [0, 1]")]
    OpacityFloor(f32),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    pub idle_threshold: Duration,
    pub alert_windup: Duration,
    pub climax_dwell: Duration,
    pub recovery_display: Duration,
    pub tick_interval: Duration,
    pub trail_length: usize,
    pub hunting_speed: f32,
    pub hunt_wobble: f32,
    pub damping: f32,
    pub ripple: f32,
    pub opacity_floor: f32,
    /// Centre of the ambient drift while the creature is not chasing.
    pub drift_anchor: Vec2,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            idle_threshold: Duration::from_millis(IDLE_THRESHOLD_MS),
            alert_windup: Duration::from_millis(ALERT_WINDUP_MS),
            climax_dwell: Duration::from_millis(CLIMAX_DWELL_MS),
            recovery_display: Duration::from_millis(RECOVERY_DISPLAY_MS),
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            trail_length: TRAIL_LENGTH,
            hunting_speed: HUNTING_SPEED,
            hunt_wobble: HUNT_WOBBLE,
            damping: DAMPING,
            ripple: RIPPLE,
            opacity_floor: OPACITY_FLOOR,
            drift_anchor: Vec2::ZERO,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TRAIL_LENGTH..=MAX_TRAIL_LENGTH).contains(&self.trail_length) {
            return Err(ConfigError::TrailLength(self.trail_length));
        }
        for (name, d) in [
            ("idle threshold", self.idle_threshold),
            ("climax dwell", self.climax_dwell),
            ("recovery display", self.recovery_display),
            ("tick interval", self.tick_interval),
        ] {
            if d.is_zero() {
                return Err(ConfigError::ZeroDuration(name));
            }
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::Damping(self.damping));
        }
        for (name, value) in [
            ("hunting speed", self.hunting_speed),
            ("hunt wobble", self.hunt_wobble),
            ("ripple", self.ripple),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeOrNan { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.opacity_floor) {
            return Err(ConfigError::OpacityFloor(self.opacity_floor));
        }
        Ok(())
    }
}

#[inline]
pub(crate) fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
