// Host-side checks on the default tuning values and their relationships.

use pursuit_core::constants::*;
use pursuit_core::EngineConfig;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_have_logical_relationships() {
    // The chase has to start before the takeover.
    assert!(ALERT_WINDUP_MS < CLIMAX_DWELL_MS);
    // Trail updates are much finer than any state timing.
    assert!(TICK_INTERVAL_MS * 10 < ALERT_WINDUP_MS);
    assert!(RECOVERY_DISPLAY_MS < IDLE_THRESHOLD_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_bounds_are_consistent() {
    assert!(MIN_TRAIL_LENGTH >= 2);
    assert!((MIN_TRAIL_LENGTH..=MAX_TRAIL_LENGTH).contains(&TRAIL_LENGTH));
    assert!(FOLLOWER_OPACITY_BASE > OPACITY_FLOOR);
    assert!(FOLLOWER_SCALE_FLOOR > 0.0 && FOLLOWER_SCALE_FLOOR < 1.0);
    assert!(ARRIVAL_RADIUS < HUNTING_SPEED);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tint_intensities_are_normalised() {
    assert!(PULSE_TINT_INTENSITY > 0.0 && PULSE_TINT_INTENSITY < TAKEOVER_TINT_INTENSITY);
    assert!(TAKEOVER_TINT_INTENSITY <= 1.0);
}

#[test]
fn default_config_is_valid() {
    assert_eq!(EngineConfig::default().validate(), Ok(()));
}
