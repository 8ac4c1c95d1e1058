// Shared tuning constants for the pursuit effect. Defaults for the configurable
// values live here too so hosts and tests can refer to them by name.

// Timing (milliseconds)
pub const IDLE_THRESHOLD_MS: u64 = 15_000; // pointer stillness before the alert begins
pub const ALERT_WINDUP_MS: u64 = 2_000; // alert animation before the creature starts chasing
pub const CLIMAX_DWELL_MS: u64 = 3_000; // measured from Alerting entry
pub const RECOVERY_DISPLAY_MS: u64 = 3_000; // how long the welcome-back message stays up
pub const TICK_INTERVAL_MS: u64 = 50; // minimum spacing between trail recomputations

// Trail
pub const TRAIL_LENGTH: usize = 15;
pub const MIN_TRAIL_LENGTH: usize = 2; // leader plus at least one follower
pub const MAX_TRAIL_LENGTH: usize = 64;
pub const OFFSCREEN_ORIGIN: [f32; 2] = [-100.0, -100.0]; // where the creature hides before it appears

// Leader motion
pub const HUNTING_SPEED: f32 = 20.0; // units per tick
pub const HUNT_WOBBLE: f32 = 30.0; // lateral wobble amplitude while chasing
pub const DAMPING: f32 = 0.02; // fraction of the remaining distance covered per tick
pub const ARRIVAL_RADIUS: f32 = 5.0; // leader stops chasing inside this distance

// Followers
pub const RIPPLE: f32 = 5.0; // per-index positional perturbation
pub const FOLLOWER_ROTATION_JITTER_DEG: f32 = 5.0;
pub const FOLLOWER_DEPTH_STEP: f32 = 20.0;
pub const FOLLOWER_SCALE_FALLOFF: f32 = 0.3;
pub const FOLLOWER_SCALE_FLOOR: f32 = 0.7;
pub const FOLLOWER_OPACITY_BASE: f32 = 0.3;
pub const FOLLOWER_OPACITY_FALLOFF: f32 = 0.2;
pub const OPACITY_FLOOR: f32 = 0.1;

// Leader appearance
pub const LEADER_IDLE_SCALE: f32 = 1.0;
pub const LEADER_IDLE_OPACITY: f32 = 0.3;
pub const LEADER_HUNT_SCALE: f32 = 1.5;
pub const LEADER_HUNT_SCALE_PULSE: f32 = 0.2;
pub const LEADER_HUNT_OPACITY: f32 = 0.8;
pub const LEADER_HUNT_ROTATION_SWAY_DEG: f32 = 20.0;
pub const LEADER_HUNT_DEPTH: f32 = 40.0;

// Ambient drift amplitudes
pub const DRIFT_X: f32 = 30.0;
pub const DRIFT_Y: f32 = 20.0;
pub const DRIFT_ROTATION_DEG: f32 = 10.0;
pub const DRIFT_DEPTH: f32 = 20.0;

// Overlay palette
pub const BLOOD_RGB: [u8; 3] = [139, 0, 0]; // darkred
pub const SHADE_RGB: [u8; 3] = [30, 30, 40];
pub const EMBER_RGB: [u8; 3] = [40, 0, 0];
pub const PULSE_TINT_INTENSITY: f32 = 0.2;
pub const TAKEOVER_TINT_INTENSITY: f32 = 1.0;

// Messages
pub const DOOM_TEXT: &str = "YOUR SOUL IS MINE!";
pub const RECOVERY_TEXT: &str = "Welcome Back to Earth";
pub const RECOVERY_SUBTITLE: &str = "You escaped the reaper... for now";
