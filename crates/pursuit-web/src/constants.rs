// DOM ids, stacking order and sizing for the overlay nodes.

pub const ROOT_ID: &str = "pursuit-root";

// Stacking (above page content, below nothing)
pub const Z_BACKDROP: i32 = 9997;
pub const Z_CREATURE: i32 = 9998;
pub const Z_MESSAGE: i32 = 9999;

// Creature sizing (CSS px); positions are the centre so we offset by half
pub const LEADER_SIZE_PX: [f32; 2] = [60.0, 80.0];
pub const LEADER_OFFSET_PX: f32 = 25.0;
pub const FOLLOWER_SIZE_PX: f32 = 35.0;
pub const FOLLOWER_OFFSET_PX: f32 = 15.0;
pub const PERSPECTIVE_PX: f32 = 1000.0;

// Follower fill alpha falls from this base by up to FOLLOWER_ALPHA_SPAN
pub const FOLLOWER_ALPHA_BASE: f32 = 0.5;
pub const FOLLOWER_ALPHA_SPAN: f32 = 0.3;

// Backdrop decorations
pub const DRIP_COLUMNS: usize = 8;
pub const WAVE_LAYERS: usize = 5;

// Body animation applied while the screen shakes
pub const SHAKE_ANIMATION: &str = "pursuit-shake 0.3s infinite";
