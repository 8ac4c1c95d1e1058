//! Ambient "breathing" motion for the creature while it is not chasing.
//!
//! The offset is a pure function of wall-clock time, so switching leader
//! policies never makes it jump: every state evaluates it on the same basis.

use crate::constants::{DRIFT_DEPTH, DRIFT_ROTATION_DEG, DRIFT_X, DRIFT_Y};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmbientOffset {
    pub offset: Vec2,
    pub rotation_deg: f32,
    pub depth_z: f32,
}

/// Sample the ambient motion at `time_ms`.
pub fn ambient_offset(time_ms: f64) -> AmbientOffset {
    let t = time_ms * 0.001;
    AmbientOffset {
        offset: Vec2::new(
            ((t * 0.5).sin() as f32) * DRIFT_X,
            ((t * 0.3).cos() as f32) * DRIFT_Y,
        ),
        rotation_deg: (t.sin() as f32) * DRIFT_ROTATION_DEG,
        depth_z: ((t * 0.7).sin() as f32) * DRIFT_DEPTH,
    }
}
