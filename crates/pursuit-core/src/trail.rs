//! Leader-follower particle chain.
//!
//! Segment 0 is the creature; every other segment is a smoke particle that
//! takes the *previous* tick's value of the segment ahead of it. That one-tick
//! lag is what makes the chain trail instead of moving as a rigid rod.

use crate::constants::*;
use glam::Vec2;
use smallvec::SmallVec;

/// Colour family of a segment. The presentation layer resolves it to RGB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorToken {
    #[default]
    Shade,
    Blood,
}

impl ColorToken {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            ColorToken::Shade => SHADE_RGB,
            ColorToken::Blood => EMBER_RGB,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainSegment {
    pub pos: Vec2,
    pub scale: f32,
    pub opacity: f32,
    pub rotation_deg: f32,
    pub depth_z: f32,
    pub color: ColorToken,
}

impl ChainSegment {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            scale: LEADER_IDLE_SCALE,
            opacity: LEADER_IDLE_OPACITY,
            rotation_deg: 0.0,
            depth_z: 0.0,
            color: ColorToken::Shade,
        }
    }
}

/// How the leader moves this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LeaderPolicy {
    /// Ease toward `anchor + offset`, covering `damping` of the remaining distance.
    Drift {
        anchor: Vec2,
        ambient: crate::motion::AmbientOffset,
        damping: f32,
    },
    /// Charge the target at `speed` units per tick with a lateral wobble.
    Chase {
        target: Vec2,
        speed: f32,
        wobble: f32,
    },
    /// Leader stays put.
    Hold,
}

/// Per-tick parameters for the followers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowerStyle {
    pub ripple: f32,
    pub opacity_floor: f32,
    pub color: ColorToken,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trail {
    segments: SmallVec<[ChainSegment; 20]>,
}

impl Trail {
    /// All segments start stacked at `origin`.
    pub fn new(len: usize, origin: Vec2) -> Self {
        Self {
            segments: std::iter::repeat(ChainSegment::at(origin)).take(len).collect(),
        }
    }

    pub fn offscreen(len: usize) -> Self {
        Self::new(len, Vec2::from(OFFSCREEN_ORIGIN))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn segments(&self) -> &[ChainSegment] {
        &self.segments
    }

    #[inline]
    pub fn leader(&self) -> Option<&ChainSegment> {
        self.segments.first()
    }

    /// Send the leader back off-screen with its resting appearance.
    pub fn reset_leader(&mut self) {
        if let Some(lead) = self.segments.first_mut() {
            *lead = ChainSegment::at(Vec2::from(OFFSCREEN_ORIGIN));
        }
    }

    /// Compute the next tick. `time_ms` is wall-clock time shared by every
    /// oscillation so successive ticks stay continuous.
    pub fn advance(&mut self, policy: &LeaderPolicy, style: &FollowerStyle, time_ms: f64) {
        let n = self.segments.len();
        if n == 0 {
            return;
        }
        let previous = self.segments.clone();
        self.segments[0] = next_leader(&previous[0], policy, time_ms);

        let t = time_ms * 0.001;
        for i in 1..n {
            let ahead = &previous[i - 1];
            let phase = (t + i as f64) * 0.5;
            let falloff = i as f32 / n as f32;
            self.segments[i] = ChainSegment {
                pos: ahead.pos
                    + Vec2::new(phase.sin() as f32, phase.cos() as f32) * style.ripple,
                scale: (1.0 - falloff * FOLLOWER_SCALE_FALLOFF).max(FOLLOWER_SCALE_FLOOR),
                opacity: (FOLLOWER_OPACITY_BASE - falloff * FOLLOWER_OPACITY_FALLOFF)
                    .max(style.opacity_floor),
                rotation_deg: ahead.rotation_deg
                    + ((t + i as f64).sin() as f32) * FOLLOWER_ROTATION_JITTER_DEG,
                depth_z: ahead.depth_z + (phase.sin() as f32) * FOLLOWER_DEPTH_STEP,
                color: style.color,
            };
        }
    }
}

fn next_leader(lead: &ChainSegment, policy: &LeaderPolicy, time_ms: f64) -> ChainSegment {
    match *policy {
        LeaderPolicy::Drift {
            anchor,
            ambient,
            damping,
        } => {
            let goal = anchor + ambient.offset;
            ChainSegment {
                pos: lead.pos + (goal - lead.pos) * damping,
                scale: LEADER_IDLE_SCALE,
                opacity: LEADER_IDLE_OPACITY,
                rotation_deg: ambient.rotation_deg,
                depth_z: ambient.depth_z,
                color: ColorToken::Shade,
            }
        }
        LeaderPolicy::Chase {
            target,
            speed,
            wobble,
        } => {
            let to_target = target - lead.pos;
            let distance = to_target.length();
            if distance <= ARRIVAL_RADIUS {
                return *lead;
            }
            let dir = to_target / distance;
            let step = speed.min(distance);
            let sway = (time_ms * 0.01).sin() as f32;
            let lateral = dir.perp() * sway * wobble;
            let heading_deg = dir.y.atan2(dir.x).to_degrees();
            ChainSegment {
                pos: lead.pos + dir * step + lateral,
                scale: LEADER_HUNT_SCALE + ((time_ms * 0.005).sin() as f32) * LEADER_HUNT_SCALE_PULSE,
                opacity: LEADER_HUNT_OPACITY,
                rotation_deg: heading_deg + sway * LEADER_HUNT_ROTATION_SWAY_DEG,
                depth_z: ((time_ms * 0.003).sin() as f32) * LEADER_HUNT_DEPTH,
                color: ColorToken::Blood,
            }
        }
        LeaderPolicy::Hold => *lead,
    }
}
