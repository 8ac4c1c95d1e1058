// Inline style strings for the overlay nodes. Pure functions of the render
// snapshot so they can be checked on the host.

use crate::constants::*;
use glam::Vec2;
use pursuit_core::{Backdrop, ChainSegment, Message, OverlayDirective};

pub const KEYFRAMES_CSS: &str = r#"
@keyframes pursuit-shake {
  0% { transform: translate(0, 0) rotate(0deg); }
  25% { transform: translate(-15px, -15px) rotate(-1deg); }
  50% { transform: translate(15px, 15px) rotate(1deg); }
  75% { transform: translate(-15px, 15px) rotate(-0.5deg); }
  100% { transform: translate(15px, -15px) rotate(0.5deg); }
}
@keyframes pursuit-pulse {
  0%, 100% { opacity: 0.6; }
  50% { opacity: 1; }
}
@keyframes pursuit-flood {
  0% { transform: scale(1); opacity: 0; filter: blur(2px); }
  20% { transform: scale(1.1); opacity: 0.9; filter: blur(4px); }
  100% { transform: scale(1.05); opacity: 1; filter: blur(8px); }
}
@keyframes pursuit-wave {
  0% { transform: translateY(-100%) rotate(0deg); }
  100% { transform: translateY(0%) rotate(1deg); }
}
@keyframes pursuit-drip {
  0% { transform: scaleY(0); opacity: 0.8; }
  100% { transform: scaleY(1); opacity: 1; }
}
@keyframes pursuit-message {
  0% { transform: translateY(-50px); opacity: 0; filter: blur(10px); }
  50% { transform: translateY(0); opacity: 1; filter: blur(0px); }
  100% { transform: translateY(50px); opacity: 0; filter: blur(10px); }
}
"#;

const HIDDEN: &str = "display:none";
const FIXED_FULL: &str = "position:fixed;top:0;left:0;right:0;bottom:0;pointer-events:none";

#[inline]
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        rgb[0],
        rgb[1],
        rgb[2],
        alpha.clamp(0.0, 1.0)
    )
}

/// Alpha of follower `index` in a trail of `len` segments.
#[inline]
pub fn follower_alpha(index: usize, len: usize) -> f32 {
    let falloff = index as f32 / len.max(1) as f32;
    FOLLOWER_ALPHA_BASE - falloff * FOLLOWER_ALPHA_SPAN
}

pub fn segment_style(seg: &ChainSegment, index: usize, len: usize, visible: bool) -> String {
    if !visible {
        return HIDDEN.to_string();
    }
    let (offset, size) = if index == 0 {
        (LEADER_OFFSET_PX, LEADER_SIZE_PX)
    } else {
        (FOLLOWER_OFFSET_PX, [FOLLOWER_SIZE_PX; 2])
    };
    let fill = if index == 0 {
        // The leader's body colour is drawn by its children.
        "transparent".to_string()
    } else {
        rgba(seg.color.rgb(), follower_alpha(index, len))
    };
    format!(
        "position:fixed;top:0;left:0;pointer-events:none;z-index:{z};\
         width:{w}px;height:{h}px;border-radius:{radius};background:{fill};\
         opacity:{opacity:.3};transform-style:preserve-3d;\
         transform:perspective({p}px) translate3d({x:.2}px, {y:.2}px, {depth:.2}px) rotate({rot:.2}deg) scale({scale:.3})",
        z = Z_CREATURE,
        w = size[0],
        h = size[1],
        radius = if index == 0 { "45% 45% 0 0" } else { "40%" },
        fill = fill,
        opacity = seg.opacity,
        p = PERSPECTIVE_PX,
        x = seg.pos.x - offset,
        y = seg.pos.y - offset,
        depth = seg.depth_z,
        rot = seg.rotation_deg,
        scale = seg.scale,
    )
}

/// Base tint layer. The pulse is centred on the pointer.
pub fn backdrop_style(d: &OverlayDirective, pointer: Vec2) -> String {
    match d.backdrop {
        Backdrop::Clear => HIDDEN.to_string(),
        Backdrop::Pulse => format!(
            "{full};z-index:{z};background:radial-gradient(circle at {x:.0}px {y:.0}px, {inner}, {outer});\
             animation:pursuit-pulse 3s infinite;transition:all 0.5s ease-out",
            full = FIXED_FULL,
            z = Z_BACKDROP,
            x = pointer.x,
            y = pointer.y,
            inner = rgba(d.tint.rgb, d.tint.intensity * 4.0),
            outer = rgba(d.tint.rgb, d.tint.intensity),
        ),
        Backdrop::Takeover => format!(
            "{full};z-index:{z};background:{bg};animation:pursuit-flood 2s forwards",
            full = FIXED_FULL,
            z = Z_BACKDROP,
            bg = rgba(d.tint.rgb, d.tint.intensity),
        ),
    }
}

/// One of the dripping columns shown while the creature closes in.
pub fn drip_style(index: usize, d: &OverlayDirective) -> String {
    if d.backdrop != Backdrop::Pulse {
        return HIDDEN.to_string();
    }
    let width = 100.0 / DRIP_COLUMNS as f32;
    format!(
        "position:fixed;top:0;left:{left:.1}%;width:{width:.1}%;height:100vh;pointer-events:none;z-index:{z};\
         background:linear-gradient(180deg, {top} 0%, {bottom} 100%);transform-origin:top;\
         animation:pursuit-drip 3s infinite;animation-delay:{delay:.1}s",
        left = index as f32 * width,
        width = width,
        z = Z_BACKDROP,
        top = rgba(d.tint.rgb, 0.8),
        bottom = rgba([80, 0, 0], d.tint.intensity),
        delay = index as f32 * 0.2,
    )
}

/// One of the falling wave layers of the takeover.
pub fn wave_style(index: usize, d: &OverlayDirective) -> String {
    if d.backdrop != Backdrop::Takeover {
        return HIDDEN.to_string();
    }
    let fade = index as f32 * 0.1;
    format!(
        "position:fixed;top:0;left:0;right:0;height:200vh;pointer-events:none;z-index:{z};\
         background:linear-gradient(180deg, {a} {p0}%, {b} {p1}%, {c} 100%);filter:blur(4px);\
         animation:pursuit-wave {dur:.1}s ease-in-out infinite;animation-delay:{delay:.1}s",
        z = Z_BACKDROP + index as i32,
        a = rgba(d.tint.rgb, 0.9 - fade),
        b = rgba([80, 0, 0], 0.7 - fade),
        c = rgba([40, 0, 0], 0.5 - fade),
        p0 = index * 10,
        p1 = 50 + index * 10,
        dur = 3.0 + index as f32 * 0.5,
        delay = index as f32 * 0.2,
    )
}

pub fn message_style(d: &OverlayDirective) -> String {
    match d.message {
        None => HIDDEN.to_string(),
        Some(Message::Doom) => format!(
            "position:fixed;top:50%;left:50%;transform:translate(-50%, -50%);z-index:{z};\
             pointer-events:none;text-align:center;color:white;font-weight:bold;font-size:8rem;\
             letter-spacing:0.05em;text-shadow:0 0 30px rgba(255, 0, 0, 0.8);\
             animation:pursuit-pulse 2s infinite",
            z = Z_MESSAGE,
        ),
        Some(Message::Recovery) => format!(
            "position:fixed;top:50%;left:50%;transform:translate(-50%, -50%);z-index:{z};\
             pointer-events:none;text-align:center;color:white;font-weight:bold;font-size:4.5rem;\
             text-shadow:0 0 20px rgba(255, 255, 255, 0.5);animation:pursuit-message 3s forwards",
            z = Z_MESSAGE,
        ),
    }
}

pub fn subtitle_style(message: Option<Message>) -> String {
    match message.and_then(Message::subtitle) {
        None => HIDDEN.to_string(),
        Some(_) => "display:block;margin-top:1rem;font-size:1.5rem;font-weight:normal;color:#cbd5e0;\
                    animation:pursuit-message 3s forwards;animation-delay:0.5s"
            .to_string(),
    }
}
