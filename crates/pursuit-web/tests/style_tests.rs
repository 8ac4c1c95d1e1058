// Host-side tests for the overlay style strings.
// The web crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use constants::*;
use glam::Vec2;
use pursuit_core::{directive_for, ChainSegment, ColorToken, Phase};
use style::*;

#[test]
fn rgba_clamps_alpha() {
    assert_eq!(rgba([139, 0, 0], 0.2), "rgba(139, 0, 0, 0.200)");
    assert_eq!(rgba([1, 2, 3], 4.0), "rgba(1, 2, 3, 1.000)");
    assert_eq!(rgba([1, 2, 3], -1.0), "rgba(1, 2, 3, 0.000)");
}

#[test]
fn follower_alpha_falls_with_index() {
    let len = 15;
    let mut prev = follower_alpha(1, len);
    for i in 2..len {
        let a = follower_alpha(i, len);
        assert!(a < prev);
        assert!(a >= FOLLOWER_ALPHA_BASE - FOLLOWER_ALPHA_SPAN);
        prev = a;
    }
}

#[test]
fn segment_style_positions_by_centre_offset() {
    let seg = ChainSegment {
        pos: Vec2::new(100.0, 50.0),
        scale: 1.5,
        opacity: 0.8,
        rotation_deg: 45.0,
        depth_z: 12.0,
        color: ColorToken::Blood,
    };
    let leader = segment_style(&seg, 0, 15, true);
    assert!(leader.contains("translate3d(75.00px, 25.00px, 12.00px)"), "{leader}");
    assert!(leader.contains("rotate(45.00deg)"));
    assert!(leader.contains("scale(1.500)"));
    assert!(leader.contains("width:60px;height:80px"));

    let follower = segment_style(&seg, 3, 15, true);
    assert!(follower.contains("translate3d(85.00px, 35.00px, 12.00px)"), "{follower}");
    assert!(follower.contains(&rgba(ColorToken::Blood.rgb(), follower_alpha(3, 15))));

    assert_eq!(segment_style(&seg, 3, 15, false), "display:none");
}

#[test]
fn backdrop_layers_follow_phase() {
    let pointer = Vec2::new(320.0, 240.0);

    let idle = directive_for(Phase::Idle);
    assert_eq!(backdrop_style(&idle, pointer), "display:none");
    assert_eq!(drip_style(0, &idle), "display:none");
    assert_eq!(wave_style(0, &idle), "display:none");

    let hunting = directive_for(Phase::Hunting);
    let pulse = backdrop_style(&hunting, pointer);
    assert!(pulse.contains("circle at 320px 240px"), "{pulse}");
    assert!(pulse.contains("pursuit-pulse"));
    assert_ne!(drip_style(DRIP_COLUMNS - 1, &hunting), "display:none");
    assert_eq!(wave_style(0, &hunting), "display:none");

    let climax = directive_for(Phase::Climax);
    let flood = backdrop_style(&climax, pointer);
    assert!(flood.contains("rgba(139, 0, 0, 1.000)"), "{flood}");
    assert_eq!(drip_style(0, &climax), "display:none");
    assert!(wave_style(WAVE_LAYERS - 1, &climax).contains("pursuit-wave"));
}

#[test]
fn message_styles_are_exclusive() {
    let recovery = directive_for(Phase::Recovery);
    assert!(message_style(&recovery).contains("pursuit-message 3s"));
    assert_ne!(subtitle_style(recovery.message), "display:none");

    let climax = directive_for(Phase::Climax);
    assert!(message_style(&climax).contains("pursuit-pulse"));
    assert_eq!(subtitle_style(climax.message), "display:none");

    for phase in [Phase::Idle, Phase::Alerting, Phase::Hunting] {
        let d = directive_for(phase);
        assert_eq!(message_style(&d), "display:none");
    }
}

#[test]
fn keyframes_define_every_animation_used() {
    for name in [
        "pursuit-shake",
        "pursuit-pulse",
        "pursuit-flood",
        "pursuit-wave",
        "pursuit-drip",
        "pursuit-message",
    ] {
        assert!(
            KEYFRAMES_CSS.contains(&format!("@keyframes {name}")),
            "missing {name}"
        );
    }
    assert!(SHAKE_ANIMATION.starts_with("pursuit-shake"));
}
