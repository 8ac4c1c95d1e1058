// Host-side tests for the optional serde support.
// Run with `--features serde`.

#![cfg(feature = "serde")]

use glam::Vec2;
use pursuit_core::{EngineConfig, Phase, PursuitEngine, RenderSnapshot, Surface};
use std::time::Duration;

struct NullSurface;

impl Surface for NullSurface {
    fn set_native_cursor_hidden(&mut self, _hidden: bool) {}
    fn set_screen_shake(&mut self, _active: bool) {}
}

#[test]
fn config_survives_json() {
    let config = EngineConfig {
        idle_threshold: Duration::from_millis(4_500),
        trail_length: 9,
        damping: 0.25,
        drift_anchor: Vec2::new(120.0, -40.0),
        ..EngineConfig::default()
    };
    let json = serde_json::to_string(&config).expect("serialize config");
    let back: EngineConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(back, config);
    assert!(back.validate().is_ok());
}

#[test]
fn climax_snapshot_survives_json() {
    let mut e = PursuitEngine::mount(EngineConfig::default(), NullSurface, 0.0)
        .expect("default config is valid");
    let snap = e.tick(18_000.0).expect("mounted engine renders").clone();
    assert_eq!(snap.phase, Phase::Climax);

    let json = serde_json::to_string(&snap).expect("serialize snapshot");
    assert!(json.contains("\"Climax\""));
    let back: RenderSnapshot = serde_json::from_str(&json).expect("deserialize snapshot");
    assert_eq!(back, snap);
}
