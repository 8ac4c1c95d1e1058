//! Replays a scripted pointer timeline against the engine at a fixed frame
//! step and logs what a browser would have shown. Handy for checking timings
//! without a page: `RUST_LOG=debug cargo run -p pursuit-native`.

use anyhow::bail;
use glam::Vec2;
use pursuit_core::{EngineConfig, Phase, PointerSample, PursuitEngine, Surface};

const FRAME_MS: f64 = 16.0;
const ACTIVE_UNTIL_MS: f64 = 4_000.0;
const MOVE_EVERY_MS: f64 = 400.0;
const RETURN_AT_MS: f64 = 24_000.0;
const END_MS: f64 = 29_000.0;

#[derive(Debug, Default)]
struct LogSurface {
    cursor_hidden: bool,
    shake: bool,
}

impl Surface for LogSurface {
    fn set_native_cursor_hidden(&mut self, hidden: bool) {
        log::info!("[surface] cursor {}", if hidden { "hidden" } else { "shown" });
        self.cursor_hidden = hidden;
    }

    fn set_screen_shake(&mut self, active: bool) {
        log::info!("[surface] shake {}", if active { "on" } else { "off" });
        self.shake = active;
    }
}

/// Pointer position for the scripted sweep at `t` ms.
fn sweep(t: f64) -> Vec2 {
    let a = (t * 0.002) as f32;
    Vec2::new(400.0 + 200.0 * a.cos(), 300.0 + 150.0 * a.sin())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EngineConfig::default();
    let mut engine = PursuitEngine::mount(config, LogSurface::default(), 0.0)?;

    let mut next_move = 0.0;
    let mut returned = false;
    let mut last_phase = Phase::Idle;
    let mut visits = Vec::new();
    let mut t = 0.0;
    while t <= END_MS {
        if t <= ACTIVE_UNTIL_MS && t >= next_move {
            let p = sweep(t);
            engine.pointer_move(PointerSample::new(p.x, p.y, t));
            next_move += MOVE_EVERY_MS;
        }
        if !returned && t >= RETURN_AT_MS {
            let p = sweep(t);
            engine.pointer_move(PointerSample::new(p.x, p.y, t));
            returned = true;
        }
        if let Some(snap) = engine.tick(t) {
            if snap.phase != last_phase {
                let lead = snap.trail.leader().map(|s| s.pos).unwrap_or_default();
                log::info!(
                    "[sim] t={:.0}ms {} leader=({:.1},{:.1}) message={:?}",
                    t,
                    snap.phase,
                    lead.x,
                    lead.y,
                    snap.directive.message_text()
                );
                visits.push(snap.phase);
                last_phase = snap.phase;
            }
        }
        t += FRAME_MS;
    }

    log::info!(
        "[sim] {} frames, {} trail steps, phases visited: {:?}",
        engine.frame_clock().frames(),
        engine.frame_clock().steps(),
        visits
    );

    engine.teardown();
    let surface = engine.surface();
    if surface.cursor_hidden || surface.shake {
        bail!("surface not restored after teardown: {:?}", surface);
    }
    log::info!("[sim] surface restored");
    Ok(())
}
