#![cfg(target_arch = "wasm32")]
//! Browser front-end for the pursuit effect.
//!
//! JS mounts the effect once with `PursuitEffect.mount(options)` and calls
//! `unmount()` (or `free()`) when the page no longer wants it. Everything the
//! effect registered (frame loop, listeners, body styles, DOM nodes) is
//! released on unmount.

use anyhow::anyhow;
use glam::Vec2;
use pursuit_core::{EngineConfig, PursuitEngine};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod style;
mod surface;

use surface::DomSurface;

// The overlay covers the whole page, so only one may exist at a time.
static MOUNTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pursuit-web loaded");
    Ok(())
}

/// Tuning for [`PursuitEffect::mount`]. Unset values keep their defaults.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct EffectOptions {
    config: EngineConfig,
}

#[wasm_bindgen]
impl EffectOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> EffectOptions {
        EffectOptions::default()
    }

    pub fn set_idle_threshold_ms(&mut self, ms: u32) {
        self.config.idle_threshold = Duration::from_millis(ms.into());
    }

    pub fn set_alert_windup_ms(&mut self, ms: u32) {
        self.config.alert_windup = Duration::from_millis(ms.into());
    }

    pub fn set_climax_dwell_ms(&mut self, ms: u32) {
        self.config.climax_dwell = Duration::from_millis(ms.into());
    }

    pub fn set_recovery_display_ms(&mut self, ms: u32) {
        self.config.recovery_display = Duration::from_millis(ms.into());
    }

    pub fn set_tick_interval_ms(&mut self, ms: u32) {
        self.config.tick_interval = Duration::from_millis(ms.into());
    }

    pub fn set_trail_length(&mut self, len: u32) {
        self.config.trail_length = len as usize;
    }

    pub fn set_hunting_speed(&mut self, speed: f32) {
        self.config.hunting_speed = speed;
    }

    pub fn set_hunt_wobble(&mut self, wobble: f32) {
        self.config.hunt_wobble = wobble;
    }

    pub fn set_damping(&mut self, damping: f32) {
        self.config.damping = damping;
    }

    pub fn set_ripple(&mut self, ripple: f32) {
        self.config.ripple = ripple;
    }

    pub fn set_opacity_floor(&mut self, floor: f32) {
        self.config.opacity_floor = floor;
    }

    pub fn set_drift_anchor(&mut self, x: f32, y: f32) {
        self.config.drift_anchor = Vec2::new(x, y);
    }
}

struct Runtime {
    frame_loop: frame::AnimationLoop,
    listeners: Vec<dom::Listener>,
    engine: Rc<RefCell<PursuitEngine<DomSurface>>>,
    renderer: Rc<RefCell<render::DomRenderer>>,
}

impl Runtime {
    fn shutdown(mut self) {
        // Order matters: no frame or event may reach the engine after teardown.
        self.frame_loop.stop();
        self.listeners.clear();
        self.engine.borrow_mut().teardown();
        self.renderer.borrow_mut().remove();
    }
}

#[wasm_bindgen]
pub struct PursuitEffect {
    runtime: Option<Runtime>,
}

#[wasm_bindgen]
impl PursuitEffect {
    pub fn mount(options: Option<EffectOptions>) -> Result<PursuitEffect, JsValue> {
        if MOUNTED.swap(true, Ordering::SeqCst) {
            return Err(JsValue::from_str("pursuit effect is already mounted"));
        }
        let config = options.map(|o| o.config).unwrap_or_default();
        match mount_runtime(config) {
            Ok(runtime) => {
                log::info!("[effect] mounted");
                Ok(PursuitEffect {
                    runtime: Some(runtime),
                })
            }
            Err(e) => {
                MOUNTED.store(false, Ordering::SeqCst);
                log::error!("mount error: {:?}", e);
                Err(JsValue::from_str(&format!("{e:#}")))
            }
        }
    }

    /// Stop the effect and restore the page. Calling it again does nothing.
    pub fn unmount(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown();
            MOUNTED.store(false, Ordering::SeqCst);
            log::info!("[effect] unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.runtime.is_some()
    }

    /// Current state name, e.g. `"idle"` or `"climax"`.
    pub fn phase(&self) -> Option<String> {
        let runtime = self.runtime.as_ref()?;
        let engine = runtime.engine.try_borrow().ok()?;
        Some(engine.phase().name().to_string())
    }
}

impl Drop for PursuitEffect {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn mount_runtime(config: EngineConfig) -> anyhow::Result<Runtime> {
    let (window, document) = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;

    let clock = frame::Clock::start();
    let trail_len = config.trail_length;
    let engine = PursuitEngine::mount(config, DomSurface::new(body.clone()), clock.now_ms())?;
    let engine = Rc::new(RefCell::new(engine));
    let renderer = Rc::new(RefCell::new(render::DomRenderer::new(
        &document, &body, trail_len,
    )?));

    let listeners = events::wire_pointer_handlers(
        &events::PointerWiring {
            engine: engine.clone(),
            clock,
        },
        &window,
        &document,
    )?;

    let engine_tick = engine.clone();
    let renderer_tick = renderer.clone();
    let frame_loop = frame::AnimationLoop::start(move || {
        let Ok(mut engine) = engine_tick.try_borrow_mut() else {
            return;
        };
        if let Some(snap) = engine.tick(clock.now_ms()) {
            renderer_tick.borrow_mut().draw(snap);
        }
    })?;

    Ok(Runtime {
        frame_loop,
        listeners,
        engine,
        renderer,
    })
}
