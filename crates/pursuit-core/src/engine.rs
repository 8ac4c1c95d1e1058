//! The pursuit effect as one owned value.
//!
//! [`PursuitEngine`] holds the trail, the state machine (with its timers), the
//! frame clock and the overlay coordinator, plus the host [`Surface`] it
//! writes global effects to. Hosts feed it pointer events and call
//! [`PursuitEngine::tick`] once per displayed frame; [`PursuitEngine::teardown`]
//! (or dropping the engine) cancels every timer and restores the surface.

use crate::config::{ConfigError, EngineConfig};
use crate::motion::ambient_offset;
use crate::overlay::{directive_for, OverlayCoordinator, OverlayDirective, Surface};
use crate::scheduler::FrameClock;
use crate::state::{IdleClock, Phase, PursuitState, StateMachine, Transition};
use crate::trail::{ColorToken, FollowerStyle, LeaderPolicy, Trail};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: f64,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, timestamp_ms: f64) -> Self {
        Self { x, y, timestamp_ms }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Everything the presentation layer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSnapshot {
    pub phase: Phase,
    pub trail: Trail,
    pub directive: OverlayDirective,
    pub native_cursor_visible: bool,
    /// False while the pointer is outside the window.
    pub visible: bool,
    /// Last known pointer position, used to centre the splash.
    pub pointer: Vec2,
    pub time_ms: f64,
}

pub struct PursuitEngine<S: Surface> {
    config: EngineConfig,
    machine: StateMachine,
    trail: Trail,
    frame_clock: FrameClock,
    coordinator: OverlayCoordinator,
    surface: S,
    target: Vec2,
    pointer_inside: bool,
    snapshot: RenderSnapshot,
    transitions: Vec<Transition>,
    torn_down: bool,
}

impl<S: Surface> PursuitEngine<S> {
    pub fn mount(config: EngineConfig, surface: S, now_ms: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        let trail = Trail::offscreen(config.trail_length);
        let target = trail.leader().map(|l| l.pos).unwrap_or(Vec2::ZERO);
        let directive = directive_for(Phase::Idle);
        let snapshot = RenderSnapshot {
            phase: Phase::Idle,
            trail: trail.clone(),
            directive,
            native_cursor_visible: true,
            visible: true,
            pointer: target,
            time_ms: now_ms,
        };
        log::info!(
            "[engine] mounted trail={} idle_threshold={:?} tick={:?}",
            config.trail_length,
            config.idle_threshold,
            config.tick_interval
        );
        Ok(Self {
            machine: StateMachine::new(&config, now_ms),
            frame_clock: FrameClock::new(config.tick_interval),
            coordinator: OverlayCoordinator::new(),
            config,
            trail,
            surface,
            target,
            pointer_inside: true,
            snapshot,
            transitions: Vec::new(),
            torn_down: false,
        })
    }

    pub fn pointer_move(&mut self, sample: PointerSample) {
        if self.torn_down {
            log::debug!("[engine] pointer move after teardown ignored");
            return;
        }
        self.target = sample.pos();
        self.pointer_inside = true;
        let mut due = std::mem::take(&mut self.transitions);
        self.machine.on_pointer_move(sample.timestamp_ms, &mut due);
        let changed = !due.is_empty();
        self.apply_transitions(&mut due);
        if changed {
            // Restore the cursor now rather than on the next frame.
            let directive = directive_for(self.machine.phase());
            self.coordinator.sync(&directive, &mut self.surface);
        }
    }

    pub fn pointer_enter(&mut self) {
        if !self.torn_down {
            self.pointer_inside = true;
        }
    }

    pub fn pointer_leave(&mut self) {
        if !self.torn_down {
            self.pointer_inside = false;
        }
    }

    /// Advance one displayed frame. Returns `None` once torn down.
    pub fn tick(&mut self, now_ms: f64) -> Option<&RenderSnapshot> {
        if self.torn_down {
            return None;
        }

        let mut due = std::mem::take(&mut self.transitions);
        self.machine.poll(now_ms, &mut due);
        self.apply_transitions(&mut due);

        let phase = self.machine.phase();
        if self.frame_clock.try_step(now_ms) {
            let policy = self.leader_policy(phase, now_ms);
            let style = FollowerStyle {
                ripple: self.config.ripple,
                opacity_floor: self.config.opacity_floor,
                color: if phase.is_escalated() {
                    ColorToken::Blood
                } else {
                    ColorToken::Shade
                },
            };
            self.trail.advance(&policy, &style, now_ms);
        }

        let directive = directive_for(phase);
        self.coordinator.sync(&directive, &mut self.surface);

        let snap = &mut self.snapshot;
        snap.phase = phase;
        snap.trail.clone_from(&self.trail);
        snap.directive = directive;
        snap.native_cursor_visible = !directive.native_cursor_suppressed;
        snap.visible = self.pointer_inside;
        snap.pointer = self.target;
        snap.time_ms = now_ms;
        Some(&self.snapshot)
    }

    /// Cancel every timer and restore the surface. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.torn_down {
            // Re-assert defaults in case the host was touched since.
            self.coordinator.restore(&mut self.surface);
            return;
        }
        self.torn_down = true;
        let cancelled = self.machine.shutdown();
        self.coordinator.restore(&mut self.surface);
        let directive = directive_for(Phase::Idle);
        self.snapshot.phase = Phase::Idle;
        self.snapshot.directive = directive;
        self.snapshot.native_cursor_visible = !directive.native_cursor_suppressed;
        log::info!("[engine] torn down, {} timers cancelled", cancelled);
    }

    fn leader_policy(&self, phase: Phase, now_ms: f64) -> LeaderPolicy {
        match phase {
            Phase::Idle | Phase::Alerting => LeaderPolicy::Drift {
                anchor: self.config.drift_anchor,
                ambient: ambient_offset(now_ms),
                damping: self.config.damping,
            },
            Phase::Hunting => LeaderPolicy::Chase {
                target: self.target,
                speed: self.config.hunting_speed,
                wobble: self.config.hunt_wobble,
            },
            Phase::Climax | Phase::Recovery => LeaderPolicy::Hold,
        }
    }

    /// Run side effects for `due` and hand its buffer back for reuse.
    fn apply_transitions(&mut self, due: &mut Vec<Transition>) {
        for t in due.drain(..) {
            self.on_transition(t);
        }
        self.transitions = std::mem::take(due);
    }

    fn on_transition(&mut self, t: Transition) {
        if t.from == Phase::Recovery && t.to == Phase::Idle {
            self.trail.reset_leader();
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    pub fn state(&self) -> &PursuitState {
        self.machine.state()
    }

    pub fn idle_clock(&self) -> &IdleClock {
        self.machine.clock()
    }

    pub fn pending_timers(&self) -> usize {
        self.machine.pending_timers()
    }

    pub fn climax_deadline_ms(&self) -> Option<f64> {
        self.machine.climax_deadline_ms()
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn snapshot(&self) -> &RenderSnapshot {
        &self.snapshot
    }

    pub fn frame_clock(&self) -> &FrameClock {
        &self.frame_clock
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl<S: Surface> Drop for PursuitEngine<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
