//! Idle/pursuit state machine.
//!
//! Each state that waits on a timer carries the handle of that timer, so a
//! state and its pending deadlines cannot disagree. Transitions are driven
//! only by elapsed time (polled from the engine tick) and pointer movement.

use crate::config::{duration_ms, EngineConfig};
use crate::timers::{TimerId, TimerQueue};
use std::fmt;

/// Field-less view of [`PursuitState`], used for mapping and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Idle,
    Alerting,
    Hunting,
    Climax,
    Recovery,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Alerting => "alerting",
            Phase::Hunting => "hunting",
            Phase::Climax => "climax",
            Phase::Recovery => "recovery",
        }
    }

    /// True while the creature is pursuing (native cursor hidden).
    pub fn is_escalated(self) -> bool {
        matches!(self, Phase::Alerting | Phase::Hunting | Phase::Climax)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PursuitState {
    Idle,
    Alerting {
        entered_ms: f64,
        hunt_timer: Option<TimerId>,
        climax_timer: TimerId,
    },
    Hunting {
        entered_ms: f64,
        climax_timer: TimerId,
    },
    Climax {
        entered_ms: f64,
    },
    Recovery {
        entered_ms: f64,
        idle_timer: TimerId,
    },
}

impl PursuitState {
    pub fn phase(&self) -> Phase {
        match self {
            PursuitState::Idle => Phase::Idle,
            PursuitState::Alerting { .. } => Phase::Alerting,
            PursuitState::Hunting { .. } => Phase::Hunting,
            PursuitState::Climax { .. } => Phase::Climax,
            PursuitState::Recovery { .. } => Phase::Recovery,
        }
    }

    pub fn entered_ms(&self) -> Option<f64> {
        match *self {
            PursuitState::Idle => None,
            PursuitState::Alerting { entered_ms, .. }
            | PursuitState::Hunting { entered_ms, .. }
            | PursuitState::Climax { entered_ms }
            | PursuitState::Recovery { entered_ms, .. } => Some(entered_ms),
        }
    }

    fn timers(&self) -> impl Iterator<Item = TimerId> {
        let ids: [Option<TimerId>; 2] = match *self {
            PursuitState::Idle | PursuitState::Climax { .. } => [None, None],
            PursuitState::Alerting {
                hunt_timer,
                climax_timer,
                ..
            } => [hunt_timer, Some(climax_timer)],
            PursuitState::Hunting { climax_timer, .. } => [Some(climax_timer), None],
            PursuitState::Recovery { idle_timer, .. } => [Some(idle_timer), None],
        };
        ids.into_iter().flatten()
    }
}

/// Time of the most recent pointer movement.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdleClock {
    last_pointer_move_ms: f64,
}

impl IdleClock {
    pub fn new(now_ms: f64) -> Self {
        Self {
            last_pointer_move_ms: now_ms,
        }
    }

    #[inline]
    pub fn last_pointer_move_ms(&self) -> f64 {
        self.last_pointer_move_ms
    }

    #[inline]
    pub fn idle_for(&self, now_ms: f64) -> f64 {
        (now_ms - self.last_pointer_move_ms).max(0.0)
    }

    fn record(&mut self, now_ms: f64) {
        // Events can arrive with a timestamp older than one already seen.
        self.last_pointer_move_ms = self.last_pointer_move_ms.max(now_ms);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    BeginHunt,
    Climax,
    EndRecovery,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,
    pub at_ms: f64,
}

#[derive(Clone, Copy, Debug)]
struct Timings {
    idle_threshold_ms: f64,
    alert_windup_ms: f64,
    climax_dwell_ms: f64,
    recovery_display_ms: f64,
}

#[derive(Debug)]
pub struct StateMachine {
    state: PursuitState,
    clock: IdleClock,
    timers: TimerQueue<TimerKind>,
    timings: Timings,
    /// When the current (or most recent) Idle period began. Alerting is
    /// never backdated before it.
    idle_since_ms: f64,
}

impl StateMachine {
    pub fn new(config: &EngineConfig, now_ms: f64) -> Self {
        Self {
            state: PursuitState::Idle,
            clock: IdleClock::new(now_ms),
            timers: TimerQueue::new(),
            timings: Timings {
                idle_threshold_ms: duration_ms(config.idle_threshold),
                alert_windup_ms: duration_ms(config.alert_windup),
                climax_dwell_ms: duration_ms(config.climax_dwell),
                recovery_display_ms: duration_ms(config.recovery_display),
            },
            idle_since_ms: now_ms,
        }
    }

    #[inline]
    pub fn state(&self) -> &PursuitState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[inline]
    pub fn clock(&self) -> &IdleClock {
        &self.clock
    }

    #[inline]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Deadline of the pending Climax timer, if one is scheduled.
    pub fn climax_deadline_ms(&self) -> Option<f64> {
        match self.state {
            PursuitState::Alerting { climax_timer, .. }
            | PursuitState::Hunting { climax_timer, .. } => self.timers.deadline(climax_timer),
            _ => None,
        }
    }

    /// Record pointer movement. Any escalated state drops straight into
    /// Recovery; Idle and Recovery only refresh the clock.
    ///
    /// Transitions already due at `now_ms` are applied first, so a move that
    /// lands between frames sees the same state a tick at `now_ms` would.
    /// Every transition taken is pushed to `out` in time order.
    pub fn on_pointer_move(&mut self, now_ms: f64, out: &mut Vec<Transition>) {
        self.poll(now_ms, out);
        self.clock.record(now_ms);
        if !self.state.phase().is_escalated() {
            return;
        }
        self.cancel_state_timers();
        let idle_timer = self.timers.schedule(
            now_ms + self.timings.recovery_display_ms,
            TimerKind::EndRecovery,
        );
        out.push(self.enter(
            PursuitState::Recovery {
                entered_ms: now_ms,
                idle_timer,
            },
            now_ms,
        ));
    }

    /// Apply every transition that is due at `now_ms`, in time order.
    pub fn poll(&mut self, now_ms: f64, out: &mut Vec<Transition>) {
        while let Some(t) = self.step(now_ms) {
            out.push(t);
        }
    }

    /// Cancel everything and return to Idle. Returns how many timers were
    /// still pending.
    pub fn shutdown(&mut self) -> usize {
        let cancelled = self.timers.cancel_all();
        if cancelled > 0 {
            log::debug!("[timers] cancelled {} pending on shutdown", cancelled);
        }
        self.state = PursuitState::Idle;
        cancelled
    }

    fn step(&mut self, now_ms: f64) -> Option<Transition> {
        if let PursuitState::Idle = self.state {
            let crossing = (self.clock.last_pointer_move_ms() + self.timings.idle_threshold_ms)
                .max(self.idle_since_ms);
            if crossing <= now_ms {
                return Some(self.begin_alert(crossing));
            }
        }

        let (id, kind, deadline) = self.timers.pop_due(now_ms)?;
        let next = match (self.state, kind) {
            (
                PursuitState::Alerting {
                    hunt_timer: Some(h),
                    climax_timer,
                    ..
                },
                TimerKind::BeginHunt,
            ) if h == id => PursuitState::Hunting {
                entered_ms: deadline,
                climax_timer,
            },
            (PursuitState::Alerting { climax_timer, .. }, TimerKind::Climax)
            | (PursuitState::Hunting { climax_timer, .. }, TimerKind::Climax)
                if climax_timer == id =>
            {
                self.cancel_state_timers();
                PursuitState::Climax {
                    entered_ms: deadline,
                }
            }
            (PursuitState::Recovery { idle_timer, .. }, TimerKind::EndRecovery)
                if idle_timer == id =>
            {
                self.idle_since_ms = deadline;
                PursuitState::Idle
            }
            (state, kind) => {
                // Every exit cancels its timers, so this means a bookkeeping bug.
                log::warn!(
                    "[timers] dropping stale {:?} timer in state {}",
                    kind,
                    state.phase()
                );
                return self.step(now_ms);
            }
        };
        Some(self.enter(next, deadline))
    }

    fn begin_alert(&mut self, at_ms: f64) -> Transition {
        let t = self.timings;
        let climax_timer = self
            .timers
            .schedule(at_ms + t.climax_dwell_ms, TimerKind::Climax);
        // Skip the chase entirely when the windup outlasts the dwell.
        let hunt_timer = (t.alert_windup_ms < t.climax_dwell_ms)
            .then(|| self.timers.schedule(at_ms + t.alert_windup_ms, TimerKind::BeginHunt));
        self.enter(
            PursuitState::Alerting {
                entered_ms: at_ms,
                hunt_timer,
                climax_timer,
            },
            at_ms,
        )
    }

    fn cancel_state_timers(&mut self) {
        for id in self.state.timers() {
            if self.timers.cancel(id) {
                log::debug!("[timers] cancelled {:?}", id);
            }
        }
    }

    fn enter(&mut self, next: PursuitState, at_ms: f64) -> Transition {
        let from = self.state.phase();
        self.state = next;
        let transition = Transition {
            from,
            to: next.phase(),
            at_ms,
        };
        log::info!(
            "[pursuit] {} -> {} at {:.0}ms",
            transition.from,
            transition.to,
            at_ms
        );
        transition
    }
}
