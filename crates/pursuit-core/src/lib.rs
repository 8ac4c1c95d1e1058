//! Idle-triggered pursuit effect.
//!
//! A creature and its smoke trail drift near the pointer. When the pointer
//! stays still long enough the creature alerts, hunts the pointer and finally
//! floods the screen; moving the pointer again recovers. This crate holds the
//! platform-free parts; front-ends supply a [`Surface`] and call
//! [`PursuitEngine::tick`] every frame.

pub mod config;
pub mod constants;
pub mod engine;
pub mod motion;
pub mod overlay;
pub mod scheduler;
pub mod state;
pub mod timers;
pub mod trail;

pub use config::{ConfigError, EngineConfig};
pub use engine::{PointerSample, PursuitEngine, RenderSnapshot};
pub use motion::{ambient_offset, AmbientOffset};
pub use overlay::{
    directive_for, Backdrop, GlobalEffects, Message, OverlayCoordinator, OverlayDirective,
    Surface, Tint,
};
pub use scheduler::FrameClock;
pub use state::{IdleClock, Phase, PursuitState, StateMachine, TimerKind, Transition};
pub use timers::{TimerId, TimerQueue};
pub use trail::{ChainSegment, ColorToken, FollowerStyle, LeaderPolicy, Trail};
