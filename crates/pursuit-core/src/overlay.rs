//! Screen-wide effects derived from the current phase.
//!
//! [`directive_for`] is a total mapping from [`Phase`] to what the overlay
//! should show. [`OverlayCoordinator`] is the only thing that writes global
//! host state (native cursor, body animation) and always knows how to put it
//! back.

use crate::constants::*;
use crate::state::Phase;

/// Host-side global presentation state. Implemented by the web front-end on
/// `document.body`; tests and the native driver use in-memory fakes.
pub trait Surface {
    fn set_native_cursor_hidden(&mut self, hidden: bool);
    fn set_screen_shake(&mut self, active: bool);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_native_cursor_hidden(&mut self, hidden: bool) {
        (**self).set_native_cursor_hidden(hidden);
    }
    fn set_screen_shake(&mut self, active: bool) {
        (**self).set_screen_shake(active);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tint {
    pub rgb: [u8; 3],
    /// 0 is fully transparent, 1 fully opaque.
    pub intensity: f32,
}

impl Tint {
    pub const CLEAR: Tint = Tint {
        rgb: BLOOD_RGB,
        intensity: 0.0,
    };
}

/// The full-screen layer under the message. Only one is ever shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Backdrop {
    Clear,
    /// Pulsing wash with dripping columns while the creature closes in.
    Pulse,
    /// Opaque flood with waves; the creature is hidden behind it.
    Takeover,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    Doom,
    Recovery,
}

impl Message {
    pub fn text(self) -> &'static str {
        match self {
            Message::Doom => DOOM_TEXT,
            Message::Recovery => RECOVERY_TEXT,
        }
    }

    pub fn subtitle(self) -> Option<&'static str> {
        match self {
            Message::Doom => None,
            Message::Recovery => Some(RECOVERY_SUBTITLE),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayDirective {
    pub tint: Tint,
    pub backdrop: Backdrop,
    pub creature_visible: bool,
    pub message: Option<Message>,
    pub native_cursor_suppressed: bool,
    pub screen_shake: bool,
}

impl OverlayDirective {
    pub fn message_text(&self) -> Option<&'static str> {
        self.message.map(Message::text)
    }

    pub fn global_effects(&self) -> GlobalEffects {
        GlobalEffects {
            cursor_hidden: self.native_cursor_suppressed,
            screen_shake: self.screen_shake,
        }
    }
}

pub fn directive_for(phase: Phase) -> OverlayDirective {
    match phase {
        Phase::Idle => OverlayDirective {
            tint: Tint::CLEAR,
            backdrop: Backdrop::Clear,
            creature_visible: true,
            message: None,
            native_cursor_suppressed: false,
            screen_shake: false,
        },
        Phase::Alerting | Phase::Hunting => OverlayDirective {
            tint: Tint {
                rgb: BLOOD_RGB,
                intensity: PULSE_TINT_INTENSITY,
            },
            backdrop: Backdrop::Pulse,
            creature_visible: true,
            message: None,
            native_cursor_suppressed: true,
            screen_shake: false,
        },
        Phase::Climax => OverlayDirective {
            tint: Tint {
                rgb: BLOOD_RGB,
                intensity: TAKEOVER_TINT_INTENSITY,
            },
            backdrop: Backdrop::Takeover,
            creature_visible: false,
            message: Some(Message::Doom),
            native_cursor_suppressed: true,
            screen_shake: true,
        },
        Phase::Recovery => OverlayDirective {
            tint: Tint::CLEAR,
            backdrop: Backdrop::Clear,
            creature_visible: true,
            message: Some(Message::Recovery),
            native_cursor_suppressed: false,
            screen_shake: false,
        },
    }
}

/// Global side effects currently applied to the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalEffects {
    pub cursor_hidden: bool,
    pub screen_shake: bool,
}

#[derive(Debug, Default)]
pub struct OverlayCoordinator {
    applied: GlobalEffects,
}

impl OverlayCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn applied(&self) -> GlobalEffects {
        self.applied
    }

    /// Bring the host in line with `directive`, writing only what changed.
    pub fn sync<S: Surface>(&mut self, directive: &OverlayDirective, surface: &mut S) {
        let want = directive.global_effects();
        if want.cursor_hidden != self.applied.cursor_hidden {
            surface.set_native_cursor_hidden(want.cursor_hidden);
            log::debug!("[overlay] native cursor hidden={}", want.cursor_hidden);
        }
        if want.screen_shake != self.applied.screen_shake {
            surface.set_screen_shake(want.screen_shake);
            log::debug!("[overlay] screen shake={}", want.screen_shake);
        }
        self.applied = want;
    }

    /// Put the host back to its defaults. Writes unconditionally so a host
    /// that was touched behind our back still ends up clean.
    pub fn restore<S: Surface>(&mut self, surface: &mut S) {
        surface.set_native_cursor_hidden(false);
        surface.set_screen_shake(false);
        self.applied = GlobalEffects::default();
    }
}
