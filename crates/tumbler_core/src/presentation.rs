//! Presentation state machine
//!
//! Tracks whether the picker's overlay is shown, which animation the next
//! show/hide uses, and the orientation the host reports for the overlay.
//!
//! # States
//!
//! ```text
//!            Toggle (not disabled)
//!   Closed ─────────────────────────► Open
//!     ▲                                │
//!     └────────────────────────────────┘
//!            Toggle (not disabled)
//! ```
//!
//! `OrientationChanged` never moves between states; it only resizes the overlay.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::callbacks::{Callback, LifecycleHooks};
use tumbler_platform::{Orientation, SharedKeyboard};

/// Overlay height in portrait orientation
pub const PORTRAIT_OVERLAY_HEIGHT: f32 = 215.0;

/// Overlay height in landscape orientation
pub const LANDSCAPE_OVERLAY_HEIGHT: f32 = 162.0;

/// Animation used when the modal overlay shows or hides
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalAnimation {
    /// Slide up from the bottom edge
    #[default]
    Slide,
    /// Fade in place
    Fade,
    /// Appear without animation
    None,
}

/// Static configuration the reducer consults
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PresentationConfig {
    /// Suppresses every toggle
    pub disabled: bool,
    /// Animation used for user-initiated toggles
    pub animation: ModalAnimation,
}

/// Inputs to the presentation reducer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationEvent {
    /// Flip open/closed; `animate` is false for programmatic, instantaneous flips
    Toggle { animate: bool },
    /// Host rotated the overlay
    OrientationChanged(Orientation),
}

/// Overlay presentation state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PresentationState {
    pub is_open: bool,
    /// `None` when the last toggle was not an animated, user-initiated one
    pub animation: Option<ModalAnimation>,
    pub orientation: Orientation,
}

impl PresentationState {
    /// Pure transition function, `None` when the event causes no transition
    pub fn reduce(&self, event: PresentationEvent, config: &PresentationConfig) -> Option<Self> {
        match event {
            PresentationEvent::Toggle { .. } if config.disabled => None,
            PresentationEvent::Toggle { animate } => Some(Self {
                is_open: !self.is_open,
                animation: animate.then_some(config.animation),
                ..*self
            }),
            PresentationEvent::OrientationChanged(orientation) if orientation == self.orientation => {
                None
            }
            PresentationEvent::OrientationChanged(orientation) => Some(Self {
                orientation,
                ..*self
            }),
        }
    }

    /// Height of the wheel area for the current orientation
    pub fn overlay_height(&self) -> f32 {
        match self.orientation {
            Orientation::Portrait => PORTRAIT_OVERLAY_HEIGHT,
            Orientation::Landscape => LANDSCAPE_OVERLAY_HEIGHT,
        }
    }
}

/// Presentation state plus its side effects
///
/// Every toggle runs in this order: dismiss keyboard (only when opening),
/// fire exactly one lifecycle hook matching the pre-flip state, flip, then
/// run the optional post-toggle callback.
pub struct PresentationMachine {
    state: PresentationState,
    config: PresentationConfig,
    hooks: LifecycleHooks,
    keyboard: SharedKeyboard,
}

impl PresentationMachine {
    pub fn new(config: PresentationConfig, hooks: LifecycleHooks, keyboard: SharedKeyboard) -> Self {
        Self {
            state: PresentationState::default(),
            config,
            hooks,
            keyboard,
        }
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    pub fn set_animation(&mut self, animation: ModalAnimation) {
        self.config.animation = animation;
    }

    pub fn hooks_mut(&mut self) -> &mut LifecycleHooks {
        &mut self.hooks
    }

    pub fn set_keyboard(&mut self, keyboard: SharedKeyboard) {
        self.keyboard = keyboard;
    }

    /// Flip the overlay; returns false when disabled (nothing happened)
    pub fn toggle(&mut self, animate: bool, post_toggle: Option<&Callback>) -> bool {
        let event = PresentationEvent::Toggle { animate };
        let Some(next) = self.state.reduce(event, &self.config) else {
            tracing::debug!("picker disabled, toggle ignored");
            return false;
        };

        if !self.state.is_open {
            self.keyboard.dismiss();
        }
        self.hooks.fire_before_toggle(self.state.is_open);

        tracing::debug!(
            from_open = self.state.is_open,
            to_open = next.is_open,
            animation = ?next.animation,
            "picker overlay toggled"
        );
        self.state = next;

        if let Some(callback) = post_toggle {
            callback();
        }
        true
    }

    /// Host rotated the overlay
    pub fn orientation_changed(&mut self, orientation: Orientation) {
        let event = PresentationEvent::OrientationChanged(orientation);
        if let Some(next) = self.state.reduce(event, &self.config) {
            tracing::debug!(%orientation, "picker overlay orientation changed");
            self.state = next;
        }
    }

    /// Host dismissed the modal on its own; closes an open overlay
    pub fn modal_dismissed(&mut self) -> bool {
        if !self.state.is_open {
            return false;
        }
        self.toggle(true, None)
    }
}

impl fmt::Debug for PresentationMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationMachine")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("hooks", &self.hooks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    type Log = Arc<Mutex<Vec<&'static str>>>;

    fn logger(log: &Log, entry: &'static str) -> Callback {
        let log = Arc::clone(log);
        Arc::new(move || log.lock().unwrap().push(entry))
    }

    fn machine(disabled: bool) -> (PresentationMachine, Log) {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let hooks = LifecycleHooks {
            on_open: Some(logger(&log, "open")),
            on_close: Some(logger(&log, "close")),
        };
        let keyboard_log = Arc::clone(&log);
        let keyboard: SharedKeyboard =
            Arc::new(move || keyboard_log.lock().unwrap().push("keyboard"));
        let config = PresentationConfig {
            disabled,
            ..Default::default()
        };
        (PresentationMachine::new(config, hooks, keyboard), log)
    }

    #[test]
    fn test_reduce_toggle_sets_animation_only_when_animated() {
        let config = PresentationConfig::default();
        let closed = PresentationState::default();

        let opened = closed
            .reduce(PresentationEvent::Toggle { animate: true }, &config)
            .unwrap();
        assert!(opened.is_open);
        assert_eq!(opened.animation, Some(ModalAnimation::Slide));

        let closed_again = opened
            .reduce(PresentationEvent::Toggle { animate: false }, &config)
            .unwrap();
        assert!(!closed_again.is_open);
        assert_eq!(closed_again.animation, None);
    }

    #[test]
    fn test_reduce_uses_configured_animation() {
        let config = PresentationConfig {
            animation: ModalAnimation::Fade,
            ..Default::default()
        };
        let next = PresentationState::default()
            .reduce(PresentationEvent::Toggle { animate: true }, &config)
            .unwrap();
        assert_eq!(next.animation, Some(ModalAnimation::Fade));
    }

    #[test]
    fn test_reduce_disabled_toggle_is_no_transition() {
        let config = PresentationConfig {
            disabled: true,
            ..Default::default()
        };
        let state = PresentationState::default();
        assert_eq!(
            state.reduce(PresentationEvent::Toggle { animate: true }, &config),
            None
        );
    }

    #[test]
    fn test_orientation_never_changes_open_state() {
        let config = PresentationConfig::default();
        let open = PresentationState {
            is_open: true,
            ..Default::default()
        };
        let rotated = open
            .reduce(
                PresentationEvent::OrientationChanged(Orientation::Landscape),
                &config,
            )
            .unwrap();
        assert!(rotated.is_open);
        assert_eq!(rotated.overlay_height(), LANDSCAPE_OVERLAY_HEIGHT);
        assert_eq!(open.overlay_height(), PORTRAIT_OVERLAY_HEIGHT);
    }

    #[test]
    fn test_toggle_order_when_opening() {
        let (mut machine, log) = machine(false);
        let post = logger(&log, "post");

        assert!(machine.toggle(true, Some(&post)));
        assert!(machine.is_open());
        assert_eq!(*log.lock().unwrap(), vec!["keyboard", "open", "post"]);
    }

    #[test]
    fn test_toggle_when_closing_skips_keyboard() {
        let (mut machine, log) = machine(false);
        machine.toggle(true, None);
        log.lock().unwrap().clear();

        machine.toggle(true, None);
        assert!(!machine.is_open());
        assert_eq!(*log.lock().unwrap(), vec!["close"]);
    }

    #[test]
    fn test_exactly_one_hook_per_toggle() {
        let (mut machine, log) = machine(false);
        for _ in 0..4 {
            machine.toggle(false, None);
        }
        let hooks: Vec<_> = log
            .lock()
            .unwrap()
            .iter()
            .copied()
            .filter(|e| *e != "keyboard")
            .collect();
        assert_eq!(hooks, vec!["open", "close", "open", "close"]);
    }

    #[test]
    fn test_disabled_toggle_is_idempotent_no_op() {
        let (mut machine, log) = machine(true);
        let post = logger(&log, "post");
        for _ in 0..3 {
            assert!(!machine.toggle(true, Some(&post)));
        }
        assert!(!machine.is_open());
        assert_eq!(machine.state(), &PresentationState::default());
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_toggle_without_hooks() {
        let mut machine = PresentationMachine::new(
            PresentationConfig::default(),
            LifecycleHooks::default(),
            Arc::new(tumbler_platform::NoopKeyboard),
        );
        assert!(machine.toggle(true, None));
        assert!(machine.is_open());
    }

    #[test]
    fn test_modal_dismissed_only_closes() {
        let (mut machine, _) = machine(false);
        assert!(!machine.modal_dismissed());
        assert!(!machine.is_open());

        machine.toggle(true, None);
        assert!(machine.modal_dismissed());
        assert!(!machine.is_open());
        assert_eq!(machine.state().animation, Some(ModalAnimation::Slide));
    }
}
