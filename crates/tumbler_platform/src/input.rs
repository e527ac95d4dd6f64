//! Keyboard focus capability
//!
//! Opening a picker overlay while an on-screen keyboard is up makes the two
//! fight for the bottom of the screen, so the picker asks the host to drop
//! text-input focus first. The host owns the actual text-field reference;
//! the picker only ever asks it to let go.

use std::sync::Arc;

/// Host capability for dismissing active text-input focus
pub trait KeyboardController: Send + Sync {
    /// Dismiss the on-screen keyboard, if any
    fn dismiss(&self);
}

/// Shared handle to a keyboard controller
pub type SharedKeyboard = Arc<dyn KeyboardController>;

/// Keyboard controller for hosts without an on-screen keyboard
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopKeyboard;

impl KeyboardController for NoopKeyboard {
    fn dismiss(&self) {
        tracing::trace!("keyboard dismiss requested with no on-screen keyboard");
    }
}

impl<F> KeyboardController for F
where
    F: Fn() + Send + Sync,
{
    fn dismiss(&self) {
        self()
    }
}
