//! Tumbler Platform Layer
//!
//! Host-facing types shared by the picker crates: which platform the widget is
//! running on, how the host reports orientation changes, and the keyboard focus
//! capability the picker uses before presenting an overlay.
//!
//! # Architecture
//!
//! - [`HostPlatform`] - host identity, used once per paint to choose a render strategy
//! - [`Orientation`] - overlay orientation as reported by the host modal primitive
//! - [`KeyboardController`] - dismisses on-screen text input focus
//! - [`HostEvent`] - events a host binding routes back into a picker
//!
//! # Example
//!
//! ```
//! use tumbler_platform::{HostPlatform, Orientation};
//!
//! let host: HostPlatform = "ios".parse().unwrap();
//! assert!(host.presents_modal_sheets());
//! assert_eq!(Orientation::default(), Orientation::Portrait);
//! ```

mod error;
mod event;
mod input;
mod platform;

// Re-export all public types
pub use error::{PlatformError, Result};
pub use event::{HostEvent, Orientation};
pub use input::{KeyboardController, NoopKeyboard, SharedKeyboard};
pub use platform::HostPlatform;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{HostEvent, Orientation};
    pub use crate::input::{KeyboardController, NoopKeyboard, SharedKeyboard};
    pub use crate::platform::HostPlatform;
}
