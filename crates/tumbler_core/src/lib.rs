//! Tumbler Core
//!
//! The selection and presentation state of a cross-platform picker, kept free
//! of any rendering concern:
//!
//! - **Values**: [`PickerValue`], strictly compared, plus [`HostColor`] for item tinting
//! - **Item Model**: [`Item`] and the placeholder merge ([`resolve_effective_items`])
//! - **Selection**: [`SelectionMachine`], the single source of truth for what is displayed
//! - **Presentation**: [`PresentationMachine`], open/closed overlay state and lifecycle hooks
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use tumbler_core::{default_placeholder, Item, PickerValue, SelectionMachine};
//!
//! let items = vec![Item::new("A", 1), Item::new("B", 2)];
//! let machine = SelectionMachine::new(
//!     items,
//!     Some(default_placeholder()),
//!     Some(PickerValue::from(2)),
//!     Arc::new(|_value: &PickerValue, _index: usize| {}),
//! );
//!
//! assert_eq!(machine.display_label(), "B");
//! assert!(!machine.shows_placeholder_style());
//! ```

pub mod callbacks;
pub mod color;
pub mod item;
pub mod presentation;
pub mod selection;
pub mod value;

pub use callbacks::{Callback, LifecycleHooks, ValueChangeCallback};
pub use color::{Color, ColorParseError, HostColor};
pub use item::{
    default_placeholder, resolve_effective_items, Item, DEFAULT_PLACEHOLDER_COLOR,
    DEFAULT_PLACEHOLDER_LABEL,
};
pub use presentation::{
    ModalAnimation, PresentationConfig, PresentationEvent, PresentationMachine,
    PresentationState, LANDSCAPE_OVERLAY_HEIGHT, PORTRAIT_OVERLAY_HEIGHT,
};
pub use selection::{resolve_selected_item, Selected, SelectionEvent, SelectionMachine};
pub use value::PickerValue;

// Re-export platform types that appear in this crate's API
pub use tumbler_platform::{KeyboardController, NoopKeyboard, Orientation, SharedKeyboard};
