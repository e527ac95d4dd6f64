//! # Tumbler Widgets
//!
//! The cross-platform picker select, built on `tumbler_core` state machines.
//!
//! A [`PickerSelect`] never touches native views. Each paint produces a
//! [`Node`] tree of host primitives (text field, touchables, modal sheet,
//! native picker) shaped by the [`RenderStrategy`] for the host; the host
//! feeds input back through [`PickerSelect::dispatch`].
//!
//! ## Example
//!
//! ```rust
//! use tumbler_widgets::prelude::*;
//!
//! let mut picker = cn::picker_select(|_value: &PickerValue, _index: usize| {})
//!     .items(vec![Item::new("Red", "red"), Item::new("Blue", "blue")])
//!     .placeholder(Item::new("Pick a color", PickerValue::Null));
//!
//! assert!(picker.shows_placeholder_style());
//!
//! let tree = picker.render(HostPlatform::Android);
//! assert_eq!(picker.strategy(HostPlatform::Android), RenderStrategy::NativeInline);
//! assert!(tree.contains("android_picker"));
//!
//! picker.dispatch(PickerEvent::NativeValueChanged {
//!     value: PickerValue::from("blue"),
//!     index: 2,
//! });
//! ```
//!
//! ## Modules
//!
//! - [`components`] - the picker, its render strategies and accessory bar
//! - [`node`] - the primitive tree handed to the host
//! - [`style`] - style and prop maps, per-region overrides and defaults
//! - [`config`] - loading picker configuration from TOML or JSON

pub mod components;
pub mod config;
pub mod node;
pub mod style;

pub use components::*;
pub use config::{ConfigError, PickerConfig, PlaceholderSetting};
pub use node::{
    ComponentFn, Feedback, HitSlop, Node, NodeKind, PickerAction, PickerRow, PointerEvents,
};
pub use style::{default_styles, ModalProps, PickerStyle, PropMap, Props, Style};

/// Convenience module for accessing components with `cn::` prefix
pub mod cn {
    pub use crate::components::picker_select::picker_select;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::{PickerEvent, PickerSelect, RenderStrategy};
    pub use crate::config::PickerConfig;
    pub use crate::node::{Node, NodeKind, PickerAction};
    pub use crate::style::{ModalProps, PickerStyle, Props, Style};
    // Commonly needed core and platform types
    pub use tumbler_core::{Color, HostColor, Item, ModalAnimation, PickerValue, Selected};
    pub use tumbler_platform::{HostEvent, HostPlatform, Orientation};
}
