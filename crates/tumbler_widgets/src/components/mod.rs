//! Picker components

pub mod accessory;
pub mod picker_select;
pub mod strategy;

pub use accessory::{AccessoryController, DEFAULT_DONE_TEXT};
pub use picker_select::{
    picker_select, PickerEvent, PickerSelect, DEFAULT_PLACEHOLDER_TEXT_COLOR,
};
pub use strategy::RenderStrategy;
