//! Picker select component
//!
//! One logical "pick a value" control that renders as a field opening a modal
//! wheel on hosts with modal sheets, as a native dropdown elsewhere, or as an
//! invisible native picker stacked on caller content.
//!
//! # Example
//!
//! ```
//! use tumbler_platform::HostPlatform;
//! use tumbler_widgets::prelude::*;
//!
//! let mut picker = cn::picker_select(|value, index| println!("picked {value} at {index}"))
//!     .item(Item::new("Apple", "apple"))
//!     .item(Item::new("Banana", "banana"))
//!     .value("banana")
//!     .on_open(|| println!("opening"));
//!
//! assert_eq!(picker.display_label(), "Banana");
//!
//! picker.dispatch(PickerEvent::Press(PickerAction::Toggle { animate: true }));
//! let tree = picker.render(HostPlatform::Ios);
//! assert!(tree.contains("ios_modal"));
//! ```

use std::fmt;
use std::sync::Arc;

use tumbler_core::{
    default_placeholder, Callback, Color, HostColor, Item, LifecycleHooks, PickerValue, PresentationConfig,
    PresentationMachine, PresentationState, Selected, SelectionMachine, ValueChangeCallback,
};
use tumbler_platform::{HostEvent, HostPlatform, NoopKeyboard, Orientation, SharedKeyboard};

use super::accessory::DEFAULT_DONE_TEXT;
use super::strategy::RenderStrategy;
use crate::config::PickerConfig;
use crate::node::{ComponentFn, Node, PickerAction};
use crate::style::{ModalProps, PickerStyle, Props};

/// Deprecated placeholder text color applied under `style.placeholder`
pub const DEFAULT_PLACEHOLDER_TEXT_COLOR: u32 = 0xC7C7CD;

/// Input routed back from the host
#[derive(Clone, Debug, PartialEq)]
pub enum PickerEvent {
    /// A touchable carrying an action was pressed
    Press(PickerAction),
    /// The native picker reported a selection
    NativeValueChanged { value: PickerValue, index: usize },
    /// The modal primitive reported something
    Host(HostEvent),
}

impl From<HostEvent> for PickerEvent {
    fn from(event: HostEvent) -> Self {
        PickerEvent::Host(event)
    }
}

impl From<PickerAction> for PickerEvent {
    fn from(action: PickerAction) -> Self {
        PickerEvent::Press(action)
    }
}

/// Cross-platform picker select
pub struct PickerSelect {
    pub(crate) selection: SelectionMachine,
    pub(crate) presentation: PresentationMachine,
    pub(crate) disabled: bool,
    pub(crate) use_native_inline_style: bool,
    pub(crate) done_text: String,
    pub(crate) hide_done_bar: bool,
    pub(crate) placeholder_text_color: HostColor,
    pub(crate) style: PickerStyle,
    pub(crate) text_input_props: Props,
    pub(crate) picker_props: Props,
    pub(crate) modal_props: ModalProps,
    pub(crate) children: Option<Node>,
    pub(crate) icon: Option<ComponentFn>,
    pub(crate) input_accessory_view: Option<ComponentFn>,
    pub(crate) on_up_arrow: Option<Callback>,
    pub(crate) on_down_arrow: Option<Callback>,
}

impl PickerSelect {
    /// Create a picker with no items, no value and the default placeholder
    pub fn new<F>(on_value_change: F) -> Self
    where
        F: Fn(&PickerValue, usize) + Send + Sync + 'static,
    {
        Self::with_callback(Arc::new(on_value_change))
    }

    fn with_callback(on_value_change: ValueChangeCallback) -> Self {
        let keyboard: SharedKeyboard = Arc::new(NoopKeyboard);
        Self {
            selection: SelectionMachine::new(
                Vec::new(),
                Some(default_placeholder()),
                None,
                on_value_change,
            ),
            presentation: PresentationMachine::new(
                PresentationConfig::default(),
                LifecycleHooks::default(),
                keyboard,
            ),
            disabled: false,
            use_native_inline_style: true,
            done_text: DEFAULT_DONE_TEXT.to_string(),
            hide_done_bar: false,
            placeholder_text_color: Color::from_hex(DEFAULT_PLACEHOLDER_TEXT_COLOR).into(),
            style: PickerStyle::default(),
            text_input_props: Props::new(),
            picker_props: Props::new(),
            modal_props: ModalProps::default(),
            children: None,
            icon: None,
            input_accessory_view: None,
            on_up_arrow: None,
            on_down_arrow: None,
        }
    }

    /// Build from the data half of the boundary contract
    pub fn from_config<F>(config: PickerConfig, on_value_change: F) -> Self
    where
        F: Fn(&PickerValue, usize) + Send + Sync + 'static,
    {
        let placeholder = config.placeholder.resolve();
        let mut picker = Self::new(on_value_change)
            .disabled(config.disabled)
            .use_native_inline_style(config.use_native_inline_style)
            .done_text(config.done_text)
            .hide_done_bar(config.hide_done_bar)
            .placeholder_text_color(config.placeholder_text_color)
            .style(config.style)
            .text_input_props(config.text_input_props)
            .picker_props(config.picker_props)
            .modal_props(config.modal_props);
        picker.selection.set_placeholder(placeholder);
        picker.selection.set_items(config.items);
        picker.selection.set_value(config.value);
        picker
    }

    // =========================================================================
    // Builder
    // =========================================================================

    /// Replace the item list
    pub fn items(mut self, items: Vec<Item>) -> Self {
        self.selection.set_items(items);
        self
    }

    /// Append an item
    pub fn item(mut self, item: Item) -> Self {
        let mut items = self.selection.items().to_vec();
        items.push(item);
        self.selection.set_items(items);
        self
    }

    /// Set the controlled value
    pub fn value(mut self, value: impl Into<PickerValue>) -> Self {
        self.selection.set_value(Some(value.into()));
        self
    }

    /// Replace the placeholder
    pub fn placeholder(mut self, placeholder: Item) -> Self {
        self.selection.set_placeholder(Some(placeholder));
        self
    }

    /// Disable placeholder injection
    pub fn no_placeholder(mut self) -> Self {
        self.selection.set_placeholder(None);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Prefer the native inline dropdown on hosts without modal sheets
    pub fn use_native_inline_style(mut self, enabled: bool) -> Self {
        self.use_native_inline_style = enabled;
        self
    }

    pub fn done_text(mut self, text: impl Into<String>) -> Self {
        self.done_text = text.into();
        self
    }

    /// Deprecated: hide the accessory bar
    pub fn hide_done_bar(mut self, hide: bool) -> Self {
        self.hide_done_bar = hide;
        self
    }

    /// Deprecated: placeholder text color, layered under `style.placeholder`
    pub fn placeholder_text_color(mut self, color: impl Into<HostColor>) -> Self {
        self.placeholder_text_color = color.into();
        self
    }

    pub fn style(mut self, style: PickerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn text_input_props(mut self, props: Props) -> Self {
        self.text_input_props = props;
        self
    }

    pub fn picker_props(mut self, props: Props) -> Self {
        self.picker_props = props;
        self
    }

    pub fn modal_props(mut self, props: ModalProps) -> Self {
        self.presentation.set_animation(props.animation());
        self.modal_props = props;
        self
    }

    /// Custom content shown instead of the text field
    pub fn children(mut self, content: Node) -> Self {
        self.children = Some(content);
        self
    }

    /// Custom icon next to the field
    pub fn icon<F>(mut self, icon: F) -> Self
    where
        F: Fn(&str) -> Node + Send + Sync + 'static,
    {
        self.icon = Some(Arc::new(icon));
        self
    }

    /// Custom accessory replacing the built-in done bar
    pub fn input_accessory_view<F>(mut self, view: F) -> Self
    where
        F: Fn(&str) -> Node + Send + Sync + 'static,
    {
        self.input_accessory_view = Some(Arc::new(view));
        self
    }

    pub fn on_up_arrow<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_up_arrow = Some(Arc::new(f));
        self
    }

    pub fn on_down_arrow<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_down_arrow = Some(Arc::new(f));
        self
    }

    pub fn on_open<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.presentation.hooks_mut().on_open = Some(Arc::new(f));
        self
    }

    pub fn on_close<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.presentation.hooks_mut().on_close = Some(Arc::new(f));
        self
    }

    /// Host capability used to drop text focus before opening
    pub fn keyboard(mut self, keyboard: SharedKeyboard) -> Self {
        self.presentation.set_keyboard(keyboard);
        self
    }

    // =========================================================================
    // Prop updates
    // =========================================================================

    /// External value changed (`None` means unset)
    pub fn set_value(&mut self, value: Option<PickerValue>) {
        self.selection.set_value(value);
    }

    pub fn set_items(&mut self, items: Vec<Item>) {
        self.selection.set_items(items);
    }

    pub fn set_placeholder(&mut self, placeholder: Option<Item>) {
        self.selection.set_placeholder(placeholder);
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.presentation.set_disabled(disabled);
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Route a host event into the selection or presentation machine
    pub fn dispatch(&mut self, event: impl Into<PickerEvent>) {
        match event.into() {
            PickerEvent::Press(PickerAction::Toggle { animate }) => {
                self.presentation.toggle(animate, None);
            }
            PickerEvent::Press(PickerAction::UpArrow) => {
                if let Some(callback) = self.on_up_arrow.clone() {
                    self.presentation.toggle(false, Some(&callback));
                }
            }
            PickerEvent::Press(PickerAction::DownArrow) => {
                if let Some(callback) = self.on_down_arrow.clone() {
                    self.presentation.toggle(false, Some(&callback));
                }
            }
            PickerEvent::NativeValueChanged { value, index } => {
                self.selection.native_value_changed(value, index);
            }
            PickerEvent::Host(HostEvent::OrientationChanged(orientation)) => {
                self.presentation.orientation_changed(orientation);
            }
            PickerEvent::Host(HostEvent::ModalDismissed) => {
                self.presentation.modal_dismissed();
            }
        }
    }

    /// Programmatic toggle, same rules as a press
    pub fn toggle(&mut self, animate: bool) -> bool {
        self.presentation.toggle(animate, None)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Strategy this picker uses on `host`
    pub fn strategy(&self, host: HostPlatform) -> RenderStrategy {
        RenderStrategy::select(host, self.children.is_some(), self.use_native_inline_style)
    }

    /// Describe the primitives to show for one paint
    pub fn render(&self, host: HostPlatform) -> Node {
        let strategy = self.strategy(host);
        tracing::trace!(%host, ?strategy, "rendering picker select");
        strategy.render(self, host)
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn selected(&self) -> &Selected {
        self.selection.selected()
    }

    pub fn display_label(&self) -> &str {
        self.selection.display_label()
    }

    pub fn shows_placeholder_style(&self) -> bool {
        self.selection.shows_placeholder_style()
    }

    /// Caller items, without the placeholder
    pub fn caller_items(&self) -> &[Item] {
        self.selection.items()
    }

    pub fn effective_items(&self) -> &[Item] {
        self.selection.effective_items()
    }

    pub fn presentation(&self) -> &PresentationState {
        self.presentation.state()
    }

    pub fn is_open(&self) -> bool {
        self.presentation.is_open()
    }

    pub fn orientation(&self) -> Orientation {
        self.presentation.state().orientation
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl fmt::Debug for PickerSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerSelect")
            .field("selection", &self.selection)
            .field("presentation", &self.presentation)
            .field("disabled", &self.disabled)
            .field("use_native_inline_style", &self.use_native_inline_style)
            .field("children", &self.children.is_some())
            .field("icon", &self.icon.is_some())
            .finish()
    }
}

/// Create a picker select
///
/// `on_value_change` fires on every native selection with the value and its
/// index in the effective item sequence.
pub fn picker_select<F>(on_value_change: F) -> PickerSelect
where
    F: Fn(&PickerValue, usize) + Send + Sync + 'static,
{
    PickerSelect::new(on_value_change)
}
