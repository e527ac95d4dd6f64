//! Platform render strategies
//!
//! Three mutually exclusive shapes, chosen once per paint by
//! [`RenderStrategy::select`]:
//!
//! - [`RenderStrategy::ModalOverlay`] - read-only field that opens a modal wheel sheet
//! - [`RenderStrategy::HeadlessOverlay`] - caller content under an invisible native picker
//! - [`RenderStrategy::NativeInline`] - native dropdown styled as a field

use serde::Serialize;
use serde_json::Value;

use tumbler_core::{Orientation, PresentationState};
use tumbler_platform::HostPlatform;

use super::accessory::AccessoryController;
use super::picker_select::PickerSelect;
use crate::node::{Node, NodeKind, PickerAction, PickerRow, PointerEvents};
use crate::style::{default_styles, Style};

/// How the picker presents itself for one paint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStrategy {
    /// Field + modal sheet (hosts that present overlays as detached sheets)
    ModalOverlay,
    /// Transparent native picker stacked over the field or caller content
    HeadlessOverlay,
    /// Native dropdown rendered directly
    NativeInline,
}

impl RenderStrategy {
    /// Pure selection predicate
    ///
    /// Modal sheets win on hosts that use them regardless of anything else;
    /// otherwise caller content or disabled inline styling means headless.
    pub fn select(host: HostPlatform, has_children: bool, use_native_inline_style: bool) -> Self {
        if host.presents_modal_sheets() {
            RenderStrategy::ModalOverlay
        } else if has_children || !use_native_inline_style {
            RenderStrategy::HeadlessOverlay
        } else {
            RenderStrategy::NativeInline
        }
    }

    /// Whether this shape drives the presentation state machine
    pub fn uses_presentation(&self) -> bool {
        matches!(self, RenderStrategy::ModalOverlay)
    }

    pub(crate) fn render(self, picker: &PickerSelect, host: HostPlatform) -> Node {
        match self {
            RenderStrategy::ModalOverlay => render_modal_overlay(picker, host),
            RenderStrategy::HeadlessOverlay => render_headless_overlay(picker, host),
            RenderStrategy::NativeInline => render_native_inline(picker),
        }
    }
}

fn render_modal_overlay(picker: &PickerSelect, host: HostPlatform) -> Node {
    let defaults = default_styles();
    let style = &picker.style;
    let presentation: &PresentationState = picker.presentation.state();

    let accessory = AccessoryController {
        style,
        done_text: &picker.done_text,
        up_enabled: picker.on_up_arrow.is_some(),
        down_enabled: picker.on_down_arrow.is_some(),
        custom_view: picker.input_accessory_view.as_ref(),
        hidden: picker.hide_done_bar,
    }
    .render();

    let wheel_area = Node::view()
        .style(Style::layered([
            &defaults.modal_view_bottom,
            &Style::new().set("height", presentation.overlay_height()),
            &style.modal_view_bottom,
        ]))
        .child(native_picker(picker).test_id("ios_picker"));

    let modal = Node::new(NodeKind::Modal {
        visible: presentation.is_open,
        transparent: true,
        animation: presentation.animation,
        supported_orientations: vec![Orientation::Portrait, Orientation::Landscape],
        props: picker.modal_props.extra.clone(),
    })
    .test_id("ios_modal")
    .child(
        Node::touchable_opacity(Some(PickerAction::Toggle { animate: true }), None)
            .test_id("ios_modal_top")
            .style(Style::layered([&defaults.modal_view_top, &style.modal_view_top])),
    )
    .child_opt(accessory)
    .child(wheel_area);

    Node::view()
        .style(Style::layered([&defaults.view_container, &style.view_container]))
        .child(
            Node::touchable(Some(PickerAction::Toggle { animate: true }))
                .test_id("ios_touchable_wrapper")
                .child(field_or_children(picker, host)),
        )
        .child(modal)
}

fn render_headless_overlay(picker: &PickerSelect, host: HostPlatform) -> Node {
    let defaults = default_styles();
    let overlay_style = Style::layered([
        &icon_backdrop(picker),
        &defaults.headless_android_picker,
        &picker.style.headless_android_picker,
    ]);

    Node::view()
        .style(picker.style.headless_android_container.clone())
        .child(field_or_children(picker, host))
        .child(
            native_picker(picker)
                .test_id("android_picker_headless")
                .style(overlay_style),
        )
}

fn render_native_inline(picker: &PickerSelect) -> Node {
    let defaults = default_styles();
    let picker_style = Style::layered([
        &icon_backdrop(picker),
        &picker.style.input_android,
        &placeholder_style(picker),
    ]);

    Node::view()
        .style(Style::layered([
            &defaults.view_container,
            &picker.style.view_container,
        ]))
        .child(
            native_picker(picker)
                .test_id("android_picker")
                .style(picker_style),
        )
        .child_opt(render_icon(picker))
}

/// The native picker bound to the effective items and current selection
fn native_picker(picker: &PickerSelect) -> Node {
    let selection = &picker.selection;
    Node::new(NodeKind::NativePicker {
        enabled: !picker.disabled,
        selected_value: selection.selected_value().cloned(),
        items: selection
            .effective_items()
            .iter()
            .map(PickerRow::from)
            .collect(),
        props: picker.picker_props.clone(),
    })
}

/// Visible affordance: caller content, or a read-only text field plus icon
fn field_or_children(picker: &PickerSelect, host: HostPlatform) -> Node {
    let style = &picker.style;
    let (input_style, container_style) = if host.presents_modal_sheets() {
        (&style.input_ios, &style.input_ios_container)
    } else {
        (&style.input_android, &style.input_android_container)
    };

    let container = Node::view()
        .pointer_events(PointerEvents::BoxOnly)
        .style(container_style.clone());

    if let Some(children) = &picker.children {
        return container.child(children.clone());
    }

    let field = Node::new(NodeKind::TextInput {
        value: picker.selection.display_label().to_string(),
        editable: false,
        props: picker.text_input_props.clone(),
    })
    .test_id("text_input")
    .style(Style::layered([input_style, &placeholder_style(picker)]));

    container.child(field).child_opt(render_icon(picker))
}

fn render_icon(picker: &PickerSelect) -> Option<Node> {
    let icon = picker.icon.as_ref()?;
    let defaults = default_styles();
    Some(
        Node::view()
            .test_id("icon_container")
            .style(Style::layered([
                &defaults.icon_container,
                &picker.style.icon_container,
            ]))
            .child(icon("icon")),
    )
}

/// Placeholder text styling, empty unless the placeholder is showing
pub(crate) fn placeholder_style(picker: &PickerSelect) -> Style {
    if !picker.selection.shows_placeholder_style() {
        return Style::new();
    }
    let deprecated_color =
        Style::new().set("color", picker.placeholder_text_color.to_string());
    Style::layered([
        &default_styles().placeholder,
        &deprecated_color,
        &picker.style.placeholder,
    ])
}

/// A custom icon replaces the native dropdown arrow, so the native picker
/// background goes transparent
fn icon_backdrop(picker: &PickerSelect) -> Style {
    match picker.icon {
        Some(_) => Style::new().set("backgroundColor", Value::from("transparent")),
        None => Style::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_host_always_uses_modal_overlay() {
        for children in [false, true] {
            for inline in [false, true] {
                assert_eq!(
                    RenderStrategy::select(HostPlatform::Ios, children, inline),
                    RenderStrategy::ModalOverlay
                );
            }
        }
    }

    #[test]
    fn test_non_modal_hosts() {
        for host in [HostPlatform::Android, HostPlatform::Desktop, HostPlatform::Harmony] {
            assert_eq!(
                RenderStrategy::select(host, false, true),
                RenderStrategy::NativeInline
            );
            assert_eq!(
                RenderStrategy::select(host, true, true),
                RenderStrategy::HeadlessOverlay
            );
            assert_eq!(
                RenderStrategy::select(host, false, false),
                RenderStrategy::HeadlessOverlay
            );
        }
    }

    #[test]
    fn test_only_modal_overlay_uses_presentation() {
        assert!(RenderStrategy::ModalOverlay.uses_presentation());
        assert!(!RenderStrategy::HeadlessOverlay.uses_presentation());
        assert!(!RenderStrategy::NativeInline.uses_presentation());
    }
}
