//! Accessory bar shown above the wheel overlay
//!
//! Two navigation chevrons (previous / next field) and a "Done" label. Each
//! chevron is live only when its navigation callback exists; an inert chevron
//! is muted and carries no action. A caller-supplied accessory view replaces
//! the built-in bar, and the deprecated `hide_done_bar` flag removes it.

use crate::node::{ComponentFn, HitSlop, Node, PickerAction};
use crate::style::{default_styles, PickerStyle, Style};

/// Default label of the done affordance
pub const DEFAULT_DONE_TEXT: &str = "Done";

const DONE_HIT_SLOP: f32 = 4.0;
const CHEVRON_ACTIVE_OPACITY: f32 = 0.5;
const CHEVRON_INERT_OPACITY: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Chevron {
    Up,
    Down,
}

/// Builds the accessory for one paint
pub struct AccessoryController<'a> {
    pub style: &'a PickerStyle,
    pub done_text: &'a str,
    pub up_enabled: bool,
    pub down_enabled: bool,
    pub custom_view: Option<&'a ComponentFn>,
    /// Deprecated: suppresses the accessory entirely
    pub hidden: bool,
}

impl AccessoryController<'_> {
    /// The accessory node, or `None` when suppressed
    pub fn render(&self) -> Option<Node> {
        if self.hidden {
            return None;
        }

        if let Some(view) = self.custom_view {
            return Some(view("custom_input_accessory_view"));
        }

        let defaults = default_styles();
        let chevrons = Node::view()
            .style(Style::layered([
                &defaults.chevron_container,
                &self.style.chevron_container,
            ]))
            .child(self.chevron(Chevron::Up))
            .child(self.chevron(Chevron::Down));

        let done = Node::touchable(Some(PickerAction::Toggle { animate: true }))
            .test_id("done_button")
            .hit_slop(HitSlop::uniform(DONE_HIT_SLOP))
            .child(
                Node::view().test_id("needed_for_touchable").child(
                    Node::text(self.done_text)
                        .style(Style::layered([&defaults.done, &self.style.done])),
                ),
            );

        Some(
            Node::view()
                .test_id("input_accessory_view")
                .style(Style::layered([
                    &defaults.modal_view_middle,
                    &self.style.modal_view_middle,
                ]))
                .child(chevrons)
                .child(done),
        )
    }

    fn chevron(&self, which: Chevron) -> Node {
        let defaults = default_styles();
        let (enabled, action, test_id, direction, direction_override) = match which {
            Chevron::Up => (
                self.up_enabled,
                PickerAction::UpArrow,
                "chevron_up",
                &defaults.chevron_up,
                &self.style.chevron_up,
            ),
            Chevron::Down => (
                self.down_enabled,
                PickerAction::DownArrow,
                "chevron_down",
                &defaults.chevron_down,
                &self.style.chevron_down,
            ),
        };

        let inactive = Style::new();
        let (active, active_override) = if enabled {
            (&defaults.chevron_active, &self.style.chevron_active)
        } else {
            (&inactive, &inactive)
        };

        let opacity = if enabled {
            CHEVRON_ACTIVE_OPACITY
        } else {
            CHEVRON_INERT_OPACITY
        };

        Node::touchable_opacity(enabled.then_some(action), Some(opacity))
            .test_id(test_id)
            .child(Node::view().style(Style::layered([
                &defaults.chevron,
                &self.style.chevron,
                direction,
                direction_override,
                active,
                active_override,
            ])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use serde_json::json;
    use std::sync::Arc;

    fn is_muted(chevron: &Node) -> bool {
        chevron
            .children
            .first()
            .and_then(|shape| shape.style.get("borderColor"))
            .is_some_and(|color| *color != json!("#007AFE"))
    }

    fn controller(style: &PickerStyle) -> AccessoryController<'_> {
        AccessoryController {
            style,
            done_text: DEFAULT_DONE_TEXT,
            up_enabled: false,
            down_enabled: false,
            custom_view: None,
            hidden: false,
        }
    }

    #[test]
    fn test_builtin_bar_layout() {
        let style = PickerStyle::default();
        let bar = controller(&style).render().unwrap();

        assert_eq!(bar.test_id.as_deref(), Some("input_accessory_view"));
        let done = bar.find("done_button").unwrap();
        assert_eq!(done.on_press(), Some(PickerAction::Toggle { animate: true }));
        assert!(matches!(
            done.kind,
            NodeKind::Touchable {
                hit_slop: Some(_),
                ..
            }
        ));
        let label = &done.children[0].children[0];
        assert_eq!(
            label.kind,
            NodeKind::Text {
                content: "Done".to_string()
            }
        );
    }

    #[test]
    fn test_chevrons_inert_without_callbacks() {
        let style = PickerStyle::default();
        let bar = controller(&style).render().unwrap();

        for id in ["chevron_up", "chevron_down"] {
            let chevron = bar.find(id).unwrap();
            assert_eq!(chevron.on_press(), None);
            assert!(is_muted(chevron));
            assert!(matches!(
                chevron.kind,
                NodeKind::Touchable {
                    active_opacity: Some(o),
                    ..
                } if o == CHEVRON_INERT_OPACITY
            ));
        }
    }

    #[test]
    fn test_chevrons_enabled_independently() {
        let style = PickerStyle::default();
        let bar = AccessoryController {
            down_enabled: true,
            ..controller(&style)
        }
        .render()
        .unwrap();

        assert_eq!(bar.find("chevron_up").unwrap().on_press(), None);
        let down = bar.find("chevron_down").unwrap();
        assert_eq!(down.on_press(), Some(PickerAction::DownArrow));
        assert!(!is_muted(down));
        assert_eq!(
            down.children[0].style.get("marginLeft"),
            Some(&json!(22))
        );
    }

    #[test]
    fn test_style_overrides_apply_after_defaults() {
        let style = PickerStyle {
            done: Style::new().set("color", "#FF0000"),
            ..Default::default()
        };
        let bar = AccessoryController {
            done_text: "OK",
            ..controller(&style)
        }
        .render()
        .unwrap();

        let label = &bar.find("done_button").unwrap().children[0].children[0];
        assert_eq!(label.style.get("color"), Some(&json!("#FF0000")));
        assert_eq!(label.style.get("fontWeight"), Some(&json!("bold")));
        assert_eq!(label.kind, NodeKind::Text { content: "OK".into() });
    }

    #[test]
    fn test_custom_view_replaces_builtin_bar() {
        let style = PickerStyle::default();
        let custom: ComponentFn = Arc::new(|id: &str| Node::custom("MyAccessory").test_id(id));
        let bar = AccessoryController {
            custom_view: Some(&custom),
            up_enabled: true,
            ..controller(&style)
        }
        .render()
        .unwrap();

        assert_eq!(bar.test_id.as_deref(), Some("custom_input_accessory_view"));
        assert!(!bar.contains("done_button"));
    }

    #[test]
    fn test_hidden_renders_nothing() {
        let style = PickerStyle::default();
        let custom: ComponentFn = Arc::new(|id: &str| Node::custom("MyAccessory").test_id(id));
        let hidden = AccessoryController {
            hidden: true,
            custom_view: Some(&custom),
            ..controller(&style)
        };
        assert_eq!(hidden.render(), None);
    }
}
