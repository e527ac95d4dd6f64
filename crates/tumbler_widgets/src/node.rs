//! Primitive tree
//!
//! The picker never constructs native views. Each paint produces a [`Node`]
//! tree describing which host primitives to show, how to style them, and
//! which [`PickerAction`] a press on them stands for. A host binding turns the
//! tree into native views and routes input back through
//! [`PickerSelect::dispatch`](crate::PickerSelect::dispatch).

use std::sync::Arc;

use serde::Serialize;

use tumbler_core::{HostColor, Item, ModalAnimation, Orientation, PickerValue};

use crate::style::{Props, Style};

/// Caller-supplied component (custom icon or accessory), invoked with the
/// test id the picker assigns to it
pub type ComponentFn = Arc<dyn Fn(&str) -> Node + Send + Sync>;

/// What a press on an interactive node asks the picker to do
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PickerAction {
    /// Flip the overlay
    Toggle { animate: bool },
    /// Previous-field chevron
    UpArrow,
    /// Next-field chevron
    DownArrow,
}

/// Pointer event routing for a view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointerEvents {
    /// The view receives touches, its subviews never do
    BoxOnly,
}

/// Press feedback of a touchable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    /// Dims to `active_opacity` while pressed
    Opacity,
    /// No visual feedback
    None,
}

/// Extra touch area around a touchable
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HitSlop {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl HitSlop {
    pub const fn uniform(v: f32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }
}

/// A row offered to the native picker
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PickerRow {
    pub key: String,
    pub label: String,
    pub value: PickerValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<HostColor>,
}

impl From<&Item> for PickerRow {
    fn from(item: &Item) -> Self {
        Self {
            key: item.list_key(),
            label: item.label.clone(),
            value: item.value.clone(),
            color: item.color.clone(),
        }
    }
}

/// Kind-specific data of a node
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Plain container
    View {
        #[serde(skip_serializing_if = "Option::is_none")]
        pointer_events: Option<PointerEvents>,
    },
    /// Static text
    Text { content: String },
    /// Host text field
    TextInput {
        value: String,
        editable: bool,
        #[serde(skip_serializing_if = "Props::is_empty")]
        props: Props,
    },
    /// Press target
    Touchable {
        feedback: Feedback,
        #[serde(skip_serializing_if = "Option::is_none")]
        active_opacity: Option<f32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        hit_slop: Option<HitSlop>,
        #[serde(skip_serializing_if = "Option::is_none")]
        on_press: Option<PickerAction>,
    },
    /// Host modal sheet; reports orientation changes and dismissal
    Modal {
        visible: bool,
        transparent: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        animation: Option<ModalAnimation>,
        supported_orientations: Vec<Orientation>,
        #[serde(skip_serializing_if = "Props::is_empty")]
        props: Props,
    },
    /// Host wheel/dropdown picker; reports value changes
    NativePicker {
        enabled: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        selected_value: Option<PickerValue>,
        items: Vec<PickerRow>,
        #[serde(skip_serializing_if = "Props::is_empty")]
        props: Props,
    },
    /// Caller-provided content the picker places but does not interpret
    Custom { name: String },
}

/// One primitive in the render tree
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            test_id: None,
            style: Style::new(),
            children: Vec::new(),
        }
    }

    pub fn view() -> Self {
        Self::new(NodeKind::View {
            pointer_events: None,
        })
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Text {
            content: content.into(),
        })
    }

    /// Touchable without press feedback
    pub fn touchable(on_press: Option<PickerAction>) -> Self {
        Self::new(NodeKind::Touchable {
            feedback: Feedback::None,
            active_opacity: None,
            hit_slop: None,
            on_press,
        })
    }

    /// Touchable that dims to `active_opacity` while pressed
    pub fn touchable_opacity(on_press: Option<PickerAction>, active_opacity: Option<f32>) -> Self {
        Self::new(NodeKind::Touchable {
            feedback: Feedback::Opacity,
            active_opacity,
            hit_slop: None,
            on_press,
        })
    }

    /// Opaque caller content
    pub fn custom(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Custom { name: name.into() })
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child when present
    pub fn child_opt(mut self, child: Option<Node>) -> Self {
        self.children.extend(child);
        self
    }

    /// Set pointer routing (views only)
    pub fn pointer_events(mut self, events: PointerEvents) -> Self {
        if let NodeKind::View { pointer_events } = &mut self.kind {
            *pointer_events = Some(events);
        }
        self
    }

    /// Set extra touch area (touchables only)
    pub fn hit_slop(mut self, slop: HitSlop) -> Self {
        if let NodeKind::Touchable { hit_slop, .. } = &mut self.kind {
            *hit_slop = Some(slop);
        }
        self
    }

    /// Depth-first search by test id
    pub fn find(&self, test_id: &str) -> Option<&Node> {
        if self.test_id.as_deref() == Some(test_id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(test_id))
    }

    /// Whether any node in this subtree has the given test id
    pub fn contains(&self, test_id: &str) -> bool {
        self.find(test_id).is_some()
    }

    /// Press action of a touchable
    pub fn on_press(&self) -> Option<PickerAction> {
        match &self.kind {
            NodeKind::Touchable { on_press, .. } => *on_press,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_find_by_test_id() {
        let tree = Node::view()
            .test_id("root")
            .child(Node::view().child(Node::text("Done").test_id("done")))
            .child(Node::custom("Icon").test_id("icon"));

        assert_eq!(tree.find("root").map(|n| n.children.len()), Some(2));
        assert_eq!(
            tree.find("done").map(|n| &n.kind),
            Some(&NodeKind::Text {
                content: "Done".to_string()
            })
        );
        assert!(tree.contains("icon"));
        assert!(!tree.contains("missing"));
    }

    #[test]
    fn test_builder_modifiers_only_apply_to_matching_kinds() {
        let text = Node::text("x").pointer_events(PointerEvents::BoxOnly);
        assert_eq!(text.kind, NodeKind::Text { content: "x".into() });

        let touch = Node::touchable(None).hit_slop(HitSlop::uniform(4.0));
        assert!(matches!(
            touch.kind,
            NodeKind::Touchable {
                hit_slop: Some(HitSlop { top, .. }),
                ..
            } if top == 4.0
        ));
    }

    #[test]
    fn test_serializes_flat_with_type_tag() {
        let node = Node::touchable(Some(PickerAction::Toggle { animate: true }))
            .test_id("ios_touchable_wrapper");
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "touchable",
                "feedback": "none",
                "on_press": { "action": "toggle", "animate": true },
                "test_id": "ios_touchable_wrapper"
            })
        );
    }
}
