//! Item model
//!
//! Callers hand the picker an ordered list of [`Item`]s and, separately, an
//! optional placeholder. The placeholder is not a flag on the list: it is an
//! explicit `Option<Item>` that [`resolve_effective_items`] prepends when
//! present. The merged list is what the native picker primitive is offered.

use serde::{Deserialize, Serialize};

use crate::color::{Color, HostColor};
use crate::value::PickerValue;

/// Label of the built-in placeholder
pub const DEFAULT_PLACEHOLDER_LABEL: &str = "Select an item...";

/// Muted color of the built-in placeholder (`#9EA0A4`)
pub const DEFAULT_PLACEHOLDER_COLOR: u32 = 0x9EA0A4;

/// A selectable entry
///
/// Items are immutable once handed to the picker; the picker clones them
/// into its effective sequence and never writes back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Text shown in the field and in the native list
    pub label: String,
    /// Value reported through the value-changed notification
    #[serde(default)]
    pub value: PickerValue,
    /// Explicit list identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Text color inside the native list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HostColor>,
}

impl Item {
    /// Create an item with a label and value
    pub fn new(label: impl Into<String>, value: impl Into<PickerValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            key: None,
            color: None,
        }
    }

    /// Set an explicit list key
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the item's text color in the native list
    pub fn color(mut self, color: impl Into<HostColor>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Identity for list rendering
    ///
    /// The explicit key when one was given, otherwise label and value
    /// concatenated. Colliding derived keys only cost list identity
    /// stability, never selection correctness.
    pub fn list_key(&self) -> String {
        match &self.key {
            Some(key) => key.clone(),
            None => format!("{}{}", self.label, self.value),
        }
    }
}

/// The built-in placeholder: `"Select an item..."`, value `null`, muted color
pub fn default_placeholder() -> Item {
    Item::new(DEFAULT_PLACEHOLDER_LABEL, PickerValue::Null)
        .color(Color::from_hex(DEFAULT_PLACEHOLDER_COLOR))
}

/// Merge the optional placeholder in front of the caller's items
///
/// Pure and deterministic, so it is safe to call on every paint.
pub fn resolve_effective_items(items: &[Item], placeholder: Option<&Item>) -> Vec<Item> {
    match placeholder {
        None => items.to_vec(),
        Some(placeholder) => std::iter::once(placeholder)
            .chain(items)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![Item::new("A", 1), Item::new("B", 2)]
    }

    #[test]
    fn test_effective_items_without_placeholder_is_identity() {
        assert_eq!(resolve_effective_items(&items(), None), items());
        assert!(resolve_effective_items(&[], None).is_empty());
    }

    #[test]
    fn test_effective_items_prepends_placeholder() {
        let placeholder = default_placeholder();
        let effective = resolve_effective_items(&items(), Some(&placeholder));
        assert_eq!(effective.len(), 3);
        assert_eq!(effective[0], placeholder);
        assert_eq!(&effective[1..], &items()[..]);
    }

    #[test]
    fn test_effective_items_is_idempotent() {
        let placeholder = default_placeholder();
        let first = resolve_effective_items(&items(), Some(&placeholder));
        let second = resolve_effective_items(&items(), Some(&placeholder));
        assert_eq!(first, second);
    }

    #[test]
    fn test_list_key() {
        assert_eq!(Item::new("A", 1).list_key(), "A1");
        assert_eq!(default_placeholder().list_key(), "Select an item...null");
        assert_eq!(Item::new("A", 1).key("first").list_key(), "first");
    }

    #[test]
    fn test_default_placeholder() {
        let placeholder = default_placeholder();
        assert_eq!(placeholder.label, DEFAULT_PLACEHOLDER_LABEL);
        assert_eq!(placeholder.value, PickerValue::Null);
        assert_eq!(
            placeholder.color.map(|c| c.to_string()),
            Some("#9EA0A4".to_string())
        );
    }
}
