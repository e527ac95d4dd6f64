//! Selection state machine
//!
//! The external `value` is authoritative; the selected item is always derived
//! from it (or from a native value-changed event) and never stored on its own
//! terms. Exactly two inputs move the selection: [`SelectionEvent::ExternalValueChanged`]
//! and [`SelectionEvent::NativeValueChanged`].

use std::fmt;

use crate::callbacks::ValueChangeCallback;
use crate::item::{resolve_effective_items, Item};
use crate::value::PickerValue;

/// Outcome of resolving a value against the effective item sequence
#[derive(Clone, Debug, PartialEq)]
pub enum Selected {
    /// An entry of the effective sequence matched (first match by position)
    Entry { index: usize, item: Item },
    /// Nothing matched; the placeholder stands in
    Placeholder(Item),
    /// Nothing matched and the placeholder is disabled
    ///
    /// Shown as empty text and offers no selected value to the native picker.
    Blank,
}

impl Selected {
    /// The item backing this selection, if any
    pub fn item(&self) -> Option<&Item> {
        match self {
            Selected::Entry { item, .. } | Selected::Placeholder(item) => Some(item),
            Selected::Blank => None,
        }
    }

    /// Text to display in the field
    pub fn label(&self) -> &str {
        self.item().map_or("", |item| item.label.as_str())
    }

    /// Value handed to the native picker as its current selection
    pub fn value(&self) -> Option<&PickerValue> {
        self.item().map(|item| &item.value)
    }

    /// Position in the effective sequence, when an entry matched
    pub fn index(&self) -> Option<usize> {
        match self {
            Selected::Entry { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Find the first item whose value strictly equals `value`, falling back to
/// the placeholder, or to [`Selected::Blank`] when there is none
pub fn resolve_selected_item(
    effective_items: &[Item],
    value: Option<&PickerValue>,
    placeholder: Option<&Item>,
) -> Selected {
    let matched = value.and_then(|value| {
        effective_items
            .iter()
            .enumerate()
            .find(|(_, item)| item.value == *value)
    });

    match (matched, placeholder) {
        (Some((index, item)), _) => Selected::Entry {
            index,
            item: item.clone(),
        },
        (None, Some(placeholder)) => Selected::Placeholder(placeholder.clone()),
        (None, None) => Selected::Blank,
    }
}

/// Inputs to the selection machine
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionEvent {
    /// The caller's controlled value changed (`None` means unset)
    ExternalValueChanged(Option<PickerValue>),
    /// The native picker reported a new selection
    NativeValueChanged { value: PickerValue, index: usize },
}

/// Owns the item list, the placeholder and the derived selection
pub struct SelectionMachine {
    items: Vec<Item>,
    placeholder: Option<Item>,
    effective_items: Vec<Item>,
    value: Option<PickerValue>,
    selected: Selected,
    on_value_change: ValueChangeCallback,
}

impl SelectionMachine {
    pub fn new(
        items: Vec<Item>,
        placeholder: Option<Item>,
        value: Option<PickerValue>,
        on_value_change: ValueChangeCallback,
    ) -> Self {
        let effective_items = resolve_effective_items(&items, placeholder.as_ref());
        let selected = resolve_selected_item(&effective_items, value.as_ref(), placeholder.as_ref());
        Self {
            items,
            placeholder,
            effective_items,
            value,
            selected,
            on_value_change,
        }
    }

    /// Apply a selection input
    pub fn handle(&mut self, event: SelectionEvent) {
        match event {
            SelectionEvent::ExternalValueChanged(value) => {
                self.value = value;
                self.reselect(self.value.clone().as_ref());
            }
            SelectionEvent::NativeValueChanged { value, index } => {
                self.reselect(Some(&value));
                tracing::debug!(%value, index, "native picker value changed");
                (self.on_value_change)(&value, index);
            }
        }
    }

    /// Shorthand for [`SelectionEvent::ExternalValueChanged`]
    pub fn set_value(&mut self, value: Option<PickerValue>) {
        self.handle(SelectionEvent::ExternalValueChanged(value));
    }

    /// Shorthand for [`SelectionEvent::NativeValueChanged`]
    pub fn native_value_changed(&mut self, value: PickerValue, index: usize) {
        self.handle(SelectionEvent::NativeValueChanged { value, index });
    }

    /// Replace the item list
    ///
    /// The selection is re-derived from the unchanged external value, exactly
    /// as if it had been set again.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.refresh_effective_items();
    }

    /// Replace the placeholder (`None` disables it)
    pub fn set_placeholder(&mut self, placeholder: Option<Item>) {
        self.placeholder = placeholder;
        self.refresh_effective_items();
    }

    fn refresh_effective_items(&mut self) {
        self.effective_items = resolve_effective_items(&self.items, self.placeholder.as_ref());
        self.handle(SelectionEvent::ExternalValueChanged(self.value.clone()));
    }

    fn reselect(&mut self, value: Option<&PickerValue>) {
        let selected =
            resolve_selected_item(&self.effective_items, value, self.placeholder.as_ref());
        tracing::trace!(label = selected.label(), "selection recomputed");
        self.selected = selected;
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn placeholder(&self) -> Option<&Item> {
        self.placeholder.as_ref()
    }

    /// The sequence offered to the native picker
    pub fn effective_items(&self) -> &[Item] {
        &self.effective_items
    }

    /// The caller's last controlled value
    pub fn value(&self) -> Option<&PickerValue> {
        self.value.as_ref()
    }

    pub fn selected(&self) -> &Selected {
        &self.selected
    }

    /// Text the field displays
    pub fn display_label(&self) -> &str {
        self.selected.label()
    }

    /// Value the native picker should show as selected
    pub fn selected_value(&self) -> Option<&PickerValue> {
        self.selected.value()
    }

    /// Whether the field should use placeholder text styling
    ///
    /// Compares labels, as the host text field only ever sees the label.
    pub fn shows_placeholder_style(&self) -> bool {
        match (&self.placeholder, self.selected.item()) {
            (Some(placeholder), Some(item)) => item.label == placeholder.label,
            _ => false,
        }
    }
}

impl fmt::Debug for SelectionMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionMachine")
            .field("items", &self.items.len())
            .field("placeholder", &self.placeholder.is_some())
            .field("value", &self.value)
            .field("selected", &self.selected)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{default_placeholder, DEFAULT_PLACEHOLDER_LABEL};
    use std::sync::{Arc, Mutex};

    fn items() -> Vec<Item> {
        vec![Item::new("A", 1), Item::new("B", 2)]
    }

    fn machine(
        placeholder: Option<Item>,
        value: Option<PickerValue>,
    ) -> (SelectionMachine, Arc<Mutex<Vec<(PickerValue, usize)>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let calls_clone = Arc::clone(&calls);
        let machine = SelectionMachine::new(
            items(),
            placeholder,
            value,
            Arc::new(move |value: &PickerValue, index: usize| {
                calls_clone.lock().unwrap().push((value.clone(), index));
            }),
        );
        (machine, calls)
    }

    #[test]
    fn test_resolve_first_match_by_position() {
        let effective = vec![Item::new("first", 1), Item::new("second", 1)];
        let selected = resolve_selected_item(&effective, Some(&PickerValue::Int(1)), None);
        assert_eq!(selected.label(), "first");
        assert_eq!(selected.index(), Some(0));
    }

    #[test]
    fn test_resolve_falls_back_to_placeholder() {
        let placeholder = default_placeholder();
        let selected =
            resolve_selected_item(&items(), Some(&PickerValue::Int(9)), Some(&placeholder));
        assert_eq!(selected, Selected::Placeholder(placeholder));
    }

    #[test]
    fn test_resolve_unset_value_never_matches() {
        let effective = resolve_effective_items(&items(), Some(&default_placeholder()));
        let selected = resolve_selected_item(&effective, None, None);
        assert_eq!(selected, Selected::Blank);
        assert_eq!(selected.label(), "");
        assert_eq!(selected.value(), None);
    }

    #[test]
    fn test_value_selects_matching_item() {
        let (machine, _) = machine(Some(default_placeholder()), Some(PickerValue::Int(2)));
        assert_eq!(machine.display_label(), "B");
        assert_eq!(machine.selected().item(), Some(&Item::new("B", 2)));
        assert!(!machine.shows_placeholder_style());
    }

    #[test]
    fn test_float_value_selects_integer_item() {
        let (machine, _) = machine(Some(default_placeholder()), Some(PickerValue::Float(2.0)));
        assert_eq!(machine.display_label(), "B");
        assert_eq!(machine.selected().index(), Some(2));
    }

    #[test]
    fn test_unset_value_shows_placeholder() {
        let (machine, _) = machine(Some(default_placeholder()), None);
        assert_eq!(machine.display_label(), DEFAULT_PLACEHOLDER_LABEL);
        assert_eq!(machine.selected(), &Selected::Placeholder(default_placeholder()));
        assert!(machine.shows_placeholder_style());
        assert_eq!(machine.selected_value(), Some(&PickerValue::Null));
    }

    #[test]
    fn test_null_value_matches_injected_placeholder() {
        let (machine, _) = machine(Some(default_placeholder()), Some(PickerValue::Null));
        assert_eq!(machine.selected().index(), Some(0));
        assert!(machine.shows_placeholder_style());
    }

    #[test]
    fn test_disabled_placeholder_and_unset_value_is_blank() {
        let (machine, _) = machine(None, None);
        assert_eq!(machine.selected(), &Selected::Blank);
        assert_eq!(machine.display_label(), "");
        assert!(!machine.shows_placeholder_style());
        assert_eq!(machine.effective_items(), &items()[..]);
    }

    #[test]
    fn test_external_value_change_reselects_without_notifying() {
        let (mut machine, calls) = machine(Some(default_placeholder()), None);
        machine.set_value(Some(PickerValue::Int(1)));
        assert_eq!(machine.display_label(), "A");
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_native_value_change_always_notifies() {
        let (mut machine, calls) = machine(Some(default_placeholder()), None);
        machine.native_value_changed(PickerValue::Int(2), 2);
        machine.native_value_changed(PickerValue::from("unknown"), 7);

        assert_eq!(
            *calls.lock().unwrap(),
            vec![(PickerValue::Int(2), 2), (PickerValue::from("unknown"), 7)]
        );
        assert_eq!(machine.display_label(), DEFAULT_PLACEHOLDER_LABEL);
        assert_eq!(machine.value(), None);
    }

    #[test]
    fn test_item_with_placeholder_label_gets_placeholder_style() {
        let (mut machine, _) = machine(Some(default_placeholder()), None);
        machine.set_items(vec![Item::new(DEFAULT_PLACEHOLDER_LABEL, 5)]);
        machine.set_value(Some(PickerValue::Int(5)));
        assert!(machine.shows_placeholder_style());
    }

    #[test]
    fn test_replacing_items_rederives_selection() {
        let (mut machine, _) = machine(Some(default_placeholder()), Some(PickerValue::Int(2)));
        machine.set_items(vec![Item::new("Two", 2)]);
        assert_eq!(machine.display_label(), "Two");

        machine.set_items(Vec::new());
        assert_eq!(machine.display_label(), DEFAULT_PLACEHOLDER_LABEL);
    }

    #[test]
    fn test_disabling_placeholder_drops_it_from_effective_items() {
        let (mut machine, _) = machine(Some(default_placeholder()), None);
        assert_eq!(machine.effective_items().len(), 3);
        machine.set_placeholder(None);
        assert_eq!(machine.effective_items().len(), 2);
        assert_eq!(machine.selected(), &Selected::Blank);
    }
}
