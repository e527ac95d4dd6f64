//! Styles and pass-through props
//!
//! Host primitives accept free-form property maps, so both styles and props
//! are modelled as an ordered [`PropMap`]. Layering follows host style-array
//! semantics: maps are merged left to right and later keys win.

use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use tumbler_core::ModalAnimation;

/// Ordered property map handed to a host primitive
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropMap(IndexMap<String, Value>);

/// Style of a single primitive region
pub type Style = PropMap;

/// Opaque props merged into a primitive after the picker's own
pub type Props = PropMap;

impl PropMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, builder style
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Merge `other` on top of `self`
    pub fn merge(&mut self, other: &PropMap) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Flatten layers into one map, later layers winning
    pub fn layered<'a>(layers: impl IntoIterator<Item = &'a PropMap>) -> PropMap {
        let mut merged = PropMap::new();
        for layer in layers {
            merged.merge(layer);
        }
        merged
    }
}

/// Modal props: typed `animationType`, everything else passed through
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalProps {
    /// Animation for user-initiated toggles (defaults to slide)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_type: Option<ModalAnimation>,
    #[serde(flatten)]
    pub extra: Props,
}

impl ModalProps {
    /// The configured animation style
    pub fn animation(&self) -> ModalAnimation {
        self.animation_type.unwrap_or_default()
    }
}

/// Per-region style overrides
///
/// Every region defaults to an empty style, which merges as a no-op.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerStyle {
    #[serde(skip_serializing_if = "PropMap::is_empty")]
    pub view_container: Style,
    #[serde(rename = "inputIOS", skip_serializing_if = "PropMap::is_empty")]
    pub input_ios: Style,
    #[serde(skip_serializing_if = "PropMap::is_empty")]
    pub input_android: Style,
    #[serde(rename = "inputIOSContainer", skip_serializing_if = "PropMap::is_empty")]
    pub input_ios_container: Style,
    #[serde(skip_serializing_if = "PropMap::is_empty")]
    pub input_android_container: Style,
    #[serde(skip_serializing_if = "PropMap::is_empty")]
    pub placeholder: Style,
    #[serde(skip_serializing_if = "PropMap::is_empty")]
    pub chevron_container: Style,
    #[serde(skip_serializing_if = "PropMap::is_empty")]
    pub chevron: Style,
    #[serde(skip_serializing_if = "PropMap::is_empty")]
    pub chevron_up: Style,
    #[serde(skip_serializing_if = "PropMap::is_empty")]
    pub chevron_down: Style,
    #[serde(skip_serializing_if = "PropMap::is_empty")]
    pub chevron_active: Style,
    #[serde(skip_serializing_if = "PropMap::is_empty")]
    pub done: Style,
    #[serde(skip_serializing_if = "PropMap::is_empty")]
    pub modal_view_top: Style,
    #[serde(skip_serializing_if = "PropMap::is_empty")]
    pub modal_view_middle: Style,
    #[serde(skip_serializing_if = "PropMap::is_empty")]
    pub modal_view_bottom: Style,
    #[serde(skip_serializing_if = "PropMap::is_empty")]
    pub icon_container: Style,
    #[serde(skip_serializing_if = "PropMap::is_empty")]
    pub headless_android_picker: Style,
    #[serde(skip_serializing_if = "PropMap::is_empty")]
    pub headless_android_container: Style,
}

static DEFAULT_STYLES: OnceLock<PickerStyle> = OnceLock::new();

/// Built-in look of every region
pub fn default_styles() -> &'static PickerStyle {
    DEFAULT_STYLES.get_or_init(|| PickerStyle {
        view_container: Style::new().set("alignSelf", "stretch"),
        icon_container: Style::new().set("position", "absolute").set("right", 0),
        modal_view_top: Style::new().set("flex", 1),
        modal_view_middle: Style::new()
            .set("height", 44)
            .set("flexDirection", "row")
            .set("justifyContent", "space-between")
            .set("alignItems", "center")
            .set("paddingHorizontal", 10)
            .set("backgroundColor", "#EFF1F2")
            .set("borderTopWidth", 0.5)
            .set("borderTopColor", "#919498"),
        chevron_container: Style::new().set("flexDirection", "row"),
        chevron: Style::new()
            .set("width", 15)
            .set("height", 15)
            .set("backgroundColor", "transparent")
            .set("borderColor", "#D0D4DB")
            .set("borderTopWidth", 1.5)
            .set("borderRightWidth", 1.5),
        chevron_up: Style::new()
            .set("marginLeft", 11)
            .set("transform", json!([{ "translateY": 4 }, { "rotate": "-45deg" }])),
        chevron_down: Style::new()
            .set("marginLeft", 22)
            .set("transform", json!([{ "translateY": -5 }, { "rotate": "135deg" }])),
        chevron_active: Style::new().set("borderColor", "#007AFE"),
        done: Style::new()
            .set("color", "#007AFE")
            .set("fontWeight", "bold")
            .set("fontSize", 15)
            .set("paddingTop", 1)
            .set("paddingRight", 2),
        modal_view_bottom: Style::new()
            .set("justifyContent", "center")
            .set("backgroundColor", "#D0D4DB"),
        placeholder: Style::new().set("color", "#C7C7CD"),
        headless_android_picker: Style::new()
            .set("position", "absolute")
            .set("width", "100%")
            .set("height", "100%")
            .set("color", "transparent")
            .set("opacity", 0),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layered_later_wins() {
        let base = Style::new().set("color", "red").set("flex", 1);
        let over = Style::new().set("color", "blue");
        let merged = Style::layered([&base, &over]);

        assert_eq!(merged.get("color"), Some(&json!("blue")));
        assert_eq!(merged.get("flex"), Some(&json!(1)));
        let keys: Vec<_> = merged.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["color", "flex"]);
    }

    #[test]
    fn test_region_names_deserialize() {
        let style: PickerStyle = serde_json::from_value(json!({
            "inputIOS": { "fontSize": 16 },
            "headlessAndroidContainer": { "flex": 1 },
            "chevronActive": { "borderColor": "green" }
        }))
        .unwrap();

        assert_eq!(style.input_ios.get("fontSize"), Some(&json!(16)));
        assert_eq!(style.headless_android_container.get("flex"), Some(&json!(1)));
        assert_eq!(style.chevron_active.get("borderColor"), Some(&json!("green")));
        assert!(style.input_android.is_empty());
    }

    #[test]
    fn test_modal_props_split_animation_from_extras() {
        let props: ModalProps = serde_json::from_value(json!({
            "animationType": "fade",
            "presentationStyle": "overFullScreen"
        }))
        .unwrap();

        assert_eq!(props.animation(), ModalAnimation::Fade);
        assert_eq!(props.extra.get("presentationStyle"), Some(&json!("overFullScreen")));
        assert_eq!(props.extra.get("animationType"), None);
        assert_eq!(ModalProps::default().animation(), ModalAnimation::Slide);
    }

    #[test]
    fn test_default_styles_cover_accessory_bar() {
        let defaults = default_styles();
        assert_eq!(defaults.modal_view_middle.get("height"), Some(&json!(44)));
        assert_eq!(defaults.placeholder.get("color"), Some(&json!("#C7C7CD")));
        assert_eq!(defaults.headless_android_picker.get("opacity"), Some(&json!(0)));
        assert!(defaults.input_ios.is_empty());
    }
}
