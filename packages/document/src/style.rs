use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-element style overrides, keyed by sub-element path
pub type ElementStyles = BTreeMap<String, ElementStyle>;

/// Visual override for one sub-element of a section.
///
/// Every field is optional; an unset field falls back to the section's own
/// styling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
}

impl ElementStyle {
    pub fn is_empty(&self) -> bool {
        *self == ElementStyle::default()
    }

    /// Overlay every field set in `partial` onto a copy of `self`
    pub fn merge(&self, partial: &ElementStyle) -> ElementStyle {
        fn pick(over: &Option<String>, base: &Option<String>) -> Option<String> {
            over.clone().or_else(|| base.clone())
        }

        ElementStyle {
            font_size: pick(&partial.font_size, &self.font_size),
            font_weight: pick(&partial.font_weight, &self.font_weight),
            color: pick(&partial.color, &self.color),
            text_align: pick(&partial.text_align, &self.text_align),
            padding: pick(&partial.padding, &self.padding),
            margin: pick(&partial.margin, &self.margin),
            border_radius: pick(&partial.border_radius, &self.border_radius),
            line_height: pick(&partial.line_height, &self.line_height),
        }
    }
}
