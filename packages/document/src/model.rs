//! # Page and Section Records

use crate::style::{ElementStyle, ElementStyles};
use serde::{Deserialize, Serialize};
use storefront_props::Value;
use uuid::Uuid;

/// Generate a fresh section id
pub fn new_section_id() -> String {
    format!("section-{}", Uuid::new_v4().simple())
}

fn default_props() -> Value {
    Value::object()
}

fn default_visible() -> bool {
    true
}

/// One placed instance of a section on a page.
///
/// `section_type` is expected to name a registered definition, but nothing
/// checks that here; resolution happens when the section is rendered or a
/// generated page is validated in strict mode. `props` is an unvalidated
/// draft until checked against the definition's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    pub id: String,

    #[serde(rename = "type")]
    pub section_type: String,

    #[serde(default = "default_props")]
    pub props: Value,

    #[serde(default = "default_visible")]
    pub visible: bool,

    #[serde(default, skip_serializing_if = "ElementStyles::is_empty")]
    pub element_styles: ElementStyles,
}

impl SectionConfig {
    /// New visible instance with a freshly generated id
    pub fn new(section_type: impl Into<String>, props: Value) -> Self {
        Self::with_id(new_section_id(), section_type, props)
    }

    pub fn with_id(id: impl Into<String>, section_type: impl Into<String>, props: Value) -> Self {
        Self {
            id: id.into(),
            section_type: section_type.into(),
            props,
            visible: true,
            element_styles: ElementStyles::new(),
        }
    }

    pub fn element_style(&self, path: &str) -> Option<&ElementStyle> {
        self.element_styles.get(path)
    }
}

/// Search-engine and social-card metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

/// A landing page: metadata plus sections in render order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub id: String,
    pub slug: String,
    pub title: String,

    #[serde(default)]
    pub sections: Vec<SectionConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
}

impl PageConfig {
    /// Empty page
    pub fn new(id: impl Into<String>, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            sections: Vec::new(),
            seo: None,
        }
    }

    pub fn section(&self, id: &str) -> Option<&SectionConfig> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Copy with `section` inserted at `index` (appended when `None` or past the end)
    pub fn with_section_inserted(&self, index: Option<usize>, section: SectionConfig) -> PageConfig {
        let mut next = self.clone();
        let at = index.map_or(next.sections.len(), |i| i.min(next.sections.len()));
        next.sections.insert(at, section);
        next
    }

    /// Copy without the section `id`, or `None` if there is no such section
    pub fn without_section(&self, id: &str) -> Option<PageConfig> {
        let position = self.position(id)?;
        let mut next = self.clone();
        next.sections.remove(position);
        Some(next)
    }

    /// Copy with the section at `from` moved to `to`, or `None` when either
    /// index is out of range
    pub fn with_section_moved(&self, from: usize, to: usize) -> Option<PageConfig> {
        let len = self.sections.len();
        if from >= len || to >= len {
            return None;
        }
        let mut next = self.clone();
        let moved = next.sections.remove(from);
        next.sections.insert(to, moved);
        Some(next)
    }

    /// Copy with the section sharing `section.id` replaced
    pub fn with_section_replaced(&self, section: SectionConfig) -> Option<PageConfig> {
        let position = self.position(&section.id)?;
        let mut next = self.clone();
        next.sections[position] = section;
        Some(next)
    }

    /// Ids appearing more than once, in first-seen order
    pub fn duplicate_section_ids(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates: Vec<&str> = Vec::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) && !duplicates.contains(&section.id.as_str()) {
                duplicates.push(&section.id);
            }
        }
        duplicates
    }
}
