//! # Section Registry
//!
//! Table of section definitions keyed by type id.
//!
//! - Registration order is preserved; `all()` returns definitions in the
//!   order their type was first registered.
//! - Registering an existing type replaces the definition in its original
//!   slot (last writer wins). No error is raised.
//! - Lookups never fail hard: a miss is `None`.
//! - A definition whose defaults fail its own schema is accepted and logged;
//!   [`SectionRegistry::audit`] lists them.

use crate::definition::{Category, SectionDefinition};
use crate::error::RegistryError;
use crate::renderer::Markup;
use crate::schema::{SchemaError, ValidatedProps};
use std::collections::HashMap;
use std::fmt;
use storefront_document::SectionConfig;
use storefront_props::Value;
use tracing::{debug, warn};

/// A definition whose `default_props` fail its own schema
#[derive(Debug, Clone, PartialEq)]
pub struct AuditIssue {
    pub section_type: String,
    pub error: SchemaError,
}

#[derive(Default)]
pub struct SectionRegistry {
    definitions: Vec<SectionDefinition>,
    index: HashMap<String, usize>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the definition for `definition.section_type`.
    ///
    /// Returns the replaced definition, if any.
    pub fn register(&mut self, definition: SectionDefinition) -> Option<SectionDefinition> {
        if let Err(error) = definition.schema.validate(&definition.default_props) {
            warn!(
                section_type = %definition.section_type,
                %error,
                "Default props do not satisfy the section schema"
            );
        }

        match self.index.get(&definition.section_type) {
            Some(&slot) => {
                debug!(section_type = %definition.section_type, "Replacing section definition");
                Some(std::mem::replace(&mut self.definitions[slot], definition))
            }
            None => {
                debug!(
                    section_type = %definition.section_type,
                    category = %definition.category,
                    "Registering section"
                );
                self.index
                    .insert(definition.section_type.clone(), self.definitions.len());
                self.definitions.push(definition);
                None
            }
        }
    }

    pub fn get(&self, section_type: &str) -> Option<&SectionDefinition> {
        self.index
            .get(section_type)
            .map(|&slot| &self.definitions[slot])
    }

    pub fn contains(&self, section_type: &str) -> bool {
        self.index.contains_key(section_type)
    }

    /// Every definition, in registration order
    pub fn all(&self) -> Vec<&SectionDefinition> {
        self.definitions.iter().collect()
    }

    pub fn by_category(&self, category: Category) -> Vec<&SectionDefinition> {
        self.definitions
            .iter()
            .filter(|d| d.category == category)
            .collect()
    }

    /// Registered type ids, in registration order
    pub fn types(&self) -> Vec<&str> {
        self.definitions
            .iter()
            .map(|d| d.section_type.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Drop every definition
    pub fn clear(&mut self) {
        self.definitions.clear();
        self.index.clear();
    }

    /// New instance of `section_type` seeded with its default props
    pub fn instantiate(&self, section_type: &str) -> Option<SectionConfig> {
        self.get(section_type)
            .map(|def| SectionConfig::new(def.section_type.clone(), def.default_props.clone()))
    }

    /// Check `props` against the schema of `section_type`
    pub fn validate_props(
        &self,
        section_type: &str,
        props: &Value,
    ) -> Result<ValidatedProps, RegistryError> {
        let definition = self
            .get(section_type)
            .ok_or_else(|| RegistryError::UnknownSectionType(section_type.to_string()))?;

        definition
            .schema
            .validate(props)
            .map(|value| ValidatedProps::new(section_type, value))
            .map_err(|source| RegistryError::InvalidProps {
                section_type: section_type.to_string(),
                source,
            })
    }

    pub fn validate_section(&self, section: &SectionConfig) -> Result<ValidatedProps, RegistryError> {
        self.validate_props(&section.section_type, &section.props)
    }

    /// Resolve, validate and render one section instance
    pub fn render(&self, section: &SectionConfig) -> Result<Markup, RegistryError> {
        let props = self.validate_section(section)?;
        let renderer = self
            .get(&section.section_type)
            .and_then(|def| def.renderer.as_ref())
            .ok_or_else(|| RegistryError::NoRenderer(section.section_type.clone()))?;
        Ok(renderer.render(&props))
    }

    /// Definitions whose defaults fail their own schema
    pub fn audit(&self) -> Vec<AuditIssue> {
        self.definitions
            .iter()
            .filter_map(|def| {
                def.schema
                    .validate(&def.default_props)
                    .err()
                    .map(|error| AuditIssue {
                        section_type: def.section_type.clone(),
                        error,
                    })
            })
            .collect()
    }
}

impl fmt::Debug for SectionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionRegistry")
            .field("types", &self.types())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::OpenSchema;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Default, Serialize, Deserialize)]
    struct HeroProps {
        title: String,
        #[serde(default)]
        subtitle: String,
    }

    fn hero(name: &str) -> SectionDefinition {
        SectionDefinition::typed::<HeroProps>("hero", name, Category::Content)
    }

    fn open(section_type: &str, category: Category) -> SectionDefinition {
        SectionDefinition::new(section_type, section_type, category, Arc::new(OpenSchema))
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = SectionRegistry::new();
        registry.register(hero("Hero"));

        assert_eq!(registry.get("hero").unwrap().name, "Hero");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_reregistration_overwrites_in_place() {
        let mut registry = SectionRegistry::new();
        registry.register(hero("First"));
        registry.register(open("faq", Category::Content));

        let replaced = registry.register(hero("Second"));

        assert_eq!(replaced.unwrap().name, "First");
        assert_eq!(registry.get("hero").unwrap().name, "Second");
        assert_eq!(registry.types(), vec!["hero", "faq"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_by_category_keeps_order() {
        let mut registry = SectionRegistry::new();
        registry.register(open("a", Category::Commerce));
        registry.register(open("b", Category::Social));
        registry.register(open("c", Category::Commerce));

        let commerce: Vec<_> = registry
            .by_category(Category::Commerce)
            .into_iter()
            .map(|d| d.section_type.as_str())
            .collect();
        assert_eq!(commerce, vec!["a", "c"]);
        assert!(registry.by_category(Category::Utility).is_empty());
    }

    #[test]
    fn test_clear_resets_table() {
        let mut registry = SectionRegistry::new();
        registry.register(hero("Hero"));
        registry.clear();

        assert!(registry.is_empty());
        assert!(!registry.contains("hero"));
    }

    #[test]
    fn test_instantiate_seeds_defaults() {
        let mut registry = SectionRegistry::new();
        registry.register(
            hero("Hero").default_props(Value::from(json!({ "title": "Welcome", "subtitle": "" }))),
        );

        let a = registry.instantiate("hero").unwrap();
        let b = registry.instantiate("hero").unwrap();

        assert_eq!(a.section_type, "hero");
        assert_eq!(a.props.to_json(), json!({ "title": "Welcome", "subtitle": "" }));
        assert!(a.visible);
        assert_ne!(a.id, b.id);
        assert!(registry.instantiate("nope").is_none());
    }

    #[test]
    fn test_validate_props() {
        let mut registry = SectionRegistry::new();
        registry.register(hero("Hero"));

        let ok = registry
            .validate_props("hero", &Value::from(json!({ "title": "Hi" })))
            .unwrap();
        assert_eq!(ok.value().to_json(), json!({ "title": "Hi", "subtitle": "" }));

        let err = registry
            .validate_props("hero", &Value::from(json!({ "title": false })))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidProps { .. }));

        let err = registry.validate_props("ghost", &Value::object()).unwrap_err();
        assert_eq!(err, RegistryError::UnknownSectionType("ghost".to_string()));
    }

    #[test]
    fn test_audit_flags_bad_defaults() {
        let mut registry = SectionRegistry::new();
        registry.register(hero("Hero"));
        registry.register(hero("Hero").default_props(Value::from(json!({ "title": 1 }))));
        registry.register(open("faq", Category::Content));

        let issues = registry.audit();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].section_type, "hero");
    }

    #[test]
    fn test_render_requires_renderer() {
        let mut registry = SectionRegistry::new();
        registry.register(hero("Hero").renderer(|props: &ValidatedProps| {
            let title = props.value().field("title").and_then(Value::as_str).unwrap_or_default();
            Markup::new(format!("<h1>{}</h1>", title))
        }));
        registry.register(open("bare", Category::Utility));

        let section = SectionConfig::with_id("s1", "hero", Value::from(json!({ "title": "Hi" })));
        assert_eq!(registry.render(&section).unwrap().as_str(), "<h1>Hi</h1>");

        let bare = SectionConfig::with_id("s2", "bare", Value::object());
        assert_eq!(
            registry.render(&bare).unwrap_err(),
            RegistryError::NoRenderer("bare".to_string())
        );
    }
}
