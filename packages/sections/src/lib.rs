//! # Built-in Sections
//!
//! The stock section catalog. Each section is a serde props struct whose
//! `Default` impl supplies the content a freshly added section starts with;
//! the struct itself is the schema (see `TypedSchema`).

mod commerce;
mod content;
mod social;
mod utility;

pub use commerce::{CtaProps, Plan, PricingProps, ProductGridProps};
pub use content::{Alignment, FaqItem, FaqProps, Feature, FeaturesProps, HeroProps, Stat, StatsProps, TextBlockProps};
pub use social::{GalleryImage, GalleryProps, Logo, LogoCloudProps, Testimonial, TestimonialsProps};
pub use utility::{ContactProps, NewsletterProps, SpacerProps};

use storefront_registry::SectionRegistry;

/// Register every built-in section, content first, utility last
pub fn register_builtin_sections(registry: &mut SectionRegistry) {
    let definitions = content::definitions()
        .into_iter()
        .chain(commerce::definitions())
        .chain(social::definitions())
        .chain(utility::definitions());

    for definition in definitions {
        registry.register(definition);
    }
}

/// A registry holding only the built-in sections
pub fn builtin_registry() -> SectionRegistry {
    let mut registry = SectionRegistry::new();
    register_builtin_sections(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_props::Value;
    use storefront_registry::Category;

    #[test]
    fn test_builtin_catalog() {
        let registry = builtin_registry();

        assert_eq!(
            registry.types(),
            vec![
                "hero", "features", "text-block", "faq", "stats",
                "product-grid", "pricing", "cta",
                "testimonials", "logo-cloud", "gallery",
                "newsletter", "contact", "spacer",
            ]
        );
        for category in Category::ALL {
            assert!(!registry.by_category(category).is_empty(), "{}", category);
        }
    }

    #[test]
    fn test_builtin_defaults_satisfy_schemas() {
        assert!(builtin_registry().audit().is_empty());
    }

    #[test]
    fn test_every_builtin_has_metadata() {
        for def in builtin_registry().all() {
            assert!(!def.name.is_empty(), "{}", def.section_type);
            assert!(!def.description.is_empty(), "{}", def.section_type);
            assert!(!def.icon.is_empty(), "{}", def.section_type);
            assert!(def.default_props.as_object().is_some(), "{}", def.section_type);
        }
    }

    #[test]
    fn test_partial_props_are_completed_from_defaults() {
        let registry = builtin_registry();
        let props = Value::from(json!({ "title": "Fresh bread daily" }));

        let validated = registry.validate_props("hero", &props).unwrap();
        let hero: HeroProps = validated.deserialize().unwrap();

        assert_eq!(hero.title, "Fresh bread daily");
        assert_eq!(hero.cta_label, "Shop now");
        assert_eq!(hero.alignment, Alignment::Center);
    }

    #[test]
    fn test_wrong_prop_types_are_rejected() {
        let registry = builtin_registry();
        let props = Value::from(json!({ "columns": "three" }));
        assert!(registry.validate_props("product-grid", &props).is_err());

        let props = Value::from(json!({ "alignment": "diagonal" }));
        assert!(registry.validate_props("text-block", &props).is_err());
    }
}
