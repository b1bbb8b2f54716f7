//! Persisted JSON shape of landing-page documents

use serde_json::json;
use storefront_document::{
    validate_landing_pages, ElementStyle, LandingPagesConfig, PageConfig, SectionConfig, Seo,
};
use storefront_props::Value;

#[test]
fn test_landing_pages_roundtrip_through_validation() {
    let mut hero = SectionConfig::with_id(
        "hero-1",
        "hero",
        Value::from(json!({ "title": "Fresh bread", "cta": { "label": "Order" } })),
    );
    hero.element_styles.insert(
        "title".to_string(),
        ElementStyle {
            color: Some("#222".to_string()),
            ..Default::default()
        },
    );

    let mut page = PageConfig::new("home", "/", "Home");
    page.sections.push(hero);
    page.seo = Some(Seo {
        title: Some("Bakery".to_string()),
        description: None,
        og_image: Some("https://example.com/og.jpg".to_string()),
    });

    let config = LandingPagesConfig {
        pages: vec![page],
        home_page_id: Some("home".to_string()),
        ..Default::default()
    };

    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["homePageId"], "home");
    assert_eq!(json["pages"][0]["sections"][0]["type"], "hero");
    assert_eq!(json["pages"][0]["sections"][0]["elementStyles"]["title"]["color"], "#222");
    assert_eq!(json["pages"][0]["seo"]["ogImage"], "https://example.com/og.jpg");

    let back = validate_landing_pages(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_section_defaults_when_deserializing() {
    let section: SectionConfig =
        serde_json::from_value(json!({ "id": "s", "type": "faq" })).unwrap();

    assert!(section.visible);
    assert_eq!(section.props, Value::object());
    assert!(section.element_styles.is_empty());
}
