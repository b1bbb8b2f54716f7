use serde::{Deserialize, Serialize};
use storefront_registry::{Category, SectionDefinition};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductGridProps {
    pub heading: String,
    /// Collection handle the grid pulls products from
    pub collection: String,
    pub columns: u8,
    pub limit: u8,
    pub show_prices: bool,
}

impl Default for ProductGridProps {
    fn default() -> Self {
        Self {
            heading: "Featured products".to_string(),
            collection: "featured".to_string(),
            columns: 3,
            limit: 6,
            show_prices: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub features: Vec<String>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingProps {
    pub heading: String,
    pub plans: Vec<Plan>,
}

impl Default for PricingProps {
    fn default() -> Self {
        Self {
            heading: "Choose your plan".to_string(),
            plans: vec![
                Plan {
                    name: "Starter".to_string(),
                    price: "$9".to_string(),
                    period: "month".to_string(),
                    features: vec!["1 box per month".to_string(), "Free shipping".to_string()],
                    highlighted: false,
                },
                Plan {
                    name: "Family".to_string(),
                    price: "$24".to_string(),
                    period: "month".to_string(),
                    features: vec![
                        "3 boxes per month".to_string(),
                        "Free shipping".to_string(),
                        "Priority support".to_string(),
                    ],
                    highlighted: true,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaProps {
    pub heading: String,
    pub body: String,
    pub button_label: String,
    pub button_href: String,
}

impl Default for CtaProps {
    fn default() -> Self {
        Self {
            heading: "Ready to order?".to_string(),
            body: "Join thousands of happy customers today.".to_string(),
            button_label: "Start shopping".to_string(),
            button_href: "/products".to_string(),
        }
    }
}

pub(crate) fn definitions() -> Vec<SectionDefinition> {
    vec![
        SectionDefinition::typed::<ProductGridProps>("product-grid", "Product Grid", Category::Commerce)
            .description("Products from a collection laid out in a grid")
            .icon("shopping-bag")
            .variants(["grid", "carousel"]),
        SectionDefinition::typed::<PricingProps>("pricing", "Pricing Table", Category::Commerce)
            .description("Side-by-side plans or bundles with prices")
            .icon("tag"),
        SectionDefinition::typed::<CtaProps>("cta", "Call to Action", Category::Commerce)
            .description("Short pitch with a single prominent button")
            .icon("mouse-pointer")
            .variants(["banner", "card"]),
    ]
}
