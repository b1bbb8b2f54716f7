use serde::{Deserialize, Serialize};
use storefront_registry::{Category, SectionDefinition};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroProps {
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub cta_href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    pub alignment: Alignment,
}

impl Default for HeroProps {
    fn default() -> Self {
        Self {
            title: "Welcome to our store".to_string(),
            subtitle: "Discover products made with care".to_string(),
            cta_label: "Shop now".to_string(),
            cta_href: "/products".to_string(),
            background_image: None,
            alignment: Alignment::Center,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturesProps {
    pub heading: String,
    pub features: Vec<Feature>,
}

impl Default for FeaturesProps {
    fn default() -> Self {
        let feature = |icon: &str, title: &str, description: &str| Feature {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        };

        Self {
            heading: "Why shop with us".to_string(),
            features: vec![
                feature("truck", "Fast delivery", "Orders ship within 24 hours."),
                feature("shield", "Secure checkout", "Pay safely with trusted providers."),
                feature("refresh", "Easy returns", "Changed your mind? Return within 30 days."),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextBlockProps {
    pub heading: String,
    pub body: String,
    pub alignment: Alignment,
}

impl Default for TextBlockProps {
    fn default() -> Self {
        Self {
            heading: "Our story".to_string(),
            body: "Tell your customers who you are and what makes your products special.".to_string(),
            alignment: Alignment::Left,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqProps {
    pub heading: String,
    pub items: Vec<FaqItem>,
}

impl Default for FaqProps {
    fn default() -> Self {
        let item = |question: &str, answer: &str| FaqItem {
            question: question.to_string(),
            answer: answer.to_string(),
        };

        Self {
            heading: "Frequently asked questions".to_string(),
            items: vec![
                item("How long does shipping take?", "Most orders arrive within 3-5 business days."),
                item("Can I return an item?", "Yes, unused items can be returned within 30 days."),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsProps {
    pub heading: String,
    pub stats: Vec<Stat>,
}

impl Default for StatsProps {
    fn default() -> Self {
        let stat = |value: &str, label: &str| Stat {
            value: value.to_string(),
            label: label.to_string(),
        };

        Self {
            heading: "By the numbers".to_string(),
            stats: vec![
                stat("10k+", "Happy customers"),
                stat("4.9", "Average rating"),
                stat("48h", "Average delivery"),
            ],
        }
    }
}

pub(crate) fn definitions() -> Vec<SectionDefinition> {
    vec![
        SectionDefinition::typed::<HeroProps>("hero", "Hero Banner", Category::Content)
            .description("Large headline with a call to action at the top of the page")
            .icon("layout")
            .variants(["centered", "split", "image-background"]),
        SectionDefinition::typed::<FeaturesProps>("features", "Features", Category::Content)
            .description("Grid of short selling points with icons")
            .icon("grid")
            .variants(["grid", "list"]),
        SectionDefinition::typed::<TextBlockProps>("text-block", "Text Block", Category::Content)
            .description("Heading and free-form paragraph text")
            .icon("type"),
        SectionDefinition::typed::<FaqProps>("faq", "FAQ", Category::Content)
            .description("Expandable list of questions and answers")
            .icon("help-circle")
            .variants(["accordion", "two-column"]),
        SectionDefinition::typed::<StatsProps>("stats", "Stats", Category::Content)
            .description("Row of headline numbers with labels")
            .icon("bar-chart"),
    ]
}
