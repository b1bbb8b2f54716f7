use serde::{Deserialize, Serialize};
use storefront_registry::{Category, SectionDefinition};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsletterProps {
    pub heading: String,
    pub body: String,
    pub placeholder: String,
    pub button_label: String,
}

impl Default for NewsletterProps {
    fn default() -> Self {
        Self {
            heading: "Stay in the loop".to_string(),
            body: "New arrivals and offers, straight to your inbox.".to_string(),
            placeholder: "you@example.com".to_string(),
            button_label: "Subscribe".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactProps {
    pub heading: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub show_form: bool,
}

impl Default for ContactProps {
    fn default() -> Self {
        Self {
            heading: "Get in touch".to_string(),
            email: "hello@example.com".to_string(),
            phone: String::new(),
            address: String::new(),
            show_form: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacerProps {
    /// CSS length
    pub height: String,
}

impl Default for SpacerProps {
    fn default() -> Self {
        Self {
            height: "48px".to_string(),
        }
    }
}

pub(crate) fn definitions() -> Vec<SectionDefinition> {
    vec![
        SectionDefinition::typed::<NewsletterProps>("newsletter", "Newsletter Signup", Category::Utility)
            .description("Email capture form")
            .icon("mail"),
        SectionDefinition::typed::<ContactProps>("contact", "Contact", Category::Utility)
            .description("Contact details with an optional message form")
            .icon("phone"),
        SectionDefinition::typed::<SpacerProps>("spacer", "Spacer", Category::Utility)
            .description("Vertical whitespace between sections")
            .icon("move-vertical"),
    ]
}
