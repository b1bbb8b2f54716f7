use serde::{Deserialize, Serialize};
use storefront_registry::{Category, SectionDefinition};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialsProps {
    pub heading: String,
    pub testimonials: Vec<Testimonial>,
}

impl Default for TestimonialsProps {
    fn default() -> Self {
        let testimonial = |quote: &str, name: &str, role: &str| Testimonial {
            quote: quote.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            avatar: None,
        };

        Self {
            heading: "What our customers say".to_string(),
            testimonials: vec![
                testimonial("Absolutely love the quality.", "Priya S.", "Verified buyer"),
                testimonial("Fast shipping and great support.", "Daniel K.", "Verified buyer"),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Logo {
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoCloudProps {
    pub heading: String,
    pub logos: Vec<Logo>,
}

impl Default for LogoCloudProps {
    fn default() -> Self {
        Self {
            heading: "As featured in".to_string(),
            logos: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryProps {
    pub heading: String,
    pub images: Vec<GalleryImage>,
    pub columns: u8,
}

impl Default for GalleryProps {
    fn default() -> Self {
        Self {
            heading: "Gallery".to_string(),
            images: Vec::new(),
            columns: 3,
        }
    }
}

pub(crate) fn definitions() -> Vec<SectionDefinition> {
    vec![
        SectionDefinition::typed::<TestimonialsProps>("testimonials", "Testimonials", Category::Social)
            .description("Customer quotes with names and roles")
            .icon("message-square")
            .variants(["cards", "carousel"]),
        SectionDefinition::typed::<LogoCloudProps>("logo-cloud", "Logo Cloud", Category::Social)
            .description("Row of press or partner logos")
            .icon("award"),
        SectionDefinition::typed::<GalleryProps>("gallery", "Image Gallery", Category::Social)
            .description("Grid of photos, e.g. customer or product shots")
            .icon("image")
            .variants(["grid", "masonry"]),
    ]
}
