use crate::error::RegistryError;
use crate::renderer::SectionRenderer;
use crate::schema::{PropsSchema, TypedSchema};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use storefront_props::Value;

/// Section grouping shown in the section picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Content,
    Commerce,
    Social,
    Utility,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Content,
        Category::Commerce,
        Category::Social,
        Category::Utility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Content => "content",
            Category::Commerce => "commerce",
            Category::Social => "social",
            Category::Utility => "utility",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RegistryError::UnknownCategory(s.to_string()))
    }
}

/// Type-level description of a section
#[derive(Clone)]
pub struct SectionDefinition {
    pub section_type: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: Category,
    pub default_props: Value,
    pub schema: Arc<dyn PropsSchema>,
    /// Layout variants; empty means no variant switcher
    pub variants: Vec<String>,
    pub renderer: Option<Arc<dyn SectionRenderer>>,
}

impl SectionDefinition {
    /// Definition with empty defaults and no renderer
    pub fn new(
        section_type: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        schema: Arc<dyn PropsSchema>,
    ) -> Self {
        Self {
            section_type: section_type.into(),
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            category,
            default_props: Value::object(),
            schema,
            variants: Vec::new(),
            renderer: None,
        }
    }

    /// Definition whose schema is `T` and whose defaults are `T::default()`
    pub fn typed<T>(section_type: impl Into<String>, name: impl Into<String>, category: Category) -> Self
    where
        T: Default + Serialize + DeserializeOwned + 'static,
    {
        let defaults = serde_json::to_value(T::default())
            .map(Value::from)
            .unwrap_or_else(|_| Value::object());

        Self::new(section_type, name, category, Arc::new(TypedSchema::<T>::new()))
            .default_props(defaults)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn default_props(mut self, props: Value) -> Self {
        self.default_props = props;
        self
    }

    pub fn variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants = variants.into_iter().map(Into::into).collect();
        self
    }

    pub fn renderer(mut self, renderer: impl SectionRenderer + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }
}

impl fmt::Debug for SectionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionDefinition")
            .field("section_type", &self.section_type)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("variants", &self.variants)
            .field("has_renderer", &self.renderer.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Deserialize)]
    struct QuoteProps {
        text: String,
        author: String,
    }

    impl Default for QuoteProps {
        fn default() -> Self {
            Self {
                text: "Great shop".to_string(),
                author: "A customer".to_string(),
            }
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("commerce".parse::<Category>().unwrap(), Category::Commerce);
        assert_eq!(" Social ".parse::<Category>().unwrap(), Category::Social);
        assert!("misc".parse::<Category>().is_err());
    }

    #[test]
    fn test_typed_definition_uses_default_impl() {
        let def = SectionDefinition::typed::<QuoteProps>("quote", "Quote", Category::Social)
            .variants(["card", "plain"]);

        assert_eq!(
            def.default_props.to_json(),
            json!({ "text": "Great shop", "author": "A customer" })
        );
        assert!(def.has_variants());
        assert!(def.schema.validate(&def.default_props).is_ok());
    }
}
