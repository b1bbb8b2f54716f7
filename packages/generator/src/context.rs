use serde::{Deserialize, Serialize};

/// What the page is being generated for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationContext {
    pub business_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_description: Option<String>,
}

impl GenerationContext {
    pub fn new(business_type: impl Into<String>) -> Self {
        Self {
            business_type: business_type.into(),
            ..Default::default()
        }
    }

    pub fn tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    pub fn target_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = Some(audience.into());
        self
    }

    pub fn store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = Some(name.into());
        self
    }

    pub fn store_description(mut self, description: impl Into<String>) -> Self {
        self.store_description = Some(description.into());
        self
    }

    /// `business_type` is present and not just whitespace
    pub fn is_complete(&self) -> bool {
        !self.business_type.trim().is_empty()
    }
}
