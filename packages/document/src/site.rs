use crate::model::PageConfig;
use serde::{Deserialize, Serialize};

/// Version tag written into new documents
pub const DEFAULT_VERSION: &str = "1";

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

/// All landing pages of one store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPagesConfig {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub pages: Vec<PageConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_page_id: Option<String>,
}

impl Default for LandingPagesConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            pages: Vec::new(),
            home_page_id: None,
        }
    }
}

impl LandingPagesConfig {
    pub fn page(&self, id: &str) -> Option<&PageConfig> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn page_by_slug(&self, slug: &str) -> Option<&PageConfig> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    /// The designated home page, falling back to the first page
    pub fn home_page(&self) -> Option<&PageConfig> {
        self.home_page_id
            .as_deref()
            .and_then(|id| self.page(id))
            .or_else(|| self.pages.first())
    }

    /// Copy with `page` inserted, replacing any page with the same id in place
    pub fn with_page(&self, page: PageConfig) -> LandingPagesConfig {
        let mut next = self.clone();
        match next.pages.iter().position(|p| p.id == page.id) {
            Some(position) => next.pages[position] = page,
            None => next.pages.push(page),
        }
        next
    }

    /// Copy without page `id`; a home page designation pointing at it is cleared
    pub fn without_page(&self, id: &str) -> Option<LandingPagesConfig> {
        let position = self.pages.iter().position(|p| p.id == id)?;
        let mut next = self.clone();
        next.pages.remove(position);
        if next.home_page_id.as_deref() == Some(id) {
            next.home_page_id = None;
        }
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> LandingPagesConfig {
        LandingPagesConfig {
            pages: vec![
                PageConfig::new("home", "/", "Home"),
                PageConfig::new("sale", "/sale", "Sale"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_home_page_falls_back_to_first() {
        let mut config = site();
        assert_eq!(config.home_page().unwrap().id, "home");

        config.home_page_id = Some("sale".to_string());
        assert_eq!(config.home_page().unwrap().id, "sale");

        config.home_page_id = Some("gone".to_string());
        assert_eq!(config.home_page().unwrap().id, "home");
    }

    #[test]
    fn test_with_page_replaces_in_place() {
        let config = site();
        let next = config.with_page(PageConfig::new("home", "/", "Welcome"));
        assert_eq!(next.pages.len(), 2);
        assert_eq!(next.pages[0].title, "Welcome");

        let next = config.with_page(PageConfig::new("about", "/about", "About"));
        assert_eq!(next.pages.len(), 3);
        assert_eq!(next.page_by_slug("/about").unwrap().id, "about");
    }

    #[test]
    fn test_without_page_clears_home_designation() {
        let mut config = site();
        config.home_page_id = Some("sale".to_string());

        let next = config.without_page("sale").unwrap();
        assert!(next.home_page_id.is_none());
        assert!(config.without_page("missing").is_none());
    }

    #[test]
    fn test_version_defaults_when_missing() {
        let config: LandingPagesConfig = serde_json::from_str(r#"{ "pages": [] }"#).unwrap();
        assert_eq!(config.version, DEFAULT_VERSION);
    }
}
