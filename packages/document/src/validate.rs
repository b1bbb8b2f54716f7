//! # Document Validation
//!
//! Turns untrusted JSON into a [`PageConfig`] or a list of field issues.
//!
//! Rules for a page:
//! - `id`, `slug`, `title`: non-empty strings
//! - `sections`: array of objects, each with non-empty `id` and `type`, an
//!   object `props` and a boolean `visible`; `elementStyles`, when present,
//!   maps paths to objects of string fields
//! - `seo` (optional, `null` allowed): string `title`/`description`, and
//!   `ogImage` must parse as an absolute URL
//!
//! Unknown keys are ignored. All issues are collected before failing so a
//! caller can show every problem at once.

use crate::model::PageConfig;
use crate::site::LandingPagesConfig;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// One problem at one location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Location such as `sections[2].visible` (empty for the root)
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Validation failed: {}", join_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Whether any issue is reported at exactly `path`
    pub fn has_issue_at(&self, path: &str) -> bool {
        self.issues.iter().any(|issue| issue.path == path)
    }
}

/// Validate a page and build the typed record
pub fn validate_page(value: &Value) -> Result<PageConfig, ValidationError> {
    let mut issues = Vec::new();
    check_page(value, "", &mut issues);
    finish(value, issues)
}

/// Validate a whole landing-pages document
pub fn validate_landing_pages(value: &Value) -> Result<LandingPagesConfig, ValidationError> {
    let mut issues = Vec::new();

    match value.as_object() {
        None => issues.push(FieldIssue::new("", "expected an object")),
        Some(root) => {
            if let Some(version) = root.get("version") {
                if !version.is_string() {
                    issues.push(FieldIssue::new("version", "expected a string"));
                }
            }

            let mut page_ids = Vec::new();
            match root.get("pages") {
                None => issues.push(FieldIssue::new("pages", "required")),
                Some(Value::Array(pages)) => {
                    for (i, page) in pages.iter().enumerate() {
                        check_page(page, &format!("pages[{}].", i), &mut issues);
                        if let Some(id) = page.get("id").and_then(Value::as_str) {
                            page_ids.push(id);
                        }
                    }
                }
                Some(_) => issues.push(FieldIssue::new("pages", "expected an array")),
            }

            match root.get("homePageId") {
                None | Some(Value::Null) => {}
                Some(Value::String(id)) => {
                    if !page_ids.contains(&id.as_str()) {
                        issues.push(FieldIssue::new(
                            "homePageId",
                            format!("no page with id '{}'", id),
                        ));
                    }
                }
                Some(_) => issues.push(FieldIssue::new("homePageId", "expected a string")),
            }
        }
    }

    finish(value, issues)
}

fn finish<T: serde::de::DeserializeOwned>(
    value: &Value,
    mut issues: Vec<FieldIssue>,
) -> Result<T, ValidationError> {
    if issues.is_empty() {
        match serde_json::from_value(value.clone()) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => issues.push(FieldIssue::new("", e.to_string())),
        }
    }
    Err(ValidationError { issues })
}

fn check_page(value: &Value, prefix: &str, issues: &mut Vec<FieldIssue>) {
    let Some(page) = value.as_object() else {
        issues.push(FieldIssue::new(prefix.trim_end_matches('.'), "expected an object"));
        return;
    };

    for field in ["id", "slug", "title"] {
        check_non_empty_string(page, field, prefix, issues);
    }

    match page.get("sections") {
        None => issues.push(FieldIssue::new(format!("{}sections", prefix), "required")),
        Some(Value::Array(sections)) => {
            for (i, section) in sections.iter().enumerate() {
                check_section(section, &format!("{}sections[{}]", prefix, i), issues);
            }
        }
        Some(_) => issues.push(FieldIssue::new(
            format!("{}sections", prefix),
            "expected an array",
        )),
    }

    match page.get("seo") {
        None | Some(Value::Null) => {}
        Some(Value::Object(seo)) => check_seo(seo, &format!("{}seo", prefix), issues),
        Some(_) => issues.push(FieldIssue::new(format!("{}seo", prefix), "expected an object")),
    }
}

fn check_section(value: &Value, path: &str, issues: &mut Vec<FieldIssue>) {
    let Some(section) = value.as_object() else {
        issues.push(FieldIssue::new(path, "expected an object"));
        return;
    };
    let prefix = format!("{}.", path);

    check_non_empty_string(section, "id", &prefix, issues);
    check_non_empty_string(section, "type", &prefix, issues);

    match section.get("props") {
        None => issues.push(FieldIssue::new(format!("{}props", prefix), "required")),
        Some(Value::Object(_)) => {}
        Some(_) => issues.push(FieldIssue::new(format!("{}props", prefix), "expected an object")),
    }

    match section.get("visible") {
        None => issues.push(FieldIssue::new(format!("{}visible", prefix), "required")),
        Some(Value::Bool(_)) => {}
        Some(_) => issues.push(FieldIssue::new(format!("{}visible", prefix), "expected a boolean")),
    }

    match section.get("elementStyles") {
        None | Some(Value::Null) => {}
        Some(Value::Object(styles)) => {
            for (key, style) in styles {
                let style_path = format!("{}elementStyles.{}", prefix, key);
                match style.as_object() {
                    None => issues.push(FieldIssue::new(style_path, "expected an object")),
                    Some(fields) => {
                        for (name, field) in fields {
                            if !field.is_string() {
                                issues.push(FieldIssue::new(
                                    format!("{}.{}", style_path, name),
                                    "expected a string",
                                ));
                            }
                        }
                    }
                }
            }
        }
        Some(_) => issues.push(FieldIssue::new(
            format!("{}elementStyles", prefix),
            "expected an object",
        )),
    }
}

fn check_seo(seo: &Map<String, Value>, path: &str, issues: &mut Vec<FieldIssue>) {
    for field in ["title", "description", "ogImage"] {
        match seo.get(field) {
            None => {}
            Some(Value::String(text)) => {
                if field == "ogImage" && url::Url::parse(text).is_err() {
                    issues.push(FieldIssue::new(
                        format!("{}.{}", path, field),
                        "expected a valid URL",
                    ));
                }
            }
            Some(_) => issues.push(FieldIssue::new(
                format!("{}.{}", path, field),
                "expected a string",
            )),
        }
    }
}

fn check_non_empty_string(
    object: &Map<String, Value>,
    field: &str,
    prefix: &str,
    issues: &mut Vec<FieldIssue>,
) {
    let path = format!("{}{}", prefix, field);
    match object.get(field) {
        None => issues.push(FieldIssue::new(path, "required")),
        Some(Value::String(s)) if s.is_empty() => issues.push(FieldIssue::new(path, "must not be empty")),
        Some(Value::String(_)) => {}
        Some(_) => issues.push(FieldIssue::new(path, "expected a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_page() {
        let page = validate_page(&json!({
            "id": "landing", "slug": "/", "title": "Home", "sections": [], "seo": {}
        }))
        .unwrap();

        assert_eq!(page.id, "landing");
        assert!(page.sections.is_empty());
        assert_eq!(page.seo, Some(Default::default()));
    }

    #[test]
    fn test_collects_every_issue() {
        let err = validate_page(&json!({
            "id": "",
            "slug": 4,
            "sections": [
                { "id": "s1", "type": "hero", "props": {}, "visible": true },
                { "id": "s2", "type": "", "props": [], "visible": "yes" }
            ]
        }))
        .unwrap_err();

        assert!(err.has_issue_at("id"));
        assert!(err.has_issue_at("slug"));
        assert!(err.has_issue_at("title"));
        assert!(err.has_issue_at("sections[1].type"));
        assert!(err.has_issue_at("sections[1].props"));
        assert!(err.has_issue_at("sections[1].visible"));
        assert!(!err.issues.iter().any(|i| i.path.starts_with("sections[0]")));
    }

    #[test]
    fn test_seo_image_must_be_url() {
        let base = json!({ "id": "p", "slug": "/", "title": "T", "sections": [] });

        let mut bad = base.clone();
        bad["seo"] = json!({ "ogImage": "not a url" });
        assert!(validate_page(&bad).unwrap_err().has_issue_at("seo.ogImage"));

        let mut good = base.clone();
        good["seo"] = json!({ "title": "T", "ogImage": "https://cdn.example.com/og.png" });
        let page = validate_page(&good).unwrap();
        assert_eq!(
            page.seo.unwrap().og_image.as_deref(),
            Some("https://cdn.example.com/og.png")
        );
    }

    #[test]
    fn test_null_seo_is_absent() {
        let page = validate_page(&json!({
            "id": "p", "slug": "/", "title": "T", "sections": [], "seo": null
        }))
        .unwrap();
        assert!(page.seo.is_none());
    }

    #[test]
    fn test_non_object_root() {
        let err = validate_page(&json!("page")).unwrap_err();
        assert_eq!(err.issues, vec![FieldIssue::new("", "expected an object")]);
    }

    #[test]
    fn test_error_message_lists_paths() {
        let err = validate_page(&json!({ "id": "p", "slug": "/", "title": "T" })).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: sections: required");
    }

    #[test]
    fn test_landing_pages_prefixes_page_issues() {
        let err = validate_landing_pages(&json!({
            "version": "1",
            "pages": [
                { "id": "home", "slug": "/", "title": "Home", "sections": [] },
                { "id": "b", "slug": "/b", "sections": [] }
            ],
            "homePageId": "missing"
        }))
        .unwrap_err();

        assert!(err.has_issue_at("pages[1].title"));
        assert!(err.has_issue_at("homePageId"));
    }

    #[test]
    fn test_landing_pages_valid() {
        let config = validate_landing_pages(&json!({
            "version": "2",
            "pages": [{ "id": "home", "slug": "/", "title": "Home", "sections": [] }],
            "homePageId": "home"
        }))
        .unwrap();

        assert_eq!(config.version, "2");
        assert_eq!(config.home_page().unwrap().id, "home");
    }
}
