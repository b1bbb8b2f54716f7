//! # Generation Pipeline
//!
//! ```text
//! GenerationContext
//!     → build_prompt      (sync)
//!     → generate_text     (async, the only await)
//!     → extract           first '{' .. last '}'
//!     → parse             serde_json
//!     → validate          page schema (+ section schemas when strict)
//!     → PageConfig
//! ```
//!
//! The first failing stage aborts the run. Nothing is retried and nothing is
//! returned on failure, so a caller's current page stays as it was.

use crate::completion::TextCompletion;
use crate::context::GenerationContext;
use crate::error::GenerationError;
use crate::extract::extract_json_candidate;
use crate::prompt::build_prompt;
use std::sync::Arc;
use storefront_document::{validate_page, PageConfig};
use storefront_registry::SectionRegistry;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Reject pages whose sections are unregistered or fail their schema
    pub strict_sections: bool,
}

pub struct Generator {
    registry: Arc<SectionRegistry>,
    completion: Arc<dyn TextCompletion>,
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(registry: Arc<SectionRegistry>, completion: Arc<dyn TextCompletion>) -> Self {
        Self {
            registry,
            completion,
            options: GeneratorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Prompt that [`Generator::generate`] would send for `ctx`
    pub fn prompt(&self, ctx: &GenerationContext) -> Result<String, GenerationError> {
        if !ctx.is_complete() {
            return Err(GenerationError::MissingBusinessType);
        }
        Ok(build_prompt(ctx, &self.registry))
    }

    /// Run the whole pipeline for `ctx`
    pub async fn generate(&self, ctx: &GenerationContext) -> Result<PageConfig, GenerationError> {
        let prompt = self.prompt(ctx)?;
        info!(
            business_type = %ctx.business_type,
            prompt_len = prompt.len(),
            "Requesting page completion"
        );

        let raw = self.completion.generate_text(&prompt).await?;
        debug!(response_len = raw.len(), "Completion received");

        self.parse_response(&raw)
    }

    /// Extract, parse and validate a raw completion.
    ///
    /// Usable on its own to replay a saved response.
    pub fn parse_response(&self, raw: &str) -> Result<PageConfig, GenerationError> {
        let candidate = extract_json_candidate(raw)?;
        debug!(candidate_len = candidate.len(), "Extracted JSON candidate");

        let value: serde_json::Value = serde_json::from_str(candidate)?;
        let page = validate_page(&value).inspect_err(|error| {
            warn!(issues = error.issues.len(), "Generated page failed validation");
        })?;

        if self.options.strict_sections {
            self.check_sections(&page)?;
        }

        info!(
            page_id = %page.id,
            sections = page.sections.len(),
            "Generated page validated"
        );
        Ok(page)
    }

    fn check_sections(&self, page: &PageConfig) -> Result<(), GenerationError> {
        let rejected: Vec<String> = page
            .sections
            .iter()
            .filter_map(|section| {
                self.registry
                    .validate_section(section)
                    .err()
                    .map(|error| format!("{} ({error})", section.id))
            })
            .collect();

        if rejected.is_empty() {
            Ok(())
        } else {
            warn!(count = rejected.len(), "Generated page uses unusable sections");
            Err(GenerationError::UnknownSectionTypes(rejected))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompletionError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned response, counting how often it is asked
    struct Canned {
        response: String,
        calls: AtomicUsize,
    }

    impl Canned {
        fn new(response: &str) -> Arc<Self> {
            Arc::new(Self {
                response: response.to_string(),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl TextCompletion for Canned {
        async fn generate_text(&self, _prompt: &str) -> Result<String, CompletionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    struct Failing;

    #[async_trait]
    impl TextCompletion for Failing {
        async fn generate_text(&self, _prompt: &str) -> Result<String, CompletionError> {
            Err(CompletionError::Other("rate limited".to_string()))
        }
    }

    fn generator(completion: Arc<dyn TextCompletion>) -> Generator {
        Generator::new(Arc::new(SectionRegistry::new()), completion)
    }

    #[tokio::test]
    async fn test_success_with_surrounding_chatter() {
        let canned = Canned::new(
            r#"Here you go: {"id":"landing","slug":"/","title":"Home","sections":[],"seo":{}}"#,
        );
        let page = generator(canned.clone())
            .generate(&GenerationContext::new("bakery"))
            .await
            .unwrap();

        assert_eq!(page.id, "landing");
        assert_eq!(page.slug, "/");
        assert_eq!(page.title, "Home");
        assert!(page.sections.is_empty());
        assert_eq!(canned.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_business_type_skips_completion() {
        let canned = Canned::new("{}");
        let result = generator(canned.clone())
            .generate(&GenerationContext::new(""))
            .await;

        assert!(matches!(result, Err(GenerationError::MissingBusinessType)));
        assert_eq!(canned.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_no_brace_is_extraction_not_parse() {
        let result = generator(Canned::new("Sorry, I can't do that."))
            .generate(&GenerationContext::new("bakery"))
            .await;
        assert!(matches!(result, Err(GenerationError::Extraction(_))));
    }

    #[tokio::test]
    async fn test_stage_errors_are_distinct() {
        let ctx = GenerationContext::new("bakery");

        let parse = generator(Canned::new("{ id: landing }")).generate(&ctx).await;
        assert!(matches!(parse, Err(GenerationError::Parse(_))));

        let invalid = generator(Canned::new(r#"{"id":"","slug":"/","title":"Home","sections":[]}"#))
            .generate(&ctx)
            .await;
        match invalid {
            Err(GenerationError::Validation(error)) => assert!(error.has_issue_at("id")),
            other => panic!("expected validation error, got {other:?}"),
        }

        let failed = generator(Arc::new(Failing)).generate(&ctx).await;
        assert!(matches!(failed, Err(GenerationError::Completion(_))));
    }

    #[test]
    fn test_strict_mode_rejects_unregistered_sections() {
        let raw = r#"{"id":"p","slug":"/","title":"T","sections":[
            {"id":"s1","type":"hologram","props":{},"visible":true}
        ]}"#;

        let lenient = generator(Canned::new(""));
        assert_eq!(lenient.parse_response(raw).unwrap().sections.len(), 1);

        let strict = generator(Canned::new("")).with_options(GeneratorOptions {
            strict_sections: true,
        });
        match strict.parse_response(raw) {
            Err(GenerationError::UnknownSectionTypes(rejected)) => {
                assert_eq!(rejected.len(), 1);
                assert!(rejected[0].starts_with("s1 ("));
            }
            other => panic!("expected strict rejection, got {other:?}"),
        }
    }
}
