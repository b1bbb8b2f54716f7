//! # Storefront Generator
//!
//! Turns a short business description into a validated [`PageConfig`] by
//! prompting a text-completion backend with the registered section catalog.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_generator::{CommandCompletion, GenerationContext, Generator};
//!
//! let generator = Generator::new(registry, Arc::new(CommandCompletion::new("llm")));
//! let page = generator
//!     .generate(&GenerationContext::new("bakery").tone("warm"))
//!     .await?;
//! ```
//!
//! [`PageConfig`]: storefront_document::PageConfig

mod completion;
mod context;
mod error;
mod extract;
mod pipeline;
mod prompt;

pub use completion::{CommandCompletion, TextCompletion};
pub use context::GenerationContext;
pub use error::{CompletionError, GenerationError};
pub use extract::extract_json_candidate;
pub use pipeline::{Generator, GeneratorOptions};
pub use prompt::{build_prompt, preview, section_catalog, PREVIEW_LIMIT};
