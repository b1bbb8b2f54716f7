//! # Storefront Section Registry
//!
//! Maps a section type id (`"hero"`, `"faq"`, ...) to its
//! [`SectionDefinition`]: display metadata, default props, a props schema and
//! an optional renderer.
//!
//! The registry is an ordinary value. Build it once at startup, register
//! every section, then share it read-only (usually as
//! `Arc<SectionRegistry>`) with the editor and the generator.
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use storefront_registry::{Category, SectionDefinition, SectionRegistry};
//!
//! #[derive(Default, Serialize, Deserialize)]
//! struct BannerProps {
//!     text: String,
//! }
//!
//! let mut registry = SectionRegistry::new();
//! registry.register(
//!     SectionDefinition::typed::<BannerProps>("banner", "Banner", Category::Content)
//!         .description("A single line of announcement text"),
//! );
//!
//! let section = registry.instantiate("banner").unwrap();
//! assert!(registry.validate_section(&section).is_ok());
//! ```

mod definition;
mod error;
mod registry;
mod renderer;
mod schema;

pub use definition::{Category, SectionDefinition};
pub use error::RegistryError;
pub use registry::{AuditIssue, SectionRegistry};
pub use renderer::{Markup, SectionRenderer};
pub use schema::{OpenSchema, PropsSchema, SchemaError, TypedSchema, ValidatedProps};
