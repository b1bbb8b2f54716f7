//! # Storefront Document
//!
//! Plain data records for landing pages: [`PageConfig`] holds an ordered list
//! of [`SectionConfig`] instances plus page metadata, and
//! [`LandingPagesConfig`] is the document-of-documents persisted by the
//! store.
//!
//! Records carry no editing behavior. Page-level helpers (`with_*`,
//! `without_*`) compute derived copies and leave the receiver untouched, so
//! the owning store stays the single writer.
//!
//! Untrusted input (AI output, uploaded files) goes through
//! [`validate_page`] / [`validate_landing_pages`], which collect every field
//! issue before failing.

mod model;
mod site;
mod style;
mod validate;

pub use model::{new_section_id, PageConfig, SectionConfig, Seo};
pub use site::{LandingPagesConfig, DEFAULT_VERSION};
pub use style::{ElementStyle, ElementStyles};
pub use validate::{validate_landing_pages, validate_page, FieldIssue, ValidationError};
