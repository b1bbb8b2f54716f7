//! # Storefront Editor
//!
//! Edit-context propagation for landing pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ PageStore: canonical PageConfig             │
//! │  - implements EditCallbacks                 │
//! │  - page-level ops (add/remove/move/hide)    │
//! └─────────────────────────────────────────────┘
//!                     ↓ edit_context()
//! ┌─────────────────────────────────────────────┐
//! │ PageEditContext: edit mode + selection      │
//! └─────────────────────────────────────────────┘
//!                     ↓ section()
//! ┌─────────────────────────────────────────────┐
//! │ SectionEditContext: path-based primitives   │
//! │  set_path / append / remove_at / move_item  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Single writer**: only the store holds the canonical page
//! 2. **Values flow up**: primitives compute new props and hand them to one
//!    callback; nothing is mutated in place
//! 3. **No silent writes**: no-op edits invoke no callback
//! 4. **Edit mode is global**: with it off, every primitive does nothing
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_editor::PageStore;
//!
//! let store = PageStore::new(page);
//! let id = store.add_section(&registry, "faq", None).unwrap();
//!
//! store.with_section(&id, true, |ctx| {
//!     ctx.append("items", item);
//! });
//! ```

mod callbacks;
mod context;
mod errors;
mod store;

pub use callbacks::EditCallbacks;
pub use context::{ElementSelection, PageEditContext, SectionEditContext};
pub use errors::EditorError;
pub use store::PageStore;
