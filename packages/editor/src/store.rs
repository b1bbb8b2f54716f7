//! # Page Store
//!
//! Reference document store: owns the canonical [`PageConfig`] and applies
//! what the edit contexts send it.
//!
//! ## Lifecycle
//!
//! ```text
//! PageStore ──edit_context()──→ PageEditContext ──section()──→ SectionEditContext
//!     ↑                                                              │
//!     └──────────────── EditCallbacks (fresh values) ←───────────────┘
//! ```
//!
//! The store is the single serialization point. Writes are applied in call
//! order and the last write to a section wins. Every applied change bumps
//! `version`; calls naming an unknown section are ignored.

use crate::callbacks::EditCallbacks;
use crate::context::{ElementSelection, PageEditContext, SectionEditContext};
use crate::errors::EditorError;
use std::sync::{Mutex, MutexGuard, PoisonError};
use storefront_document::{validate_page, ElementStyle, PageConfig, SectionConfig};
use storefront_props::{PropPath, Value};
use storefront_registry::SectionRegistry;
use tracing::debug;

#[derive(Debug)]
struct StoreState {
    page: PageConfig,
    version: u64,
    selected_section: Option<String>,
    selected_element: Option<ElementSelection>,
}

/// In-memory owner of one page
#[derive(Debug)]
pub struct PageStore {
    state: Mutex<StoreState>,
}

impl PageStore {
    pub fn new(page: PageConfig) -> Self {
        Self {
            state: Mutex::new(StoreState {
                page,
                version: 0,
                selected_section: None,
                selected_element: None,
            }),
        }
    }

    /// Load a page from JSON text, validating it first
    pub fn from_json(source: &str) -> Result<Self, EditorError> {
        let value: serde_json::Value = serde_json::from_str(source)?;
        let page = validate_page(&value)?;
        Ok(Self::new(page))
    }

    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(&self.lock().page)?)
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // state is replaced wholesale on every write, so a poisoned guard
        // still holds a consistent page
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cheap snapshot of the current page
    pub fn page(&self) -> PageConfig {
        self.lock().page.clone()
    }

    pub fn section(&self, id: &str) -> Option<SectionConfig> {
        self.lock().page.section(id).cloned()
    }

    pub fn version(&self) -> u64 {
        self.lock().version
    }

    pub fn selected_section(&self) -> Option<String> {
        self.lock().selected_section.clone()
    }

    pub fn selected_element(&self) -> Option<ElementSelection> {
        self.lock().selected_element.clone()
    }

    /// Page-scope context bound to this store
    pub fn edit_context(&self, edit_mode: bool) -> PageEditContext<'_> {
        PageEditContext::new(self, edit_mode).with_selected_element(self.selected_element())
    }

    /// Run `edit` against a fresh section context for `section_id`.
    ///
    /// The store lock is not held while `edit` runs, so the callbacks it
    /// triggers can apply immediately.
    pub fn with_section<R>(
        &self,
        section_id: &str,
        edit_mode: bool,
        edit: impl FnOnce(&SectionEditContext<'_>) -> R,
    ) -> Option<R> {
        let section = self.section(section_id)?;
        let page = self.edit_context(edit_mode);
        let ctx = page.section(&section);
        Some(edit(&ctx))
    }

    /// Apply `next` if `update` produced one; returns whether it did
    fn commit(&self, update: impl FnOnce(&PageConfig) -> Option<PageConfig>) -> bool {
        let mut state = self.lock();
        match update(&state.page) {
            Some(next) => {
                state.page = next;
                state.version += 1;
                true
            }
            None => false,
        }
    }

    /// Insert a new instance of `section_type` seeded with its defaults.
    ///
    /// Returns the new section id, or `None` for an unregistered type.
    pub fn add_section(
        &self,
        registry: &SectionRegistry,
        section_type: &str,
        index: Option<usize>,
    ) -> Option<String> {
        let section = registry.instantiate(section_type)?;
        let id = section.id.clone();
        self.commit(|page| Some(page.with_section_inserted(index, section)));
        debug!(section_id = %id, section_type, "Added section");
        Some(id)
    }

    pub fn remove_section(&self, id: &str) -> bool {
        let mut state = self.lock();
        let Some(next) = state.page.without_section(id) else {
            return false;
        };

        state.page = next;
        state.version += 1;
        if state.selected_section.as_deref() == Some(id) {
            state.selected_section = None;
        }
        if state.selected_element.as_ref().is_some_and(|s| s.section_id == id) {
            state.selected_element = None;
        }
        debug!(section_id = id, "Removed section");
        true
    }

    pub fn move_section(&self, from: usize, to: usize) -> bool {
        self.commit(|page| page.with_section_moved(from, to))
    }

    pub fn set_visible(&self, id: &str, visible: bool) -> bool {
        self.commit(|page| {
            let mut section = page.section(id)?.clone();
            section.visible = visible;
            page.with_section_replaced(section)
        })
    }

    pub fn toggle_visible(&self, id: &str) -> bool {
        self.commit(|page| {
            let mut section = page.section(id)?.clone();
            section.visible = !section.visible;
            page.with_section_replaced(section)
        })
    }

    /// Swap in a whole new page (e.g. a generated one), clearing selection
    pub fn replace_page(&self, page: PageConfig) {
        let mut state = self.lock();
        state.page = page;
        state.version += 1;
        state.selected_section = None;
        state.selected_element = None;
    }
}

impl EditCallbacks for PageStore {
    fn on_section_select(&self, section_id: &str) {
        let mut state = self.lock();
        if state.page.section(section_id).is_none() {
            debug!(section_id, "Ignoring selection of unknown section");
            return;
        }
        if state
            .selected_element
            .as_ref()
            .is_some_and(|s| s.section_id != section_id)
        {
            state.selected_element = None;
        }
        state.selected_section = Some(section_id.to_string());
    }

    fn on_section_props_change(&self, section_id: &str, props: Value) {
        let applied = self.commit(|page| {
            let mut section = page.section(section_id)?.clone();
            section.props = props;
            page.with_section_replaced(section)
        });
        if !applied {
            debug!(section_id, "Ignoring props change for unknown section");
        }
    }

    fn on_element_select(&self, section_id: &str, path: Option<&PropPath>) {
        let mut state = self.lock();
        if state.page.section(section_id).is_none() {
            debug!(section_id, "Ignoring element selection in unknown section");
            return;
        }
        state.selected_section = Some(section_id.to_string());
        state.selected_element = path.map(|path| ElementSelection {
            section_id: section_id.to_string(),
            path: path.clone(),
        });
    }

    fn on_element_style_change(&self, section_id: &str, path: &PropPath, style: ElementStyle) {
        let key = path.to_string();
        let applied = self.commit(|page| {
            let mut section = page.section(section_id)?.clone();
            let merged = section
                .element_styles
                .get(&key)
                .map_or_else(|| style.clone(), |existing| existing.merge(&style));
            section.element_styles.insert(key.clone(), merged);
            page.with_section_replaced(section)
        });
        if !applied {
            debug!(section_id, "Ignoring style change for unknown section");
        }
    }
}
