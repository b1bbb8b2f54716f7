//! # Edit Contexts
//!
//! Two scopes narrow the document store's callbacks into per-section
//! editing primitives:
//!
//! ```text
//! EditCallbacks (document store)
//!        ↓
//! PageEditContext    edit mode, selected element, callbacks
//!        ↓  .section(&SectionConfig)
//! SectionEditContext set_path / append / remove_at / move_item / select / styles
//! ```
//!
//! ## Rules
//!
//! 1. Primitives never mutate local state. Each mutating call computes a new
//!    value with the path algebra and hands it to exactly one callback.
//! 2. `remove_at`/`move_item` that would not change anything invoke no
//!    callback at all.
//! 3. With edit mode off, every primitive is a no-op.
//!
//! Every primitive returns `true` iff it invoked a callback.
//!
//! A section context works on the snapshot it was built from. After a
//! callback fires, rebuild the context from the store before the next edit,
//! otherwise the next edit starts from the old props.

use crate::callbacks::EditCallbacks;
use storefront_document::{ElementStyle, SectionConfig};
use storefront_props::{self as props, PropPath, Value};

/// Currently selected sub-element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSelection {
    pub section_id: String,
    pub path: PropPath,
}

/// Page-scope context, one per editing session
pub struct PageEditContext<'a> {
    edit_mode: bool,
    selected_element: Option<ElementSelection>,
    callbacks: &'a dyn EditCallbacks,
}

impl<'a> PageEditContext<'a> {
    pub fn new(callbacks: &'a dyn EditCallbacks, edit_mode: bool) -> Self {
        Self {
            edit_mode,
            selected_element: None,
            callbacks,
        }
    }

    pub fn with_selected_element(mut self, selection: Option<ElementSelection>) -> Self {
        self.selected_element = selection;
        self
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn selected_element(&self) -> Option<&ElementSelection> {
        self.selected_element.as_ref()
    }

    /// Derive the section scope for one instance
    pub fn section<'s>(&'s self, section: &'s SectionConfig) -> SectionEditContext<'s> {
        let selected_path = self
            .selected_element
            .as_ref()
            .filter(|selection| selection.section_id == section.id)
            .map(|selection| &selection.path);

        SectionEditContext {
            edit_mode: self.edit_mode,
            selected_path,
            section,
            callbacks: self.callbacks,
        }
    }
}

/// Section-scope context bound to one `SectionConfig` snapshot
pub struct SectionEditContext<'a> {
    edit_mode: bool,
    selected_path: Option<&'a PropPath>,
    section: &'a SectionConfig,
    callbacks: &'a dyn EditCallbacks,
}

impl<'a> SectionEditContext<'a> {
    pub fn id(&self) -> &str {
        &self.section.id
    }

    pub fn section_type(&self) -> &str {
        &self.section.section_type
    }

    pub fn props(&self) -> &Value {
        &self.section.props
    }

    /// Whether editing affordances should be interactive
    pub fn is_editable(&self) -> bool {
        self.edit_mode
    }

    /// Replace the whole props tree
    pub fn set_props(&self, next: Value) -> bool {
        if !self.edit_mode {
            return false;
        }
        self.callbacks.on_section_props_change(&self.section.id, next);
        true
    }

    pub fn get_path(&self, path: impl Into<PropPath>) -> Option<&Value> {
        props::get(&self.section.props, path)
    }

    pub fn set_path(&self, path: impl Into<PropPath>, value: Value) -> bool {
        if !self.edit_mode {
            return false;
        }
        self.set_props(props::set(&self.section.props, path, value))
    }

    pub fn append(&self, path: impl Into<PropPath>, value: Value) -> bool {
        if !self.edit_mode {
            return false;
        }
        self.set_props(props::append(&self.section.props, path, value))
    }

    pub fn remove_at(&self, path: impl Into<PropPath>, index: usize) -> bool {
        if !self.edit_mode {
            return false;
        }
        let next = props::remove_at(&self.section.props, path, index);
        self.commit_if_changed(next)
    }

    pub fn move_item(&self, path: impl Into<PropPath>, from: usize, to: usize) -> bool {
        if !self.edit_mode {
            return false;
        }
        let next = props::move_item(&self.section.props, path, from, to);
        self.commit_if_changed(next)
    }

    fn commit_if_changed(&self, next: Value) -> bool {
        if next.ptr_eq(&self.section.props) {
            return false;
        }
        self.set_props(next)
    }

    pub fn select(&self) -> bool {
        if !self.edit_mode {
            return false;
        }
        self.callbacks.on_section_select(&self.section.id);
        true
    }

    pub fn select_element(&self, path: impl Into<PropPath>) -> bool {
        if !self.edit_mode {
            return false;
        }
        let path = path.into();
        self.callbacks.on_element_select(&self.section.id, Some(&path));
        true
    }

    pub fn deselect_element(&self) -> bool {
        if !self.edit_mode {
            return false;
        }
        self.callbacks.on_element_select(&self.section.id, None);
        true
    }

    /// Whether `path` is the page's selected element and lives in this section
    pub fn is_element_selected(&self, path: impl Into<PropPath>) -> bool {
        let path: PropPath = path.into();
        self.selected_path.is_some_and(|selected| *selected == path)
    }

    pub fn get_element_style(&self, path: impl Into<PropPath>) -> Option<&ElementStyle> {
        self.section.element_style(&path.into().to_string())
    }

    pub fn set_element_style(&self, path: impl Into<PropPath>, style: ElementStyle) -> bool {
        if !self.edit_mode {
            return false;
        }
        let path = path.into();
        self.callbacks
            .on_element_style_change(&self.section.id, &path, style);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq)]
    enum Call {
        Select(String),
        Props(String, Value),
        Element(String, Option<String>),
        Style(String, String, ElementStyle),
    }

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<Call>>,
    }

    impl EditCallbacks for Recorder {
        fn on_section_select(&self, section_id: &str) {
            self.calls.borrow_mut().push(Call::Select(section_id.to_string()));
        }

        fn on_section_props_change(&self, section_id: &str, props: Value) {
            self.calls
                .borrow_mut()
                .push(Call::Props(section_id.to_string(), props));
        }

        fn on_element_select(&self, section_id: &str, path: Option<&PropPath>) {
            self.calls
                .borrow_mut()
                .push(Call::Element(section_id.to_string(), path.map(ToString::to_string)));
        }

        fn on_element_style_change(&self, section_id: &str, path: &PropPath, style: ElementStyle) {
            self.calls
                .borrow_mut()
                .push(Call::Style(section_id.to_string(), path.to_string(), style));
        }
    }

    fn section() -> SectionConfig {
        SectionConfig::with_id(
            "s1",
            "features",
            Value::from(json!({
                "heading": "Why us",
                "features": [{ "title": "One" }, { "title": "Two" }]
            })),
        )
    }

    #[test]
    fn test_set_path_emits_one_props_change() {
        let recorder = Recorder::default();
        let page = PageEditContext::new(&recorder, true);
        let section = section();
        let ctx = page.section(&section);

        assert!(ctx.set_path("heading", Value::from("Why shop here")));

        let calls = recorder.calls.borrow();
        assert_eq!(calls.len(), 1);
        let Call::Props(id, props) = &calls[0] else {
            panic!("expected props change");
        };
        assert_eq!(id, "s1");
        assert_eq!(props.field("heading").and_then(Value::as_str), Some("Why shop here"));
        assert!(props.field("features").unwrap().ptr_eq(section.props.field("features").unwrap()));
    }

    #[test]
    fn test_get_path_reads_snapshot() {
        let recorder = Recorder::default();
        let page = PageEditContext::new(&recorder, false);
        let section = section();
        let ctx = page.section(&section);

        assert_eq!(ctx.get_path("features[1].title").and_then(Value::as_str), Some("Two"));
        assert!(ctx.get_path("features[9]").is_none());
    }

    #[test]
    fn test_noop_remove_and_move_emit_nothing() {
        let recorder = Recorder::default();
        let page = PageEditContext::new(&recorder, true);
        let section = section();
        let ctx = page.section(&section);

        assert!(!ctx.remove_at("features", 5));
        assert!(!ctx.remove_at("heading", 0));
        assert!(!ctx.move_item("features", 0, 2));
        assert!(!ctx.move_item("missing", 0, 0));
        assert!(recorder.calls.borrow().is_empty());

        assert!(ctx.move_item("features", 0, 1));
        assert!(ctx.remove_at("features", 0));
        assert_eq!(recorder.calls.borrow().len(), 2);
    }

    #[test]
    fn test_view_mode_disables_everything() {
        let recorder = Recorder::default();
        let page = PageEditContext::new(&recorder, false);
        let section = section();
        let ctx = page.section(&section);

        assert!(!ctx.is_editable());
        assert!(!ctx.set_props(Value::object()));
        assert!(!ctx.set_path("heading", Value::from("x")));
        assert!(!ctx.append("features", Value::object()));
        assert!(!ctx.remove_at("features", 0));
        assert!(!ctx.move_item("features", 0, 1));
        assert!(!ctx.select());
        assert!(!ctx.select_element("heading"));
        assert!(!ctx.deselect_element());
        assert!(!ctx.set_element_style("heading", ElementStyle::default()));
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn test_selection_callbacks() {
        let recorder = Recorder::default();
        let page = PageEditContext::new(&recorder, true);
        let section = section();
        let ctx = page.section(&section);

        ctx.select();
        ctx.select_element("features[0].title");
        ctx.deselect_element();

        assert_eq!(
            *recorder.calls.borrow(),
            vec![
                Call::Select("s1".to_string()),
                Call::Element("s1".to_string(), Some("features.0.title".to_string())),
                Call::Element("s1".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_selected_element_is_scoped_to_its_section() {
        let recorder = Recorder::default();
        let page = PageEditContext::new(&recorder, true).with_selected_element(Some(
            ElementSelection {
                section_id: "s1".to_string(),
                path: "features.0.title".into(),
            },
        ));
        let mine = section();
        let other = SectionConfig::with_id("s2", "features", mine.props.clone());

        assert!(page.section(&mine).is_element_selected("features[0].title"));
        assert!(!page.section(&mine).is_element_selected("heading"));
        assert!(!page.section(&other).is_element_selected("features[0].title"));
    }

    #[test]
    fn test_element_style_uses_canonical_path() {
        let recorder = Recorder::default();
        let page = PageEditContext::new(&recorder, true);
        let mut section = section();
        section.element_styles.insert(
            "features.0.title".to_string(),
            ElementStyle {
                color: Some("red".to_string()),
                ..Default::default()
            },
        );
        let ctx = page.section(&section);

        assert_eq!(
            ctx.get_element_style("features[0].title").and_then(|s| s.color.as_deref()),
            Some("red")
        );

        let partial = ElementStyle {
            font_weight: Some("700".to_string()),
            ..Default::default()
        };
        ctx.set_element_style("features[0].title", partial.clone());
        assert_eq!(
            recorder.calls.borrow()[0],
            Call::Style("s1".to_string(), "features.0.title".to_string(), partial)
        );
    }
}
