use storefront_document::ElementStyle;
use storefront_props::{PropPath, Value};

/// Hooks through which every edit leaves the edit context.
///
/// Implemented by whatever owns the canonical document (see
/// [`crate::PageStore`]). Each call carries a freshly computed value; the
/// implementor decides how to apply it. Concurrent writers are reconciled
/// here, last write wins unless the implementor does better.
pub trait EditCallbacks {
    fn on_section_select(&self, section_id: &str);

    /// Replace the props of `section_id` wholesale
    fn on_section_props_change(&self, section_id: &str, props: Value);

    /// Select a sub-element, or clear the selection with `None`
    fn on_element_select(&self, section_id: &str, path: Option<&PropPath>);

    /// Merge `style` into the override stored for `path`
    fn on_element_style_change(&self, section_id: &str, path: &PropPath, style: ElementStyle);
}
