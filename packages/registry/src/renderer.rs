use crate::schema::ValidatedProps;
use std::fmt;

/// Rendered output of a section, opaque to the core
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capability supplied by the rendering layer.
///
/// The registry only stores and hands out renderers; it never inspects
/// their output.
pub trait SectionRenderer: Send + Sync {
    fn render(&self, props: &ValidatedProps) -> Markup;
}

impl<F> SectionRenderer for F
where
    F: Fn(&ValidatedProps) -> Markup + Send + Sync,
{
    fn render(&self, props: &ValidatedProps) -> Markup {
        self(props)
    }
}
