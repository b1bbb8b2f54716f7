//! # Property Paths
//!
//! String addresses into a props tree.
//!
//! Paths use dot syntax with optional bracketed indices:
//!
//! - `"hero.title"` → `[Key("hero"), Key("title")]`
//! - `"items[2].title"` and `"items.2.title"` → `[Key("items"), Index(2), Key("title")]`
//! - Empty segments (`".a"`, `"a."`, `"a..b"`) are dropped
//!
//! A segment is an index only if it is a canonical decimal number: ASCII
//! digits with no sign, no fraction and no leading zero (`"0"` itself is
//! fine). `"01"` or `"-1"` stay string keys.

use std::fmt;
use std::str::FromStr;

/// One step of a path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl Segment {
    /// Classify a raw segment
    pub fn parse(raw: &str) -> Self {
        if is_canonical_index(raw) {
            if let Ok(index) = raw.parse::<usize>() {
                return Segment::Index(index);
            }
        }
        Segment::Key(raw.to_string())
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }

    /// Object key spelling of this segment
    pub fn to_key(&self) -> String {
        match self {
            Segment::Key(key) => key.clone(),
            Segment::Index(index) => index.to_string(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

fn is_canonical_index(raw: &str) -> bool {
    !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw.len() == 1 || !raw.starts_with('0'))
}

/// Parsed path: an ordered list of segments
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PropPath {
    segments: Vec<Segment>,
}

impl PropPath {
    /// The empty path (addresses the root)
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn push_key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(Segment::Key(key.into()));
        self
    }

    pub fn push_index(mut self, index: usize) -> Self {
        self.segments.push(Segment::Index(index));
        self
    }

    /// Path with the last segment removed (root stays root)
    pub fn parent(&self) -> PropPath {
        let mut segments = self.segments.clone();
        segments.pop();
        PropPath { segments }
    }

    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }
}

/// Parse a dotted/bracketed path string
pub fn parse_path(path: &str) -> PropPath {
    let normalized = rewrite_brackets(path);
    let segments = normalized
        .split('.')
        .filter(|raw| !raw.is_empty())
        .map(Segment::parse)
        .collect();
    PropPath { segments }
}

/// Rewrite every `[<digits>]` group to `.<digits>`; other brackets are
/// left alone and end up inside a key.
fn rewrite_brackets(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        if digits > 0 && after[digits..].starts_with(']') {
            out.push('.');
            out.push_str(&after[..digits]);
            rest = &after[digits + 1..];
        } else {
            out.push('[');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

impl FromStr for PropPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_path(s))
    }
}

impl From<&str> for PropPath {
    fn from(s: &str) -> Self {
        parse_path(s)
    }
}

impl From<String> for PropPath {
    fn from(s: String) -> Self {
        parse_path(&s)
    }
}

impl From<&String> for PropPath {
    fn from(s: &String) -> Self {
        parse_path(s)
    }
}

impl From<&PropPath> for PropPath {
    fn from(path: &PropPath) -> Self {
        path.clone()
    }
}

impl From<Vec<Segment>> for PropPath {
    fn from(segments: Vec<Segment>) -> Self {
        PropPath { segments }
    }
}

impl fmt::Display for PropPath {
    /// Canonical dotted form (`items.2.title`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> Segment {
        Segment::Key(s.to_string())
    }

    #[test]
    fn test_bracket_and_dot_forms_are_equivalent() {
        let expected = vec![key("items"), Segment::Index(2), key("title")];
        assert_eq!(parse_path("items[2].title").segments(), expected.as_slice());
        assert_eq!(parse_path("items.2.title").segments(), expected.as_slice());
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        assert!(parse_path("").is_empty());
        assert!(parse_path("...").is_empty());
        assert_eq!(parse_path(".a..b.").segments(), &[key("a"), key("b")]);
    }

    #[test]
    fn test_non_canonical_numbers_are_keys() {
        assert_eq!(parse_path("01").segments(), &[key("01")]);
        assert_eq!(parse_path("-1").segments(), &[key("-1")]);
        assert_eq!(parse_path("1e3").segments(), &[key("1e3")]);
        assert_eq!(parse_path("0").segments(), &[Segment::Index(0)]);
    }

    #[test]
    fn test_oversized_index_is_a_key() {
        let huge = "99999999999999999999999999";
        assert_eq!(parse_path(huge).segments(), &[key(huge)]);
    }

    #[test]
    fn test_non_numeric_brackets_stay_in_key() {
        assert_eq!(parse_path("a[b]").segments(), &[key("a[b]")]);
        assert_eq!(parse_path("a[").segments(), &[key("a[")]);
    }

    #[test]
    fn test_consecutive_brackets() {
        assert_eq!(
            parse_path("grid[1][0]").segments(),
            &[key("grid"), Segment::Index(1), Segment::Index(0)]
        );
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(parse_path("items[2].title").to_string(), "items.2.title");
        assert_eq!(PropPath::root().push_key("a").push_index(0).to_string(), "a.0");
    }

    #[test]
    fn test_parent() {
        let path = parse_path("a.b.c");
        assert_eq!(path.parent().to_string(), "a.b");
        assert!(PropPath::root().parent().is_empty());
    }
}
