//! # Prompt Builder
//!
//! Renders the generation context plus a catalog of every registered
//! section into one instruction string for the completion model.
//!
//! Catalog entry layout:
//!
//! ```text
//! - Hero Banner (type: "hero", category: content)
//!   Large headline with call to action
//!   Variants: centered, split
//!   Props:
//!     - alignment: string, default "center"
//!     - ctaHref: string, default "/products"
//! ```

use crate::context::GenerationContext;
use std::fmt::Write;
use storefront_props::Value;
use storefront_registry::{SectionDefinition, SectionRegistry};

/// Longest default preview, in characters, `...` included
pub const PREVIEW_LIMIT: usize = 80;

const ELLIPSIS: &str = "...";

/// Full instruction string for `ctx`
pub fn build_prompt(ctx: &GenerationContext, registry: &SectionRegistry) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are designing a landing page for an online store. \
         Respond with a single JSON object describing the page and nothing else.\n\n",
    );

    prompt.push_str("## Business\n");
    let _ = writeln!(prompt, "Business type: {}", ctx.business_type.trim());
    let optional = [
        ("Store name", &ctx.store_name),
        ("Store description", &ctx.store_description),
        ("Target audience", &ctx.target_audience),
        ("Tone", &ctx.tone),
    ];
    for (label, value) in optional {
        if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            let _ = writeln!(prompt, "{label}: {value}");
        }
    }

    prompt.push_str("\n## Available sections\n");
    prompt.push_str(&section_catalog(registry));

    prompt.push_str(
        "\n## Output format\n\
         {\n  \"id\": string,\n  \"slug\": string starting with \"/\",\n  \"title\": string,\n  \
         \"sections\": [{ \"id\": string, \"type\": one of the section types above, \
         \"props\": object, \"visible\": true }],\n  \
         \"seo\": { \"title\": string, \"description\": string }\n}\n\n\
         Use only the listed section types. Keep the prop names and kinds shown above, \
         and write copy that fits the business.\n",
    );

    prompt
}

/// Markdown-ish description of every registered section, in registration order
pub fn section_catalog(registry: &SectionRegistry) -> String {
    let mut out = String::new();
    for definition in registry.all() {
        describe(&mut out, definition);
    }
    out
}

fn describe(out: &mut String, definition: &SectionDefinition) {
    let _ = writeln!(
        out,
        "- {} (type: \"{}\", category: {})",
        definition.name, definition.section_type, definition.category
    );
    if !definition.description.is_empty() {
        let _ = writeln!(out, "  {}", definition.description);
    }
    if definition.has_variants() {
        let _ = writeln!(out, "  Variants: {}", definition.variants.join(", "));
    }

    if let Some(props) = definition.default_props.as_object() {
        if !props.is_empty() {
            out.push_str("  Props:\n");
        }
        for (key, value) in props.iter() {
            let _ = writeln!(out, "    - {key}: {}, default {}", value.kind(), preview(value));
        }
    }
}

/// Compact JSON of `value`, at most [`PREVIEW_LIMIT`] characters long
pub fn preview(value: &Value) -> String {
    let text = value.to_string();
    if text.chars().count() <= PREVIEW_LIMIT {
        return text;
    }
    let keep = PREVIEW_LIMIT - ELLIPSIS.len();
    let cut = text.char_indices().nth(keep).map_or(text.len(), |(i, _)| i);
    format!("{}{ELLIPSIS}", &text[..cut])
}
