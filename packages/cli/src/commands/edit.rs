use super::{load_page, save_page};
use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use storefront_document::ElementStyle;
use storefront_editor::SectionEditContext;
use storefront_props::Value;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Page JSON file
    pub page: PathBuf,

    /// Id of the section to edit
    pub section_id: String,

    #[command(subcommand)]
    pub op: EditOp,
}

#[derive(Debug, Subcommand)]
pub enum EditOp {
    /// Set the value at a path, e.g. `set items[0].title '"Hi"'`
    Set { path: String, json: String },

    /// Append a value to the list at a path
    Append { path: String, json: String },

    /// Remove the list item at an index
    Remove { path: String, index: usize },

    /// Move a list item from one index to another
    Move { path: String, from: usize, to: usize },

    /// Merge a style override into the element at a path
    Style { path: String, json: String },
}

/// Parsed form of an [`EditOp`], ready to hand to the edit context
enum Edit {
    Set(String, Value),
    Append(String, Value),
    Remove(String, usize),
    Move(String, usize, usize),
    Style(String, ElementStyle),
}

impl EditOp {
    fn parse(self) -> Result<Edit> {
        let json = |text: &str| -> Result<Value> {
            let value: serde_json::Value =
                serde_json::from_str(text).with_context(|| format!("Invalid JSON value: {text}"))?;
            Ok(Value::from(value))
        };

        Ok(match self {
            EditOp::Set { path, json: text } => Edit::Set(path, json(&text)?),
            EditOp::Append { path, json: text } => Edit::Append(path, json(&text)?),
            EditOp::Remove { path, index } => Edit::Remove(path, index),
            EditOp::Move { path, from, to } => Edit::Move(path, from, to),
            EditOp::Style { path, json: text } => Edit::Style(
                path,
                serde_json::from_str(&text)
                    .with_context(|| format!("Invalid style object: {text}"))?,
            ),
        })
    }
}

impl Edit {
    fn apply(self, ctx: &SectionEditContext<'_>) -> bool {
        match self {
            Edit::Set(path, value) => ctx.set_path(path.as_str(), value),
            Edit::Append(path, value) => ctx.append(path.as_str(), value),
            Edit::Remove(path, index) => ctx.remove_at(path.as_str(), index),
            Edit::Move(path, from, to) => ctx.move_item(path.as_str(), from, to),
            Edit::Style(path, style) => ctx.set_element_style(path.as_str(), style),
        }
    }
}

pub fn edit(args: EditArgs) -> Result<()> {
    let store = load_page(&args.page)?;
    let edit = args.op.parse()?;

    let Some(changed) = store.with_section(&args.section_id, true, |ctx| edit.apply(ctx)) else {
        bail!("No section with id '{}' in {}", args.section_id, args.page.display());
    };

    if changed {
        save_page(&args.page, &store)?;
        println!("  {} Updated {}", "✓".green(), args.section_id.bright_white());
    } else {
        println!("  {} Nothing to change", "-".dimmed());
    }
    Ok(())
}
