pub mod edit;
pub mod generate;
pub mod new_section;
pub mod prompt;
pub mod sections;
pub mod validate;

pub use edit::{edit, EditArgs};
pub use generate::{generate, GenerateArgs};
pub use new_section::{new_section, NewSectionArgs};
pub use prompt::{prompt, PromptArgs};
pub use sections::{sections, SectionsArgs};
pub use validate::{validate, ValidateArgs};

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::Path;
use storefront_editor::PageStore;
use storefront_generator::GenerationContext;

/// Business description shared by `prompt` and `generate`
#[derive(Debug, Args)]
pub struct ContextArgs {
    /// What the store sells, e.g. "bakery"
    #[arg(short, long)]
    pub business_type: String,

    /// Voice of the copy, e.g. "playful"
    #[arg(long)]
    pub tone: Option<String>,

    /// Who the page is for
    #[arg(long)]
    pub audience: Option<String>,

    #[arg(long)]
    pub store_name: Option<String>,

    #[arg(long)]
    pub store_description: Option<String>,
}

impl From<ContextArgs> for GenerationContext {
    fn from(args: ContextArgs) -> Self {
        GenerationContext {
            business_type: args.business_type,
            tone: args.tone,
            target_audience: args.audience,
            store_name: args.store_name,
            store_description: args.store_description,
        }
    }
}

pub(crate) fn load_page(path: &Path) -> Result<PageStore> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    PageStore::from_json(&source).with_context(|| format!("Invalid page {}", path.display()))
}

pub(crate) fn save_page(path: &Path, store: &PageStore) -> Result<()> {
    let json = store.to_json()?;
    fs::write(path, json + "\n").with_context(|| format!("Failed to write {}", path.display()))
}
