use super::{load_page, save_page};
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use storefront_registry::SectionRegistry;

#[derive(Debug, Args)]
pub struct NewSectionArgs {
    /// Page JSON file
    pub page: PathBuf,

    /// Section type id, see `storefront sections`
    pub section_type: String,

    /// Insert position (appends when omitted)
    #[arg(long)]
    pub at: Option<usize>,
}

pub fn new_section(args: NewSectionArgs, registry: &SectionRegistry) -> Result<()> {
    let store = load_page(&args.page)?;

    let Some(id) = store.add_section(registry, &args.section_type, args.at) else {
        bail!(
            "Unknown section type '{}' (available: {})",
            args.section_type,
            registry.types().join(", ")
        );
    };

    save_page(&args.page, &store)?;
    println!("  {} Added {} as {}", "✓".green(), args.section_type, id.bright_white());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::page_file;
    use storefront_sections::builtin_registry;

    #[test]
    fn test_inserts_section_at_position() {
        let (_dir, path) = page_file();
        let args = NewSectionArgs {
            page: path.clone(),
            section_type: "hero".to_string(),
            at: Some(0),
        };
        new_section(args, &builtin_registry()).unwrap();

        let page = load_page(&path).unwrap().page();
        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.sections[0].section_type, "hero");
        assert!(page.sections[0].id.starts_with("section-"));
    }

    #[test]
    fn test_unknown_type_leaves_file_alone() {
        let (_dir, path) = page_file();
        let before = std::fs::read_to_string(&path).unwrap();
        let args = NewSectionArgs {
            page: path.clone(),
            section_type: "hologram".to_string(),
            at: None,
        };

        assert!(new_section(args, &builtin_registry()).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }
}
