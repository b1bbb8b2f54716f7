use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use storefront_document::validate_page;
use storefront_registry::SectionRegistry;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Page JSON file
    pub page: PathBuf,
}

pub fn validate(args: ValidateArgs, registry: &SectionRegistry) -> Result<()> {
    let source = fs::read_to_string(&args.page)
        .with_context(|| format!("Failed to read {}", args.page.display()))?;
    let value: serde_json::Value = serde_json::from_str(&source)
        .with_context(|| format!("{} is not JSON", args.page.display()))?;

    let page = match validate_page(&value) {
        Ok(page) => page,
        Err(error) => {
            for issue in &error.issues {
                println!("  {} {}", "✗".red(), issue);
            }
            bail!("{} has {} problem(s)", args.page.display(), error.issues.len());
        }
    };

    let mut warnings = 0;
    for section in &page.sections {
        if let Err(error) = registry.validate_section(section) {
            warnings += 1;
            println!("  {} {}: {}", "⚠".yellow(), section.id, error);
        }
    }

    println!(
        "{} {} ({} sections, {} warning(s))",
        "✓".green(),
        args.page.display(),
        page.sections.len(),
        warnings
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::page_file;
    use storefront_sections::builtin_registry;

    #[test]
    fn test_valid_page_passes() {
        let (_dir, path) = page_file();
        assert!(validate(ValidateArgs { page: path }, &builtin_registry()).is_ok());
    }

    #[test]
    fn test_invalid_page_fails() {
        let (_dir, path) = page_file();
        fs::write(&path, r#"{ "id": "", "slug": "/", "title": "x", "sections": [] }"#).unwrap();
        assert!(validate(ValidateArgs { page: path }, &builtin_registry()).is_err());
    }
}
