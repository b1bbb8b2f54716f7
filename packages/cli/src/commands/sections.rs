use anyhow::Result;
use clap::Args;
use colored::Colorize;
use storefront_registry::{Category, SectionRegistry};

#[derive(Debug, Args)]
pub struct SectionsArgs {
    /// Only list one category (content, commerce, social, utility)
    #[arg(short, long)]
    pub category: Option<Category>,
}

pub fn sections(args: SectionsArgs, registry: &SectionRegistry) -> Result<()> {
    let definitions = match args.category {
        Some(category) => registry.by_category(category),
        None => registry.all(),
    };

    for definition in &definitions {
        println!(
            "{} {} {}",
            definition.section_type.bright_white().bold(),
            definition.name,
            format!("[{}]", definition.category).dimmed()
        );
        if !definition.description.is_empty() {
            println!("    {}", definition.description);
        }
        if definition.has_variants() {
            println!("    variants: {}", definition.variants.join(", ").cyan());
        }
    }

    println!();
    println!("{} section types", definitions.len().to_string().green());
    Ok(())
}
