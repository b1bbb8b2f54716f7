use super::ContextArgs;
use anyhow::{bail, Result};
use clap::Args;
use storefront_generator::{build_prompt, GenerationContext};
use storefront_registry::SectionRegistry;

#[derive(Debug, Args)]
pub struct PromptArgs {
    #[command(flatten)]
    pub context: ContextArgs,
}

pub fn prompt(args: PromptArgs, registry: &SectionRegistry) -> Result<()> {
    let ctx = GenerationContext::from(args.context);
    if !ctx.is_complete() {
        bail!("--business-type must not be empty");
    }
    print!("{}", build_prompt(&ctx, registry));
    Ok(())
}
