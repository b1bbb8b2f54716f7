use super::ContextArgs;
use crate::config::Config;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use clap::Args;
use colored::Colorize;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use storefront_generator::{
    CommandCompletion, CompletionError, GenerationContext, Generator, GeneratorOptions,
    TextCompletion,
};
use storefront_registry::SectionRegistry;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub context: ContextArgs,

    /// Use a saved completion instead of running `completionCommand`
    #[arg(short, long)]
    pub response_file: Option<PathBuf>,

    /// Output file (defaults to <outDir>/<page id>.json)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Reject unregistered or invalid sections, overriding the config
    #[arg(long)]
    pub strict: bool,
}

/// Replays a completion captured earlier
struct SavedResponse(String);

#[async_trait]
impl TextCompletion for SavedResponse {
    async fn generate_text(&self, _prompt: &str) -> Result<String, CompletionError> {
        Ok(self.0.clone())
    }
}

pub async fn generate(
    args: GenerateArgs,
    registry: Arc<SectionRegistry>,
    cwd: &Path,
) -> Result<()> {
    let config = Config::load(cwd)?;

    let completion: Arc<dyn TextCompletion> = match &args.response_file {
        Some(path) => Arc::new(SavedResponse(
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        )),
        None => Arc::new(
            CommandCompletion::from_argv(&config.completion_command)
                .context("Set completionCommand in storefront.config.json or pass --response-file")?,
        ),
    };

    let generator = Generator::new(registry, completion).with_options(GeneratorOptions {
        strict_sections: args.strict || config.strict_sections,
    });

    println!("{}", "Generating landing page...".bright_blue().bold());
    let page = generator
        .generate(&GenerationContext::from(args.context))
        .await?;

    let out = match args.out {
        Some(out) => out,
        None => page_file_in(&config.get_out_dir(cwd), &page.id)?,
    };
    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&out, serde_json::to_string_pretty(&page)? + "\n")
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!(
        "  {} {} ({} sections) → {}",
        "✓".green(),
        page.title,
        page.sections.len(),
        out.display()
    );
    Ok(())
}

/// `<dir>/<id>.json`, refusing ids that would leave `dir`
fn page_file_in(dir: &Path, id: &str) -> Result<PathBuf> {
    if Path::new(id).file_name() != Some(OsStr::new(id)) {
        bail!("Generated page id '{id}' is not a plain file name; pass --out to choose a path");
    }
    Ok(dir.join(format!("{id}.json")))
}
