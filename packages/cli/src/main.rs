mod commands;
mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    edit, generate, new_section, prompt, sections, validate, EditArgs, GenerateArgs,
    NewSectionArgs, PromptArgs, SectionsArgs, ValidateArgs,
};
use std::sync::Arc;
use storefront_sections::builtin_registry;
use tracing_subscriber::EnvFilter;

/// Storefront CLI - landing pages from a catalog of sections
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available section types
    Sections(SectionsArgs),

    /// Print the generation prompt for a business
    Prompt(PromptArgs),

    /// Generate a landing page with the configured completion command
    Generate(GenerateArgs),

    /// Check a page file against the page and section schemas
    Validate(ValidateArgs),

    /// Apply one edit to a section of a page file
    Edit(EditArgs),

    /// Add a section with default props to a page file
    NewSection(NewSectionArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli.command).await {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("Cannot get current directory")?;
    let registry = Arc::new(builtin_registry());

    match command {
        Command::Sections(args) => sections(args, &registry),
        Command::Prompt(args) => prompt(args, &registry),
        Command::Generate(args) => generate(args, registry, &cwd).await,
        Command::Validate(args) => validate(args, &registry),
        Command::Edit(args) => edit(args),
        Command::NewSection(args) => new_section(args, &registry),
    }
}
