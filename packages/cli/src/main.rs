mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    compile, export, import, new, pages, publish, templates, CompileArgs, ExportArgs, ImportArgs,
    NewArgs, PublishArgs,
};
use tracing_subscriber::EnvFilter;

/// Pagesmith CLI - bilingual landing pages, compiled to static HTML
#[derive(Parser, Debug)]
#[command(name = "pagesmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available templates
    Templates,

    /// List stored pages
    Pages,

    /// Create a page from a template
    New(NewArgs),

    /// Compile a page and write its published HTML
    Publish(PublishArgs),

    /// Export a page as JSON
    Export(ExportArgs),

    /// Replace a page's content from an exported JSON file
    Import(ImportArgs),

    /// Compile an exported JSON file straight to HTML
    Compile(CompileArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PAGESMITH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Templates => templates(&cwd),
            Command::Pages => pages(&cwd),
            Command::New(args) => new(args, &cwd),
            Command::Publish(args) => publish(args, &cwd),
            Command::Export(args) => export(args, &cwd),
            Command::Import(args) => import(args, &cwd),
            Command::Compile(args) => compile(args, &cwd),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
