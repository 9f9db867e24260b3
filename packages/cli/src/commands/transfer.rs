use super::open_publisher;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct ExportArgs {
    pub page_id: String,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Page whose content is replaced
    pub page_id: String,

    /// Exported JSON file
    pub file: PathBuf,
}

pub fn export(args: ExportArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let json = open_publisher(&config, cwd).export_page(&args.page_id)?;

    match args.output {
        Some(path) => {
            let path = cwd.join(path);
            fs::write(&path, json)?;
            info!(page_id = %args.page_id, path = %path.display(), "Wrote export");
            eprintln!("{} Exported {} → {}", "✓".green(), args.page_id, path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

pub fn import(args: ImportArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = cwd.join(&args.file);
    let json = fs::read_to_string(&path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    debug!(path = %path.display(), bytes = json.len(), "Read export");

    let page = open_publisher(&config, cwd).import_page(&args.page_id, &json)?;

    println!(
        "{} Imported {} sections into {}",
        "✓".green(),
        page.document.sections.len(),
        page.page_id.bright_white().bold()
    );

    Ok(())
}
