use super::open_publisher;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagesmith_model::Locale;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Page to publish
    pub page_id: String,

    /// Publish under this slug instead of the stored one
    #[arg(short, long)]
    pub slug: Option<String>,

    /// Publish in this locale (en or ar)
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

pub fn publish(args: PublishArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let publisher = open_publisher(&config, cwd);

    let theme = match args.locale {
        Some(locale) => {
            let mut theme = publisher.page(&args.page_id)?.theme;
            theme.locale = locale;
            Some(theme)
        }
        None => None,
    };

    let page = publisher.publish(&args.page_id, theme.as_ref(), args.slug.as_deref())?;
    let artifact = page
        .artifact
        .ok_or_else(|| anyhow!("Page {} has no published artifact", page.page_id))?;

    let out_dir = match &args.out_dir {
        Some(dir) => cwd.join(dir),
        None => config.out_dir(cwd),
    };
    fs::create_dir_all(&out_dir)?;
    let output_path = out_dir.join(format!("{}.html", artifact.slug));
    fs::write(&output_path, &artifact.markup)?;
    info!(
        page_id = %page.page_id,
        path = %output_path.display(),
        bytes = artifact.markup.len(),
        "Wrote published page"
    );

    println!("{} Published {}", "✓".green(), page.page_id.bright_white().bold());
    println!("  URL:  {}", artifact.url);
    println!("  File: {}", output_path.display());

    Ok(())
}
