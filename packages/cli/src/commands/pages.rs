use super::open_publisher;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagesmith_publish::{NewPage, PageStatus};
use std::path::Path;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Template to seed the page from
    #[arg(short, long, default_value = "starter")]
    pub template: String,

    /// Page title
    #[arg(long)]
    pub title: String,

    /// Owner id, used as the page id prefix
    #[arg(short, long, default_value = "local")]
    pub user: String,

    /// Name used for the initial slug
    #[arg(long)]
    pub username: Option<String>,
}

pub fn templates(cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let publisher = open_publisher(&config, cwd);

    for template in publisher.templates() {
        let premium = if template.is_premium { " (premium)" } else { "" };
        println!(
            "  {} {} / {} [{}]{}",
            template.template_id.bright_white().bold(),
            template.name.en,
            template.name.ar,
            template.category,
            premium.yellow()
        );
    }

    Ok(())
}

pub fn pages(cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let publisher = open_publisher(&config, cwd);
    let pages = publisher.list_pages()?;

    if pages.is_empty() {
        println!("{}", "No pages yet. Create one with `pagesmith new`.".yellow());
        return Ok(());
    }

    for page in pages {
        let status = match page.status {
            PageStatus::Published => page.status.as_str().green(),
            PageStatus::Draft => page.status.as_str().dimmed(),
        };
        println!(
            "  {} {} ({}) {}",
            page.page_id.bright_white().bold(),
            page.title,
            page.slug,
            status
        );
    }

    Ok(())
}

pub fn new(args: NewArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let publisher = open_publisher(&config, cwd);

    let page = publisher.create_page(NewPage {
        template_id: args.template,
        username: args.username.or_else(|| Some(args.user.clone())),
        user_id: args.user,
        title: args.title,
    })?;

    println!("{} Created page {}", "✓".green(), page.page_id.bright_white().bold());
    println!("  Slug: {}", page.slug);
    println!("  Sections: {}", page.document.sections.len());

    Ok(())
}
