use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pagesmith_compiler_html::{compile as compile_page, CompileOptions};
use pagesmith_model::{import_from_json, DeviceSize, Locale, SeoMetadata};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Exported JSON file
    pub input: PathBuf,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the export's locale (en or ar)
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    /// Preview for one device, dropping sections hidden on it
    #[arg(long, value_parser = parse_device)]
    pub device: Option<DeviceSize>,

    /// Leave out the analytics script
    #[arg(long)]
    pub no_tracking: bool,

    /// Emit compact markup
    #[arg(long)]
    pub minify: bool,
}

pub fn compile(args: CompileArgs, cwd: &Path) -> Result<()> {
    let input = cwd.join(&args.input);
    let json = fs::read_to_string(&input)
        .with_context(|| format!("Cannot read {}", input.display()))?;

    let exported = import_from_json(&json)?;
    let document_id = exported.metadata.document_id.clone();
    let (document, mut theme) = exported.into_parts();
    if let Some(locale) = args.locale {
        theme.locale = locale;
    }

    let options = CompileOptions {
        pretty: !args.minify,
        document_id,
        tracking: !args.no_tracking,
        seo: SeoMetadata {
            title: args.title.unwrap_or_default(),
            ..Default::default()
        },
        device: args.device,
        ..Default::default()
    };
    let page = compile_page(&document, &theme, &options)?;
    info!(
        input = %input.display(),
        locale = %theme.locale,
        sections = document.sections.len(),
        "Compiled export"
    );

    match args.output {
        Some(path) => {
            let path = cwd.join(path);
            fs::write(&path, &page.markup)?;
            eprintln!(
                "{} {} → {}",
                "✓".green(),
                input.display(),
                path.display()
            );
        }
        None => print!("{}", page.markup),
    }

    Ok(())
}

fn parse_device(value: &str) -> Result<DeviceSize, String> {
    match value {
        "desktop" => Ok(DeviceSize::Desktop),
        "tablet" => Ok(DeviceSize::Tablet),
        "mobile" => Ok(DeviceSize::Mobile),
        other => Err(format!("unknown device '{}' (desktop, tablet, mobile)", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_model::{export_to_json, Document, Section, SectionKind, Theme};

    #[test]
    fn test_parse_device() {
        assert_eq!(parse_device("mobile"), Ok(DeviceSize::Mobile));
        assert!(parse_device("watch").is_err());
    }

    #[test]
    fn test_compile_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let document = Document::new(vec![Section::with_defaults("hero-1", SectionKind::Hero)]);
        let json = export_to_json(&document, &Theme::default(), Some("page-1")).unwrap();
        fs::write(dir.path().join("page.json"), json).unwrap();

        compile(
            CompileArgs {
                input: PathBuf::from("page.json"),
                output: Some(PathBuf::from("page.html")),
                locale: Some(Locale::Ar),
                title: Some("Launch".to_string()),
                device: None,
                no_tracking: true,
                minify: false,
            },
            dir.path(),
        )
        .unwrap();

        let html = fs::read_to_string(dir.path().join("page.html")).unwrap();
        assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(html.contains("<title>Launch</title>"));
        assert!(!html.contains("<script"));
    }
}
