use crate::markup::{Attrs, Context};
use crate::{sections, tracking};
use chrono::{DateTime, SecondsFormat, Utc};
use pagesmith_compiler_css::compile_to_css_with_container;
use pagesmith_model::{DeviceSize, Document, SeoMetadata, Theme};
use thiserror::Error;
use tracing::{debug, info, instrument};

pub const DEFAULT_ANALYTICS_ENDPOINT: &str = "/api/analytics/track";

const FALLBACK_TITLE: &str = "Untitled Page";

/// Errors that can occur during HTML compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Failed to encode tracking script: {0}")]
    Script(#[from] serde_json::Error),
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Id reported by the tracking script
    pub document_id: Option<String>,
    pub analytics_endpoint: String,
    /// Embed the tracking script
    pub tracking: bool,
    pub seo: SeoMetadata,
    /// Apply this device's responsive overrides and drop sections hidden on it
    pub device: Option<DeviceSize>,
    /// Stamped into a `generated-at` meta tag when set
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            document_id: None,
            analytics_endpoint: DEFAULT_ANALYTICS_ENDPOINT.to_string(),
            tracking: true,
            seo: SeoMetadata::default(),
            device: None,
            generated_at: None,
        }
    }
}

/// A standalone page: `markup` embeds `stylesheet` in its head
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPage {
    pub markup: String,
    pub stylesheet: String,
}

/// Compile a document and theme to a self-contained HTML page
#[instrument(skip(document, theme, options), fields(sections = document.sections.len(), locale = %theme.locale))]
pub fn compile(
    document: &Document,
    theme: &Theme,
    options: &CompileOptions,
) -> Result<CompiledPage, CompileError> {
    validate_options(options)?;

    let stylesheet = compile_to_css_with_container(theme, document.container_max_width());
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line(&format!(
        "<html{}>",
        Attrs::new()
            .attr("lang", theme.locale.code())
            .attr("dir", theme.direction().as_str())
    ));
    ctx.indent();

    compile_head(&stylesheet, options, &mut ctx);

    ctx.open("body", Attrs::new());

    let mut rendered = 0;
    for section in document.sorted_sections() {
        if options.device.map_or(false, |device| section.is_hidden_on(device)) {
            debug!(section_id = %section.id, "Skipping section hidden on device");
            continue;
        }
        sections::render(section, document, theme, options, &mut ctx);
        rendered += 1;
    }

    if options.tracking {
        let script = tracking::script(options.document_id.as_deref(), &options.analytics_endpoint)?;
        ctx.open("script", Attrs::new());
        ctx.raw(&script);
        ctx.close("script");
    }

    ctx.close("body");
    ctx.dedent();
    ctx.add_line("</html>");

    let markup = ctx.get_output();
    info!(rendered, bytes = markup.len(), "Compiled page");

    Ok(CompiledPage { markup, stylesheet })
}

/// Compile one section as a markup fragment, for previews
pub fn compile_section(
    document: &Document,
    section_id: &str,
    theme: &Theme,
    options: &CompileOptions,
) -> Result<Option<String>, CompileError> {
    validate_options(options)?;

    let Some(section) = document.find_section(section_id) else {
        return Ok(None);
    };

    let mut ctx = Context::new(options);
    sections::render(section, document, theme, options, &mut ctx);
    Ok(Some(ctx.get_output()))
}

fn validate_options(options: &CompileOptions) -> Result<(), CompileError> {
    if !options.indent.chars().all(char::is_whitespace) {
        return Err(CompileError::InvalidOption(format!(
            "indent must be whitespace, got {:?}",
            options.indent
        )));
    }
    if options.tracking && options.analytics_endpoint.trim().is_empty() {
        return Err(CompileError::InvalidOption(
            "analytics endpoint is empty".to_string(),
        ));
    }
    Ok(())
}

fn compile_head(stylesheet: &str, options: &CompileOptions, ctx: &mut Context) {
    let seo = &options.seo;
    let title = if seo.title.trim().is_empty() {
        FALLBACK_TITLE
    } else {
        seo.title.as_str()
    };

    ctx.open("head", Attrs::new());

    ctx.void_element("meta", Attrs::new().attr("charset", "UTF-8"));
    ctx.void_element(
        "meta",
        Attrs::new()
            .attr("name", "viewport")
            .attr("content", "width=device-width, initial-scale=1.0"),
    );
    ctx.text_element("title", Attrs::new(), title);

    if !seo.description.is_empty() {
        meta_name(ctx, "description", &seo.description);
    }
    if !seo.keywords.is_empty() {
        meta_name(ctx, "keywords", &seo.keywords.join(", "));
    }
    if let Some(image) = seo.og_image.as_deref().filter(|i| !i.is_empty()) {
        meta_property(ctx, "og:image", image);
    }
    meta_property(ctx, "og:title", title);
    if !seo.description.is_empty() {
        meta_property(ctx, "og:description", &seo.description);
    }
    if let Some(generated_at) = options.generated_at {
        meta_name(
            ctx,
            "generated-at",
            &generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        );
    }

    ctx.open("style", Attrs::new());
    ctx.raw(stylesheet);
    ctx.close("style");

    ctx.close("head");
}

fn meta_name(ctx: &mut Context, name: &str, content: &str) {
    ctx.void_element(
        "meta",
        Attrs::new().attr("name", name).attr("content", content),
    );
}

fn meta_property(ctx: &mut Context, property: &str, content: &str) {
    ctx.void_element(
        "meta",
        Attrs::new()
            .attr("property", property)
            .attr("content", content),
    );
}
