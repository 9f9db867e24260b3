//! Per-section-type renderers.
//!
//! Each renderer reads only the active locale's content of its own section
//! and inlines its layout; shared tokens come from the stylesheet.

mod cta;
mod features;
mod hero;
mod pricing;
mod stats;
mod testimonials;

use crate::elements;
use crate::markup::{escape_html, Attrs, Context, Style};
use crate::CompileOptions;
use pagesmith_compiler_css::font_stack;
use pagesmith_model::{
    Direction, Document, Locale, Section, SectionConfig, SectionContent, SectionKind, Theme,
};
use tracing::warn;

/// What a renderer needs besides its own content
pub(crate) struct Scope<'a> {
    pub theme: &'a Theme,
    pub locale: Locale,
    pub direction: Direction,
    pub container_max_width: &'a str,
}

impl Scope<'_> {
    pub fn heading_font(&self) -> String {
        font_stack(&self.theme.fonts.heading)
    }

    pub fn body_font(&self) -> String {
        font_stack(&self.theme.fonts.body)
    }

    pub fn container(&self) -> Attrs {
        Attrs::class("container").style(
            Style::new()
                .prop("max-width", self.container_max_width)
                .prop("margin", "0 auto")
                .prop("padding", "0 16px"),
        )
    }
}

pub(crate) fn render(
    section: &Section,
    document: &Document,
    theme: &Theme,
    options: &CompileOptions,
    ctx: &mut Context,
) {
    let scope = Scope {
        theme,
        locale: theme.locale,
        direction: theme.direction(),
        container_max_width: document.container_max_width(),
    };
    let locale = scope.locale;

    let config = match options.device {
        Some(device) => section.effective_config(device),
        None => section.config.clone(),
    };

    let (background, padding) = match section.kind() {
        SectionKind::Hero => (&theme.colors.background, "80px 0"),
        SectionKind::Stats => (&theme.colors.primary, "64px 0"),
        SectionKind::Cta => (&theme.colors.primary, "96px 0"),
        _ => (&theme.colors.background, "96px 0"),
    };

    if let SectionContent::Freeform { kind, .. } = &section.content {
        warn!(section_id = %section.id, kind = %kind, "Unsupported section type");
        ctx.open("section", Attrs::new().attr("data-section-id", section.id.as_str()));
        ctx.add_line(&format!(
            "<p>Section type \"{}\" not supported</p>",
            escape_html(kind.as_str())
        ));
        ctx.close("section");
        return;
    }

    ctx.open(
        "section",
        Attrs::class(&format!("{}-section", section.kind()))
            .attr("data-section-id", section.id.as_str())
            .style(section_style(&config, background, padding, scope.direction)),
    );

    match &section.content {
        SectionContent::Hero(content) => hero::render(content.get(locale), &scope, ctx),
        SectionContent::Features(content) => features::render(content.get(locale), &scope, ctx),
        SectionContent::Stats(content) => stats::render(content.get(locale), &scope, ctx),
        SectionContent::Testimonials(content) => {
            testimonials::render(content.get(locale), &scope, ctx)
        }
        SectionContent::Pricing(content) => pricing::render(content.get(locale), &scope, ctx),
        SectionContent::Cta(content) => cta::render(content.get(locale), &scope, ctx),
        SectionContent::Freeform { .. } => {}
    }

    if !section.elements.is_empty() {
        ctx.open(
            "div",
            Attrs::class("container section-elements").style(
                Style::new()
                    .prop("max-width", scope.container_max_width)
                    .prop("margin", "0 auto")
                    .prop("padding", "0 16px"),
            ),
        );
        for element in section.sorted_elements() {
            elements::render(element, &scope, ctx);
        }
        ctx.close("div");
    }

    ctx.close("section");
}

/// Config padding wins over the renderer's default padding
fn section_style(
    config: &SectionConfig,
    default_background: &str,
    default_padding: &str,
    direction: Direction,
) -> Style {
    let style = Style::new().prop(
        "background-color",
        config.background_color.as_deref().unwrap_or(default_background),
    );

    let style = match &config.padding {
        Some(padding) => style
            .prop("padding-top", &padding.top)
            .prop("padding-bottom", &padding.bottom)
            .prop("padding-left", &padding.left)
            .prop("padding-right", &padding.right),
        None => style.prop("padding", default_padding),
    };

    style.prop("direction", direction.as_str())
}

/// Inline style for a link rendered as a filled or outlined button
pub(crate) fn button_style(filled: bool, color: &str) -> Style {
    if filled {
        Style::new()
            .prop("background-color", color)
            .prop("color", "white")
    } else {
        Style::new()
            .prop("border", format!("2px solid {}", color))
            .prop("color", color)
            .prop("background", "transparent")
    }
}

/// Centered section heading with optional subheading
pub(crate) fn render_header(
    prefix: &str,
    heading: &str,
    subheading: Option<&str>,
    scope: &Scope,
    ctx: &mut Context,
) {
    let colors = &scope.theme.colors;

    ctx.open(
        "div",
        Attrs::class(&format!("{}-header", prefix)).style(
            Style::new()
                .prop("text-align", "center")
                .prop("margin-bottom", "64px"),
        ),
    );
    ctx.text_element(
        "h2",
        Attrs::class(&format!("{}-heading", prefix)).style(
            Style::new()
                .prop("font-size", "40px")
                .prop("font-weight", "700")
                .prop("margin-bottom", "16px")
                .prop("color", &colors.text)
                .prop("font-family", scope.heading_font()),
        ),
        heading,
    );
    if let Some(subheading) = subheading.filter(|s| !s.is_empty()) {
        ctx.text_element(
            "p",
            Attrs::class(&format!("{}-subheading", prefix)).style(
                Style::new()
                    .prop("font-size", "20px")
                    .prop("color", &colors.text)
                    .prop("font-family", scope.body_font()),
            ),
            subheading,
        );
    }
    ctx.close("div");
}
