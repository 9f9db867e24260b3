use super::{button_style, Scope};
use crate::markup::{Attrs, Context, Style};
use pagesmith_model::{ButtonStyle, HeroContent, LinkButton};

/// Source order is the same in both locales. The grid carries the page
/// direction, so under RTL the columns and the button row mirror through
/// `direction` alone.
pub(super) fn render(content: &HeroContent, scope: &Scope, ctx: &mut Context) {
    ctx.open("div", scope.container());
    ctx.open(
        "div",
        Attrs::class("hero-grid")
            .attr("dir", scope.direction.as_str())
            .style(
                Style::new()
                    .prop("display", "grid")
                    .prop("grid-template-columns", "1fr")
                    .prop("gap", "48px")
                    .prop("align-items", "center"),
            ),
    );

    render_content(content, scope, ctx);
    render_image(content, ctx);

    ctx.close("div");
    ctx.close("div");
}

fn render_image(content: &HeroContent, ctx: &mut Context) {
    ctx.open("div", Attrs::class("hero-image"));
    if let Some(image) = content.image.as_ref().filter(|i| !i.url.is_empty()) {
        ctx.void_element(
            "img",
            Attrs::new()
                .attr("src", image.url.as_str())
                .attr("alt", image.alt.as_str())
                .style(
                    Style::new()
                        .prop("width", "100%")
                        .prop("height", "auto")
                        .prop("border-radius", "8px"),
                ),
        );
    }
    ctx.close("div");
}

fn render_content(content: &HeroContent, scope: &Scope, ctx: &mut Context) {
    let colors = &scope.theme.colors;

    ctx.open(
        "div",
        Attrs::class("hero-content").style(
            Style::new().prop("text-align", scope.direction.text_align()),
        ),
    );

    if let Some(subheading) = content.subheading.as_deref().filter(|s| !s.is_empty()) {
        ctx.text_element(
            "p",
            Attrs::class("hero-subheading").style(
                Style::new()
                    .prop("font-size", "18px")
                    .prop("font-weight", "600")
                    .prop("margin-bottom", "16px")
                    .prop("color", &colors.accent),
            ),
            subheading,
        );
    }

    ctx.text_element(
        "h1",
        Attrs::class("hero-heading").style(
            Style::new()
                .prop("font-size", "48px")
                .prop("font-weight", "700")
                .prop("margin-bottom", "24px")
                .prop("line-height", "1.2")
                .prop("color", &colors.text)
                .prop("font-family", scope.heading_font()),
        ),
        &content.heading,
    );

    ctx.text_element(
        "p",
        Attrs::class("hero-description").style(
            Style::new()
                .prop("font-size", "20px")
                .prop("margin-bottom", "32px")
                .prop("line-height", "1.6")
                .prop("color", &colors.text)
                .prop("font-family", scope.body_font()),
        ),
        &content.description,
    );

    ctx.open(
        "div",
        Attrs::class("hero-buttons").style(
            Style::new()
                .prop("display", "flex")
                .prop("flex-wrap", "wrap")
                .prop("gap", "16px"),
        ),
    );
    if let Some(button) = &content.primary_button {
        render_button(button, "hero-button-primary", &colors.primary, ctx);
    }
    if let Some(button) = &content.secondary_button {
        render_button(button, "hero-button-secondary", &colors.secondary, ctx);
    }
    ctx.close("div");

    ctx.close("div");
}

fn render_button(button: &LinkButton, class: &str, color: &str, ctx: &mut Context) {
    let style = button_style(button.style == ButtonStyle::Primary, color)
        .prop("padding", "16px 32px")
        .prop("border-radius", "8px")
        .prop("text-decoration", "none")
        .prop("display", "inline-block")
        .prop("font-weight", "600")
        .prop("font-size", "18px")
        .prop("transition", "opacity 0.3s");

    ctx.text_element(
        "a",
        Attrs::class(class)
            .attr("href", button.link.as_str())
            .style(style),
        &button.text,
    );
}
