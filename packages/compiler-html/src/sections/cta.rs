use super::Scope;
use crate::markup::{Attrs, Context, Style};
use pagesmith_model::CtaContent;

pub(super) fn render(content: &CtaContent, scope: &Scope, ctx: &mut Context) {
    ctx.open("div", scope.container());

    ctx.text_element(
        "h2",
        Attrs::class("cta-heading").style(
            Style::new()
                .prop("text-align", "center")
                .prop("font-size", "40px")
                .prop("font-weight", "700")
                .prop("margin-bottom", "24px")
                .prop("color", "white")
                .prop("max-width", "768px")
                .prop("margin-left", "auto")
                .prop("margin-right", "auto")
                .prop("font-family", scope.heading_font()),
        ),
        &content.heading,
    );

    if let Some(description) = content.description.as_deref().filter(|d| !d.is_empty()) {
        ctx.text_element(
            "p",
            Attrs::class("cta-description").style(
                Style::new()
                    .prop("text-align", "center")
                    .prop("font-size", "20px")
                    .prop("color", "rgba(255,255,255,0.9)")
                    .prop("margin-bottom", "32px")
                    .prop("max-width", "640px")
                    .prop("margin-left", "auto")
                    .prop("margin-right", "auto")
                    .prop("font-family", scope.body_font()),
            ),
            description,
        );
    }

    ctx.open(
        "div",
        Attrs::new().style(Style::new().prop("text-align", "center")),
    );
    ctx.text_element(
        "a",
        Attrs::class("cta-button")
            .attr("href", content.button_link.as_str())
            .style(
                Style::new()
                    .prop("display", "inline-block")
                    .prop("background-color", "white")
                    .prop("color", &scope.theme.colors.primary)
                    .prop("padding", "16px 32px")
                    .prop("border-radius", "8px")
                    .prop("text-decoration", "none")
                    .prop("font-weight", "600")
                    .prop("font-size", "18px")
                    .prop("transition", "opacity 0.3s"),
            ),
        &content.button_text,
    );
    ctx.close("div");

    ctx.close("div");
}
