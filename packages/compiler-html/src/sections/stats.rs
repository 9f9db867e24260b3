use super::Scope;
use crate::markup::{Attrs, Context, Style};
use pagesmith_model::StatsContent;

pub(super) fn render(content: &StatsContent, scope: &Scope, ctx: &mut Context) {
    ctx.open("div", scope.container());

    if let Some(heading) = content.heading.as_deref().filter(|h| !h.is_empty()) {
        ctx.text_element(
            "h2",
            Attrs::class("stats-heading").style(
                Style::new()
                    .prop("text-align", "center")
                    .prop("font-size", "32px")
                    .prop("margin-bottom", "40px")
                    .prop("color", "white")
                    .prop("font-family", scope.heading_font()),
            ),
            heading,
        );
    }

    ctx.open(
        "div",
        Attrs::class("stats-grid").style(
            Style::new()
                .prop("display", "grid")
                .prop("grid-template-columns", "repeat(auto-fit, minmax(150px, 1fr))")
                .prop("gap", "32px")
                .prop("text-align", "center"),
        ),
    );

    for stat in &content.stats {
        ctx.open("div", Attrs::class("stat-item"));
        ctx.text_element(
            "div",
            Attrs::class("stat-value").style(
                Style::new()
                    .prop("font-size", "48px")
                    .prop("font-weight", "700")
                    .prop("margin-bottom", "8px")
                    .prop("color", "white")
                    .prop("font-family", scope.heading_font()),
            ),
            &stat.value,
        );
        ctx.text_element(
            "div",
            Attrs::class("stat-label").style(
                Style::new()
                    .prop("font-size", "18px")
                    .prop("color", "rgba(255,255,255,0.9)")
                    .prop("font-family", scope.body_font()),
            ),
            &stat.label,
        );
        ctx.close("div");
    }

    ctx.close("div");
    ctx.close("div");
}
