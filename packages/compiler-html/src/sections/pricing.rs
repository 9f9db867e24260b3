use super::{button_style, render_header, Scope};
use crate::markup::{Attrs, Context, Style};
use pagesmith_model::{Locale, PricingContent, PricingPlan};

const CHECK: &str = r#"<path fill-rule="evenodd" d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z" clip-rule="evenodd" />"#;

pub(super) fn render(content: &PricingContent, scope: &Scope, ctx: &mut Context) {
    ctx.open("div", scope.container());
    render_header("pricing", &content.heading, content.subheading.as_deref(), scope, ctx);

    ctx.open(
        "div",
        Attrs::class("pricing-grid").style(
            Style::new()
                .prop("display", "grid")
                .prop("grid-template-columns", "repeat(auto-fit, minmax(280px, 1fr))")
                .prop("gap", "32px")
                .prop("max-width", "1000px")
                .prop("margin", "0 auto"),
        ),
    );
    for plan in &content.items {
        render_plan(plan, scope, ctx);
    }
    ctx.close("div");

    ctx.close("div");
}

fn popular_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Most Popular",
        Locale::Ar => "الأكثر شعبية",
    }
}

fn render_plan(plan: &PricingPlan, scope: &Scope, ctx: &mut Context) {
    let colors = &scope.theme.colors;

    let mut card = Style::new()
        .prop("background", "white")
        .prop("padding", "32px")
        .prop("border-radius", "8px")
        .prop("box-shadow", "0 2px 8px rgba(0,0,0,0.1)")
        .prop("position", "relative");
    if plan.popular {
        card = card
            .prop("border", format!("2px solid {}", colors.primary))
            .prop("transform", "scale(1.05)");
    }
    ctx.open("div", Attrs::class("pricing-item").style(card));

    if plan.popular {
        ctx.text_element(
            "div",
            Attrs::class("pricing-badge").style(
                Style::new()
                    .prop("position", "absolute")
                    .prop("top", "-16px")
                    .prop("left", "50%")
                    .prop("transform", "translateX(-50%)")
                    .prop("background-color", &colors.primary)
                    .prop("color", "white")
                    .prop("padding", "8px 16px")
                    .prop("border-radius", "20px")
                    .prop("font-size", "14px")
                    .prop("font-weight", "600"),
            ),
            popular_label(scope.locale),
        );
    }

    ctx.text_element(
        "h3",
        Attrs::class("pricing-name").style(
            Style::new()
                .prop("font-size", "24px")
                .prop("font-weight", "700")
                .prop("margin-bottom", "8px")
                .prop("color", &colors.text)
                .prop("font-family", scope.heading_font()),
        ),
        &plan.name,
    );

    ctx.open(
        "div",
        Attrs::class("pricing-price").style(Style::new().prop("margin-bottom", "24px")),
    );
    ctx.text_element(
        "span",
        Attrs::class("pricing-amount").style(
            Style::new()
                .prop("font-size", "40px")
                .prop("font-weight", "700")
                .prop("color", &colors.text)
                .prop("font-family", scope.heading_font()),
        ),
        &plan.price,
    );
    if let Some(period) = plan.period.as_deref().filter(|p| !p.is_empty()) {
        ctx.text_element(
            "span",
            Attrs::class("pricing-period").style(
                Style::new()
                    .prop("color", "#6b7280")
                    .prop("font-family", scope.body_font()),
            ),
            period,
        );
    }
    ctx.close("div");

    ctx.open(
        "ul",
        Attrs::class("pricing-features").style(
            Style::new()
                .prop("list-style", "none")
                .prop("padding", "0")
                .prop("margin", "0 0 32px 0"),
        ),
    );
    for feature in &plan.features {
        ctx.open(
            "li",
            Attrs::new().style(
                Style::new()
                    .prop("display", "flex")
                    .prop("align-items", "center")
                    .prop("gap", "8px")
                    .prop("margin-bottom", "12px"),
            ),
        );
        ctx.add_line(&format!(
            "<svg style=\"width: 20px; height: 20px; flex-shrink: 0; color: {};\" fill=\"currentColor\" viewBox=\"0 0 20 20\">{}</svg>",
            crate::markup::escape_html(&colors.primary),
            CHECK
        ));
        ctx.text_element(
            "span",
            Attrs::new().style(
                Style::new()
                    .prop("color", "#4b5563")
                    .prop("font-family", scope.body_font()),
            ),
            feature,
        );
        ctx.close("li");
    }
    ctx.close("ul");

    let button = button_style(plan.popular, &colors.primary)
        .prop("display", "block")
        .prop("width", "100%")
        .prop("padding", "16px")
        .prop("border-radius", "8px")
        .prop("text-align", "center")
        .prop("text-decoration", "none")
        .prop("font-weight", "600")
        .prop("font-size", "18px")
        .prop("transition", "opacity 0.3s");
    ctx.text_element(
        "a",
        Attrs::class("pricing-button")
            .attr("href", plan.button_link.as_str())
            .style(button),
        &plan.button_text,
    );

    ctx.close("div");
}
