use super::{render_header, Scope};
use crate::markup::{Attrs, Context, Style};
use pagesmith_model::{FeatureLayout, FeaturesContent};

const CHECK_ICON: &str = r#"<svg style="width: 28px; height: 28px; color: white;" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7" /></svg>"#;

pub(super) fn render(content: &FeaturesContent, scope: &Scope, ctx: &mut Context) {
    let colors = &scope.theme.colors;

    ctx.open("div", scope.container());
    render_header("features", &content.heading, content.subheading.as_deref(), scope, ctx);

    ctx.open(
        "div",
        Attrs::class("features-grid").style(
            Style::new()
                .prop("display", "grid")
                .prop("grid-template-columns", columns(content.layout))
                .prop("gap", "32px"),
        ),
    );

    for item in &content.items {
        ctx.open(
            "div",
            Attrs::class("feature-item").style(
                Style::new()
                    .prop("background", "white")
                    .prop("padding", "24px")
                    .prop("border-radius", "8px")
                    .prop("box-shadow", "0 2px 8px rgba(0,0,0,0.1)"),
            ),
        );

        let icon_attrs = Attrs::class("feature-icon").style(
            Style::new()
                .prop("width", "56px")
                .prop("height", "56px")
                .prop("border-radius", "16px")
                .prop("background-color", &colors.primary)
                .prop("display", "flex")
                .prop("align-items", "center")
                .prop("justify-content", "center")
                .prop("margin-bottom", "20px")
                .prop("font-size", "28px"),
        );
        if item.icon.is_empty() {
            ctx.open("div", icon_attrs);
            ctx.add_line(CHECK_ICON);
            ctx.close("div");
        } else {
            ctx.text_element("div", icon_attrs, &item.icon);
        }

        ctx.text_element(
            "h3",
            Attrs::class("feature-title").style(
                Style::new()
                    .prop("font-size", "20px")
                    .prop("font-weight", "700")
                    .prop("margin-bottom", "12px")
                    .prop("color", &colors.text)
                    .prop("font-family", scope.heading_font()),
            ),
            &item.title,
        );
        ctx.text_element(
            "p",
            Attrs::class("feature-description").style(
                Style::new()
                    .prop("line-height", "1.6")
                    .prop("color", &colors.text)
                    .prop("font-family", scope.body_font()),
            ),
            &item.description,
        );

        ctx.close("div");
    }

    ctx.close("div");
    ctx.close("div");
}

fn columns(layout: FeatureLayout) -> &'static str {
    match layout {
        FeatureLayout::Grid2 => "repeat(auto-fit, minmax(300px, 1fr))",
        FeatureLayout::Grid3 => "repeat(auto-fit, minmax(250px, 1fr))",
        FeatureLayout::Grid4 => "repeat(auto-fit, minmax(200px, 1fr))",
        FeatureLayout::List => "1fr",
    }
}
