//! Rendering of elements nested inside a section.

use crate::markup::{Attrs, Context, Style};
use crate::sections::{button_style, Scope};
use pagesmith_model::{ButtonStyle, Element, ElementContent, ElementStyle, TextAlign};

pub(crate) fn render(element: &Element, scope: &Scope, ctx: &mut Context) {
    let style = element.style.clone().unwrap_or_default();
    let colors = &scope.theme.colors;
    let class = |kind: &str| {
        let base = format!("element element-{}", kind);
        match element.config.as_ref().and_then(|c| c.class_name.as_deref()) {
            Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
            _ => base,
        }
    };
    let attrs = |kind: &str| Attrs::class(&class(kind)).attr("data-element-id", element.id.as_str());

    match &element.content {
        ElementContent::Text(content) => {
            ctx.text_element("p", attrs("text").style(box_style(&style, scope)), &content.text);
        }

        ElementContent::Heading(content) => {
            let tag = format!("h{}", content.level.clamp(1, 6));
            ctx.text_element(&tag, attrs("heading").style(box_style(&style, scope)), &content.text);
        }

        ElementContent::Image(content) => {
            if content.url.is_empty() {
                return;
            }
            let image_style = box_style(&style, scope)
                .prop_opt("width", content.width.as_deref().filter(|_| style.width.is_none()))
                .prop_opt("height", content.height.as_deref().filter(|_| style.height.is_none()));
            ctx.void_element(
                "img",
                attrs("image")
                    .attr("src", content.url.as_str())
                    .attr("alt", content.alt.as_str())
                    .style(image_style),
            );
        }

        ElementContent::Button(content) => {
            let (filled, color) = match content.variant {
                ButtonStyle::Primary => (true, &colors.primary),
                ButtonStyle::Secondary => (true, &colors.secondary),
                ButtonStyle::Outline => (false, &colors.primary),
            };
            let wrapper = Style::new()
                .prop_opt("text-align", aligned(&style, scope))
                .prop_opt("padding", style.padding.as_ref().map(|p| p.to_css("0")))
                .prop_opt("margin", style.margin.as_ref().map(|m| m.to_css("0")));

            ctx.open("div", Attrs::new().style(wrapper));
            let mut button = button_style(filled, color)
                .prop("display", "inline-block")
                .prop("padding", "12px 24px")
                .prop("border-radius", "9999px")
                .prop("font-weight", "600")
                .prop("text-decoration", "none");
            button = button
                .prop_opt("font-size", style.font_size.as_deref())
                .prop_opt("color", style.color.as_deref())
                .prop_opt("background-color", style.background_color.as_deref());
            ctx.text_element(
                "a",
                attrs("button")
                    .attr("href", content.link.as_str())
                    .style(button),
                &content.text,
            );
            ctx.close("div");
        }

        ElementContent::Card(content) => {
            ctx.open("div", attrs("card").style(box_style(&style, scope)));
            if let Some(image) = content.image.as_ref().filter(|i| !i.url.is_empty()) {
                ctx.void_element(
                    "img",
                    Attrs::new()
                        .attr("src", image.url.as_str())
                        .attr("alt", image.alt.as_str())
                        .style(
                            Style::new()
                                .prop("width", "100%")
                                .prop("border-radius", "4px")
                                .prop("margin-bottom", "16px"),
                        ),
                );
            }
            ctx.text_element(
                "h3",
                Attrs::new().style(
                    Style::new()
                        .prop("font-size", "20px")
                        .prop("font-weight", "700")
                        .prop("margin-bottom", "8px")
                        .prop("font-family", scope.heading_font()),
                ),
                &content.title,
            );
            ctx.text_element(
                "p",
                Attrs::new().style(Style::new().prop("margin-bottom", "16px")),
                &content.description,
            );
            if let Some(button) = &content.button {
                ctx.text_element(
                    "a",
                    Attrs::new().attr("href", button.link.as_str()).style(
                        button_style(true, &colors.primary)
                            .prop("display", "inline-block")
                            .prop("padding", "8px 16px")
                            .prop("border-radius", "6px"),
                    ),
                    &button.text,
                );
            }
            ctx.close("div");
        }

        ElementContent::Spacer(content) => {
            ctx.add_line(&format!(
                "<div{}></div>",
                attrs("spacer")
                    .attr("aria-hidden", "true")
                    .style(Style::new().prop("height", &content.height))
            ));
        }

        ElementContent::Custom(content) => {
            ctx.open("div", attrs("custom"));
            ctx.raw(&content.html);
            ctx.close("div");
        }
    }
}

/// Alignment mirrored for RTL pages
fn aligned(style: &ElementStyle, scope: &Scope) -> Option<&'static str> {
    style
        .text_align
        .map(|align| align.for_direction(scope.direction).as_str())
}

/// Typography, spacing, border and sizing from an element style
fn box_style(style: &ElementStyle, scope: &Scope) -> Style {
    let align = style
        .text_align
        .unwrap_or(TextAlign::Left)
        .for_direction(scope.direction);

    let mut css = Style::new()
        .prop_opt("font-size", style.font_size.as_deref())
        .prop_opt("font-weight", style.font_weight.as_deref())
        .prop_opt("color", style.color.as_deref())
        .prop_opt("background-color", style.background_color.as_deref())
        .prop("text-align", align.as_str())
        .prop_opt("padding", style.padding.as_ref().map(|p| p.to_css("0")))
        .prop_opt("margin", style.margin.as_ref().map(|m| m.to_css("0")));

    if let Some(border) = &style.border {
        if border.width.is_some() || border.style.is_some() || border.color.is_some() {
            css = css.prop(
                "border",
                format!(
                    "{} {} {}",
                    border.width.as_deref().unwrap_or("1px"),
                    border.style.as_deref().unwrap_or("solid"),
                    border.color.as_deref().unwrap_or("currentColor"),
                ),
            );
        }
        css = css.prop_opt("border-radius", border.radius.as_deref());
    }

    css.prop_opt("width", style.width.as_deref())
        .prop_opt("height", style.height.as_deref())
        .prop_opt("max-width", style.max_width.as_deref())
}
