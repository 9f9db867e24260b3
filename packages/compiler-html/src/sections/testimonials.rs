use super::{render_header, Scope};
use crate::markup::{Attrs, Context, Style};
use pagesmith_model::{Testimonial, TestimonialsContent};

const STAR: &str = r#"<svg style="width: 20px; height: 20px; color: #fbbf24;" fill="currentColor" viewBox="0 0 20 20"><path d="M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z" /></svg>"#;

pub(super) fn render(content: &TestimonialsContent, scope: &Scope, ctx: &mut Context) {
    ctx.open("div", scope.container());
    render_header(
        "testimonials",
        &content.heading,
        content.subheading.as_deref(),
        scope,
        ctx,
    );

    ctx.open(
        "div",
        Attrs::class("testimonials-grid").style(
            Style::new()
                .prop("display", "grid")
                .prop("grid-template-columns", "repeat(auto-fit, minmax(300px, 1fr))")
                .prop("gap", "32px"),
        ),
    );
    for testimonial in &content.testimonials {
        render_item(testimonial, scope, ctx);
    }
    ctx.close("div");

    ctx.close("div");
}

fn render_item(testimonial: &Testimonial, scope: &Scope, ctx: &mut Context) {
    let colors = &scope.theme.colors;

    ctx.open(
        "div",
        Attrs::class("testimonial-item").style(
            Style::new()
                .prop("background", "white")
                .prop("padding", "24px")
                .prop("border-radius", "8px")
                .prop("box-shadow", "0 2px 8px rgba(0,0,0,0.1)"),
        ),
    );

    ctx.open(
        "div",
        Attrs::class("testimonial-stars").style(
            Style::new()
                .prop("display", "flex")
                .prop("gap", "4px")
                .prop("margin-bottom", "16px"),
        ),
    );
    for _ in 0..5 {
        ctx.add_line(STAR);
    }
    ctx.close("div");

    ctx.text_element(
        "p",
        Attrs::class("testimonial-quote").style(
            Style::new()
                .prop("color", "#4b5563")
                .prop("margin-bottom", "24px")
                .prop("line-height", "1.6")
                .prop("font-family", scope.body_font()),
        ),
        &testimonial.quote,
    );

    ctx.open(
        "div",
        Attrs::class("testimonial-author").style(
            Style::new()
                .prop("display", "flex")
                .prop("align-items", "center")
                .prop("gap", "12px"),
        ),
    );

    let avatar = Style::new()
        .prop("width", "48px")
        .prop("height", "48px")
        .prop("border-radius", "50%");
    match testimonial.avatar.as_deref().filter(|a| !a.is_empty()) {
        Some(url) => ctx.void_element(
            "img",
            Attrs::class("testimonial-avatar")
                .attr("src", url)
                .attr("alt", testimonial.author.as_str())
                .style(avatar.prop("object-fit", "cover")),
        ),
        None => ctx.text_element(
            "div",
            Attrs::class("testimonial-avatar").style(
                avatar
                    .prop("background-color", &colors.primary)
                    .prop("display", "flex")
                    .prop("align-items", "center")
                    .prop("justify-content", "center")
                    .prop("color", "white")
                    .prop("font-weight", "600")
                    .prop("font-size", "18px"),
            ),
            &initial(&testimonial.author),
        ),
    }

    ctx.open("div", Attrs::new());
    ctx.text_element(
        "p",
        Attrs::class("testimonial-author-name").style(
            Style::new()
                .prop("font-weight", "600")
                .prop("color", &colors.text)
                .prop("font-family", scope.heading_font()),
        ),
        &testimonial.author,
    );
    ctx.text_element(
        "p",
        Attrs::class("testimonial-author-role").style(
            Style::new()
                .prop("font-size", "14px")
                .prop("color", "#6b7280")
                .prop("font-family", scope.body_font()),
        ),
        &testimonial.role,
    );
    ctx.close("div");

    ctx.close("div");
    ctx.close("div");
}

fn initial(author: &str) -> String {
    author
        .chars()
        .find(|c| !c.is_whitespace())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "A".to_string())
}
