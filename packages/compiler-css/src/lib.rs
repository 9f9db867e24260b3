//! # Pagesmith CSS Compiler
//!
//! Turns a [`Theme`] into the shared stylesheet embedded in every compiled
//! page: color variables, a reset, direction for the active locale, base
//! typography and the responsive rules the section renderers rely on
//! (`.hero-grid`, `.hero-content`, `.hero-image`, `*-heading`).
//!
//! Per-block layout is inlined by the HTML compiler; only shared tokens
//! live here. Output is deterministic for a given theme.

use pagesmith_model::Theme;
use std::fmt::Write;
use tracing::debug;

pub const DEFAULT_CONTAINER_MAX_WIDTH: &str = "1200px";

/// Compile the page stylesheet for a theme
pub fn compile_to_css(theme: &Theme) -> String {
    compile_to_css_with_container(theme, DEFAULT_CONTAINER_MAX_WIDTH)
}

/// Compile with a document-specific container width
pub fn compile_to_css_with_container(theme: &Theme, container_max_width: &str) -> String {
    let colors = &theme.colors;
    let fonts = &theme.fonts;
    let mut sheet = Stylesheet::default();

    sheet
        .rule(":root")
        .decl("--primary-color", &colors.primary)
        .decl("--secondary-color", &colors.secondary)
        .decl("--background-color", &colors.background)
        .decl("--text-color", &colors.text)
        .decl("--accent-color", &colors.accent);

    sheet
        .rule("*")
        .decl("margin", "0")
        .decl("padding", "0")
        .decl("box-sizing", "border-box");

    sheet
        .rule("html")
        .decl("direction", theme.direction().as_str())
        .decl("scroll-behavior", "smooth");

    sheet
        .rule("body")
        .decl("font-family", &font_stack(&fonts.body))
        .decl("color", &colors.text)
        .decl("background-color", &colors.background)
        .decl("line-height", "1.6")
        .decl("-webkit-font-smoothing", "antialiased")
        .decl("-moz-osx-font-smoothing", "grayscale");

    sheet
        .rule("h1, h2, h3, h4, h5, h6")
        .decl("font-family", &font_stack(&fonts.heading))
        .decl("font-weight", "700")
        .decl("line-height", "1.2")
        .decl("color", &colors.text);

    sheet
        .rule("a")
        .decl("color", &colors.primary)
        .decl("text-decoration", "none")
        .decl("transition", "opacity 0.3s ease");

    sheet.rule("a:hover").decl("opacity", "0.8");

    sheet
        .rule(".container")
        .decl("max-width", container_max_width)
        .decl("margin", "0 auto")
        .decl("padding", "0 16px");

    sheet
        .media("(min-width: 1024px)")
        .rule(".hero-grid")
        .decl("grid-template-columns", "1fr 1fr !important");

    let mobile = sheet.media("(max-width: 768px)");
    mobile.rule(".hero-heading").decl("font-size", "32px !important");
    mobile
        .rule(".features-heading, .testimonials-heading, .pricing-heading, .cta-heading")
        .decl("font-size", "32px !important");
    mobile
        .rule(".hero-grid")
        .decl("grid-template-columns", "1fr !important");
    mobile.rule(".hero-content").decl("order", "2 !important");
    mobile.rule(".hero-image").decl("order", "1 !important");

    let css = sheet.to_css();
    debug!(bytes = css.len(), locale = %theme.locale, "Compiled stylesheet");
    css
}

/// `'Name', sans-serif`
pub fn font_stack(family: &str) -> String {
    format!("'{}', sans-serif", family.replace('\'', ""))
}

#[derive(Debug, Default)]
struct Stylesheet {
    rules: Vec<Rule>,
    media: Vec<MediaBlock>,
}

#[derive(Debug)]
struct Rule {
    selector: String,
    declarations: Vec<(String, String)>,
}

#[derive(Debug)]
struct MediaBlock {
    query: String,
    rules: Vec<Rule>,
}

impl Stylesheet {
    fn rule(&mut self, selector: &str) -> &mut Rule {
        self.rules.push(Rule::new(selector));
        let last = self.rules.len() - 1;
        &mut self.rules[last]
    }

    fn media(&mut self, query: &str) -> &mut MediaBlock {
        self.media.push(MediaBlock {
            query: query.to_string(),
            rules: Vec::new(),
        });
        let last = self.media.len() - 1;
        &mut self.media[last]
    }

    fn to_css(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            rule.write(&mut out, "");
        }
        for block in &self.media {
            let _ = writeln!(out, "@media {} {{", block.query);
            for rule in &block.rules {
                rule.write(&mut out, "  ");
            }
            out.push_str("}\n");
        }
        out
    }
}

impl MediaBlock {
    fn rule(&mut self, selector: &str) -> &mut Rule {
        self.rules.push(Rule::new(selector));
        let last = self.rules.len() - 1;
        &mut self.rules[last]
    }
}

impl Rule {
    fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            declarations: Vec::new(),
        }
    }

    fn decl(&mut self, property: &str, value: &str) -> &mut Self {
        self.declarations
            .push((property.to_string(), sanitize_value(value)));
        self
    }

    fn write(&self, out: &mut String, indent: &str) {
        let _ = writeln!(out, "{}{} {{", indent, self.selector);
        for (property, value) in &self.declarations {
            let _ = writeln!(out, "{}  {}: {};", indent, property, value);
        }
        let _ = writeln!(out, "{}}}", indent);
    }
}

/// Theme values are user input; keep them from closing the declaration
/// or the enclosing `<style>` element.
fn sanitize_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_model::{Locale, ThemePatch};

    #[test]
    fn test_compile_color_variables() {
        let css = compile_to_css(&Theme::default());

        assert!(css.contains("--primary-color: #3b82f6;"));
        assert!(css.contains("--secondary-color: #8b5cf6;"));
        assert!(css.contains("--accent-color: #f59e0b;"));
        assert!(css.contains("font-family: 'Inter', sans-serif;"));
    }

    #[test]
    fn test_direction_follows_locale() {
        let mut theme = Theme::default();
        assert!(compile_to_css(&theme).contains("direction: ltr;"));

        theme.apply(ThemePatch {
            locale: Some(Locale::Ar),
            ..Default::default()
        });
        assert!(compile_to_css(&theme).contains("direction: rtl;"));
    }

    #[test]
    fn test_responsive_rules() {
        let css = compile_to_css(&Theme::default());

        assert!(css.contains("@media (min-width: 1024px) {"));
        assert!(css.contains("@media (max-width: 768px) {"));
        assert!(css.contains("    grid-template-columns: 1fr !important;"));
        assert!(css.contains(".hero-content {\n    order: 2 !important;"));
        assert!(css.contains(".hero-image {\n    order: 1 !important;"));
    }

    #[test]
    fn test_container_width() {
        let css = compile_to_css_with_container(&Theme::default(), "960px");
        assert!(css.contains(".container {\n  max-width: 960px;"));
    }

    #[test]
    fn test_values_cannot_escape_style() {
        let mut theme = Theme::default();
        theme.colors.primary = "red;}</style><script>".to_string();

        let css = compile_to_css(&theme);
        assert!(!css.contains("</style>"));
        assert!(css.contains("--primary-color: red/stylescript;"));
    }

    #[test]
    fn test_deterministic() {
        let theme = Theme::default();
        assert_eq!(compile_to_css(&theme), compile_to_css(&theme));
    }
}
