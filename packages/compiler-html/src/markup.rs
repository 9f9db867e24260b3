//! Output buffer and small builders for tags, attributes and inline styles.

use crate::CompileOptions;
use std::fmt::Write;

pub(crate) struct Context<'a> {
    options: &'a CompileOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    pub fn new(options: &'a CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    pub fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    /// `<tag attrs>` on its own line, then indent
    pub fn open(&mut self, tag: &str, attrs: Attrs) {
        self.add_line(&format!("<{}{}>", tag, attrs));
        self.indent();
    }

    pub fn close(&mut self, tag: &str) {
        self.dedent();
        self.add_line(&format!("</{}>", tag));
    }

    /// `<tag attrs>text</tag>` with `text` escaped
    pub fn text_element(&mut self, tag: &str, attrs: Attrs, text: &str) {
        self.add_line(&format!("<{}{}>{}</{}>", tag, attrs, escape_html(text), tag));
    }

    /// `<tag attrs />`
    pub fn void_element(&mut self, tag: &str, attrs: Attrs) {
        debug_assert!(is_self_closing(tag));
        self.add_line(&format!("<{}{} />", tag, attrs));
    }

    /// Markup written exactly as given
    pub fn raw(&mut self, markup: &str) {
        for line in markup.lines() {
            self.add_line(line);
        }
    }

    pub fn get_output(self) -> String {
        self.buffer
    }
}

/// Attribute list; values are escaped on render
#[derive(Debug, Default)]
pub(crate) struct Attrs {
    pairs: Vec<(&'static str, String)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(name: &str) -> Self {
        Self::new().attr("class", name)
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.pairs.push((name, value.into()));
        self
    }

    pub fn style(self, style: Style) -> Self {
        if style.is_empty() {
            return self;
        }
        self.attr("style", style.to_string())
    }
}

impl std::fmt::Display for Attrs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in &self.pairs {
            write!(f, " {}=\"{}\"", name, escape_html(value))?;
        }
        Ok(())
    }
}

/// Inline `style` declarations in insertion order
#[derive(Debug, Default, Clone)]
pub(crate) struct Style {
    declarations: String,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prop(mut self, property: &str, value: impl AsRef<str>) -> Self {
        if !self.declarations.is_empty() {
            self.declarations.push(' ');
        }
        let _ = write!(self.declarations, "{}: {};", property, value.as_ref());
        self
    }

    pub fn prop_opt(self, property: &str, value: Option<impl AsRef<str>>) -> Self {
        match value {
            Some(value) => self.prop(property, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.declarations)
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img" | "input" | "br" | "hr" | "meta" | "link" | "source" | "wbr"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_are_escaped() {
        let attrs = Attrs::class("a\"b").attr("alt", "<x>");
        assert_eq!(attrs.to_string(), " class=\"a&quot;b\" alt=\"&lt;x&gt;\"");
    }

    #[test]
    fn test_style_joins_declarations() {
        let style = Style::new()
            .prop("display", "grid")
            .prop_opt("gap", Some("8px"))
            .prop_opt("color", None::<&str>);
        assert_eq!(style.to_string(), "display: grid; gap: 8px;");
    }

    #[test]
    fn test_compact_output_has_no_newlines() {
        let options = CompileOptions {
            pretty: false,
            ..Default::default()
        };
        let mut ctx = Context::new(&options);
        ctx.open("div", Attrs::new());
        ctx.text_element("p", Attrs::new(), "hi");
        ctx.close("div");

        assert_eq!(ctx.get_output(), "<div><p>hi</p></div>");
    }
}
