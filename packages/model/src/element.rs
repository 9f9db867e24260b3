//! Elements: the small building blocks nested inside a section

use crate::{ButtonStyle, Direction, IdSource, ImageRef, Locale, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Heading,
    Image,
    Button,
    Card,
    Spacer,
    Custom,
}

impl ElementKind {
    pub const ALL: [ElementKind; 7] = [
        ElementKind::Text,
        ElementKind::Heading,
        ElementKind::Image,
        ElementKind::Button,
        ElementKind::Card,
        ElementKind::Spacer,
        ElementKind::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Heading => "heading",
            ElementKind::Image => "image",
            ElementKind::Button => "button",
            ElementKind::Card => "card",
            ElementKind::Spacer => "spacer",
            ElementKind::Custom => "custom",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextContent {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Locale>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingContent {
    pub text: String,
    pub level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Locale>,
}

impl Default for HeadingContent {
    fn default() -> Self {
        Self {
            text: String::new(),
            level: 2,
            language: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageContent {
    pub url: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonContent {
    pub text: String,
    pub link: String,
    pub variant: ButtonStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Locale>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardButton {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardContent {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<CardButton>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Locale>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacerContent {
    pub height: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomContent {
    pub html: String,
}

/// Content of an element, one variant per element kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum ElementContent {
    Text(TextContent),
    Heading(HeadingContent),
    Image(ImageContent),
    Button(ButtonContent),
    Card(CardContent),
    Spacer(SpacerContent),
    Custom(CustomContent),
}

impl ElementContent {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementContent::Text(_) => ElementKind::Text,
            ElementContent::Heading(_) => ElementKind::Heading,
            ElementContent::Image(_) => ElementKind::Image,
            ElementContent::Button(_) => ElementKind::Button,
            ElementContent::Card(_) => ElementKind::Card,
            ElementContent::Spacer(_) => ElementKind::Spacer,
            ElementContent::Custom(_) => ElementKind::Custom,
        }
    }

    /// Starter content for a freshly added element
    pub fn defaults(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Text => ElementContent::Text(TextContent {
                text: "Enter your text here...".to_string(),
                language: Some(Locale::En),
            }),
            ElementKind::Heading => ElementContent::Heading(HeadingContent {
                text: "Heading Text".to_string(),
                level: 2,
                language: Some(Locale::En),
            }),
            ElementKind::Image => ElementContent::Image(ImageContent {
                url: String::new(),
                alt: "Image description".to_string(),
                width: Some("100%".to_string()),
                height: None,
            }),
            ElementKind::Button => ElementContent::Button(ButtonContent {
                text: "Click Me".to_string(),
                link: "#".to_string(),
                variant: ButtonStyle::Primary,
                language: Some(Locale::En),
            }),
            ElementKind::Card => ElementContent::Card(CardContent {
                title: "Card Title".to_string(),
                description: "Card description goes here...".to_string(),
                image: None,
                button: None,
                language: Some(Locale::En),
            }),
            ElementKind::Spacer => ElementContent::Spacer(SpacerContent {
                height: "40px".to_string(),
            }),
            ElementKind::Custom => ElementContent::Custom(CustomContent {
                html: "<div>Custom HTML</div>".to_string(),
            }),
        }
    }

    fn from_json(kind: ElementKind, value: Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            ElementKind::Text => ElementContent::Text(serde_json::from_value(value)?),
            ElementKind::Heading => ElementContent::Heading(serde_json::from_value(value)?),
            ElementKind::Image => ElementContent::Image(serde_json::from_value(value)?),
            ElementKind::Button => ElementContent::Button(serde_json::from_value(value)?),
            ElementKind::Card => ElementContent::Card(serde_json::from_value(value)?),
            ElementKind::Spacer => ElementContent::Spacer(serde_json::from_value(value)?),
            ElementKind::Custom => ElementContent::Custom(serde_json::from_value(value)?),
        })
    }

    fn to_json(&self) -> Value {
        let value = match self {
            ElementContent::Text(c) => serde_json::to_value(c),
            ElementContent::Heading(c) => serde_json::to_value(c),
            ElementContent::Image(c) => serde_json::to_value(c),
            ElementContent::Button(c) => serde_json::to_value(c),
            ElementContent::Card(c) => serde_json::to_value(c),
            ElementContent::Spacer(c) => serde_json::to_value(c),
            ElementContent::Custom(c) => serde_json::to_value(c),
        };
        value.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }

    /// Swap left and right when laying out right-to-left
    pub fn for_direction(self, direction: Direction) -> TextAlign {
        match (self, direction) {
            (TextAlign::Left, Direction::Rtl) => TextAlign::Right,
            (TextAlign::Right, Direction::Rtl) => TextAlign::Left,
            (align, _) => align,
        }
    }
}

/// Per-side spacing; unset sides fall back to the caller's default
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxSpacing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

impl BoxSpacing {
    pub fn uniform(value: &str) -> Self {
        Self {
            top: Some(value.to_string()),
            bottom: Some(value.to_string()),
            left: Some(value.to_string()),
            right: Some(value.to_string()),
        }
    }

    /// CSS shorthand (`top right bottom left`)
    pub fn to_css(&self, fallback: &str) -> String {
        let side = |value: &Option<String>| value.clone().unwrap_or_else(|| fallback.to_string());
        format!(
            "{} {} {} {}",
            side(&self.top),
            side(&self.right),
            side(&self.bottom),
            side(&self.left)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
}

/// Presentational overrides; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<BoxSpacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<BoxSpacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
}

impl ElementStyle {
    /// Default style for a kind, if it has one
    pub fn defaults(kind: ElementKind) -> Option<Self> {
        match kind {
            ElementKind::Text => Some(Self {
                font_size: Some("16px".to_string()),
                color: Some("#1f2937".to_string()),
                text_align: Some(TextAlign::Left),
                ..Default::default()
            }),
            ElementKind::Heading => Some(Self {
                font_size: Some("32px".to_string()),
                font_weight: Some("bold".to_string()),
                color: Some("#1f2937".to_string()),
                text_align: Some(TextAlign::Left),
                ..Default::default()
            }),
            ElementKind::Image => Some(Self {
                width: Some("100%".to_string()),
                max_width: Some("100%".to_string()),
                ..Default::default()
            }),
            ElementKind::Card => Some(Self {
                padding: Some(BoxSpacing::uniform("1rem")),
                background_color: Some("#ffffff".to_string()),
                border: Some(BorderStyle {
                    width: Some("1px".to_string()),
                    style: Some("solid".to_string()),
                    color: Some("#e5e7eb".to_string()),
                    radius: Some("8px".to_string()),
                }),
                ..Default::default()
            }),
            ElementKind::Button | ElementKind::Spacer | ElementKind::Custom => None,
        }
    }

    /// Overlay every field that `other` sets
    pub fn merge(&mut self, other: ElementStyle) {
        macro_rules! overlay {
            ($($field:ident),*) => {
                $(if other.$field.is_some() { self.$field = other.$field; })*
            };
        }
        overlay!(
            font_size,
            font_weight,
            color,
            background_color,
            text_align,
            padding,
            margin,
            border,
            width,
            height,
            max_width
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawElement", into = "RawElement")]
pub struct Element {
    pub id: String,
    pub order: u32,
    pub content: ElementContent,
    pub style: Option<ElementStyle>,
    pub config: Option<ElementConfig>,
}

impl Element {
    pub fn new(id: impl Into<String>, content: ElementContent) -> Self {
        Self {
            id: id.into(),
            order: 0,
            content,
            style: None,
            config: None,
        }
    }

    /// A new element of `kind` with the kind's default content and style
    pub fn with_defaults(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            style: ElementStyle::defaults(kind),
            ..Self::new(id, ElementContent::defaults(kind))
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }

    pub fn regenerate_id(&mut self, ids: &mut dyn IdSource) {
        self.id = ids.next_id();
    }
}

#[derive(Serialize, Deserialize)]
struct RawElement {
    id: String,
    #[serde(rename = "type")]
    kind: ElementKind,
    order: u32,
    #[serde(default)]
    content: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    style: Option<ElementStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    config: Option<ElementConfig>,
}

impl TryFrom<RawElement> for Element {
    type Error = ValidationError;

    fn try_from(raw: RawElement) -> Result<Self, Self::Error> {
        let content = if raw.content.is_null() {
            ElementContent::defaults(raw.kind)
        } else {
            ElementContent::from_json(raw.kind, raw.content).map_err(|e| {
                ValidationError::InvalidElement {
                    element_id: raw.id.clone(),
                    message: e.to_string(),
                }
            })?
        };

        Ok(Element {
            id: raw.id,
            order: raw.order,
            content,
            style: raw.style,
            config: raw.config,
        })
    }
}

impl From<Element> for RawElement {
    fn from(element: Element) -> Self {
        RawElement {
            kind: element.kind(),
            content: element.content.to_json(),
            id: element.id,
            order: element.order,
            style: element.style,
            config: element.config,
        }
    }
}
