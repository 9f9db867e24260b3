//! # Pagesmith Model
//!
//! The document model for Pagesmith pages.
//!
//! A page is a [`Document`]: an ordered list of typed [`Section`]s, each
//! carrying bilingual content (`en` + `ar`) and an ordered list of nested
//! [`Element`]s. A [`Theme`] supplies the locale, palette and fonts applied
//! at compile time.
//!
//! ```text
//! Document
//!  └── Section (hero | features | stats | …)   order: 0..n
//!       ├── content: Localized<…>              en + ar, always both
//!       └── Element (text | image | button | …) order: 0..m
//! ```
//!
//! This crate only describes and queries the tree. Structural editing lives
//! in `pagesmith-editor`; rendering lives in the compiler crates.

mod content;
mod defaults;
mod document;
mod element;
mod error;
mod export;
mod id_generator;
mod locale;
mod section;
mod template;
mod theme;

pub use content::{
    ButtonStyle, CtaContent, FeatureItem, FeatureLayout, FeaturesContent, FreeformContent,
    HeroContent, ImageRef, LinkButton, PricingContent, PricingPlan, SectionContent, SectionKind,
    StatItem, StatsContent, Testimonial, TestimonialsContent,
};
pub use document::{Document, GlobalStyles, SeoMetadata, SpacingTokens};
pub use element::{
    BorderStyle, BoxSpacing, ButtonContent, CardButton, CardContent, CustomContent, Element,
    ElementConfig, ElementContent, ElementKind, ElementStyle, HeadingContent, ImageContent,
    SpacerContent, TextAlign, TextContent,
};
pub use error::{ContentError, ModelResult, ValidationError};
pub use export::{export_to_json, import_from_json, ExportMetadata, ExportedPage, EXPORT_VERSION};
pub use id_generator::{IdSource, SequentialIdSource, UuidIdSource};
pub use locale::{Direction, Locale, Localized, ParseLocaleError};
pub use section::{BreakpointOverride, DeviceSize, Padding, ResponsiveConfig, Section, SectionConfig};
pub use template::{Template, TemplateCategory, TemplateSummary};
pub use theme::{ColorPalette, ColorPatch, FontPatch, FontSettings, Theme, ThemePatch};
