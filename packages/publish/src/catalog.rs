//! Template catalog collaborator and the templates shipped with the crate.

use pagesmith_model::{
    ColorPatch, Document, IdSource, Localized, Section, SectionKind, SequentialIdSource, Template,
    TemplateCategory, TemplateSummary, Theme, ThemePatch,
};
use std::collections::BTreeMap;

pub trait TemplateCatalog {
    fn template(&self, template_id: &str) -> Option<Template>;

    fn templates(&self) -> Vec<TemplateSummary>;
}

/// Catalog over a fixed set of templates, keyed by id
#[derive(Debug, Clone, Default)]
pub struct BuiltinCatalog {
    templates: BTreeMap<String, Template>,
}

impl BuiltinCatalog {
    /// The bundled `starter` and `product-launch` templates
    pub fn new() -> Self {
        let mut catalog = Self::default();
        catalog.insert(starter());
        catalog.insert(product_launch());
        catalog
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, template: Template) {
        self.templates
            .insert(template.template_id.clone(), template);
    }
}

impl TemplateCatalog for BuiltinCatalog {
    fn template(&self, template_id: &str) -> Option<Template> {
        self.templates.get(template_id).cloned()
    }

    fn templates(&self) -> Vec<TemplateSummary> {
        self.templates.values().map(Template::summary).collect()
    }
}

fn structure(template_id: &str, kinds: &[SectionKind]) -> Document {
    let mut ids = SequentialIdSource::new(template_id);
    let mut document = Document::new(
        kinds
            .iter()
            .map(|kind| Section::with_defaults(ids.next_id(), kind.clone()))
            .collect(),
    );
    document.renumber();
    document
}

fn starter() -> Template {
    Template {
        template_id: "starter".to_string(),
        name: Localized::new("Starter".to_string(), "البداية".to_string()),
        category: TemplateCategory::General,
        thumbnail: String::new(),
        structure: structure(
            "starter",
            &[SectionKind::Hero, SectionKind::Features, SectionKind::Cta],
        ),
        default_theme: Theme::default(),
        tags: vec!["basic".to_string()],
        is_premium: false,
    }
}

fn product_launch() -> Template {
    let mut theme = Theme::default();
    theme.apply(ThemePatch {
        colors: Some(ColorPatch {
            primary: Some("#0f766e".to_string()),
            accent: Some("#f97316".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    });

    Template {
        template_id: "product-launch".to_string(),
        name: Localized::new("Product Launch".to_string(), "إطلاق منتج".to_string()),
        category: TemplateCategory::Product,
        thumbnail: String::new(),
        structure: structure(
            "product-launch",
            &[
                SectionKind::Hero,
                SectionKind::Features,
                SectionKind::Stats,
                SectionKind::Testimonials,
                SectionKind::Pricing,
                SectionKind::Cta,
            ],
        ),
        default_theme: theme,
        tags: vec!["product".to_string(), "saas".to_string()],
        is_premium: false,
    }
}
