use crate::{Document, IdSource, Localized, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateCategory {
    Product,
    RealEstate,
    Clinic,
    Restaurant,
    Service,
    #[default]
    General,
}

impl TemplateCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateCategory::Product => "product",
            TemplateCategory::RealEstate => "real-estate",
            TemplateCategory::Clinic => "clinic",
            TemplateCategory::Restaurant => "restaurant",
            TemplateCategory::Service => "service",
            TemplateCategory::General => "general",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prototype document plus theme that new pages are seeded from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub template_id: String,
    pub name: Localized<String>,
    #[serde(default)]
    pub category: TemplateCategory,
    #[serde(default)]
    pub thumbnail: String,
    pub structure: Document,
    pub default_theme: Theme,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_premium: bool,
}

/// Listing view of a template, without its structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub template_id: String,
    pub name: Localized<String>,
    pub category: TemplateCategory,
    pub thumbnail: String,
    pub tags: Vec<String>,
    pub is_premium: bool,
}

impl Template {
    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            template_id: self.template_id.clone(),
            name: self.name.clone(),
            category: self.category,
            thumbnail: self.thumbnail.clone(),
            tags: self.tags.clone(),
            is_premium: self.is_premium,
        }
    }

    /// Deep copy of the structure with fresh ids and dense orders, plus a
    /// copy of the default theme.
    pub fn instantiate(&self, ids: &mut dyn IdSource) -> (Document, Theme) {
        let mut document = self.structure.clone();
        document.regenerate_ids(ids);
        document.normalize();
        (document, self.default_theme.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Section, SectionKind, SequentialIdSource};

    fn template() -> Template {
        let mut cta = Section::with_defaults("t-cta", SectionKind::Cta);
        cta.order = 1;
        let hero = Section::with_defaults("t-hero", SectionKind::Hero);

        Template {
            template_id: "starter".to_string(),
            name: Localized::new("Starter".to_string(), "بداية".to_string()),
            category: TemplateCategory::General,
            thumbnail: String::new(),
            structure: Document::new(vec![cta, hero]),
            default_theme: Theme::default(),
            tags: vec!["basic".to_string()],
            is_premium: false,
        }
    }

    #[test]
    fn test_instantiate_mints_fresh_ids() {
        let template = template();
        let mut ids = SequentialIdSource::new("page");

        let (first, _) = template.instantiate(&mut ids);
        let (second, theme) = template.instantiate(&mut ids);

        assert!(first.ids().is_disjoint(&template.structure.ids()));
        assert!(first.ids().is_disjoint(&second.ids()));
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_instantiate_normalizes_order() {
        let (document, _) = template().instantiate(&mut SequentialIdSource::new("p"));

        assert!(document.orders_are_dense());
        assert_eq!(document.sections[0].kind(), SectionKind::Hero);
    }

    #[test]
    fn test_category_serializes_kebab_case() {
        let json = serde_json::to_string(&TemplateCategory::RealEstate).unwrap();
        assert_eq!(json, "\"real-estate\"");
    }
}
