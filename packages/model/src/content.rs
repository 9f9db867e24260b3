//! Typed section content
//!
//! Every section kind owns an explicit schema. The kind tag in the JSON
//! form selects the variant; kinds without a dedicated renderer keep their
//! content as a free-form object so nothing is lost on export.

use crate::{ContentError, Locale, Localized};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Section type tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionKind {
    Hero,
    Features,
    Pricing,
    Testimonials,
    Cta,
    Form,
    Gallery,
    Stats,
    About,
    Other(String),
}

impl SectionKind {
    pub fn as_str(&self) -> &str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Features => "features",
            SectionKind::Pricing => "pricing",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Cta => "cta",
            SectionKind::Form => "form",
            SectionKind::Gallery => "gallery",
            SectionKind::Stats => "stats",
            SectionKind::About => "about",
            SectionKind::Other(tag) => tag,
        }
    }

    pub fn parse(tag: &str) -> Self {
        match tag {
            "hero" => SectionKind::Hero,
            "features" => SectionKind::Features,
            "pricing" => SectionKind::Pricing,
            "testimonials" => SectionKind::Testimonials,
            "cta" => SectionKind::Cta,
            "form" => SectionKind::Form,
            "gallery" => SectionKind::Gallery,
            "stats" => SectionKind::Stats,
            "about" => SectionKind::About,
            other => SectionKind::Other(other.to_string()),
        }
    }
}

impl From<String> for SectionKind {
    fn from(tag: String) -> Self {
        SectionKind::parse(&tag)
    }
}

impl From<SectionKind> for String {
    fn from(kind: SectionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkButton {
    pub text: String,
    pub link: String,
    pub style: ButtonStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRef {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheading: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_button: Option<LinkButton>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_button: Option<LinkButton>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureLayout {
    #[serde(rename = "grid-2")]
    Grid2,
    #[default]
    #[serde(rename = "grid-3")]
    Grid3,
    #[serde(rename = "grid-4")]
    Grid4,
    #[serde(rename = "list")]
    List,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesContent {
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheading: Option<String>,
    pub items: Vec<FeatureItem>,
    pub layout: FeatureLayout,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatItem {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(alias = "items")]
    pub stats: Vec<StatItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    #[serde(alias = "name")]
    pub author: String,
    pub role: String,
    pub quote: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsContent {
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheading: Option<String>,
    #[serde(alias = "items")]
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    pub features: Vec<String>,
    pub button_text: String,
    pub button_link: String,
    pub popular: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingContent {
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheading: Option<String>,
    pub items: Vec<PricingPlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaContent {
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub button_text: String,
    pub button_link: String,
}

/// Schema-less content for kinds without a dedicated renderer
pub type FreeformContent = Map<String, Value>;

/// Bilingual content of a section, one variant per section kind
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Hero(Localized<HeroContent>),
    Features(Localized<FeaturesContent>),
    Stats(Localized<StatsContent>),
    Testimonials(Localized<TestimonialsContent>),
    Pricing(Localized<PricingContent>),
    Cta(Localized<CtaContent>),
    Freeform {
        kind: SectionKind,
        content: Localized<FreeformContent>,
    },
}

impl SectionContent {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionContent::Hero(_) => SectionKind::Hero,
            SectionContent::Features(_) => SectionKind::Features,
            SectionContent::Stats(_) => SectionKind::Stats,
            SectionContent::Testimonials(_) => SectionKind::Testimonials,
            SectionContent::Pricing(_) => SectionKind::Pricing,
            SectionContent::Cta(_) => SectionKind::Cta,
            SectionContent::Freeform { kind, .. } => kind.clone(),
        }
    }

    /// Build the typed variant selected by `kind` from per-locale JSON.
    ///
    /// On failure, reports which locale did not fit the schema.
    pub fn from_json(
        kind: SectionKind,
        raw: Localized<Value>,
    ) -> Result<Self, (Locale, serde_json::Error)> {
        Ok(match kind {
            SectionKind::Hero => SectionContent::Hero(typed(raw)?),
            SectionKind::Features => SectionContent::Features(typed(raw)?),
            SectionKind::Stats => SectionContent::Stats(typed(raw)?),
            SectionKind::Testimonials => SectionContent::Testimonials(typed(raw)?),
            SectionKind::Pricing => SectionContent::Pricing(typed(raw)?),
            SectionKind::Cta => SectionContent::Cta(typed(raw)?),
            kind => SectionContent::Freeform {
                kind,
                content: typed(raw)?,
            },
        })
    }

    pub fn to_json(&self) -> Localized<Value> {
        match self {
            SectionContent::Hero(content) => untyped(content),
            SectionContent::Features(content) => untyped(content),
            SectionContent::Stats(content) => untyped(content),
            SectionContent::Testimonials(content) => untyped(content),
            SectionContent::Pricing(content) => untyped(content),
            SectionContent::Cta(content) => untyped(content),
            SectionContent::Freeform { content, .. } => untyped(content),
        }
    }

    /// Shallow-merge `patch` into one locale's record, leaving the other
    /// locale untouched.
    pub fn merge_locale(&mut self, locale: Locale, patch: &Value) -> Result<(), ContentError> {
        let patch = patch.as_object().ok_or(ContentError::NotAnObject)?;
        let kind = self.kind();

        match self {
            SectionContent::Hero(content) => merge(content.get_mut(locale), patch, &kind),
            SectionContent::Features(content) => merge(content.get_mut(locale), patch, &kind),
            SectionContent::Stats(content) => merge(content.get_mut(locale), patch, &kind),
            SectionContent::Testimonials(content) => merge(content.get_mut(locale), patch, &kind),
            SectionContent::Pricing(content) => merge(content.get_mut(locale), patch, &kind),
            SectionContent::Cta(content) => merge(content.get_mut(locale), patch, &kind),
            SectionContent::Freeform { content, .. } => {
                let record = content.get_mut(locale);
                for (key, value) in patch {
                    record.insert(key.clone(), value.clone());
                }
                Ok(())
            }
        }
    }
}

/// Tagged form used when content travels on its own (`{type, content}`)
#[derive(Serialize, Deserialize)]
struct TaggedContent {
    #[serde(rename = "type")]
    kind: SectionKind,
    content: Localized<Value>,
}

impl Serialize for SectionContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TaggedContent {
            kind: self.kind(),
            content: self.to_json(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SectionContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tagged = TaggedContent::deserialize(deserializer)?;
        SectionContent::from_json(tagged.kind, tagged.content)
            .map_err(|(locale, e)| D::Error::custom(format!("invalid '{}' content: {}", locale, e)))
    }
}

fn typed<T: DeserializeOwned>(raw: Localized<Value>) -> Result<Localized<T>, (Locale, serde_json::Error)> {
    let en = serde_json::from_value(raw.en).map_err(|e| (Locale::En, e))?;
    let ar = serde_json::from_value(raw.ar).map_err(|e| (Locale::Ar, e))?;
    Ok(Localized { en, ar })
}

fn untyped<T: Serialize>(content: &Localized<T>) -> Localized<Value> {
    Localized {
        en: serde_json::to_value(&content.en).unwrap_or_default(),
        ar: serde_json::to_value(&content.ar).unwrap_or_default(),
    }
}

fn merge<T>(target: &mut T, patch: &Map<String, Value>, kind: &SectionKind) -> Result<(), ContentError>
where
    T: Serialize + DeserializeOwned,
{
    let schema_error = |e: serde_json::Error| ContentError::Schema {
        kind: kind.to_string(),
        message: e.to_string(),
    };

    let mut current = serde_json::to_value(&*target).map_err(schema_error)?;
    if let Value::Object(record) = &mut current {
        for (key, value) in patch {
            record.insert(key.clone(), value.clone());
        }
    }

    *target = serde_json::from_value(current).map_err(schema_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_tags_round_trip() {
        for tag in ["hero", "features", "stats", "cta", "gallery", "timeline"] {
            assert_eq!(SectionKind::parse(tag).as_str(), tag);
        }
        assert_eq!(SectionKind::parse("timeline"), SectionKind::Other("timeline".into()));
    }

    #[test]
    fn test_stats_accept_items_alias() {
        let raw = Localized::new(
            json!({ "items": [{ "value": "10", "label": "Users" }] }),
            json!({ "stats": [{ "value": "10", "label": "مستخدم" }] }),
        );

        let content = SectionContent::from_json(SectionKind::Stats, raw).unwrap();
        match content {
            SectionContent::Stats(stats) => {
                assert_eq!(stats.en.stats[0].label, "Users");
                assert_eq!(stats.ar.stats[0].label, "مستخدم");
            }
            other => panic!("Expected stats content, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_locale_is_reported() {
        let raw = Localized::new(json!({ "heading": "Hi" }), json!({ "heading": 42 }));
        let err = SectionContent::from_json(SectionKind::Hero, raw).unwrap_err();
        assert_eq!(err.0, Locale::Ar);
    }

    #[test]
    fn test_merge_locale_is_shallow_and_scoped() {
        let raw = Localized::new(
            json!({ "heading": "Hello", "description": "Old" }),
            json!({ "heading": "مرحبا", "description": "قديم" }),
        );
        let mut content = SectionContent::from_json(SectionKind::Hero, raw).unwrap();

        content
            .merge_locale(Locale::En, &json!({ "description": "New" }))
            .unwrap();

        let json = content.to_json();
        assert_eq!(json.en["heading"], "Hello");
        assert_eq!(json.en["description"], "New");
        assert_eq!(json.ar["description"], "قديم");
    }

    #[test]
    fn test_merge_rejects_schema_mismatch() {
        let raw = Localized::new(json!({}), json!({}));
        let mut content = SectionContent::from_json(SectionKind::Cta, raw).unwrap();

        let err = content
            .merge_locale(Locale::En, &json!({ "heading": ["not", "a", "string"] }))
            .unwrap_err();
        assert!(matches!(err, ContentError::Schema { .. }));
        assert!(content.merge_locale(Locale::En, &json!("text")).is_err());
    }

    #[test]
    fn test_freeform_content_keeps_unknown_keys() {
        let raw = Localized::new(json!({ "fields": ["email"] }), json!({ "fields": ["بريد"] }));
        let content = SectionContent::from_json(SectionKind::Form, raw.clone()).unwrap();
        assert_eq!(content.kind(), SectionKind::Form);
        assert_eq!(content.to_json(), raw);
    }
}
