use crate::{Element, IdSource, Locale, Localized, SectionContent, SectionKind, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Editor preview device classes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceSize {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl DeviceSize {
    pub fn viewport_width(self) -> &'static str {
        match self {
            DeviceSize::Desktop => "100%",
            DeviceSize::Tablet => "768px",
            DeviceSize::Mobile => "375px",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: "4rem".to_string(),
            bottom: "4rem".to_string(),
            left: "1rem".to_string(),
            right: "1rem".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<BreakpointOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet: Option<BreakpointOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<BreakpointOverride>,
}

impl ResponsiveConfig {
    pub fn for_device(&self, device: DeviceSize) -> Option<&BreakpointOverride> {
        match device {
            DeviceSize::Desktop => self.desktop.as_ref(),
            DeviceSize::Tablet => self.tablet.as_ref(),
            DeviceSize::Mobile => self.mobile.as_ref(),
        }
    }
}

/// Section presentation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<ResponsiveConfig>,
}

/// A top-level typed content block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSection", into = "RawSection")]
pub struct Section {
    pub id: String,
    pub order: u32,
    pub config: SectionConfig,
    pub content: SectionContent,
    pub elements: Vec<Element>,
}

impl Section {
    pub fn new(id: impl Into<String>, content: SectionContent) -> Self {
        Self {
            id: id.into(),
            order: 0,
            config: SectionConfig::default(),
            content,
            elements: Vec::new(),
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.content.kind()
    }

    pub fn find_element(&self, element_id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == element_id)
    }

    pub fn find_element_mut(&mut self, element_id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == element_id)
    }

    /// Elements in display order
    pub fn sorted_elements(&self) -> Vec<&Element> {
        let mut elements: Vec<&Element> = self.elements.iter().collect();
        elements.sort_by_key(|e| e.order);
        elements
    }

    /// Sort elements by their stored order, then reassign `0..n`
    pub fn normalize_elements(&mut self) {
        self.elements.sort_by_key(|e| e.order);
        self.renumber_elements();
    }

    /// Reassign element orders from their position
    pub fn renumber_elements(&mut self) {
        for (index, element) in self.elements.iter_mut().enumerate() {
            element.order = index as u32;
        }
    }

    /// Replace this section's id and every element id with fresh ones
    pub fn regenerate_ids(&mut self, ids: &mut dyn IdSource) {
        self.id = ids.next_id();
        for element in &mut self.elements {
            element.regenerate_id(ids);
        }
    }

    /// Config with the device's breakpoint override applied
    pub fn effective_config(&self, device: DeviceSize) -> SectionConfig {
        let mut config = self.config.clone();
        let breakpoint = self
            .config
            .responsive
            .as_ref()
            .and_then(|r| r.for_device(device));

        if let Some(breakpoint) = breakpoint {
            if let Some(color) = &breakpoint.background_color {
                config.background_color = Some(color.clone());
            }
            if let Some(padding) = &breakpoint.padding {
                config.padding = Some(padding.clone());
            }
        }

        config
    }

    pub fn is_hidden_on(&self, device: DeviceSize) -> bool {
        self.config
            .responsive
            .as_ref()
            .and_then(|r| r.for_device(device))
            .map(|b| b.hidden)
            .unwrap_or(false)
    }
}

impl Section {
    /// Parse one section, keeping the typed validation failure instead of
    /// flattening it into a serde message.
    pub(crate) fn from_value(value: Value) -> Result<Self, ValidationError> {
        let raw: RawSection =
            serde_json::from_value(value).map_err(|e| ValidationError::Malformed(e.to_string()))?;
        Section::try_from(raw)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSection {
    id: String,
    #[serde(rename = "type")]
    kind: SectionKind,
    order: u32,
    #[serde(default)]
    config: SectionConfig,
    content: RawLocalized,
    #[serde(default)]
    elements: Vec<Element>,
}

#[derive(Serialize, Deserialize)]
struct RawLocalized {
    #[serde(default)]
    en: Option<Value>,
    #[serde(default)]
    ar: Option<Value>,
}

impl TryFrom<RawSection> for Section {
    type Error = ValidationError;

    fn try_from(raw: RawSection) -> Result<Self, Self::Error> {
        let missing = |locale| ValidationError::MissingLocale {
            section_id: raw.id.clone(),
            locale,
        };
        let en = raw.content.en.filter(|v| !v.is_null()).ok_or_else(|| missing(Locale::En))?;
        let ar = raw.content.ar.filter(|v| !v.is_null()).ok_or_else(|| missing(Locale::Ar))?;

        let content = SectionContent::from_json(raw.kind, Localized::new(en, ar)).map_err(
            |(locale, e)| ValidationError::InvalidContent {
                section_id: raw.id.clone(),
                locale,
                message: e.to_string(),
            },
        )?;

        Ok(Section {
            id: raw.id,
            order: raw.order,
            config: raw.config,
            content,
            elements: raw.elements,
        })
    }
}

impl From<Section> for RawSection {
    fn from(section: Section) -> Self {
        let content = section.content.to_json();
        RawSection {
            kind: section.kind(),
            id: section.id,
            order: section.order,
            config: section.config,
            content: RawLocalized {
                en: Some(content.en),
                ar: Some(content.ar),
            },
            elements: section.elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementKind;
    use serde_json::json;

    #[test]
    fn test_section_json_shape() {
        let section = Section::with_defaults("hero-1", SectionKind::Hero);
        let json = serde_json::to_value(&section).unwrap();

        assert_eq!(json["id"], "hero-1");
        assert_eq!(json["type"], "hero");
        assert_eq!(json["order"], 0);
        assert!(json["content"]["en"]["heading"].is_string());
        assert!(json["content"]["ar"]["heading"].is_string());
        assert!(json["elements"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_missing_locale_is_rejected() {
        let json = json!({
            "id": "s1",
            "type": "cta",
            "order": 0,
            "content": { "en": { "heading": "Go" } }
        });

        let err = serde_json::from_value::<Section>(json).unwrap_err();
        assert!(err.to_string().contains("'ar'"));
    }

    #[test]
    fn test_null_locale_is_rejected() {
        let json = json!({
            "id": "s1",
            "type": "cta",
            "order": 0,
            "content": { "en": null, "ar": {} }
        });

        assert!(serde_json::from_value::<Section>(json).is_err());
    }

    #[test]
    fn test_effective_config_applies_breakpoint() {
        let mut section = Section::with_defaults("s1", SectionKind::Cta);
        section.config.background_color = Some("#ffffff".to_string());
        section.config.responsive = Some(ResponsiveConfig {
            mobile: Some(BreakpointOverride {
                background_color: Some("#000000".to_string()),
                hidden: true,
                ..Default::default()
            }),
            ..Default::default()
        });

        let mobile = section.effective_config(DeviceSize::Mobile);
        let desktop = section.effective_config(DeviceSize::Desktop);

        assert_eq!(mobile.background_color.as_deref(), Some("#000000"));
        assert_eq!(desktop.background_color.as_deref(), Some("#ffffff"));
        assert!(section.is_hidden_on(DeviceSize::Mobile));
        assert!(!section.is_hidden_on(DeviceSize::Tablet));
    }

    #[test]
    fn test_regenerate_ids_covers_elements() {
        let mut section = Section::with_defaults("s1", SectionKind::Features);
        section.elements.push(Element::with_defaults("e1", ElementKind::Text));
        section.elements.push(Element::with_defaults("e2", ElementKind::Image));

        let mut ids = crate::SequentialIdSource::new("copy");
        section.regenerate_ids(&mut ids);

        assert_eq!(section.id, "copy-1");
        assert_eq!(section.elements[0].id, "copy-2");
        assert_eq!(section.elements[1].id, "copy-3");
    }
}
