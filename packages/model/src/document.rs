use crate::{Element, IdSource, Section};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingTokens {
    pub section_padding: String,
    pub container_max_width: String,
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            section_padding: "4rem".to_string(),
            container_max_width: "1200px".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalStyles {
    #[serde(default)]
    pub spacing: SpacingTokens,
}

/// Search and social metadata emitted into the compiled page head
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    pub keywords: Vec<String>,
}

/// The page under construction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_styles: Option<GlobalStyles>,
}

impl Document {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            global_styles: None,
        }
    }

    pub fn find_section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn find_section_mut(&mut self, section_id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == section_id)
    }

    pub fn position_of(&self, section_id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == section_id)
    }

    pub fn find_element(&self, section_id: &str, element_id: &str) -> Option<&Element> {
        self.find_section(section_id)?.find_element(element_id)
    }

    /// Sections in display order
    pub fn sorted_sections(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.iter().collect();
        sections.sort_by_key(|s| s.order);
        sections
    }

    /// Stable-sort sections and their elements by stored order, then
    /// renumber both levels densely from zero.
    pub fn normalize(&mut self) {
        self.sections.sort_by_key(|s| s.order);
        for section in &mut self.sections {
            section.normalize_elements();
        }
        self.renumber();
    }

    /// Reassign section orders from their position
    pub fn renumber(&mut self) {
        for (index, section) in self.sections.iter_mut().enumerate() {
            section.order = index as u32;
        }
    }

    /// Every section and element id in the document
    pub fn ids(&self) -> BTreeSet<String> {
        let mut ids = BTreeSet::new();
        for section in &self.sections {
            ids.insert(section.id.clone());
            ids.extend(section.elements.iter().map(|e| e.id.clone()));
        }
        ids
    }

    pub fn regenerate_ids(&mut self, ids: &mut dyn IdSource) {
        for section in &mut self.sections {
            section.regenerate_ids(ids);
        }
    }

    /// True when section orders, and element orders within each section,
    /// run `0..n` in storage order.
    pub fn orders_are_dense(&self) -> bool {
        let dense = |orders: &mut dyn Iterator<Item = u32>| {
            orders.enumerate().all(|(index, order)| order == index as u32)
        };

        dense(&mut self.sections.iter().map(|s| s.order))
            && self
                .sections
                .iter()
                .all(|s| dense(&mut s.elements.iter().map(|e| e.order)))
    }

    pub fn container_max_width(&self) -> &str {
        self.global_styles
            .as_ref()
            .map(|g| g.spacing.container_max_width.as_str())
            .unwrap_or("1200px")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ElementKind, SectionKind, SequentialIdSource};

    fn document() -> Document {
        let mut hero = Section::with_defaults("hero", SectionKind::Hero);
        hero.order = 2;
        let mut cta = Section::with_defaults("cta", SectionKind::Cta);
        cta.order = 0;
        let mut stats = Section::with_defaults("stats", SectionKind::Stats);
        stats.order = 5;

        let mut image = Element::with_defaults("img", ElementKind::Image);
        image.order = 4;
        let mut text = Element::with_defaults("txt", ElementKind::Text);
        text.order = 1;
        stats.elements = vec![image, text];

        Document::new(vec![hero, cta, stats])
    }

    #[test]
    fn test_sorted_sections() {
        let doc = document();
        let ids: Vec<&str> = doc.sorted_sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["cta", "hero", "stats"]);
    }

    #[test]
    fn test_normalize_makes_orders_dense() {
        let mut doc = document();
        assert!(!doc.orders_are_dense());

        doc.normalize();

        assert!(doc.orders_are_dense());
        assert_eq!(doc.sections[0].id, "cta");
        assert_eq!(doc.sections[2].elements[0].id, "txt");
    }

    #[test]
    fn test_find_element() {
        let doc = document();
        assert!(doc.find_element("stats", "img").is_some());
        assert!(doc.find_element("hero", "img").is_none());
        assert!(doc.find_element("missing", "img").is_none());
    }

    #[test]
    fn test_regenerate_ids_replaces_everything() {
        let mut doc = document();
        let before = doc.ids();

        doc.regenerate_ids(&mut SequentialIdSource::new("fresh"));

        let after = doc.ids();
        assert_eq!(after.len(), 5);
        assert!(before.is_disjoint(&after));
    }

    #[test]
    fn test_global_styles_are_optional() {
        let doc: Document = serde_json::from_str(r#"{ "sections": [] }"#).unwrap();
        assert!(doc.global_styles.is_none());
        assert_eq!(doc.container_max_width(), "1200px");
    }
}
