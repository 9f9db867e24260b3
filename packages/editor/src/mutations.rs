//! # Document Mutations
//!
//! Structural operations on a page document.
//!
//! ## Mutation Semantics
//!
//! ### Ordering
//! - Section orders, and element orders within a section, are renumbered
//!   to `0..n` after every applied mutation
//! - Positions past the end are clamped to an append
//!
//! ### Missing ids
//! - A mutation naming a section or element that does not exist applies
//!   as a no-op and reports `applied == false`
//!
//! ### Reorder
//! - Listed ids come first, in the listed order
//! - Unknown and repeated ids are ignored
//! - Nodes left out of the list keep their relative order after the
//!   listed ones

use crate::MutationError;
use pagesmith_model::{
    Document, Element, ElementConfig, ElementContent, ElementStyle, Locale, Padding,
    ResponsiveConfig, Section, SectionContent,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Semantic mutations on a document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Insert a section at `position`, or after the last one
    InsertSection {
        section: Section,
        position: Option<usize>,
    },

    /// Overwrite section config fields and optionally its content
    UpdateSection {
        section_id: String,
        patch: SectionPatch,
    },

    /// Shallow-merge a record into one locale's content
    UpdateSectionContent {
        section_id: String,
        locale: Locale,
        content: Value,
    },

    DeleteSection {
        section_id: String,
    },

    ReorderSections {
        section_ids: Vec<String>,
    },

    InsertElement {
        section_id: String,
        element: Element,
        position: Option<usize>,
    },

    /// Replace content/config and merge style of one element
    UpdateElement {
        section_id: String,
        element_id: String,
        patch: ElementPatch,
    },

    DeleteElement {
        section_id: String,
        element_id: String,
    },

    ReorderElements {
        section_id: String,
        element_ids: Vec<String>,
    },
}

/// Partial update of a section; unset fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<ResponsiveConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<SectionContent>,
}

/// Partial update of an element; `style` merges field by field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ElementContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ElementStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ElementConfig>,
}

impl Mutation {
    /// Apply the mutation to the document.
    ///
    /// Returns `Ok(false)` when a referenced id does not exist and nothing
    /// changed. On `Err` the document is left untouched.
    pub fn apply(&self, doc: &mut Document) -> Result<bool, MutationError> {
        match self {
            Mutation::InsertSection { section, position } => {
                Self::apply_insert_section(doc, section, *position)
            }

            Mutation::UpdateSection { section_id, patch } => {
                Ok(Self::apply_update_section(doc, section_id, patch))
            }

            Mutation::UpdateSectionContent {
                section_id,
                locale,
                content,
            } => Self::apply_update_content(doc, section_id, *locale, content),

            Mutation::DeleteSection { section_id } => {
                let Some(index) = doc.position_of(section_id) else {
                    return Ok(false);
                };
                doc.sections.remove(index);
                Self::order_sections(doc);
                Ok(true)
            }

            Mutation::ReorderSections { section_ids } => {
                Self::order_sections(doc);
                let applied = reorder(&mut doc.sections, section_ids, |s| &s.id);
                doc.renumber();
                Ok(applied)
            }

            Mutation::InsertElement {
                section_id,
                element,
                position,
            } => Self::apply_insert_element(doc, section_id, element, *position),

            Mutation::UpdateElement {
                section_id,
                element_id,
                patch,
            } => Ok(Self::apply_update_element(doc, section_id, element_id, patch)),

            Mutation::DeleteElement {
                section_id,
                element_id,
            } => {
                let Some(section) = doc.find_section_mut(section_id) else {
                    return Ok(false);
                };
                let Some(index) = section.elements.iter().position(|e| &e.id == element_id) else {
                    return Ok(false);
                };
                section.elements.remove(index);
                section.normalize_elements();
                Ok(true)
            }

            Mutation::ReorderElements {
                section_id,
                element_ids,
            } => {
                let Some(section) = doc.find_section_mut(section_id) else {
                    return Ok(false);
                };
                section.normalize_elements();
                let applied = reorder(&mut section.elements, element_ids, |e| &e.id);
                section.renumber_elements();
                Ok(applied)
            }
        }
    }

    /// The section id this mutation targets, if any
    pub fn section_id(&self) -> &str {
        match self {
            Mutation::InsertSection { section, .. } => &section.id,
            Mutation::UpdateSection { section_id, .. }
            | Mutation::UpdateSectionContent { section_id, .. }
            | Mutation::DeleteSection { section_id }
            | Mutation::InsertElement { section_id, .. }
            | Mutation::UpdateElement { section_id, .. }
            | Mutation::DeleteElement { section_id, .. }
            | Mutation::ReorderElements { section_id, .. } => section_id,
            Mutation::ReorderSections { .. } => "",
        }
    }

    fn apply_insert_section(
        doc: &mut Document,
        section: &Section,
        position: Option<usize>,
    ) -> Result<bool, MutationError> {
        let existing = doc.ids();
        let mut incoming = vec![&section.id];
        incoming.extend(section.elements.iter().map(|e| &e.id));
        if let Some(id) = incoming.into_iter().find(|id| existing.contains(*id)) {
            return Err(MutationError::DuplicateId(id.clone()));
        }

        Self::order_sections(doc);
        let index = position.unwrap_or(doc.sections.len()).min(doc.sections.len());

        let mut section = section.clone();
        section.normalize_elements();
        doc.sections.insert(index, section);
        doc.renumber();
        Ok(true)
    }

    fn apply_update_section(doc: &mut Document, section_id: &str, patch: &SectionPatch) -> bool {
        let Some(section) = doc.find_section_mut(section_id) else {
            return false;
        };

        if let Some(color) = &patch.background_color {
            section.config.background_color = Some(color.clone());
        }
        if let Some(padding) = &patch.padding {
            section.config.padding = Some(padding.clone());
        }
        if let Some(responsive) = &patch.responsive {
            section.config.responsive = Some(responsive.clone());
        }
        if let Some(content) = &patch.content {
            section.content = content.clone();
        }
        true
    }

    fn apply_update_content(
        doc: &mut Document,
        section_id: &str,
        locale: Locale,
        content: &Value,
    ) -> Result<bool, MutationError> {
        let Some(section) = doc.find_section_mut(section_id) else {
            return Ok(false);
        };

        section
            .content
            .merge_locale(locale, content)
            .map_err(|source| MutationError::InvalidContent {
                section_id: section_id.to_string(),
                source,
            })?;
        Ok(true)
    }

    fn apply_insert_element(
        doc: &mut Document,
        section_id: &str,
        element: &Element,
        position: Option<usize>,
    ) -> Result<bool, MutationError> {
        let Some(section) = doc.find_section_mut(section_id) else {
            return Ok(false);
        };
        if section.find_element(&element.id).is_some() {
            return Err(MutationError::DuplicateId(element.id.clone()));
        }

        section.normalize_elements();
        let len = section.elements.len();
        let index = position.unwrap_or(len).min(len);
        section.elements.insert(index, element.clone());
        section.renumber_elements();
        Ok(true)
    }

    fn apply_update_element(
        doc: &mut Document,
        section_id: &str,
        element_id: &str,
        patch: &ElementPatch,
    ) -> bool {
        let Some(element) = doc
            .find_section_mut(section_id)
            .and_then(|s| s.find_element_mut(element_id))
        else {
            return false;
        };

        if let Some(content) = &patch.content {
            element.content = content.clone();
        }
        if let Some(style) = &patch.style {
            element
                .style
                .get_or_insert_with(ElementStyle::default)
                .merge(style.clone());
        }
        if let Some(config) = &patch.config {
            element.config = Some(config.clone());
        }
        true
    }

    /// Stable-sort sections by stored order and renumber
    fn order_sections(doc: &mut Document) {
        doc.sections.sort_by_key(|s| s.order);
        doc.renumber();
    }
}

/// Move the listed items to the front in the listed order.
///
/// Returns whether any listed id matched.
fn reorder<T>(items: &mut Vec<T>, ids: &[String], id_of: impl Fn(&T) -> &String) -> bool {
    let mut seen = HashSet::new();
    let mut remaining: Vec<Option<T>> = items.drain(..).map(Some).collect();
    let mut ordered = Vec::with_capacity(remaining.len());

    for id in ids {
        if !seen.insert(id.as_str()) {
            continue;
        }
        let slot = remaining
            .iter_mut()
            .find(|slot| slot.as_ref().map_or(false, |item| id_of(item) == id));
        if let Some(item) = slot.and_then(Option::take) {
            ordered.push(item);
        }
    }

    let applied = !ordered.is_empty();
    ordered.extend(remaining.into_iter().flatten());
    *items = ordered;
    applied
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResult {
    /// Session version after the call
    pub version: u64,

    /// False when the call was a no-op on a missing id
    pub applied: bool,

    /// Id of the node created by an add or paste
    pub created_id: Option<String>,
}
