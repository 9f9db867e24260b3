//! Single-slot clipboard for duplicating sections and elements.
//!
//! The stored value always carries ids that exist nowhere in the document:
//! they are minted on copy and minted again after every paste, so pasting
//! the same entry repeatedly never reuses an id.

use pagesmith_model::{Document, Element, IdSource, Section};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ClipboardEntry {
    Section(Section),
    Element(Element),
}

#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    entry: Option<ClipboardEntry>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self) -> Option<&ClipboardEntry> {
        self.entry.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// Deep-copy a section and its elements under fresh ids.
    ///
    /// Returns false, leaving the clipboard as it was, if the section does
    /// not exist.
    pub fn copy_section(&mut self, doc: &Document, section_id: &str, ids: &mut dyn IdSource) -> bool {
        let Some(section) = doc.find_section(section_id) else {
            return false;
        };

        let mut copy = section.clone();
        copy.regenerate_ids(ids);
        self.entry = Some(ClipboardEntry::Section(copy));
        true
    }

    pub fn copy_element(
        &mut self,
        doc: &Document,
        section_id: &str,
        element_id: &str,
        ids: &mut dyn IdSource,
    ) -> bool {
        let Some(element) = doc.find_element(section_id, element_id) else {
            return false;
        };

        let mut copy = element.clone();
        copy.regenerate_id(ids);
        self.entry = Some(ClipboardEntry::Element(copy));
        true
    }

    /// The section to paste, if the clipboard holds one. The stored copy is
    /// re-minted for the next paste.
    pub fn paste_section(&mut self, ids: &mut dyn IdSource) -> Option<Section> {
        let Some(ClipboardEntry::Section(stored)) = &mut self.entry else {
            return None;
        };

        let pasted = stored.clone();
        stored.regenerate_ids(ids);
        Some(pasted)
    }

    pub fn paste_element(&mut self, ids: &mut dyn IdSource) -> Option<Element> {
        let Some(ClipboardEntry::Element(stored)) = &mut self.entry else {
            return None;
        };

        let pasted = stored.clone();
        stored.regenerate_id(ids);
        Some(pasted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_model::{ElementKind, SectionKind, SequentialIdSource};

    fn document() -> Document {
        let mut section = Section::with_defaults("s1", SectionKind::Hero);
        section.elements.push(Element::with_defaults("e1", ElementKind::Text));
        Document::new(vec![section])
    }

    #[test]
    fn test_copy_missing_section_keeps_previous_entry() {
        let doc = document();
        let mut ids = SequentialIdSource::new("c");
        let mut clipboard = Clipboard::new();

        assert!(clipboard.copy_element(&doc, "s1", "e1", &mut ids));
        assert!(!clipboard.copy_section(&doc, "missing", &mut ids));
        assert!(matches!(clipboard.entry(), Some(ClipboardEntry::Element(_))));
    }

    #[test]
    fn test_paste_wrong_type_is_none() {
        let doc = document();
        let mut ids = SequentialIdSource::new("c");
        let mut clipboard = Clipboard::new();

        assert!(clipboard.paste_section(&mut ids).is_none());

        clipboard.copy_element(&doc, "s1", "e1", &mut ids);
        assert!(clipboard.paste_section(&mut ids).is_none());
        assert!(clipboard.paste_element(&mut ids).is_some());
    }

    #[test]
    fn test_each_paste_gets_new_ids() {
        let doc = document();
        let mut ids = SequentialIdSource::new("c");
        let mut clipboard = Clipboard::new();
        clipboard.copy_section(&doc, "s1", &mut ids);

        let first = clipboard.paste_section(&mut ids).unwrap();
        let second = clipboard.paste_section(&mut ids).unwrap();

        assert_ne!(first.id, "s1");
        assert_ne!(first.id, second.id);
        assert_ne!(first.elements[0].id, second.elements[0].id);
    }

    #[test]
    fn test_entry_is_type_tagged() {
        let doc = document();
        let mut clipboard = Clipboard::new();
        clipboard.copy_section(&doc, "s1", &mut SequentialIdSource::new("c"));

        let json = serde_json::to_value(clipboard.entry().unwrap()).unwrap();
        assert_eq!(json["type"], "section");
        assert_eq!(json["data"]["type"], "hero");
    }
}
