//! # Edit Session Management
//!
//! An EditSession is one user's working state for a page: the document and
//! theme being edited, the clipboard, and the view state the editor UI
//! drives (selection, preview device, preview mode).
//!
//! Every mutating call bumps the session version when it changes something
//! and reports a [`MutationResult`]. Calls that name missing ids come back
//! with `applied == false` instead of an error, so stale UI state never
//! breaks a live session.

use crate::{Clipboard, EditorError, ElementPatch, Mutation, MutationResult, SectionPatch};
use pagesmith_model::{
    DeviceSize, Document, Element, ElementKind, IdSource, Locale, Section, SectionKind, Theme,
    ThemePatch, UuidIdSource,
};
use serde_json::Value;
use tracing::{debug, warn};

pub struct EditSession {
    document: Document,
    theme: Theme,
    clipboard: Clipboard,
    selected_section: Option<String>,
    device_size: DeviceSize,
    preview: bool,
    version: u64,
    ids: Box<dyn IdSource>,
}

impl EditSession {
    pub fn new(document: Document, theme: Theme) -> Self {
        Self::with_id_source(document, theme, UuidIdSource)
    }

    /// Session that mints ids from `ids`; tests pass a deterministic source
    pub fn with_id_source(mut document: Document, theme: Theme, ids: impl IdSource + 'static) -> Self {
        document.normalize();
        Self {
            document,
            theme,
            clipboard: Clipboard::new(),
            selected_section: None,
            device_size: DeviceSize::default(),
            preview: false,
            version: 0,
            ids: Box::new(ids),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn selected_section(&self) -> Option<&str> {
        self.selected_section.as_deref()
    }

    pub fn device_size(&self) -> DeviceSize {
        self.device_size
    }

    pub fn is_preview(&self) -> bool {
        self.preview
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn into_parts(self) -> (Document, Theme) {
        (self.document, self.theme)
    }

    /// Apply a mutation to the session document
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let applied = mutation.apply(&mut self.document)?;

        if applied {
            self.version += 1;
            debug!(version = self.version, ?mutation, "Applied mutation");

            if let Mutation::DeleteSection { section_id } = &mutation {
                if self.selected_section.as_deref() == Some(section_id) {
                    self.selected_section = None;
                }
            }
        } else {
            warn!(section_id = mutation.section_id(), "Mutation skipped: target not found");
        }

        Ok(self.result(applied, None))
    }

    pub fn insert_section(
        &mut self,
        section: Section,
        position: Option<usize>,
    ) -> Result<MutationResult, EditorError> {
        let id = section.id.clone();
        let result = self.apply(Mutation::InsertSection { section, position })?;
        Ok(MutationResult {
            created_id: Some(id),
            ..result
        })
    }

    /// Insert a new section of `kind` with its starter content
    pub fn add_section(
        &mut self,
        kind: SectionKind,
        position: Option<usize>,
    ) -> Result<MutationResult, EditorError> {
        let section = Section::with_defaults(self.ids.next_id(), kind);
        self.insert_section(section, position)
    }

    pub fn update_section(
        &mut self,
        section_id: &str,
        patch: SectionPatch,
    ) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::UpdateSection {
            section_id: section_id.to_string(),
            patch,
        })
    }

    pub fn update_section_content(
        &mut self,
        section_id: &str,
        locale: Locale,
        content: Value,
    ) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::UpdateSectionContent {
            section_id: section_id.to_string(),
            locale,
            content,
        })
    }

    pub fn delete_section(&mut self, section_id: &str) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::DeleteSection {
            section_id: section_id.to_string(),
        })
    }

    pub fn reorder_sections(&mut self, section_ids: Vec<String>) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::ReorderSections { section_ids })
    }

    /// Insert a new element of `kind` with its default content and style
    pub fn add_element(
        &mut self,
        section_id: &str,
        kind: ElementKind,
        position: Option<usize>,
    ) -> Result<MutationResult, EditorError> {
        if self.document.find_section(section_id).is_none() {
            warn!(section_id, "Cannot add element: section not found");
            return Ok(self.result(false, None));
        }

        let element = Element::with_defaults(self.ids.next_id(), kind);
        self.insert_element(section_id, element, position)
    }

    pub fn insert_element(
        &mut self,
        section_id: &str,
        element: Element,
        position: Option<usize>,
    ) -> Result<MutationResult, EditorError> {
        let id = element.id.clone();
        let result = self.apply(Mutation::InsertElement {
            section_id: section_id.to_string(),
            element,
            position,
        })?;
        Ok(MutationResult {
            created_id: result.applied.then_some(id),
            ..result
        })
    }

    pub fn update_element(
        &mut self,
        section_id: &str,
        element_id: &str,
        patch: ElementPatch,
    ) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::UpdateElement {
            section_id: section_id.to_string(),
            element_id: element_id.to_string(),
            patch,
        })
    }

    pub fn delete_element(
        &mut self,
        section_id: &str,
        element_id: &str,
    ) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::DeleteElement {
            section_id: section_id.to_string(),
            element_id: element_id.to_string(),
        })
    }

    pub fn reorder_elements(
        &mut self,
        section_id: &str,
        element_ids: Vec<String>,
    ) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::ReorderElements {
            section_id: section_id.to_string(),
            element_ids,
        })
    }

    /// Copy a section, with fresh ids, into the clipboard
    pub fn copy_section(&mut self, section_id: &str) -> bool {
        self.clipboard
            .copy_section(&self.document, section_id, self.ids.as_mut())
    }

    pub fn copy_element(&mut self, section_id: &str, element_id: &str) -> bool {
        self.clipboard
            .copy_element(&self.document, section_id, element_id, self.ids.as_mut())
    }

    /// Paste the clipboard section at `position`; a no-op when the
    /// clipboard is empty or holds an element.
    pub fn paste_section(&mut self, position: usize) -> Result<MutationResult, EditorError> {
        match self.clipboard.paste_section(self.ids.as_mut()) {
            Some(section) => self.insert_section(section, Some(position)),
            None => {
                debug!("Paste skipped: clipboard holds no section");
                Ok(self.result(false, None))
            }
        }
    }

    pub fn paste_element(
        &mut self,
        section_id: &str,
        position: Option<usize>,
    ) -> Result<MutationResult, EditorError> {
        if self.document.find_section(section_id).is_none() {
            return Ok(self.result(false, None));
        }

        match self.clipboard.paste_element(self.ids.as_mut()) {
            Some(element) => self.insert_element(section_id, element, position),
            None => {
                debug!("Paste skipped: clipboard holds no element");
                Ok(self.result(false, None))
            }
        }
    }

    pub fn select_section(&mut self, section_id: Option<&str>) {
        self.selected_section = section_id.map(str::to_string);
    }

    pub fn update_theme(&mut self, patch: ThemePatch) -> MutationResult {
        self.theme.apply(patch);
        self.version += 1;
        self.result(true, None)
    }

    /// Flip the active locale between `en` and `ar`
    pub fn toggle_language(&mut self) -> MutationResult {
        self.theme.locale = self.theme.locale.toggle();
        self.version += 1;
        self.result(true, None)
    }

    pub fn set_device_size(&mut self, device_size: DeviceSize) {
        self.device_size = device_size;
    }

    /// Entering or leaving preview drops the selection
    pub fn set_preview_mode(&mut self, preview: bool) {
        self.preview = preview;
        self.selected_section = None;
    }

    fn result(&self, applied: bool, created_id: Option<String>) -> MutationResult {
        MutationResult {
            version: self.version,
            applied,
            created_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_model::SequentialIdSource;

    fn session() -> EditSession {
        EditSession::with_id_source(
            Document::default(),
            Theme::default(),
            SequentialIdSource::new("id"),
        )
    }

    #[test]
    fn test_version_only_moves_on_change() {
        let mut session = session();
        let added = session.add_section(SectionKind::Hero, None).unwrap();
        assert_eq!(added.version, 1);
        assert_eq!(added.created_id.as_deref(), Some("id-1"));

        let missing = session.delete_section("nope").unwrap();
        assert!(!missing.applied);
        assert_eq!(missing.version, 1);
    }

    #[test]
    fn test_delete_clears_selection() {
        let mut session = session();
        let id = session.add_section(SectionKind::Hero, None).unwrap().created_id.unwrap();
        session.add_section(SectionKind::Cta, None).unwrap();

        session.select_section(Some(&id));
        session.delete_section(&id).unwrap();

        assert_eq!(session.selected_section(), None);
        assert_eq!(session.document().sections.len(), 1);
        assert_eq!(session.document().sections[0].order, 0);
    }

    #[test]
    fn test_delete_keeps_other_selection() {
        let mut session = session();
        let a = session.add_section(SectionKind::Hero, None).unwrap().created_id.unwrap();
        let b = session.add_section(SectionKind::Cta, None).unwrap().created_id.unwrap();

        session.select_section(Some(&b));
        session.delete_section(&a).unwrap();

        assert_eq!(session.selected_section(), Some(b.as_str()));
    }

    #[test]
    fn test_preview_mode_clears_selection() {
        let mut session = session();
        session.select_section(Some("anything"));
        session.set_preview_mode(true);

        assert!(session.is_preview());
        assert_eq!(session.selected_section(), None);
    }

    #[test]
    fn test_toggle_language() {
        let mut session = session();
        session.toggle_language();
        assert_eq!(session.theme().locale, Locale::Ar);
        session.toggle_language();
        assert_eq!(session.theme().locale, Locale::En);
    }

    #[test]
    fn test_add_element_to_missing_section() {
        let mut session = session();
        let result = session.add_element("nope", ElementKind::Text, None).unwrap();

        assert!(!result.applied);
        assert_eq!(result.created_id, None);
    }
}
