//! # Page Storage
//!
//! [`PageStore`] is the persistence collaborator of the publisher. An
//! implementation only needs to load, save and list whole page records;
//! document saves, artifact publication and slug lookups are built on top
//! of those three.
//!
//! - [`MemoryStore`]: pages in memory, for tests and one-shot tools.
//! - [`FileStore`]: one JSON file per page in a data directory.
//!
//! Two writers saving the same page race with last-write-wins.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::{PageRecord, PageStatus, PageSummary, PublishedArtifact, StoreError, StoreResult};
use chrono::Utc;
use pagesmith_model::{Document, Theme};

pub trait PageStore {
    /// `Ok(None)` when no page has this id
    fn load_page(&self, page_id: &str) -> StoreResult<Option<PageRecord>>;

    /// Insert or replace the whole record. Must be atomic.
    fn save_page(&self, page: &PageRecord) -> StoreResult<()>;

    fn list_pages(&self) -> StoreResult<Vec<PageSummary>>;

    /// Replace the document and theme of an existing page
    fn save_document(&self, page_id: &str, document: &Document, theme: &Theme) -> StoreResult<PageRecord> {
        let mut page = self
            .load_page(page_id)?
            .ok_or_else(|| StoreError::Missing(page_id.to_string()))?;

        page.document = document.clone();
        page.theme = theme.clone();
        page.updated_at = Utc::now();
        self.save_page(&page)?;
        Ok(page)
    }

    /// Mark a page published with `artifact` and the theme it was compiled
    /// with. Theme, slug, status and artifact land in a single write.
    fn publish_artifact(
        &self,
        page_id: &str,
        theme: &Theme,
        artifact: PublishedArtifact,
    ) -> StoreResult<PageRecord> {
        let mut page = self
            .load_page(page_id)?
            .ok_or_else(|| StoreError::Missing(page_id.to_string()))?;

        page.theme = theme.clone();
        page.slug = artifact.slug.clone();
        page.status = PageStatus::Published;
        page.updated_at = artifact.published_at;
        page.artifact = Some(artifact);
        self.save_page(&page)?;
        Ok(page)
    }

    fn find_by_slug(&self, slug: &str, status: Option<PageStatus>) -> StoreResult<Option<PageSummary>> {
        Ok(self
            .list_pages()?
            .into_iter()
            .find(|page| page.slug == slug && status.map_or(true, |s| page.status == s)))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::{PageRecord, PageStatus};
    use chrono::{TimeZone, Utc};
    use pagesmith_model::{Document, Section, SectionKind, SeoMetadata, Theme};

    pub fn page(page_id: &str, slug: &str) -> PageRecord {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        PageRecord {
            page_id: page_id.to_string(),
            user_id: "user".to_string(),
            title: "Fixture".to_string(),
            slug: slug.to_string(),
            template_id: "starter".to_string(),
            document: Document::new(vec![Section::with_defaults(
                format!("{}-hero", page_id),
                SectionKind::Hero,
            )]),
            theme: Theme::default(),
            seo: SeoMetadata::default(),
            status: PageStatus::Draft,
            artifact: None,
            created_at: created,
            updated_at: created,
        }
    }
}
