use super::PageStore;
use crate::{PageRecord, PageSummary, StoreError, StoreResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

const PAGE_PREFIX: &str = "page-";
const PAGE_EXT: &str = ".json";

/// Page store backed by a directory of `page-{id}.json` files
///
/// ```text
/// .pagesmith/
/// ├── page-{id}.json
/// └── .page-{uuid}.tmp    # in-flight write, renamed over the page file
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ids must stay inside the data directory
    fn page_path(&self, page_id: &str) -> StoreResult<PathBuf> {
        let unsafe_id = page_id.is_empty()
            || page_id.contains("..")
            || page_id.contains(['/', '\\', '\0']);
        if unsafe_id {
            return Err(StoreError::InvalidId(page_id.to_string()));
        }
        Ok(self.root.join(format!("{}{}{}", PAGE_PREFIX, page_id, PAGE_EXT)))
    }

    fn ensure_root(&self) -> StoreResult<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl PageStore for FileStore {
    fn load_page(&self, page_id: &str) -> StoreResult<Option<PageRecord>> {
        let content = match fs::read_to_string(self.page_path(page_id)?) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save_page(&self, page: &PageRecord) -> StoreResult<()> {
        let path = self.page_path(&page.page_id)?;
        self.ensure_root()?;

        let content = serde_json::to_string_pretty(page)?;
        let tmp_file = self.root.join(format!(".page-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content)?;
        if let Err(e) = fs::rename(&tmp_file, &path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(e.into());
        }

        debug!(page_id = %page.page_id, "Saved page");
        Ok(())
    }

    fn list_pages(&self) -> StoreResult<Vec<PageSummary>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut pages = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.starts_with(PAGE_PREFIX) || !name.ends_with(PAGE_EXT) {
                continue;
            }

            let content = fs::read_to_string(&path)?;
            match serde_json::from_str::<PageRecord>(&content) {
                Ok(page) => pages.push(page.summary()),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable page file"),
            }
        }

        pages.sort_by(|a, b| a.page_id.cmp(&b.page_id));
        Ok(pages)
    }
}
