use super::PageStore;
use crate::{PageRecord, PageSummary, StoreError, StoreResult};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// In-memory page store.
///
/// Single-threaded, so `RefCell` gives the `&self` writes the trait asks
/// for.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pages: RefCell<BTreeMap<String, PageRecord>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following write fail, for exercising persistence errors
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn len(&self) -> usize {
        self.pages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.borrow().is_empty()
    }
}

impl PageStore for MemoryStore {
    fn load_page(&self, page_id: &str) -> StoreResult<Option<PageRecord>> {
        Ok(self.pages.borrow().get(page_id).cloned())
    }

    fn save_page(&self, page: &PageRecord) -> StoreResult<()> {
        if self.fail_writes.get() {
            return Err(StoreError::Unavailable("writes disabled".to_string()));
        }
        self.pages
            .borrow_mut()
            .insert(page.page_id.clone(), page.clone());
        Ok(())
    }

    fn list_pages(&self) -> StoreResult<Vec<PageSummary>> {
        Ok(self.pages.borrow().values().map(PageRecord::summary).collect())
    }
}
