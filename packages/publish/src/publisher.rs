use crate::slug::{is_valid_slug, short_id, slugify, with_suffix};
use crate::{
    NewPage, PageRecord, PageStatus, PageStore, PageSummary, PublishConfig, PublishError,
    PublishResult, PublishedArtifact, StoreError, TemplateCatalog,
};
use chrono::Utc;
use pagesmith_compiler_html::{compile, CompileOptions};
use pagesmith_editor::EditSession;
use pagesmith_model::{
    export_to_json, import_from_json, Document, SeoMetadata, TemplateSummary, Theme, UuidIdSource,
};
use tracing::{debug, info, instrument, warn};

const DEFAULT_USERNAME: &str = "user";

/// Ties the page store, the template catalog and the compiler together.
///
/// Every operation validates and compiles before it writes, so a failed
/// call leaves the stored page untouched.
pub struct Publisher<S, C> {
    store: S,
    catalog: C,
    config: PublishConfig,
}

impl<S: PageStore, C: TemplateCatalog> Publisher<S, C> {
    pub fn new(store: S, catalog: C, config: PublishConfig) -> Self {
        Self {
            store,
            catalog,
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn config(&self) -> &PublishConfig {
        &self.config
    }

    pub fn templates(&self) -> Vec<TemplateSummary> {
        self.catalog.templates()
    }

    /// Seed a draft page from a catalog template
    #[instrument(skip(self, request), fields(template_id = %request.template_id))]
    pub fn create_page(&self, request: NewPage) -> PublishResult<PageRecord> {
        let template = self
            .catalog
            .template(&request.template_id)
            .ok_or_else(|| PublishError::NotFound {
                kind: "Template",
                id: request.template_id.clone(),
            })?;

        let (document, theme) = template.instantiate(&mut UuidIdSource);
        let username = request
            .username
            .as_deref()
            .map(slugify)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        let now = Utc::now();

        let page = PageRecord {
            page_id: format!("{}-{}", request.user_id, short_id()),
            user_id: request.user_id,
            slug: format!("{}-{}", username, short_id()),
            template_id: request.template_id,
            document,
            theme,
            seo: SeoMetadata {
                title: request.title.clone(),
                ..Default::default()
            },
            title: request.title,
            status: PageStatus::Draft,
            artifact: None,
            created_at: now,
            updated_at: now,
        };

        self.store.save_page(&page)?;
        info!(page_id = %page.page_id, slug = %page.slug, "Created page");
        Ok(page)
    }

    pub fn page(&self, page_id: &str) -> PublishResult<PageRecord> {
        self.store
            .load_page(page_id)?
            .ok_or_else(|| PublishError::page_not_found(page_id))
    }

    pub fn list_pages(&self) -> PublishResult<Vec<PageSummary>> {
        Ok(self.store.list_pages()?)
    }

    /// Start editing a stored page
    pub fn open_session(&self, page_id: &str) -> PublishResult<EditSession> {
        let page = self.page(page_id)?;
        Ok(EditSession::new(page.document, page.theme))
    }

    pub fn save_page(
        &self,
        page_id: &str,
        document: &Document,
        theme: &Theme,
    ) -> PublishResult<PageRecord> {
        match self.store.save_document(page_id, document, theme) {
            Ok(page) => {
                debug!(page_id, "Saved page");
                Ok(page)
            }
            Err(StoreError::Missing(_)) => Err(PublishError::page_not_found(page_id)),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save_session(&self, page_id: &str, session: &EditSession) -> PublishResult<PageRecord> {
        self.save_page(page_id, session.document(), session.theme())
    }

    /// Retitle a page and derive its slug from the new title.
    ///
    /// A slug already used by another published page gets a random suffix.
    /// Titles without ASCII letters or digits keep the current slug.
    pub fn rename_page(&self, page_id: &str, title: &str) -> PublishResult<PageRecord> {
        let mut page = self.page(page_id)?;

        let base = slugify(title);
        let slug = if base.is_empty() {
            page.slug.clone()
        } else if self.slug_taken(&base, page_id)? {
            with_suffix(&base)
        } else {
            base
        };

        page.title = title.to_string();
        page.slug = slug;
        page.updated_at = Utc::now();
        self.store.save_page(&page)?;

        info!(page_id, slug = %page.slug, "Renamed page");
        Ok(page)
    }

    /// Compile a page and store it as published.
    ///
    /// `theme` replaces the stored theme when given; `requested_slug`
    /// replaces the stored slug. Fails with `SlugConflict`, leaving the
    /// page as it was, when another published page already uses the slug.
    #[instrument(skip(self, theme))]
    pub fn publish(
        &self,
        page_id: &str,
        theme: Option<&Theme>,
        requested_slug: Option<&str>,
    ) -> PublishResult<PageRecord> {
        let page = self.page(page_id)?;

        let slug = match requested_slug.map(str::trim) {
            Some(slug) if !is_valid_slug(slug) => {
                return Err(PublishError::InvalidSlug(slug.to_string()))
            }
            Some(slug) => slug.to_string(),
            None => page.slug.clone(),
        };

        if self.slug_taken(&slug, page_id)? {
            warn!(page_id, slug = %slug, "Slug already published by another page");
            return Err(PublishError::SlugConflict(slug));
        }

        let theme = theme.unwrap_or(&page.theme);
        let options = CompileOptions {
            document_id: Some(page_id.to_string()),
            analytics_endpoint: self.config.analytics_endpoint.clone(),
            seo: page.seo.clone(),
            ..Default::default()
        };
        let compiled = compile(&page.document, theme, &options)?;

        let url = self.config.public_url(&slug);
        let published = self.store.publish_artifact(
            page_id,
            theme,
            PublishedArtifact {
                slug,
                markup: compiled.markup,
                stylesheet: compiled.stylesheet,
                published_at: Utc::now(),
                url,
            },
        )?;

        info!(page_id, url = ?published.artifact.as_ref().map(|a| &a.url), "Published page");
        Ok(published)
    }

    /// The page as an export envelope
    pub fn export_page(&self, page_id: &str) -> PublishResult<String> {
        let page = self.page(page_id)?;
        Ok(export_to_json(&page.document, &page.theme, Some(page_id))?)
    }

    /// Replace a page's document and theme from an export envelope.
    ///
    /// The envelope is validated in full before anything is written.
    pub fn import_page(&self, page_id: &str, json: &str) -> PublishResult<PageRecord> {
        self.page(page_id)?;

        let (document, theme) = import_from_json(json)?.into_parts();
        let page = self.save_page(page_id, &document, &theme)?;

        info!(page_id, sections = page.document.sections.len(), "Imported page");
        Ok(page)
    }

    /// Markup served for a published slug
    pub fn published_markup(&self, slug: &str) -> PublishResult<String> {
        let not_found = || PublishError::NotFound {
            kind: "Published page",
            id: slug.to_string(),
        };

        let summary = self
            .store
            .find_by_slug(slug, Some(PageStatus::Published))?
            .ok_or_else(not_found)?;

        self.page(&summary.page_id)?
            .artifact
            .map(|artifact| artifact.markup)
            .ok_or_else(not_found)
    }

    /// Whether a page other than `page_id` is published under `slug`
    fn slug_taken(&self, slug: &str, page_id: &str) -> PublishResult<bool> {
        Ok(self
            .store
            .find_by_slug(slug, Some(PageStatus::Published))?
            .map_or(false, |owner| owner.page_id != page_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuiltinCatalog, MemoryStore, StoreResult};
    use std::cell::Cell;

    fn publisher() -> Publisher<MemoryStore, BuiltinCatalog> {
        Publisher::new(
            MemoryStore::new(),
            BuiltinCatalog::new(),
            PublishConfig::default(),
        )
    }

    fn new_page(title: &str) -> NewPage {
        NewPage {
            template_id: "starter".to_string(),
            user_id: "u1".to_string(),
            username: Some("Sara Ali".to_string()),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_create_page_shape() {
        let publisher = publisher();
        let page = publisher.create_page(new_page("Spring Sale")).unwrap();

        assert!(page.page_id.starts_with("u1-"));
        assert_eq!(page.page_id.len(), "u1-".len() + 8);
        assert!(page.slug.starts_with("sara-ali-"));
        assert_eq!(page.status, PageStatus::Draft);
        assert_eq!(page.seo.title, "Spring Sale");

        let template = publisher.catalog().template("starter").unwrap();
        assert!(page.document.ids().is_disjoint(&template.structure.ids()));
    }

    #[test]
    fn test_unknown_template() {
        let err = publisher()
            .create_page(NewPage {
                template_id: "nope".to_string(),
                ..new_page("x")
            })
            .unwrap_err();
        assert!(matches!(err, PublishError::NotFound { kind: "Template", .. }));
    }

    #[test]
    fn test_invalid_requested_slug() {
        let publisher = publisher();
        let page = publisher.create_page(new_page("A")).unwrap();

        let err = publisher
            .publish(&page.page_id, None, Some("Not A Slug"))
            .unwrap_err();
        assert!(matches!(err, PublishError::InvalidSlug(_)));
        assert_eq!(publisher.page(&page.page_id).unwrap().status, PageStatus::Draft);
    }

    #[test]
    fn test_publish_with_theme_persists_it() {
        let publisher = publisher();
        let page = publisher.create_page(new_page("A")).unwrap();
        let theme = Theme {
            locale: pagesmith_model::Locale::Ar,
            ..page.theme.clone()
        };

        let published = publisher
            .publish(&page.page_id, Some(&theme), None)
            .unwrap();

        assert_eq!(published.theme, theme);
        assert!(published
            .artifact
            .unwrap()
            .markup
            .contains(r#"dir="rtl""#));
    }

    /// Memory store that accepts a fixed number of writes, then fails
    struct LimitedStore {
        inner: MemoryStore,
        writes_left: Cell<usize>,
    }

    impl PageStore for LimitedStore {
        fn load_page(&self, page_id: &str) -> StoreResult<Option<PageRecord>> {
            self.inner.load_page(page_id)
        }

        fn save_page(&self, page: &PageRecord) -> StoreResult<()> {
            match self.writes_left.get() {
                0 => Err(StoreError::Unavailable("write budget spent".to_string())),
                n => {
                    self.writes_left.set(n - 1);
                    self.inner.save_page(page)
                }
            }
        }

        fn list_pages(&self) -> StoreResult<Vec<PageSummary>> {
            self.inner.list_pages()
        }
    }

    #[test]
    fn test_failed_publish_keeps_stored_theme() {
        let publisher = Publisher::new(
            LimitedStore {
                inner: MemoryStore::new(),
                writes_left: Cell::new(1),
            },
            BuiltinCatalog::new(),
            PublishConfig::default(),
        );
        let page = publisher.create_page(new_page("A")).unwrap();
        let theme = Theme {
            locale: pagesmith_model::Locale::Ar,
            ..page.theme.clone()
        };

        let err = publisher
            .publish(&page.page_id, Some(&theme), None)
            .unwrap_err();

        assert!(matches!(err, PublishError::Persistence(_)));
        let stored = publisher.page(&page.page_id).unwrap();
        assert_eq!(stored.status, PageStatus::Draft);
        assert_eq!(stored.theme, page.theme);
        assert!(stored.artifact.is_none());
    }

    #[test]
    fn test_persistence_failure_surfaces() {
        let publisher = publisher();
        let page = publisher.create_page(new_page("A")).unwrap();
        publisher.store().set_fail_writes(true);

        let err = publisher.publish(&page.page_id, None, None).unwrap_err();
        assert!(matches!(err, PublishError::Persistence(_)));
        assert_eq!(publisher.page(&page.page_id).unwrap().status, PageStatus::Draft);
    }
}
