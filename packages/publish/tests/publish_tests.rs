use pagesmith_model::{Locale, SectionKind};
use pagesmith_publish::{
    BuiltinCatalog, FileStore, MemoryStore, NewPage, PageStatus, PageStore, PublishConfig,
    PublishError, Publisher,
};
use serde_json::json;

fn memory_publisher() -> Publisher<MemoryStore, BuiltinCatalog> {
    Publisher::new(
        MemoryStore::new(),
        BuiltinCatalog::new(),
        PublishConfig::default(),
    )
}

fn new_page(user: &str, title: &str) -> NewPage {
    NewPage {
        template_id: "starter".to_string(),
        user_id: user.to_string(),
        username: Some(user.to_string()),
        title: title.to_string(),
    }
}

#[test]
fn test_slug_conflict_leaves_page_unchanged() {
    let publisher = memory_publisher();
    let first = publisher.create_page(new_page("ana", "First")).unwrap();
    let second = publisher.create_page(new_page("ben", "Second")).unwrap();

    publisher
        .publish(&first.page_id, None, Some("spring-sale"))
        .unwrap();

    let err = publisher
        .publish(&second.page_id, None, Some("spring-sale"))
        .unwrap_err();
    assert!(matches!(err, PublishError::SlugConflict(ref slug) if slug == "spring-sale"));

    let unchanged = publisher.page(&second.page_id).unwrap();
    assert_eq!(unchanged.status, PageStatus::Draft);
    assert_eq!(unchanged.slug, second.slug);
    assert!(unchanged.artifact.is_none());
}

#[test]
fn test_republish_is_idempotent() {
    let publisher = memory_publisher();
    let page = publisher.create_page(new_page("ana", "Launch")).unwrap();

    let first = publisher.publish(&page.page_id, None, Some("launch")).unwrap();
    let second = publisher.publish(&page.page_id, None, None).unwrap();

    assert_eq!(second.status, PageStatus::Published);
    assert_eq!(second.slug, "launch");
    let (a, b) = (first.artifact.unwrap(), second.artifact.unwrap());
    assert_eq!(a.markup, b.markup);
    assert_eq!(b.url, "http://localhost:3000/launch");
}

#[test]
fn test_publish_missing_page() {
    let err = memory_publisher().publish("ghost", None, None).unwrap_err();
    assert!(matches!(err, PublishError::NotFound { kind: "Page", .. }));
}

#[test]
fn test_published_markup_is_served_by_slug() {
    let publisher = memory_publisher();
    let page = publisher.create_page(new_page("ana", "Launch")).unwrap();

    assert!(publisher.published_markup(&page.slug).is_err());

    publisher.publish(&page.page_id, None, None).unwrap();
    let markup = publisher.published_markup(&page.slug).unwrap();

    assert!(markup.starts_with("<!DOCTYPE html>"));
    assert!(markup.contains("<title>Launch</title>"));
    assert!(markup.contains(&format!(r#"var documentId = "{}";"#, page.page_id)));
}

#[test]
fn test_session_edits_reach_the_published_page() {
    let publisher = memory_publisher();
    let page = publisher.create_page(new_page("ana", "Launch")).unwrap();

    let mut session = publisher.open_session(&page.page_id).unwrap();
    let added = session.add_section(SectionKind::Pricing, None).unwrap();
    let pricing_id = added.created_id.unwrap();
    session.toggle_language();
    publisher.save_session(&page.page_id, &session).unwrap();

    let published = publisher.publish(&page.page_id, None, None).unwrap();
    let markup = published.artifact.unwrap().markup;

    assert_eq!(published.theme.locale, Locale::Ar);
    assert!(markup.contains(&format!(r#"data-section-id="{}""#, pricing_id)));
    assert!(markup.contains("الأكثر شعبية"));
}

#[test]
fn test_rename_avoids_published_slugs() {
    let publisher = memory_publisher();
    let first = publisher.create_page(new_page("ana", "First")).unwrap();
    let second = publisher.create_page(new_page("ben", "Second")).unwrap();
    publisher.publish(&first.page_id, None, Some("summer-menu")).unwrap();

    let renamed = publisher
        .rename_page(&second.page_id, "Summer Menu")
        .unwrap();
    assert!(renamed.slug.starts_with("summer-menu-"));
    assert_eq!(renamed.title, "Summer Menu");

    let third = publisher.create_page(new_page("cat", "Third")).unwrap();
    let renamed = publisher.rename_page(&third.page_id, "Winter Menu").unwrap();
    assert_eq!(renamed.slug, "winter-menu");
}

#[test]
fn test_export_import_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let publisher = Publisher::new(
        FileStore::new(dir.path()),
        BuiltinCatalog::new(),
        PublishConfig::default(),
    );
    let source = publisher.create_page(new_page("ana", "Source")).unwrap();
    let target = publisher.create_page(new_page("ben", "Target")).unwrap();

    let json = publisher.export_page(&source.page_id).unwrap();
    let imported = publisher.import_page(&target.page_id, &json).unwrap();

    assert_eq!(imported.document, source.document);
    assert_eq!(imported.theme, source.theme);
    assert_eq!(imported.title, "Target");
    assert_eq!(publisher.list_pages().unwrap().len(), 2);
}

#[test]
fn test_invalid_import_writes_nothing() {
    let publisher = memory_publisher();
    let page = publisher.create_page(new_page("ana", "Page")).unwrap();

    let broken = json!({
        "version": "1.0.0",
        "sections": [{ "id": "s1", "type": "hero", "order": 0, "content": { "en": {} } }],
        "theme": serde_json::to_value(&page.theme).unwrap(),
        "metadata": { "exportedAt": "2024-01-01T00:00:00Z" }
    })
    .to_string();

    let err = publisher.import_page(&page.page_id, &broken).unwrap_err();
    assert!(matches!(err, PublishError::Validation(_)));
    assert_eq!(publisher.page(&page.page_id).unwrap(), page);

    let err = publisher.import_page("ghost", "{}").unwrap_err();
    assert!(matches!(err, PublishError::NotFound { .. }));
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let page_id = {
        let publisher = Publisher::new(
            FileStore::new(dir.path()),
            BuiltinCatalog::new(),
            PublishConfig::default(),
        );
        let page = publisher.create_page(new_page("ana", "Kept")).unwrap();
        publisher.publish(&page.page_id, None, Some("kept")).unwrap();
        page.page_id
    };

    let store = FileStore::new(dir.path());
    let found = store
        .find_by_slug("kept", Some(PageStatus::Published))
        .unwrap()
        .unwrap();
    assert_eq!(found.page_id, page_id);
    assert_eq!(found.published_url.as_deref(), Some("http://localhost:3000/kept"));
}
