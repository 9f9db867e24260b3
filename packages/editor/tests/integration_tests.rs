//! Integration tests for editor crate

use pagesmith_editor::{EditSession, ElementPatch, SectionPatch};
use pagesmith_model::{
    Document, ElementContent, ElementKind, HeadingContent, Locale, SectionContent, SectionKind,
    SequentialIdSource, Theme,
};
use serde_json::json;
use std::collections::HashSet;

fn session() -> EditSession {
    EditSession::with_id_source(
        Document::default(),
        Theme::default(),
        SequentialIdSource::new("node"),
    )
}

fn orders(session: &EditSession) -> Vec<(String, u32)> {
    session
        .document()
        .sections
        .iter()
        .map(|s| (s.id.clone(), s.order))
        .collect()
}

#[test]
fn test_append_assigns_next_order() {
    let mut session = session();

    let hero = session.add_section(SectionKind::Hero, None).unwrap();
    let features = session.add_section(SectionKind::Features, None).unwrap();

    let doc = session.document();
    let hero = doc.find_section(hero.created_id.as_deref().unwrap()).unwrap();
    let features = doc.find_section(features.created_id.as_deref().unwrap()).unwrap();

    assert_eq!(hero.order, 0);
    assert_eq!(features.order, 1);
}

#[test]
fn test_reorder_follows_given_sequence() {
    let mut session = session();
    let ids: Vec<String> = (0..3)
        .map(|_| {
            session
                .add_section(SectionKind::Cta, None)
                .unwrap()
                .created_id
                .unwrap()
        })
        .collect();

    session
        .reorder_sections(vec![ids[2].clone(), ids[0].clone(), ids[1].clone()])
        .unwrap();

    assert_eq!(
        orders(&session),
        vec![
            (ids[2].clone(), 0),
            (ids[0].clone(), 1),
            (ids[1].clone(), 2)
        ]
    );
}

#[test]
fn test_copy_section_then_paste_twice() {
    let mut session = session();
    let source_id = session
        .add_section(SectionKind::Features, None)
        .unwrap()
        .created_id
        .unwrap();
    session.add_element(&source_id, ElementKind::Heading, None).unwrap();
    session.add_element(&source_id, ElementKind::Image, None).unwrap();

    let source_ids = session.document().ids();
    assert_eq!(source_ids.len(), 3);

    assert!(session.copy_section(&source_id));
    let first = session.paste_section(1).unwrap();
    let second = session.paste_section(2).unwrap();
    assert!(first.applied && second.applied);

    let doc = session.document();
    assert_eq!(doc.sections.len(), 3);

    let mut new_ids = HashSet::new();
    for created in [first.created_id.unwrap(), second.created_id.unwrap()] {
        let pasted = doc.find_section(&created).unwrap();
        assert_eq!(pasted.elements.len(), 2);
        new_ids.insert(pasted.id.clone());
        for element in &pasted.elements {
            new_ids.insert(element.id.clone());
        }
    }

    assert_eq!(new_ids.len(), 6);
    assert!(new_ids.iter().all(|id| !source_ids.contains(id)));
    assert!(doc.orders_are_dense());
}

#[test]
fn test_paste_element_into_other_section() {
    let mut session = session();
    let a = session.add_section(SectionKind::Hero, None).unwrap().created_id.unwrap();
    let b = session.add_section(SectionKind::Cta, None).unwrap().created_id.unwrap();
    let element = session
        .add_element(&a, ElementKind::Button, None)
        .unwrap()
        .created_id
        .unwrap();

    assert!(session.copy_element(&a, &element));
    let pasted = session.paste_element(&b, Some(0)).unwrap();

    let pasted_id = pasted.created_id.unwrap();
    assert_ne!(pasted_id, element);
    assert_eq!(session.document().find_section(&b).unwrap().elements.len(), 1);
    assert!(session.document().find_element(&b, &pasted_id).is_some());
}

#[test]
fn test_paste_with_empty_clipboard_is_noop() {
    let mut session = session();
    session.add_section(SectionKind::Hero, None).unwrap();
    let before = session.document().clone();

    let result = session.paste_section(0).unwrap();

    assert!(!result.applied);
    assert_eq!(session.document(), &before);
}

#[test]
fn test_content_edit_keeps_other_locale() {
    let mut session = session();
    let id = session.add_section(SectionKind::Hero, None).unwrap().created_id.unwrap();

    session
        .update_section_content(&id, Locale::Ar, json!({ "heading": "عنوان جديد" }))
        .unwrap();

    let content = session.document().find_section(&id).unwrap().content.to_json();
    assert_eq!(content.ar["heading"], "عنوان جديد");
    assert_eq!(content.en["heading"], "Welcome to Our Platform");
}

#[test]
fn test_update_section_config_and_content() {
    let mut session = session();
    let id = session.add_section(SectionKind::Stats, None).unwrap().created_id.unwrap();

    session
        .update_section(
            &id,
            SectionPatch {
                background_color: Some("#111827".to_string()),
                content: Some(SectionContent::defaults(SectionKind::Cta)),
                ..Default::default()
            },
        )
        .unwrap();

    let section = session.document().find_section(&id).unwrap();
    assert_eq!(section.config.background_color.as_deref(), Some("#111827"));
    assert_eq!(section.kind(), SectionKind::Cta);
    assert!(section.config.padding.is_some());
}

#[test]
fn test_update_element_content() {
    let mut session = session();
    let section = session.add_section(SectionKind::Hero, None).unwrap().created_id.unwrap();
    let element = session
        .add_element(&section, ElementKind::Heading, None)
        .unwrap()
        .created_id
        .unwrap();

    session
        .update_element(
            &section,
            &element,
            ElementPatch {
                content: Some(ElementContent::Heading(HeadingContent {
                    text: "Pricing".to_string(),
                    level: 1,
                    language: None,
                })),
                ..Default::default()
            },
        )
        .unwrap();

    let updated = session.document().find_element(&section, &element).unwrap();
    assert_eq!(updated.kind(), ElementKind::Heading);
    assert!(matches!(&updated.content, ElementContent::Heading(h) if h.level == 1));
}

#[test]
fn test_partial_element_reorder_keeps_omitted_after() {
    let mut session = session();
    let section = session.add_section(SectionKind::Cta, None).unwrap().created_id.unwrap();
    let ids: Vec<String> = (0..3)
        .map(|_| {
            session
                .add_element(&section, ElementKind::Text, None)
                .unwrap()
                .created_id
                .unwrap()
        })
        .collect();

    let result = session
        .reorder_elements(
            &section,
            vec![ids[2].clone(), "ghost".to_string(), ids[0].clone()],
        )
        .unwrap();
    assert!(result.applied);

    let order: Vec<(String, u32)> = session
        .document()
        .find_section(&section)
        .unwrap()
        .sorted_elements()
        .into_iter()
        .map(|e| (e.id.clone(), e.order))
        .collect();
    assert_eq!(
        order,
        vec![
            (ids[2].clone(), 0),
            (ids[0].clone(), 1),
            (ids[1].clone(), 2)
        ]
    );
    assert!(session.document().orders_are_dense());
}

#[test]
fn test_invalid_content_is_an_error() {
    let mut session = session();
    let id = session.add_section(SectionKind::Hero, None).unwrap().created_id.unwrap();
    let version = session.version();

    let result = session.update_section_content(&id, Locale::En, json!("not an object"));

    assert!(result.is_err());
    assert_eq!(session.version(), version);
}
