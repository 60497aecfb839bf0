//! Store lifecycle, serialization, and undo/redo tests

use pagecraft_editor::{
    MoveDirection, Mutation, MutationError, SectionStore, SectionType, UndoStack,
};
use pagecraft_schema::Section;
use serde_json::json;

#[test]
fn hero_walkthrough() -> anyhow::Result<()> {
    let mut store = SectionStore::new();

    store.add_section(SectionType::Hero, None)?;
    store.set_content_field(0, "title", json!("Grow Your Business"))?;

    let doc = store.to_value();
    let sections = doc["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["type"], json!("hero"));
    assert_eq!(sections[0]["content"]["title"], json!("Grow Your Business"));
    assert!(!sections[0]["id"].as_str().unwrap().is_empty());
    Ok(())
}

#[test]
fn serialize_round_trips_through_load() {
    let mut store = SectionStore::new();
    store.add_section(SectionType::Hero, None).unwrap();
    store.add_section(SectionType::Features, None).unwrap();
    store
        .set_content_field(0, "subtitle", json!("Faster"))
        .unwrap();

    let doc = store.to_value();
    let (reloaded, report) = SectionStore::load(&doc);

    assert!(report.is_clean());
    assert_eq!(reloaded.serialize(), store.serialize());
    assert_eq!(reloaded.to_value(), doc);
}

#[test]
fn serialize_ignores_stale_order_fields() {
    // order fields disagree with array order; array order wins
    let doc = json!({ "sections": [
        { "id": "a", "type": "hero", "order": 9, "content": { "title": "First" } },
        { "id": "b", "type": "hero", "order": 0, "content": { "title": "Second" } },
    ]});

    let (store, _) = SectionStore::load(&doc);
    let serialized = store.to_value();
    let sections = serialized["sections"].as_array().unwrap();
    assert_eq!(sections[0]["content"]["title"], json!("First"));
    assert_eq!(sections[1]["content"]["title"], json!("Second"));
    // advisory metadata is written back as stored
    assert_eq!(sections[0]["order"], json!(9));
}

#[test]
fn version_increments_only_on_success() {
    let mut store = SectionStore::new();
    assert_eq!(store.version, 0);

    store.add_section(SectionType::Hero, None).unwrap();
    assert_eq!(store.version, 1);

    let _ = store.move_section(0, MoveDirection::Up);
    assert_eq!(store.version, 1);
}

#[test]
fn dirty_flag_tracks_saves() {
    let mut store = SectionStore::new();
    assert!(!store.is_dirty());

    store.add_section(SectionType::Cta, None).unwrap();
    assert!(store.is_dirty());

    store.mark_saved();
    assert!(!store.is_dirty());
}

#[test]
fn generated_batch_is_spliced_atomically() {
    let mut store = SectionStore::new();
    store.add_section(SectionType::Hero, None).unwrap();

    let candidates = vec![
        Section::with_default_content("", SectionType::Features, 0),
        Section::with_default_content("", SectionType::Cta, 0),
    ];

    let count = store.insert_generated(candidates).unwrap();
    assert_eq!(count, 2);
    assert_eq!(store.len(), 3);

    // fresh unique ids were assigned
    let ids: std::collections::HashSet<_> =
        store.sections().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids.len(), 3);
    assert!(!ids.contains(""));
}

#[test]
fn opaque_candidates_fail_the_whole_batch() {
    let doc = json!({ "sections": [
        { "id": "x", "type": "widget", "content": { "anything": 1 } },
    ]});
    let (loaded, _) = SectionStore::load(&doc);
    let opaque = loaded.sections()[0].clone();

    let mut store = SectionStore::new();
    store.add_section(SectionType::Hero, None).unwrap();
    let before = store.serialize();

    let batch = vec![
        Section::with_default_content("", SectionType::Cta, 0),
        opaque,
    ];
    assert!(store.insert_generated(batch).is_err());
    assert_eq!(store.serialize(), before);
}

#[test]
fn opaque_sections_survive_an_edit_session() {
    let doc = json!({ "sections": [
        { "id": "a", "type": "hero", "order": 0, "content": { "title": "Keep" } },
        { "id": "b", "type": "widget", "order": 1, "content": { "anything": 1 } },
    ]});

    // surface the load warnings in test output
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let (mut store, report) = SectionStore::load(&doc);
    assert_eq!(report.retained_opaque, 1);

    // editing the opaque section is rejected
    let result = store.set_content_field(1, "anything", json!(2));
    assert!(matches!(
        result,
        Err(pagecraft_editor::EditorError::Mutation(
            MutationError::NotEditable
        ))
    ));

    // envelope writes too: they could not survive a save
    let result = store.set_style_property(1, "backgroundColor", json!("#000"));
    assert!(matches!(
        result,
        Err(pagecraft_editor::EditorError::Mutation(
            MutationError::NotEditable
        ))
    ));

    // but it serializes back out verbatim
    store.set_content_field(0, "title", json!("Kept")).unwrap();
    let out = store.to_value();
    assert_eq!(out["sections"][1], doc["sections"][1]);
}

#[test]
fn undo_and_redo_restore_sequence_state() {
    let mut store = SectionStore::new();
    let mut stack = UndoStack::new();

    stack
        .apply(
            Mutation::InsertSection {
                index: 0,
                section: Section::with_default_content("s-1", SectionType::Hero, 0),
            },
            &mut store,
        )
        .unwrap();
    stack
        .apply(
            Mutation::SetContentField {
                index: 0,
                path: "title".to_string(),
                value: json!("Draft title"),
            },
            &mut store,
        )
        .unwrap();

    assert_eq!(
        store.sections()[0].content.to_value()["title"],
        json!("Draft title")
    );

    // undo the field write
    assert!(stack.undo(&mut store).unwrap());
    assert_eq!(store.sections()[0].content.to_value()["title"], json!(""));

    // undo the insert
    assert!(stack.undo(&mut store).unwrap());
    assert!(store.is_empty());
    assert!(!stack.can_undo());

    // redo both
    assert!(stack.redo(&mut store).unwrap());
    assert!(stack.redo(&mut store).unwrap());
    assert_eq!(
        store.sections()[0].content.to_value()["title"],
        json!("Draft title")
    );
    assert!(stack.can_undo());
}

#[test]
fn undo_of_move_restores_order() {
    let mut store = SectionStore::new();
    let mut stack = UndoStack::new();
    store.add_section(SectionType::Hero, None).unwrap();
    store.add_section(SectionType::Features, None).unwrap();
    store.add_section(SectionType::Cta, None).unwrap();

    let before: Vec<_> = store.sections().iter().map(|s| s.id.clone()).collect();

    stack
        .apply(
            Mutation::MoveSection {
                index: 1,
                direction: MoveDirection::Up,
            },
            &mut store,
        )
        .unwrap();
    assert!(stack.undo(&mut store).unwrap());

    let after: Vec<_> = store.sections().iter().map(|s| s.id.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn undo_of_remove_restores_the_section() {
    let mut store = SectionStore::new();
    let mut stack = UndoStack::new();
    store.add_section(SectionType::Hero, None).unwrap();
    store
        .set_content_field(0, "title", json!("Precious"))
        .unwrap();
    let id = store.sections()[0].id.clone();

    stack
        .apply(Mutation::RemoveSection { index: 0 }, &mut store)
        .unwrap();
    assert!(store.is_empty());

    assert!(stack.undo(&mut store).unwrap());
    assert_eq!(store.sections()[0].id, id);
    assert_eq!(
        store.sections()[0].content.to_value()["title"],
        json!("Precious")
    );
}

#[test]
fn undo_of_a_first_style_write_removes_the_envelope() {
    let mut store = SectionStore::new();
    let mut stack = UndoStack::new();
    store.add_section(SectionType::Hero, None).unwrap();
    assert!(store.sections()[0].style.is_none());

    stack
        .apply(
            Mutation::SetStyleProperty {
                index: 0,
                property: "backgroundColor".to_string(),
                value: json!("#1e3a8a"),
            },
            &mut store,
        )
        .unwrap();
    assert!(store.sections()[0].style.is_some());

    assert!(stack.undo(&mut store).unwrap());
    assert!(store.sections()[0].style.is_none());
    // the serialized section carries no style key either
    assert!(store.to_value()["sections"][0].get("style").is_none());

    assert!(stack.redo(&mut store).unwrap());
    assert_eq!(
        store.sections()[0]
            .style
            .as_ref()
            .unwrap()
            .background_color
            .as_deref(),
        Some("#1e3a8a")
    );
}

#[test]
fn undo_of_a_first_background_image_write_removes_the_envelope() {
    let mut store = SectionStore::new();
    let mut stack = UndoStack::new();
    store.add_section(SectionType::Hero, None).unwrap();

    stack
        .apply(
            Mutation::SetStyleProperty {
                index: 0,
                property: "backgroundImage.url".to_string(),
                value: json!("bg.png"),
            },
            &mut store,
        )
        .unwrap();
    assert!(store.sections()[0].style.is_some());

    assert!(stack.undo(&mut store).unwrap());
    assert!(store.sections()[0].style.is_none());
}

#[test]
fn undo_of_a_second_style_write_keeps_the_rest() {
    let mut store = SectionStore::new();
    let mut stack = UndoStack::new();
    store.add_section(SectionType::Hero, None).unwrap();

    stack
        .apply(
            Mutation::SetStyleProperty {
                index: 0,
                property: "backgroundColor".to_string(),
                value: json!("#1e3a8a"),
            },
            &mut store,
        )
        .unwrap();
    stack
        .apply(
            Mutation::SetStyleProperty {
                index: 0,
                property: "padding".to_string(),
                value: json!("4rem"),
            },
            &mut store,
        )
        .unwrap();

    assert!(stack.undo(&mut store).unwrap());
    let style = store.sections()[0].style.as_ref().unwrap();
    assert!(style.padding.is_none());
    assert_eq!(style.background_color.as_deref(), Some("#1e3a8a"));
}

#[test]
fn undo_of_a_first_image_write_removes_the_envelope() {
    let mut store = SectionStore::new();
    let mut stack = UndoStack::new();
    store.add_section(SectionType::Hero, None).unwrap();

    stack
        .apply(
            Mutation::SetImageProperty {
                index: 0,
                property: "leftImage".to_string(),
                value: json!("a.png"),
            },
            &mut store,
        )
        .unwrap();
    assert!(store.sections()[0].images.is_some());

    assert!(stack.undo(&mut store).unwrap());
    assert!(store.sections()[0].images.is_none());
}

#[test]
fn new_mutations_clear_the_redo_stack() {
    let mut store = SectionStore::new();
    let mut stack = UndoStack::new();

    stack
        .apply(
            Mutation::InsertSection {
                index: 0,
                section: Section::with_default_content("s-1", SectionType::Hero, 0),
            },
            &mut store,
        )
        .unwrap();
    stack.undo(&mut store).unwrap();
    assert!(stack.can_redo());

    stack
        .apply(
            Mutation::InsertSection {
                index: 0,
                section: Section::with_default_content("s-2", SectionType::Cta, 0),
            },
            &mut store,
        )
        .unwrap();
    assert!(!stack.can_redo());
}
