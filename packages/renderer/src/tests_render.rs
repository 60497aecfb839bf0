//! Dispatch tests: one branch per section type, opaque fallback, determinism.

use pagecraft_schema::{PageContent, Section, SectionType};
use serde_json::json;

use crate::renderer::{render_document, render_section};
use crate::vnode::VNode;

fn find<'a>(node: &'a VNode, pred: &dyn Fn(&VNode) -> bool) -> Option<&'a VNode> {
    if pred(node) {
        return Some(node);
    }
    node.children().iter().find_map(|child| find(child, pred))
}

fn find_tag<'a>(node: &'a VNode, tag: &str) -> Option<&'a VNode> {
    find(node, &|n| n.tag() == Some(tag))
}

fn find_class<'a>(node: &'a VNode, class: &str) -> Option<&'a VNode> {
    find(node, &|n| {
        n.attribute("class")
            .map_or(false, |c| c.split_whitespace().any(|part| part == class))
    })
}

fn section(value: serde_json::Value) -> Section {
    Section::from_value(&value).unwrap()
}

#[test]
fn every_type_renders_a_tagged_container() {
    for ty in SectionType::ALL {
        let section = Section::with_default_content("s-1", ty, 0);
        let node = render_section(&section);

        assert_eq!(node.tag(), Some("section"), "container for {ty}");
        assert_eq!(node.attribute("data-section-type"), Some(ty.as_tag()));
        assert_eq!(node.attribute("data-section-id"), Some("s-1"));
        assert!(!node.children().is_empty(), "empty tree for {ty}");
    }
}

#[test]
fn rendering_is_deterministic() {
    let section = section(json!({
        "id": "s-1", "type": "hero",
        "content": { "title": "T", "subtitle": "S", "buttonText": "Go", "buttonLink": "#x" },
        "style": { "backgroundColor": "#111", "backgroundImage": { "url": "bg.png" } }
    }));

    assert_eq!(render_section(&section), render_section(&section));
}

#[test]
fn hero_renders_heading_and_button() {
    let section = section(json!({
        "id": "s-1", "type": "hero",
        "content": {
            "title": "Grow Your Business",
            "subtitle": "Faster",
            "buttonText": "Get started",
            "buttonLink": "#contact"
        }
    }));

    let node = render_section(&section);
    let h1 = find_tag(&node, "h1").expect("hero headline");
    assert_eq!(h1.text_content(), "Grow Your Business");

    let button = find_class(&node, "pc-button").expect("cta button");
    assert_eq!(button.tag(), Some("a"));
    assert_eq!(button.attribute("href"), Some("#contact"));
    assert_eq!(button.text_content(), "Get started");
}

#[test]
fn features_render_one_card_per_item() {
    let section = section(json!({
        "id": "s-1", "type": "features",
        "content": { "title": "Why us", "features": [
            { "iconName": "Zap", "title": "Fast", "description": "Quick." },
            { "iconName": "Shield", "title": "Safe", "description": "Secure." }
        ]}
    }));

    let node = render_section(&section);
    let grid = find_class(&node, "pc-feature-grid").expect("feature grid");
    assert_eq!(grid.children().len(), 2);
    assert_eq!(
        grid.children()[0]
            .children()[0]
            .attribute("data-icon"),
        Some("Zap")
    );
}

#[test]
fn opaque_sections_render_a_placeholder() {
    let doc = json!({ "sections": [
        { "id": "x", "type": "carousel", "content": { "slides": [] } }
    ]});
    let (content, report) = PageContent::load(&doc);
    assert_eq!(report.retained_opaque, 1);

    let node = render_section(&content.sections[0]);
    assert_eq!(node.attribute("data-section-type"), Some("carousel"));

    let placeholder = find_class(&node, "pc-unsupported").expect("placeholder");
    assert_eq!(placeholder.text_content(), "This content type is not supported.");
    // none of the source content leaks into the placeholder
    assert!(!node.text_content().contains("slides"));
}

#[test]
fn custom_html_passes_through_as_raw() {
    let section = section(json!({
        "id": "s-1", "type": "custom",
        "content": { "html": "<marquee>hi</marquee>" }
    }));

    let node = render_section(&section);
    let raw = find(&node, &|n| matches!(n, VNode::Raw { .. })).expect("raw node");
    assert_eq!(raw.text_content(), "<marquee>hi</marquee>");
}

#[test]
fn video_kind_selects_the_player() {
    let embedded = section(json!({
        "id": "s-1", "type": "video",
        "content": { "videoUrl": "https://youtube.com/embed/x", "videoType": "youtube" }
    }));
    assert!(find_tag(&render_section(&embedded), "iframe").is_some());

    let direct = section(json!({
        "id": "s-2", "type": "video",
        "content": { "videoUrl": "movie.mp4", "videoType": "direct", "thumbnail": "poster.png" }
    }));
    let node = render_section(&direct);
    let player = find_tag(&node, "video").expect("native player");
    assert_eq!(player.attribute("poster"), Some("poster.png"));
}

#[test]
fn contact_dedicated_page_renders_a_link_instead_of_the_form() {
    let inline = section(json!({
        "id": "s-1", "type": "contact",
        "content": {
            "title": "Reach us",
            "formFields": [
                { "name": "email", "label": "Email", "type": "email", "required": true }
            ],
            "submitButtonText": "Send"
        }
    }));
    assert!(find_tag(&render_section(&inline), "form").is_some());

    let dedicated = section(json!({
        "id": "s-2", "type": "contact",
        "content": {
            "title": "Reach us",
            "formFields": [],
            "submitButtonText": "Send",
            "useDedicatedPage": true,
            "dedicatedPageButtonText": "Write to us"
        }
    }));
    let node = render_section(&dedicated);
    assert!(find_tag(&node, "form").is_none());
    let link = find_class(&node, "pc-button").expect("page link");
    assert_eq!(link.text_content(), "Write to us");
}

#[test]
fn composite_ratio_sets_column_widths() {
    let section = section(json!({
        "id": "s-1", "type": "two_column_text_image",
        "content": {
            "textColumn": { "title": "Left" },
            "imageColumn": { "imageUrl": "a.png", "imageAlt": "A" },
            "layout": { "ratio": "60-40" }
        }
    }));

    let node = render_section(&section);
    let row = find_class(&node, "pc-two-column").expect("column row");
    assert_eq!(row.children().len(), 2);
    assert_eq!(row.children()[0].style("flex-basis"), Some("60%"));
    assert_eq!(row.children()[1].style("flex-basis"), Some("40%"));
    assert!(find_tag(&row.children()[1], "img").is_some());
}

#[test]
fn gallery_columns_drive_the_grid() {
    let section = section(json!({
        "id": "s-1", "type": "gallery",
        "content": { "title": "Shots", "columns": 4, "images": [
            { "url": "a.png", "alt": "A" },
            { "url": "b.png", "alt": "B", "caption": "Second" }
        ]}
    }));

    let node = render_section(&section);
    let grid = find_class(&node, "pc-gallery-grid").expect("grid");
    assert_eq!(grid.style("grid-template-columns"), Some("repeat(4, 1fr)"));
    assert_eq!(grid.children().len(), 2);
    assert!(find_tag(&grid.children()[1], "figcaption").is_some());
}

#[test]
fn documents_render_in_array_order() {
    let doc = json!({ "sections": [
        { "id": "a", "type": "hero", "order": 7, "content": { "title": "First" } },
        { "id": "b", "type": "cta", "order": 0, "content": {
            "title": "Second", "buttonText": "Go", "buttonLink": "#x"
        }}
    ]});
    let (content, _) = PageContent::load(&doc);

    let nodes = render_document(&content);
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].attribute("data-section-id"), Some("a"));
    assert_eq!(nodes[1].attribute("data-section-id"), Some("b"));
}
