//! Style envelope and shared image arrangement tests.

use pagecraft_schema::Section;
use serde_json::json;

use crate::renderer::render_section;
use crate::vnode::VNode;

fn find<'a>(node: &'a VNode, pred: &dyn Fn(&VNode) -> bool) -> Option<&'a VNode> {
    if pred(node) {
        return Some(node);
    }
    node.children().iter().find_map(|child| find(child, pred))
}

fn find_class<'a>(node: &'a VNode, class: &str) -> Option<&'a VNode> {
    find(node, &|n| {
        n.attribute("class")
            .map_or(false, |c| c.split_whitespace().any(|part| part == class))
    })
}

fn hero_with(style: serde_json::Value) -> Section {
    Section::from_value(&json!({
        "id": "s-1", "type": "hero",
        "content": { "title": "T" },
        "style": style
    }))
    .unwrap()
}

#[test]
fn base_colors_and_padding_land_on_the_container() {
    let section = hero_with(json!({
        "backgroundColor": "#1e3a8a",
        "textColor": "#ffffff",
        "padding": "4rem 2rem"
    }));

    let node = render_section(&section);
    assert_eq!(node.style("background-color"), Some("#1e3a8a"));
    assert_eq!(node.style("color"), Some("#ffffff"));
    assert_eq!(node.style("padding"), Some("4rem 2rem"));
    // no background image, so no underlay
    assert!(find_class(&node, "pc-section-background").is_none());
}

#[test]
fn unstyled_sections_carry_no_inline_styles() {
    let section = Section::from_value(&json!({
        "id": "s-1", "type": "hero", "content": { "title": "T" }
    }))
    .unwrap();

    let node = render_section(&section);
    assert!(node.style("background-color").is_none());
    assert!(node.style("position").is_none());
}

#[test]
fn background_image_becomes_an_underlay_below_the_content() {
    let section = hero_with(json!({ "backgroundImage": {
        "url": "bg.png", "opacity": 0.35
    }}));

    let node = render_section(&section);
    assert_eq!(node.style("position"), Some("relative"));

    let layer = find_class(&node, "pc-section-background").expect("underlay");
    assert_eq!(layer.style("background-image"), Some("url('bg.png')"));
    assert_eq!(layer.style("opacity"), Some("0.35"));
    assert_eq!(layer.style("background-position"), Some("center"));
    assert_eq!(layer.style("background-size"), Some("cover"));
    assert_eq!(layer.style("background-repeat"), Some("no-repeat"));
    assert_eq!(layer.attribute("aria-hidden"), Some("true"));

    // the content sits in its own layer, unaffected by the image opacity
    let body = find_class(&node, "pc-section-body").expect("body wrapper");
    assert_eq!(body.style("position"), Some("relative"));
    assert!(body.style("opacity").is_none());
    assert!(find(body, &|n| n.text_content() == "T").is_some());
}

#[test]
fn out_of_range_opacity_is_clamped() {
    let high = hero_with(json!({ "backgroundImage": { "url": "bg.png", "opacity": 3.5 }}));
    let node = render_section(&high);
    let layer = find_class(&node, "pc-section-background").unwrap();
    assert_eq!(layer.style("opacity"), Some("1"));

    let low = hero_with(json!({ "backgroundImage": { "url": "bg.png", "opacity": -0.5 }}));
    let node = render_section(&low);
    let layer = find_class(&node, "pc-section-background").unwrap();
    assert_eq!(layer.style("opacity"), Some("0"));
}

#[test]
fn axis_positions_override_the_shorthand() {
    let section = hero_with(json!({ "backgroundImage": {
        "url": "bg.png", "position": "top", "positionX": "20%"
    }}));

    let node = render_section(&section);
    let layer = find_class(&node, "pc-section-background").unwrap();
    assert_eq!(layer.style("background-position"), Some("20% center"));
}

#[test]
fn rotation_adds_a_transform() {
    let section = hero_with(json!({ "backgroundImage": {
        "url": "bg.png", "rotation": 15
    }}));

    let node = render_section(&section);
    let layer = find_class(&node, "pc-section-background").unwrap();
    assert_eq!(layer.style("transform"), Some("rotate(15deg)"));
}

fn hero_with_images(images: serde_json::Value) -> Section {
    Section::from_value(&json!({
        "id": "s-1", "type": "hero",
        "content": { "title": "T" },
        "images": images
    }))
    .unwrap()
}

#[test]
fn image_left_puts_the_image_in_the_first_column() {
    let section = hero_with_images(json!({
        "layout": "image-left", "leftImage": "a.png"
    }));

    let node = render_section(&section);
    let row = find_class(&node, "pc-two-column").expect("column row");
    assert!(find(&row.children()[0], &|n| n.tag() == Some("img")).is_some());
    assert!(find(&row.children()[1], &|n| n.text_content() == "T").is_some());
}

#[test]
fn image_right_puts_the_image_in_the_second_column() {
    let section = hero_with_images(json!({
        "layout": "image-right", "rightImage": "b.png"
    }));

    let node = render_section(&section);
    let row = find_class(&node, "pc-two-column").expect("column row");
    assert!(find(&row.children()[0], &|n| n.text_content() == "T").is_some());
    let img = find(&row.children()[1], &|n| n.tag() == Some("img")).expect("image");
    assert_eq!(img.attribute("src"), Some("b.png"));
}

#[test]
fn missing_slot_renders_empty_without_collapsing() {
    let section = hero_with_images(json!({ "layout": "image-left" }));

    let node = render_section(&section);
    let row = find_class(&node, "pc-two-column").expect("layout is kept");
    assert_eq!(row.children().len(), 2);
    assert!(find(&row.children()[0], &|n| n.tag() == Some("img")).is_none());
    assert!(find_class(&row.children()[0], "pc-image-slot-empty").is_some());
}

#[test]
fn two_column_layout_stacks_content_above_the_image_row() {
    let section = hero_with_images(json!({
        "layout": "two-column", "leftImage": "a.png", "rightImage": "b.png"
    }));

    let node = render_section(&section);
    let stack = find_class(&node, "pc-layout-stack").expect("stack");
    assert_eq!(stack.children().len(), 2);
    assert!(find(&stack.children()[0], &|n| n.text_content() == "T").is_some());

    let row = find_class(&stack.children()[1], "pc-two-column").expect("image row");
    let srcs: Vec<_> = row
        .children()
        .iter()
        .filter_map(|col| find(col, &|n| n.tag() == Some("img")))
        .filter_map(|img| img.attribute("src"))
        .collect();
    assert_eq!(srcs, vec!["a.png", "b.png"]);
}

#[test]
fn two_column_with_one_image_keeps_the_empty_slot() {
    let section = hero_with_images(json!({
        "layout": "two-column", "leftImage": "a.png"
    }));

    let node = render_section(&section);
    let stack = find_class(&node, "pc-layout-stack").expect("stack");
    let row = find_class(&stack.children()[1], "pc-two-column").expect("image row");
    assert_eq!(row.children().len(), 2);
    assert!(find(&row.children()[0], &|n| n.tag() == Some("img")).is_some());
    assert!(find_class(&row.children()[1], "pc-image-slot-empty").is_some());
}

#[test]
fn images_without_a_layout_are_ignored() {
    let section = hero_with_images(json!({ "leftImage": "a.png" }));

    let node = render_section(&section);
    assert!(find_class(&node, "pc-two-column").is_none());
    assert!(find(&node, &|n| n.tag() == Some("img")).is_none());
}
