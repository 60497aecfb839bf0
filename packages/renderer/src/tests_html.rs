//! HTML compilation tests: escaping, void elements, pretty and compact output.

use pagecraft_editor::{SectionStore, SectionType};
use pagecraft_schema::{PageContent, Section};
use serde_json::json;

use crate::html::{compile_fragment, compile_page, CompileOptions};
use crate::renderer::render_section;
use crate::vnode::VNode;

fn compact() -> CompileOptions {
    CompileOptions {
        pretty: false,
        ..Default::default()
    }
}

#[test]
fn text_content_is_escaped() {
    let node = VNode::element("p").with_child(VNode::text("a < b & c"));
    assert_eq!(compile_fragment(&node, compact()), "<p>a &lt; b &amp; c</p>");
}

#[test]
fn attribute_values_are_escaped() {
    let node = VNode::element("a").with_attr("href", "?q=\"x\"&y='z'");
    assert_eq!(
        compile_fragment(&node, compact()),
        "<a href=\"?q=&quot;x&quot;&amp;y=&#39;z&#39;\"></a>"
    );
}

#[test]
fn raw_nodes_pass_through_unescaped() {
    let section = Section::from_value(&json!({
        "id": "s-1", "type": "custom",
        "content": { "html": "<marquee>hi</marquee>" }
    }))
    .unwrap();

    let html = compile_fragment(&render_section(&section), compact());
    assert!(html.contains("<marquee>hi</marquee>"));
}

#[test]
fn void_elements_self_close() {
    let node = VNode::element("div").with_child(
        VNode::element("img")
            .with_attr("src", "a.png")
            .with_attr("alt", "A"),
    );
    assert_eq!(
        compile_fragment(&node, compact()),
        "<div><img alt=\"A\" src=\"a.png\" /></div>"
    );
}

#[test]
fn styles_serialize_in_stable_order() {
    let node = VNode::element("div")
        .with_style("padding", "1rem")
        .with_style("background-color", "#111")
        .with_style("color", "#fff");

    assert_eq!(
        compile_fragment(&node, compact()),
        "<div style=\"background-color: #111; color: #fff; padding: 1rem;\"></div>"
    );
}

#[test]
fn pretty_output_indents_nested_elements() {
    let node = VNode::element("div")
        .with_child(VNode::element("p").with_child(VNode::text("hi")));

    let html = compile_fragment(&node, CompileOptions::default());
    assert_eq!(html, "<div>\n  <p>hi</p>\n</div>\n");
}

#[test]
fn compact_output_has_no_newlines() {
    let section = Section::from_value(&json!({
        "id": "s-1", "type": "hero",
        "content": { "title": "T", "buttonText": "Go", "buttonLink": "#x" }
    }))
    .unwrap();

    let html = compile_fragment(&render_section(&section), compact());
    assert!(!html.contains('\n'));
}

#[test]
fn page_output_wraps_sections_in_a_document() {
    let mut store = SectionStore::new();
    store.add_section(SectionType::Hero, None).unwrap();
    store
        .set_content_field(0, "title", json!("Launch <today>"))
        .unwrap();
    store.add_section(SectionType::Cta, None).unwrap();

    let (content, _) = PageContent::load(&store.to_value());
    let html = compile_page(
        &content,
        CompileOptions {
            title: "Acme & Co".to_string(),
            ..Default::default()
        },
    );

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Acme &amp; Co</title>"));
    assert!(html.contains("Launch &lt;today&gt;"));
    assert!(html.contains("data-section-type=\"hero\""));
    assert!(html.contains("data-section-type=\"cta\""));
    assert!(html.trim_end().ends_with("</html>"));
}
