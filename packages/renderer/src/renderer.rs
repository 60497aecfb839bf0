//! # Section Renderer
//!
//! Pure mapping from a [`Section`] to a [`VNode`] tree, dispatched on the
//! section's type.
//!
//! ## Determinism Contract
//!
//! Rendering is fully deterministic and side-effect free. The same section
//! always produces the same tree: no counters, no random ids, no time or
//! environment dependence. Memoization and diffing rely on this.
//!
//! ## Dispatch Contract
//!
//! Exactly one branch fires per type. An opaque section (one whose type the
//! schema does not recognize) renders a neutral placeholder; the renderer
//! never fails on drifted content, so editor and renderer do not need to be
//! updated in lockstep.
//!
//! ## Style application order
//!
//! 1. `backgroundColor`/`textColor`/`padding` go on the section container.
//! 2. A `backgroundImage` becomes an absolutely positioned underlay at the
//!    configured opacity/position/size/repeat/rotation; the content sits in
//!    a relative wrapper above it and is unaffected by the layer's opacity.
//! 3. An `images.layout` wraps the content into the two-column arrangement:
//!    `image-left` → [image, content], `image-right` → [content, image],
//!    `two-column` → content above a two-slot image row. A layout with a
//!    missing image renders an empty slot; the layout never collapses.
//!    Composite section types honor their own `layout.ratio`; the shared
//!    `images` arrangement is a fixed 50/50 split.

use pagecraft_schema::{
    BackgroundImage, ColumnRatio, ContactColumn, ContactContent, CtaContent, FaqContent,
    FeatureItem, FeaturesContent, GalleryContent, HeroContent, ImageColumn, ImageLayout,
    NewsletterContent, PageContent, PricingContent, Section, SectionContent, SectionImages,
    StatsContent, StyleContent, TeamContent, TestimonialsContent, TextColumn, VideoColumn,
    VideoContent, VideoKind,
};

use crate::vnode::VNode;

/// Render a whole document, in array order.
pub fn render_document(content: &PageContent) -> Vec<VNode> {
    content.sections.iter().map(render_section).collect()
}

/// Render a single section to a virtual DOM tree.
pub fn render_section(section: &Section) -> VNode {
    let body = render_content(&section.content);

    let body = match &section.images {
        Some(images) if images.layout.is_some() => arrange_images(body, images),
        _ => body,
    };

    apply_style(body, section)
}

// ---------------------------------------------------------------------------
// Style envelope
// ---------------------------------------------------------------------------

fn apply_style(body: VNode, section: &Section) -> VNode {
    let mut container = VNode::element("section")
        .with_attr("class", "pc-section")
        .with_attr("data-section-id", section.id.clone())
        .with_attr("data-section-type", section.type_tag());

    let style = section.style.as_ref();

    if let Some(style) = style {
        container = container
            .with_style_opt("background-color", style.background_color.as_ref())
            .with_style_opt("color", style.text_color.as_ref())
            .with_style_opt("padding", style.padding.as_ref());
    }

    match style.and_then(|s| s.background_image.as_ref()) {
        Some(image) => container
            .with_style("position", "relative")
            .with_style("overflow", "hidden")
            .with_child(background_layer(image))
            .with_child(
                VNode::element("div")
                    .with_attr("class", "pc-section-body")
                    .with_style("position", "relative")
                    .with_child(body),
            ),
        None => container.with_child(body),
    }
}

fn background_layer(image: &BackgroundImage) -> VNode {
    let opacity = image.opacity.clamp(0.0, 1.0);

    let position = match (&image.position_x, &image.position_y) {
        (None, None) => image.position.clone(),
        (x, y) => format!(
            "{} {}",
            x.as_deref().unwrap_or("center"),
            y.as_deref().unwrap_or("center")
        ),
    };

    let mut layer = VNode::element("div")
        .with_attr("class", "pc-section-background")
        .with_attr("aria-hidden", "true")
        .with_style("position", "absolute")
        .with_style("inset", "0")
        .with_style("background-image", format!("url('{}')", image.url))
        .with_style("background-position", position)
        .with_style("background-size", image.size.clone())
        .with_style("background-repeat", image.repeat.clone())
        .with_style("opacity", format_number(opacity));

    if let Some(rotation) = image.rotation {
        layer = layer.with_style("transform", format!("rotate({}deg)", format_number(rotation)));
    }

    layer
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

// ---------------------------------------------------------------------------
// Shared two-column image arrangement
// ---------------------------------------------------------------------------

fn arrange_images(body: VNode, images: &SectionImages) -> VNode {
    let layout = match images.layout {
        Some(layout) => layout,
        None => return body,
    };

    match layout {
        ImageLayout::ImageLeft => two_column_row(
            image_slot(images.left_image.as_ref()),
            content_column(body),
            ColumnRatio::FiftyFifty,
        ),
        ImageLayout::ImageRight => two_column_row(
            content_column(body),
            image_slot(images.right_image.as_ref()),
            ColumnRatio::FiftyFifty,
        ),
        ImageLayout::TwoColumn => VNode::element("div")
            .with_attr("class", "pc-layout-stack")
            .with_child(body)
            .with_child(two_column_row(
                image_slot(images.left_image.as_ref()),
                image_slot(images.right_image.as_ref()),
                ColumnRatio::FiftyFifty,
            )),
    }
}

fn two_column_row(left: VNode, right: VNode, ratio: ColumnRatio) -> VNode {
    let (left_width, right_width) = ratio.widths();
    VNode::element("div")
        .with_attr("class", "pc-two-column")
        .with_style("display", "flex")
        .with_style("gap", "2rem")
        .with_child(column(left, left_width))
        .with_child(column(right, right_width))
}

fn column(inner: VNode, width: &str) -> VNode {
    VNode::element("div")
        .with_attr("class", "pc-column")
        .with_style("flex-basis", width)
        .with_child(inner)
}

fn content_column(body: VNode) -> VNode {
    VNode::element("div")
        .with_attr("class", "pc-column-content")
        .with_child(body)
}

/// A configured image slot. A missing image renders an empty placeholder so
/// the surrounding layout keeps both columns.
fn image_slot(url: Option<&String>) -> VNode {
    match url {
        Some(url) => VNode::element("div")
            .with_attr("class", "pc-image-slot")
            .with_child(
                VNode::element("img")
                    .with_attr("src", url.clone())
                    .with_attr("alt", ""),
            ),
        None => VNode::element("div").with_attr("class", "pc-image-slot pc-image-slot-empty"),
    }
}

// ---------------------------------------------------------------------------
// Per-type content rendering
// ---------------------------------------------------------------------------

fn render_content(content: &SectionContent) -> VNode {
    match content {
        SectionContent::Hero(c) => render_hero(c),
        SectionContent::Features(c) => render_features(c),
        SectionContent::Cta(c) => render_cta(c),
        SectionContent::Contact(c) => render_contact(c),
        SectionContent::Pricing(c) => render_pricing(c),
        SectionContent::Testimonials(c) => render_testimonials(c),
        SectionContent::Faq(c) => render_faq(c),
        SectionContent::Team(c) => render_team(c),
        SectionContent::Stats(c) => render_stats(c),
        SectionContent::Gallery(c) => render_gallery(c),
        SectionContent::Video(c) => render_video(c),
        SectionContent::Newsletter(c) => render_newsletter(c),
        SectionContent::Custom(c) => VNode::element("div")
            .with_attr("class", "pc-custom")
            .with_child(VNode::raw(c.html.clone())),
        SectionContent::Style(c) => render_style_block(c),
        SectionContent::TwoColumnTextImage(c) => two_column_row(
            render_text_column(&c.text_column),
            render_image_column(&c.image_column),
            c.layout.ratio,
        ),
        SectionContent::TwoColumnImageText(c) => two_column_row(
            render_image_column(&c.image_column),
            render_text_column(&c.text_column),
            c.layout.ratio,
        ),
        SectionContent::TwoColumnTextVideo(c) => two_column_row(
            render_text_column(&c.text_column),
            render_video_column(&c.video_column),
            c.layout.ratio,
        ),
        SectionContent::TwoColumnFeaturesImage(c) => two_column_row(
            VNode::element("div")
                .with_attr("class", "pc-features")
                .with_child(heading(2, &c.features_column.title))
                .with_child_opt(c.features_column.subtitle.as_ref().map(|s| subtitle(s)))
                .with_child(feature_grid(&c.features_column.features)),
            render_image_column(&c.image_column),
            c.layout.ratio,
        ),
        SectionContent::TwoColumnTextContact(c) => two_column_row(
            render_text_column(&c.text_column),
            render_contact_column(&c.contact_column),
            c.layout.ratio,
        ),
        SectionContent::TwoColumnContactImage(c) => two_column_row(
            render_contact_column(&c.contact_column),
            render_image_column(&c.image_column),
            c.layout.ratio,
        ),
        SectionContent::Opaque { type_tag, .. } => render_unsupported(type_tag),
    }
}

/// Neutral fallback for drifted or unknown section types.
fn render_unsupported(type_tag: &str) -> VNode {
    tracing::warn!(type_tag, "rendering placeholder for unsupported section type");
    VNode::element("div")
        .with_attr("class", "pc-unsupported")
        .with_attr("data-section-type", type_tag)
        .with_child(VNode::text("This content type is not supported."))
}

fn heading(level: u8, text: &str) -> VNode {
    VNode::element(format!("h{level}")).with_child(VNode::text(text))
}

fn subtitle(text: &str) -> VNode {
    VNode::element("p")
        .with_attr("class", "pc-subtitle")
        .with_child(VNode::text(text))
}

fn paragraph(text: &str) -> VNode {
    VNode::element("p").with_child(VNode::text(text))
}

fn link_button(text: &str, href: Option<&String>) -> VNode {
    VNode::element("a")
        .with_attr("class", "pc-button")
        .with_attr("href", href.map(String::as_str).unwrap_or("#").to_string())
        .with_child(VNode::text(text))
}

fn render_hero(content: &HeroContent) -> VNode {
    VNode::element("div")
        .with_attr("class", "pc-hero")
        .with_style_opt("background-color", content.background_color.as_ref())
        .with_style_opt("background-image", content
            .background_image
            .as_ref()
            .map(|url| format!("url('{url}')"))
            .as_ref())
        .with_child(heading(1, &content.title))
        .with_child_opt(content.subtitle.as_ref().map(|s| subtitle(s)))
        .with_child_opt(content.description.as_ref().map(|d| paragraph(d)))
        .with_child_opt(
            content
                .button_text
                .as_ref()
                .map(|text| link_button(text, content.button_link.as_ref())),
        )
}

fn feature_grid(features: &[FeatureItem]) -> VNode {
    let items = features
        .iter()
        .map(|feature| {
            VNode::element("div")
                .with_attr("class", "pc-feature")
                .with_child(
                    VNode::element("span")
                        .with_attr("class", "pc-icon")
                        .with_attr("data-icon", feature.icon_name.clone()),
                )
                .with_child(heading(3, &feature.title))
                .with_child(paragraph(&feature.description))
        })
        .collect();

    VNode::element("div")
        .with_attr("class", "pc-feature-grid")
        .with_children(items)
}

fn render_features(content: &FeaturesContent) -> VNode {
    VNode::element("div")
        .with_attr("class", "pc-features")
        .with_child(heading(2, &content.title))
        .with_child_opt(content.subtitle.as_ref().map(|s| subtitle(s)))
        .with_child(feature_grid(&content.features))
}

fn render_cta(content: &CtaContent) -> VNode {
    VNode::element("div")
        .with_attr("class", "pc-cta")
        .with_style_opt("background-color", content.background_color.as_ref())
        .with_child(heading(2, &content.title))
        .with_child_opt(content.description.as_ref().map(|d| paragraph(d)))
        .with_child(link_button(&content.button_text, Some(&content.button_link)))
}

fn render_contact(content: &ContactContent) -> VNode {
    let mut root = VNode::element("div")
        .with_attr("class", "pc-contact")
        .with_child(
            heading(2, &content.title).with_style_opt("color", content.title_color.as_ref()),
        )
        .with_child_opt(content.description.as_ref().map(|d| {
            paragraph(d).with_style_opt("color", content.description_color.as_ref())
        }))
        .with_style_opt("font-family", content.font_family.as_ref());

    if content.use_dedicated_page == Some(true) {
        let label = content
            .dedicated_page_button_text
            .as_deref()
            .unwrap_or("Contact us");
        root = root.with_child(link_button(label, Some(&"./contact".to_string())));
    } else {
        root = root.with_child(contact_form(
            &content.form_fields,
            &content.submit_button_text,
        ));
    }
    root
}

fn contact_form(
    fields: &[pagecraft_schema::FormField],
    submit_label: &str,
) -> VNode {
    let mut form = VNode::element("form").with_attr("class", "pc-form");

    for field in fields {
        let control = match field.field_type {
            pagecraft_schema::FieldKind::Textarea => {
                let mut node = VNode::element("textarea").with_attr("name", field.name.clone());
                if let Some(placeholder) = &field.placeholder {
                    node = node.with_attr("placeholder", placeholder.clone());
                }
                if field.required {
                    node = node.with_attr("required", "required");
                }
                node
            }
            kind => {
                let input_type = match kind {
                    pagecraft_schema::FieldKind::Email => "email",
                    pagecraft_schema::FieldKind::Tel => "tel",
                    _ => "text",
                };
                let mut node = VNode::element("input")
                    .with_attr("type", input_type)
                    .with_attr("name", field.name.clone());
                if let Some(placeholder) = &field.placeholder {
                    node = node.with_attr("placeholder", placeholder.clone());
                }
                if field.required {
                    node = node.with_attr("required", "required");
                }
                node
            }
        };

        form = form.with_child(
            VNode::element("label")
                .with_attr("class", "pc-field")
                .with_child(VNode::text(field.label.clone()))
                .with_child(control),
        );
    }

    form.with_child(
        VNode::element("button")
            .with_attr("class", "pc-button")
            .with_attr("type", "submit")
            .with_child(VNode::text(submit_label)),
    )
}

fn render_pricing(content: &PricingContent) -> VNode {
    let plans = content
        .plans
        .iter()
        .map(|plan| {
            let class = if plan.highlighted == Some(true) {
                "pc-plan pc-plan-highlighted"
            } else {
                "pc-plan"
            };

            let mut features = VNode::element("ul").with_attr("class", "pc-plan-features");
            for feature in &plan.features {
                features = features
                    .with_child(VNode::element("li").with_child(VNode::text(feature.clone())));
            }

            VNode::element("div")
                .with_attr("class", class)
                .with_child(heading(3, &plan.name))
                .with_child(
                    VNode::element("div")
                        .with_attr("class", "pc-plan-price")
                        .with_child(VNode::text(plan.price.clone()))
                        .with_child_opt(plan.period.as_ref().map(|period| {
                            VNode::element("span")
                                .with_attr("class", "pc-plan-period")
                                .with_child(VNode::text(format!("/{period}")))
                        })),
                )
                .with_child_opt(plan.description.as_ref().map(|d| paragraph(d)))
                .with_child(features)
                .with_child(link_button(&plan.button_text, Some(&plan.button_link)))
        })
        .collect();

    VNode::element("div")
        .with_attr("class", "pc-pricing")
        .with_child(heading(2, &content.title))
        .with_child_opt(content.subtitle.as_ref().map(|s| subtitle(s)))
        .with_child(
            VNode::element("div")
                .with_attr("class", "pc-plan-grid")
                .with_children(plans),
        )
}

fn render_testimonials(content: &TestimonialsContent) -> VNode {
    let items = content
        .testimonials
        .iter()
        .map(|item| {
            let mut caption = VNode::element("figcaption")
                .with_child(VNode::text(item.name.clone()));
            let role = match (&item.position, &item.company) {
                (Some(position), Some(company)) => Some(format!("{position}, {company}")),
                (Some(position), None) => Some(position.clone()),
                (None, Some(company)) => Some(company.clone()),
                (None, None) => None,
            };
            if let Some(role) = role {
                caption = caption.with_child(
                    VNode::element("span")
                        .with_attr("class", "pc-role")
                        .with_child(VNode::text(role)),
                );
            }

            let mut figure = VNode::element("figure").with_attr("class", "pc-testimonial");
            if let Some(avatar) = &item.avatar {
                figure = figure.with_child(
                    VNode::element("img")
                        .with_attr("class", "pc-avatar")
                        .with_attr("src", avatar.clone())
                        .with_attr("alt", item.name.clone()),
                );
            }
            if let Some(rating) = item.rating {
                figure = figure.with_child(
                    VNode::element("span")
                        .with_attr("class", "pc-rating")
                        .with_attr("data-rating", format_number(rating)),
                );
            }
            figure
                .with_child(
                    VNode::element("blockquote").with_child(VNode::text(item.content.clone())),
                )
                .with_child(caption)
        })
        .collect();

    VNode::element("div")
        .with_attr("class", "pc-testimonials")
        .with_child(heading(2, &content.title))
        .with_child_opt(content.subtitle.as_ref().map(|s| subtitle(s)))
        .with_child(
            VNode::element("div")
                .with_attr("class", "pc-testimonial-grid")
                .with_children(items),
        )
}

fn render_faq(content: &FaqContent) -> VNode {
    let mut list = VNode::element("dl").with_attr("class", "pc-faq-list");
    for item in &content.items {
        list = list
            .with_child(VNode::element("dt").with_child(VNode::text(item.question.clone())))
            .with_child(VNode::element("dd").with_child(VNode::text(item.answer.clone())));
    }

    VNode::element("div")
        .with_attr("class", "pc-faq")
        .with_child(heading(2, &content.title))
        .with_child_opt(content.subtitle.as_ref().map(|s| subtitle(s)))
        .with_child(list)
}

fn render_team(content: &TeamContent) -> VNode {
    let members = content
        .members
        .iter()
        .map(|member| {
            let mut card = VNode::element("div").with_attr("class", "pc-member");
            if let Some(avatar) = &member.avatar {
                card = card.with_child(
                    VNode::element("img")
                        .with_attr("class", "pc-avatar")
                        .with_attr("src", avatar.clone())
                        .with_attr("alt", member.name.clone()),
                );
            }
            card = card
                .with_child(heading(3, &member.name))
                .with_child(subtitle(&member.position))
                .with_child_opt(member.bio.as_ref().map(|b| paragraph(b)));

            if let Some(social) = &member.social {
                let mut row = VNode::element("div").with_attr("class", "pc-social");
                for (label, href) in [
                    ("Twitter", &social.twitter),
                    ("LinkedIn", &social.linkedin),
                    ("GitHub", &social.github),
                ] {
                    if let Some(href) = href {
                        row = row.with_child(
                            VNode::element("a")
                                .with_attr("href", href.clone())
                                .with_child(VNode::text(label)),
                        );
                    }
                }
                card = card.with_child(row);
            }
            card
        })
        .collect();

    VNode::element("div")
        .with_attr("class", "pc-team")
        .with_child(heading(2, &content.title))
        .with_child_opt(content.subtitle.as_ref().map(|s| subtitle(s)))
        .with_child(
            VNode::element("div")
                .with_attr("class", "pc-member-grid")
                .with_children(members),
        )
}

fn render_stats(content: &StatsContent) -> VNode {
    let stats = content
        .stats
        .iter()
        .map(|stat| {
            VNode::element("div")
                .with_attr("class", "pc-stat")
                .with_child(
                    VNode::element("div")
                        .with_attr("class", "pc-stat-value")
                        .with_child(VNode::text(stat.value.clone())),
                )
                .with_child(
                    VNode::element("div")
                        .with_attr("class", "pc-stat-label")
                        .with_child(VNode::text(stat.label.clone())),
                )
                .with_child_opt(stat.description.as_ref().map(|d| paragraph(d)))
        })
        .collect();

    VNode::element("div")
        .with_attr("class", "pc-stats")
        .with_style_opt("background-color", content.background_color.as_ref())
        .with_child_opt(content.title.as_ref().map(|t| heading(2, t)))
        .with_child_opt(content.subtitle.as_ref().map(|s| subtitle(s)))
        .with_child(
            VNode::element("div")
                .with_attr("class", "pc-stat-grid")
                .with_children(stats),
        )
}

fn render_gallery(content: &GalleryContent) -> VNode {
    let columns = content.columns.unwrap_or(3).max(1);
    let figures = content
        .images
        .iter()
        .map(|image| {
            VNode::element("figure")
                .with_attr("class", "pc-gallery-item")
                .with_child(
                    VNode::element("img")
                        .with_attr("src", image.url.clone())
                        .with_attr("alt", image.alt.clone()),
                )
                .with_child_opt(image.caption.as_ref().map(|caption| {
                    VNode::element("figcaption").with_child(VNode::text(caption.clone()))
                }))
        })
        .collect();

    VNode::element("div")
        .with_attr("class", "pc-gallery")
        .with_child(heading(2, &content.title))
        .with_child_opt(content.subtitle.as_ref().map(|s| subtitle(s)))
        .with_child(
            VNode::element("div")
                .with_attr("class", "pc-gallery-grid")
                .with_style("display", "grid")
                .with_style(
                    "grid-template-columns",
                    format!("repeat({columns}, 1fr)"),
                )
                .with_children(figures),
        )
}

fn video_player(url: &str, kind: VideoKind, thumbnail: Option<&String>) -> VNode {
    match kind {
        VideoKind::Youtube | VideoKind::Vimeo => VNode::element("iframe")
            .with_attr("class", "pc-video-frame")
            .with_attr("src", url.to_string())
            .with_attr("allowfullscreen", "allowfullscreen"),
        VideoKind::Direct => {
            let mut node = VNode::element("video")
                .with_attr("class", "pc-video-frame")
                .with_attr("src", url.to_string())
                .with_attr("controls", "controls");
            if let Some(thumbnail) = thumbnail {
                node = node.with_attr("poster", thumbnail.clone());
            }
            node
        }
    }
}

fn render_video(content: &VideoContent) -> VNode {
    VNode::element("div")
        .with_attr("class", "pc-video")
        .with_child_opt(content.title.as_ref().map(|t| heading(2, t)))
        .with_child_opt(content.subtitle.as_ref().map(|s| subtitle(s)))
        .with_child(video_player(
            &content.video_url,
            content.video_type,
            content.thumbnail.as_ref(),
        ))
        .with_child_opt(content.description.as_ref().map(|d| paragraph(d)))
}

fn render_newsletter(content: &NewsletterContent) -> VNode {
    let mut input = VNode::element("input")
        .with_attr("type", "email")
        .with_attr("name", "email")
        .with_attr("required", "required");
    if let Some(placeholder) = &content.placeholder {
        input = input.with_attr("placeholder", placeholder.clone());
    }

    VNode::element("div")
        .with_attr("class", "pc-newsletter")
        .with_style_opt("background-color", content.background_color.as_ref())
        .with_child(heading(2, &content.title))
        .with_child_opt(content.description.as_ref().map(|d| paragraph(d)))
        .with_child(
            VNode::element("form")
                .with_attr("class", "pc-form")
                .with_child(input)
                .with_child(
                    VNode::element("button")
                        .with_attr("class", "pc-button")
                        .with_attr("type", "submit")
                        .with_child(VNode::text(content.button_text.clone())),
                ),
        )
        .with_child_opt(content.privacy_text.as_ref().map(|text| {
            VNode::element("p")
                .with_attr("class", "pc-privacy")
                .with_child(VNode::text(text.clone()))
        }))
}

fn render_style_block(content: &StyleContent) -> VNode {
    VNode::element("div")
        .with_attr("class", "pc-styled-text")
        .with_child(heading(2, &content.title))
        .with_child_opt(content.description.as_ref().map(|d| paragraph(d)))
}

// ---------------------------------------------------------------------------
// Composite columns
// ---------------------------------------------------------------------------

fn render_text_column(column: &TextColumn) -> VNode {
    let weight = |bold: Option<bool>| if bold == Some(true) { Some("bold") } else { None };
    let style = |italic: Option<bool>| if italic == Some(true) { Some("italic") } else { None };

    let mut node = VNode::element("div")
        .with_attr("class", "pc-text-column")
        .with_style_opt("font-family", column.font_family.as_ref());

    if let Some(title) = &column.title {
        let mut h = heading(2, title).with_style_opt("color", column.title_color.as_ref());
        if let Some(weight) = weight(column.title_bold) {
            h = h.with_style("font-weight", weight);
        }
        if let Some(font_style) = style(column.title_italic) {
            h = h.with_style("font-style", font_style);
        }
        node = node.with_child(h);
    }

    if let Some(text) = &column.subtitle {
        let mut sub = subtitle(text).with_style_opt("color", column.subtitle_color.as_ref());
        if let Some(weight) = weight(column.subtitle_bold) {
            sub = sub.with_style("font-weight", weight);
        }
        if let Some(font_style) = style(column.subtitle_italic) {
            sub = sub.with_style("font-style", font_style);
        }
        node = node.with_child(sub);
    }

    if let Some(description) = &column.description {
        node = node.with_child(
            paragraph(description).with_style_opt("color", column.description_color.as_ref()),
        );
    }

    if let Some(text) = &column.button_text {
        node = node.with_child(link_button(text, column.button_link.as_ref()));
    }

    node
}

fn render_image_column(column: &ImageColumn) -> VNode {
    VNode::element("figure")
        .with_attr("class", "pc-image-column")
        .with_child(
            VNode::element("img")
                .with_attr("src", column.image_url.clone())
                .with_attr("alt", column.image_alt.clone()),
        )
        .with_child_opt(column.caption.as_ref().map(|caption| {
            VNode::element("figcaption").with_child(VNode::text(caption.clone()))
        }))
}

fn render_video_column(column: &VideoColumn) -> VNode {
    VNode::element("div")
        .with_attr("class", "pc-video-column")
        .with_child(video_player(
            &column.video_url,
            column.video_type,
            column.thumbnail.as_ref(),
        ))
}

fn render_contact_column(column: &ContactColumn) -> VNode {
    let mut node = VNode::element("div").with_attr("class", "pc-contact-column");

    if column.use_dedicated_page == Some(true) {
        let label = column
            .dedicated_page_button_text
            .as_deref()
            .unwrap_or("Contact us");
        node = node.with_child(link_button(label, Some(&"./contact".to_string())));
    } else {
        node = node.with_child(contact_form(
            &column.form_fields,
            &column.submit_button_text,
        ));
    }
    node
}
