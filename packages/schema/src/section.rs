//! Section type definitions and validation.
//!
//! A [`Section`] is one content block of a landing page. Its payload is the
//! tagged union [`SectionContent`]: one variant per member of the closed
//! [`SectionType`] enumeration, so a section whose content does not match its
//! declared type is unrepresentable once constructed. Validation happens at
//! the boundary, in [`Section::from_value`], and rejects a candidate as a
//! whole.
//!
//! On the wire a section is the flat object
//! `{ id, type, order, content, style?, images? }` with camelCase content
//! fields. Serde routes both directions through the private `RawSection`
//! shape so the derived impls share the strict path.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::style::{SectionImages, SectionStyle};

/// The closed enumeration of section types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Hero,
    Features,
    Cta,
    Contact,
    Pricing,
    Testimonials,
    Faq,
    Team,
    Stats,
    Gallery,
    Video,
    Newsletter,
    Custom,
    Style,
    TwoColumnTextImage,
    TwoColumnImageText,
    TwoColumnTextVideo,
    TwoColumnFeaturesImage,
    TwoColumnTextContact,
    TwoColumnContactImage,
}

impl SectionType {
    /// All members, in wire-tag order. The single canonical allow-list: AI
    /// output, document load, and template instantiation all validate
    /// against this set.
    pub const ALL: [SectionType; 20] = [
        SectionType::Hero,
        SectionType::Features,
        SectionType::Cta,
        SectionType::Contact,
        SectionType::Pricing,
        SectionType::Testimonials,
        SectionType::Faq,
        SectionType::Team,
        SectionType::Stats,
        SectionType::Gallery,
        SectionType::Video,
        SectionType::Newsletter,
        SectionType::Custom,
        SectionType::Style,
        SectionType::TwoColumnTextImage,
        SectionType::TwoColumnImageText,
        SectionType::TwoColumnTextVideo,
        SectionType::TwoColumnFeaturesImage,
        SectionType::TwoColumnTextContact,
        SectionType::TwoColumnContactImage,
    ];

    pub fn as_tag(&self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::Features => "features",
            SectionType::Cta => "cta",
            SectionType::Contact => "contact",
            SectionType::Pricing => "pricing",
            SectionType::Testimonials => "testimonials",
            SectionType::Faq => "faq",
            SectionType::Team => "team",
            SectionType::Stats => "stats",
            SectionType::Gallery => "gallery",
            SectionType::Video => "video",
            SectionType::Newsletter => "newsletter",
            SectionType::Custom => "custom",
            SectionType::Style => "style",
            SectionType::TwoColumnTextImage => "two_column_text_image",
            SectionType::TwoColumnImageText => "two_column_image_text",
            SectionType::TwoColumnTextVideo => "two_column_text_video",
            SectionType::TwoColumnFeaturesImage => "two_column_features_image",
            SectionType::TwoColumnTextContact => "two_column_text_contact",
            SectionType::TwoColumnContactImage => "two_column_contact_image",
        }
    }

    pub fn from_tag(tag: &str) -> Option<SectionType> {
        SectionType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_tag() == tag)
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// One content block of a landing page.
///
/// `id` is opaque and unique within a document's section sequence, assigned
/// at creation and never reused. The section's type is carried by the
/// `content` variant and is immutable after creation; changing semantics
/// means removing the section and adding a new one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawSection")]
pub struct Section {
    pub id: String,

    /// Advisory position hint. The section's index in the containing
    /// sequence is the source of truth; this field may be stale.
    pub order: i64,

    pub content: SectionContent,

    pub style: Option<SectionStyle>,

    pub images: Option<SectionImages>,
}

impl Section {
    /// Construct a section with the type-appropriate default content.
    ///
    /// The result always passes [`Section::from_value`] after serialization.
    pub fn with_default_content(id: impl Into<String>, ty: SectionType, order: i64) -> Self {
        Self {
            id: id.into(),
            order,
            content: SectionContent::default_for(ty),
            style: None,
            images: None,
        }
    }

    /// Validate a candidate JSON value as a section. This is the single
    /// strict validation path; rejection is whole-candidate.
    ///
    /// A missing `id` is tolerated (the store assigns a fresh one when the
    /// section enters a sequence); a missing `order` defaults to 0.
    pub fn from_value(value: &Value) -> Result<Section, SchemaError> {
        let object = value.as_object().ok_or(SchemaError::NotAnObject)?;
        let tag = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or(SchemaError::MissingType)?;
        let ty =
            SectionType::from_tag(tag).ok_or_else(|| SchemaError::UnknownType(tag.to_string()))?;

        let raw: RawSection = serde_json::from_value(value.clone())?;
        let content = SectionContent::from_parts(ty, raw.content)?;
        Ok(Section {
            id: raw.id,
            order: raw.order,
            content,
            style: raw.style,
            images: raw.images,
        })
    }

    /// Retain a structurally readable but schema-invalid section verbatim.
    ///
    /// Used by the lenient document loader: the section keeps its outer
    /// envelope and raw content, renders as a placeholder, and rejects field
    /// edits. Returns an error when the candidate is not readable at all.
    pub fn opaque_from_value(value: &Value) -> Result<Section, SchemaError> {
        let object = value.as_object().ok_or(SchemaError::NotAnObject)?;
        object
            .get("type")
            .and_then(Value::as_str)
            .ok_or(SchemaError::MissingType)?;
        let parsed: RawSection = serde_json::from_value(value.clone())?;
        Ok(Section {
            id: parsed.id,
            order: parsed.order,
            content: SectionContent::Opaque {
                type_tag: parsed.section_type,
                raw: value.clone(),
            },
            style: parsed.style,
            images: parsed.images,
        })
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Wire tag of this section's type; for opaque sections, the tag as it
    /// appeared in the source document.
    pub fn type_tag(&self) -> &str {
        self.content.type_tag()
    }

    pub fn section_type(&self) -> Option<SectionType> {
        self.content.section_type()
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self.content, SectionContent::Opaque { .. })
    }

    /// Get-or-initialize accessor for the optional style envelope. The first
    /// write into a section with no prior style goes through here, so the
    /// materialized object contains exactly the written field.
    pub fn style_mut(&mut self) -> &mut SectionStyle {
        self.style.get_or_insert_with(SectionStyle::default)
    }

    /// Get-or-initialize accessor for the optional image slots. Writing
    /// `images.layout` when `images` is unset materializes the envelope
    /// first; without this the write would be lost.
    pub fn images_mut(&mut self) -> &mut SectionImages {
        self.images.get_or_insert_with(SectionImages::default)
    }

    /// Replace the content payload from a JSON value, keeping the type.
    ///
    /// The value is re-validated against the section's declared type; a
    /// shape-breaking replacement is rejected and the section is unchanged.
    pub fn replace_content_value(&mut self, value: Value) -> Result<(), SchemaError> {
        let ty = self.section_type().ok_or(SchemaError::OpaqueSection)?;
        self.content = SectionContent::from_parts(ty, value)?;
        Ok(())
    }
}

/// Wire shape shared by the strict serde path and the lenient loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawSection {
    #[serde(default)]
    id: String,

    #[serde(rename = "type")]
    section_type: String,

    #[serde(default)]
    order: i64,

    #[serde(default)]
    content: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    style: Option<SectionStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    images: Option<SectionImages>,
}

impl TryFrom<RawSection> for Section {
    type Error = SchemaError;

    fn try_from(raw: RawSection) -> Result<Self, Self::Error> {
        let ty = SectionType::from_tag(&raw.section_type)
            .ok_or_else(|| SchemaError::UnknownType(raw.section_type.clone()))?;
        let content = SectionContent::from_parts(ty, raw.content)?;
        Ok(Section {
            id: raw.id,
            order: raw.order,
            content,
            style: raw.style,
            images: raw.images,
        })
    }
}

impl Serialize for Section {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Drifted sections persist exactly as they were read, including
        // fields the schema does not model.
        if let SectionContent::Opaque { raw, .. } = &self.content {
            return raw.serialize(serializer);
        }
        RawSection::from(self.clone()).serialize(serializer)
    }
}

impl From<Section> for RawSection {
    fn from(section: Section) -> Self {
        RawSection {
            id: section.id,
            section_type: section.content.type_tag().to_string(),
            order: section.order,
            content: section.content.into_value(),
            style: section.style,
            images: section.images,
        }
    }
}

/// The per-type content payload.
///
/// `Opaque` is never produced by strict validation; it exists so the lenient
/// document loader can retain drifted sections without corrupting the rest
/// of the document.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Hero(HeroContent),
    Features(FeaturesContent),
    Cta(CtaContent),
    Contact(ContactContent),
    Pricing(PricingContent),
    Testimonials(TestimonialsContent),
    Faq(FaqContent),
    Team(TeamContent),
    Stats(StatsContent),
    Gallery(GalleryContent),
    Video(VideoContent),
    Newsletter(NewsletterContent),
    Custom(CustomContent),
    Style(StyleContent),
    TwoColumnTextImage(TwoColumnTextImageContent),
    TwoColumnImageText(TwoColumnImageTextContent),
    TwoColumnTextVideo(TwoColumnTextVideoContent),
    TwoColumnFeaturesImage(TwoColumnFeaturesImageContent),
    TwoColumnTextContact(TwoColumnTextContactContent),
    TwoColumnContactImage(TwoColumnContactImageContent),
    /// The entire source object of a drifted section, kept for byte-identical
    /// re-serialization. `type_tag` is the tag as it appeared on the wire.
    Opaque { type_tag: String, raw: Value },
}

impl SectionContent {
    /// Parse a content payload against a known type. Rejection is whole-
    /// payload; there is no partial acceptance.
    pub fn from_parts(ty: SectionType, content: Value) -> Result<SectionContent, SchemaError> {
        if !content.is_object() {
            return Err(SchemaError::ContentMismatch {
                section_type: ty.as_tag().to_string(),
                source: <serde_json::Error as serde::de::Error>::custom("content must be an object"),
            });
        }

        let mismatch = |source: serde_json::Error| SchemaError::ContentMismatch {
            section_type: ty.as_tag().to_string(),
            source,
        };

        let parsed = match ty {
            SectionType::Hero => SectionContent::Hero(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::Features => SectionContent::Features(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::Cta => SectionContent::Cta(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::Contact => SectionContent::Contact(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::Pricing => SectionContent::Pricing(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::Testimonials => SectionContent::Testimonials(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::Faq => SectionContent::Faq(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::Team => SectionContent::Team(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::Stats => SectionContent::Stats(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::Gallery => SectionContent::Gallery(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::Video => SectionContent::Video(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::Newsletter => SectionContent::Newsletter(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::Custom => SectionContent::Custom(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::Style => SectionContent::Style(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::TwoColumnTextImage => SectionContent::TwoColumnTextImage(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::TwoColumnImageText => SectionContent::TwoColumnImageText(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::TwoColumnTextVideo => SectionContent::TwoColumnTextVideo(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::TwoColumnFeaturesImage => SectionContent::TwoColumnFeaturesImage(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::TwoColumnTextContact => SectionContent::TwoColumnTextContact(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
            SectionType::TwoColumnContactImage => SectionContent::TwoColumnContactImage(
                serde_json::from_value(content).map_err(mismatch)?,
            ),
        };
        Ok(parsed)
    }

    /// Type-appropriate empty payload for a freshly added section.
    pub fn default_for(ty: SectionType) -> SectionContent {
        match ty {
            SectionType::Hero => SectionContent::Hero(HeroContent::default()),
            SectionType::Features => SectionContent::Features(FeaturesContent::default()),
            SectionType::Cta => SectionContent::Cta(CtaContent::default()),
            SectionType::Contact => SectionContent::Contact(ContactContent::default_form()),
            SectionType::Pricing => SectionContent::Pricing(PricingContent::default()),
            SectionType::Testimonials => {
                SectionContent::Testimonials(TestimonialsContent::default())
            }
            SectionType::Faq => SectionContent::Faq(FaqContent::default()),
            SectionType::Team => SectionContent::Team(TeamContent::default()),
            SectionType::Stats => SectionContent::Stats(StatsContent::default()),
            SectionType::Gallery => SectionContent::Gallery(GalleryContent::default()),
            SectionType::Video => SectionContent::Video(VideoContent::default()),
            SectionType::Newsletter => SectionContent::Newsletter(NewsletterContent::default()),
            SectionType::Custom => SectionContent::Custom(CustomContent::default()),
            SectionType::Style => SectionContent::Style(StyleContent::default()),
            SectionType::TwoColumnTextImage => {
                SectionContent::TwoColumnTextImage(TwoColumnTextImageContent::default())
            }
            SectionType::TwoColumnImageText => {
                SectionContent::TwoColumnImageText(TwoColumnImageTextContent::default())
            }
            SectionType::TwoColumnTextVideo => {
                SectionContent::TwoColumnTextVideo(TwoColumnTextVideoContent::default())
            }
            SectionType::TwoColumnFeaturesImage => {
                SectionContent::TwoColumnFeaturesImage(TwoColumnFeaturesImageContent::default())
            }
            SectionType::TwoColumnTextContact => {
                SectionContent::TwoColumnTextContact(TwoColumnTextContactContent::default())
            }
            SectionType::TwoColumnContactImage => {
                SectionContent::TwoColumnContactImage(TwoColumnContactImageContent::default())
            }
        }
    }

    pub fn section_type(&self) -> Option<SectionType> {
        match self {
            SectionContent::Hero(_) => Some(SectionType::Hero),
            SectionContent::Features(_) => Some(SectionType::Features),
            SectionContent::Cta(_) => Some(SectionType::Cta),
            SectionContent::Contact(_) => Some(SectionType::Contact),
            SectionContent::Pricing(_) => Some(SectionType::Pricing),
            SectionContent::Testimonials(_) => Some(SectionType::Testimonials),
            SectionContent::Faq(_) => Some(SectionType::Faq),
            SectionContent::Team(_) => Some(SectionType::Team),
            SectionContent::Stats(_) => Some(SectionType::Stats),
            SectionContent::Gallery(_) => Some(SectionType::Gallery),
            SectionContent::Video(_) => Some(SectionType::Video),
            SectionContent::Newsletter(_) => Some(SectionType::Newsletter),
            SectionContent::Custom(_) => Some(SectionType::Custom),
            SectionContent::Style(_) => Some(SectionType::Style),
            SectionContent::TwoColumnTextImage(_) => Some(SectionType::TwoColumnTextImage),
            SectionContent::TwoColumnImageText(_) => Some(SectionType::TwoColumnImageText),
            SectionContent::TwoColumnTextVideo(_) => Some(SectionType::TwoColumnTextVideo),
            SectionContent::TwoColumnFeaturesImage(_) => Some(SectionType::TwoColumnFeaturesImage),
            SectionContent::TwoColumnTextContact(_) => Some(SectionType::TwoColumnTextContact),
            SectionContent::TwoColumnContactImage(_) => Some(SectionType::TwoColumnContactImage),
            SectionContent::Opaque { .. } => None,
        }
    }

    pub fn type_tag(&self) -> &str {
        match self {
            SectionContent::Opaque { type_tag, .. } => type_tag,
            other => other
                .section_type()
                .map(|ty| ty.as_tag())
                .unwrap_or("unknown"),
        }
    }

    /// Serialize the payload alone (without the outer section envelope).
    pub fn to_value(&self) -> Value {
        self.clone().into_value()
    }

    fn into_value(self) -> Value {
        match self {
            SectionContent::Hero(c) => to_value_or_null(&c),
            SectionContent::Features(c) => to_value_or_null(&c),
            SectionContent::Cta(c) => to_value_or_null(&c),
            SectionContent::Contact(c) => to_value_or_null(&c),
            SectionContent::Pricing(c) => to_value_or_null(&c),
            SectionContent::Testimonials(c) => to_value_or_null(&c),
            SectionContent::Faq(c) => to_value_or_null(&c),
            SectionContent::Team(c) => to_value_or_null(&c),
            SectionContent::Stats(c) => to_value_or_null(&c),
            SectionContent::Gallery(c) => to_value_or_null(&c),
            SectionContent::Video(c) => to_value_or_null(&c),
            SectionContent::Newsletter(c) => to_value_or_null(&c),
            SectionContent::Custom(c) => to_value_or_null(&c),
            SectionContent::Style(c) => to_value_or_null(&c),
            SectionContent::TwoColumnTextImage(c) => to_value_or_null(&c),
            SectionContent::TwoColumnImageText(c) => to_value_or_null(&c),
            SectionContent::TwoColumnTextVideo(c) => to_value_or_null(&c),
            SectionContent::TwoColumnFeaturesImage(c) => to_value_or_null(&c),
            SectionContent::TwoColumnTextContact(c) => to_value_or_null(&c),
            SectionContent::TwoColumnContactImage(c) => to_value_or_null(&c),
            SectionContent::Opaque { raw, .. } => {
                raw.get("content").cloned().unwrap_or(Value::Null)
            }
        }
    }
}

fn to_value_or_null<T: Serialize>(content: &T) -> Value {
    serde_json::to_value(content).unwrap_or(Value::Null)
}

// ---------------------------------------------------------------------------
// Atomic content shapes
// ---------------------------------------------------------------------------

/// Main visual block: headline plus an optional call-to-action button.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesContent {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    pub features: Vec<FeatureItem>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    /// Icon name from the UI icon set (e.g. "Zap", "Shield").
    pub icon_name: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaContent {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub button_text: String,
    pub button_link: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub form_fields: Vec<FormField>,
    pub submit_button_text: String,

    /// When set, the section links to a dedicated contact page instead of
    /// rendering the form inline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_dedicated_page: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_page_button_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContactContent {
    /// Default payload with the standard name/email/message fields.
    pub fn default_form() -> Self {
        Self {
            submit_button_text: "Send".to_string(),
            form_fields: vec![
                FormField::required("name", "Name", FieldKind::Text),
                FormField::required("email", "Email", FieldKind::Email),
                FormField::optional("message", "Message", FieldKind::Textarea),
            ],
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub name: String,
    pub label: String,

    #[serde(rename = "type")]
    pub field_type: FieldKind,

    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FormField {
    pub fn required(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            field_type: kind,
            required: true,
            placeholder: None,
        }
    }

    pub fn optional(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            required: false,
            ..Self::required(name, label, kind)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    Textarea,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingContent {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    pub plans: Vec<PricingPlan>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: String,
    pub price: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub features: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<bool>,

    pub button_text: String,
    pub button_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsContent {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    pub testimonials: Vec<TestimonialItem>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialItem {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Star rating, 1–5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqContent {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    pub items: Vec<FaqItem>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamContent {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    pub members: Vec<TeamMember>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub position: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialLinks>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    pub stats: Vec<StatItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatItem {
    pub value: String,
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryContent {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    pub images: Vec<GalleryImage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub url: String,
    pub alt: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    pub video_url: String,
    pub video_type: VideoKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    #[default]
    Youtube,
    Vimeo,
    Direct,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterContent {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    pub button_text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw HTML escape hatch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomContent {
    pub html: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Styled text block (the legacy "style" type).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleContent {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Two-column composite shapes
//
// Composites nest two of the atomic column shapes plus a layout ratio. They
// share storage with the core types; there is no separate envelope.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextColumn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_bold: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_italic: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_bold: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_italic: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageColumn {
    pub image_url: String,
    pub image_alt: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoColumn {
    pub video_url: String,
    pub video_type: VideoKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactColumn {
    pub form_fields: Vec<FormField>,
    pub submit_button_text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_dedicated_page: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_page_button_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesColumn {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    pub features: Vec<FeatureItem>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub ratio: ColumnRatio,
}

/// Width split between the two columns, left to right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnRatio {
    #[default]
    #[serde(rename = "50-50")]
    FiftyFifty,
    #[serde(rename = "60-40")]
    SixtyForty,
    #[serde(rename = "40-60")]
    FortySixty,
}

impl ColumnRatio {
    /// Left and right column widths as CSS percentages.
    pub fn widths(&self) -> (&'static str, &'static str) {
        match self {
            ColumnRatio::FiftyFifty => ("50%", "50%"),
            ColumnRatio::SixtyForty => ("60%", "40%"),
            ColumnRatio::FortySixty => ("40%", "60%"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoColumnTextImageContent {
    pub text_column: TextColumn,
    pub image_column: ImageColumn,

    #[serde(default)]
    pub layout: ColumnLayout,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoColumnImageTextContent {
    pub image_column: ImageColumn,
    pub text_column: TextColumn,

    #[serde(default)]
    pub layout: ColumnLayout,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoColumnTextVideoContent {
    pub text_column: TextColumn,
    pub video_column: VideoColumn,

    #[serde(default)]
    pub layout: ColumnLayout,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoColumnFeaturesImageContent {
    pub features_column: FeaturesColumn,
    pub image_column: ImageColumn,

    #[serde(default)]
    pub layout: ColumnLayout,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoColumnTextContactContent {
    pub text_column: TextColumn,
    pub contact_column: ContactColumn,

    #[serde(default)]
    pub layout: ColumnLayout,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoColumnContactImageContent {
    pub contact_column: ContactColumn,
    pub image_column: ImageColumn,

    #[serde(default)]
    pub layout: ColumnLayout,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
