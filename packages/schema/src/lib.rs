//! # Pagecraft Schema
//!
//! The section content model: the closed set of `(type, content)` pairings
//! that make up a landing page, the shared style/image envelope, and the
//! persisted document format.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ schema: Section types + validation          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: SectionStore + mutations            │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: Section → VNode → HTML            │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The content enum is the validator**: a `Section` whose payload does
//!    not match its declared type cannot be constructed. Validation is
//!    whole-candidate: a malformed section is rejected as a unit, never
//!    partially accepted.
//! 2. **Array order is authoritative**: a section's position in
//!    `PageContent::sections` is its render order. The `order` field is
//!    advisory metadata written at creation and may be stale.
//! 3. **Forward-compatible passthrough**: unknown fields on `content` are
//!    preserved through deserialize/serialize, so the renderer and the
//!    validator do not need to be updated in lockstep.
//! 4. **Degrade, don't abort**: loading a persisted document never fails on a
//!    bad element. See [`PageContent::load`] for the retention policy.

mod document;
mod error;
mod section;
mod style;

pub use document::{LoadReport, PageContent};
pub use error::SchemaError;
pub use section::{
    ColumnLayout, ColumnRatio, ContactColumn, ContactContent, CtaContent, CustomContent,
    FaqContent, FaqItem, FeatureItem, FeaturesColumn, FeaturesContent, FieldKind, FormField,
    GalleryContent, GalleryImage, HeroContent, ImageColumn, NewsletterContent, PricingContent,
    PricingPlan, Section, SectionContent, SectionType, SocialLinks, StatItem, StatsContent,
    StyleContent, TeamContent, TeamMember, TestimonialItem, TestimonialsContent, TextColumn,
    TwoColumnContactImageContent, TwoColumnFeaturesImageContent, TwoColumnImageTextContent,
    TwoColumnTextContactContent, TwoColumnTextImageContent, TwoColumnTextVideoContent,
    VideoColumn, VideoContent, VideoKind,
};
pub use style::{BackgroundImage, ImageLayout, SectionImages, SectionStyle};
