//! Shared appearance overrides: the cross-type `style` and `images` envelopes.
//!
//! Every field is optional and omitted from the wire when unset, so a section
//! that was saved without a style round-trips without one, and the first
//! write into a freshly materialized [`SectionStyle`] produces an object
//! containing exactly that field.

use serde::{Deserialize, Serialize};

/// Cross-type appearance overrides attached to a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<BackgroundImage>,
}

impl SectionStyle {
    pub fn is_empty(&self) -> bool {
        self == &SectionStyle::default()
    }
}

/// Background image layered beneath a section's content.
///
/// `opacity` is on a 0–1 scale and applies to the image layer only; content
/// rendered above it is unaffected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundImage {
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_opacity")]
    pub opacity: f64,

    #[serde(default = "default_position")]
    pub position: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_x: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_y: Option<String>,

    /// Rotation in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,

    #[serde(default = "default_size")]
    pub size: String,

    #[serde(default = "default_repeat")]
    pub repeat: String,
}

impl Default for BackgroundImage {
    fn default() -> Self {
        Self {
            url: String::new(),
            opacity: default_opacity(),
            position: default_position(),
            position_x: None,
            position_y: None,
            rotation: None,
            size: default_size(),
            repeat: default_repeat(),
        }
    }
}

fn default_opacity() -> f64 {
    1.0
}

fn default_position() -> String {
    "center".to_string()
}

fn default_size() -> String {
    "cover".to_string()
}

fn default_repeat() -> String {
    "no-repeat".to_string()
}

/// Two-column image slots shared across all section types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionImages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<ImageLayout>,
}

impl SectionImages {
    pub fn is_empty(&self) -> bool {
        self == &SectionImages::default()
    }
}

/// How the shared image slots are arranged around the section content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageLayout {
    ImageLeft,
    ImageRight,
    TwoColumn,
}

impl ImageLayout {
    pub fn as_tag(&self) -> &'static str {
        match self {
            ImageLayout::ImageLeft => "image-left",
            ImageLayout::ImageRight => "image-right",
            ImageLayout::TwoColumn => "two-column",
        }
    }
}
