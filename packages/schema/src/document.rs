//! The persisted page content envelope.
//!
//! A landing page stores its entire section sequence as one JSON value,
//! `{ "sections": [...] }`. The document is the unit of consistency: it is
//! read wholesale when an edit session or page view starts and written back
//! wholesale on save. There is no partial update.
//!
//! ## Load policy
//!
//! Deserializing through serde (`serde_json::from_value::<PageContent>`) is
//! strict: any invalid section fails the whole document. Loading persisted
//! documents goes through [`PageContent::load`] instead, which never aborts
//! on a bad element:
//!
//! - a readable section whose type is unknown or whose content does not match
//!   its declared type is retained as an opaque section (serialized back out
//!   verbatim, rendered as a placeholder, not editable);
//! - an element that is not a readable section object at all is dropped;
//! - both cases are counted in the returned [`LoadReport`] and logged.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::SchemaError;
use crate::section::Section;

/// The full ordered section sequence of one landing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub sections: Vec<Section>,
}

/// Outcome of a lenient document load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Sections that validated against the schema.
    pub loaded: usize,
    /// Drifted sections retained as opaque.
    pub retained_opaque: usize,
    /// Unreadable elements that were discarded.
    pub dropped: usize,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.retained_opaque == 0 && self.dropped == 0
    }
}

impl PageContent {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Load a persisted document, recovering per-section. See the module
    /// docs for the retention policy.
    pub fn load(value: &Value) -> (PageContent, LoadReport) {
        let mut sections = Vec::new();
        let mut report = LoadReport::default();

        let raw_sections = value
            .get("sections")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for (index, raw) in raw_sections.iter().enumerate() {
            match Section::from_value(raw) {
                Ok(section) => {
                    report.loaded += 1;
                    sections.push(section);
                }
                Err(SchemaError::UnknownType(_)) | Err(SchemaError::ContentMismatch { .. }) => {
                    match Section::opaque_from_value(raw) {
                        Ok(section) => {
                            warn!(
                                index,
                                section_type = section.type_tag(),
                                "retaining drifted section as opaque"
                            );
                            report.retained_opaque += 1;
                            sections.push(section);
                        }
                        Err(err) => {
                            warn!(index, %err, "dropping unreadable section");
                            report.dropped += 1;
                        }
                    }
                }
                Err(err) => {
                    warn!(index, %err, "dropping unreadable section");
                    report.dropped += 1;
                }
            }
        }

        (PageContent { sections }, report)
    }

    /// Snapshot the document for persistence. Array order is authoritative;
    /// `order` fields are written as stored.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }
}
