//! # Section Mutations
//!
//! High-level semantic operations on a page's section sequence.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each mutation represents a semantic operation
//! 2. **Validated**: All mutations validate structural constraints first
//! 3. **Atomic**: A failed mutation leaves the document byte-identical
//! 4. **Positional**: Operations address sections by array index, the
//!    authoritative order
//!
//! ## Mutation Semantics
//!
//! ### MoveSection
//! - Swaps the section with its neighbor in the given direction
//! - Fails at the sequence boundary (index 0 up, last index down)
//! - Does not renumber ids or `order` fields
//!
//! ### SetContentField
//! - Dotted-path write into the content payload (`"title"`,
//!   `"textColumn.title"`, `"features.0.description"`)
//! - The payload is re-validated against the section's declared type after
//!   the write; a shape-breaking write is rejected whole
//! - Can never change the section's type
//!
//! ### SetStyleProperty / SetImageProperty
//! - Create-on-write: a missing `style`/`images` envelope is materialized
//!   before the assignment, so the write is never lost
//! - Property names are checked against the envelope's known fields

use pagecraft_schema::{PageContent, SchemaError, Section, SectionImages, SectionStyle};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Insert a section at an index (clamped to the sequence length).
    /// Creation goes through [`SectionStore::add_section`], which builds the
    /// section with a fresh id and type defaults before inserting it here.
    ///
    /// [`SectionStore::add_section`]: crate::SectionStore::add_section
    InsertSection { index: usize, section: Section },

    /// Swap a section with its neighbor
    MoveSection {
        index: usize,
        direction: MoveDirection,
    },

    /// Remove the section at an index
    RemoveSection { index: usize },

    /// Write into a (possibly nested) content field
    SetContentField {
        index: usize,
        path: String,
        value: Value,
    },

    /// Write a style property, materializing `style` if absent
    SetStyleProperty {
        index: usize,
        property: String,
        value: Value,
    },

    /// Write an image-slot property, materializing `images` if absent
    SetImageProperty {
        index: usize,
        property: String,
        value: Value,
    },

    /// Replace the whole sequence (template application, undo of a batch)
    ReplaceSections { sections: Vec<Section> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    /// Toward index 0
    Up,
    /// Toward the end of the sequence
    Down,
}

impl std::fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveDirection::Up => f.write_str("up"),
            MoveDirection::Down => f.write_str("down"),
        }
    }
}

#[derive(Error, Debug)]
pub enum MutationError {
    #[error("Section index {0} is out of bounds")]
    IndexOutOfBounds(usize),

    #[error("Section at index {index} cannot move {direction}: already at the boundary")]
    AtBoundary {
        index: usize,
        direction: MoveDirection,
    },

    #[error("Duplicate section id: {0}")]
    DuplicateId(String),

    #[error("Unknown {target} property: {property}")]
    UnknownProperty {
        target: &'static str,
        property: String,
    },

    #[error("Invalid field path: {0}")]
    InvalidPath(String),

    #[error("Invalid value for {target} property '{property}': {source}")]
    InvalidPropertyValue {
        target: &'static str,
        property: String,
        source: serde_json::Error,
    },

    #[error("Opaque sections cannot be edited")]
    NotEditable,

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl Mutation {
    /// Apply the mutation with validation. On error the document is
    /// unchanged.
    pub fn apply(&self, doc: &mut PageContent) -> Result<(), MutationError> {
        self.validate(doc)?;

        match self {
            Mutation::InsertSection { index, section } => {
                let insert_index = (*index).min(doc.sections.len());
                doc.sections.insert(insert_index, section.clone());
                Ok(())
            }

            Mutation::MoveSection { index, direction } => {
                let neighbor = match direction {
                    MoveDirection::Up => index - 1,
                    MoveDirection::Down => index + 1,
                };
                doc.sections.swap(*index, neighbor);
                Ok(())
            }

            Mutation::RemoveSection { index } => {
                doc.sections.remove(*index);
                Ok(())
            }

            Mutation::SetContentField { index, path, value } => {
                Self::apply_set_content(&mut doc.sections[*index], path, value.clone())
            }

            Mutation::SetStyleProperty {
                index,
                property,
                value,
            } => Self::apply_set_style(&mut doc.sections[*index], property, value.clone()),

            Mutation::SetImageProperty {
                index,
                property,
                value,
            } => Self::apply_set_image(&mut doc.sections[*index], property, value.clone()),

            Mutation::ReplaceSections { sections } => {
                doc.sections = sections.clone();
                Ok(())
            }
        }
    }

    /// Validate without applying
    pub fn validate(&self, doc: &PageContent) -> Result<(), MutationError> {
        let len = doc.sections.len();

        match self {
            Mutation::InsertSection { section, .. } => {
                if doc.sections.iter().any(|s| s.id == section.id) {
                    return Err(MutationError::DuplicateId(section.id.clone()));
                }
                Ok(())
            }

            Mutation::MoveSection { index, direction } => {
                if *index >= len {
                    return Err(MutationError::IndexOutOfBounds(*index));
                }
                let at_boundary = match direction {
                    MoveDirection::Up => *index == 0,
                    MoveDirection::Down => *index == len - 1,
                };
                if at_boundary {
                    return Err(MutationError::AtBoundary {
                        index: *index,
                        direction: *direction,
                    });
                }
                Ok(())
            }

            Mutation::RemoveSection { index } => {
                if *index >= len {
                    return Err(MutationError::IndexOutOfBounds(*index));
                }
                Ok(())
            }

            Mutation::SetContentField { index, path, .. } => {
                let section = doc
                    .sections
                    .get(*index)
                    .ok_or(MutationError::IndexOutOfBounds(*index))?;
                if section.is_opaque() {
                    return Err(MutationError::NotEditable);
                }
                if path.is_empty() {
                    return Err(MutationError::InvalidPath(path.clone()));
                }
                Ok(())
            }

            Mutation::SetStyleProperty {
                index, property, ..
            } => {
                let section = doc
                    .sections
                    .get(*index)
                    .ok_or(MutationError::IndexOutOfBounds(*index))?;
                if section.is_opaque() {
                    return Err(MutationError::NotEditable);
                }
                if !is_style_property(property) {
                    return Err(MutationError::UnknownProperty {
                        target: "style",
                        property: property.clone(),
                    });
                }
                Ok(())
            }

            Mutation::SetImageProperty {
                index, property, ..
            } => {
                let section = doc
                    .sections
                    .get(*index)
                    .ok_or(MutationError::IndexOutOfBounds(*index))?;
                if section.is_opaque() {
                    return Err(MutationError::NotEditable);
                }
                if !is_image_property(property) {
                    return Err(MutationError::UnknownProperty {
                        target: "images",
                        property: property.clone(),
                    });
                }
                Ok(())
            }

            Mutation::ReplaceSections { sections } => {
                let mut seen = std::collections::HashSet::new();
                for section in sections {
                    if !section.id.is_empty() && !seen.insert(section.id.as_str()) {
                        return Err(MutationError::DuplicateId(section.id.clone()));
                    }
                }
                Ok(())
            }
        }
    }

    fn apply_set_content(
        section: &mut Section,
        path: &str,
        value: Value,
    ) -> Result<(), MutationError> {
        let mut content = section.content.to_value();
        write_path(&mut content, path, value)?;
        section.replace_content_value(content)?;
        Ok(())
    }

    fn apply_set_style(
        section: &mut Section,
        property: &str,
        value: Value,
    ) -> Result<(), MutationError> {
        // Round-trip through JSON so dotted paths reach into backgroundImage
        // and the write is validated against the envelope's shape. The
        // envelope is only assigned back on success, keeping a failed write
        // from materializing an empty style.
        let mut style_value = section
            .style
            .as_ref()
            .and_then(|style| serde_json::to_value(style).ok())
            .unwrap_or_else(|| Value::Object(Default::default()));
        write_path(&mut style_value, property, value)?;

        let updated: SectionStyle = serde_json::from_value(style_value).map_err(|source| {
            MutationError::InvalidPropertyValue {
                target: "style",
                property: property.to_string(),
                source,
            }
        })?;
        // A write that nulls out the last field removes the envelope, so
        // undoing the first style write restores its absence.
        section.style = (!updated.is_empty()).then_some(updated);
        Ok(())
    }

    fn apply_set_image(
        section: &mut Section,
        property: &str,
        value: Value,
    ) -> Result<(), MutationError> {
        let mut images_value = section
            .images
            .as_ref()
            .and_then(|images| serde_json::to_value(images).ok())
            .unwrap_or_else(|| Value::Object(Default::default()));
        write_path(&mut images_value, property, value)?;

        let updated: SectionImages = serde_json::from_value(images_value).map_err(|source| {
            MutationError::InvalidPropertyValue {
                target: "images",
                property: property.to_string(),
                source,
            }
        })?;
        section.images = (!updated.is_empty()).then_some(updated);
        Ok(())
    }
}

/// Known style envelope properties, including the background image subfields
fn is_style_property(property: &str) -> bool {
    matches!(
        property,
        "backgroundColor"
            | "textColor"
            | "padding"
            | "backgroundImage"
            | "backgroundImage.url"
            | "backgroundImage.opacity"
            | "backgroundImage.position"
            | "backgroundImage.positionX"
            | "backgroundImage.positionY"
            | "backgroundImage.rotation"
            | "backgroundImage.size"
            | "backgroundImage.repeat"
    )
}

fn is_image_property(property: &str) -> bool {
    matches!(property, "leftImage" | "rightImage" | "layout")
}

/// Write `value` at a dotted path, creating intermediate objects on the way.
/// Numeric segments index into existing arrays; indexing past the end of an
/// array is an error rather than an implicit append.
fn write_path(target: &mut Value, path: &str, value: Value) -> Result<(), MutationError> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(MutationError::InvalidPath(path.to_string()));
    }

    let mut current = target;
    for segment in &segments[..segments.len() - 1] {
        current = descend(current, segment, path)?;
    }

    let last = segments[segments.len() - 1];
    match current {
        Value::Object(map) => {
            map.insert(last.to_string(), value);
            Ok(())
        }
        Value::Array(items) => {
            let index = parse_index(last, path)?;
            let slot = items
                .get_mut(index)
                .ok_or_else(|| MutationError::InvalidPath(path.to_string()))?;
            *slot = value;
            Ok(())
        }
        _ => Err(MutationError::InvalidPath(path.to_string())),
    }
}

fn descend<'a>(
    current: &'a mut Value,
    segment: &str,
    path: &str,
) -> Result<&'a mut Value, MutationError> {
    match current {
        Value::Object(map) => {
            let entry = map
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Default::default()));
            if entry.is_null() {
                *entry = Value::Object(Default::default());
            }
            Ok(entry)
        }
        Value::Array(items) => {
            let index = parse_index(segment, path)?;
            items
                .get_mut(index)
                .ok_or_else(|| MutationError::InvalidPath(path.to_string()))
        }
        _ => Err(MutationError::InvalidPath(path.to_string())),
    }
}

fn parse_index(segment: &str, path: &str) -> Result<usize, MutationError> {
    segment
        .parse::<usize>()
        .map_err(|_| MutationError::InvalidPath(path.to_string()))
}

/// Read the value at a dotted path, if present. Used to record prior values
/// for undo.
pub(crate) fn read_path<'a>(source: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = source;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mutation_serialization_round_trips() {
        let mutation = Mutation::SetContentField {
            index: 0,
            path: "title".to_string(),
            value: json!("Hello World"),
        };

        let encoded = serde_json::to_string(&mutation).unwrap();
        let decoded: Mutation = serde_json::from_str(&encoded).unwrap();
        assert_eq!(mutation, decoded);
    }

    #[test]
    fn write_path_creates_intermediate_objects() {
        let mut value = json!({});
        write_path(&mut value, "backgroundImage.url", json!("bg.png")).unwrap();
        assert_eq!(value, json!({ "backgroundImage": { "url": "bg.png" } }));
    }

    #[test]
    fn write_path_indexes_into_arrays() {
        let mut value = json!({ "features": [{ "title": "a" }, { "title": "b" }] });
        write_path(&mut value, "features.1.title", json!("c")).unwrap();
        assert_eq!(value["features"][1]["title"], json!("c"));
    }

    #[test]
    fn write_path_rejects_out_of_range_indexes() {
        let mut value = json!({ "features": [] });
        assert!(write_path(&mut value, "features.0.title", json!("x")).is_err());
    }

    #[test]
    fn read_path_follows_nesting() {
        let value = json!({ "textColumn": { "title": "Left" } });
        assert_eq!(read_path(&value, "textColumn.title"), Some(&json!("Left")));
        assert_eq!(read_path(&value, "textColumn.missing"), None);
    }
}
