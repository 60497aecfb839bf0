//! # Section Store
//!
//! Holds the section sequence for one editing session.
//!
//! The store wraps a [`PageContent`] with a version counter and a dirty
//! flag, and applies [`Mutation`]s after validation. Persistence is
//! wholesale: [`SectionStore::serialize`] snapshots the current array order,
//! which is the authoritative order regardless of stale `order` fields.
//!
//! Concurrent edits of the same page are not reconciled here; the document
//! is last-writer-wins. The `version` counter is exposed so a persistence
//! layer can layer a compare-and-swap on top without changing the store.

use pagecraft_schema::{LoadReport, PageContent, Section, SectionType};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::errors::EditorError;
use crate::mutations::{MoveDirection, Mutation, MutationError};

/// Editable section sequence for one landing page
#[derive(Debug, Default)]
pub struct SectionStore {
    content: PageContent,

    /// Increments on each successfully applied mutation
    pub version: u64,

    dirty: bool,
}

impl SectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from an already-validated document (e.g. a freshly
    /// instantiated template).
    pub fn from_content(content: PageContent) -> Self {
        Self {
            content,
            version: 0,
            dirty: false,
        }
    }

    /// Start a session from a persisted JSON document, recovering
    /// per-section. See [`PageContent::load`] for the retention policy.
    pub fn load(value: &Value) -> (Self, LoadReport) {
        let (content, report) = PageContent::load(value);
        (Self::from_content(content), report)
    }

    pub fn sections(&self) -> &[Section] {
        &self.content.sections
    }

    pub fn len(&self) -> usize {
        self.content.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.sections.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Apply a mutation with validation. The version increments only when
    /// the mutation succeeds; a failed mutation leaves the document
    /// byte-identical.
    pub fn apply(&mut self, mutation: Mutation) -> Result<(), EditorError> {
        mutation.apply(&mut self.content)?;
        self.version += 1;
        self.dirty = true;
        Ok(())
    }

    /// Construct and insert a new section of the given type with a fresh
    /// unique id and type-appropriate default content, at `index` (default:
    /// end). The new section validates against the schema immediately.
    pub fn add_section(
        &mut self,
        section_type: SectionType,
        index: Option<usize>,
    ) -> Result<&Section, EditorError> {
        let insert_index = index.unwrap_or(self.len()).min(self.len());
        let section = Section::with_default_content(
            Uuid::new_v4().to_string(),
            section_type,
            insert_index as i64,
        );
        debug!(%section_type, index = insert_index, id = %section.id, "adding section");

        self.apply(Mutation::InsertSection {
            index: insert_index,
            section,
        })?;
        Ok(&self.content.sections[insert_index])
    }

    /// Swap the section at `index` with its neighbor. Moving past the edge
    /// of the sequence is an error and changes nothing.
    pub fn move_section(
        &mut self,
        index: usize,
        direction: MoveDirection,
    ) -> Result<(), EditorError> {
        self.apply(Mutation::MoveSection { index, direction })
    }

    /// Delete the section at `index`. Other sections keep their ids and
    /// relative order; removed ids are never reused.
    pub fn remove_section(&mut self, index: usize) -> Result<(), EditorError> {
        self.apply(Mutation::RemoveSection { index })
    }

    /// Write into a (possibly nested) content field without changing the
    /// section's type.
    pub fn set_content_field(
        &mut self,
        index: usize,
        path: impl Into<String>,
        value: Value,
    ) -> Result<(), EditorError> {
        self.apply(Mutation::SetContentField {
            index,
            path: path.into(),
            value,
        })
    }

    /// Write a style property, materializing the `style` envelope if absent.
    pub fn set_style_property(
        &mut self,
        index: usize,
        property: impl Into<String>,
        value: Value,
    ) -> Result<(), EditorError> {
        self.apply(Mutation::SetStyleProperty {
            index,
            property: property.into(),
            value,
        })
    }

    /// Write an image-slot property, materializing `images` if absent.
    pub fn set_image_property(
        &mut self,
        index: usize,
        property: impl Into<String>,
        value: Value,
    ) -> Result<(), EditorError> {
        self.apply(Mutation::SetImageProperty {
            index,
            property: property.into(),
            value,
        })
    }

    /// Append a batch of generated sections atomically.
    ///
    /// Candidates arrive validated but without trustworthy ids; each gets a
    /// fresh UUID and an `order` matching its insertion position. The batch
    /// is all-or-nothing: if any candidate is unusable the store is left
    /// unchanged, so a failed generation never partially applies.
    pub fn insert_generated(&mut self, candidates: Vec<Section>) -> Result<usize, EditorError> {
        if candidates.iter().any(|section| section.is_opaque()) {
            return Err(MutationError::NotEditable.into());
        }

        let count = candidates.len();
        let mut sections = self.content.sections.clone();
        for mut section in candidates {
            section.id = Uuid::new_v4().to_string();
            section.order = sections.len() as i64;
            sections.push(section);
        }

        self.apply(Mutation::ReplaceSections { sections })?;
        debug!(count, "spliced generated sections");
        Ok(count)
    }

    /// Snapshot the current sequence, in current array order, for
    /// persistence.
    pub fn serialize(&self) -> PageContent {
        self.content.clone()
    }

    pub fn to_value(&self) -> Value {
        self.content.to_value()
    }
}
