//! # Undo/Redo Stack
//!
//! Tracks mutation history for one editing session.
//!
//! ## Design
//!
//! - Each mutation's inverse is computed from the document *before* the
//!   mutation is applied
//! - Undo applies the inverse and moves the batch to the redo stack
//! - Redo reapplies the original mutation
//! - New mutations clear the redo stack
//! - Batches group multiple mutations into one undo step
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//! let mut store = SectionStore::new();
//!
//! stack.apply(Mutation::InsertSection { .. }, &mut store)?;
//! stack.undo(&mut store)?;
//! stack.redo(&mut store)?;
//! ```

use serde_json::Value;

use crate::errors::EditorError;
use crate::mutations::{read_path, MoveDirection, Mutation, MutationError};
use crate::store::SectionStore;

/// A group of mutations undone/redone together
#[derive(Debug, Clone)]
pub struct MutationBatch {
    /// The mutations in application order
    pub mutations: Vec<Mutation>,

    /// The inverse mutations (applied in reverse order on undo)
    pub inverses: Vec<Mutation>,

    /// Optional description of this batch
    pub description: Option<String>,
}

impl MutationBatch {
    pub fn single(mutation: Mutation, inverse: Mutation) -> Self {
        Self {
            mutations: vec![mutation],
            inverses: vec![inverse],
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Undo/redo stack for section editing
#[derive(Debug, Default)]
pub struct UndoStack {
    undo_stack: Vec<MutationBatch>,
    redo_stack: Vec<MutationBatch>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl UndoStack {
    /// Create a new undo stack with the default depth (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
        }
    }

    /// Apply a mutation through the store, recording its inverse
    pub fn apply(&mut self, mutation: Mutation, store: &mut SectionStore) -> Result<(), EditorError> {
        let inverse = invert(&mutation, store)?;
        store.apply(mutation.clone())?;

        self.undo_stack.push(MutationBatch::single(mutation, inverse));
        self.redo_stack.clear();

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            let overflow = self.undo_stack.len() - self.max_levels;
            self.undo_stack.drain(..overflow);
        }
        Ok(())
    }

    /// Undo the most recent batch. Returns `false` when there is nothing to
    /// undo.
    pub fn undo(&mut self, store: &mut SectionStore) -> Result<bool, EditorError> {
        let Some(batch) = self.undo_stack.pop() else {
            return Ok(false);
        };

        for inverse in batch.inverses.iter().rev() {
            store.apply(inverse.clone())?;
        }
        self.redo_stack.push(batch);
        Ok(true)
    }

    /// Reapply the most recently undone batch. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self, store: &mut SectionStore) -> Result<bool, EditorError> {
        let Some(batch) = self.redo_stack.pop() else {
            return Ok(false);
        };

        for mutation in &batch.mutations {
            store.apply(mutation.clone())?;
        }
        self.undo_stack.push(batch);
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

/// Compute the inverse of a mutation against the current document state
fn invert(mutation: &Mutation, store: &SectionStore) -> Result<Mutation, MutationError> {
    let sections = store.sections();

    let inverse = match mutation {
        Mutation::InsertSection { index, .. } => Mutation::RemoveSection {
            index: (*index).min(sections.len()),
        },

        Mutation::MoveSection { index, direction } => match direction {
            MoveDirection::Up => Mutation::MoveSection {
                index: index.saturating_sub(1),
                direction: MoveDirection::Down,
            },
            MoveDirection::Down => Mutation::MoveSection {
                index: index + 1,
                direction: MoveDirection::Up,
            },
        },

        Mutation::RemoveSection { index } => {
            let section = sections
                .get(*index)
                .ok_or(MutationError::IndexOutOfBounds(*index))?;
            Mutation::InsertSection {
                index: *index,
                section: section.clone(),
            }
        }

        Mutation::SetContentField { index, path, .. } => {
            let section = sections
                .get(*index)
                .ok_or(MutationError::IndexOutOfBounds(*index))?;
            let prior = read_path(&section.content.to_value(), path)
                .cloned()
                .unwrap_or(Value::Null);
            Mutation::SetContentField {
                index: *index,
                path: path.clone(),
                value: prior,
            }
        }

        // Envelope writes are inverted at the top-level property: restoring
        // the whole prior value (or null when it was absent) also undoes a
        // first write into a nested backgroundImage field.
        Mutation::SetStyleProperty {
            index, property, ..
        } => {
            let section = sections
                .get(*index)
                .ok_or(MutationError::IndexOutOfBounds(*index))?;
            let root = property_root(property);
            let prior = section
                .style
                .as_ref()
                .and_then(|style| serde_json::to_value(style).ok())
                .as_ref()
                .and_then(|value| read_path(value, root).cloned())
                .unwrap_or(Value::Null);
            Mutation::SetStyleProperty {
                index: *index,
                property: root.to_string(),
                value: prior,
            }
        }

        Mutation::SetImageProperty {
            index, property, ..
        } => {
            let section = sections
                .get(*index)
                .ok_or(MutationError::IndexOutOfBounds(*index))?;
            let root = property_root(property);
            let prior = section
                .images
                .as_ref()
                .and_then(|images| serde_json::to_value(images).ok())
                .as_ref()
                .and_then(|value| read_path(value, root).cloned())
                .unwrap_or(Value::Null);
            Mutation::SetImageProperty {
                index: *index,
                property: root.to_string(),
                value: prior,
            }
        }

        Mutation::ReplaceSections { .. } => Mutation::ReplaceSections {
            sections: sections.to_vec(),
        },
    };

    Ok(inverse)
}

fn property_root(property: &str) -> &str {
    property.split_once('.').map_or(property, |(root, _)| root)
}
