//! # Pagecraft Editor
//!
//! The in-memory editing engine for a landing page's section sequence.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ schema: Section types + validation          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: SectionStore lifecycle + mutations  │
//! │  - Load/serialize the page document         │
//! │  - Apply mutations with validation          │
//! │  - Undo/redo via recorded inverses          │
//! │  - Atomic splice of generated batches       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: Section → VNode                   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The document is the unit of consistency**: the store holds the whole
//!    sequence, mutates it through discrete operations, and serializes it
//!    wholesale on save (last-writer-wins at document granularity).
//! 2. **Validate before apply**: a rejected mutation leaves the sequence
//!    untouched. There is no partial application anywhere, including
//!    generated batches.
//! 3. **Array index is authoritative**: moves and removals operate on
//!    positions; section ids are stable and never renumbered.
//! 4. **Create-on-write defaulting**: the optional `style`/`images` envelopes
//!    are materialized the first time they are written into, and the
//!    materialized object contains exactly the written property.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::{Mutation, SectionStore};
//! use pagecraft_schema::SectionType;
//!
//! let (mut store, report) = SectionStore::load(&persisted);
//!
//! store.add_section(SectionType::Hero, None)?;
//! store.set_content_field(0, "title", "Grow Your Business".into())?;
//! store.set_style_property(0, "backgroundColor", "#1e3a8a".into())?;
//!
//! let doc = store.serialize();
//! ```

mod errors;
mod mutations;
mod store;
mod undo_stack;

pub use errors::EditorError;
pub use mutations::{MoveDirection, Mutation, MutationError};
pub use store::SectionStore;
pub use undo_stack::{MutationBatch, UndoStack};

// Re-export common types for convenience
pub use pagecraft_schema::{LoadReport, PageContent, Section, SectionType};
