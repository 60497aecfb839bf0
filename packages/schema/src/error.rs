//! Error types for schema validation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("section candidate is not a JSON object")]
    NotAnObject,

    #[error("section candidate has no type tag")]
    MissingType,

    #[error("unknown section type: {0}")]
    UnknownType(String),

    #[error("content does not match section type '{section_type}': {source}")]
    ContentMismatch {
        section_type: String,
        source: serde_json::Error,
    },

    #[error("malformed section: {0}")]
    MalformedSection(#[from] serde_json::Error),

    #[error("opaque sections cannot be edited")]
    OpaqueSection,
}
