//! # Pagecraft AI
//!
//! Gemini-backed section generation. The client produces candidate sections
//! that have already passed the schema's strict validation; splicing them
//! into a document is the editor's job, so a failed or partially invalid
//! generation never touches page state.

mod client;
mod error;
mod parse;
mod prompt;

pub use client::GeminiClient;
pub use error::AiError;
pub use parse::{ConversationReply, GeneratedBatch};
pub use prompt::{ConversationRequest, GenerateRequest, Message, Role, HISTORY_LIMIT};
