//! Model output parsing and candidate validation.
//!
//! Model output is hostile input. Every candidate section goes through the
//! schema's strict validation; rejected candidates are counted and dropped,
//! never partially applied.

use pagecraft_schema::Section;
use serde_json::Value;
use tracing::warn;

use crate::error::AiError;

/// Validated sections from a single-shot generation call.
#[derive(Debug, Clone)]
pub struct GeneratedBatch {
    pub sections: Vec<Section>,
    /// Candidates that failed validation and were dropped.
    pub rejected: usize,
}

/// Validated reply from a conversational call.
#[derive(Debug, Clone)]
pub struct ConversationReply {
    pub message: String,
    pub sections: Vec<Section>,
    pub rejected: usize,
}

/// Strip a surrounding Markdown code fence, if any.
pub(crate) fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // drop the language tag on the opening fence
    match body.split_once('\n') {
        Some((_, after)) => after.trim(),
        None => body.trim(),
    }
}

/// Parse single-shot output: a bare array of candidates or a single object.
pub(crate) fn parse_generated(text: &str) -> Result<GeneratedBatch, AiError> {
    let value: Value = serde_json::from_str(strip_code_fences(text))
        .map_err(|err| AiError::InvalidResponse(format!("model output is not JSON: {err}")))?;

    let candidates = match value {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        other => {
            return Err(AiError::InvalidResponse(format!(
                "expected an array or object, got {other}"
            )))
        }
    };

    let (sections, rejected) = validate_candidates(&candidates);
    Ok(GeneratedBatch { sections, rejected })
}

/// Parse conversational output: the `{ message, sections }` envelope.
pub(crate) fn parse_conversation(text: &str) -> Result<ConversationReply, AiError> {
    let value: Value = serde_json::from_str(strip_code_fences(text))
        .map_err(|err| AiError::InvalidResponse(format!("model output is not JSON: {err}")))?;

    let object = value
        .as_object()
        .ok_or_else(|| AiError::InvalidResponse("expected a reply object".to_string()))?;

    let message = object
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Sections generated.")
        .to_string();

    let empty = Vec::new();
    let candidates = object
        .get("sections")
        .and_then(Value::as_array)
        .unwrap_or(&empty);

    let (sections, rejected) = validate_candidates(candidates);
    Ok(ConversationReply {
        message,
        sections,
        rejected,
    })
}

fn validate_candidates(candidates: &[Value]) -> (Vec<Section>, usize) {
    let mut sections = Vec::with_capacity(candidates.len());
    let mut rejected = 0;

    for candidate in candidates {
        match Section::from_value(candidate) {
            Ok(section) => sections.push(section),
            Err(err) => {
                warn!(error = %err, "dropping invalid generated section");
                rejected += 1;
            }
        }
    }
    (sections, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_schema::SectionType;
    use serde_json::json;

    #[test]
    fn fenced_json_is_unwrapped() {
        assert_eq!(strip_code_fences("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("```\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("  [1]  "), "[1]");
        // an unterminated fence is left alone
        assert_eq!(strip_code_fences("```json\n[1]"), "```json\n[1]");
    }

    #[test]
    fn bare_array_output_is_accepted() {
        let text = json!([
            { "type": "hero", "content": { "title": "Generated" } },
            { "type": "cta", "content": {
                "title": "Act", "buttonText": "Go", "buttonLink": "#x"
            }}
        ])
        .to_string();

        let batch = parse_generated(&text).unwrap();
        assert_eq!(batch.sections.len(), 2);
        assert_eq!(batch.rejected, 0);
        assert_eq!(batch.sections[0].section_type(), Some(SectionType::Hero));
    }

    #[test]
    fn single_object_output_is_wrapped() {
        let text = json!({ "type": "hero", "content": { "title": "Solo" } }).to_string();
        let batch = parse_generated(&text).unwrap();
        assert_eq!(batch.sections.len(), 1);
    }

    #[test]
    fn invalid_candidates_are_counted_not_fatal() {
        let text = json!([
            { "type": "hero", "content": { "title": "Good" } },
            { "type": "carousel", "content": { "slides": [] } },
            { "type": "features", "content": { "title": "No items" } }
        ])
        .to_string();

        let batch = parse_generated(&text).unwrap();
        assert_eq!(batch.sections.len(), 1);
        assert_eq!(batch.rejected, 2);
    }

    #[test]
    fn non_json_output_is_an_error() {
        assert!(matches!(
            parse_generated("Sure! Here are your sections."),
            Err(AiError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_generated("\"just a string\""),
            Err(AiError::InvalidResponse(_))
        ));
    }

    #[test]
    fn conversation_envelope_is_parsed() {
        let text = json!({
            "message": "Added a hero section for you.",
            "sections": [ { "type": "hero", "content": { "title": "Hi" } } ]
        })
        .to_string();

        let reply = parse_conversation(&text).unwrap();
        assert_eq!(reply.message, "Added a hero section for you.");
        assert_eq!(reply.sections.len(), 1);
        assert_eq!(reply.rejected, 0);
    }

    #[test]
    fn conversation_only_replies_have_no_sections() {
        let text = json!({ "message": "What would you like to add?", "sections": [] }).to_string();
        let reply = parse_conversation(&text).unwrap();
        assert!(reply.sections.is_empty());
    }

    #[test]
    fn missing_message_falls_back_to_a_default() {
        let text = json!({ "sections": [] }).to_string();
        let reply = parse_conversation(&text).unwrap();
        assert_eq!(reply.message, "Sections generated.");
    }
}
