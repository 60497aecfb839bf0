//! Prompt construction for section generation.

use pagecraft_schema::{Section, SectionType};
use pagecraft_templates::PageKind;
use serde::{Deserialize, Serialize};

/// Only the most recent messages are sent with a conversational request.
pub const HISTORY_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the editing conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Single-shot generation request.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub prompt: String,
    pub section_type: Option<SectionType>,
    pub existing_sections: Vec<Section>,
    pub page_kind: Option<PageKind>,
    pub company_info: Option<String>,
}

/// Conversational generation request.
#[derive(Debug, Clone, Default)]
pub struct ConversationRequest {
    pub prompt: String,
    pub history: Vec<Message>,
    pub existing_sections: Vec<Section>,
    pub page_kind: Option<PageKind>,
}

pub(crate) fn system_prompt() -> String {
    let mut prompt = String::from(
        "You are a professional marketing copywriter. Generate landing page \
         sections as JSON.\n\nSection types:\n",
    );
    for ty in SectionType::ALL {
        prompt.push_str(&format!("- {}\n", ty.as_tag()));
    }
    prompt.push_str(
        "\nDesign guidelines:\n\
         - Base palette: blues (blue-600, indigo-600), flat design, muted single-color icons\n\
         - Icon names from the lucide icon set (e.g. \"Sparkles\", \"Zap\", \"Check\", \"Star\")\n\
         - Concise, clear copy with a professional B2B tone\n\n\
         Response format: always return a JSON array. Each section has the shape\n\
         { \"id\": \"<uuid>\", \"type\": \"<section type>\", \"order\": 0, \
         \"content\": { ...type-specific fields... } }\n",
    );
    prompt
}

pub(crate) fn conversation_system_prompt() -> String {
    let mut prompt = String::from(
        "You are a professional marketing copywriter collaborating with the user \
         on a landing page.\n\n\
         Rules:\n\
         1. Understand the user's instruction and generate or edit sections accordingly.\n\
         2. When you produce sections, return them as JSON.\n\
         3. When only conversation is needed (answering a question, confirming), \
            return an empty sections array.\n\
         4. Always respond in a friendly, polite tone.\n\nSection types:\n",
    );
    for ty in SectionType::ALL {
        prompt.push_str(&format!("- {}\n", ty.as_tag()));
    }
    prompt.push_str(
        "\nResponse format: always return a JSON object of the shape\n\
         { \"message\": \"<reply to the user>\", \"sections\": [ ...sections... ] }\n\
         where each section has the shape\n\
         { \"id\": \"<uuid>\", \"type\": \"<section type>\", \"order\": 0, \
         \"content\": { ...type-specific fields... } }\n",
    );
    prompt
}

fn page_kind_label(kind: PageKind) -> &'static str {
    match kind {
        PageKind::ProductLp => "product page (introducing a product or service)",
        PageKind::BenefitPage => "benefit page (exclusive bonus or resource signup)",
        PageKind::Whitepaper => "whitepaper page (document download)",
    }
}

pub(crate) fn build_user_prompt(request: &GenerateRequest) -> String {
    let mut prompt = format!("User request: {}\n\n", request.prompt);

    if let Some(kind) = request.page_kind {
        prompt.push_str(&format!("Page kind: {}\n\n", page_kind_label(kind)));
    }

    if let Some(info) = &request.company_info {
        prompt.push_str(&format!("Company and product information:\n{info}\n\n"));
    }

    if !request.existing_sections.is_empty() {
        prompt.push_str(&format!(
            "Existing sections ({}):\n",
            request.existing_sections.len()
        ));
        for (index, section) in request.existing_sections.iter().enumerate() {
            prompt.push_str(&format!("{}. {}\n", index + 1, section.type_tag()));
        }
        prompt.push('\n');
    }

    if let Some(ty) = request.section_type {
        prompt.push_str(&format!("Section type to generate: {}\n\n", ty.as_tag()));
    }

    prompt.push_str(
        "Based on the information above, generate one or more compelling, \
         effective sections. Return them as a JSON array.",
    );
    prompt
}

/// Conversation turns as prompt text blocks, oldest first, capped at
/// [`HISTORY_LIMIT`] recent messages.
pub(crate) fn build_conversation_parts(request: &ConversationRequest) -> Vec<String> {
    let mut parts = vec![conversation_system_prompt()];

    let start = request.history.len().saturating_sub(HISTORY_LIMIT);
    let recent = &request.history[start..];
    if !recent.is_empty() {
        let mut history = String::from("Previous conversation:\n");
        for message in recent {
            let speaker = match message.role {
                Role::User => "User",
                Role::Assistant => "Assistant",
            };
            history.push_str(&format!("{speaker}: {}\n", message.content));
        }
        parts.push(history);
    }

    let mut current = String::new();
    if let Some(kind) = request.page_kind {
        current.push_str(&format!("Page kind: {}\n", page_kind_label(kind)));
    }
    if !request.existing_sections.is_empty() {
        current.push_str(&format!(
            "\nCurrent sections ({}):\n",
            request.existing_sections.len()
        ));
        for (index, section) in request.existing_sections.iter().enumerate() {
            let title = section.content.to_value()["title"]
                .as_str()
                .unwrap_or(section.type_tag())
                .to_string();
            current.push_str(&format!(
                "{}. [{}] {}\n",
                index + 1,
                section.type_tag(),
                title
            ));
        }
    }
    current.push_str(&format!(
        "\nNew instruction from the user:\n{}\n\nRespond according to the instruction above.",
        request.prompt
    ));
    parts.push(current);

    parts
}
