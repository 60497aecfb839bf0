//! Async Gemini client for section generation.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::error::AiError;
use crate::parse::{parse_conversation, parse_generated, ConversationReply, GeneratedBatch};
use crate::prompt::{
    build_conversation_parts, build_user_prompt, system_prompt, ConversationRequest,
    GenerateRequest,
};

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    model: String,
}

impl GeminiClient {
    pub fn new(model: impl Into<String>) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|err| AiError::Network(err.to_string()))?;
        Ok(Self {
            http,
            model: model.into(),
        })
    }

    /// Single-shot generation: returns validated candidate sections.
    ///
    /// Candidates are not added to any document here; splicing them in is the
    /// caller's decision, so a failed call mutates nothing.
    pub async fn generate_sections(
        &self,
        api_key: &str,
        request: &GenerateRequest,
    ) -> Result<GeneratedBatch, AiError> {
        let prompt = format!("{}\n\n{}", system_prompt(), build_user_prompt(request));
        let payload = serde_json::json!({
            "contents": [
                { "parts": [{ "text": prompt }] }
            ],
            "generationConfig": {
                "temperature": 0.7,
                "maxOutputTokens": 2048
            }
        });

        let text = self.call(api_key, &payload).await?;
        let batch = parse_generated(&text)?;
        debug!(
            accepted = batch.sections.len(),
            rejected = batch.rejected,
            "generated section batch"
        );
        Ok(batch)
    }

    /// Conversational generation: returns the assistant's reply plus any
    /// validated sections it produced.
    pub async fn generate_with_conversation(
        &self,
        api_key: &str,
        request: &ConversationRequest,
    ) -> Result<ConversationReply, AiError> {
        let contents: Vec<Value> = build_conversation_parts(request)
            .into_iter()
            .map(|text| serde_json::json!({ "parts": [{ "text": text }] }))
            .collect();
        let payload = serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "temperature": 0.8,
                "maxOutputTokens": 4096,
                "responseMimeType": "application/json"
            }
        });

        let text = self.call(api_key, &payload).await?;
        let reply = parse_conversation(&text)?;
        debug!(
            accepted = reply.sections.len(),
            rejected = reply.rejected,
            "conversational reply parsed"
        );
        Ok(reply)
    }

    async fn call(&self, api_key: &str, payload: &Value) -> Result<String, AiError> {
        let endpoint = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, api_key
        );

        let response = self
            .http
            .post(endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::Network(err.to_string())
                }
            })?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Err(AiError::Auth),
            StatusCode::TOO_MANY_REQUESTS => return Err(AiError::RateLimited),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(AiError::InvalidResponse(format!(
                    "status {status} body {body}"
                )));
            }
            _ => {}
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| AiError::InvalidResponse(err.to_string()))?;

        body.get("candidates")
            .and_then(Value::as_array)
            .and_then(|items| items.first())
            .and_then(|item| item.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(Value::as_array)
            .and_then(|parts| parts.first())
            .and_then(|part| part.get("text"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(AiError::NoContent)
    }
}
