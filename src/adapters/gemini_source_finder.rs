use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::core::interfaces::adapters::SourceFinder;
use crate::core::models::{ResourceRecord, SearchResult};
use crate::core::search_error::SearchError;
use crate::global_constants;

pub struct GeminiSourceFinder {
    http_client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

/// Payload the model is instructed to produce, enforced by the declared
/// response schema.
#[derive(Debug, Deserialize)]
struct SourcesPayload {
    summary: String,
    resources: Vec<ResourceRecord>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "groundingMetadata")]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroundingMetadata {
    #[serde(rename = "groundingChunks", default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
struct WebSource {
    uri: Option<String>,
}

impl GeminiSourceFinder {
    pub fn build(api_key: Option<String>, model: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            model,
            base_url: global_constants::GEMINI_API_BASE_URL.to_string(),
        }
    }

    pub fn build_from_env(model: String) -> Self {
        let api_key = std::env::var(global_constants::API_KEY_ENV_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty());

        if api_key.is_none() {
            log::warn!(
                "[GEMINI] {} is not set, searches will fail until it is provided",
                global_constants::API_KEY_ENV_VAR
            );
        }

        Self::build(api_key, model)
    }

    fn build_prompt(topic: &str) -> String {
        global_constants::PROMPT_TEMPLATE.replace("{topic}", topic)
    }

    fn response_schema() -> serde_json::Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "summary": { "type": "STRING" },
                "resources": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "title": { "type": "STRING" },
                            "url": { "type": "STRING" },
                            "description": { "type": "STRING" },
                            "category": {
                                "type": "STRING",
                                "enum": ["legal", "alternative"]
                            }
                        },
                        "required": ["title", "url", "description", "category"]
                    }
                }
            },
            "required": ["summary", "resources"]
        })
    }

    fn build_request_body(topic: &str) -> serde_json::Value {
        json!({
            "contents": [{ "parts": [{ "text": Self::build_prompt(topic) }] }],
            "tools": [{ "google_search": {} }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::response_schema()
            }
        })
    }

    fn parse_response(body: &str) -> Result<SearchResult, SearchError> {
        let response: GenerateContentResponse = serde_json::from_str(body)
            .map_err(|e| SearchError::Parse(format!("invalid response envelope: {}", e)))?;

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| SearchError::Parse("response contained no candidates".to_string()))?;

        let grounding_urls = candidate
            .grounding_metadata
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.web.and_then(|web| web.uri))
                    .collect()
            })
            .unwrap_or_default();

        let payload_text = candidate
            .content
            .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
            .ok_or_else(|| SearchError::Parse("candidate contained no text part".to_string()))?;

        let payload: SourcesPayload = serde_json::from_str(payload_text.trim())
            .map_err(|e| SearchError::Parse(format!("payload violates schema: {}", e)))?;

        Ok(SearchResult::build(
            payload.summary,
            payload.resources,
            grounding_urls,
        ))
    }
}

#[async_trait]
impl SourceFinder for GeminiSourceFinder {
    async fn find_sources(&self, topic: &str) -> Result<SearchResult, SearchError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            SearchError::Config(format!(
                "{} is not set",
                global_constants::API_KEY_ENV_VAR
            ))
        })?;

        let request_url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );

        log::info!("[GEMINI] Finding sources for topic: {}", topic);

        let response = self
            .http_client
            .post(&request_url)
            .header("x-goog-api-key", api_key)
            .json(&Self::build_request_body(topic))
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        if !status.is_success() {
            log::error!("[GEMINI] API returned {}: {}", status, body);
            return Err(SearchError::Api(format!("status {}", status)));
        }

        log::debug!("[GEMINI] Raw response: {}", body);

        let result = Self::parse_response(&body)?;
        log::info!(
            "[GEMINI] Parsed {} resources and {} grounding urls",
            result.resources.len(),
            result.grounding_urls.len()
        );

        Ok(result)
    }
}
