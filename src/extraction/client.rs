//! HTTP client for the Gemini generateContent endpoint

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::decks::Flashcard;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const EXTRACTION_PROMPT: &str = "Analyze this document and extract the most important concepts to create a high-quality set of flashcards. Each flashcard must consist of a concise question and a comprehensive but brief answer. Focus on key terms, definitions, and important facts. Return a JSON array of objects with 'question' and 'answer' fields. Generate between 10 to 20 cards if the content allows.";

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("API key is not set")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Model returned invalid card data: {0}")]
    InvalidCards(#[from] serde_json::Error),
}

/// Configuration for the extraction client. Passed in explicitly so callers
/// and tests control the key, model, and endpoint.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// A question/answer pair as returned by the extraction service, before it
/// is wrapped into a [`Flashcard`] with a fresh id.
#[derive(Debug, Clone, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
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

/// Client for turning a PDF document into flashcards.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ExtractionError> {
        if config.api_key.trim().is_empty() {
            return Err(ExtractionError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(300))
            .connect_timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self { client, config })
    }

    /// Extract question/answer pairs from `pdf_data` and wrap each with a
    /// freshly assigned id.
    ///
    /// `file_name` is a hint used for logging; it is not sent upstream.
    pub async fn generate_flashcards(
        &self,
        pdf_data: &[u8],
        file_name: &str,
    ) -> Result<Vec<Flashcard>, ExtractionError> {
        log::info!(
            "Requesting flashcard extraction for '{}' ({} bytes)",
            file_name,
            pdf_data.len()
        );

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let body = json!({
            "contents": [{
                "parts": [
                    {
                        "inlineData": {
                            "mimeType": "application/pdf",
                            "data": BASE64.encode(pdf_data),
                        },
                    },
                    { "text": EXTRACTION_PROMPT },
                ],
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "question": {
                                "type": "STRING",
                                "description": "The question part of the flashcard.",
                            },
                            "answer": {
                                "type": "STRING",
                                "description": "The answer part of the flashcard.",
                            },
                        },
                        "required": ["question", "answer"],
                    },
                },
            },
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractionError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        let text = response_text(payload).ok_or(ExtractionError::EmptyResponse)?;

        let cards = parse_cards(&text)?;
        log::info!("Extracted {} cards from '{}'", cards.len(), file_name);
        Ok(cards)
    }
}

/// First text part of the first candidate, if any.
fn response_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content
        .parts
        .into_iter()
        .find_map(|p| p.text)
}

/// Parse the model's JSON card array and wrap each pair with a fresh id.
fn parse_cards(raw: &str) -> Result<Vec<Flashcard>, ExtractionError> {
    let pairs: Vec<QaPair> = serde_json::from_str(raw)?;
    Ok(pairs
        .into_iter()
        .map(|p| Flashcard::new(p.question, p.answer))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_is_rejected() {
        let result = GeminiClient::new(GeminiConfig::new("  "));
        assert!(matches!(result, Err(ExtractionError::MissingApiKey)));
    }

    #[test]
    fn test_config_defaults() {
        let config = GeminiConfig::new("key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);

        let config = GeminiConfig::new("key").with_model("gemini-2.5-pro");
        assert_eq!(config.model, "gemini-2.5-pro");
    }

    #[test]
    fn test_parse_cards_assigns_fresh_ids() {
        let raw = r#"[
            {"question": "What is Rust?", "answer": "A systems language"},
            {"question": "What is a crate?", "answer": "A compilation unit"}
        ]"#;

        let cards = parse_cards(raw).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].question, "What is Rust?");
        assert_eq!(cards[1].answer, "A compilation unit");
        assert_ne!(cards[0].id, cards[1].id);
    }

    #[test]
    fn test_parse_cards_rejects_malformed_payload() {
        let result = parse_cards("{\"question\": \"not an array\"}");
        assert!(matches!(result, Err(ExtractionError::InvalidCards(_))));
    }

    #[test]
    fn test_response_text_takes_first_candidate() {
        let payload: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "[]"}]}},
                    {"content": {"parts": [{"text": "ignored"}]}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(response_text(payload).as_deref(), Some("[]"));
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let payload: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response_text(payload), None);

        let payload: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": []}}]}"#).unwrap();
        assert_eq!(response_text(payload), None);
    }
}
