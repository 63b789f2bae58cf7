//! Gemini client for the AI operation.
//!
//! One text-only generateContent call per question, no retries. Every failure
//! mode collapses into `AiError`; the dispatcher decides what the caller sees.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Error)]
pub enum AiError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,
    #[error("Gemini API error: {status} - {body}")]
    Api { status: reqwest::StatusCode, body: String },
    #[error("Gemini error: {0}")]
    Provider(String),
    #[error("Gemini returned no text")]
    EmptyResponse,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    timeout: Duration,
}

// ============================================================================
// API Types
// ============================================================================

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiTextPart>,
}

#[derive(Serialize)]
struct GeminiTextPart {
    text: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiApiError>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContentResponse,
}

#[derive(Deserialize)]
struct GeminiContentResponse {
    parts: Vec<GeminiPartResponse>,
}

#[derive(Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiApiError {
    message: String,
}

// ============================================================================
// Client
// ============================================================================

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.into(),
            timeout,
        }
    }

    /// Ask the model for a single-word answer. Returns the raw response text;
    /// normalization is the caller's concern.
    pub async fn ask(&self, question: &str) -> Result<String, AiError> {
        let api_key = self.api_key.as_deref().ok_or(AiError::MissingApiKey)?;

        let api_request = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiTextPart {
                    text: single_word_prompt(question),
                }],
            }],
        };

        let url = format!("{}/{}:generateContent?key={}", GEMINI_API_BASE, self.model, api_key);

        let response = self
            .client
            .post(&url)
            .json(&api_request)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api { status, body });
        }

        let api_response: GeminiResponse = response.json().await?;

        if let Some(error) = api_response.error {
            return Err(AiError::Provider(error.message));
        }

        let mut text = String::new();
        if let Some(candidate) = api_response.candidates.into_iter().flatten().next() {
            for part in candidate.content.parts {
                if let Some(t) = part.text {
                    text.push_str(&t);
                }
            }
        }

        if text.trim().is_empty() {
            return Err(AiError::EmptyResponse);
        }
        Ok(text)
    }
}

/// Fixed instructional template; the sanitized question is the only variable.
fn single_word_prompt(question: &str) -> String {
    format!(
        "Answer the following question with ONLY a single word. Do not include \
         any punctuation, explanation, or additional text. Just one word.\n\n\
         Question: {question}\n\nSingle-word answer:"
    )
}
