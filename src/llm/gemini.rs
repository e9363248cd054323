//! Gemini `generateContent` client.
//!
//! One user turn per request, no streaming. The response text is the
//! concatenation of the first candidate's text parts.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::config::LlmTimeouts;
use super::types::LlmError;

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    /// Send `prompt` to `model` and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] on transport failure, non-200 status, or a
    /// response without text.
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let body = GenerateRequest {
            contents: vec![RequestContent { role: "user", parts: vec![RequestPart { text: prompt }] }],
        };
        let url = generate_url(&self.base_url, model);
        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }
        parse_generate_response(&text)
    }
}

fn generate_url(base_url: &str, model: &str) -> String {
    format!("{base_url}/models/{model}:generateContent")
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

fn parse_generate_response(body: &str) -> Result<String, LlmError> {
    let parsed: GenerateResponse = serde_json::from_str(body).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let candidate = parsed
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::ApiParse("no candidates in response".into()))?;
    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();
    if text.is_empty() {
        return Err(LlmError::ApiParse("candidate has no text".into()));
    }
    Ok(text)
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
