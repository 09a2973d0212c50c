//! Gemini Meter Reader
//!
//! Implements the MeterReader port against Gemini's generateContent
//! endpoint: the meter photo goes up as inline data, the numeric
//! reading comes back in the model's answer text.

use async_trait::async_trait;
use base64::Engine;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

use leitura::{DomainError, ExtractedReading, MeterReader};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_IMAGE_BASE_URL: &str = "https://example.com/temp";

const PROMPT: &str =
    "Read the utility meter in this image and answer with the numeric value shown \
     on the display, digits only.";

/// Meter reader backed by the Gemini vision API
#[derive(Clone)]
pub struct GeminiMeterReader {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    image_base_url: String,
}

impl GeminiMeterReader {
    /// Creates a new reader using the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }

    /// Overrides the Gemini model name if needed.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Points the client at a different API host (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Base under which temporary image links are generated.
    pub fn with_image_base_url(mut self, image_base_url: impl Into<String>) -> Self {
        self.image_base_url = image_base_url.into();
        self
    }

    /// Temporary link standing in for a real object-storage upload.
    fn temporary_image_url(&self) -> String {
        format!("{}/{}.jpg", self.image_base_url, Uuid::new_v4())
    }
}

#[async_trait]
impl MeterReader for GeminiMeterReader {
    async fn read_meter(&self, image_base64: &str) -> Result<ExtractedReading, DomainError> {
        let image = image_base64.trim();
        let image_bytes = base64::engine::general_purpose::STANDARD
            .decode(image)
            .map_err(|err| {
                DomainError::invalid_input("image", format!("not valid base64: {err}"))
            })?;

        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            self.base_url,
            model = self.model,
            api_key = self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part::Text {
                        text: PROMPT.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: sniff_mime_type(&image_bytes).to_string(),
                            data: image.to_string(),
                        },
                    },
                ],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| DomainError::ExtractionFailed(format!("Request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| DomainError::ExtractionFailed(format!("Malformed response: {err}")))?;

        let answer = extract_answer(&payload)
            .ok_or_else(|| DomainError::ExtractionFailed("Gemini returned no answer".to_string()))?;

        let measure_value = parse_measure_value(&answer).ok_or_else(|| {
            DomainError::ExtractionFailed(format!("No numeric reading in answer: {answer:?}"))
        })?;

        Ok(ExtractedReading {
            image_url: self.temporary_image_url(),
            measure_value,
        })
    }
}

// ============================================
// Request Types
// ============================================

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

// ============================================
// Helper Functions
// ============================================

fn extract_answer(root: &Value) -> Option<String> {
    let candidates = root.get("candidates")?.as_array()?;

    let mut collected = Vec::new();
    for candidate in candidates {
        if let Some(parts) = candidate
            .get("content")
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
        {
            for part in parts {
                if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        collected.push(trimmed.to_string());
                    }
                }
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n"))
    }
}

/// First numeric token in the model's answer, e.g. "The meter reads
/// 1042.7 m3" -> 1042.7
fn parse_measure_value(answer: &str) -> Option<f64> {
    answer
        .split(|c: char| !c.is_ascii_digit() && c != '.')
        .filter(|token| token.chars().any(|c| c.is_ascii_digit()))
        .find_map(|token| token.trim_matches('.').parse::<f64>().ok())
}

fn sniff_mime_type(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && bytes[8..12] == *b"WEBP" {
        "image/webp"
    } else {
        // JPEG (0xFF 0xD8) and anything unrecognized
        "image/jpeg"
    }
}

fn map_http_error(status: StatusCode, body: String) -> DomainError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    DomainError::ExtractionFailed(format!("Gemini API error ({status}): {message}"))
}
