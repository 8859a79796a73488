use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;

use crate::errors::{ProviderError, TranslationError};
use crate::providers::Translator;

/// Default public endpoint for the web translation API
const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client for the Google web translation endpoint
///
/// Talks to the unauthenticated `translate_a/single` endpoint (the same
/// service the reference bot consumed through its client library). Both
/// detection and translation are served by the same call; the response is a
/// positional JSON array where index 0 holds the translated segments and
/// index 2 the detected source language.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    /// HTTP client for API requests
    client: Client,
    /// API endpoint URL (optional, defaults to the public endpoint)
    endpoint: String,
}

impl GoogleTranslator {
    /// Create a new client against the public endpoint with the default timeout
    pub fn new() -> Self {
        Self::with_endpoint(String::new(), DEFAULT_TIMEOUT_SECS)
    }

    /// Create a new client with an explicit endpoint and timeout
    ///
    /// An empty `endpoint` selects the public API.
    pub fn with_endpoint(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    fn api_url(&self) -> String {
        if self.endpoint.is_empty() {
            format!("{}/translate_a/single", DEFAULT_ENDPOINT)
        } else {
            format!("{}/translate_a/single", self.endpoint.trim_end_matches('/'))
        }
    }

    /// Issue one request and return the raw positional response array
    async fn request(&self, text: &str, dest_lang: &str) -> Result<Value, ProviderError> {
        let response = self
            .client
            .get(self.api_url())
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", dest_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }

    /// Concatenate the translated segments from a response array
    fn extract_translation(value: &Value) -> Option<String> {
        let segments = value.get(0)?.as_array()?;
        let mut text = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(Value::as_str) {
                text.push_str(part);
            }
        }
        if text.is_empty() { None } else { Some(text) }
    }

    /// Read the detected source language from a response array
    fn extract_detected_lang(value: &Value) -> Option<String> {
        value
            .get(2)
            .and_then(Value::as_str)
            .map(|code| code.to_lowercase())
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn detect_language(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        // Detection rides on a throwaway translate-to-English request; the
        // endpoint reports the detected source language either way.
        match self.request(text, "en").await {
            Ok(value) => {
                let detected = Self::extract_detected_lang(&value);
                debug!("Detected language: {:?}", detected);
                detected
            }
            Err(e) => {
                warn!("Language detection failed, treating as unknown: {}", e);
                None
            }
        }
    }

    async fn translate(&self, text: &str, dest_lang: &str) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Err(TranslationError::EmptyInput);
        }

        let value = self.request(text, dest_lang).await?;

        Self::extract_translation(&value).ok_or_else(|| {
            TranslationError::Provider(ProviderError::ParseError(
                "Response contained no translated segments".to_string(),
            ))
        })
    }
}
