/*!
 * Mock translator implementations for testing.
 *
 * This module provides a mock translator that simulates different behaviors:
 * - `MockTranslator::detecting("fr")` - detection returns a fixed code
 * - `MockTranslator::undetectable()` - detection always fails
 * - `MockBehavior::Failing` - translation always errors
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::{ProviderError, TranslationError};
use crate::providers::Translator;

/// Behavior mode for the mock translator's translate step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Returns the input tagged with the destination language, e.g. `[fr] text`
    Tagged,
    /// Returns the input uppercased (simulates providers re-casing literal tokens)
    Uppercase,
    /// Always fails with a provider error
    Failing,
}

/// Mock translator for testing pipeline behavior
#[derive(Debug)]
pub struct MockTranslator {
    /// Fixed detection result; `None` simulates detection failure
    detection: Option<String>,
    /// Behavior mode for translation
    behavior: MockBehavior,
    /// Number of detect calls observed
    detect_calls: Arc<AtomicUsize>,
    /// Number of translate calls observed
    translate_calls: Arc<AtomicUsize>,
}

impl MockTranslator {
    /// Create a new mock with explicit detection result and behavior
    pub fn new(detection: Option<&str>, behavior: MockBehavior) -> Self {
        Self {
            detection: detection.map(|code| code.to_string()),
            behavior,
            detect_calls: Arc::new(AtomicUsize::new(0)),
            translate_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Mock whose detection always returns `code` and whose translation tags
    pub fn detecting(code: &str) -> Self {
        Self::new(Some(code), MockBehavior::Tagged)
    }

    /// Mock whose detection always fails
    pub fn undetectable() -> Self {
        Self::new(None, MockBehavior::Tagged)
    }

    /// Mock that detects `code` but always fails to translate
    pub fn failing(code: &str) -> Self {
        Self::new(Some(code), MockBehavior::Failing)
    }

    /// Number of detect calls made against this mock
    pub fn detect_call_count(&self) -> usize {
        self.detect_calls.load(Ordering::SeqCst)
    }

    /// Number of translate calls made against this mock
    pub fn translate_call_count(&self) -> usize {
        self.translate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn detect_language(&self, _text: &str) -> Option<String> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);
        self.detection.clone()
    }

    async fn translate(&self, text: &str, dest_lang: &str) -> Result<String, TranslationError> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Tagged => Ok(format!("[{}] {}", dest_lang, text)),
            MockBehavior::Uppercase => Ok(text.to_uppercase()),
            MockBehavior::Failing => Err(TranslationError::Provider(
                ProviderError::RequestFailed("mock provider is down".to_string()),
            )),
        }
    }
}
