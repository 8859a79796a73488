/*!
 * Provider implementations for language detection and translation.
 *
 * This module contains the capability interface the pipeline consumes and the
 * client implementations behind it:
 * - Google: the public web translation endpoint (detect + translate)
 * - Mock: configurable fake for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::TranslationError;

/// Capability interface for a detect/translate service
///
/// Implementations are failure-prone by nature (network); the two operations
/// deliberately have different failure contracts. Detection is best-effort
/// and collapses every failure into `None` - "can't detect" is an expected,
/// common outcome, not exceptional. Translation is the step that was already
/// decided to happen, so its failures carry provider detail and propagate.
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Detect the language of `text`
    ///
    /// # Returns
    /// * `Option<String>` - The provider's single best-guess language code,
    ///   or `None` on any provider failure
    async fn detect_language(&self, text: &str) -> Option<String>;

    /// Translate `text` into `dest_lang`
    ///
    /// # Errors
    /// * `TranslationError` - On any provider failure, carrying the
    ///   provider-reported detail
    async fn translate(&self, text: &str, dest_lang: &str) -> Result<String, TranslationError>;
}

pub mod google;
pub mod mock;

pub use google::GoogleTranslator;
pub use mock::{MockBehavior, MockTranslator};
