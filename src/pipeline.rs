/*!
 * The message translation pipeline.
 *
 * Each incoming message runs one stateless pipeline pass:
 * resolve the effective target language (user preference, then channel
 * default, then the global default), guard mention tokens, detect the source
 * language, then either translate or pass the message through untouched.
 * Exactly one reply text is produced per input message.
 */

use std::sync::Arc;

use anyhow::Result;
use log::{debug, warn};

use crate::mention_guard;
use crate::providers::Translator;
use crate::store::Repository;

/// Global fallback when neither the user nor the channel has a language set
pub const DEFAULT_LANG: &str = "en";

/// Orchestrates preference lookup, token guarding and provider calls
///
/// Holds no state across invocations beyond what the preference store
/// persists; provider and store are injected capabilities so tests can
/// substitute fakes.
pub struct TranslationPipeline {
    /// Preference store (read-only from the pipeline's point of view)
    repository: Repository,
    /// Translation provider capability
    translator: Arc<dyn Translator>,
}

impl TranslationPipeline {
    /// Create a new pipeline over the given store and provider
    pub fn new(repository: Repository, translator: Arc<dyn Translator>) -> Self {
        Self {
            repository,
            translator,
        }
    }

    /// Access the preference store backing this pipeline
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Resolve the effective target language for an author in a channel
    ///
    /// Fallback chain: user preference, then channel default, then
    /// [`DEFAULT_LANG`].
    pub async fn resolve_target_lang(&self, user_id: &str, channel_id: &str) -> Result<String> {
        if let Some(lang) = self.repository.get_user_lang(user_id).await? {
            return Ok(lang);
        }
        if let Some(lang) = self.repository.get_channel_default_lang(channel_id).await? {
            return Ok(lang);
        }
        Ok(DEFAULT_LANG.to_string())
    }

    /// Run one message through the pipeline and produce the reply text
    ///
    /// Detection failure and source-equals-target both degrade to
    /// passthrough: the original text with mentions intact. A translate
    /// failure is surfaced verbatim in the reply rather than dropped -
    /// the channel sees that translation was attempted and failed.
    ///
    /// # Errors
    /// Only preference store failures propagate; provider failures are
    /// absorbed into the reply per the policies above.
    pub async fn handle_message(
        &self,
        author_id: &str,
        channel_id: &str,
        text: &str,
    ) -> Result<String> {
        let target_lang = self.resolve_target_lang(author_id, channel_id).await?;

        let (guarded, mention_map) = mention_guard::protect(text);

        let detected = self.translator.detect_language(&guarded).await;
        debug!(
            "Message in channel {}: detected={:?}, target={}",
            channel_id, detected, target_lang
        );

        // Language code equality is exact: zh-cn and zh-tw are distinct
        // languages, never unified.
        match detected {
            Some(source_lang) if source_lang != target_lang => {
                match self.translator.translate(&guarded, &target_lang).await {
                    Ok(translated) => Ok(mention_guard::restore(&translated, &mention_map)),
                    Err(e) => {
                        warn!("Translation to {} failed: {}", target_lang, e);
                        Ok(format!("[Translation error: {}]", e))
                    }
                }
            }
            // Unknown source is treated as "assume already correct" to avoid
            // mistranslating short strings detection gets wrong.
            _ => Ok(mention_guard::restore(&guarded, &mention_map)),
        }
    }
}
