/*!
 * Channel routing for inbound messages.
 *
 * The chat gateway hands every message to the router; the router decides
 * whether the translation pipeline runs at all. Bot-authored messages,
 * command invocations and messages outside translation channels never reach
 * the pipeline.
 */

use anyhow::Result;
use log::trace;

use crate::pipeline::TranslationPipeline;

/// An inbound message as seen by the router
///
/// A deliberately narrow view of the platform message object: just the fields
/// the routing decision and the pipeline need.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    /// Platform id of the message author
    pub author_id: String,
    /// Platform id of the channel the message arrived in
    pub channel_id: String,
    /// Raw message text
    pub content: String,
    /// Whether the author is a bot account
    pub author_is_bot: bool,
}

/// Decides, per incoming message, whether to forward it to the pipeline
pub struct ChannelRouter {
    /// The pipeline invoked for messages that pass the gate
    pipeline: TranslationPipeline,
    /// Prefix identifying command invocations (skipped by the router)
    command_prefix: String,
}

impl ChannelRouter {
    /// Create a new router in front of the given pipeline
    pub fn new(pipeline: TranslationPipeline, command_prefix: impl Into<String>) -> Self {
        Self {
            pipeline,
            command_prefix: command_prefix.into(),
        }
    }

    /// Route one inbound message
    ///
    /// Returns `Some(reply)` when the pipeline ran (the caller posts the
    /// reply associated with the original message), `None` when the message
    /// is not subject to translation.
    pub async fn route(&self, message: &IncomingMessage) -> Result<Option<String>> {
        if message.author_is_bot {
            trace!("Skipping bot-authored message in {}", message.channel_id);
            return Ok(None);
        }

        if !self.command_prefix.is_empty() && message.content.starts_with(&self.command_prefix) {
            trace!("Skipping command invocation in {}", message.channel_id);
            return Ok(None);
        }

        if !self
            .pipeline
            .repository()
            .is_translation_channel(&message.channel_id)
            .await?
        {
            return Ok(None);
        }

        let reply = self
            .pipeline
            .handle_message(&message.author_id, &message.channel_id, &message.content)
            .await?;

        Ok(Some(reply))
    }
}
