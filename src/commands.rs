/*!
 * User-facing command actions over the preference store.
 *
 * Each action maps 1:1 onto a store operation, validates language codes
 * against the supported set before touching the store, and returns the reply
 * text the chat adapter posts back. Unsupported-code replies are produced
 * here; the store never sees an invalid language.
 *
 * The permission model is a declarative table: each action carries an
 * `admin_only` flag the chat adapter checks before dispatching. No runtime
 * introspection.
 */

use anyhow::Result;

use crate::languages::{self, SUPPORTED_LANGUAGES};
use crate::store::Repository;

/// Maximum language codes per listing reply (platform message-length limit)
const LANGUAGES_CHUNK_SIZE: usize = 50;

/// Declarative description of one user-facing action
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Action name as invoked in chat
    pub name: &'static str,
    /// Short help text
    pub description: &'static str,
    /// Whether the action requires channel-admin permission
    pub admin_only: bool,
}

/// The full action table, one entry per user-facing command
pub const COMMAND_TABLE: &[CommandSpec] = &[
    CommandSpec {
        name: "ping",
        description: "Check that the bot is alive",
        admin_only: false,
    },
    CommandSpec {
        name: "setlang",
        description: "Set your preferred language",
        admin_only: false,
    },
    CommandSpec {
        name: "mylang",
        description: "Show your current preferred language",
        admin_only: false,
    },
    CommandSpec {
        name: "languages",
        description: "List all supported language codes",
        admin_only: false,
    },
    CommandSpec {
        name: "addtranschannel",
        description: "Flag a channel for automatic translation",
        admin_only: true,
    },
    CommandSpec {
        name: "removetranschannel",
        description: "Unflag a translation channel",
        admin_only: true,
    },
    CommandSpec {
        name: "listtranschannels",
        description: "List translation channels and their default languages",
        admin_only: true,
    },
    CommandSpec {
        name: "setchannellang",
        description: "Set a translation channel's default language",
        admin_only: true,
    },
];

/// Look up an action in the table by name
pub fn find_command(name: &str) -> Option<&'static CommandSpec> {
    COMMAND_TABLE.iter().find(|spec| spec.name == name)
}

/// Whether an action requires admin permission (`None` for unknown actions)
pub fn requires_admin(name: &str) -> Option<bool> {
    find_command(name).map(|spec| spec.admin_only)
}

/// Liveness check
pub fn ping() -> String {
    "Pong!".to_string()
}

/// Set the invoking user's preferred language
pub async fn set_my_language(repo: &Repository, user_id: &str, lang: &str) -> Result<String> {
    let lang = match languages::validate_lang(lang) {
        Ok(normalized) => normalized,
        Err(e) => {
            return Ok(format!(
                "{}. Use `languages` to see the list of supported codes.",
                e
            ));
        }
    };

    repo.set_user_lang(user_id, &lang).await?;
    Ok(format!("Your preferred language has been set to `{}`.", lang))
}

/// Show the invoking user's preferred language
pub async fn show_my_language(repo: &Repository, user_id: &str) -> Result<String> {
    match repo.get_user_lang(user_id).await? {
        Some(lang) => Ok(format!("Your preferred language is `{}`.", lang)),
        None => Ok(
            "You have not set a preferred language yet. Use `setlang <language_code>`.".to_string(),
        ),
    }
}

/// List all supported language codes, chunked to fit platform message limits
pub fn list_supported_languages() -> Vec<String> {
    SUPPORTED_LANGUAGES
        .chunks(LANGUAGES_CHUNK_SIZE)
        .map(|chunk| chunk.join(" "))
        .collect()
}

/// Flag a channel for automatic translation
///
/// `default_lang` falls back to `fallback_lang` (the configured global
/// default) when the admin does not name one explicitly.
pub async fn add_translation_channel(
    repo: &Repository,
    channel_id: &str,
    default_lang: Option<&str>,
    fallback_lang: &str,
) -> Result<String> {
    let lang = match languages::validate_lang(default_lang.unwrap_or(fallback_lang)) {
        Ok(normalized) => normalized,
        Err(e) => {
            return Ok(format!(
                "{}. Use `languages` to see the list of supported codes.",
                e
            ));
        }
    };

    repo.add_translation_channel(channel_id, &lang).await?;
    Ok(format!(
        "Translation channel `{}` added with default language `{}`.",
        channel_id, lang
    ))
}

/// Unflag a translation channel (succeeds even when it was never flagged)
pub async fn remove_translation_channel(repo: &Repository, channel_id: &str) -> Result<String> {
    repo.remove_translation_channel(channel_id).await?;
    Ok(format!("Translation channel `{}` removed.", channel_id))
}

/// List all translation channels with their default languages
pub async fn list_translation_channels(repo: &Repository) -> Result<String> {
    let channels = repo.list_translation_channels().await?;

    if channels.is_empty() {
        return Ok("No translation channels configured.".to_string());
    }

    let lines: Vec<String> = channels
        .iter()
        .map(|(channel_id, lang)| format!("`{}` -> `{}`", channel_id, lang))
        .collect();
    Ok(lines.join("\n"))
}

/// Set a translation channel's default language
///
/// Same upsert as adding the channel; kept as a distinct action so the reply
/// wording matches the admin's intent.
pub async fn set_channel_default_language(
    repo: &Repository,
    channel_id: &str,
    lang: &str,
) -> Result<String> {
    let lang = match languages::validate_lang(lang) {
        Ok(normalized) => normalized,
        Err(e) => {
            return Ok(format!(
                "{}. Use `languages` to see the list of supported codes.",
                e
            ));
        }
    };

    repo.add_translation_channel(channel_id, &lang).await?;
    Ok(format!(
        "Default language for channel `{}` set to `{}`.",
        channel_id, lang
    ))
}
