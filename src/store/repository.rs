/*!
 * Repository layer for preference store operations.
 *
 * This module provides a high-level API for all preference reads and writes,
 * abstracting away the SQL details. The repository performs no language
 * validation - it is a pure persistence layer, and callers validate codes
 * against the supported set before writing.
 */

use anyhow::Result;
use log::debug;
use rusqlite::{OptionalExtension, params};

use super::connection::StoreConnection;

/// Repository for preference store operations
///
/// All operations are safe under concurrent invocation from multiple
/// message-handling tasks; rows are independent and single-statement upserts
/// give last-write-wins semantics with no partial writes.
#[derive(Clone)]
pub struct Repository {
    /// Database connection
    db: StoreConnection,
}

impl Repository {
    /// Create a new repository with the given store connection
    pub fn new(db: StoreConnection) -> Self {
        Self { db }
    }

    /// Create a repository with the default database location
    pub fn new_default() -> Result<Self> {
        let db = StoreConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = StoreConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    /// Idempotent schema initialization; safe on every process start
    pub fn init(&self) -> Result<()> {
        self.db.init()
    }

    /// Access the underlying connection (for stats and maintenance)
    pub fn connection(&self) -> &StoreConnection {
        &self.db
    }

    // =========================================================================
    // User preference operations
    // =========================================================================

    /// Upsert a user's preferred language (last write wins)
    pub async fn set_user_lang(&self, user_id: &str, lang: &str) -> Result<()> {
        let user_id = user_id.to_string();
        let lang = lang.to_string();

        debug!("Setting language for user {}: {}", user_id, lang);

        self.db
            .execute_async(move |conn| {
                conn.execute(
                    r#"
                    INSERT INTO user_lang (user_id, lang) VALUES (?1, ?2)
                    ON CONFLICT(user_id) DO UPDATE SET lang = excluded.lang
                    "#,
                    params![user_id, lang],
                )?;
                Ok(())
            })
            .await
    }

    /// Look up a user's preferred language
    ///
    /// `None` signals "no preference set" - the caller must supply a fallback.
    pub async fn get_user_lang(&self, user_id: &str) -> Result<Option<String>> {
        let user_id = user_id.to_string();

        self.db
            .execute_async(move |conn| {
                let lang = conn
                    .query_row(
                        "SELECT lang FROM user_lang WHERE user_id = ?1",
                        [user_id],
                        |row| row.get(0),
                    )
                    .optional()?;
                Ok(lang)
            })
            .await
    }

    // =========================================================================
    // Translation channel operations
    // =========================================================================

    /// Flag a channel for automatic translation (idempotent upsert)
    ///
    /// Re-adding an existing channel overwrites its default language.
    pub async fn add_translation_channel(&self, channel_id: &str, default_lang: &str) -> Result<()> {
        let channel_id = channel_id.to_string();
        let default_lang = default_lang.to_string();

        debug!(
            "Adding translation channel {} with default {}",
            channel_id, default_lang
        );

        self.db
            .execute_async(move |conn| {
                conn.execute(
                    r#"
                    INSERT INTO trans_channel (channel_id, default_lang) VALUES (?1, ?2)
                    ON CONFLICT(channel_id) DO UPDATE SET default_lang = excluded.default_lang
                    "#,
                    params![channel_id, default_lang],
                )?;
                Ok(())
            })
            .await
    }

    /// Unflag a channel (idempotent - succeeds when the channel is absent)
    pub async fn remove_translation_channel(&self, channel_id: &str) -> Result<()> {
        let channel_id = channel_id.to_string();

        debug!("Removing translation channel {}", channel_id);

        self.db
            .execute_async(move |conn| {
                conn.execute(
                    "DELETE FROM trans_channel WHERE channel_id = ?1",
                    [channel_id],
                )?;
                Ok(())
            })
            .await
    }

    /// Check whether a channel is flagged for automatic translation
    pub async fn is_translation_channel(&self, channel_id: &str) -> Result<bool> {
        let channel_id = channel_id.to_string();

        self.db
            .execute_async(move |conn| {
                let count: i64 = conn.query_row(
                    "SELECT COUNT(*) FROM trans_channel WHERE channel_id = ?1",
                    [channel_id],
                    |row| row.get(0),
                )?;
                Ok(count > 0)
            })
            .await
    }

    /// Look up a channel's default language
    pub async fn get_channel_default_lang(&self, channel_id: &str) -> Result<Option<String>> {
        let channel_id = channel_id.to_string();

        self.db
            .execute_async(move |conn| {
                let lang = conn
                    .query_row(
                        "SELECT default_lang FROM trans_channel WHERE channel_id = ?1",
                        [channel_id],
                        |row| row.get(0),
                    )
                    .optional()?;
                Ok(lang)
            })
            .await
    }

    /// List all translation channels with their default languages, keyed order
    pub async fn list_translation_channels(&self) -> Result<Vec<(String, String)>> {
        self.db
            .execute_async(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT channel_id, default_lang FROM trans_channel ORDER BY channel_id",
                )?;
                let rows = stmt
                    .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(rows)
            })
            .await
    }
}
