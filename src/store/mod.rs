/*!
 * Preference store module for persistent language settings.
 *
 * This module provides SQLite-based persistence for:
 * - Per-user preferred languages
 * - Translation channels and their default languages
 */

// Allow dead code - store types are for library consumers
#![allow(dead_code)]

pub mod schema;
pub mod connection;
pub mod repository;

// Re-export main types
pub use connection::StoreConnection;
pub use repository::Repository;
