//! The KOTO configuration document: types, load-time migration, and edits.
//!
//! The console owns one [`ConfigDocument`] per command. It is loaded with
//! [`ApiClient::fetch_config`](crate::api::ApiClient::fetch_config), which
//! runs [`migrations::migrate_document`] on the raw JSON, mutated locally
//! through the methods in [`edit`], and saved back whole.

pub mod edit;
pub mod migrations;
pub mod types;

pub use edit::{EditError, ProfilePatch, ReminderPatch, MAX_REMINDERS};
pub use types::{ConfigDocument, KnowledgeSource, NotionDatabase, Reminder, DEFAULT_INSTRUCTION};

/// Parse a raw document body the same way the API client does.
pub fn parse_document(raw: serde_json::Value) -> Result<ConfigDocument, serde_json::Error> {
    serde_json::from_value(migrations::migrate_document(raw))
}
