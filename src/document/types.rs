//! Configuration document types, matching the `/api/config` JSON body.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Instruction attached to a newly added knowledge source.
pub const DEFAULT_INSTRUCTION: &str = "このフォルダに関する質問に答えてください";

fn enabled_by_default() -> bool {
    true
}

/// A linked folder the assistant reads from, with free-text usage instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeSource {
    /// Folder id in the directory service.
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// How the assistant should use this folder.
    #[serde(default)]
    pub instruction: String,
    /// Backend fields the console does not edit, written back as they came.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A scheduled prompt the assistant runs every day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(default)]
    pub name: String,
    /// Local time of day, `HH:MM`.
    #[serde(default)]
    pub time: String,
    /// Instruction sent to the assistant when the reminder fires.
    #[serde(default)]
    pub prompt: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A linked Notion database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotionDatabase {
    /// 32-character database id from the Notion URL.
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The full configuration document.
///
/// Fields the console does not edit are kept in `extra` and written back
/// untouched, since saving always replaces the whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigDocument {
    pub user_name: String,
    /// Persona the assistant adopts.
    pub personality: String,
    /// Detailed behaviour instructions prepended to every conversation.
    pub master_prompt: String,
    pub knowledge_sources: Vec<KnowledgeSource>,
    pub reminders: Vec<Reminder>,
    pub notion_databases: Vec<NotionDatabase>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
