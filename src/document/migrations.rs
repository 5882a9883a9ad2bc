//! Forward-only migration of configuration documents.
//!
//! Older backends stored a single knowledge folder and a single reminder as
//! flat fields. [`migrate_document`] runs once on the raw JSON at the load
//! boundary and brings any older shape up to [`CURRENT_DOCUMENT_VERSION`],
//! dropping the legacy keys so the next save writes the current shape.

use serde_json::{json, Map, Value};

/// The document shape the console edits.
pub const CURRENT_DOCUMENT_VERSION: u32 = 3;

/// Name given to a knowledge source promoted from `knowledge_folder_id`.
pub const MIGRATED_FOLDER_NAME: &str = "移行されたフォルダ";
/// Instruction given to a knowledge source promoted from `knowledge_folder_id`.
pub const MIGRATED_FOLDER_INSTRUCTION: &str = "全般的な知識として利用";
/// Name given to a reminder promoted from `reminder_time` / `reminder_prompt`.
pub const MIGRATED_REMINDER_NAME: &str = "朝のリマインダー";

const STRING_FIELDS: &[&str] = &["user_name", "personality", "master_prompt"];
const LIST_FIELDS: &[&str] = &["knowledge_sources", "reminders", "notion_databases"];

/// Oldest document shape present in `doc`.
///
/// - 1: single `knowledge_folder_id`
/// - 2: single `reminder_time` / `reminder_prompt`
/// - 3: current
pub fn detect_version(doc: &Map<String, Value>) -> u32 {
    if doc.contains_key("knowledge_folder_id") {
        1
    } else if doc.contains_key("reminder_time") || doc.contains_key("reminder_prompt") {
        2
    } else {
        CURRENT_DOCUMENT_VERSION
    }
}

/// Upgrade a raw document to the current shape. Non-object input becomes an empty document.
pub fn migrate_document(raw: Value) -> Value {
    let mut doc = match raw {
        Value::Object(map) => map,
        other => {
            tracing::warn!(kind = %json_kind(&other), "config document is not an object, starting empty");
            Map::new()
        }
    };

    let mut version = detect_version(&doc);
    tracing::debug!(document_version = version, target = CURRENT_DOCUMENT_VERSION, "checking config migrations");

    while version < CURRENT_DOCUMENT_VERSION {
        let next = version + 1;
        tracing::info!(from = version, to = next, "migrating config document");

        match next {
            2 => migrate_v1_to_v2(&mut doc),
            3 => migrate_v2_to_v3(&mut doc),
            _ => {
                tracing::error!(version = next, "unknown migration target");
                break;
            }
        }
        version = next;
    }

    fill_defaults(&mut doc);
    Value::Object(doc)
}

/// v1 → v2: promote `knowledge_folder_id` into `knowledge_sources`.
///
/// Only applies when no knowledge sources exist yet.
fn migrate_v1_to_v2(doc: &mut Map<String, Value>) {
    let legacy = doc.remove("knowledge_folder_id");
    let folder_id = match legacy {
        Some(Value::String(id)) if !id.is_empty() => id,
        _ => return,
    };

    if is_empty_list(doc.get("knowledge_sources")) {
        doc.insert(
            "knowledge_sources".into(),
            json!([{
                "id": folder_id,
                "name": MIGRATED_FOLDER_NAME,
                "instruction": MIGRATED_FOLDER_INSTRUCTION,
            }]),
        );
    }
}

/// v2 → v3: promote `reminder_time` / `reminder_prompt` into `reminders`.
///
/// Only applies when the document has no `reminders` field at all.
fn migrate_v2_to_v3(doc: &mut Map<String, Value>) {
    let time = doc.remove("reminder_time");
    let prompt = doc.remove("reminder_prompt");

    let time = match time {
        Some(Value::String(t)) if !t.is_empty() => t,
        _ => return,
    };
    if !matches!(doc.get("reminders"), None | Some(Value::Null)) {
        return;
    }

    let prompt = match prompt {
        Some(Value::String(p)) => p,
        _ => String::new(),
    };
    doc.insert(
        "reminders".into(),
        json!([{
            "name": MIGRATED_REMINDER_NAME,
            "time": time,
            "prompt": prompt,
            "enabled": true,
        }]),
    );
}

/// Replace missing or null editable fields with empty values.
fn fill_defaults(doc: &mut Map<String, Value>) {
    for key in STRING_FIELDS {
        if matches!(doc.get(*key), None | Some(Value::Null)) {
            doc.insert((*key).into(), Value::String(String::new()));
        }
    }
    for key in LIST_FIELDS {
        if matches!(doc.get(*key), None | Some(Value::Null)) {
            doc.insert((*key).into(), Value::Array(Vec::new()));
        }
    }
}

fn is_empty_list(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
