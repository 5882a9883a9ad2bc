use koto_console::document::migrations::{
    detect_version, migrate_document, CURRENT_DOCUMENT_VERSION, MIGRATED_FOLDER_INSTRUCTION,
    MIGRATED_FOLDER_NAME, MIGRATED_REMINDER_NAME,
};
use koto_console::document::parse_document;
use serde_json::json;

#[test]
fn current_document_is_untouched() {
    let raw = json!({
        "user_name": "井崎さん",
        "personality": "元気な秘書",
        "master_prompt": "丁寧に答える",
        "knowledge_sources": [{"id": "F1", "name": "Sales", "instruction": "営業"}],
        "reminders": [{"name": "朝", "time": "07:00", "prompt": "", "enabled": false}],
        "notion_databases": [{"id": "n1", "name": "Tasks", "description": ""}],
    });
    assert_eq!(migrate_document(raw.clone()), raw);
}

#[test]
fn file_era_document_upgrades_to_current() {
    // Shape written by backends that kept the config in a local JSON file.
    let doc = parse_document(json!({
        "user_name": "井崎さん",
        "personality": "元気な秘書",
        "knowledge_folder_id": "1AbC",
        "reminder_time": "07:00",
        "reminder_prompt": "今日の天気を教えて",
    }))
    .unwrap();

    assert_eq!(doc.knowledge_sources.len(), 1);
    assert_eq!(doc.knowledge_sources[0].id, "1AbC");
    assert_eq!(doc.knowledge_sources[0].name, MIGRATED_FOLDER_NAME);
    assert_eq!(doc.knowledge_sources[0].instruction, MIGRATED_FOLDER_INSTRUCTION);
    assert_eq!(doc.reminders.len(), 1);
    assert_eq!(doc.reminders[0].name, MIGRATED_REMINDER_NAME);
    assert_eq!(doc.reminders[0].prompt, "今日の天気を教えて");
    assert!(doc.extra.is_empty(), "legacy keys must not be written back");
}

#[test]
fn empty_legacy_folder_id_is_dropped() {
    let doc = parse_document(json!({"knowledge_folder_id": ""})).unwrap();
    assert!(doc.knowledge_sources.is_empty());
    assert!(doc.extra.is_empty());
}

#[test]
fn migrated_output_detects_as_current() {
    let out = migrate_document(json!({"knowledge_folder_id": "x", "reminder_prompt": "p"}));
    assert_eq!(detect_version(out.as_object().unwrap()), CURRENT_DOCUMENT_VERSION);
    // A prompt without a time cannot make a reminder.
    assert_eq!(out["reminders"], json!([]));
}

#[test]
fn reminder_missing_enabled_parses_as_enabled() {
    let doc = parse_document(json!({
        "reminders": [{"name": "朝", "time": "07:00", "prompt": ""}]
    }))
    .unwrap();
    assert_eq!(doc.reminders.len(), 1);
    assert!(doc.reminders[0].enabled);
}
