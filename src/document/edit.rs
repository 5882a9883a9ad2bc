//! Local mutations of a [`ConfigDocument`].
//!
//! Every mutator either applies fully or returns an [`EditError`] and leaves
//! the document unchanged. Nothing here talks to the backend; callers save
//! the whole document afterwards.

use thiserror::Error;

use super::types::{ConfigDocument, KnowledgeSource, NotionDatabase, Reminder, DEFAULT_INSTRUCTION};
use crate::browser::FolderRef;

/// Most reminders a document may hold.
pub const MAX_REMINDERS: usize = 3;

const NEW_REMINDER_NAME: &str = "新しいリマインダー";
const NEW_REMINDER_TIME: &str = "12:00";
const DEFAULT_DATABASE_NAME: &str = "Notion DB";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("folder {name:?} ({id}) is already a knowledge source")]
    DuplicateSource { id: String, name: String },

    #[error("no knowledge source with id {0}")]
    UnknownSource(String),

    #[error("at most {0} reminders are allowed")]
    ReminderLimit(usize),

    #[error("no reminder at position {0}")]
    ReminderIndex(usize),

    #[error("no Notion database with id {0}")]
    UnknownDatabase(String),

    #[error("{0} must not be empty")]
    MissingField(&'static str),
}

/// Changes to one reminder. `None` fields are left as they are.
#[derive(Debug, Clone, Default)]
pub struct ReminderPatch {
    pub name: Option<String>,
    pub time: Option<String>,
    pub prompt: Option<String>,
    pub enabled: Option<bool>,
}

/// Changes to the profile fields. `None` fields are left as they are.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub user_name: Option<String>,
    pub personality: Option<String>,
    pub master_prompt: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.user_name.is_none() && self.personality.is_none() && self.master_prompt.is_none()
    }
}

impl ConfigDocument {
    pub fn has_knowledge_source(&self, id: &str) -> bool {
        self.knowledge_sources.iter().any(|k| k.id == id)
    }

    /// Link a folder picked in the browser, with the default instruction.
    pub fn add_knowledge_source(&mut self, folder: FolderRef) -> Result<&KnowledgeSource, EditError> {
        if folder.id.is_empty() {
            return Err(EditError::MissingField("folder id"));
        }
        if self.has_knowledge_source(&folder.id) {
            return Err(EditError::DuplicateSource {
                id: folder.id,
                name: folder.name,
            });
        }
        self.knowledge_sources.push(KnowledgeSource {
            id: folder.id,
            name: folder.name,
            instruction: DEFAULT_INSTRUCTION.to_string(),
            extra: Default::default(),
        });
        Ok(&self.knowledge_sources[self.knowledge_sources.len() - 1])
    }

    pub fn remove_knowledge_source(&mut self, id: &str) -> Result<KnowledgeSource, EditError> {
        let pos = self
            .knowledge_sources
            .iter()
            .position(|k| k.id == id)
            .ok_or_else(|| EditError::UnknownSource(id.to_string()))?;
        Ok(self.knowledge_sources.remove(pos))
    }

    pub fn set_instruction(&mut self, id: &str, instruction: impl Into<String>) -> Result<(), EditError> {
        let source = self
            .knowledge_sources
            .iter_mut()
            .find(|k| k.id == id)
            .ok_or_else(|| EditError::UnknownSource(id.to_string()))?;
        source.instruction = instruction.into();
        Ok(())
    }

    /// Append a blank, enabled reminder at noon. Returns its index.
    pub fn add_reminder(&mut self) -> Result<usize, EditError> {
        if self.reminders.len() >= MAX_REMINDERS {
            return Err(EditError::ReminderLimit(MAX_REMINDERS));
        }
        self.reminders.push(Reminder {
            name: NEW_REMINDER_NAME.to_string(),
            time: NEW_REMINDER_TIME.to_string(),
            prompt: String::new(),
            enabled: true,
            extra: Default::default(),
        });
        Ok(self.reminders.len() - 1)
    }

    pub fn update_reminder(&mut self, index: usize, patch: ReminderPatch) -> Result<&Reminder, EditError> {
        let reminder = self
            .reminders
            .get_mut(index)
            .ok_or(EditError::ReminderIndex(index))?;
        if patch.time.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(EditError::MissingField("reminder time"));
        }
        if let Some(name) = patch.name {
            reminder.name = name;
        }
        if let Some(time) = patch.time {
            reminder.time = time;
        }
        if let Some(prompt) = patch.prompt {
            reminder.prompt = prompt;
        }
        if let Some(enabled) = patch.enabled {
            reminder.enabled = enabled;
        }
        Ok(reminder)
    }

    pub fn remove_reminder(&mut self, index: usize) -> Result<Reminder, EditError> {
        if index >= self.reminders.len() {
            return Err(EditError::ReminderIndex(index));
        }
        Ok(self.reminders.remove(index))
    }

    /// Link a Notion database. An empty name falls back to `Notion DB`.
    pub fn add_notion_database(&mut self, id: &str, name: &str) -> Result<&NotionDatabase, EditError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(EditError::MissingField("database id"));
        }
        let name = match name.trim() {
            "" => DEFAULT_DATABASE_NAME,
            n => n,
        };
        self.notion_databases.push(NotionDatabase {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            extra: Default::default(),
        });
        Ok(&self.notion_databases[self.notion_databases.len() - 1])
    }

    /// Unlink every database with this id.
    pub fn remove_notion_database(&mut self, id: &str) -> Result<usize, EditError> {
        let before = self.notion_databases.len();
        self.notion_databases.retain(|d| d.id != id);
        match before - self.notion_databases.len() {
            0 => Err(EditError::UnknownDatabase(id.to_string())),
            removed => Ok(removed),
        }
    }

    pub fn describe_notion_database(&mut self, id: &str, description: impl Into<String>) -> Result<(), EditError> {
        let db = self
            .notion_databases
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| EditError::UnknownDatabase(id.to_string()))?;
        db.description = description.into();
        Ok(())
    }

    pub fn update_profile(&mut self, patch: ProfilePatch) {
        if let Some(user_name) = patch.user_name {
            self.user_name = user_name;
        }
        if let Some(personality) = patch.personality {
            self.personality = personality;
        }
        if let Some(master_prompt) = patch.master_prompt {
            self.master_prompt = master_prompt;
        }
    }
}
