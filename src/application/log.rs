//! # Log Entity
//!
//! A single collaboratively edited text document with ownership and edit metadata.
//! Title validation lives in the registry; the entity stores what it is given.

use crate::domain::types::Sender;
use chrono::{DateTime, Local};
use std::collections::HashSet;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Log {
    pub id: Uuid,
    pub title: String,
    pub creator: Sender,
    /// Stable ids of every user that has ever edited the text. Grow-only.
    pub editors: HashSet<String>,
    pub text: String,
    pub created_at: DateTime<Local>,
    pub last_edited: DateTime<Local>,
}

impl Log {
    pub fn new(title: &str, creator: Sender) -> Self {
        let now = Local::now();
        let mut editors = HashSet::new();
        editors.insert(creator.id.clone());
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            creator,
            editors,
            text: String::new(),
            created_at: now,
            last_edited: now,
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn add_editor(&mut self, user: &Sender) {
        self.editors.insert(user.id.clone());
    }

    pub fn touch_edited_now(&mut self) {
        self.last_edited = Local::now();
    }

    /// Renders the last-edited timestamp as `YYYY-MM-DD | HH:MM:SS` (local time).
    pub fn formatted_last_edited(&self) -> String {
        self.last_edited.format("%Y-%m-%d | %H:%M:%S").to_string()
    }
}
