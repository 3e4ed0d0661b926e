//! # Log Registry
//!
//! In-memory index of all active Logs plus per-user ownership and edit records.
//! Implements the five user-facing commands as synchronous map transitions.
//! Every operation returns a display-ready reply string, success and error
//! alike, mirroring the reply-to-chat delivery model. Nothing here performs
//! I/O and nothing survives a restart.

use crate::application::log::Log;
use crate::domain::types::Sender;
use crate::strings::messages;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct LogRegistry {
    /// title -> Log. The sole source of truth for existence.
    all_logs: HashMap<String, Log>,
    /// user id -> titles that user created.
    owned_logs: HashMap<String, HashSet<String>>,
    /// user id -> titles that user has edited (creation counts as the first
    /// edit). Not surfaced by any command, kept consistent anyway.
    edited_logs: HashMap<String, HashSet<String>>,
}

impl LogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, args: &str, sender: &Sender) -> String {
        let title = args.trim();

        if title.contains(char::is_whitespace) {
            return messages::NAME_HAS_WHITESPACE.to_string();
        }
        if title.is_empty() {
            return messages::NAME_EMPTY.to_string();
        }

        // TODO: handle duplicate Log names. Creating over an existing title
        // replaces the entry and orphans it from the first creator's sets.
        let log = Log::new(title, sender.clone());

        self.owned_logs
            .entry(sender.id.clone())
            .or_default()
            .insert(title.to_string());
        self.edited_logs
            .entry(sender.id.clone())
            .or_default()
            .insert(title.to_string());
        self.all_logs.insert(title.to_string(), log);

        messages::log_created(title)
    }

    pub fn list_owned(&self, sender: &Sender) -> String {
        let mut reply = messages::created_logs_header(&sender.display_name);

        match self.owned_logs.get(&sender.id) {
            None => reply.push_str(messages::NO_LOGS_FOUND),
            Some(titles) if titles.is_empty() => reply.push_str(messages::NO_LOGS_FOUND),
            Some(titles) => {
                for title in titles {
                    reply.push_str(title);
                    reply.push('\n');
                }
            }
        }

        reply
    }

    pub fn edit(&mut self, args: &str, sender: &Sender) -> String {
        let tokens: Vec<&str> = args.split_whitespace().collect();
        if tokens.len() < 2 {
            return messages::EDIT_USAGE.to_string();
        }

        let title = tokens[0];
        let new_text = tokens[1..].join(" ");

        let Some(log) = self.all_logs.get_mut(title) else {
            return messages::log_not_found(title);
        };

        // One edit transaction: text, editor set, timestamp.
        log.set_text(&new_text);
        log.add_editor(sender);
        log.touch_edited_now();

        self.edited_logs
            .entry(sender.id.clone())
            .or_default()
            .insert(title.to_string());

        messages::log_edited(title, &sender.display_name, &new_text)
    }

    pub fn read(&self, args: &str) -> String {
        let tokens: Vec<&str> = args.split_whitespace().collect();
        if tokens.len() != 1 {
            return messages::READ_USAGE.to_string();
        }

        let title = tokens[0];
        match self.all_logs.get(title) {
            Some(log) => messages::log_read(title, &log.text, &log.formatted_last_edited()),
            None => messages::log_not_found(title),
        }
    }

    pub fn delete(&mut self, args: &str, sender: &Sender) -> String {
        let title = args.trim();

        if title.contains(char::is_whitespace) {
            return messages::NAME_HAS_WHITESPACE.to_string();
        }
        if title.is_empty() {
            return messages::NAME_EMPTY.to_string();
        }

        let Some(log) = self.all_logs.get(title) else {
            return messages::log_not_found(title);
        };

        // Only the creator of a Log may delete it.
        let owns = self
            .owned_logs
            .get(&sender.id)
            .is_some_and(|titles| titles.contains(title));
        if !owns {
            return messages::delete_forbidden(&sender.display_name, &log.creator.display_name);
        }

        // The title leaves all three maps together.
        if let Some(titles) = self.owned_logs.get_mut(&sender.id) {
            titles.remove(title);
        }
        self.all_logs.remove(title);
        if let Some(titles) = self.edited_logs.get_mut(&sender.id) {
            titles.remove(title);
        }

        messages::log_deleted(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Sender {
        Sender::new("@alice:example.org", "alice")
    }

    fn bob() -> Sender {
        Sender::new("@bob:example.org", "bob")
    }

    #[test]
    fn test_create_then_read_starts_empty() {
        let mut registry = LogRegistry::new();
        let reply = registry.create("Alpha", &alice());
        assert!(reply.contains("Created new Log"));
        assert!(reply.contains("Alpha"));

        let log = registry.all_logs.get("Alpha").unwrap();
        assert_eq!(log.text, "");
        assert_eq!(log.created_at, log.last_edited);

        let read = registry.read("Alpha");
        assert!(read.contains("Reading **Alpha**"));
        assert!(read.contains(&log.formatted_last_edited()));
    }

    #[test]
    fn test_create_trims_surrounding_whitespace() {
        let mut registry = LogRegistry::new();
        registry.create("  Alpha  ", &alice());
        assert!(registry.all_logs.contains_key("Alpha"));
    }

    #[test]
    fn test_create_rejects_internal_whitespace() {
        let mut registry = LogRegistry::new();
        let reply = registry.create("my log", &alice());
        assert_eq!(reply, messages::NAME_HAS_WHITESPACE);
        assert!(registry.all_logs.is_empty());
    }

    #[test]
    fn test_create_rejects_empty_name_with_usage_hint() {
        let mut registry = LogRegistry::new();
        let reply = registry.create("   ", &alice());
        assert_eq!(reply, messages::NAME_EMPTY);
        // The two invalid-name replies must stay distinguishable.
        assert_ne!(messages::NAME_EMPTY, messages::NAME_HAS_WHITESPACE);
        assert!(registry.all_logs.is_empty());
    }

    #[test]
    fn test_create_registers_creator_as_owner_and_editor() {
        let mut registry = LogRegistry::new();
        registry.create("Alpha", &alice());

        let log = registry.all_logs.get("Alpha").unwrap();
        assert_eq!(log.creator, alice());
        assert!(log.editors.contains(&alice().id));
        assert!(registry.owned_logs[&alice().id].contains("Alpha"));
        assert!(registry.edited_logs[&alice().id].contains("Alpha"));
    }

    #[test]
    fn test_duplicate_create_overwrites_silently() {
        // Pinned behavior: no duplicate-title check. The second create
        // replaces the entry and leaves the first creator's sets stale.
        let mut registry = LogRegistry::new();
        registry.create("Alpha", &alice());
        registry.edit("Alpha hello", &alice());

        registry.create("Alpha", &bob());

        let log = &registry.all_logs["Alpha"];
        assert_eq!(log.creator, bob());
        assert_eq!(log.text, "");
        assert!(registry.owned_logs[&alice().id].contains("Alpha"));
    }

    #[test]
    fn test_list_owned_when_user_has_nothing() {
        let registry = LogRegistry::new();
        let reply = registry.list_owned(&alice());
        assert!(reply.contains("No Logs found"));
    }

    #[test]
    fn test_list_owned_membership() {
        let mut registry = LogRegistry::new();
        registry.create("Alpha", &alice());
        registry.create("Beta", &alice());
        registry.create("Gamma", &bob());

        let reply = registry.list_owned(&alice());
        assert!(reply.contains("@alice"));
        assert!(reply.contains("Alpha"));
        assert!(reply.contains("Beta"));
        assert!(!reply.contains("Gamma"));
    }

    #[test]
    fn test_edit_requires_two_tokens() {
        let mut registry = LogRegistry::new();
        registry.create("Alpha", &alice());
        assert_eq!(registry.edit("Alpha", &alice()), messages::EDIT_USAGE);
        assert_eq!(registry.edit("", &alice()), messages::EDIT_USAGE);
    }

    #[test]
    fn test_edit_unknown_log() {
        let mut registry = LogRegistry::new();
        let reply = registry.edit("Missing hello", &alice());
        assert_eq!(reply, messages::log_not_found("Missing"));
    }

    #[test]
    fn test_edit_replaces_text_and_records_editor() {
        let mut registry = LogRegistry::new();
        registry.create("Alpha", &alice());
        let created_at = registry.all_logs["Alpha"].created_at;

        let reply = registry.edit("Alpha Hello world", &bob());
        assert!(reply.contains("@bob"));
        assert!(reply.contains("Hello world"));

        let log = &registry.all_logs["Alpha"];
        assert_eq!(log.text, "Hello world");
        assert!(log.editors.contains(&alice().id));
        assert!(log.editors.contains(&bob().id));
        assert!(log.last_edited >= created_at);
        assert!(registry.edited_logs[&bob().id].contains("Alpha"));
    }

    #[test]
    fn test_edit_rejoins_text_with_single_spaces() {
        let mut registry = LogRegistry::new();
        registry.create("Alpha", &alice());
        registry.edit("Alpha   Hello   world ", &alice());
        assert_eq!(registry.all_logs["Alpha"].text, "Hello world");
    }

    #[test]
    fn test_edit_twice_with_same_args_is_idempotent() {
        let mut registry = LogRegistry::new();
        registry.create("Alpha", &alice());

        registry.edit("Alpha hello", &bob());
        let first_edit = registry.all_logs["Alpha"].last_edited;
        let editors_before = registry.all_logs["Alpha"].editors.len();

        registry.edit("Alpha hello", &bob());

        let log = &registry.all_logs["Alpha"];
        assert_eq!(log.text, "hello");
        assert_eq!(log.editors.len(), editors_before);
        assert!(log.last_edited >= first_edit);
    }

    #[test]
    fn test_read_requires_exactly_one_token() {
        let registry = LogRegistry::new();
        assert_eq!(registry.read(""), messages::READ_USAGE);
        assert_eq!(registry.read("Alpha Beta"), messages::READ_USAGE);
    }

    #[test]
    fn test_read_unknown_log() {
        let registry = LogRegistry::new();
        assert_eq!(registry.read("Missing"), messages::log_not_found("Missing"));
    }

    #[test]
    fn test_read_does_not_mutate() {
        let mut registry = LogRegistry::new();
        registry.create("Alpha", &alice());
        registry.edit("Alpha hello", &alice());
        let before = registry.all_logs["Alpha"].last_edited;

        registry.read("Alpha");

        assert_eq!(registry.all_logs["Alpha"].last_edited, before);
        assert_eq!(registry.all_logs["Alpha"].editors.len(), 1);
    }

    #[test]
    fn test_delete_name_validation_matches_create() {
        let mut registry = LogRegistry::new();
        assert_eq!(registry.delete("my log", &alice()), messages::NAME_HAS_WHITESPACE);
        assert_eq!(registry.delete("", &alice()), messages::NAME_EMPTY);
    }

    #[test]
    fn test_delete_unknown_log() {
        let mut registry = LogRegistry::new();
        assert_eq!(registry.delete("Missing", &alice()), messages::log_not_found("Missing"));
    }

    #[test]
    fn test_delete_forbidden_for_non_creator_names_creator() {
        let mut registry = LogRegistry::new();
        registry.create("Alpha", &alice());

        let reply = registry.delete("Alpha", &bob());
        assert!(reply.contains("@bob"));
        assert!(reply.contains("@alice"));
        assert!(registry.all_logs.contains_key("Alpha"));
    }

    #[test]
    fn test_delete_purges_all_three_maps() {
        let mut registry = LogRegistry::new();
        registry.create("Alpha", &alice());

        let reply = registry.delete("Alpha", &alice());
        assert!(reply.contains("Deleted Log"));
        assert!(!registry.all_logs.contains_key("Alpha"));
        assert!(!registry.owned_logs[&alice().id].contains("Alpha"));
        assert!(!registry.edited_logs[&alice().id].contains("Alpha"));

        assert_eq!(registry.read("Alpha"), messages::log_not_found("Alpha"));
        assert!(registry.list_owned(&alice()).contains("No Logs found"));
    }

    #[test]
    fn test_deleted_title_can_be_recreated_as_new_entity() {
        let mut registry = LogRegistry::new();
        registry.create("Alpha", &alice());
        let first_id = registry.all_logs["Alpha"].id;
        registry.delete("Alpha", &alice());

        registry.create("Alpha", &bob());

        let log = &registry.all_logs["Alpha"];
        assert_ne!(log.id, first_id);
        assert_eq!(log.creator, bob());
        assert_eq!(log.text, "");
    }

    #[test]
    fn test_alpha_scenario() {
        let mut registry = LogRegistry::new();

        registry.create("Alpha", &alice());
        registry.edit("Alpha Hello world", &bob());

        let read = registry.read("Alpha");
        assert!(read.contains("Hello world"));
        let log = &registry.all_logs["Alpha"];
        assert!(log.editors.contains(&alice().id));
        assert!(log.editors.contains(&bob().id));

        let forbidden = registry.delete("Alpha", &bob());
        assert!(forbidden.contains("@alice"));
        assert!(registry.all_logs.contains_key("Alpha"));

        let deleted = registry.delete("Alpha", &alice());
        assert!(deleted.contains("Deleted Log"));
        assert!(registry.list_owned(&alice()).contains("No Logs found"));
    }
}
