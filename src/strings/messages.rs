//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! Includes error messages and success templates for every Log command.

pub const UNKNOWN_COMMAND: &str = "❓ Unknown command.";

pub const NAME_HAS_WHITESPACE: &str = "Error: Log name **cannot contain white-spaces**";

pub const NAME_EMPTY: &str =
    "Error: name of Log cannot be empty.\n\n**Sample Usage:**\n.new MyLogName";

pub const EDIT_USAGE: &str = "Error: Wrong usage.\n\n**Sample Usage:**\n.edit LogName NewText";

pub const READ_USAGE: &str = "Error: Wrong usage.\n\n**Sample Usage:**\n.read LogName";

pub const NO_LOGS_FOUND: &str = "_No Logs found_\n";

pub fn log_created(title: &str) -> String {
    format!("Success! Created new Log **[{title}]**")
}

pub fn created_logs_header(user: &str) -> String {
    format!("**Logs created by @{user}**:\n\n")
}

pub fn log_not_found(title: &str) -> String {
    format!("Error: No Log with name **{title}** exists!")
}

pub fn log_edited(title: &str, editor: &str, text: &str) -> String {
    format!("Success! **{title}** has been edited by **[@{editor}]**:\n\n{text}")
}

pub fn log_read(title: &str, text: &str, last_edited: &str) -> String {
    format!("Success! Reading **{title}**:\n\n{text}\n\n_Last Edited at {last_edited}_")
}

pub fn delete_forbidden(requester: &str, creator: &str) -> String {
    format!("Error: **@{requester}** not allowed to delete Log created by **@{creator}**")
}

pub fn log_deleted(title: &str) -> String {
    format!("Success! Deleted Log **[{title}]**")
}
