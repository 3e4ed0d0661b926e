//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (e.g., .new, .edit, .read).
//! These handlers are invoked by the Router.

pub mod help;
pub mod logs;
