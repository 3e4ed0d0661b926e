//! # Domain Types
//!
//! Plain types shared across layers.

/// Identity of a message sender as seen by the command layer.
///
/// Registry collections key on `id` only (stable, e.g. `@alice:example.org`);
/// `display_name` exists for embedding in reply text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sender {
    pub id: String,
    pub display_name: String,
}

impl Sender {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}
