//! # Domain Traits
//!
//! Abstract interfaces for core system components (Chat).
//! Allows for pluggable implementations in the Infrastructure layer.

use async_trait::async_trait;

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a message to the room
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Send a notification (not tracked/editable)
    async fn send_notification(&self, content: &str) -> Result<(), String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}
