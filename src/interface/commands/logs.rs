//! # Log Commands
//!
//! Handlers for `.new`, `.created`, `.edit`, `.read`, and `.delete`.
//! Each locks the registry, runs the operation, and relays the reply to the room.

use crate::application::registry::LogRegistry;
use crate::domain::traits::ChatProvider;
use crate::domain::types::Sender;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

pub async fn handle_new(
    registry: &Arc<Mutex<LogRegistry>>,
    chat: &impl ChatProvider,
    sender: &Sender,
    args: &str,
) -> Result<()> {
    let reply = registry.lock().await.create(args, sender);
    send(chat, &reply).await
}

pub async fn handle_created(
    registry: &Arc<Mutex<LogRegistry>>,
    chat: &impl ChatProvider,
    sender: &Sender,
) -> Result<()> {
    let reply = registry.lock().await.list_owned(sender);
    send(chat, &reply).await
}

pub async fn handle_edit(
    registry: &Arc<Mutex<LogRegistry>>,
    chat: &impl ChatProvider,
    sender: &Sender,
    args: &str,
) -> Result<()> {
    let reply = registry.lock().await.edit(args, sender);
    send(chat, &reply).await
}

pub async fn handle_read(
    registry: &Arc<Mutex<LogRegistry>>,
    chat: &impl ChatProvider,
    args: &str,
) -> Result<()> {
    let reply = registry.lock().await.read(args);
    send(chat, &reply).await
}

pub async fn handle_delete(
    registry: &Arc<Mutex<LogRegistry>>,
    chat: &impl ChatProvider,
    sender: &Sender,
    args: &str,
) -> Result<()> {
    let reply = registry.lock().await.delete(args, sender);
    send(chat, &reply).await
}

async fn send(chat: &impl ChatProvider, reply: &str) -> Result<()> {
    chat.send_message(reply)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}
