//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! It parses the command string (e.g., `.new`) and dispatches it with the necessary context.

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::parsing::{parse_command, Command};
use crate::application::registry::LogRegistry;
use crate::domain::config::AppConfig;
use crate::domain::traits::ChatProvider;
use crate::domain::types::Sender;
use crate::interface::commands;

pub struct CommandRouter {
    config: AppConfig,
    registry: Arc<Mutex<LogRegistry>>,
}

impl CommandRouter {
    pub fn new(config: AppConfig, registry: Arc<Mutex<LogRegistry>>) -> Self {
        Self { config, registry }
    }

    pub async fn route<C>(&self, chat: &C, message: &str, sender: &Sender) -> Result<()>
    where
        C: ChatProvider,
    {
        let Some(command) = parse_command(message, &self.config.system.command_prefix) else {
            // Plain chat, nothing to do.
            return Ok(());
        };

        tracing::info!(
            "Router dispatching {:?} sender='{}' room='{}'",
            command,
            sender.id,
            chat.room_id()
        );

        match command {
            Command::New { args } => {
                commands::logs::handle_new(&self.registry, chat, sender, &args).await?;
            }
            Command::Created => {
                commands::logs::handle_created(&self.registry, chat, sender).await?;
            }
            Command::Edit { args } => {
                commands::logs::handle_edit(&self.registry, chat, sender, &args).await?;
            }
            Command::Read { args } => {
                commands::logs::handle_read(&self.registry, chat, &args).await?;
            }
            Command::Delete { args } => {
                commands::logs::handle_delete(&self.registry, chat, sender, &args).await?;
            }
            Command::Help => {
                commands::help::handle_help(chat).await?;
            }
            Command::Unknown { name } => {
                tracing::info!("Unknown command '{}'", name);
                chat.send_notification(crate::strings::messages::UNKNOWN_COMMAND)
                    .await
                    .map_err(|e| anyhow::anyhow!(e))?;
            }
        }

        Ok(())
    }
}
