#![recursion_limit = "256"]
//! # Main Entry Point
//!
//! Initializes the application:
//! - Domain: Configuration and Types
//! - Infrastructure: Matrix
//! - Application: Registry, Router
//! - Interface: Command Handlers

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::SyncRoomMessageEvent,
    },
};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::registry::LogRegistry;
use crate::application::router::CommandRouter;
use crate::domain::config::AppConfig;
use crate::domain::types::Sender;
use crate::infrastructure::matrix::MatrixService;

#[derive(Parser, Debug)]
#[command(name = "collablog", about = "Collaborative text Logs over Matrix")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "data/config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&cli.config)?;

    // 2. Logging Setup
    // Ensure data directory exists
    if !std::path::Path::new("data").exists() {
        fs::create_dir("data").context("Failed to create data directory")?;
    }

    // Clear previous session log
    let log_path = std::path::Path::new("data/session.log");
    if log_path.exists() {
        let _ = fs::remove_file(log_path);
    }

    let file_appender = tracing_appender::rolling::never("data", "session.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(
            "info,matrix_sdk=warn,matrix_sdk_base=warn,matrix_sdk_crypto=error,ruma=warn,hyper=warn",
        )
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!("Starting CollabLog...");

    // 3. Application State
    let registry = Arc::new(Mutex::new(LogRegistry::new()));

    // 4. Matrix Setup
    let client = Client::builder()
        .homeserver_url(&config.services.matrix.homeserver)
        .build()
        .await?;

    client
        .matrix_auth()
        .login_username(
            &config.services.matrix.username,
            &config.services.matrix.password,
        )
        .send()
        .await?;

    tracing::info!("Logged in as {}", config.services.matrix.username);

    if let Some(name) = &config.services.matrix.display_name {
        let _ = client.account().set_display_name(Some(name.as_str())).await;
    }

    // 5. Event Loop
    let start_time = std::time::SystemTime::now();

    let loop_config = config.clone();
    let loop_registry = registry.clone();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let config = loop_config.clone();
        let registry = loop_registry.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore events older than start_time
            let ts = ev.origin_server_ts();
            let event_time =
                std::time::UNIX_EPOCH + std::time::Duration::from_millis(ts.get().into());
            if event_time < start_time {
                return;
            }

            let matrix_sdk::ruma::events::room::message::MessageType::Text(text_content) =
                &original_msg.content.msgtype
            else {
                return;
            };

            if original_msg.sender == room.own_user_id() {
                return;
            }

            if !config.system.allowed_rooms.is_empty()
                && !config
                    .system
                    .allowed_rooms
                    .iter()
                    .any(|r| r == room.room_id().as_str())
            {
                return;
            }

            let body = &text_content.body;
            tracing::info!("Received message from {}: \n{}", original_msg.sender, body);

            let sender = Sender::new(
                original_msg.sender.as_str(),
                original_msg.sender.localpart(),
            );
            let chat = MatrixService::new(room);
            let router = CommandRouter::new(config, registry);

            if let Err(e) = router.route(&chat, body, &sender).await {
                tracing::error!("Failed to route message: {}", e);
            }
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            let _ = room.join().await;
        }
    });

    // 6. Sync Loop
    client.sync(SyncSettings::default()).await?;

    Ok(())
}
