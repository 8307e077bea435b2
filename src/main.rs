#![recursion_limit = "256"]
//! # Main Entry Point
//!
//! Initializes the bot:
//! - Domain: Configuration and Types
//! - Infrastructure: Matrix, CircleCI
//! - Application: Router, CI Service
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::application::ci::CiService;
use crate::application::router::CommandRouter;
use crate::domain::config::AppConfig;
use crate::infrastructure::matrix::MatrixService;
use crate::strings::logs;

#[derive(Parser, Debug)]
#[command(name = "circlebot", about = "Query and control CircleCI builds from Matrix")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(long, default_value = "data/config.yaml")]
    config: PathBuf,

    /// Directory for session.log
    #[arg(long, default_value = "data")]
    log_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&args.config)?;

    // 2. Logging Setup
    let _guard = init_logging(&args.log_dir)?;
    tracing::info!("{}", logs::STARTING);
    tracing::info!(
        "{}",
        logs::config_loaded(&config.services.matrix.username, &config.circleci.host)
    );
    if config.circleci.token.is_none() {
        tracing::warn!("{}", logs::MISSING_TOKEN);
    }

    // 3. CircleCI + Router
    let service = Arc::new(
        CiService::new(config.circleci.clone()).context("Failed to build CircleCI HTTP client")?,
    );
    let router = Arc::new(CommandRouter::new(&config, service)?);

    // 4. Matrix Setup
    let client = Client::builder()
        .homeserver_url(&config.services.matrix.homeserver)
        .build()
        .await
        .context("Failed to build Matrix client")?;

    client
        .matrix_auth()
        .login_username(
            &config.services.matrix.username,
            &config.services.matrix.password,
        )
        .send()
        .await
        .context("Matrix login failed")?;
    tracing::info!("{}", logs::logged_in(&config.services.matrix.username));

    if let Some(name) = &config.services.matrix.display_name {
        tracing::info!("{}", logs::setting_display_name(name));
        if let Err(e) = client.account().set_display_name(Some(name.as_str())).await {
            tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
        }
    }

    // 5. Event Handlers
    let start_time = std::time::SystemTime::now();
    let loop_router = router.clone();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = loop_router.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore history replayed by the initial sync
            let event_time = std::time::UNIX_EPOCH
                + std::time::Duration::from_millis(ev.origin_server_ts().get().into());
            if event_time < start_time {
                return;
            }

            if original_msg.sender == room.own_user_id() {
                return;
            }

            if let MessageType::Text(text_content) = &original_msg.content.msgtype {
                let body = &text_content.body;
                tracing::debug!("Received message from {}: {}", original_msg.sender, body);

                let chat = MatrixService::new(room);
                if let Err(e) = router
                    .route(&chat, body, original_msg.sender.as_str())
                    .await
                {
                    tracing::error!("{}", logs::route_failed(&e.to_string()));
                }
            }
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            tracing::info!("{}", logs::invite_received(room.room_id().as_str()));
            if let Err(e) = room.join().await {
                tracing::warn!("{}", logs::join_invite_fail(&e.to_string()));
            }
        }
    });

    // 6. Sync forever
    tracing::info!("{}", logs::SYNC_LOOP_START);
    if let Err(e) = client.sync(SyncSettings::default()).await {
        tracing::error!("{}", logs::sync_loop_fail(&e.to_string()));
        return Err(e.into());
    }

    Ok(())
}

/// Console + file logging. The returned guard must live as long as the process.
fn init_logging(log_dir: &Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create {}", log_dir.display()))?;
    }

    // Clear previous session log
    let log_path = log_dir.join("session.log");
    if log_path.exists() {
        let _ = fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, "session.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(
            "info,matrix_sdk=warn,matrix_sdk_base=warn,matrix_sdk_crypto=error,ruma=warn,hyper=warn",
        )
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(guard)
}
