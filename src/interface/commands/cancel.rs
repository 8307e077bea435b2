//! # Cancel Command
//!
//! Handles `cancel <project> <build_num>`.

use anyhow::Result;

use super::{notify, reply, resolve_project};
use crate::application::ci::CiService;
use crate::domain::traits::ChatProvider;
use crate::strings::messages;

pub async fn handle_cancel(
    service: &CiService,
    chat: &impl ChatProvider,
    project: &str,
    build: Option<&str>,
) -> Result<()> {
    let Some(build) = build else {
        return notify(chat, messages::CANCEL_NEEDS_BUILD_NUMBER).await;
    };
    let Ok(build_num) = build.parse::<u64>() else {
        return notify(chat, &messages::invalid_build_number(build)).await;
    };
    let Some(project) = resolve_project(service, chat, project).await? else {
        return Ok(());
    };

    let text = service
        .cancel_build(&project, build_num)
        .await
        .unwrap_or_else(|e| e.to_string());
    reply(chat, &text).await
}
