//! # Status Commands
//!
//! Handles `status` and `last`.

use anyhow::Result;

use super::{reply, resolve_project};
use crate::application::ci::CiService;
use crate::domain::traits::ChatProvider;

pub const DEFAULT_BRANCH: &str = "master";

pub async fn handle_status(
    service: &CiService,
    chat: &impl ChatProvider,
    project: &str,
    branch: Option<&str>,
) -> Result<()> {
    let Some(project) = resolve_project(service, chat, project).await? else {
        return Ok(());
    };
    let branch = branch.unwrap_or(DEFAULT_BRANCH);

    let text = service
        .status(&project, branch)
        .await
        .unwrap_or_else(|e| e.to_string());
    reply(chat, &text).await
}

pub async fn handle_last(
    service: &CiService,
    chat: &impl ChatProvider,
    project: &str,
    branch: Option<&str>,
) -> Result<()> {
    let Some(project) = resolve_project(service, chat, project).await? else {
        return Ok(());
    };
    let branch = branch.unwrap_or(DEFAULT_BRANCH);

    let text = service
        .last_status(&project, branch)
        .await
        .unwrap_or_else(|e| e.to_string());
    reply(chat, &text).await
}
