//! # List Command
//!
//! Handles `list <success|failed>`.

use anyhow::Result;

use super::{notify, reply};
use crate::application::ci::CiService;
use crate::domain::traits::ChatProvider;
use crate::domain::types::StatusFilter;
use crate::strings::messages;

pub async fn handle_list(
    service: &CiService,
    chat: &impl ChatProvider,
    status: Option<&str>,
) -> Result<()> {
    let Some(status) = status.and_then(|s| StatusFilter::from_str(&s.to_ascii_lowercase())) else {
        return notify(chat, messages::STATUS_ONLY_SUCCESS_OR_FAILED).await;
    };

    let text = service
        .list_projects_by_status(status)
        .await
        .unwrap_or_else(|e| e.to_string());
    reply(chat, &text).await
}
