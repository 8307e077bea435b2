//! # Retry Command
//!
//! `retry <project> <build_num|last>` retries one build.
//! `retry all <success|failed>` retries the newest build of every matching project.

use anyhow::Result;

use super::{is_keyword, notify, reply, resolve_project};
use crate::application::ci::CiService;
use crate::domain::traits::ChatProvider;
use crate::domain::types::StatusFilter;
use crate::strings::messages;

pub async fn handle_retry(
    service: &CiService,
    chat: &impl ChatProvider,
    target: &str,
    build: Option<&str>,
) -> Result<()> {
    let Some(build) = build else {
        return notify(chat, messages::RETRY_USAGE).await;
    };

    if is_keyword(target, "all") {
        let Some(status) = StatusFilter::from_str(&build.to_ascii_lowercase()) else {
            return notify(chat, messages::STATUS_ONLY_SUCCESS_OR_FAILED).await;
        };
        // Per-project results are posted by the service as they arrive.
        if let Err(e) = service.retry_all_by_status(status, chat).await {
            reply(chat, &e.to_string()).await?;
        }
        return Ok(());
    }

    let Some(project) = resolve_project(service, chat, target).await? else {
        return Ok(());
    };

    let result = if is_keyword(build, "last") {
        service.retry_last_build(&project).await
    } else {
        match build.parse::<u64>() {
            Ok(build_num) => service.retry_build(&project, build_num).await,
            Err(_) => {
                return notify(chat, &messages::invalid_build_number(build)).await;
            }
        }
    };
    reply(chat, &result.unwrap_or_else(|e| e.to_string())).await
}
