//! # Clear Command
//!
//! Handles `clear <project|all>`: deletes build caches.

use anyhow::Result;

use super::{is_keyword, reply, resolve_project};
use crate::application::ci::CiService;
use crate::domain::traits::ChatProvider;

pub async fn handle_clear(service: &CiService, chat: &impl ChatProvider, target: &str) -> Result<()> {
    if is_keyword(target, "all") {
        if let Err(e) = service.clear_all_caches(chat).await {
            reply(chat, &e.to_string()).await?;
        }
        return Ok(());
    }

    let Some(project) = resolve_project(service, chat, target).await? else {
        return Ok(());
    };
    let text = service
        .clear_cache(&project)
        .await
        .unwrap_or_else(|e| e.to_string());
    reply(chat, &text).await
}
