//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (status, retry, clear...).
//! These handlers are invoked by the Router. Argument validation happens here, before
//! any request reaches CircleCI.

pub mod cancel;
pub mod clear;
pub mod help;
pub mod list;
pub mod retry;
pub mod status;

use anyhow::Result;

use crate::application::ci::CiService;
use crate::domain::project::ProjectRef;
use crate::domain::traits::ChatProvider;

async fn reply(chat: &impl ChatProvider, content: &str) -> Result<()> {
    chat.send_message(content)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}

/// Validation feedback goes out as a notice rather than a reply.
async fn notify(chat: &impl ChatProvider, content: &str) -> Result<()> {
    chat.send_notification(content)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

/// Resolve a project name, telling the room why when it can't be.
async fn resolve_project(
    service: &CiService,
    chat: &impl ChatProvider,
    name: &str,
) -> Result<Option<ProjectRef>> {
    match service.resolve_project(name) {
        Ok(project) => Ok(Some(project)),
        Err(e) => {
            notify(chat, &e.to_string()).await?;
            Ok(None)
        }
    }
}

fn is_keyword(arg: &str, keyword: &str) -> bool {
    arg.eq_ignore_ascii_case(keyword)
}
