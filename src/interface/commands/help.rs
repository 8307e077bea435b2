//! # Help Command
//!
//! Handles `help`, and anything addressed to the bot that matched no command.

use crate::domain::traits::ChatProvider;
use anyhow::Result;

pub async fn handle_help(chat: &impl ChatProvider, prefix: &str) -> Result<()> {
    chat.send_message(&crate::strings::help::main(prefix))
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}
