//! # Application Layer
//!
//! Contains the core logic and orchestration of the bot:
//! command parsing and routing, CI operations and message formatting.

pub mod ci;
pub mod format;
pub mod parsing;
pub mod router;
