//! # Command Parsing
//!
//! Matches chat text against the command patterns and extracts raw arguments.
//! Arguments are validated later by the command handlers.

use regex::{Captures, Regex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Status {
        project: String,
        branch: Option<String>,
    },
    Last {
        project: String,
        branch: Option<String>,
    },
    Retry {
        target: String,
        build: Option<String>,
    },
    List {
        status: Option<String>,
    },
    Cancel {
        project: String,
        build: Option<String>,
    },
    Clear {
        target: String,
    },
    Help,
    /// Addressed to the bot but matched nothing.
    Unknown,
}

/// Compiled patterns for one command prefix (e.g. `ci`). Matching is case-insensitive.
pub struct CommandPatterns {
    addressed: Regex,
    status: Regex,
    last: Regex,
    retry: Regex,
    list: Regex,
    cancel: Regex,
    clear: Regex,
    help: Regex,
}

impl CommandPatterns {
    pub fn new(prefix: &str) -> Result<Self, regex::Error> {
        let p = regex::escape(prefix.trim());
        let pattern = |body: &str| Regex::new(&format!(r"(?i)^\s*{p}\s+{body}\s*$"));

        Ok(Self {
            addressed: Regex::new(&format!(r"(?i)^\s*{p}(?:\s|$)"))?,
            status: pattern(r"status\s+(\S+)(?:\s+(\S+))?")?,
            last: pattern(r"last\s+(\S+)(?:\s+(\S+))?")?,
            retry: pattern(r"retry\s+(\S+)(?:\s+(\S+))?")?,
            list: pattern(r"list(?:\s+(\S+))?")?,
            cancel: pattern(r"cancel\s+(\S+)(?:\s+(\S+))?")?,
            clear: pattern(r"clear\s+(\S+)")?,
            help: Regex::new(&format!(r"(?i)^\s*{p}(?:\s+help)?\s*$"))?,
        })
    }

    /// `None` when the message is not addressed to the bot at all.
    pub fn parse(&self, message: &str) -> Option<Command> {
        if !self.addressed.is_match(message) {
            return None;
        }

        let command = if self.help.is_match(message) {
            Command::Help
        } else if let Some(caps) = self.status.captures(message) {
            Command::Status {
                project: arg(&caps, 1).unwrap_or_default(),
                branch: arg(&caps, 2),
            }
        } else if let Some(caps) = self.last.captures(message) {
            Command::Last {
                project: arg(&caps, 1).unwrap_or_default(),
                branch: arg(&caps, 2),
            }
        } else if let Some(caps) = self.retry.captures(message) {
            Command::Retry {
                target: arg(&caps, 1).unwrap_or_default(),
                build: arg(&caps, 2),
            }
        } else if let Some(caps) = self.list.captures(message) {
            Command::List {
                status: arg(&caps, 1),
            }
        } else if let Some(caps) = self.cancel.captures(message) {
            Command::Cancel {
                project: arg(&caps, 1).unwrap_or_default(),
                build: arg(&caps, 2),
            }
        } else if let Some(caps) = self.clear.captures(message) {
            Command::Clear {
                target: arg(&caps, 1).unwrap_or_default(),
            }
        } else {
            Command::Unknown
        };
        Some(command)
    }
}

fn arg(caps: &Captures<'_>, idx: usize) -> Option<String> {
    caps.get(idx).map(|m| m.as_str().to_string())
}
