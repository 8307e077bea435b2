//! # CI Errors
//!
//! Typed outcomes of a CircleCI request that did not produce a usable payload.
//! The `Display` text of each variant is what gets posted to chat.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CiError {
    #[error("Something went really wrong: {0}")]
    Transport(String),

    #[error("Not authorized. Did you set CIRCLECI_TOKEN correctly?")]
    Unauthorized,

    #[error("I couldn't find what you were looking for: {0}")]
    NotFound(String),

    #[error("Yikes! I turned that circle into a square")]
    Server,

    #[error("Hmm.  I don't know how to process that CircleCI response: {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("I couldn't make sense of that CircleCI response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for CiError {
    fn from(err: reqwest::Error) -> Self {
        CiError::Transport(err.to_string())
    }
}
