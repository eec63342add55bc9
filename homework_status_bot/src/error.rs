use std::borrow::Cow;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Anything that can go wrong during one polling cycle.
///
/// None of these are fatal. The poller logs them, tells the chat, and tries
/// again on the next cycle.
#[derive(Debug, Error)]
pub enum Error {
    /// Couldn't reach the API, or couldn't read what it sent back.
    #[error("Failed to talk to the homework API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Endpoint {endpoint} is unavailable. API response code {status}")]
    Request { endpoint: String, status: StatusCode },
    #[error("Key \"{0}\" is missing from the API response")]
    MissingField(&'static str),
    #[error("Unexpected API response: {0}")]
    Shape(String),
    #[error("Unknown homework status: {}", excerpt(.0))]
    UnknownStatus(String),
}

/// Longest piece of API-supplied text that goes into an error message.
const EXCERPT_LEN: usize = 64;

/// Shorten `text` to [`EXCERPT_LEN`] characters so that whatever the API
/// sends back can't blow up an error message.
pub(crate) fn excerpt(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(EXCERPT_LEN) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// Configuration is missing or unparsable. The bot refuses to start on this.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("TELEGRAM_CHAT_ID is not a valid chat id: {0}")]
    InvalidChatId(String),
    #[error("{name} must be a whole number of seconds, got: {value}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("HOMEWORK_ENDPOINT is not a valid URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to build the HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
