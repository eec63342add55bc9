//! Source code for the homework status bot: polls the Practicum homework API
//! and relays review status changes into a Telegram chat.

/// Error types.
mod error;
pub use error::*;

/// Startup configuration loaded from the environment.
mod config;
pub use config::*;

/// Homework statuses and turning a homework record into a message.
mod status;
pub use status::*;

/// Checking the shape of an API response.
mod response;
pub use response::*;

/// Talking to the homework API.
mod api;
pub use api::*;

/// Sending messages to the chat.
mod notifier;
pub use notifier::*;

/// The polling loop.
mod poller;
pub use poller::*;

/// Entry function that starts the bot.
mod entry;
pub use entry::*;
