use std::future::Future;

use bot_commons::MessageChunks;
use teloxide::{prelude::*, types::ChatId};

use crate::Config;

/// Somewhere to send messages to.
///
/// Sending is fire and forget: failures are logged by the implementation
/// and never reach the caller.
pub trait Notifier {
    fn send_message(&self, text: &str) -> impl Future<Output = ()> + Send;
}

/// Sends messages to a single Telegram chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Bot::new(config.telegram_token.clone()),
            config.telegram_chat_id,
        )
    }
}

impl Notifier for TelegramNotifier {
    /// Texts over Telegram's length limit go out as several messages.
    async fn send_message(&self, text: &str) {
        // Lost messages stay lost. Not retried, just logged.
        for chunk in MessageChunks::telegram(text) {
            match self.bot.send_message(self.chat_id, chunk).await {
                Ok(_) => log::info!("Message sent: \"{chunk}\""),
                Err(e) => log::error!("Message not sent: \"{chunk}\": {e}"),
            }
        }
    }
}
