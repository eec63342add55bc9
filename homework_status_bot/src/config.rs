use std::time::Duration;

use teloxide::types::ChatId;
use url::Url;

use crate::ConfigError;

pub static DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_RETRY_TIME: Duration = Duration::from_secs(600);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything the bot needs to run. Built once at startup, never changed after.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the homework API.
    pub practicum_token: String,
    pub telegram_token: String,
    /// The one chat that gets every message, errors included.
    pub telegram_chat_id: ChatId,
    pub endpoint: Url,
    /// Pause between two polls, whether the last one worked or not.
    pub retry_time: Duration,
    pub request_timeout: Duration,
}

impl Config {
    /// Load a `.env` file if there is one, then read the configuration
    /// from the process environment.
    ///
    /// # Errors
    /// Errors if a required variable is absent or a value doesn't parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => (),
            Err(e) => log::warn!("Failed to load .env file: {e}"),
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::from_env`], but variables come from `lookup`.
    /// Empty values count as absent.
    ///
    /// # Errors
    /// Errors if a required variable is absent or a value doesn't parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut missing = Vec::new();
        let mut require = |name: &'static str| {
            let value = get(name);
            if value.is_none() {
                log::error!("Missing required environment variable {name}");
                missing.push(name);
            }
            value
        };

        let practicum_token = require("PRACTICUM_TOKEN");
        let telegram_token = require("TELEGRAM_TOKEN");
        let telegram_chat_id = require("TELEGRAM_CHAT_ID");

        let (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) =
            (practicum_token, telegram_token, telegram_chat_id)
        else {
            return Err(ConfigError::Missing(missing));
        };

        let telegram_chat_id = telegram_chat_id
            .trim()
            .parse::<i64>()
            .map(ChatId)
            .map_err(|_| ConfigError::InvalidChatId(telegram_chat_id))?;

        let endpoint = match get("HOMEWORK_ENDPOINT") {
            Some(endpoint) => Url::parse(endpoint.trim())?,
            None => Url::parse(DEFAULT_ENDPOINT)?,
        };

        Ok(Config {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            retry_time: seconds(&get, "RETRY_TIME")?.unwrap_or(DEFAULT_RETRY_TIME),
            request_timeout: seconds(&get, "REQUEST_TIMEOUT")?.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        })
    }
}

fn seconds(
    get: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<Duration>, ConfigError> {
    let Some(value) = get(name) else {
        return Ok(None);
    };

    value
        .trim()
        .parse::<u64>()
        .map(|secs| Some(Duration::from_secs(secs)))
        .map_err(|_| ConfigError::InvalidNumber { name, value })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    static REQUIRED: &[(&str, &str)] = &[
        ("PRACTICUM_TOKEN", "practicum"),
        ("TELEGRAM_TOKEN", "123:telegram"),
        ("TELEGRAM_CHAT_ID", "-100500"),
    ];

    #[test]
    fn defaults_apply() {
        let config = Config::from_lookup(lookup_from(REQUIRED)).unwrap();
        assert_eq!(config.practicum_token, "practicum");
        assert_eq!(config.telegram_token, "123:telegram");
        assert_eq!(config.telegram_chat_id, ChatId(-100500));
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.retry_time, DEFAULT_RETRY_TIME);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn overrides_apply() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("HOMEWORK_ENDPOINT", "http://127.0.0.1:8080/statuses/"));
        vars.push(("RETRY_TIME", "5"));
        vars.push(("REQUEST_TIMEOUT", " 2 "));
        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.endpoint.as_str(), "http://127.0.0.1:8080/statuses/");
        assert_eq!(config.retry_time, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(2));
    }

    #[test]
    fn every_missing_token_is_reported() {
        let error = Config::from_lookup(lookup_from(&[("TELEGRAM_TOKEN", "123:telegram")]))
            .unwrap_err();
        let ConfigError::Missing(missing) = error else {
            panic!("expected missing variables, got {error:?}");
        };
        assert_eq!(missing, vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"]);
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let mut vars = REQUIRED.to_vec();
        vars[0] = ("PRACTICUM_TOKEN", "  ");
        let error = Config::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(error, ConfigError::Missing(m) if m == vec!["PRACTICUM_TOKEN"]));
    }

    #[test]
    fn bad_values_are_rejected() {
        let mut vars = REQUIRED.to_vec();
        vars[2] = ("TELEGRAM_CHAT_ID", "@my_channel");
        assert!(matches!(
            Config::from_lookup(lookup_from(&vars)).unwrap_err(),
            ConfigError::InvalidChatId(_)
        ));

        let mut vars = REQUIRED.to_vec();
        vars.push(("RETRY_TIME", "ten minutes"));
        assert!(matches!(
            Config::from_lookup(lookup_from(&vars)).unwrap_err(),
            ConfigError::InvalidNumber { name: "RETRY_TIME", .. }
        ));
    }
}
