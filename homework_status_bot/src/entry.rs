use crate::{Config, PracticumClient, Poller, StartupError, TelegramNotifier};

/// Load the configuration and poll until the process is killed.
///
/// # Errors
/// Errors, without ever polling, if the configuration is incomplete or the
/// HTTP client can't be built.
pub async fn entry() -> Result<(), StartupError> {
    log::info!("Starting up...");

    let config = Config::from_env().inspect_err(|e| log::error!("{e}"))?;

    let source = PracticumClient::new(&config).inspect_err(|e| log::error!("{e}"))?;
    let notifier = TelegramNotifier::from_config(&config);
    let cursor = chrono::Utc::now().timestamp();

    Poller::new(source, notifier, cursor, config.retry_time)
        .run()
        .await;

    Ok(())
}
