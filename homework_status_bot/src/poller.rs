use std::time::Duration;

use tokio::time::sleep;

use crate::{check_response, current_date, parse_status, HomeworkSource, Notifier, Result};

/// The polling loop. Asks `source` for status changes every `retry_time`
/// and reports them through `notifier`.
///
/// The cursor is the timestamp the next poll asks for changes since. It only
/// moves after a cycle went through completely, and only forward, so a failed
/// cycle gets the same window asked for again next time.
pub struct Poller<S, N> {
    source: S,
    notifier: N,
    cursor: i64,
    retry_time: Duration,
}

impl<S: HomeworkSource, N: Notifier> Poller<S, N> {
    pub fn new(source: S, notifier: N, cursor: i64, retry_time: Duration) -> Self {
        Self {
            source,
            notifier,
            cursor,
            retry_time,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Fetch, check, and send a message for every homework in the response,
    /// then advance the cursor. Returns how many homeworks were reported.
    ///
    /// A homework that can't be turned into a message stops the cycle, even
    /// if earlier ones in the same response were already sent.
    ///
    /// # Errors
    /// Errors if fetching, checking or formatting fails. The cursor is left
    /// alone in that case.
    pub async fn poll_once(&mut self) -> Result<usize> {
        let response = self.source.get_api_answer(self.cursor).await?;
        let homeworks = check_response(&response)?;

        for homework in homeworks {
            let message = parse_status(homework)?;
            self.notifier.send_message(&message).await;
        }

        let next = current_date(&response)?;
        if next < self.cursor {
            log::warn!(
                "API sent current_date {next}, older than {}. Not moving back.",
                self.cursor
            );
        } else {
            log::debug!("Moving cursor from {} to {next}", self.cursor);
            self.cursor = next;
        }

        Ok(homeworks.len())
    }

    /// [`Poller::poll_once`], plus telling the chat if it failed.
    pub async fn run_cycle(&mut self) {
        if let Err(e) = self.poll_once().await {
            let message = format!("Program failure: {e}");
            log::error!("{message}");
            self.notifier.send_message(&message).await;
        }
    }

    /// Poll forever. Only stops when the process does.
    pub async fn run(mut self) {
        log::info!(
            "Polling for homework status changes every {:?}, starting from {}",
            self.retry_time,
            self.cursor
        );

        loop {
            self.run_cycle().await;
            sleep(self.retry_time).await;
        }
    }
}
