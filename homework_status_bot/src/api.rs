use std::future::Future;

use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde_json::Value;
use url::Url;

use crate::{Config, Error, Result};

/// Something that can be asked which homeworks changed status since a moment in time.
pub trait HomeworkSource {
    /// Fetch the raw API response for everything that changed since `from_date`,
    /// a Unix timestamp.
    fn get_api_answer(&self, from_date: i64) -> impl Future<Output = Result<Value>> + Send;
}

/// Client for the Practicum homework status API.
pub struct PracticumClient {
    client: Client,
    endpoint: Url,
    authorization: String,
}

impl PracticumClient {
    /// # Errors
    /// Errors if the HTTP client could not be built.
    pub fn new(config: &Config) -> std::result::Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            authorization: format!("OAuth {}", config.practicum_token),
        })
    }
}

impl HomeworkSource for PracticumClient {
    async fn get_api_answer(&self, from_date: i64) -> Result<Value> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, &self.authorization)
            .query(&[("from_date", from_date)])
            .send()
            .await
            .inspect_err(|e| log::error!("Homework API request failed: {e}"))?;

        let status = response.status();
        if status != StatusCode::OK {
            log::error!("Endpoint {} responded with {}", self.endpoint, status);
            return Err(Error::Request {
                endpoint: self.endpoint.to_string(),
                status,
            });
        }

        Ok(response
            .json::<Value>()
            .await
            .inspect_err(|e| log::error!("Homework API sent garbage: {e}"))?)
    }
}
