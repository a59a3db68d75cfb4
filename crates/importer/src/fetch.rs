//! Download of the CSV feeds.

use std::time::Duration;

use crate::config::ImporterConfig;
use crate::error::ImportError;

/// HTTP client for the feeds, carrying the basic-auth credentials.
pub struct CsvSource {
    client: reqwest::Client,
    username: String,
    password: String,
}

impl CsvSource {
    /// Build a client with the configured timeout and credentials.
    pub fn new(config: &ImporterConfig) -> Result<Self, ImportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ImportError::Client)?;
        Ok(Self {
            client,
            username: config.auth_username.clone(),
            password: config.auth_password.clone(),
        })
    }

    /// GET `url` and return the body as text. Any non-2xx status is an error.
    pub async fn fetch(&self, url: &str) -> Result<String, ImportError> {
        let request_failed = |source| ImportError::Request {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(request_failed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(request_failed)?;
        tracing::debug!(url, bytes = body.len(), "Fetched feed");
        Ok(body)
    }
}
