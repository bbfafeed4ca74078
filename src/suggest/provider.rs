//! Remote suggestion providers
//!
//! The suggestion service is a fetch-given-prefix capability behind the
//! `SuggestionProvider` trait so the worker can be driven by a scripted
//! provider in tests. The production implementation talks to the search
//! API's suggestion endpoint, which answers a plain JSON string array.

use std::time::Duration;

use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("suggestion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("suggestion service returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// A source of completion candidates for a typed prefix
pub trait SuggestionProvider: Send + 'static {
    fn fetch(&self, prefix: &str) -> Result<Vec<String>, SuggestError>;
}

/// HTTP suggestion provider (GET `{api_url}/suggestions?query=<prefix>`)
pub struct HttpSuggestionProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpSuggestionProvider {
    pub fn new(api_url: &str) -> Result<Self, SuggestError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/suggestions", api_url.trim_end_matches('/')),
        })
    }
}

impl SuggestionProvider for HttpSuggestionProvider {
    fn fetch(&self, prefix: &str) -> Result<Vec<String>, SuggestError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", prefix)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Status(status));
        }

        Ok(response.json::<Vec<String>>()?)
    }
}
