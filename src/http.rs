use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use crate::error::{Result, SourceError};

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:107.0) Gecko/20100101 Firefox/107.0";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// A GET request as handed to the [`Transport`]: the full url, query string
/// included, plus the per-request headers.
#[derive(Debug, Clone)]
pub struct Request {
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
}

/// The one capability the source needs from the outside world. Tests swap
/// this out for a canned transport.
#[async_trait]
pub trait Transport {
    /// Performs the request and returns the response body as text.
    async fn get(&self, request: Request) -> Result<String>;
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, request: Request) -> Result<String> {
        let mut builder = self
            .client
            .get(request.url)
            .header(reqwest::header::USER_AGENT, DEFAULT_USER_AGENT)
            .timeout(REQUEST_TIMEOUT);

        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        Ok(response.text().await?)
    }
}
