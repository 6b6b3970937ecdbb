//! [`TextSource`] implementation over HTTP.

use crate::error::FetchError;
use crate::scrapers::{TextSource, habr};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Browser-like user agent; Habr serves a reduced page to unknown clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

fn client_builder(timeout: Duration) -> ClientBuilder {
    Client::builder().user_agent(USER_AGENT).timeout(timeout)
}

/// Fetches pages with a shared `reqwest` client, one attempt per call.
#[derive(Debug, Clone)]
pub struct HttpTextSource {
    client: Client,
}

impl HttpTextSource {
    /// Build a source whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::from_builder(client_builder(timeout))
    }

    fn from_builder(builder: ClientBuilder) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: builder.build()?,
        })
    }

    #[instrument(level = "debug", skip_all, fields(url = %url))]
    async fn get_markup(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;
        debug!(bytes = body.len(), %status, "Fetched page");
        Ok(body)
    }
}

impl TextSource for HttpTextSource {
    async fn fetch_listing(&self, url: &Url) -> Result<String, FetchError> {
        self.get_markup(url).await
    }

    async fn fetch_article_body(&self, url: &Url) -> Result<String, FetchError> {
        let markup = self.get_markup(url).await?;
        let text = habr::extract_article_body(&markup);
        debug!(%url, chars = text.chars().count(), "Extracted article body");
        Ok(text)
    }
}
