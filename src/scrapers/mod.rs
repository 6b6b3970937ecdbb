//! Page fetching and markup extraction.
//!
//! The rest of the application only sees the [`TextSource`] trait. Each call
//! makes exactly one attempt and reports failure as a [`FetchError`] value
//! instead of an empty string, so callers can tell an empty article apart
//! from one that could not be fetched.
//!
//! # Submodules
//!
//! - [`habr`]: Listing entry and article body extraction from Habr markup
//! - [`http`]: [`TextSource`] backed by a `reqwest` client

pub mod habr;
pub mod http;

use crate::error::FetchError;
use url::Url;

/// Where listing markup and article text come from.
pub trait TextSource {
    /// Raw markup of the listing page.
    async fn fetch_listing(&self, url: &Url) -> Result<String, FetchError>;

    /// Visible text of an article body, with script and style content removed.
    ///
    /// Returns an empty string when the page has no article body.
    async fn fetch_article_body(&self, url: &Url) -> Result<String, FetchError>;
}
