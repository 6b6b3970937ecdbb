//! Error types for fetching and configuration.
//!
//! A [`FetchError`] never aborts a run on its own. On an article body it only
//! removes that article's full-text contribution; on the listing page it ends
//! the scan with an empty result. A [`ConfigError`] is raised before any
//! request is made.

use thiserror::Error;

/// The text source could not retrieve a page.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network failure, timeout, or an unreadable response body.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} answered with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

impl FetchError {
    /// The URL that failed.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Request { url, .. } | FetchError::Status { url, .. } => url,
        }
    }
}

/// Invalid search configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one keyword is required")]
    NoKeywords,

    #[error("keyword #{position} is empty")]
    EmptyKeyword { position: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_names_url() {
        let e = FetchError::Status {
            url: "https://habr.com/ru/articles/1/".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(e.url(), "https://habr.com/ru/articles/1/");
        assert_eq!(
            e.to_string(),
            "https://habr.com/ru/articles/1/ answered with HTTP 404 Not Found"
        );
    }

    #[test]
    fn test_empty_keyword_message() {
        let e = ConfigError::EmptyKeyword { position: 2 };
        assert_eq!(e.to_string(), "keyword #2 is empty");
    }
}
