//! Command-line interface definitions.
//!
//! This module defines the CLI arguments using the `clap` crate and turns
//! them into the immutable [`SearchConfig`] used for the rest of the run.

use crate::error::ConfigError;
use crate::models::{DEFAULT_KEYWORDS, SearchConfig, SearchMode};
use crate::scrapers::habr::DEFAULT_LISTING_URL;
use crate::scrapers::http::DEFAULT_TIMEOUT;
use crate::throttle::FixedDelay;
use clap::Parser;
use std::time::Duration;
use url::Url;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Titles and previews only, default keywords
/// habr_keyword_filter
///
/// # Fetch every article body and require all keywords
/// habr_keyword_filter --full --keywords rust tokio --mode all
///
/// # Machine readable output
/// habr_keyword_filter --keywords python --json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Fetch and search the full text of every article (slower, more precise)
    #[arg(long)]
    pub full: bool,

    /// Keywords to search for, matched as given [default: дизайн фото web python]
    #[arg(long, num_args = 1.., value_parser = parse_keyword)]
    pub keywords: Option<Vec<String>>,

    /// any: at least one keyword must occur; all: every keyword must occur
    #[arg(long, value_enum, default_value_t = SearchMode::Any)]
    pub mode: SearchMode,

    /// Listing page to scan
    #[arg(long, default_value = DEFAULT_LISTING_URL)]
    pub url: Url,

    /// Pause between article fetches in full-text mode, in milliseconds
    #[arg(long, default_value_t = FixedDelay::DEFAULT_INTERVAL.as_millis() as u64)]
    pub delay_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Accept any keyword except the empty string, which would match everywhere.
fn parse_keyword(s: &str) -> Result<String, String> {
    if s.is_empty() {
        Err("keywords must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

impl Cli {
    /// Build the search configuration, falling back to the default keywords.
    pub fn search_config(&self) -> Result<SearchConfig, ConfigError> {
        match &self.keywords {
            Some(keywords) => SearchConfig::new(keywords, self.mode, self.full),
            None => SearchConfig::new(DEFAULT_KEYWORDS, self.mode, self.full),
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["habr_keyword_filter"]);
        let config = cli.search_config().unwrap();

        assert!(!cli.full);
        assert!(!cli.json);
        assert_eq!(cli.url.as_str(), "https://habr.com/ru/all/");
        assert_eq!(cli.delay(), Duration::from_secs(1));
        assert_eq!(cli.timeout(), Duration::from_secs(30));
        assert_eq!(config.keywords(), &["дизайн", "фото", "web", "python"]);
        assert_eq!(config.mode(), SearchMode::Any);
        assert!(!config.full_text());
    }

    #[test]
    fn test_cli_keywords_and_mode() {
        let cli = Cli::parse_from([
            "habr_keyword_filter",
            "--full",
            "--keywords",
            "rust",
            "tokio",
            "rust",
            "--mode",
            "all",
        ]);
        let config = cli.search_config().unwrap();

        assert_eq!(config.keywords(), &["rust", "tokio"]);
        assert_eq!(config.mode(), SearchMode::All);
        assert!(config.full_text());
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        let result = Cli::try_parse_from(["habr_keyword_filter", "--mode", "some"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_keywords_need_a_value() {
        let result = Cli::try_parse_from(["habr_keyword_filter", "--keywords"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_empty_keyword() {
        let err = Cli::try_parse_from(["habr_keyword_filter", "--keywords", "web", ""])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("keywords must not be empty"));
    }

    #[test]
    fn test_cli_keeps_keyword_whitespace() {
        let cli = Cli::parse_from(["habr_keyword_filter", "--keywords", " py", "py"]);
        let config = cli.search_config().unwrap();
        assert_eq!(config.keywords(), &[" py", "py"]);
    }

    #[test]
    fn test_config_error_renders_through_clap() {
        let err = Cli::command().error(
            clap::error::ErrorKind::InvalidValue,
            ConfigError::EmptyKeyword { position: 1 },
        );
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
        assert!(err.to_string().starts_with("error: keyword #1 is empty"));
    }

    #[test]
    fn test_cli_custom_url_and_delay() {
        let cli = Cli::parse_from([
            "habr_keyword_filter",
            "--url",
            "https://habr.com/ru/flows/develop/",
            "--delay-ms",
            "250",
            "--json",
        ]);
        assert_eq!(cli.url.path(), "/ru/flows/develop/");
        assert_eq!(cli.delay(), Duration::from_millis(250));
        assert!(cli.json);
    }
}
