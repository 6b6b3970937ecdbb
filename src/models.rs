//! Data models for listing entries, keyword matches and report records.
//!
//! This module defines the core data structures used throughout the application:
//! - [`ArticleStub`]: Metadata scraped from one entry of the listing page
//! - [`KeywordMatchResult`]: Which keywords occur in an article and how often
//! - [`ArticleRecord`]: A stub that passed the keyword filter, with its matches
//! - [`SearchConfig`]: The immutable keyword set, mode and full-text switch for one run

use crate::error::ConfigError;
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

/// Date shown for listing entries that carry no publication time.
pub const DATE_NOT_FOUND: &str = "date not found";

/// Keywords searched for when none are given on the command line.
pub const DEFAULT_KEYWORDS: [&str; 4] = ["дизайн", "фото", "web", "python"];

/// Lightweight article metadata extracted from the listing page.
///
/// Stubs are produced by the listing extractor before any full-text fetch and
/// are never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleStub {
    /// Headline text of the title link.
    pub title: String,
    /// Absolute article URL, resolved against the listing page URL.
    pub url: Url,
    /// Raw display date, or [`DATE_NOT_FOUND`].
    pub date: String,
    /// Preview text shown on the listing, possibly empty.
    pub preview: String,
}

/// Inclusion policy for an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// At least one keyword must occur.
    #[default]
    Any,
    /// Every configured keyword must occur.
    All,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Any => "any",
            SearchMode::All => "all",
        }
    }

    /// Human readable requirement, used in the report banner.
    pub fn describe(&self) -> &'static str {
        match self {
            SearchMode::Any => "at least one keyword",
            SearchMode::All => "every keyword",
        }
    }

    /// Decide inclusion from the number of matched and configured keywords.
    ///
    /// An empty keyword set never includes anything, in either mode.
    pub fn accepts(&self, matched: usize, configured: usize) -> bool {
        match self {
            SearchMode::Any => matched > 0,
            SearchMode::All => configured > 0 && matched == configured,
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keywords found in one search text.
///
/// `matched_keywords` follows the configured keyword order. Every matched
/// keyword has a count of at least one in `occurrence_counts`; keywords that
/// did not match are absent from both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordMatchResult {
    pub matched_keywords: Vec<String>,
    pub occurrence_counts: BTreeMap<String, usize>,
}

impl KeywordMatchResult {
    /// Record a keyword hit. Zero counts and repeated keywords are ignored.
    pub(crate) fn record(&mut self, keyword: &str, count: usize) {
        if count == 0 || self.occurrence_counts.contains_key(keyword) {
            return;
        }
        self.matched_keywords.push(keyword.to_string());
        self.occurrence_counts.insert(keyword.to_string(), count);
    }

    pub fn is_empty(&self) -> bool {
        self.matched_keywords.is_empty()
    }

    pub fn matched_count(&self) -> usize {
        self.matched_keywords.len()
    }

    pub fn count(&self, keyword: &str) -> Option<usize> {
        self.occurrence_counts.get(keyword).copied()
    }

    /// Matched keywords with their counts, in matched order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.matched_keywords
            .iter()
            .map(|k| (k.as_str(), self.count(k).unwrap_or(0)))
    }
}

/// Outcome of the full-text fetch for one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FullTextStatus {
    /// The body was fetched and contributed to the search text.
    Available,
    /// The page was fetched but had no article text.
    Empty,
    /// The fetch failed; only title and preview were searched.
    Unavailable { reason: String },
}

impl FullTextStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, FullTextStatus::Available)
    }
}

/// A listing entry that passed the keyword filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRecord {
    #[serde(flatten)]
    pub stub: ArticleStub,
    #[serde(flatten)]
    pub matches: KeywordMatchResult,
    /// Set only when the run fetched article bodies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text: Option<FullTextStatus>,
}

impl ArticleRecord {
    /// `None` outside full-text mode.
    pub fn full_text_available(&self) -> Option<bool> {
        self.full_text.as_ref().map(FullTextStatus::is_available)
    }
}

/// Keyword set, search mode and full-text switch for one run.
///
/// Built once from the command line and passed by reference to the matcher,
/// aggregator and reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    keywords: Vec<String>,
    mode: SearchMode,
    full_text: bool,
}

impl SearchConfig {
    /// Build a configuration, dropping duplicate keywords while keeping the
    /// first occurrence of each.
    ///
    /// Keywords are kept exactly as given, surrounding whitespace included:
    /// `" py"` is a different needle from `"py"`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyKeyword`] if a keyword is the empty string,
    /// [`ConfigError::NoKeywords`] if no keyword is given.
    pub fn new<I, S>(keywords: I, mode: SearchMode, full_text: bool) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut given_keywords = Vec::new();
        for (i, keyword) in keywords.into_iter().enumerate() {
            let keyword = keyword.as_ref();
            if keyword.is_empty() {
                return Err(ConfigError::EmptyKeyword { position: i + 1 });
            }
            given_keywords.push(keyword.to_string());
        }
        if given_keywords.is_empty() {
            return Err(ConfigError::NoKeywords);
        }

        let given = given_keywords.len();
        let keywords: Vec<String> = given_keywords.into_iter().unique().collect();
        if keywords.len() < given {
            tracing::debug!(given, kept = keywords.len(), "Dropped duplicate keywords");
        }

        Ok(Self {
            keywords,
            mode,
            full_text,
        })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn full_text(&self) -> bool {
        self.full_text
    }
}
