//! Per-article pipeline: listing fetch, optional full-text expansion,
//! keyword matching and record assembly.
//!
//! Articles are processed one at a time in listing order. A failure on one
//! article never stops the batch: a body fetch failure falls back to title and
//! preview and is recorded on that article only. Only a failed listing fetch
//! ends the scan early, with an empty result.

use crate::error::FetchError;
use crate::matcher::{fold_case, match_keywords};
use crate::models::{ArticleRecord, ArticleStub, FullTextStatus, SearchConfig};
use crate::scrapers::{TextSource, habr};
use crate::throttle::RateLimiter;
use crate::utils::truncate_for_log;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Result of scanning one listing page.
#[derive(Debug)]
pub enum ScanOutcome {
    /// The listing page itself could not be fetched.
    ListingUnavailable { url: String, error: FetchError },
    /// The listing was fetched; `records` holds the matching articles.
    Scanned {
        stubs_seen: usize,
        records: Vec<ArticleRecord>,
    },
}

impl ScanOutcome {
    /// Matching records; empty when the listing was unavailable.
    pub fn records(&self) -> &[ArticleRecord] {
        match self {
            ScanOutcome::ListingUnavailable { .. } => &[],
            ScanOutcome::Scanned { records, .. } => records,
        }
    }
}

/// Fetch the listing at `listing_url`, extract its stubs and filter them.
///
/// # Arguments
///
/// * `source` - Where the listing markup and article bodies come from
/// * `limiter` - Politeness pause, used only in full-text mode
/// * `listing_url` - Listing page to scan; article links are resolved against it
/// * `config` - Keywords, search mode and full-text switch
///
/// # Returns
///
/// [`ScanOutcome::Scanned`] with the matching records in listing order, or
/// [`ScanOutcome::ListingUnavailable`] if the listing page could not be fetched.
#[instrument(level = "info", skip_all, fields(url = %listing_url))]
pub async fn scan_listing<S, L>(
    source: &S,
    limiter: &L,
    listing_url: &Url,
    config: &SearchConfig,
) -> ScanOutcome
where
    S: TextSource,
    L: RateLimiter,
{
    let markup = match source.fetch_listing(listing_url).await {
        Ok(markup) => markup,
        Err(e) => {
            error!(url = %listing_url, error = %e, "Failed to fetch listing page");
            return ScanOutcome::ListingUnavailable {
                url: listing_url.to_string(),
                error: e,
            };
        }
    };

    let stubs = habr::extract_stubs(&markup, listing_url);
    let records = aggregate(source, limiter, &stubs, config).await;
    ScanOutcome::Scanned {
        stubs_seen: stubs.len(),
        records,
    }
}

/// Filter `stubs` down to the articles that satisfy `config`, keeping their order.
///
/// In full-text mode every stub's body is fetched and `limiter` is paused once
/// per stub, whether or not the fetch succeeded.
///
/// # Arguments
///
/// * `source` - Fetches article bodies in full-text mode
/// * `limiter` - Paused after every body fetch
/// * `stubs` - Listing entries, in listing order
/// * `config` - Keywords, search mode and full-text switch
///
/// # Returns
///
/// The records of the stubs that passed the keyword filter, in the same
/// relative order as `stubs`.
pub async fn aggregate<S, L>(
    source: &S,
    limiter: &L,
    stubs: &[ArticleStub],
    config: &SearchConfig,
) -> Vec<ArticleRecord>
where
    S: TextSource,
    L: RateLimiter,
{
    let total = stubs.len();
    if config.full_text() {
        info!(total, "Found articles for full-text analysis");
    }

    let mut records = Vec::new();
    for (i, stub) in stubs.iter().enumerate() {
        if config.full_text() {
            info!(
                index = i + 1,
                total,
                title = %truncate_for_log(&stub.title, 60),
                "Processing article"
            );
        }

        if let Some(record) = process_stub(source, stub, config).await {
            debug!(
                index = i + 1,
                matched = ?record.matches.matched_keywords,
                full_text = ?record.full_text_available(),
                "Article matched"
            );
            records.push(record);
        }

        if config.full_text() {
            limiter.pause().await;
        }
    }

    info!(total, matched = records.len(), "Keyword filtering complete");
    records
}

/// Lowercased `title + " " + preview`.
pub fn base_search_text(stub: &ArticleStub) -> String {
    fold_case(&format!("{} {}", stub.title, stub.preview))
}

async fn process_stub<S: TextSource>(
    source: &S,
    stub: &ArticleStub,
    config: &SearchConfig,
) -> Option<ArticleRecord> {
    let mut search_text = base_search_text(stub);

    let full_text = if config.full_text() {
        let status = match source.fetch_article_body(&stub.url).await {
            Ok(body) if body.trim().is_empty() => FullTextStatus::Empty,
            Ok(body) => {
                search_text.push(' ');
                search_text.push_str(&fold_case(&body));
                FullTextStatus::Available
            }
            Err(e) => {
                warn!(url = %e.url(), error = %e, "Full text unavailable; using title and preview");
                FullTextStatus::Unavailable {
                    reason: e.to_string(),
                }
            }
        };
        Some(status)
    } else {
        None
    };

    let outcome = match_keywords(&search_text, config.keywords(), config.mode());
    if !outcome.should_include {
        return None;
    }

    Some(ArticleRecord {
        stub: stub.clone(),
        matches: outcome.result,
        full_text,
    })
}
