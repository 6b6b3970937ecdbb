//! JSON report for `--json`.
//!
//! # Output Shape
//!
//! ```text
//! {
//!   "keywords": ["web", "python"],
//!   "mode": "any",
//!   "full_text": true,
//!   "status": "ok" | "listing_unavailable",
//!   "error": "...",            // only when the listing failed
//!   "articles_scanned": 20,
//!   "articles": [ { "title", "url", "date", "preview",
//!                   "matched_keywords", "occurrence_counts",
//!                   "full_text": { "status": ... } } ]
//! }
//! ```

use crate::aggregator::ScanOutcome;
use crate::models::{ArticleRecord, SearchConfig, SearchMode};
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum Status {
    Ok,
    ListingUnavailable,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    keywords: &'a [String],
    mode: SearchMode,
    full_text: bool,
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    articles_scanned: usize,
    articles: &'a [ArticleRecord],
}

/// Serialize a scan outcome together with the configuration that produced it.
///
/// # Arguments
///
/// * `outcome` - Result of [`scan_listing`](crate::aggregator::scan_listing)
/// * `config` - The configuration the scan ran with
///
/// # Returns
///
/// Pretty-printed JSON in the shape shown in the module docs.
#[instrument(level = "debug", skip_all)]
pub fn render_json(outcome: &ScanOutcome, config: &SearchConfig) -> serde_json::Result<String> {
    let (status, error, articles_scanned) = match outcome {
        ScanOutcome::ListingUnavailable { error, .. } => {
            (Status::ListingUnavailable, Some(error.to_string()), 0)
        }
        ScanOutcome::Scanned { stubs_seen, .. } => (Status::Ok, None, *stubs_seen),
    };

    let report = JsonReport {
        keywords: config.keywords(),
        mode: config.mode(),
        full_text: config.full_text(),
        status,
        error,
        articles_scanned,
        articles: outcome.records(),
    };
    serde_json::to_string_pretty(&report)
}
