//! Text layouts printed to stdout.
//!
//! Preview runs get one compact block per article. Full-text runs get a
//! verbose block with a per-keyword occurrence breakdown and the full-text
//! status. An empty result and a failed listing fetch print different
//! messages.
//!
//! Both [`Banner`] and [`Report`] implement [`fmt::Display`], so `main` can
//! print them straight to stdout and tests can call `to_string()`.

use crate::aggregator::ScanOutcome;
use crate::models::{ArticleRecord, FullTextStatus, SearchConfig};
use std::fmt;

const COMPACT_RULE_WIDTH: usize = 80;
const VERBOSE_RULE_WIDTH: usize = 100;

pub const NO_MATCHES: &str = "No articles matched the keywords.";

/// Lines printed before the scan starts.
pub struct Banner<'a> {
    config: &'a SearchConfig,
}

impl<'a> Banner<'a> {
    pub fn new(config: &'a SearchConfig) -> Self {
        Self { config }
    }
}

impl fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;
        if config.full_text() {
            writeln!(f, "Scanning Habr articles with full-text analysis...")?;
            writeln!(f, "Article bodies are fetched and searched too")?;
        } else {
            writeln!(f, "Scanning Habr articles...")?;
            writeln!(f, "Searching titles and previews only")?;
        }
        writeln!(f, "Keywords: {}", config.keywords().join(", "))?;
        writeln!(
            f,
            "Search mode: {} (match {})",
            config.mode(),
            config.mode().describe()
        )
    }
}

/// The outcome of a scan in the layout selected by its configuration.
///
/// # Arguments
///
/// * `outcome` - Result of [`scan_listing`](crate::aggregator::scan_listing)
/// * `config` - The configuration the scan ran with; picks compact or verbose layout
///
/// Displays as the listing-failure message, [`NO_MATCHES`], or one block per
/// matching article.
pub struct Report<'a> {
    outcome: &'a ScanOutcome,
    config: &'a SearchConfig,
}

impl<'a> Report<'a> {
    pub fn new(outcome: &'a ScanOutcome, config: &'a SearchConfig) -> Self {
        Self { outcome, config }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let records = match self.outcome {
            ScanOutcome::ListingUnavailable { url, error } => {
                writeln!(f, "Could not fetch the listing page {url}: {error}")?;
                return writeln!(f, "No articles were scanned.");
            }
            ScanOutcome::Scanned { records, .. } => records,
        };

        if records.is_empty() {
            return writeln!(f, "{NO_MATCHES}");
        }

        if self.config.full_text() {
            write_verbose(f, records, self.config)
        } else {
            write_compact(f, records, self.config)
        }
    }
}

fn write_header(
    f: &mut fmt::Formatter<'_>,
    records: &[ArticleRecord],
    config: &SearchConfig,
) -> fmt::Result {
    writeln!(
        f,
        "Found {} articles with keywords: {}",
        records.len(),
        config.keywords().join(", ")
    )
}

fn write_compact(
    f: &mut fmt::Formatter<'_>,
    records: &[ArticleRecord],
    config: &SearchConfig,
) -> fmt::Result {
    let rule = "-".repeat(COMPACT_RULE_WIDTH);
    write_header(f, records, config)?;
    writeln!(f, "{rule}")?;

    for record in records {
        let stub = &record.stub;
        writeln!(f, "{} – {} – {}", stub.date, stub.title, stub.url)?;
        writeln!(
            f,
            "Matched keywords: {}",
            record.matches.matched_keywords.join(", ")
        )?;
        writeln!(f, "{rule}")?;
    }
    Ok(())
}

fn write_verbose(
    f: &mut fmt::Formatter<'_>,
    records: &[ArticleRecord],
    config: &SearchConfig,
) -> fmt::Result {
    writeln!(f)?;
    write_header(f, records, config)?;
    writeln!(f, "{}", "=".repeat(VERBOSE_RULE_WIDTH))?;

    for record in records {
        let stub = &record.stub;
        writeln!(f, "Date: {}", stub.date)?;
        writeln!(f, "Title: {}", stub.title)?;
        writeln!(f, "Link: {}", stub.url)?;
        writeln!(
            f,
            "Matched keywords: {}",
            record.matches.matched_keywords.join(", ")
        )?;

        if !record.matches.is_empty() {
            writeln!(f, "Occurrences:")?;
            for (keyword, count) in record.matches.iter() {
                let unit = if count == 1 { "time" } else { "times" };
                writeln!(f, "  - '{keyword}': {count} {unit}")?;
            }
        }

        writeln!(f, "Full text: {}", full_text_label(record.full_text.as_ref()))?;
        writeln!(f, "{}", "-".repeat(VERBOSE_RULE_WIDTH))?;
    }
    Ok(())
}

fn full_text_label(status: Option<&FullTextStatus>) -> String {
    match status {
        Some(FullTextStatus::Available) => "available".to_string(),
        Some(FullTextStatus::Empty) => "not available (empty body)".to_string(),
        Some(FullTextStatus::Unavailable { reason }) => {
            format!("not available (fetch failed: {reason})")
        }
        None => "not requested".to_string(),
    }
}
