//! # Habr Keyword Filter
//!
//! Scans the Habr article listing, optionally fetches every article body, and
//! reports the articles that mention a set of keywords together with how often
//! each keyword occurs.
//!
//! ## Usage
//!
//! ```sh
//! habr_keyword_filter --full --keywords rust python --mode any
//! ```
//!
//! ## Architecture
//!
//! The run is a single sequential pipeline:
//! 1. **Listing**: Fetch the listing page and extract article stubs
//! 2. **Expansion**: In `--full` mode, fetch each article body, pausing between fetches
//! 3. **Matching**: Count keyword occurrences and apply the ANY/ALL policy
//! 4. **Output**: Print a text or JSON report
//!
//! Logs go to stderr; stdout carries only the report.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::error::Error;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod aggregator;
mod cli;
mod error;
mod matcher;
mod models;
mod outputs;
mod scrapers;
mod throttle;
mod utils;

use cli::Cli;
use outputs::{json, report};
use scrapers::http::HttpTextSource;
use throttle::FixedDelay;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = args
        .search_config()
        .unwrap_or_else(|e| Cli::command().error(ErrorKind::InvalidValue, e).exit());
    info!(
        keywords = ?config.keywords(),
        mode = %config.mode(),
        full_text = config.full_text(),
        url = %args.url,
        "habr_keyword_filter starting up"
    );

    if !args.json {
        println!("{}", report::Banner::new(&config));
    }

    let source = HttpTextSource::new(args.timeout())?;
    let limiter = FixedDelay::new(args.delay());
    if config.full_text() {
        debug!(interval = ?limiter.interval(), "Politeness delay between article fetches");
    }

    let outcome = aggregator::scan_listing(&source, &limiter, &args.url, &config).await;

    if args.json {
        println!("{}", json::render_json(&outcome, &config)?);
    } else {
        print!("{}", report::Report::new(&outcome, &config));
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        matched = outcome.records().len(),
        "Execution complete"
    );

    Ok(())
}
