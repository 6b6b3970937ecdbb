//! Habr listing and article extraction.
//!
//! Selectors cover both the classic `post__*` markup and the current
//! `tm-*` markup, so the same extractor works on archived and live pages.
//!
//! # Listing entries
//!
//! | Field | Selector | When missing |
//! |-------|----------|--------------|
//! | entry | `article.post` | - |
//! | title + link | `h2.post__title a` | entry skipped |
//! | date | `time.post__time` | [`DATE_NOT_FOUND`] |
//! | preview | `div.post__text` | empty string |

use crate::models::{ArticleStub, DATE_NOT_FOUND};
use crate::utils::{element_text, truncate_for_log, visible_text};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument};
use url::Url;

/// Default listing page: all new articles on Habr.
pub const DEFAULT_LISTING_URL: &str = "https://habr.com/ru/all/";

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector must parse")
}

static ENTRY: Lazy<Selector> = Lazy::new(|| selector("article.post, article.tm-articles-list__item"));
static TITLE_LINK: Lazy<Selector> = Lazy::new(|| selector("h2.post__title a, h2.tm-title a"));
static DATE: Lazy<Selector> =
    Lazy::new(|| selector("time.post__time, .tm-article-datetime-published time"));
static PREVIEW: Lazy<Selector> = Lazy::new(|| selector("div.post__text, .article-formatted-body"));
static BODY: Lazy<Selector> = Lazy::new(|| selector("div.post__text, div.article-formatted-body"));

/// Extract article stubs from listing markup, in listing order.
///
/// Entries without a usable title link are skipped. Missing dates become
/// [`DATE_NOT_FOUND`] and missing previews become empty strings.
///
/// # Arguments
///
/// * `markup` - HTML of the listing page
/// * `base` - URL the listing was fetched from; relative links resolve against it
///
/// # Returns
///
/// One [`ArticleStub`] per usable entry, each with an absolute URL.
#[instrument(level = "debug", skip_all, fields(base = %base))]
pub fn extract_stubs(markup: &str, base: &Url) -> Vec<ArticleStub> {
    let document = Html::parse_document(markup);
    let mut stubs = Vec::new();
    let mut entries = 0usize;

    for (position, entry) in document.select(&ENTRY).enumerate() {
        entries += 1;

        let Some(link) = entry.select(&TITLE_LINK).next() else {
            debug!(position, "Listing entry has no title link; skipping");
            continue;
        };
        let Some(href) = link.value().attr("href") else {
            debug!(position, "Title link has no href; skipping");
            continue;
        };
        let url = match base.join(href) {
            Ok(url) => url,
            Err(e) => {
                debug!(position, href, error = %e, "Unresolvable title link; skipping");
                continue;
            }
        };
        let title = element_text(link);
        if title.is_empty() {
            debug!(position, %url, "Title link has no text; skipping");
            continue;
        }

        let date = entry
            .select(&DATE)
            .next()
            .map(element_text)
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DATE_NOT_FOUND.to_string());
        let preview = entry
            .select(&PREVIEW)
            .next()
            .map(element_text)
            .unwrap_or_default();

        debug!(position, title = %truncate_for_log(&title, 60), %url, "Extracted stub");
        stubs.push(ArticleStub {
            title,
            url,
            date,
            preview,
        });
    }

    info!(entries, kept = stubs.len(), "Extracted article stubs from listing");
    stubs
}

/// Visible text of the article body.
///
/// # Arguments
///
/// * `markup` - HTML of an article page
///
/// # Returns
///
/// Whitespace-joined text of the body container with `script` and `style`
/// content left out, or an empty string if the page has no body container.
pub fn extract_article_body(markup: &str) -> String {
    let document = Html::parse_document(markup);
    document
        .select(&BODY)
        .next()
        .map(visible_text)
        .unwrap_or_default()
}
