//! Article page scraper for the detail view.
//!
//! Targets the OnlineKhabar article layout: an `h1.entry-title` headline,
//! a byline block, the body in `.ok18-single-post-content-wrap` and an
//! optional "AI summary" bullet list (`.ai_summary_block_list`). The byline
//! selectors include generic fallbacks (`time`, `.author`, `.post-author`)
//! so other WordPress-style pages still produce something readable.

use crate::error::ScrapeError;
use crate::models::ArticleDetail;
use crate::scrapers::fetch_html;
use crate::utils::{stripped_text, truncate_for_log};
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{info, instrument};
use url::Url;

/// Paragraphs at or below this many characters are captions, bylines or
/// share prompts rather than body text.
const MIN_PARAGRAPH_CHARS: usize = 50;

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h1.entry-title").unwrap());
static TIME: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".ok-news-post-hour span, time").unwrap());
static AUTHOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".ok-news-author .author-name, .author, .post-author").unwrap()
});
static BODY: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".ok18-single-post-content-wrap").unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());
static SUMMARY_ITEM: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".ai_summary_block_list li").unwrap());

/// Fetch an article page and break it into an [`ArticleDetail`].
///
/// Only `http` and `https` URLs are fetched. Any fetch failure (bad URL,
/// network error, timeout, non-2xx status) is returned as an error; a page
/// that fetches but lacks the expected markup still yields a detail with
/// placeholder values.
#[instrument(level = "info", skip(client))]
pub async fn scrape_article(client: &Client, url: &str) -> Result<ArticleDetail, ScrapeError> {
    let parsed = Url::parse(url).map_err(|e| ScrapeError::InvalidUrl(format!("{url}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ScrapeError::InvalidUrl(format!(
            "{url}: unsupported scheme {}",
            parsed.scheme()
        )));
    }

    let html = fetch_html(client, parsed.as_str()).await?;
    let article = parse_article(&html, url);
    info!(
        title = %truncate_for_log(&article.title, 80),
        paragraphs = article.paragraphs.len(),
        summary = article.summary.len(),
        "Parsed article"
    );
    Ok(article)
}

/// Extract the article fields from a page, falling back to placeholders.
pub fn parse_article(html: &str, source_url: &str) -> ArticleDetail {
    let document = Html::parse_document(html);

    let title = first_text(&document, &TITLE, "No Title");
    let time = first_text(&document, &TIME, "Unknown time");
    let author = first_text(&document, &AUTHOR, "Unknown author");

    let paragraphs = document
        .select(&BODY)
        .next()
        .map(|body| {
            body.select(&PARAGRAPH)
                .map(stripped_text)
                .filter(|text| text.chars().count() > MIN_PARAGRAPH_CHARS)
                .collect()
        })
        .unwrap_or_default();

    let summary = document.select(&SUMMARY_ITEM).map(stripped_text).collect();

    ArticleDetail {
        title,
        time,
        author,
        paragraphs,
        summary,
        source_url: source_url.to_string(),
    }
}

fn first_text(document: &Html, selector: &Selector, default: &str) -> String {
    document
        .select(selector)
        .next()
        .map(stripped_text)
        .unwrap_or_else(|| default.to_string())
}
