//! OnlineKhabar homepage scraper.
//!
//! The featured stories on [OnlineKhabar](https://www.onlinekhabar.com/)
//! are laid out as `section.ok-bises` blocks, each with the headline link
//! inside an `h2` and the relative publish time in `div.ok-news-post-hour`.

use crate::models::Headline;
use crate::scrapers::fetch_html;
use crate::utils::{first, raw_text, stripped_or};
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, error, info, instrument};

static CARD: Lazy<Selector> = Lazy::new(|| Selector::parse("section.ok-bises").unwrap());
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h2").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static TIME: Lazy<Selector> = Lazy::new(|| Selector::parse("div.ok-news-post-hour").unwrap());

/// Fetch the homepage and extract up to `limit` headlines.
///
/// Returns an empty list if the page cannot be fetched.
#[instrument(level = "info", skip(client))]
pub async fn index_headlines(client: &Client, url: &str, limit: usize) -> Vec<Headline> {
    match fetch_html(client, url).await {
        Ok(html) => {
            let headlines = parse_headlines(&html, limit);
            info!(count = headlines.len(), "Indexed OnlineKhabar headlines");
            headlines
        }
        Err(e) => {
            error!(error = %e, "OnlineKhabar scrape failed");
            Vec::new()
        }
    }
}

/// Extract headlines from the first `limit` featured blocks.
pub fn parse_headlines(html: &str, limit: usize) -> Vec<Headline> {
    let document = Html::parse_document(html);

    let mut headlines = Vec::new();
    for card in document.select(&CARD).take(limit) {
        let Some(anchor) = first(card, &HEADING).and_then(|h2| first(h2, &LINK)) else {
            debug!("Skipping OnlineKhabar block without a headline link");
            continue;
        };
        let title = raw_text(anchor);
        let link = anchor.value().attr("href").unwrap_or_default().trim();
        if title.is_empty() || link.is_empty() {
            continue;
        }

        let mut headline = Headline::new(title, link);
        headline.time = Some(stripped_or(card, &TIME, "N/A"));
        headlines.push(headline);
    }
    headlines
}
