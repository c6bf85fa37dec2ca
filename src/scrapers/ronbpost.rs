//! RONB Post homepage scraper.
//!
//! [RONB Post](https://www.ronbpost.com/) renders its main stories as UIkit
//! cards (`div.uk-card`) with an `h1.main-banner` headline, an optional
//! `h3.sub-title` and an optional lead paragraph.

use crate::models::Headline;
use crate::scrapers::fetch_html;
use crate::utils::{first, raw_text, stripped_or};
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{error, info, instrument};

static CARD: Lazy<Selector> = Lazy::new(|| Selector::parse("div.uk-card").unwrap());
static BANNER: Lazy<Selector> = Lazy::new(|| Selector::parse("h1.main-banner").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static SUBTITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h3.sub-title").unwrap());
static LEAD: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p.uk-margin-remove-bottom.uk-text-lead").unwrap());

/// Fetch the homepage and extract up to `limit` headlines.
///
/// Returns an empty list if the page cannot be fetched.
#[instrument(level = "info", skip(client))]
pub async fn index_headlines(client: &Client, url: &str, limit: usize) -> Vec<Headline> {
    match fetch_html(client, url).await {
        Ok(html) => {
            let headlines = parse_headlines(&html, limit);
            info!(count = headlines.len(), "Indexed RONB headlines");
            headlines
        }
        Err(e) => {
            error!(error = %e, "RONB scrape failed");
            Vec::new()
        }
    }
}

/// Extract headlines from the first `limit` cards.
pub fn parse_headlines(html: &str, limit: usize) -> Vec<Headline> {
    let document = Html::parse_document(html);

    document
        .select(&CARD)
        .take(limit)
        .filter_map(|card| {
            let anchor = first(card, &BANNER).and_then(|h1| first(h1, &LINK))?;
            let title = raw_text(anchor);
            let link = anchor.value().attr("href")?.trim();
            if title.is_empty() || link.is_empty() {
                return None;
            }

            let mut headline = Headline::new(title, link);
            headline.subtitle = Some(stripped_or(card, &SUBTITLE, ""));
            headline.description = Some(stripped_or(card, &LEAD, ""));
            Some(headline)
        })
        .collect()
}
