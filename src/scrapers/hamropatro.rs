//! Hamro Patro news scraper.
//!
//! [Hamro Patro](https://www.hamropatro.com/news) aggregates stories from
//! other outlets. Each `div.item.newsCard` carries a headline, a short
//! description and a `div.source` line naming the outlet, with the story's
//! age in a nested `span`.
//!
//! # URL Pattern
//!
//! Headline links are site-relative (`/news/...`) and are resolved against
//! the page URL, giving `https://www.hamropatro.com/news/...`.

use crate::models::Headline;
use crate::scrapers::fetch_html;
use crate::utils::{first, joined_text, stripped_or, stripped_text};
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, error, info, instrument};
use url::Url;

static CARD: Lazy<Selector> = Lazy::new(|| Selector::parse("div.item.newsCard").unwrap());
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h2.newsheadingMobile").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static DESCRIPTION: Lazy<Selector> = Lazy::new(|| Selector::parse("div.desc").unwrap());
static SOURCE: Lazy<Selector> = Lazy::new(|| Selector::parse("div.source").unwrap());
static SPAN: Lazy<Selector> = Lazy::new(|| Selector::parse("span").unwrap());

/// Fetch the news page and extract up to `limit` headlines.
///
/// Returns an empty list if the page cannot be fetched.
#[instrument(level = "info", skip(client))]
pub async fn index_headlines(client: &Client, url: &str, limit: usize) -> Vec<Headline> {
    let base = match Url::parse(url) {
        Ok(base) => base,
        Err(e) => {
            error!(error = %e, "Hamro Patro URL is invalid");
            return Vec::new();
        }
    };

    match fetch_html(client, url).await {
        Ok(html) => {
            let headlines = parse_headlines(&html, &base, limit);
            info!(count = headlines.len(), "Indexed Hamro Patro headlines");
            headlines
        }
        Err(e) => {
            error!(error = %e, "Hamro Patro scrape failed");
            Vec::new()
        }
    }
}

/// Extract headlines from the first `limit` news cards.
///
/// `base` is the URL the page was fetched from; relative links are resolved
/// against it.
pub fn parse_headlines(html: &str, base: &Url, limit: usize) -> Vec<Headline> {
    let document = Html::parse_document(html);

    let mut headlines = Vec::new();
    for card in document.select(&CARD).take(limit) {
        let Some(anchor) = first(card, &HEADING).and_then(|h2| first(h2, &LINK)) else {
            continue;
        };
        let title = stripped_text(anchor);
        let href = anchor.value().attr("href").unwrap_or_default().trim();
        if title.is_empty() || href.is_empty() {
            continue;
        }
        let link = match base.join(href) {
            Ok(link) => link,
            Err(e) => {
                debug!(%href, error = %e, "Skipping Hamro Patro card with unusable link");
                continue;
            }
        };

        let source_line = first(card, &SOURCE);
        let mut headline = Headline::new(title, link.to_string());
        headline.description = Some(stripped_or(card, &DESCRIPTION, ""));
        headline.source = Some(source_line.map(joined_text).unwrap_or_default());
        headline.time = Some(
            source_line
                .and_then(|source| first(source, &SPAN))
                .map(stripped_text)
                .unwrap_or_default(),
        );
        headlines.push(headline);
    }
    headlines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::fixtures::HAMROPATRO_NEWS;

    fn base() -> Url {
        Url::parse("https://www.hamropatro.com/news").unwrap()
    }

    #[test]
    fn test_parse_headlines() {
        let headlines = parse_headlines(HAMROPATRO_NEWS, &base(), 10);

        assert_eq!(headlines.len(), 2);
        let card = &headlines[0];
        assert_eq!(card.title, "पेट्रोलियम पदार्थको मूल्य बढ्यो");
        assert_eq!(card.link, "https://www.hamropatro.com/news/12345");
        assert_eq!(
            card.description.as_deref(),
            Some("नेपाल आयल निगमले नयाँ मूल्य सार्वजनिक गर्यो।")
        );
        assert_eq!(card.source.as_deref(), Some("कान्तिपुर ३ घण्टा अगाडि"));
        assert_eq!(card.time.as_deref(), Some("३ घण्टा अगाडि"));
    }

    #[test]
    fn test_absolute_links_are_kept() {
        let headlines = parse_headlines(HAMROPATRO_NEWS, &base(), 10);
        let card = &headlines[1];
        assert_eq!(card.link, "https://example.com/story");
        assert_eq!(card.source.as_deref(), Some(""));
        assert_eq!(card.time.as_deref(), Some(""));
        assert_eq!(card.description.as_deref(), Some(""));
    }

    #[test]
    fn test_cards_without_heading_are_skipped() {
        let html = r#"<div class="item newsCard">
            <h2><a href="/news/1">Wrong heading</a></h2>
        </div>"#;
        assert!(parse_headlines(html, &base(), 10).is_empty());
    }

    #[test]
    fn test_limit() {
        assert_eq!(parse_headlines(HAMROPATRO_NEWS, &base(), 1).len(), 1);
    }
}
