//! News site scrapers.
//!
//! Each submodule knows the markup of one site:
//!
//! - [`onlinekhabar`]: OnlineKhabar homepage headlines
//! - [`ronbpost`]: RONB Post homepage headlines
//! - [`hamropatro`]: Hamro Patro news aggregator headlines
//! - [`article`]: OnlineKhabar article pages, for the detail view
//!
//! Homepage scrapers never fail: a fetch error is logged and yields an
//! empty list, so one unreachable site does not take the page down.

use crate::config::Settings;
use crate::error::ScrapeError;
use crate::models::FrontPage;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

pub mod article;
pub mod hamropatro;
pub mod onlinekhabar;
pub mod ronbpost;

#[cfg(test)]
pub(crate) mod fixtures;

/// Build the HTTP client shared by all scrapers.
pub fn build_client(settings: &Settings) -> Result<Client, ScrapeError> {
    let client = Client::builder()
        .timeout(settings.request_timeout())
        .user_agent(settings.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// GET a page and decode it as UTF-8.
///
/// The sites do not always declare a charset, and reqwest would fall back
/// to Latin-1 for some of them, mangling the Devanagari text. The body is
/// therefore decoded as UTF-8 unconditionally (invalid sequences are
/// replaced). Non-2xx responses are errors.
#[instrument(level = "debug", skip(client))]
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    let html = String::from_utf8_lossy(&bytes).into_owned();
    debug!(bytes = html.len(), "Fetched page");
    Ok(html)
}

/// Scrape every homepage concurrently.
#[instrument(level = "info", skip_all)]
pub async fn scrape_front_page(client: &Client, settings: &Settings) -> FrontPage {
    let limit = settings.headline_limit;
    let (onlinekhabar, ronb, hp) = futures::join!(
        onlinekhabar::index_headlines(client, &settings.sources.onlinekhabar, limit),
        ronbpost::index_headlines(client, &settings.sources.ronbpost, limit),
        hamropatro::index_headlines(client, &settings.sources.hamropatro, limit),
    );

    let front_page = FrontPage { onlinekhabar, ronb, hp };
    info!(
        total = front_page.len(),
        onlinekhabar = front_page.onlinekhabar.len(),
        ronb = front_page.ronb.len(),
        hp = front_page.hp.len(),
        "Scraped front page"
    );
    if front_page.is_empty() {
        warn!("No source returned any headlines");
    }
    front_page
}
