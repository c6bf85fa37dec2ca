//! Request handlers.
//!
//! Every handler scrapes on demand; nothing is cached between requests.
//! Source failures on the index degrade to empty tabs, while a failed
//! article fetch becomes a 404.

use crate::error::AppError;
use crate::models::FrontPage;
use crate::scrapers::{article::scrape_article, scrape_front_page};
use crate::web::templates::{IndexContext, INDEX, NEWS_DETAIL};
use crate::web::AppState;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Query string of the detail view.
#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub url: Option<String>,
}

/// Headlines from every source, rendered as tabs.
///
/// # Returns
///
/// The rendered `index` template, or [`AppError::Render`] if rendering fails.
#[instrument(level = "info", skip_all)]
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let front_page = scrape_front_page(&state.client, &state.settings).await;
    let context = IndexContext::new(&front_page, state.settings.refresh_interval_ms);
    let page = state.templates.render(INDEX, &context)?;
    Ok(Html(page))
}

/// Same data as the index page, as JSON for the live-update script.
///
/// # Returns
///
/// `{"onlinekhabar": [...], "ronb": [...], "hp": [...]}`; a source that
/// failed contributes an empty list.
#[instrument(level = "info", skip_all)]
pub async fn fetch_latest(State(state): State<Arc<AppState>>) -> Json<FrontPage> {
    Json(scrape_front_page(&state.client, &state.settings).await)
}

/// A single article, scraped from the URL in the `url` query parameter.
///
/// # Arguments
///
/// * `query` - Carries the article URL; surrounding whitespace is ignored
///
/// # Returns
///
/// The rendered `news_detail` template. A missing or blank `url` gives
/// 404 "Article not found"; a fetch failure (bad scheme, network error,
/// timeout, non-2xx status) gives 404 "Unable to fetch article".
#[instrument(level = "info", skip_all)]
pub async fn news_detail(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DetailQuery>,
) -> Result<Html<String>, AppError> {
    let url = query
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or(AppError::NotFound("Article not found"))?;

    let article = scrape_article(&state.client, url).await.map_err(|e| {
        warn!(%url, error = %e, "Article fetch failed");
        AppError::NotFound("Unable to fetch article")
    })?;

    let page = state.templates.render(NEWS_DETAIL, &article)?;
    Ok(Html(page))
}
