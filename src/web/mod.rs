//! HTTP front end.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /` | [`handlers::index`] |
//! | `GET /news-detail/?url=...` | [`handlers::news_detail`] |
//! | `GET /fetch-latest/` | [`handlers::fetch_latest`] |

use crate::config::Settings;
use crate::scrapers::build_client;
use axum::{routing::get, Router};
use handlebars::Handlebars;
use reqwest::Client;
use std::error::Error;
use std::sync::Arc;

pub mod handlers;
pub mod templates;

/// Shared, read-only state handed to every request.
pub struct AppState {
    pub client: Client,
    pub settings: Settings,
    pub templates: Handlebars<'static>,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self, Box<dyn Error>> {
        let client = build_client(&settings)?;
        let templates = templates::registry()?;
        Ok(Self {
            client,
            settings,
            templates,
        })
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(templates::NEWS_DETAIL_PATH, get(handlers::news_detail))
        .route(templates::FETCH_LATEST_PATH, get(handlers::fetch_latest))
        .with_state(Arc::new(state))
}
