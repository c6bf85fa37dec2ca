//! # newsbs
//!
//! A headline board for Nepali news. Every page load scrapes the homepages
//! of a few Nepali news sites and renders their top stories side by side.
//!
//! ## Features
//!
//! - Scrapes headlines from OnlineKhabar, RONB Post and Hamro Patro
//! - Opens OnlineKhabar stories in a reader view with the article body and
//!   the site's summary bullets
//! - Serves the same headlines as JSON so an open page can poll for new
//!   stories
//!
//! ## Usage
//!
//! ```sh
//! newsbs --host 0.0.0.0 --port 8000
//! ```
//!
//! ## Architecture
//!
//! Each request is handled independently:
//! 1. **Fetching**: GET the source page(s) with a shared HTTP client
//! 2. **Scraping**: Pull fields out of the HTML with CSS selectors
//! 3. **Rendering**: Fill a Handlebars template, or serialize to JSON

use clap::Parser;
use std::error::Error;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod error;
mod models;
mod scrapers;
mod utils;
mod web;

use cli::Cli;
use config::Settings;
use web::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "newsbs starting up");

    let args = Cli::parse();
    let settings = match Settings::load(&args) {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    let addr = settings.bind_addr();
    let state = AppState::new(settings)?;
    let app = create_app(state);

    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
