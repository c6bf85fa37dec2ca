//! Runtime settings.
//!
//! Settings are resolved in three layers: built-in defaults, then an
//! optional YAML file, then command-line flags and environment variables.
//!
//! ```yaml
//! host: 0.0.0.0
//! port: 8000
//! request_timeout_secs: 10
//! headline_limit: 10
//! sources:
//!   hamropatro: https://www.hamropatro.com/news
//! ```

use crate::cli::Cli;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument};
use url::Url;

const DEFAULT_USER_AGENT: &str = concat!("newsbs/", env!("CARGO_PKG_VERSION"));

/// Homepage URLs of the scraped news sites.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Sources {
    pub onlinekhabar: String,
    pub ronbpost: String,
    pub hamropatro: String,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            onlinekhabar: "https://www.onlinekhabar.com/".to_string(),
            ronbpost: "https://www.ronbpost.com/".to_string(),
            hamropatro: "https://www.hamropatro.com/news".to_string(),
        }
    }
}

/// Fully resolved settings for the server and scrapers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Per-request timeout when talking to a news site.
    pub request_timeout_secs: u64,
    /// Number of headline cards inspected on each homepage.
    pub headline_limit: usize,
    /// How often the index page polls for new headlines.
    pub refresh_interval_ms: u64,
    pub user_agent: String,
    pub sources: Sources,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            request_timeout_secs: 10,
            headline_limit: 10,
            refresh_interval_ms: 80_000,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            sources: Sources::default(),
        }
    }
}

impl Settings {
    /// Resolve settings from the CLI, reading the YAML file it points to.
    #[instrument(level = "info", skip_all)]
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.apply_cli(cli);
        settings.validate()?;
        info!(
            host = %settings.host,
            port = settings.port,
            headline_limit = settings.headline_limit,
            "Settings resolved"
        );
        Ok(settings)
    }

    /// Read settings from a YAML file; missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        info!(path = %path.display(), "Loaded config file");
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes to `null`, which should mean "all defaults".
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(timeout) = cli.timeout_secs {
            self.request_timeout_secs = timeout;
        }
        if let Some(limit) = cli.headline_limit {
            self.headline_limit = limit;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.headline_limit == 0 {
            return Err(ConfigError::Invalid(
                "headline_limit must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        for (name, url) in [
            ("onlinekhabar", &self.sources.onlinekhabar),
            ("ronbpost", &self.sources.ronbpost),
            ("hamropatro", &self.sources.hamropatro),
        ] {
            Url::parse(url)
                .map_err(|e| ConfigError::Invalid(format!("sources.{name}: {e}")))?;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
