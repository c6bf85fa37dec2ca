//! Data models for scraped headlines and articles.
//!
//! This module defines the records produced by the scrapers:
//! - [`Headline`]: One item from a news site's homepage
//! - [`FrontPage`]: The headline lists of every source, as served by the
//!   index page and the JSON endpoint
//! - [`ArticleDetail`]: A single article page broken into its parts
//!
//! Records live for the duration of one request and are never stored.

use serde::{Deserialize, Serialize};

/// A headline scraped from a news site's homepage.
///
/// Only `title` and `link` are guaranteed. The optional fields depend on
/// what the source publishes next to the headline; absent fields are left
/// out of the JSON representation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Headline {
    /// The headline text.
    pub title: String,
    /// Absolute URL of the article on the publisher's site.
    pub link: String,
    /// Publication time as displayed by the source (free-form text).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Short lead paragraph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Secondary headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Attribution line (original outlet and age of the story).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Headline {
    /// Create a headline with only the required fields set.
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            time: None,
            description: None,
            subtitle: None,
            source: None,
        }
    }
}

/// Headlines of every source, keyed the way the live-update script expects.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FrontPage {
    pub onlinekhabar: Vec<Headline>,
    pub ronb: Vec<Headline>,
    pub hp: Vec<Headline>,
}

impl FrontPage {
    /// Total number of headlines across all sources.
    pub fn len(&self) -> usize {
        self.onlinekhabar.len() + self.ronb.len() + self.hp.len()
    }

    /// `true` when no source produced a headline.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single article as shown by the detail view.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleDetail {
    pub title: String,
    pub time: String,
    pub author: String,
    /// Body paragraphs, short fragments (captions, bylines) excluded.
    pub paragraphs: Vec<String>,
    /// Bullet points of the summary box the publisher shows above the article.
    pub summary: Vec<String>,
    /// The URL the article was fetched from.
    pub source_url: String,
}
