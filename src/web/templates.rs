//! Handlebars templates and the contexts they render.
//!
//! Both templates are compiled into the binary and registered once at
//! startup. Handlebars HTML-escapes every `{{value}}`, so scraped text is
//! safe to interpolate as-is.

use crate::models::{FrontPage, Headline};
use chrono::Local;
use handlebars::{Handlebars, TemplateError};
use serde::Serialize;

pub const INDEX: &str = "index";
pub const NEWS_DETAIL: &str = "news_detail";

pub const FETCH_LATEST_PATH: &str = "/fetch-latest/";
pub const NEWS_DETAIL_PATH: &str = "/news-detail/";

/// Build the template registry.
///
/// # Returns
///
/// A registry holding the `index` and `news_detail` templates, or the
/// parse error of the first template that fails to compile.
pub fn registry() -> Result<Handlebars<'static>, TemplateError> {
    let mut handlebars = Handlebars::new();
    handlebars.register_template_string(INDEX, include_str!("../../templates/index.hbs"))?;
    handlebars.register_template_string(
        NEWS_DETAIL,
        include_str!("../../templates/news_detail.hbs"),
    )?;
    Ok(handlebars)
}

/// Link to the in-app detail view for an article.
///
/// # Arguments
///
/// * `link` - Absolute URL of the article on the publisher's site
///
/// # Returns
///
/// `/news-detail/?url=` followed by the percent-encoded `link`.
pub fn detail_href(link: &str) -> String {
    format!("{NEWS_DETAIL_PATH}?url={}", urlencoding::encode(link))
}

/// Context for the `index` template.
#[derive(Debug, Serialize)]
pub struct IndexContext<'a> {
    pub sections: Vec<SectionContext<'a>>,
    pub fetched_at: String,
    pub fetch_url: &'static str,
    pub detail_url: &'static str,
    pub refresh_interval_ms: u64,
}

/// One tab of the index page.
#[derive(Debug, Serialize)]
pub struct SectionContext<'a> {
    pub id: &'static str,
    pub name: &'static str,
    /// Whether headlines open in the detail view instead of the publisher's site.
    pub detail_links: bool,
    pub headlines: Vec<HeadlineView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct HeadlineView<'a> {
    #[serde(flatten)]
    pub headline: &'a Headline,
    pub href: String,
    pub external: bool,
    /// Rendered as `data-supports-read-state`; the page script tracks
    /// read/unread only for these items.
    pub read_state: bool,
}

impl<'a> SectionContext<'a> {
    fn new(
        id: &'static str,
        name: &'static str,
        detail_links: bool,
        headlines: &'a [Headline],
    ) -> Self {
        let headlines = headlines
            .iter()
            .map(|headline| HeadlineView {
                headline,
                href: if detail_links {
                    detail_href(&headline.link)
                } else {
                    headline.link.clone()
                },
                external: !detail_links,
                read_state: detail_links,
            })
            .collect();
        Self {
            id,
            name,
            detail_links,
            headlines,
        }
    }
}

impl<'a> IndexContext<'a> {
    /// Lay out a front page as tabs: OnlineKhabar, RONB, Hamro Patro.
    ///
    /// Only OnlineKhabar articles match the detail scraper's markup, so only
    /// they link to the detail view, and only they get read/unread tracking.
    ///
    /// # Arguments
    ///
    /// * `front_page` - Headlines scraped from every source
    /// * `refresh_interval_ms` - Polling interval handed to the page script
    ///
    /// # Returns
    ///
    /// A context borrowing the headlines, stamped with the current local time.
    pub fn new(front_page: &'a FrontPage, refresh_interval_ms: u64) -> Self {
        Self {
            sections: vec![
                SectionContext::new("onlinekhabar", "अनलाइनखबर", true, &front_page.onlinekhabar),
                SectionContext::new("ronb", "RONB", false, &front_page.ronb),
                SectionContext::new("hp", "हाम्रो पात्रो", false, &front_page.hp),
            ],
            fetched_at: Local::now().format("%Y-%m-%d %H:%M").to_string(),
            fetch_url: FETCH_LATEST_PATH,
            detail_url: NEWS_DETAIL_PATH,
            refresh_interval_ms,
        }
    }
}
