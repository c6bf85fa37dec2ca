//! Text extraction helpers shared by the scrapers, plus logging utilities.
//!
//! The sites mark up headlines with a lot of incidental whitespace and
//! nested inline elements. These helpers turn an element's text nodes into
//! a single display string in one of three ways:
//! - [`raw_text`]: concatenate every text node, trim the result once
//! - [`stripped_text`]: trim every text node, drop empty ones, concatenate
//! - [`joined_text`]: like [`stripped_text`] but separated by a space

use scraper::{ElementRef, Selector};

/// All text nodes concatenated, then trimmed.
pub fn raw_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed, non-empty text nodes concatenated without a separator.
pub fn stripped_text(element: ElementRef<'_>) -> String {
    text_pieces(element).collect()
}

/// Trimmed, non-empty text nodes joined with single spaces.
pub fn joined_text(element: ElementRef<'_>) -> String {
    text_pieces(element).collect::<Vec<_>>().join(" ")
}

fn text_pieces<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element.text().map(str::trim).filter(|s| !s.is_empty())
}

/// First descendant of `element` matching `selector`.
pub fn first<'a>(element: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    element.select(selector).next()
}

/// Stripped text of the first match, or `default` when nothing matches.
pub fn stripped_or(element: ElementRef<'_>, selector: &Selector, default: &str) -> String {
    first(element, selector)
        .map(stripped_text)
        .unwrap_or_else(|| default.to_string())
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut at `max` bytes (backing off to a character
/// boundary) with an ellipsis and byte count appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn root(html: &str) -> Html {
        Html::parse_fragment(html)
    }

    #[test]
    fn test_text_modes() {
        let html = root("<div>\n  <b> नेपाल </b>\n  <i>समाचार</i>  \n</div>");
        let div = html.root_element();

        assert_eq!(stripped_text(div), "नेपालसमाचार");
        assert_eq!(joined_text(div), "नेपाल समाचार");
        assert!(raw_text(div).starts_with("नेपाल"));
        assert!(raw_text(div).ends_with("समाचार"));
    }

    #[test]
    fn test_stripped_or_default() {
        let html = root("<div><span class='t'> 5 min </span></div>");
        let present = Selector::parse(".t").unwrap();
        let missing = Selector::parse(".nope").unwrap();

        assert_eq!(stripped_or(html.root_element(), &present, "N/A"), "5 min");
        assert_eq!(stripped_or(html.root_element(), &missing, "N/A"), "N/A");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        // Each Devanagari letter is three bytes; 4 falls inside the second one.
        let result = truncate_for_log("नेपाल", 4);
        assert!(result.starts_with("न"));
        assert!(result.contains("bytes)"));
    }
}
