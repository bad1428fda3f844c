use std::sync::OnceLock;

use regex::Regex;

/// Bare URL inline type: an `http(s)://` run outside brackets.
pub struct BareUrl;

impl BareUrl {
    /// Characters that, directly before a URL, mean it already sits in an
    /// attribute value written by an earlier pass.
    pub const ATTRIBUTE_LEAD: [char; 3] = ['=', '"', '\''];

    pub fn pattern() -> &'static Regex {
        static URL_REGEX: OnceLock<Regex> = OnceLock::new();
        URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s<]+").expect("Invalid URL regex"))
    }

    /// Whether the URL starting at byte `start` of `text` is an attribute
    /// value rather than running text.
    pub fn in_attribute(text: &str, start: usize) -> bool {
        text[..start]
            .chars()
            .next_back()
            .is_some_and(|c| Self::ATTRIBUTE_LEAD.contains(&c))
    }
}
