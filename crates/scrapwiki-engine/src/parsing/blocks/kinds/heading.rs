use std::sync::OnceLock;

use regex::Regex;

/// Heading line type: `[* body]`, `[** body]`, ... (brackets optional).
pub struct Heading;

impl Heading {
    /// The level marker character.
    pub const MARKER: char = '*';

    /// Deepest HTML heading level emitted.
    pub const MAX_LEVEL: u8 = 6;

    /// Parses a whole line as a heading, returning `(html_level, body)`.
    ///
    /// One marker renders as `h2`, two as `h3`, and so on, clamped at
    /// [`Self::MAX_LEVEL`]. Only the leading run counts; a `*` in the body
    /// does not raise the level.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = HEADING_REGEX
            .get_or_init(|| Regex::new(r"^\[?(\*+) +(.+?)\]?$").expect("Invalid heading regex"));

        let caps = re.captures(line)?;
        let markers = caps.get(1)?.as_str().len();
        let body = caps.get(2)?.as_str();
        Some((Self::level_for(markers), body))
    }

    fn level_for(markers: usize) -> u8 {
        let max = usize::from(Self::MAX_LEVEL);
        // max <= 6, so the cast cannot truncate
        markers.saturating_add(1).min(max) as u8
    }
}
