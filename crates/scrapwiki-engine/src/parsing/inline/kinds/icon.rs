use std::sync::OnceLock;

use regex::Regex;

/// Icon reference inside brackets: `[name.icon]` or `[name.icon*3]`.
///
/// `name` is a page title whose representative image is the icon.
pub struct Icon;

impl Icon {
    /// Upper bound on `*N` repetition.
    pub const MAX_REPEAT: usize = 100;

    /// Parses bracket content as an icon reference, returning the page name
    /// and how many times the icon is repeated.
    pub fn parse(content: &str) -> Option<(&str, usize)> {
        static ICON_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = ICON_REGEX
            .get_or_init(|| Regex::new(r"^(.+)\.icon(?:\*(\d+))?$").expect("Invalid icon regex"));

        let caps = re.captures(content)?;
        let name = caps.get(1)?.as_str();
        let count = match caps.get(2) {
            // digits only, so the only parse failure is overflow
            Some(n) => n.as_str().parse().unwrap_or(usize::MAX),
            None => 1,
        };
        Some((name, count.min(Self::MAX_REPEAT)))
    }
}
