use std::sync::OnceLock;

use regex::Regex;

/// Hash-tag inline type: `#tag` at the start of the text or after
/// whitespace.
///
/// The anchoring keeps URL fragments (`/page#section`) and names such as
/// `C#` from being read as tags.
pub struct HashTag;

impl HashTag {
    pub const MARKER: char = '#';

    /// Group 1 is the anchor (empty or one whitespace character), group 2
    /// the tag. The tag stops at whitespace, `<` and `#`.
    pub fn pattern() -> &'static Regex {
        static HASHTAG_REGEX: OnceLock<Regex> = OnceLock::new();
        HASHTAG_REGEX
            .get_or_init(|| Regex::new(r"(^|\s)#([^\s<#]+)").expect("Invalid hashtag regex"))
    }
}
