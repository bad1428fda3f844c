use serde::{Deserialize, Serialize};

/// Link targets used in rendered markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Prefix of internal page links; the page identifier is appended.
    pub page_base: String,
    /// Prefix of tag-search links; the tag is appended.
    pub tag_base: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_base: "/page/".to_string(),
            tag_base: "/tag/".to_string(),
        }
    }
}
