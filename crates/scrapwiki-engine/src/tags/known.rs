use std::{borrow::Cow, collections::HashSet};

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// How bracket content is compared against the known-tags registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagMatching {
    /// Content must equal a registered tag exactly.
    #[default]
    CaseSensitive,
    /// Content and registered tags are lower-cased before comparison.
    CaseInsensitive,
}

impl TagMatching {
    /// The key a tag is stored and looked up under.
    pub fn key<'t>(self, tag: &'t str) -> Cow<'t, str> {
        match self {
            TagMatching::CaseSensitive => Cow::Borrowed(tag),
            TagMatching::CaseInsensitive => Cow::Owned(tag.to_lowercase()),
        }
    }
}

/// The corpus-wide set of recognized tags.
///
/// Built offline (see [`super::index::TagIndex`]) and only consulted while
/// rendering. Lookups apply the registry's [`TagMatching`] mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownTags {
    matching: TagMatching,
    keys: HashSet<String>,
}

impl KnownTags {
    pub fn new(matching: TagMatching) -> Self {
        Self {
            matching,
            keys: HashSet::new(),
        }
    }

    pub fn with_tags<I, S>(matching: TagMatching, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut known = Self::new(matching);
        for tag in tags {
            known.insert(tag.as_ref());
        }
        known
    }

    /// Decodes either a JSON array of tags or a tag-index object (whose keys
    /// are the tags).
    pub fn from_json_str(matching: TagMatching, json: &str) -> Result<Self, EngineError> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Document {
            List(Vec<String>),
            Index(serde_json::Map<String, serde_json::Value>),
        }

        let known = match serde_json::from_str::<Document>(json)? {
            Document::List(tags) => Self::with_tags(matching, tags),
            Document::Index(index) => Self::with_tags(matching, index.keys()),
        };
        Ok(known)
    }

    pub fn insert(&mut self, tag: &str) -> bool {
        self.keys.insert(self.matching.key(tag).into_owned())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.keys.contains(self.matching.key(tag).as_ref())
    }

    pub fn matching(&self) -> TagMatching {
        self.matching
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KnownTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::with_tags(TagMatching::default(), iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_sensitive_lookup() {
        let known: KnownTags = ["Tillandsia"].into_iter().collect();
        assert!(known.contains("Tillandsia"));
        assert!(!known.contains("tillandsia"));
    }

    #[test]
    fn case_insensitive_lookup() {
        let known = KnownTags::with_tags(TagMatching::CaseInsensitive, ["Tillandsia"]);
        assert!(known.contains("tillandsia"));
        assert!(known.contains("TILLANDSIA"));
        assert_eq!(known.len(), 1);
    }

    #[test]
    fn insert_reports_duplicates_under_matching_rule() {
        let mut known = KnownTags::new(TagMatching::CaseInsensitive);
        assert!(known.insert("Oxalis"));
        assert!(!known.insert("oxalis"));
    }

    #[test]
    fn json_list() {
        let known = KnownTags::from_json_str(TagMatching::CaseSensitive, r#"["a", "b"]"#).unwrap();
        assert!(known.contains("a") && known.contains("b"));
    }

    #[test]
    fn json_tag_index_keys() {
        let known = KnownTags::from_json_str(
            TagMatching::CaseSensitive,
            r#"{"seedling": [{"id": "1", "title": "t"}]}"#,
        )
        .unwrap();
        assert!(known.contains("seedling"));
        assert_eq!(known.len(), 1);
    }

    #[test]
    fn json_garbage_is_an_error() {
        let err = KnownTags::from_json_str(TagMatching::CaseSensitive, "42").unwrap_err();
        assert!(matches!(err, EngineError::Json(_)));
    }

    #[test]
    fn matching_mode_serializes_kebab_case() {
        let mode: TagMatching = serde_json::from_str(r#""case-insensitive""#).unwrap();
        assert_eq!(mode, TagMatching::CaseInsensitive);
    }
}
