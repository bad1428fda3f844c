use std::{
    collections::{BTreeMap, HashSet},
    sync::OnceLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    error::EngineError,
    models::page::Page,
    parsing::inline::kinds::{Bracket, Icon},
};

use super::known::{KnownTags, TagMatching};

/// A page that carries a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    pub id: String,
    pub title: String,
}

/// Tag to tagged pages, over a whole corpus.
///
/// Tags are kept sorted; pages are listed in corpus order. Serializes as a
/// plain JSON object, the format the tag search page reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagIndex {
    entries: BTreeMap<String, Vec<PageRef>>,
}

impl TagIndex {
    pub fn build(pages: &[Page]) -> Self {
        let titles: HashSet<&str> = pages.iter().map(|p| p.title.as_str()).collect();
        let mut index = Self::default();

        for page in pages {
            for tag in collect_page_tags(&page.lines, |t| titles.contains(t)) {
                index.entries.entry(tag).or_default().push(PageRef {
                    id: page.id.clone(),
                    title: page.title.clone(),
                });
            }
        }

        log::debug!(
            "indexed {} tags across {} pages",
            index.entries.len(),
            pages.len()
        );
        index
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn pages_for(&self, tag: &str) -> &[PageRef] {
        self.entries.get(tag).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn known_tags(&self, matching: TagMatching) -> KnownTags {
        KnownTags::with_tags(matching, self.tags())
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Collects the tags a page uses anywhere in its body, in first-seen order.
///
/// A tag is an anchored `#token`, or bracket content that is not a URL, a
/// heading, a decoration, an icon or the title of an existing page.
pub fn collect_page_tags<L, F>(lines: &[L], is_page_title: F) -> Vec<String>
where
    L: AsRef<str>,
    F: Fn(&str) -> bool,
{
    static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    static NOT_A_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let token = TOKEN_REGEX
        .get_or_init(|| Regex::new(r"(^|\s)#([^\s<#\]\[]+)").expect("Invalid tag token regex"));
    // headings `* x` and decorations `/ x`, `- x`, `+ x`, `~ x`
    let not_a_tag = NOT_A_TAG_REGEX
        .get_or_init(|| Regex::new(r"^(\*+|[/\-+~])(\s|$)").expect("Invalid decoration regex"));

    let mut seen = HashSet::new();
    let mut tags = vec![];
    let mut add = |tag: &str| {
        if seen.insert(tag.to_string()) {
            tags.push(tag.to_string());
        }
    };

    for line in lines {
        let text = line.as_ref();
        for caps in token.captures_iter(text) {
            if let Some(tag) = caps.get(2) {
                add(tag.as_str());
            }
        }
        for caps in Bracket::pattern().captures_iter(text) {
            let Some(inner) = caps.get(1).map(|m| m.as_str()) else {
                continue;
            };
            if inner.starts_with(Bracket::URL_PREFIX)
                || not_a_tag.is_match(inner)
                || Icon::parse(inner).is_some()
                || is_page_title(inner)
            {
                continue;
            }
            add(inner);
        }
    }

    tags
}
