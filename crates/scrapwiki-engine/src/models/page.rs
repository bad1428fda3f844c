use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::line::Line;

/// A page as delivered by the content store.
///
/// Page listings omit `lines`; full page fetches include them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl Page {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: None,
            lines: vec![],
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_lines<I, L>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Line>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        self
    }
}

/// Title lookup tables covering the whole corpus.
///
/// Both maps are read-only snapshots; missing entries are expected and
/// degrade to fallback renderings rather than errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageIndex {
    /// Page title to page identifier.
    pub title_to_id: HashMap<String, String>,
    /// Page title to the page's representative image URL.
    pub title_to_image: HashMap<String, String>,
}

impl PageIndex {
    pub fn new(
        title_to_id: HashMap<String, String>,
        title_to_image: HashMap<String, String>,
    ) -> Self {
        Self {
            title_to_id,
            title_to_image,
        }
    }

    /// Builds both tables from a page listing. Pages without an image are
    /// simply absent from `title_to_image`.
    pub fn from_pages<'p>(pages: impl IntoIterator<Item = &'p Page>) -> Self {
        let mut index = Self::default();
        for page in pages {
            index
                .title_to_id
                .insert(page.title.clone(), page.id.clone());
            if let Some(image) = &page.image {
                index
                    .title_to_image
                    .insert(page.title.clone(), image.clone());
            }
        }
        index
    }

    pub fn page_id(&self, title: &str) -> Option<&str> {
        self.title_to_id.get(title).map(String::as_str)
    }

    pub fn page_image(&self, title: &str) -> Option<&str> {
        self.title_to_image.get(title).map(String::as_str)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.title_to_id.contains_key(title)
    }
}
