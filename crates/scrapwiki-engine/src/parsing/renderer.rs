use std::borrow::Cow;

use crate::{
    models::page::PageIndex,
    rewrite::{Identity, ImageUrlRewrite},
    tags::KnownTags,
};

use super::{blocks::Block, inline, options::RenderOptions};

static IDENTITY: Identity = Identity;

/// Everything a single line needs to be rendered: the corpus lookup tables,
/// the known-tags registry, the image rewrite hook and link targets.
///
/// Holds only shared references and plain values, so one renderer can be
/// used for any number of documents, from any number of threads.
#[derive(Clone)]
pub struct LineRenderer<'a> {
    index: &'a PageIndex,
    known_tags: Cow<'a, KnownTags>,
    rewriter: &'a dyn ImageUrlRewrite,
    options: RenderOptions,
}

impl<'a> LineRenderer<'a> {
    /// A renderer with no known tags, identity image URLs and default
    /// link targets.
    pub fn new(index: &'a PageIndex) -> Self {
        Self {
            index,
            known_tags: Cow::Owned(KnownTags::default()),
            rewriter: &IDENTITY,
            options: RenderOptions::default(),
        }
    }

    pub fn with_known_tags(mut self, known_tags: &'a KnownTags) -> Self {
        self.known_tags = Cow::Borrowed(known_tags);
        self
    }

    pub fn with_rewriter(mut self, rewriter: &'a dyn ImageUrlRewrite) -> Self {
        self.rewriter = rewriter;
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Classifies one line into exactly one block and renders its content.
    pub fn classify(&self, line: &str) -> Block {
        super::blocks::classify::classify(self, line)
    }

    /// Renders bracket content, bare URLs and hash-tags inside a line body.
    pub fn render_inline(&self, text: &str) -> String {
        inline::render_inline(self, text)
    }

    pub fn index(&self) -> &PageIndex {
        self.index
    }

    pub fn known_tags(&self) -> &KnownTags {
        &self.known_tags
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn rewrite_image<'u>(&self, url: &'u str) -> Cow<'u, str> {
        self.rewriter.rewrite(url)
    }
}

impl std::fmt::Debug for LineRenderer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineRenderer")
            .field("index", &self.index)
            .field("known_tags", &self.known_tags)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
