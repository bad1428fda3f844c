use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{blocks::kinds::block_image::has_image_extension, html, renderer::LineRenderer};

use super::icon::Icon;

/// Bracket inline type: `[content]`, no nesting.
pub struct Bracket;

impl Bracket {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';

    /// Prefix that marks bracket content as a URL.
    pub const URL_PREFIX: &'static str = "http";

    /// Matches one bracket span; group 1 is the content. An unterminated
    /// `[` never matches and stays literal text.
    pub fn pattern() -> &'static Regex {
        static BRACKET_REGEX: OnceLock<Regex> = OnceLock::new();
        BRACKET_REGEX.get_or_init(|| Regex::new(r"\[([^\]]+)\]").expect("Invalid bracket regex"))
    }
}

/// What a bracket span means, resolved against the renderer's tables.
///
/// Variants are listed in precedence order; [`BracketContent::resolve`]
/// returns the first that applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BracketContent<'t, 'r> {
    /// `[https://x/y.png]` inside running text.
    InlineImage { url: &'t str },
    /// `[https://example.com]`.
    ExternalLink { url: &'t str },
    /// `[name.icon*N]`; `image` is `None` when the page has no image.
    Icon {
        name: &'t str,
        image: Option<&'r str>,
        count: usize,
    },
    /// Content registered in the known-tags set.
    KnownTag { tag: &'t str },
    /// Content naming an existing page.
    PageLink { title: &'t str, id: &'r str },
    /// Anything else is treated as a tag.
    ///
    /// This conflates broken page links with informal tags; kept for
    /// compatibility with existing pages.
    FallbackTag { tag: &'t str },
}

impl<'t, 'r> BracketContent<'t, 'r> {
    pub fn resolve(content: &'t str, renderer: &'r LineRenderer<'_>) -> Self {
        if content.starts_with(Bracket::URL_PREFIX) {
            return if has_image_extension(content) {
                Self::InlineImage { url: content }
            } else {
                Self::ExternalLink { url: content }
            };
        }
        if let Some((name, count)) = Icon::parse(content) {
            return Self::Icon {
                name,
                image: renderer.index().page_image(name),
                count,
            };
        }
        if renderer.known_tags().contains(content) {
            return Self::KnownTag { tag: content };
        }
        if let Some(id) = renderer.index().page_id(content) {
            return Self::PageLink { title: content, id };
        }
        Self::FallbackTag { tag: content }
    }

    pub fn render(&self, renderer: &LineRenderer<'_>) -> String {
        match *self {
            Self::InlineImage { url } => {
                html::image(&renderer.rewrite_image(url), "", Some("inline-image"))
            }
            Self::ExternalLink { url } => html::external_link(url),
            Self::Icon {
                name,
                image: Some(image),
                count,
            } => {
                let icon = html::image(
                    &renderer.rewrite_image(image),
                    &html::escape_hash(name),
                    Some("icon"),
                );
                icon.repeat(count)
            }
            Self::Icon {
                name, image: None, ..
            } => {
                log::debug!("dropping icon {name:?}: page has no image");
                String::new()
            }
            Self::KnownTag { tag } => {
                html::tag_link(renderer.options(), tag, &html::escape_hash(tag))
            }
            Self::PageLink { title, id } => {
                html::page_link(renderer.options(), id, &html::escape_hash(title))
            }
            Self::FallbackTag { tag } => {
                log::debug!("bracket {tag:?} matches no page or known tag, rendering as tag");
                html::tag_link(renderer.options(), tag, &html::escape_hash(tag))
            }
        }
    }
}
