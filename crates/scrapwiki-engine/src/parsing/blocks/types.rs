use serde::Serialize;

use crate::parsing::{blocks::kinds::Indent, html};

/// The kind of a rendered block, without its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Empty,
    Heading,
    Image,
    Quote,
    List,
    Text,
    Figure,
}

/// One rendered unit of document structure.
///
/// Bodies and captions hold inline-rendered markup; `html()` wraps them in
/// the block's element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Block {
    /// A blank line.
    Empty,
    /// A heading. `level` is the HTML heading level (`2..=6`).
    Heading { level: u8, body: String },
    /// A line that is nothing but an image URL. `src` is already rewritten.
    Image { src: String },
    /// One or more consecutive quote lines.
    Quote { body: String },
    /// A tab-indented line.
    List {
        /// Number of leading tabs (at least 1).
        depth: usize,
        body: String,
    },
    /// A plain paragraph.
    Text { body: String },
    /// An image block captioned by the text line that followed it.
    Figure { src: String, caption: String },
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Empty => BlockKind::Empty,
            Block::Heading { .. } => BlockKind::Heading,
            Block::Image { .. } => BlockKind::Image,
            Block::Quote { .. } => BlockKind::Quote,
            Block::List { .. } => BlockKind::List,
            Block::Text { .. } => BlockKind::Text,
            Block::Figure { .. } => BlockKind::Figure,
        }
    }

    /// The inline-rendered content, for kinds that have one.
    pub fn body(&self) -> Option<&str> {
        match self {
            Block::Heading { body, .. }
            | Block::Quote { body }
            | Block::List { body, .. }
            | Block::Text { body } => Some(body.as_str()),
            Block::Figure { caption, .. } => Some(caption.as_str()),
            Block::Empty | Block::Image { .. } => None,
        }
    }

    pub fn depth(&self) -> Option<usize> {
        match self {
            Block::List { depth, .. } => Some(*depth),
            _ => None,
        }
    }

    pub fn html(&self) -> String {
        match self {
            Block::Empty => html::BREAK.to_string(),
            Block::Heading { level, body } => format!("<h{level}>{body}</h{level}>"),
            Block::Image { src } => html::image(src, "image", None),
            Block::Quote { body } => format!("<blockquote>{body}</blockquote>"),
            Block::List { depth, body } => format!(
                r#"<li style="margin-left: {}px">{body}</li>"#,
                depth * Indent::UNIT
            ),
            Block::Text { body } => format!("<p>{body}</p>"),
            Block::Figure { src, caption } => format!(
                "<figure>{}<figcaption>{caption}</figcaption></figure>",
                html::image(src, "image", None)
            ),
        }
    }
}
