use crate::parsing::renderer::LineRenderer;

use super::{
    kinds::{BlockImage, BlockQuote, Heading, Indent},
    types::Block,
};

/// A classification rule: returns a block if the line is of its kind.
type Rule = fn(&LineRenderer<'_>, &str) -> Option<Block>;

/// Classification rules in precedence order. The first rule that matches
/// decides the block; lines no rule claims become [`Block::Text`].
///
/// The order is observable: a tab-indented `> quote` is a quote, and
/// `[* https://x/y.png]` is a heading, not an image.
const RULES: [Rule; 5] = [empty, heading, block_image, quote, list];

/// Classifies one line into exactly one block.
pub fn classify(renderer: &LineRenderer<'_>, line: &str) -> Block {
    RULES
        .iter()
        .find_map(|rule| rule(renderer, line))
        .unwrap_or_else(|| Block::Text {
            body: renderer.render_inline(line),
        })
}

fn empty(_: &LineRenderer<'_>, line: &str) -> Option<Block> {
    line.trim().is_empty().then_some(Block::Empty)
}

fn heading(_: &LineRenderer<'_>, line: &str) -> Option<Block> {
    let (level, body) = Heading::parse(line)?;
    Some(Block::Heading {
        level,
        body: body.to_string(),
    })
}

fn block_image(renderer: &LineRenderer<'_>, line: &str) -> Option<Block> {
    let url = BlockImage::parse(line)?;
    Some(Block::Image {
        src: renderer.rewrite_image(url).into_owned(),
    })
}

fn quote(renderer: &LineRenderer<'_>, line: &str) -> Option<Block> {
    let body = BlockQuote::strip_prefix(line)?;
    Some(Block::Quote {
        body: renderer.render_inline(body),
    })
}

fn list(renderer: &LineRenderer<'_>, line: &str) -> Option<Block> {
    let (depth, rest) = Indent::strip(line)?;
    Some(Block::List {
        depth,
        body: renderer.render_inline(rest),
    })
}
