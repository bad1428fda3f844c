use crate::parsing::html;

use super::types::Block;

/// Folds classified line blocks into document blocks.
///
/// Two adjacency rules apply, one fold per pushed block:
/// - a quote directly after a quote joins it, bodies separated by a line
///   break, so runs of any length collapse into one quote;
/// - a text block directly after an image becomes that image's caption,
///   producing a figure. A figure is no longer an image, so a second text
///   line stays a paragraph.
///
/// Everything else is emitted as classified; list depths are never nested
/// and consecutive paragraphs stay separate.
pub struct BlockBuilder {
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self { out: vec![] }
    }

    pub fn push(&mut self, block: Block) {
        let block = match (self.out.last_mut(), block) {
            (Some(Block::Quote { body }), Block::Quote { body: next }) => {
                body.push_str(html::BREAK);
                body.push_str(&next);
                return;
            }
            (Some(last @ Block::Image { .. }), Block::Text { body: caption }) => {
                if let Block::Image { src } = last {
                    let src = std::mem::take(src);
                    *last = Block::Figure { src, caption };
                }
                return;
            }
            (_, block) => block,
        };
        self.out.push(block);
    }

    pub fn finish(self) -> Vec<Block> {
        self.out
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
