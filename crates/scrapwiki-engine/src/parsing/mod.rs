pub mod blocks;
pub mod html;
pub mod inline;
pub mod options;
pub mod renderer;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::tags::extract_trailing_tags;

use blocks::{Block, BlockBuilder};
pub use options::RenderOptions;
pub use renderer::LineRenderer;

/// Classifies every line in order and folds adjacent blocks.
pub fn assemble<L: AsRef<str>>(lines: &[L], renderer: &LineRenderer<'_>) -> Vec<Block> {
    let mut builder = BlockBuilder::new();

    for line in lines {
        builder.push(renderer.classify(line.as_ref()));
    }

    builder.finish()
}

/// A page split into its trailing tags and its rendered body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    pub tags: Vec<String>,
    pub blocks: Vec<Block>,
}

impl RenderedPage {
    pub fn html(&self) -> String {
        self.blocks
            .iter()
            .map(Block::html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Removes the trailing tag block, then renders the remaining lines.
///
/// The trailing block is looked up against the renderer's known tags.
pub fn render_page<L: AsRef<str>>(lines: &[L], renderer: &LineRenderer<'_>) -> RenderedPage {
    let extracted = extract_trailing_tags(lines, renderer.known_tags());
    RenderedPage {
        blocks: assemble(extracted.content_lines, renderer),
        tags: extracted.tags,
    }
}
