pub mod error;
pub mod models;
pub mod parsing;
pub mod rewrite;
pub mod tags;

// Re-export key types for easier usage
pub use error::EngineError;
pub use models::{line::*, page::*};
pub use parsing::{
    LineRenderer, RenderOptions, RenderedPage, assemble,
    blocks::{Block, BlockKind},
    render_page,
};
pub use rewrite::{CdnRewriter, FnRewrite, Identity, ImageUrlRewrite};
pub use tags::{
    KnownTags, PageRef, TagIndex, TagMatching, TrailingTags, collect_page_tags,
    extract_trailing_tags, parse_tag_only_line,
};
