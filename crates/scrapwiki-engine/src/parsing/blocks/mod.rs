//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified on its
//!    own into exactly one [`Block`], first matching rule wins:
//!    empty, heading, block image, quote, list, text.
//!
//! 2. **Block Folding** (`builder`): a [`BlockBuilder`] folds adjacent
//!    blocks. Quote runs merge into one quote; an image followed by a text
//!    line becomes a captioned figure.
//!
//! ## Modules
//!
//! - **`types`**: [`Block`] and [`BlockKind`]
//! - **`kinds`**: Line types with owned delimiters (Heading, BlockImage, BlockQuote, Indent)
//! - **`classify`**: Ordered classification rules
//! - **`builder`**: [`BlockBuilder`] adjacency folding
//!
//! ## Key Invariants
//!
//! - Classification never fails; unmatched lines are plain text
//! - A block is folded into at most one neighbour
//! - No nesting: list depth is a rendering attribute, not a tree

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use types::{Block, BlockKind};
