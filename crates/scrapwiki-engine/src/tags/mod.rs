//! # Tags
//!
//! - **`known`**: [`KnownTags`] registry and its [`TagMatching`] rule
//! - **`extract`**: Splits the trailing tag block off a document
//! - **`index`**: Corpus-wide [`TagIndex`], the source of the registry

pub mod extract;
pub mod index;
pub mod known;

pub use extract::{TrailingTags, extract_trailing_tags, parse_tag_only_line};
pub use index::{PageRef, TagIndex, collect_page_tags};
pub use known::{KnownTags, TagMatching};
