//! # Block Kinds
//!
//! Line-level block types that own their syntax delimiters. The classifier
//! asks these types whether a line matches; it never hardcodes `>`, `*`,
//! tabs or image extensions itself.

pub mod block_image;
pub mod block_quote;
pub mod heading;
pub mod indent;

pub use block_image::BlockImage;
pub use block_quote::BlockQuote;
pub use heading::Heading;
pub use indent::Indent;
