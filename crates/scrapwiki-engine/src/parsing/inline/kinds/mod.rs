//! # Inline Kinds
//!
//! Inline types that own their syntax per construct. The render passes ask
//! these types for their patterns; they never hardcode `[`, `#` or URL
//! shapes themselves.
//!
//! ## Types
//!
//! - **`Bracket`** / **`BracketContent`**: `[content]` and what it resolves to
//! - **`Icon`**: `name.icon` / `name.icon*N` bracket content
//! - **`BareUrl`**: `http(s)://` runs outside attributes
//! - **`HashTag`**: `#tag` anchored at start of text or after whitespace

pub mod bare_url;
pub mod bracket;
pub mod hashtag;
pub mod icon;

pub use bare_url::BareUrl;
pub use bracket::{Bracket, BracketContent};
pub use hashtag::HashTag;
pub use icon::Icon;
