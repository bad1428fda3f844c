//! # Inline Rendering
//!
//! Turns the body of a quote, list or text line into markup.
//!
//! ## Passes
//!
//! Three sequential passes, each returning a new string:
//!
//! 1. **Brackets**: `[content]` resolves, in order, to an inline image, an
//!    external link, an icon, a known tag, a page link, or a fallback tag
//! 2. **Bare URLs**: remaining `http(s)://` runs become external links
//! 3. **Hash-tags**: `#tag` at the start or after whitespace becomes a tag link
//!
//! The order matters: `#` inside bracket output is escaped as `&#35;`, and
//! passes 2 and 3 skip markup ranges produced before them.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline types with owned syntax
//! - **`markup`**: [`markup::MarkedText`], pass output with its emitted markup ranges
//! - **`render`**: `render_inline()` and the individual passes

pub mod kinds;
pub mod markup;
pub mod render;

pub use render::render_inline;
