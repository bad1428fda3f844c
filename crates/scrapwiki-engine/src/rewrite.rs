//! Image URL rewrite hooks.
//!
//! The renderer passes every image URL it emits (block images, bracketed
//! inline images, resolved icons) through an [`ImageUrlRewrite`] before it
//! lands in an `src` attribute. The default is [`Identity`].

use std::borrow::Cow;

use regex::Regex;

use crate::error::EngineError;

/// Converts an image URL into the URL that should be served.
pub trait ImageUrlRewrite: Send + Sync {
    fn rewrite<'u>(&self, url: &'u str) -> Cow<'u, str>;
}

/// Leaves URLs untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl ImageUrlRewrite for Identity {
    fn rewrite<'u>(&self, url: &'u str) -> Cow<'u, str> {
        Cow::Borrowed(url)
    }
}

/// Maps content-store file URLs onto a CDN that serves `.webp` copies.
///
/// The first capture group of the source pattern is the file key; a matching
/// URL becomes `{base}/{key}.webp`. Non-matching URLs pass through.
#[derive(Debug, Clone)]
pub struct CdnRewriter {
    source: Regex,
    base: String,
}

impl CdnRewriter {
    pub const DEFAULT_SOURCE_PATTERN: &'static str =
        r"(?i)https://scrapbox\.io/files/([a-f0-9]+)\.[a-z]+";

    pub fn new(base: impl Into<String>) -> Result<Self, EngineError> {
        Self::with_pattern(base, Self::DEFAULT_SOURCE_PATTERN)
    }

    pub fn with_pattern(base: impl Into<String>, pattern: &str) -> Result<Self, EngineError> {
        let source = Regex::new(pattern).map_err(|source| EngineError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        // captures_len counts the implicit whole-match group
        if source.captures_len() < 2 {
            return Err(EngineError::MissingCaptureGroup(pattern.to_string()));
        }
        let base = base.into().trim_end_matches('/').to_string();
        Ok(Self { source, base })
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl ImageUrlRewrite for CdnRewriter {
    fn rewrite<'u>(&self, url: &'u str) -> Cow<'u, str> {
        match self.source.captures(url).and_then(|caps| caps.get(1)) {
            Some(key) => Cow::Owned(format!("{}/{}.webp", self.base, key.as_str())),
            None => Cow::Borrowed(url),
        }
    }
}

/// Adapts a closure into a rewrite hook.
pub struct FnRewrite<F>(pub F);

impl<F> ImageUrlRewrite for FnRewrite<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn rewrite<'u>(&self, url: &'u str) -> Cow<'u, str> {
        Cow::Owned((self.0)(url))
    }
}
