//! Markup fragments shared by block and inline rendering.
//!
//! Attribute values are always attribute-escaped and link targets
//! percent-encoded. Element text is emitted as given: body text is
//! passed through verbatim.

use std::borrow::Cow;

use html_escape::encode_double_quoted_attribute as attr;

use super::options::RenderOptions;

/// Line break used for empty lines and between folded quote lines.
pub const BREAK: &str = "<br>";

/// Entity substituted for `#` in text produced by bracket rendering, so the
/// hash-tag pass cannot re-interpret it.
pub const HASH_ENTITY: &str = "&#35;";

pub fn escape_hash(s: &str) -> Cow<'_, str> {
    if s.contains('#') {
        Cow::Owned(s.replace('#', HASH_ENTITY))
    } else {
        Cow::Borrowed(s)
    }
}

/// An external link opened in a new browsing context without leaking the
/// opener or referrer.
pub fn external_link(url: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        attr(url),
        url
    )
}

pub fn tag_link(options: &RenderOptions, tag: &str, label: &str) -> String {
    format!(
        r#"<a href="{}{}" class="tag">{}</a>"#,
        attr(&options.tag_base),
        urlencoding::encode(tag),
        label
    )
}

pub fn page_link(options: &RenderOptions, id: &str, label: &str) -> String {
    format!(
        r#"<a href="{}{}" class="internal-link">{}</a>"#,
        attr(&options.page_base),
        urlencoding::encode(id),
        label
    )
}

pub fn image(src: &str, alt: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!(
            r#"<img src="{}" alt="{}" class="{}" />"#,
            attr(src),
            attr(alt),
            class
        ),
        None => format!(r#"<img src="{}" alt="{}" />"#, attr(src), attr(alt)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn external_link_escapes_only_the_attribute() {
        assert_eq!(
            external_link("https://x/?a=1&b=2"),
            r#"<a href="https://x/?a=1&amp;b=2" target="_blank" rel="noopener noreferrer">https://x/?a=1&b=2</a>"#
        );
    }

    #[test]
    fn tag_link_percent_encodes_target() {
        assert_eq!(
            tag_link(&RenderOptions::default(), "C#", "C&#35;"),
            r#"<a href="/tag/C%23" class="tag">C&#35;</a>"#
        );
    }

    #[test]
    fn page_link_uses_identifier() {
        assert_eq!(
            page_link(&RenderOptions::default(), "abc 1", "Title"),
            r#"<a href="/page/abc%201" class="internal-link">Title</a>"#
        );
    }

    #[test]
    fn escape_hash_borrows_when_clean() {
        assert!(matches!(escape_hash("plain"), Cow::Borrowed(_)));
        assert_eq!(escape_hash("a#b#"), "a&#35;b&#35;");
    }
}
