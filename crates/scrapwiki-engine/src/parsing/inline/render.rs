use crate::parsing::{html, renderer::LineRenderer};

use super::{
    kinds::{BareUrl, Bracket, BracketContent, HashTag},
    markup::MarkedText,
};

/// Renders a line body into markup.
///
/// Three passes run in a fixed order, each over the previous pass's output:
/// bracket content, then bare URLs, then hash-tags. Later passes skip the
/// markup earlier ones emitted.
pub fn render_inline(renderer: &LineRenderer<'_>, text: &str) -> String {
    let with_brackets = render_brackets(renderer, text);
    let with_urls = render_bare_urls(&with_brackets);
    render_hashtags(renderer, &with_urls)
}

/// Pass 1: every `[content]` span.
pub fn render_brackets(renderer: &LineRenderer<'_>, text: &str) -> MarkedText {
    let mut out = MarkedText::new();
    let mut last = 0;

    for caps in Bracket::pattern().captures_iter(text) {
        let (Some(whole), Some(content)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_text(&text[last..whole.start()]);
        out.push_markup(&BracketContent::resolve(content.as_str(), renderer).render(renderer));
        last = whole.end();
    }

    out.push_text(&text[last..]);
    out
}

/// Pass 2: `http(s)://` runs in running text become external links.
pub fn render_bare_urls(input: &MarkedText) -> MarkedText {
    let text = input.as_str();
    let mut out = MarkedText::new();
    let mut last = 0;

    for m in BareUrl::pattern().find_iter(text) {
        if BareUrl::in_attribute(text, m.start()) || input.overlaps_markup(&m.range()) {
            continue;
        }
        out.push_from(input, last..m.start());
        out.push_markup(&html::external_link(m.as_str()));
        last = m.end();
    }

    out.push_from(input, last..input.len());
    out
}

/// Pass 3: anchored `#tag` tokens become tag links.
pub fn render_hashtags(renderer: &LineRenderer<'_>, input: &MarkedText) -> String {
    let text = input.as_str();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in HashTag::pattern().captures_iter(text) {
        let (Some(whole), Some(anchor), Some(tag)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        if input.overlaps_markup(&whole.range()) {
            continue;
        }
        out.push_str(&text[last..anchor.end()]);
        out.push_str(&html::tag_link(
            renderer.options(),
            tag.as_str(),
            &format!("{}{}", HashTag::MARKER, tag.as_str()),
        ));
        last = whole.end();
    }

    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::page::PageIndex,
        parsing::options::RenderOptions,
        rewrite::FnRewrite,
        tags::{KnownTags, TagMatching},
    };
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn index() -> PageIndex {
        PageIndex::new(
            HashMap::from([("Oxalis".to_string(), "p-ox".to_string())]),
            HashMap::from([("tomo".to_string(), "https://x/tomo.png".to_string())]),
        )
    }

    fn render(text: &str) -> String {
        let index = index();
        LineRenderer::new(&index).render_inline(text)
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(render("nothing to see"), "nothing to see");
    }

    #[test]
    fn page_link() {
        assert_eq!(
            render("grow [Oxalis] indoors"),
            r#"grow <a href="/page/p-ox" class="internal-link">Oxalis</a> indoors"#
        );
    }

    #[test]
    fn unresolved_bracket_falls_back_to_tag() {
        assert_eq!(
            render("[Lepanthes]"),
            r#"<a href="/tag/Lepanthes" class="tag">Lepanthes</a>"#
        );
    }

    #[test]
    fn bracket_hash_is_not_retagged() {
        assert_eq!(
            render("[C# notes]"),
            r#"<a href="/tag/C%23%20notes" class="tag">C&#35; notes</a>"#
        );
        assert_eq!(
            render("[my #1 pick]"),
            r#"<a href="/tag/my%20%231%20pick" class="tag">my &#35;1 pick</a>"#
        );
    }

    #[test]
    fn bracket_external_link_is_wrapped_once() {
        assert_eq!(
            render("[https://example.com/a]"),
            r#"<a href="https://example.com/a" target="_blank" rel="noopener noreferrer">https://example.com/a</a>"#
        );
    }

    #[test]
    fn bare_url() {
        assert_eq!(
            render("see https://example.com/a now"),
            r#"see <a href="https://example.com/a" target="_blank" rel="noopener noreferrer">https://example.com/a</a> now"#
        );
    }

    #[test]
    fn url_fragment_is_not_a_tag() {
        assert_eq!(
            render("https://x.y/p#frag"),
            r#"<a href="https://x.y/p#frag" target="_blank" rel="noopener noreferrer">https://x.y/p#frag</a>"#
        );
    }

    #[test]
    fn inline_image_in_brackets() {
        let index = index();
        let hook = FnRewrite(|url: &str| url.replace("https://x/", "https://cdn/"));
        let renderer = LineRenderer::new(&index).with_rewriter(&hook);
        assert_eq!(
            renderer.render_inline("look [https://x/y.png] here"),
            r#"look <img src="https://cdn/y.png" alt="" class="inline-image" /> here"#
        );
    }

    #[test]
    fn unbracketed_image_url_is_a_plain_link() {
        assert_eq!(
            render("see https://x/y.png now"),
            r#"see <a href="https://x/y.png" target="_blank" rel="noopener noreferrer">https://x/y.png</a> now"#
        );
    }

    #[test]
    fn icon_and_missing_icon() {
        assert_eq!(
            render("[tomo.icon] says hi [ghost.icon]"),
            r#"<img src="https://x/tomo.png" alt="tomo" class="icon" /> says hi "#
        );
    }

    #[test]
    fn hashtags_anchor_on_whitespace() {
        assert_eq!(
            render("#first a#not #second"),
            r##"<a href="/tag/first" class="tag">#first</a> a#not <a href="/tag/second" class="tag">#second</a>"##
        );
    }

    #[test]
    fn known_tag_case_insensitive_match_keeps_written_form() {
        let index = index();
        let known = KnownTags::with_tags(TagMatching::CaseInsensitive, ["oxalis"]);
        let renderer = LineRenderer::new(&index).with_known_tags(&known);
        assert_eq!(
            renderer.render_inline("[Oxalis]"),
            r#"<a href="/tag/Oxalis" class="tag">Oxalis</a>"#
        );
    }

    #[test]
    fn custom_link_targets() {
        let index = index();
        let renderer = LineRenderer::new(&index).with_options(RenderOptions {
            page_base: "/wiki/".into(),
            tag_base: "/search?tag=".into(),
        });
        assert_eq!(
            renderer.render_inline("[Oxalis] #pot"),
            r#"<a href="/wiki/p-ox" class="internal-link">Oxalis</a> <a href="/search?tag=pot" class="tag">#pot</a>"#
        );
    }

    #[test]
    fn url_inside_bracket_label_is_not_wrapped_again() {
        assert_eq!(
            render("[read https://x.y later]"),
            r#"<a href="/tag/read%20https%3A%2F%2Fx.y%20later" class="tag">read https://x.y later</a>"#
        );
    }

    #[test]
    fn typed_angle_brackets_are_plain_text() {
        assert_eq!(
            render("note <see #care and https://x.y/z >"),
            r#"note <see <a href="/tag/care" class="tag">#care</a> and <a href="https://x.y/z" target="_blank" rel="noopener noreferrer">https://x.y/z</a> >"#
        );

        let html = render("docs <https://example.com>");
        assert!(html.starts_with(r#"docs <<a href="https://example.com"#), "{html}");
        assert!(html.ends_with(">https://example.com></a>"), "{html}");
    }

    #[test]
    fn url_in_typed_attribute_is_left_alone() {
        assert_eq!(
            render(r#"<img src="https://x/y.png">"#),
            r#"<img src="https://x/y.png">"#
        );
    }

    #[test]
    fn unterminated_bracket_is_literal() {
        assert_eq!(render("[open #tag"), r#"[open <a href="/tag/tag" class="tag">#tag</a>"#);
    }
}
