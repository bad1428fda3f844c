//! Integration tests for the parsing module.
//!
//! Fixtures (`.txt` input, `.html` expected output) are co-located in
//! `fixtures/` and rendered with a shared corpus.

mod invariants;

use std::collections::HashMap;

use pretty_assertions::assert_eq;

use crate::{
    models::page::PageIndex,
    parsing::{LineRenderer, assemble, blocks::Block, render_page},
    rewrite::CdnRewriter,
    tags::KnownTags,
};

fn corpus() -> PageIndex {
    PageIndex::new(
        HashMap::from([
            ("Oxalis palmifrons".to_string(), "p1".to_string()),
            ("tomo".to_string(), "p2".to_string()),
        ]),
        HashMap::from([(
            "tomo".to_string(),
            "https://scrapbox.io/files/aa11.png".to_string(),
        )]),
    )
}

// Fixture-based tests

#[test]
fn fixture_plant_page() {
    let tags = assert_fixture("plant_page");
    assert_eq!(tags, vec!["seedling"]);
}

#[test]
fn fixture_folding_edges() {
    let tags = assert_fixture("folding_edges");
    assert!(tags.is_empty());
}

/// Renders a fixture page, checks invariants and compares the HTML.
/// Returns the extracted trailing tags.
fn assert_fixture(name: &str) -> Vec<String> {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let source = std::fs::read_to_string(format!("{fixtures_dir}/{name}.txt")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();
    let lines: Vec<&str> = source.lines().collect();

    let index = corpus();
    let known: KnownTags = ["seedling"].into_iter().collect();
    let cdn = CdnRewriter::new("https://cdn.example/webp").unwrap();
    let renderer = LineRenderer::new(&index)
        .with_known_tags(&known)
        .with_rewriter(&cdn);

    let page = render_page(&lines, &renderer);
    invariants::check(lines.len(), &page.blocks);

    assert_eq!(page.html(), expected.trim_end());
    page.tags
}

// Invariant tests

/// Rendering the same document twice yields identical output.
#[test]
fn rendering_is_deterministic() {
    let lines = ["[Oxalis palmifrons] #a", "> q", "> r", "https://x/y.png", "cap"];
    let index = corpus();
    let renderer = LineRenderer::new(&index);

    assert_eq!(assemble(&lines, &renderer), assemble(&lines, &renderer));
}

/// Lines without any recognized syntax come back as paragraphs of
/// themselves.
#[test]
fn plain_lines_round_trip_as_text() {
    let lines = ["alpha", "beta gamma", "x = y + 1"];
    let index = corpus();
    let blocks = assemble(&lines, &LineRenderer::new(&index));

    let bodies: Vec<_> = blocks
        .iter()
        .map(|b| match b {
            Block::Text { body } => body.as_str(),
            other => panic!("expected text, got {other:?}"),
        })
        .collect();
    assert_eq!(bodies, lines);
}

/// The renderer is shareable across threads.
#[test]
fn renderer_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LineRenderer<'static>>();
}
