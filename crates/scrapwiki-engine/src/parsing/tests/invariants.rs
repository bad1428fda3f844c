use crate::parsing::blocks::{Block, kinds::Heading};

/// Validates assembler output invariants.
///
/// Asserts that:
/// - There are never more blocks than input lines
/// - No two quotes are adjacent (runs must have been folded)
/// - No image is directly followed by text (it must have become a figure)
/// - Heading levels are within `h2..=h6` and list depths are at least 1
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(line_count: usize, blocks: &[Block]) {
    assert!(
        blocks.len() <= line_count,
        "more blocks than lines: {} blocks from {} lines",
        blocks.len(),
        line_count
    );

    for pair in blocks.windows(2) {
        assert!(
            !matches!(pair, [Block::Quote { .. }, Block::Quote { .. }]),
            "adjacent quotes were not folded: {pair:?}"
        );
        assert!(
            !matches!(pair, [Block::Image { .. }, Block::Text { .. }]),
            "image followed by text was not folded: {pair:?}"
        );
    }

    for b in blocks {
        match b {
            Block::Heading { level, .. } => assert!(
                (2..=Heading::MAX_LEVEL).contains(level),
                "heading level out of range: {b:?}"
            ),
            Block::List { depth, .. } => assert!(*depth >= 1, "list without depth: {b:?}"),
            _ => {}
        }
    }
}
