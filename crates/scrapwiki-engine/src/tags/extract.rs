use std::collections::HashSet;

use crate::parsing::inline::kinds::{Bracket, HashTag};

use super::known::KnownTags;

/// The result of splitting a document into body and trailing tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingTags<'l, L> {
    /// Tags in first-seen order, without duplicates under the registry's
    /// matching rule.
    pub tags: Vec<String>,
    /// The document with the trailing tag block removed.
    pub content_lines: &'l [L],
}

/// Splits off the run of tag-only and blank lines at the end of `lines`.
///
/// Scans upward from the last line: blank lines are skipped, tag-only lines
/// move the cutoff up, and the first content line stops the scan. Blank
/// lines between the last content line and the first tag line stay with the
/// content. If the scan reaches the top without meeting content, the whole
/// document is tag block and `content_lines` is empty.
pub fn extract_trailing_tags<'l, L: AsRef<str>>(
    lines: &'l [L],
    known: &KnownTags,
) -> TrailingTags<'l, L> {
    let mut cutoff = lines.len();
    let mut met_content = false;

    for (i, line) in lines.iter().enumerate().rev() {
        let text = line.as_ref();
        if text.trim().is_empty() {
            continue;
        }
        if parse_tag_only_line(text, known).is_some() {
            cutoff = i;
        } else {
            met_content = true;
            break;
        }
    }
    if !met_content {
        cutoff = 0;
    }
    log::trace!("trailing tag block starts at line {cutoff} of {}", lines.len());

    let mut seen = HashSet::new();
    let mut tags = vec![];
    for line in &lines[cutoff..] {
        for tag in parse_tag_only_line(line.as_ref(), known).unwrap_or_default() {
            if seen.insert(known.matching().key(&tag).into_owned()) {
                tags.push(tag);
            }
        }
    }

    TrailingTags {
        tags,
        content_lines: &lines[..cutoff],
    }
}

/// Returns the tags on `line` if nothing else is on it.
///
/// Bracket spans whose content is a known tag and anchored `#tag` tokens
/// count as tags; any other non-whitespace text makes the line content.
/// Tags are returned in the order they appear on the line.
pub fn parse_tag_only_line(line: &str, known: &KnownTags) -> Option<Vec<String>> {
    let mut residual = line.to_string();
    let mut found: Vec<(usize, String)> = vec![];

    for caps in Bracket::pattern().captures_iter(line) {
        let (Some(whole), Some(content)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if known.contains(content.as_str()) {
            found.push((whole.start(), content.as_str().to_string()));
            blank_out(&mut residual, whole.range());
        }
    }

    // Scan a snapshot: blanking keeps byte offsets stable
    let scanned = residual.clone();
    for caps in HashTag::pattern().captures_iter(&scanned) {
        let (Some(anchor), Some(tag)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        found.push((anchor.end(), tag.as_str().to_string()));
        blank_out(&mut residual, anchor.end()..tag.end());
    }

    if !residual.trim().is_empty() {
        return None;
    }
    found.sort_by_key(|(pos, _)| *pos);
    Some(found.into_iter().map(|(_, tag)| tag).collect())
}

/// Overwrites a byte range with the same number of spaces.
fn blank_out(s: &mut String, range: std::ops::Range<usize>) {
    let width = range.len();
    s.replace_range(range, &" ".repeat(width));
}
