use std::ops::Range;

/// Text under inline rendering, plus the byte ranges holding markup that
/// an earlier pass emitted.
///
/// Later passes leave those ranges alone, so a URL shown as link text or
/// written into an attribute is never wrapped a second time. Anything the
/// author typed, including their own `<...>`, stays plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkedText {
    text: String,
    markup: Vec<Range<usize>>,
}

impl MarkedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            markup: vec![],
        }
    }

    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Appends generated markup; empty fragments record no range.
    pub fn push_markup(&mut self, markup: &str) {
        if markup.is_empty() {
            return;
        }
        let start = self.text.len();
        self.text.push_str(markup);
        self.markup.push(start..self.text.len());
    }

    /// Copies `range` of `source`, keeping the markup ranges inside it.
    ///
    /// `range` must not split a markup range of `source`.
    pub fn push_from(&mut self, source: &MarkedText, range: Range<usize>) {
        let base = self.text.len();
        self.text.push_str(&source.text[range.clone()]);
        self.markup.extend(
            source
                .markup
                .iter()
                .filter(|r| range.start <= r.start && r.end <= range.end)
                .map(|r| r.start - range.start + base..r.end - range.start + base),
        );
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn markup(&self) -> &[Range<usize>] {
        &self.markup
    }

    /// Whether `span` touches any generated markup.
    pub fn overlaps_markup(&self, span: &Range<usize>) -> bool {
        self.markup
            .iter()
            .any(|r| span.start < r.end && r.start < span.end)
    }
}
