/// Quote line type with owned delimiter constant.
///
/// All quote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The quote prefix character.
    pub const PREFIX: char = '>';

    /// Returns the quote body if the line is a quote line.
    ///
    /// Leading whitespace before `>` is ignored, and one space after it is
    /// stripped: `"  > text"` yields `"text"`, `">  text"` yields `" text"`.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
