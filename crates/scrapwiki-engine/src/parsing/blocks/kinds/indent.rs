/// Tab-indented list line type.
pub struct Indent;

impl Indent {
    /// The indent character. Only tabs count; spaces do not indent.
    pub const TAB: char = '\t';

    /// Layout units of left margin per indent level.
    pub const UNIT: usize = 20;

    /// Splits a line into its indent depth and the text after the tabs.
    ///
    /// Returns `None` for lines without a leading tab.
    pub fn strip(line: &str) -> Option<(usize, &str)> {
        let rest = line.trim_start_matches(Self::TAB);
        // TAB is one byte, so the byte difference is the tab count
        let depth = line.len() - rest.len();
        (depth > 0).then_some((depth, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_indent() {
        assert_eq!(Indent::strip("item"), None);
        assert_eq!(Indent::strip("  item"), None);
    }

    #[test]
    fn counts_tabs() {
        assert_eq!(Indent::strip("\titem"), Some((1, "item")));
        assert_eq!(Indent::strip("\t\t\titem"), Some((3, "item")));
    }

    #[test]
    fn keeps_spaces_after_tabs() {
        assert_eq!(Indent::strip("\t\t item"), Some((2, " item")));
    }
}
