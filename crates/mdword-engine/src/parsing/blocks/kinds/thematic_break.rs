use crate::patterns::lazy_regex;

/// A line of three or more `-`, `*` or `_`.
pub struct ThematicBreak;

impl ThematicBreak {
    lazy_regex! {
        fn pattern = r"^[-*_]{3,}$";
    }

    lazy_regex! {
        /// Whole thematic-break lines, tolerating surrounding blanks.
        pub fn line_pattern = r"(?m)^[ \t]*[-*_]{3,}[ \t]*$";
    }

    pub fn matches(trimmed: &str) -> bool {
        Self::pattern().is_match(trimmed)
    }
}
