use crate::patterns::lazy_regex;

pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    /// Deepest level a document heading can have.
    pub const MAX_LEVEL: u8 = 9;

    lazy_regex! {
        fn pattern = r"^(#+)\s+(.*)$";
    }

    lazy_regex! {
        /// Every run of leading hashes on a line, so `# # x` loses both.
        pub fn prefix_pattern = r"(?m)^(?:#+[ \t]*)+";
    }

    /// Splits `# Title` into `(level, "Title")`, clamping the level to
    /// [`Self::MAX_LEVEL`].
    pub fn parse(trimmed: &str) -> Option<(u8, &str)> {
        let caps = Self::pattern().captures(trimmed)?;
        let hashes = caps.get(1)?.as_str().len();
        let level = u8::try_from(hashes).unwrap_or(u8::MAX).min(Self::MAX_LEVEL);
        Some((level, caps.get(2)?.as_str().trim()))
    }

    /// Point size of a heading rendered inline inside a quote.
    pub fn inline_size(level: u8) -> u8 {
        13u8.saturating_sub(level).max(8)
    }
}
