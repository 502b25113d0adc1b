/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn starts(trimmed: &str) -> bool {
        trimmed.starts_with(Self::PREFIX)
    }

    /// Strips one `>` marker and the whitespace around the remainder.
    ///
    /// Further markers are left in place: `> > x` yields `> x`.
    pub fn strip_marker(line: &str) -> Option<&str> {
        line.trim().strip_prefix(Self::PREFIX).map(str::trim)
    }
}
