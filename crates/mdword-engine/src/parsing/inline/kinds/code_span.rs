use crate::patterns::lazy_regex;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": their content is emitted verbatim and other
/// delimiters inside them are ignored.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    lazy_regex! {
        pub fn pattern = r"`([^`]+)`";
    }
}
