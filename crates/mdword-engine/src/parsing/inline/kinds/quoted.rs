use crate::patterns::lazy_regex;

/// Double-quoted text, rendered in a distinguishing colour.
pub struct Quoted;

impl Quoted {
    pub const QUOTE: char = '"';

    lazy_regex! {
        pub fn pattern = r#""([^"]*)""#;
    }

    /// Removes the quote characters around every quoted section.
    pub fn unquote(s: &str) -> String {
        Self::pattern().replace_all(s, "${1}").into_owned()
    }
}
