use crate::{parsing::inline::kinds::Quoted, patterns::lazy_regex};

use super::BlockQuote;

/// A `key: value` line such as `Stack: Flask 2.3 + SQLAlchemy`.
pub struct KeyValue;

impl KeyValue {
    pub const SEPARATOR: char = ':';

    lazy_regex! {
        fn pattern = r"^([^:]+):\s*(.*)$";
    }

    /// Returns `(key, value)`, both trimmed, or `None` for quote lines and
    /// lines without a non-empty key.
    pub fn parse(trimmed: &str) -> Option<(&str, &str)> {
        if BlockQuote::starts(trimmed) {
            return None;
        }
        let caps = Self::pattern().captures(trimmed)?;
        Some((caps.get(1)?.as_str().trim(), caps.get(2)?.as_str().trim()))
    }

    /// Label text for the key: double quotes removed, separator appended.
    pub fn label(key: &str) -> String {
        format!("{}{} ", Quoted::unquote(key), Self::SEPARATOR)
    }
}
