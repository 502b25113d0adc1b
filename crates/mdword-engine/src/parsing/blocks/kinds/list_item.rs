use crate::patterns::lazy_regex;

/// The marker that opened a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker<'a> {
    /// `-`, `*` or `+`
    Bullet,
    /// The number including its dot, e.g. `3.`
    Number(&'a str),
}

pub struct ListItem;

impl ListItem {
    /// Prefix used when a bullet item is rendered inline.
    pub const BULLET: &'static str = "• ";

    lazy_regex! {
        fn unordered_pattern = r"^\s*[-*+]\s+(.*)$";
    }

    lazy_regex! {
        fn ordered_pattern = r"^\s*(\d+\.)\s+(.*)$";
    }

    lazy_regex! {
        /// Line-anchored bullet prefixes, repeated ones included.
        pub fn bullet_prefix = r"(?m)^(?:[ \t]*[-*+][ \t]+)+";
    }

    lazy_regex! {
        /// Line-anchored number prefixes, repeated ones included.
        pub fn number_prefix = r"(?m)^(?:[ \t]*\d+\.[ \t]+)+";
    }

    lazy_regex! {
        /// Any mix of bullet and number prefixes, such as `- 1. x`.
        pub fn any_prefix = r"(?m)^(?:[ \t]*(?:[-*+]|\d+\.)[ \t]+)+";
    }

    /// Returns the marker and the item content.
    pub fn parse(line: &str) -> Option<(ListMarker<'_>, &str)> {
        if let Some(caps) = Self::unordered_pattern().captures(line) {
            return Some((ListMarker::Bullet, caps.get(1)?.as_str()));
        }
        let caps = Self::ordered_pattern().captures(line)?;
        Some((
            ListMarker::Number(caps.get(1)?.as_str()),
            caps.get(2)?.as_str(),
        ))
    }
}

impl ListMarker<'_> {
    pub fn is_ordered(&self) -> bool {
        matches!(self, ListMarker::Number(_))
    }

    /// The visible prefix when the item is rendered as inline text.
    pub fn inline_prefix(&self) -> String {
        match self {
            ListMarker::Bullet => ListItem::BULLET.to_string(),
            ListMarker::Number(n) => format!("{n} "),
        }
    }
}
