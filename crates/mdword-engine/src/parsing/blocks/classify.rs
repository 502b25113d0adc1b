use super::kinds::{
    BlockQuote, CodeFence, Heading, KeyValue, ListItem, ListMarker, Table, ThematicBreak,
};

/// What a single top-level line looks like, judged without context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    FenceOpen { language: Option<&'a str> },
    ThematicBreak,
    Heading { level: u8, text: &'a str },
    ListItem { marker: ListMarker<'a>, content: &'a str },
    KeyValue { key: &'a str, value: &'a str },
    BlockQuote,
    TableRow,
    Text(&'a str),
}

/// Classifies individual lines for the block parser.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line, first match wins:
    /// blank, fence, thematic break, heading, bullet item, numbered item,
    /// `key: value`, quote, table row, text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Blank;
        }
        if let Some(language) = CodeFence::open(trimmed) {
            return LineClass::FenceOpen { language };
        }
        if ThematicBreak::matches(trimmed) {
            return LineClass::ThematicBreak;
        }
        if let Some((level, text)) = Heading::parse(trimmed) {
            return LineClass::Heading { level, text };
        }
        if let Some((marker, content)) = ListItem::parse(trimmed) {
            return LineClass::ListItem { marker, content };
        }
        if let Some((key, value)) = KeyValue::parse(trimmed) {
            return LineClass::KeyValue { key, value };
        }
        if BlockQuote::starts(trimmed) {
            return LineClass::BlockQuote;
        }
        if Table::is_row(trimmed) {
            return LineClass::TableRow;
        }
        LineClass::Text(trimmed)
    }
}
