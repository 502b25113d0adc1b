use crate::parsing::span::Span;

/// The kind of a delimiter-bounded inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Bold,
    Quoted,
    Marker,
    Code,
}

impl TokenKind {
    /// Whether the content is resolved again before being flattened into
    /// the outer run. Quoted text and code are taken verbatim.
    pub fn resolves_inner(self) -> bool {
        matches!(self, TokenKind::Bold | TokenKind::Marker)
    }
}

/// A candidate inline span found by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Full span including delimiters.
    pub full: Span,
    /// Content between the delimiters.
    pub inner: Span,
}
