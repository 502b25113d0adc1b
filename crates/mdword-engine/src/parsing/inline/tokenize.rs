use regex::Regex;

use crate::parsing::span::Span;

use super::{
    kinds::{Bold, CodeSpan, Marker, Quoted},
    types::{Token, TokenKind},
};

/// Stand-in for every byte of a span hidden from later patterns.
const HIDDEN: char = '\u{1}';

/// Collects the candidate spans of every inline kind, sorted by start offset.
///
/// Kinds are matched in precedence order. Markers come first, then code
/// spans over the text with markers hidden, then bold and quoted text with
/// both hidden. A delimiter inside a marker or code span can therefore never
/// open or close a later kind, while a bold or quoted span may still enclose
/// one. Bold and quoted candidates may overlap each other; choosing between
/// them is the resolver's job.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    collect(&mut tokens, text, Marker::pattern(), TokenKind::Marker);
    let masked = hide(text, &tokens);

    let first_code = tokens.len();
    collect(&mut tokens, &masked, CodeSpan::pattern(), TokenKind::Code);
    let masked = hide(&masked, &tokens[first_code..]);

    collect(&mut tokens, &masked, Bold::pattern(), TokenKind::Bold);
    collect(&mut tokens, &masked, Quoted::pattern(), TokenKind::Quoted);
    tokens.sort_by_key(|t| (t.full.start, std::cmp::Reverse(t.full.end)));
    tokens
}

fn collect(out: &mut Vec<Token>, text: &str, re: &Regex, kind: TokenKind) {
    for caps in re.captures_iter(text) {
        let (Some(full), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push(Token {
            kind,
            full: Span::new(full.start(), full.end()),
            inner: Span::new(inner.start(), inner.end()),
        });
    }
}

/// Replaces every byte covered by `tokens` with [`HIDDEN`], keeping line
/// breaks. Byte offsets are unchanged, so spans found in the result index
/// the original text. `tokens` must be sorted and non-overlapping.
fn hide(text: &str, tokens: &[Token]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    for token in tokens {
        out.push_str(&text[copied..token.full.start]);
        out.extend(
            token
                .full
                .slice(text)
                .bytes()
                .map(|b| if b == b'\n' { '\n' } else { HIDDEN }),
        );
        copied = token.full.end;
    }
    out.push_str(&text[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(text: &str) -> Vec<(TokenKind, usize, usize)> {
        tokenize(text)
            .into_iter()
            .map(|t| (t.kind, t.full.start, t.full.end))
            .collect()
    }

    #[test]
    fn plain_text_has_no_tokens() {
        assert!(tokenize("nothing to see").is_empty());
    }

    #[test]
    fn tokens_are_position_sorted() {
        assert_eq!(
            kinds(r#"`c` "q" **b**"#),
            vec![
                (TokenKind::Code, 0, 3),
                (TokenKind::Quoted, 4, 7),
                (TokenKind::Bold, 8, 13),
            ]
        );
    }

    #[test]
    fn marker_content_is_left_to_recursion() {
        assert_eq!(kinds("md``x **y** z``"), vec![(TokenKind::Marker, 0, 15)]);
    }

    #[test]
    fn delimiters_inside_code_do_not_open_spans() {
        assert_eq!(
            kinds("`**` and **b**"),
            vec![(TokenKind::Code, 0, 4), (TokenKind::Bold, 9, 14)]
        );
        assert_eq!(
            kinds(r#"type `"` then "hi""#),
            vec![(TokenKind::Code, 5, 8), (TokenKind::Quoted, 14, 18)]
        );
    }

    #[test]
    fn bold_may_enclose_code_and_markers() {
        assert_eq!(
            kinds("**a `b` md``c`` d**"),
            vec![
                (TokenKind::Bold, 0, 19),
                (TokenKind::Code, 4, 7),
                (TokenKind::Marker, 8, 15),
            ]
        );
    }

    #[test]
    fn hidden_text_keeps_offsets_and_line_breaks() {
        let text = "md``é\nx`` **b**";
        let tokens = tokenize(text);
        assert_eq!(hide(text, &tokens[..1]), "\u{1}".repeat(6) + "\n" + &"\u{1}".repeat(3) + " **b**");
        assert_eq!(tokens[1].inner.slice(text), "b");
    }

    #[test]
    fn inner_span_excludes_delimiters() {
        let t = tokenize("**bold**");
        assert_eq!(t[0].inner, Span::new(2, 6));
    }
}
