use crate::{
    clean::rules,
    config::Configuration,
    model::{Run, run::text_of},
};

use super::{
    tokenize::tokenize,
    types::{Token, TokenKind},
};

/// Resolves inline formatting in `text` into non-overlapping styled runs.
///
/// # Overlaps
/// Tokens are taken in start order; a token overlapping one already taken is
/// discarded, so the earliest-starting span always wins.
///
/// # Plain runs
/// Text between spans becomes `Plain` runs after the configuration's inline
/// strip rules (italic, strikethrough, highlight, links) have been applied,
/// so plain runs agree with [`clean`](crate::clean()).
///
/// # Returns
/// Runs in source order. Empty input yields no runs.
pub fn resolve(text: &str, cfg: &Configuration) -> Vec<Run> {
    let mut out = Vec::new();
    let mut last_end = 0;

    for token in select(tokenize(text)) {
        push_plain(&mut out, &text[last_end..token.full.start], cfg);
        if let Some(run) = styled_run(text, token, cfg) {
            out.push(run);
        }
        last_end = token.full.end;
    }

    push_plain(&mut out, &text[last_end..], cfg);
    out
}

/// Keeps the earliest-starting token of every overlapping group.
///
/// Input is sorted by start and kept tokens never overlap, so comparing with
/// the last kept token is enough.
fn select(tokens: Vec<Token>) -> Vec<Token> {
    let mut kept: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Some(prev) = kept.last()
            && prev.full.overlaps(token.full)
        {
            log::trace!(
                "dropping {:?} at {:?}: overlaps {:?} at {:?}",
                token.kind,
                token.full,
                prev.kind,
                prev.full
            );
            continue;
        }
        kept.push(token);
    }
    kept
}

fn styled_run(text: &str, token: Token, cfg: &Configuration) -> Option<Run> {
    let inner = token.inner.slice(text);
    let content = if token.kind.resolves_inner() {
        flatten(inner, cfg)
    } else {
        inner.to_string()
    };
    let run = match token.kind {
        TokenKind::Bold => Run::bold(content),
        TokenKind::Marker | TokenKind::Code => Run::code(content),
        TokenKind::Quoted => Run::quoted(token.full.slice(text)),
    };
    (!run.text.is_empty()).then_some(run)
}

/// Resolves nested spans inside a bold or marker span and drops their styles.
fn flatten(inner: &str, cfg: &Configuration) -> String {
    text_of(&resolve(inner, cfg))
}

fn push_plain(out: &mut Vec<Run>, text: &str, cfg: &Configuration) {
    if text.is_empty() {
        return;
    }
    let stripped = rules::strip_inline(text, cfg);
    if !stripped.is_empty() {
        out.push(Run::plain(stripped));
    }
}
