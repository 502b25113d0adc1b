use super::kinds::{CodeFence, FenceClose};

/// A fenced code block lifted out of the line sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedCode {
    pub language: Option<String>,
    /// Lines between the fences, untouched.
    pub raw_lines: Vec<String>,
    pub terminated: bool,
    /// First line after the closing fence.
    pub next_index: usize,
}

/// Extracts the fenced block opened at `lines[start]`.
///
/// An unterminated fence runs to the end of `lines`.
pub fn extract<S: AsRef<str>>(lines: &[S], start: usize, close: FenceClose) -> FencedCode {
    let language = lines
        .get(start)
        .and_then(|l| CodeFence::open(l.as_ref().trim()))
        .flatten()
        .map(str::to_string);

    let mut raw_lines = Vec::new();
    let mut i = start + 1;
    while let Some(line) = lines.get(i) {
        let line = line.as_ref();
        if CodeFence::closes(close, line) {
            return FencedCode {
                language,
                raw_lines,
                terminated: true,
                next_index: i + 1,
            };
        }
        raw_lines.push(line.to_string());
        i += 1;
    }

    log::debug!(
        "unterminated code fence at line {start}, took {} line(s) to end of input",
        raw_lines.len()
    );
    FencedCode {
        language,
        raw_lines,
        terminated: false,
        next_index: lines.len(),
    }
}
