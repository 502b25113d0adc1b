/// Forward-only position over a slice of lines.
///
/// Sub-extractors receive the lines and the current index and hand back the
/// index of the first line they did not consume; the cursor only ever moves
/// forward, so every line is visited by exactly one extractor.
#[derive(Debug)]
pub struct LineCursor<'a, S> {
    lines: &'a [S],
    pos: usize,
}

impl<'a, S: AsRef<str>> LineCursor<'a, S> {
    pub fn new(lines: &'a [S]) -> Self {
        Self { lines, pos: 0 }
    }

    pub fn lines(&self) -> &'a [S] {
        self.lines
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).map(AsRef::as_ref)
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.lines.len()
    }

    pub fn bump(&mut self) {
        self.advance_to(self.pos + 1);
    }

    /// Moves to `next`, which must lie past the current line.
    pub fn advance_to(&mut self, next: usize) {
        debug_assert!(next > self.pos, "cursor must move forward");
        self.pos = next.min(self.lines.len());
    }
}
