use crate::{
    config::Configuration,
    model::{Block, Run},
    parsing::inline::{kinds::{Bold, Quoted}, resolve},
};

use super::{
    fence,
    kinds::{BlockQuote, CodeFence, FenceClose, Heading, ListItem},
};

/// Consumes the `>` lines starting at `lines[start]` into one
/// [`Block::BlockQuote`].
///
/// Text lines accumulate into a single paragraph with `"\n"` runs between
/// them; only a fenced code block splits the quote into several blocks.
/// Headings and list items are rendered inline. A line quoted twice keeps its
/// inner `>` as text.
///
/// Returns the block and the index of the first line after the quote.
pub fn process<S: AsRef<str>>(lines: &[S], start: usize, cfg: &Configuration) -> (Block, usize) {
    let content: Vec<&str> = lines[start..]
        .iter()
        .map_while(|l| BlockQuote::strip_marker(l.as_ref()))
        .collect();
    let next_index = start + content.len();

    let mut quote = QuoteBuilder::default();
    let mut j = 0;
    while let Some(&line) = content.get(j) {
        if CodeFence::open(line).is_some() {
            let code = fence::extract(&content, j, FenceClose::Bare);
            quote.push_block(Block::CodeBlock {
                language: code.language,
                raw_lines: code.raw_lines,
            });
            j = code.next_index;
            continue;
        }

        quote.start_line();
        if let Some((level, text)) = Heading::parse(line) {
            let text = Quoted::unquote(&Bold::pattern().replace_all(text, "${1}"));
            quote.push(Run::bold(text).with_size_hint(Heading::inline_size(level)));
        } else if let Some((marker, item)) = ListItem::parse(line) {
            quote.push(Run::plain(marker.inline_prefix()));
            quote.extend(resolve(item, cfg));
        } else {
            quote.extend(resolve(line, cfg));
        }
        j += 1;
    }

    log::debug!(
        "block quote at lines {start}..{next_index}: {} inner block(s)",
        quote.blocks.len() + usize::from(quote.open.is_some())
    );
    (quote.finish(), next_index)
}

/// Accumulates quote content, keeping consecutive text lines in one paragraph.
#[derive(Default)]
struct QuoteBuilder {
    blocks: Vec<Block>,
    /// Runs of the paragraph being filled, if any line has started one.
    open: Option<Vec<Run>>,
}

impl QuoteBuilder {
    /// Opens a paragraph or separates the next line from the previous one.
    fn start_line(&mut self) {
        match &mut self.open {
            Some(runs) => runs.push(Run::plain("\n")),
            None => self.open = Some(Vec::new()),
        }
    }

    fn push(&mut self, run: Run) {
        if !run.text.is_empty() {
            self.open.get_or_insert_with(Vec::new).push(run);
        }
    }

    fn extend(&mut self, runs: Vec<Run>) {
        for run in runs {
            self.push(run);
        }
    }

    fn flush(&mut self) {
        if let Some(runs) = self.open.take() {
            self.blocks.push(Block::Paragraph { runs });
        }
    }

    fn push_block(&mut self, block: Block) {
        self.flush();
        self.blocks.push(block);
    }

    fn finish(mut self) -> Block {
        self.flush();
        Block::BlockQuote {
            blocks: self.blocks,
        }
    }
}
