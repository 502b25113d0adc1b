use crate::{
    config::{Configuration, TableMode},
    model::{Block, Document, Run, TableRow},
    parsing::inline::resolve,
};

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    cursor::LineCursor,
    fence,
    kinds::{BlockQuote, FenceClose, KeyValue, ListMarker, Table},
    quote, table,
};

/// Single forward pass over the lines of a document.
///
/// Each step classifies the line under the cursor and hands it, together
/// with any following lines the construct owns, to the matching extractor.
/// Malformed constructs never fail: an unterminated fence or quote simply
/// runs to the end of input.
pub struct BlockParser<'c> {
    cfg: &'c Configuration,
    classifier: MarkdownLineClassifier,
    out: Vec<Block>,
}

impl<'c> BlockParser<'c> {
    pub fn new(cfg: &'c Configuration) -> Self {
        Self {
            cfg,
            classifier: MarkdownLineClassifier,
            out: vec![],
        }
    }

    pub fn parse<S: AsRef<str>>(mut self, lines: &[S]) -> Document {
        let mut cursor = LineCursor::new(lines);
        while let Some(line) = cursor.peek() {
            let class = self.classifier.classify(line);
            log::trace!("line {}: {class:?}", cursor.pos());
            let emitted = self.out.len();
            let next = self.step(&cursor, class);
            for block in &self.out[emitted..] {
                log::trace!("lines {}..{next}: {}", cursor.pos(), block.kind_name());
            }
            cursor.advance_to(next);
        }
        log::debug!(
            "parsed {} line(s) into {} block(s)",
            lines.len(),
            self.out.len()
        );
        Document::new(self.out)
    }

    /// Emits the block(s) for the current line and returns the next index.
    fn step<S: AsRef<str>>(&mut self, cursor: &LineCursor<'_, S>, class: LineClass<'_>) -> usize {
        let (lines, i) = (cursor.lines(), cursor.pos());
        match class {
            LineClass::Blank => self.out.push(Block::BlankLine),
            LineClass::FenceOpen { .. } => {
                let code = fence::extract(lines, i, FenceClose::Prefix);
                self.out.push(Block::CodeBlock {
                    language: code.language,
                    raw_lines: code.raw_lines,
                });
                return code.next_index;
            }
            LineClass::ThematicBreak => self.out.push(Block::ThematicBreak),
            LineClass::Heading { level, text } => self.out.push(Block::Heading {
                level,
                runs: resolve(text, self.cfg),
            }),
            LineClass::ListItem { marker, content } => self.push_list_item(marker, content),
            LineClass::KeyValue { key, value } => {
                let mut runs = vec![Run::key_label(KeyValue::label(key))];
                runs.extend(resolve(value, self.cfg));
                self.out.push(Block::Paragraph { runs });
            }
            LineClass::BlockQuote => {
                let (block, next) = quote::process(lines, i, self.cfg);
                self.out.push(block);
                return next;
            }
            LineClass::TableRow => return self.table(lines, i),
            LineClass::Text(text) => self.out.push(Block::Paragraph {
                runs: resolve(text, self.cfg),
            }),
        }
        i + 1
    }

    fn push_list_item(&mut self, marker: ListMarker<'_>, content: &str) {
        let runs = resolve(content, self.cfg);
        let ordered = marker.is_ordered();
        let removed = if ordered {
            self.cfg.remove_ordered_list
        } else {
            self.cfg.remove_unordered_list
        };
        self.out.push(if removed {
            Block::Paragraph { runs }
        } else {
            Block::ListItem { ordered, runs }
        });
    }

    /// Either a structured table or one flattened paragraph per row,
    /// depending on the configuration's [`TableMode`].
    fn table<S: AsRef<str>>(&mut self, lines: &[S], i: usize) -> usize {
        let delimiter = match self.cfg.table_mode() {
            TableMode::Word => {
                let extracted = table::extract(lines, i);
                if !extracted.rows.is_empty() {
                    let rows = extracted.rows.iter().map(|r| self.table_row(r)).collect();
                    self.out.push(Block::Table {
                        rows,
                        has_header_separator: extracted.has_header_separator,
                    });
                }
                return extracted.next_index;
            }
            TableMode::Convert(conversion) => conversion.delimiter().unwrap_or(" "),
            TableMode::Clean | TableMode::Inline => " ",
        };

        let line = lines[i].as_ref();
        if !Table::is_separator(line) {
            let text = Table::split_cells(line).join(delimiter);
            self.out.push(Block::Paragraph {
                runs: resolve(&text, self.cfg),
            });
        }
        i + 1
    }

    /// Resolves each cell; a leading `>` in a cell is dropped.
    fn table_row(&self, cells: &[String]) -> TableRow {
        cells
            .iter()
            .map(|cell| {
                let text = BlockQuote::strip_marker(cell).unwrap_or(cell.as_str());
                resolve(text, self.cfg)
            })
            .collect()
    }
}
