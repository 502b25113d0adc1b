//! # Document Sinks
//!
//! A [`DocumentSink`] turns a [`Document`] into some concrete format. The
//! engine never writes files; a sink decides what to do with its output.
//!
//! [`emit`] walks the blocks in reading order and converts every
//! [`Run`](crate::Run) into a [`StyledRun`], so sinks only deal with
//! rendering hints. It also pads table rows to a uniform width and bolds the
//! header row.

pub mod html;
pub mod style;

pub use html::{HtmlSink, render_html};
pub use style::{FontHint, Rgb, StyledRun};

use crate::model::{Block, Document, TableRow};

/// Part of a block quote as handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuotePart {
    /// One visual paragraph; may contain `"\n"` runs.
    Text(Vec<StyledRun>),
    Code {
        label: Option<StyledRun>,
        code: StyledRun,
    },
    Quote(Vec<QuotePart>),
}

/// Receiver of rendered blocks, called in reading order.
pub trait DocumentSink {
    type Error;

    fn append_heading(&mut self, level: u8, runs: &[StyledRun]) -> Result<(), Self::Error>;

    /// Also used for blank lines, with no runs.
    fn append_paragraph(&mut self, runs: &[StyledRun]) -> Result<(), Self::Error>;

    fn append_list_item(&mut self, ordered: bool, runs: &[StyledRun]) -> Result<(), Self::Error>;

    /// Code is shown on a shaded background, label first when present.
    fn append_code_block(
        &mut self,
        label: Option<&StyledRun>,
        code: &StyledRun,
    ) -> Result<(), Self::Error>;

    /// `rows` all have the same number of cells. When `has_header` is set the
    /// first row is the (already bold) header, drawn shaded.
    fn append_table(
        &mut self,
        rows: &[Vec<Vec<StyledRun>>],
        has_header: bool,
    ) -> Result<(), Self::Error>;

    /// One container with a left border.
    fn append_block_quote(&mut self, parts: &[QuotePart]) -> Result<(), Self::Error>;

    fn append_thematic_break(&mut self) -> Result<(), Self::Error>;
}

/// Feeds every block of `document` to `sink`, stopping at the first error.
pub fn emit<S: DocumentSink + ?Sized>(document: &Document, sink: &mut S) -> Result<(), S::Error> {
    for block in document {
        match block {
            Block::Heading { level, runs } => sink.append_heading(*level, &style::styled(runs))?,
            Block::Paragraph { runs } => sink.append_paragraph(&style::styled(runs))?,
            Block::ListItem { ordered, runs } => {
                sink.append_list_item(*ordered, &style::styled(runs))?
            }
            Block::CodeBlock {
                language,
                raw_lines,
            } => {
                let (label, code) = code_runs(language.as_deref(), raw_lines);
                sink.append_code_block(label.as_ref(), &code)?
            }
            Block::Table {
                rows,
                has_header_separator,
            } => {
                if rows.is_empty() {
                    continue;
                }
                sink.append_table(&table_rows(rows, *has_header_separator), *has_header_separator)?
            }
            Block::BlockQuote { blocks } => sink.append_block_quote(&quote_parts(blocks))?,
            Block::ThematicBreak => sink.append_thematic_break()?,
            Block::BlankLine => sink.append_paragraph(&[])?,
        }
    }
    Ok(())
}

fn code_runs(language: Option<&str>, raw_lines: &[String]) -> (Option<StyledRun>, StyledRun) {
    (
        language.map(StyledRun::code_label),
        StyledRun::code(raw_lines.join("\n")),
    )
}

/// Pads to the widest row; header cells are bolded.
fn table_rows(rows: &[TableRow], has_header: bool) -> Vec<Vec<Vec<StyledRun>>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let header = has_header && i == 0;
            let mut cells: Vec<Vec<StyledRun>> = row
                .iter()
                .map(|cell| {
                    let runs = style::styled(cell);
                    if header {
                        runs.into_iter().map(StyledRun::strong).collect()
                    } else {
                        runs
                    }
                })
                .collect();
            cells.resize_with(width, Vec::new);
            cells
        })
        .collect()
}

fn quote_parts(blocks: &[Block]) -> Vec<QuotePart> {
    blocks
        .iter()
        .filter_map(|block| match block {
            Block::Heading { runs, .. } | Block::Paragraph { runs } | Block::ListItem { runs, .. } => {
                Some(QuotePart::Text(style::styled(runs)))
            }
            Block::CodeBlock {
                language,
                raw_lines,
            } => {
                let (label, code) = code_runs(language.as_deref(), raw_lines);
                Some(QuotePart::Code { label, code })
            }
            Block::Table { rows, .. } => Some(QuotePart::Text(flatten_rows(rows))),
            Block::BlockQuote { blocks } => Some(QuotePart::Quote(quote_parts(blocks))),
            Block::ThematicBreak | Block::BlankLine => None,
        })
        .collect()
}

/// A table nested in a quote is shown as lines of space-separated cells.
fn flatten_rows(rows: &[TableRow]) -> Vec<StyledRun> {
    let mut out = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push(StyledRun::plain("\n"));
        }
        for (j, cell) in row.iter().enumerate() {
            if j > 0 {
                out.push(StyledRun::plain(" "));
            }
            out.extend(cell.iter().map(StyledRun::from));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Run;
    use pretty_assertions::assert_eq;

    /// Records every call as a line of text.
    #[derive(Default)]
    struct Recorder(Vec<String>);

    fn texts(runs: &[StyledRun]) -> String {
        runs.iter().map(|r| r.text.as_str()).collect()
    }

    impl DocumentSink for Recorder {
        type Error = String;

        fn append_heading(&mut self, level: u8, runs: &[StyledRun]) -> Result<(), String> {
            self.0.push(format!("h{level} {}", texts(runs)));
            Ok(())
        }

        fn append_paragraph(&mut self, runs: &[StyledRun]) -> Result<(), String> {
            self.0.push(format!("p {}", texts(runs)));
            Ok(())
        }

        fn append_list_item(&mut self, ordered: bool, runs: &[StyledRun]) -> Result<(), String> {
            self.0.push(format!("li({ordered}) {}", texts(runs)));
            Ok(())
        }

        fn append_code_block(
            &mut self,
            label: Option<&StyledRun>,
            code: &StyledRun,
        ) -> Result<(), String> {
            let label = label.map(|l| l.text.as_str()).unwrap_or("-");
            self.0.push(format!("code[{label}] {}", code.text));
            Ok(())
        }

        fn append_table(
            &mut self,
            rows: &[Vec<Vec<StyledRun>>],
            has_header: bool,
        ) -> Result<(), String> {
            let widths: Vec<usize> = rows.iter().map(Vec::len).collect();
            let header_bold = rows[0].iter().flatten().all(|r| r.bold);
            self.0.push(format!(
                "table header={has_header} widths={widths:?} bold_first={header_bold}"
            ));
            Ok(())
        }

        fn append_block_quote(&mut self, parts: &[QuotePart]) -> Result<(), String> {
            self.0.push(format!("quote {} part(s)", parts.len()));
            Ok(())
        }

        fn append_thematic_break(&mut self) -> Result<(), String> {
            Err("no rules allowed".into())
        }
    }

    #[test]
    fn blocks_are_emitted_in_order() {
        let doc = Document::new(vec![
            Block::Heading {
                level: 2,
                runs: vec![Run::plain("T")],
            },
            Block::BlankLine,
            Block::ListItem {
                ordered: true,
                runs: vec![Run::plain("x")],
            },
            Block::CodeBlock {
                language: Some("sh".into()),
                raw_lines: vec!["a".into(), "b".into()],
            },
            Block::Table {
                rows: vec![
                    vec![vec![Run::plain("h1")], vec![Run::plain("h2")]],
                    vec![vec![Run::plain("1")]],
                ],
                has_header_separator: true,
            },
            Block::BlockQuote {
                blocks: vec![Block::Paragraph { runs: vec![] }, Block::BlankLine],
            },
        ]);
        let mut rec = Recorder::default();
        emit(&doc, &mut rec).unwrap();
        assert_eq!(
            rec.0,
            vec![
                "h2 T",
                "p ",
                "li(true) x",
                "code[sh] a\nb",
                "table header=true widths=[2, 2] bold_first=true",
                "quote 1 part(s)",
            ]
        );
    }

    #[test]
    fn sink_errors_stop_emission() {
        let doc = Document::new(vec![
            Block::ThematicBreak,
            Block::Paragraph {
                runs: vec![Run::plain("never")],
            },
        ]);
        let mut rec = Recorder::default();
        assert_eq!(emit(&doc, &mut rec), Err("no rules allowed".to_string()));
        assert!(rec.0.is_empty());
    }

    #[test]
    fn empty_table_is_skipped() {
        let doc = Document::new(vec![Block::Table {
            rows: vec![],
            has_header_separator: false,
        }]);
        let mut rec = Recorder::default();
        emit(&doc, &mut rec).unwrap();
        assert!(rec.0.is_empty());
    }
}
