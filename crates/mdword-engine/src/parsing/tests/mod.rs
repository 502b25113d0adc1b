//! Cross-module tests for rich-document parsing.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    config::{Configuration, TableConversion},
    model::{Block, Run, RunStyle},
    parsing::parse_document,
};

fn parse(md: &str, cfg: &Configuration) -> Vec<Block> {
    let doc = parse_document(md, cfg);
    invariants::check(&doc);
    doc.blocks
}

fn parse_default(md: &str) -> Vec<Block> {
    parse(md, &Configuration::default())
}

#[rstest]
fn heading_levels(#[values(1, 2, 3, 4, 5, 6, 7, 8, 9)] level: usize) {
    let md = format!("{} Title", "#".repeat(level));
    assert_eq!(
        parse_default(&md),
        vec![Block::Heading {
            level: level as u8,
            runs: vec![Run::plain("Title")]
        }]
    );
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    assert!(parse_default("").is_empty());
}

/// Blank lines are kept, one block each.
#[test]
fn blank_lines_only() {
    assert_eq!(parse_default("\n\n\n"), vec![Block::BlankLine; 3]);
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        parse_default("# A\r\ntext\r\n"),
        vec![
            Block::Heading {
                level: 1,
                runs: vec![Run::plain("A")]
            },
            Block::Paragraph {
                runs: vec![Run::plain("text")]
            },
        ]
    );
}

#[test]
fn unordered_list_toggle() {
    assert_eq!(
        parse_default("- item"),
        vec![Block::ListItem {
            ordered: false,
            runs: vec![Run::plain("item")]
        }]
    );
    let cfg = Configuration {
        remove_unordered_list: true,
        ..Configuration::default()
    };
    assert_eq!(
        parse("- item", &cfg),
        vec![Block::Paragraph {
            runs: vec![Run::plain("item")]
        }]
    );
}

#[test]
fn unterminated_fence_is_one_code_block() {
    let blocks = parse_default("intro\n```python\nx = 1\n\n# not heading");
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph {
                runs: vec![Run::plain("intro")]
            },
            Block::CodeBlock {
                language: Some("python".into()),
                raw_lines: vec!["x = 1".into(), "".into(), "# not heading".into()],
            },
        ]
    );
}

#[test]
fn table_clean_flattens_rows_in_document_mode() {
    let cfg = Configuration {
        table_clean: true,
        ..Configuration::default()
    };
    assert_eq!(
        parse("| a | b |\n|---|---|", &cfg),
        vec![Block::Paragraph {
            runs: vec![Run::plain("a b")]
        }]
    );
}

#[test]
fn conversion_beats_table_to_word() {
    let cfg = Configuration {
        table_conversion: TableConversion::Comma,
        table_to_word: true,
        ..Configuration::default()
    };
    assert_eq!(
        parse("a | b |c", &cfg),
        vec![Block::Paragraph {
            runs: vec![Run::plain("a,b,c")]
        }]
    );
}

#[test]
fn quote_ends_at_first_unquoted_line() {
    let blocks = parse_default("> a\n> b\nc");
    assert_eq!(blocks.len(), 2);
    assert!(matches!(blocks[0], Block::BlockQuote { .. }));
    assert_eq!(
        blocks[1],
        Block::Paragraph {
            runs: vec![Run::plain("c")]
        }
    );
}

#[test]
fn quote_at_end_of_input() {
    let blocks = parse_default("> ```\n> never closed");
    assert_eq!(
        blocks,
        vec![Block::BlockQuote {
            blocks: vec![Block::CodeBlock {
                language: None,
                raw_lines: vec!["never closed".into()],
            }]
        }]
    );
}

#[test]
fn inline_styles_reach_every_block_kind() {
    let md = "# **H**\n- \"q\"\n1. `c`\nk: md``m``\n> **b**\n|**t**|\nplain **p**";
    let styles: Vec<RunStyle> = parse_default(md)
        .iter()
        .flat_map(|b| match b {
            Block::Heading { runs, .. }
            | Block::Paragraph { runs }
            | Block::ListItem { runs, .. } => runs.clone(),
            Block::BlockQuote { blocks } => match &blocks[0] {
                Block::Paragraph { runs } => runs.clone(),
                _ => vec![],
            },
            Block::Table { rows, .. } => rows[0][0].clone(),
            _ => vec![],
        })
        .map(|r| r.style)
        .collect();
    assert_eq!(
        styles,
        vec![
            RunStyle::Bold,
            RunStyle::Quoted,
            RunStyle::InlineCode,
            RunStyle::KeyLabel,
            RunStyle::InlineCode,
            RunStyle::Bold,
            RunStyle::Bold,
            RunStyle::Plain,
            RunStyle::Bold,
        ]
    );
}
