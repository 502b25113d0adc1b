use serde::Serialize;

use super::run::Run;

/// Cells of one table row; each cell is its own run sequence.
pub type TableRow = Vec<Vec<Run>>;

/// A structural document unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Heading {
        /// 1..=9
        level: u8,
        runs: Vec<Run>,
    },
    Paragraph {
        runs: Vec<Run>,
    },
    ListItem {
        ordered: bool,
        runs: Vec<Run>,
    },
    CodeBlock {
        language: Option<String>,
        raw_lines: Vec<String>,
    },
    Table {
        rows: Vec<TableRow>,
        has_header_separator: bool,
    },
    BlockQuote {
        blocks: Vec<Block>,
    },
    ThematicBreak,
    BlankLine,
}

impl Block {
    /// Short name of the variant, used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::Paragraph { .. } => "Paragraph",
            Block::ListItem { .. } => "ListItem",
            Block::CodeBlock { .. } => "CodeBlock",
            Block::Table { .. } => "Table",
            Block::BlockQuote { .. } => "BlockQuote",
            Block::ThematicBreak => "ThematicBreak",
            Block::BlankLine => "BlankLine",
        }
    }
}

/// Blocks in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
