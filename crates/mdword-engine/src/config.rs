//! # Conversion Configuration
//!
//! An immutable snapshot of the user's options, threaded by reference through
//! every stage of a conversion. There is no global state: two calls with two
//! different configurations never observe each other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How pipe-delimited table lines are rewritten when they are not kept as
/// tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TableConversion {
    #[default]
    None,
    Space,
    Tab,
    Comma,
}

impl TableConversion {
    /// Cell delimiter written in place of the pipes, `None` when no
    /// conversion applies.
    pub fn delimiter(self) -> Option<&'static str> {
        match self {
            TableConversion::None => None,
            TableConversion::Space => Some("    "),
            TableConversion::Tab => Some("\t"),
            TableConversion::Comma => Some(","),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TableConversion::None => "none",
            TableConversion::Space => "space",
            TableConversion::Tab => "tab",
            TableConversion::Comma => "comma",
        }
    }
}

impl FromStr for TableConversion {
    type Err = ConfigError;

    /// Accepts the canonical names as well as the labels used by the
    /// desktop front end (`无`, `空格`, `/t`, `,`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "\t" {
            return Ok(TableConversion::Tab);
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" | "无" => Ok(TableConversion::None),
            "space" | "空格" => Ok(TableConversion::Space),
            "tab" | "/t" | "\\t" => Ok(TableConversion::Tab),
            "comma" | "," => Ok(TableConversion::Comma),
            _ => Err(ConfigError::UnknownTableConversion(s.to_string())),
        }
    }
}

impl TryFrom<String> for TableConversion {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TableConversion> for String {
    fn from(value: TableConversion) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TableConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The effective table treatment once the precedence rules are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMode {
    /// Strip pipes and alignment runs, keep the cell text space separated.
    Clean,
    /// Rewrite pipes as the given delimiter.
    Convert(TableConversion),
    /// Keep tables as structured [`Block::Table`](crate::Block::Table) values.
    Word,
    /// Neither: table lines are flattened into paragraphs, cells joined by a space.
    Inline,
}

/// One processing option that is in effect for a conversion.
///
/// Returned by [`Configuration::applied_options`] so a front end can tell the
/// user what was done without the engine producing any prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedOption {
    RemoveItalic,
    RemoveStrikethrough,
    RemoveHighlight,
    RemoveLinks,
    RemoveUnorderedList,
    RemoveOrderedList,
    TableClean,
    TableConversion(TableConversion),
    TableToWord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub remove_italic: bool,
    pub remove_strikethrough: bool,
    pub remove_highlight: bool,
    pub remove_links: bool,
    pub remove_unordered_list: bool,
    pub remove_ordered_list: bool,
    pub table_clean: bool,
    pub table_conversion: TableConversion,
    /// Only consulted when building a [`Document`](crate::Document).
    pub table_to_word: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            remove_italic: false,
            remove_strikethrough: false,
            remove_highlight: false,
            remove_links: false,
            remove_unordered_list: false,
            remove_ordered_list: false,
            table_clean: false,
            table_conversion: TableConversion::None,
            table_to_word: true,
        }
    }
}

impl Configuration {
    /// Resolves the table options into a single mode.
    ///
    /// `table_clean` beats everything, an explicit conversion beats
    /// `table_to_word`.
    pub fn table_mode(&self) -> TableMode {
        if self.table_clean {
            TableMode::Clean
        } else if self.table_conversion != TableConversion::None {
            TableMode::Convert(self.table_conversion)
        } else if self.table_to_word {
            TableMode::Word
        } else {
            TableMode::Inline
        }
    }

    /// Options in effect, in the order the pipeline applies them.
    pub fn applied_options(&self) -> Vec<AppliedOption> {
        let flags = [
            (self.remove_italic, AppliedOption::RemoveItalic),
            (self.remove_strikethrough, AppliedOption::RemoveStrikethrough),
            (self.remove_highlight, AppliedOption::RemoveHighlight),
            (self.remove_links, AppliedOption::RemoveLinks),
            (self.remove_unordered_list, AppliedOption::RemoveUnorderedList),
            (self.remove_ordered_list, AppliedOption::RemoveOrderedList),
        ];
        let mut out: Vec<AppliedOption> = flags
            .into_iter()
            .filter_map(|(on, opt)| on.then_some(opt))
            .collect();

        match self.table_mode() {
            TableMode::Clean => out.push(AppliedOption::TableClean),
            TableMode::Convert(conv) => out.push(AppliedOption::TableConversion(conv)),
            TableMode::Word => out.push(AppliedOption::TableToWord),
            TableMode::Inline => {}
        }
        out
    }
}
