//! # Rich-Document Parsing
//!
//! `parse_document` splits the text into lines and runs the block parser;
//! blocks call into the inline resolver for their text.

pub mod blocks;
pub mod inline;
pub mod span;

#[cfg(test)]
mod tests;

use crate::{config::Configuration, model::Document};

use blocks::BlockParser;

/// Parses `text` into a [`Document`] under `cfg`.
///
/// Never fails: malformed markup is recovered as described on
/// [`BlockParser`].
pub fn parse_document(text: &str, cfg: &Configuration) -> Document {
    let lines: Vec<&str> = text.lines().collect();
    BlockParser::new(cfg).parse(&lines)
}
