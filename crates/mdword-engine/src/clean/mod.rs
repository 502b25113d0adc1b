//! # Cleaning Pipeline
//!
//! Plain-text mode: strips markup from raw text without building a document.
//!
//! ## Order
//!
//! 1. Heading hashes, bold, `''x''` and `` md``x`` `` (always)
//! 2. Italic, strikethrough, highlight, links (per flag)
//! 3. List bullets and numbers (per flag)
//! 4. Tables, according to [`Configuration::table_mode`]
//! 5. Thematic-break lines, then the result is trimmed
//!
//! Every rule removes all of its nested layers in one replacement (`# # x`,
//! `- - x`, `****x****`), so a single pass usually settles the text. A pass
//! can still expose a match for an earlier rule (`**# x**` becomes `# x`), so
//! the sequence is repeated until the text stops changing, at most
//! [`MAX_PASSES`] times. The output is therefore a fixed point,
//! `clean(clean(t)) == clean(t)`, and the cost stays linear in the input.

pub mod rules;
pub mod table;

use crate::{
    config::{Configuration, TableMode},
    parsing::blocks::kinds::ThematicBreak,
};

/// Upper bound on pipeline passes for one call.
pub const MAX_PASSES: usize = 8;

/// Converts `text` to plain text under `cfg`.
pub fn clean(text: &str, cfg: &Configuration) -> String {
    let (out, passes) = settle(text, cfg);
    log::debug!(
        "cleaned {} bytes into {} bytes in {passes} pass(es)",
        text.len(),
        out.len()
    );
    out
}

/// Runs [`pass`] until the text stops changing or [`MAX_PASSES`] is reached.
/// Returns the text and the number of passes run.
fn settle(text: &str, cfg: &Configuration) -> (String, usize) {
    let mut current = pass(text, cfg);
    for passes in 2..=MAX_PASSES {
        let next = pass(&current, cfg);
        if next == current {
            return (current, passes);
        }
        current = next;
    }
    log::debug!("cleaning stopped after {MAX_PASSES} passes");
    (current, MAX_PASSES)
}

/// One application of every rule.
///
/// Every rule either shortens the text or removes pipes and none adds pipes,
/// so repeated passes settle.
fn pass(text: &str, cfg: &Configuration) -> String {
    let text = rules::strip_structure(text);
    let text = rules::strip_inline(&text, cfg);
    let text = rules::strip_list_markers(&text, cfg);
    let text = match cfg.table_mode() {
        TableMode::Clean => table::clean_tables(&text),
        TableMode::Convert(conversion) => table::convert_tables(&text, conversion),
        TableMode::Word | TableMode::Inline => text,
    };
    ThematicBreak::line_pattern()
        .replace_all(&text, "")
        .trim()
        .to_string()
}
