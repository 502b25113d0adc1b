//! Plain-text treatment of pipe tables.

use crate::{config::TableConversion, parsing::blocks::kinds::Table};

/// Flattens tables into space-separated text.
///
/// A separator row marks the start of a table and is dropped; the pipe row
/// directly above it (the header) and every following pipe row are flattened.
/// The first line without a pipe ends the table.
pub fn clean_tables(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_table = false;

    for line in text.lines() {
        if Table::is_separator(line) {
            if !in_table
                && let Some(header) = out.last_mut()
                && Table::is_row(header)
            {
                *header = flatten_row(header);
            }
            in_table = true;
            continue;
        }
        if in_table && Table::is_row(line) {
            out.push(flatten_row(line));
        } else {
            in_table = false;
            out.push(line.to_string());
        }
    }
    out.join("\n")
}

fn flatten_row(line: &str) -> String {
    let inner = Table::strip_outer_pipes(line);
    let unaligned = Table::alignment_pattern().replace_all(inner, "");
    let no_pipes = unaligned.replace(Table::PIPE, "");
    no_pipes.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Rewrites every pipe row with `conversion`'s delimiter between trimmed
/// cells. Separator rows are dropped, other lines pass through.
pub fn convert_tables(text: &str, conversion: TableConversion) -> String {
    let Some(delimiter) = conversion.delimiter() else {
        return text.to_string();
    };
    text.lines()
        .filter(|line| !Table::is_separator(line))
        .map(|line| {
            if Table::is_row(line) {
                Table::split_cells(line).join(delimiter)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
