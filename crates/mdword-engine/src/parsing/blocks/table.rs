use super::kinds::Table;

/// A pipe table lifted out of the line sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableExtract {
    /// Cell texts per row; rows may be ragged.
    pub rows: Vec<Vec<String>>,
    pub has_header_separator: bool,
    /// First line that is blank or has no pipe.
    pub next_index: usize,
}

/// Consumes the contiguous pipe rows starting at `lines[start]`.
///
/// Separator rows are recorded in `has_header_separator` and not emitted.
pub fn extract<S: AsRef<str>>(lines: &[S], start: usize) -> TableExtract {
    let mut rows = Vec::new();
    let mut has_header_separator = false;
    let mut i = start;

    while let Some(line) = lines.get(i) {
        let line = line.as_ref().trim();
        if line.is_empty() || !Table::is_row(line) {
            break;
        }
        if Table::is_separator(line) {
            has_header_separator = true;
        } else {
            rows.push(Table::split_cells(line));
        }
        i += 1;
    }

    log::debug!(
        "table at lines {start}..{i}: {} row(s), header separator: {has_header_separator}",
        rows.len()
    );
    TableExtract {
        rows,
        has_header_separator,
        next_index: i,
    }
}
