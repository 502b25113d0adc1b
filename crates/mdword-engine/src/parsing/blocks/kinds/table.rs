use crate::patterns::lazy_regex;

/// Pipe-delimited table rows.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    lazy_regex! {
        fn separator_pattern = r"^\s*\|?[\s\-:|]+\|?\s*$";
    }

    lazy_regex! {
        /// Column alignment runs such as `:---`, `---:` or `:---:`.
        pub fn alignment_pattern = r":?-{3,}:?";
    }

    pub fn is_row(line: &str) -> bool {
        line.contains(Self::PIPE)
    }

    /// Header separator row, e.g. `|---|:---:|`.
    pub fn is_separator(line: &str) -> bool {
        Self::is_row(line) && Self::separator_pattern().is_match(line)
    }

    /// Drops one leading and one trailing pipe from the trimmed line.
    pub fn strip_outer_pipes(line: &str) -> &str {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        t.strip_suffix(Self::PIPE).unwrap_or(t)
    }

    /// Splits a row into trimmed cell texts.
    pub fn split_cells(line: &str) -> Vec<String> {
        Self::strip_outer_pipes(line)
            .split(Self::PIPE)
            .map(|c| c.trim().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("---|---")]
    #[case("|---|---|")]
    #[case("| :--- | ---: |")]
    #[case("|:-:|")]
    fn separators(#[case] line: &str) {
        assert!(Table::is_separator(line));
    }

    #[rstest]
    #[case("a|b")]
    #[case("---")]
    #[case("| a | - |")]
    fn not_separators(#[case] line: &str) {
        assert!(!Table::is_separator(line));
    }

    #[test]
    fn split_trims_cells_and_outer_pipes() {
        assert_eq!(Table::split_cells("| a |b| c |"), vec!["a", "b", "c"]);
        assert_eq!(Table::split_cells("a | b |c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_keeps_empty_cells() {
        assert_eq!(Table::split_cells("|a||c|"), vec!["a", "", "c"]);
    }
}
