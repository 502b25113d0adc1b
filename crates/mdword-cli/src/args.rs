use clap::{Args, Parser};
use mdword_config::OutputMode;
use mdword_engine::{Configuration, TableConversion};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Converts loosely structured Markdown to plain text, HTML or a JSON document.
#[derive(Debug, Parser)]
#[command(name = "mdword", version, about)]
pub struct Cli {
    /// File to convert; standard input when missing or `-`
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output format: text, html or json (default from config, else text)
    #[arg(long, value_name = "MODE", value_parser = OutputMode::from_str)]
    pub mode: Option<OutputMode>,

    /// Config file (default ~/.config/mdword/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write to PATH instead of standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Store the effective options in the config file
    #[arg(long)]
    pub save_config: bool,

    #[command(flatten)]
    pub overrides: Overrides,
}

impl Cli {
    /// The input file, `None` for standard input.
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }
}

/// Flags layered on top of the loaded [`Configuration`]. Flags only ever
/// switch options on; `--no-table-to-word` is the one exception.
#[derive(Debug, Default, PartialEq, Eq, Args)]
pub struct Overrides {
    /// Strip *italic* and _italic_
    #[arg(long)]
    pub remove_italic: bool,
    /// Strip ~~strikethrough~~
    #[arg(long)]
    pub remove_strikethrough: bool,
    /// Strip ==highlight==
    #[arg(long)]
    pub remove_highlight: bool,
    /// Replace [text](url) with text
    #[arg(long)]
    pub remove_links: bool,
    /// Drop bullet markers
    #[arg(long)]
    pub remove_unordered_list: bool,
    /// Drop list numbering
    #[arg(long)]
    pub remove_ordered_list: bool,
    /// Flatten tables to space-separated text
    #[arg(long)]
    pub table_clean: bool,
    /// Rewrite table pipes: none, space, tab or comma
    #[arg(long, value_name = "MODE", value_parser = TableConversion::from_str)]
    pub table_conversion: Option<TableConversion>,
    /// Do not keep tables structured in documents
    #[arg(long)]
    pub no_table_to_word: bool,
}

impl Overrides {
    pub fn apply(&self, cfg: &mut Configuration) {
        cfg.remove_italic |= self.remove_italic;
        cfg.remove_strikethrough |= self.remove_strikethrough;
        cfg.remove_highlight |= self.remove_highlight;
        cfg.remove_links |= self.remove_links;
        cfg.remove_unordered_list |= self.remove_unordered_list;
        cfg.remove_ordered_list |= self.remove_ordered_list;
        cfg.table_clean |= self.table_clean;
        if let Some(conversion) = self.table_conversion {
            cfg.table_conversion = conversion;
        }
        if self.no_table_to_word {
            cfg.table_to_word = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("mdword").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case(&[])]
    #[case(&["-"])]
    fn reads_stdin(#[case] args: &[&str]) {
        let cli = parse(args).unwrap();
        assert_eq!(cli.input_path(), None);
        assert_eq!(cli.overrides, Overrides::default());
    }

    #[test]
    fn full_command_line() {
        let cli = parse(&[
            "--mode",
            "html",
            "--remove-links",
            "--table-conversion=comma",
            "--output",
            "out.html",
            "notes.md",
        ])
        .unwrap();

        assert_eq!(cli.mode, Some(OutputMode::Html));
        assert_eq!(cli.input_path(), Some(Path::new("notes.md")));
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
        assert!(cli.overrides.remove_links);
        assert_eq!(cli.overrides.table_conversion, Some(TableConversion::Comma));
    }

    #[rstest]
    #[case(&["--bogus"])]
    #[case(&["--mode"])]
    #[case(&["--mode", "pdf"])]
    #[case(&["--table-conversion", "pipes"])]
    #[case(&["a.md", "b.md"])]
    fn rejected(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn overrides_layer_on_config() {
        let mut cfg = Configuration {
            remove_italic: true,
            ..Configuration::default()
        };
        let overrides = Overrides {
            remove_links: true,
            no_table_to_word: true,
            table_conversion: Some(TableConversion::Tab),
            ..Overrides::default()
        };

        overrides.apply(&mut cfg);

        assert_eq!(
            cfg,
            Configuration {
                remove_italic: true,
                remove_links: true,
                table_conversion: TableConversion::Tab,
                table_to_word: false,
                ..Configuration::default()
            }
        );
    }
}
