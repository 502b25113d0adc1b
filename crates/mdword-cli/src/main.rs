mod args;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use mdword_config::{Config, OutputMode};
use mdword_engine::{AppliedOption, Configuration, clean, parse_document, render_html};
use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
    time::Instant,
};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => Config::load().context("Failed to load config file")?,
    }
    .unwrap_or_default();

    let mut cfg = config.conversion.clone();
    cli.overrides.apply(&mut cfg);
    let mode = cli.mode.unwrap_or(config.mode);

    if cli.save_config {
        let saved = Config {
            mode,
            conversion: cfg.clone(),
            ..config.clone()
        };
        match &cli.config {
            Some(path) => saved.save_to_path(path)?,
            None => saved.save()?,
        }
        log::info!("Saved options to config file");
    }

    let output = cli.output.clone().or(config.output_path);
    let input = read_input(cli.input_path())?;

    let started = Instant::now();
    let rendered = convert(&input, &cfg, mode)?;
    log_summary(&cfg, mode, started);

    write_output(output.as_deref(), &rendered)
}

fn convert(input: &str, cfg: &Configuration, mode: OutputMode) -> Result<String> {
    let out = match mode {
        OutputMode::Text => {
            let mut text = clean(input, cfg);
            text.push('\n');
            text
        }
        OutputMode::Html => render_html(&parse_document(input, cfg)),
        OutputMode::Json => {
            let doc = parse_document(input, cfg);
            let mut json = serde_json::to_string_pretty(&doc)?;
            json.push('\n');
            json
        }
    };
    Ok(out)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read standard input")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn log_summary(cfg: &Configuration, mode: OutputMode, started: Instant) {
    let applied: Vec<String> = cfg.applied_options().into_iter().map(label).collect();
    if applied.is_empty() {
        log::info!("No options applied");
    } else {
        log::info!("Applied: {}", applied.join(", "));
    }
    log::info!("Converted to {mode} in {:.2?}", started.elapsed());
}

fn label(option: AppliedOption) -> String {
    match option {
        AppliedOption::RemoveItalic => "removed italic".into(),
        AppliedOption::RemoveStrikethrough => "removed strikethrough".into(),
        AppliedOption::RemoveHighlight => "removed highlight".into(),
        AppliedOption::RemoveLinks => "removed links".into(),
        AppliedOption::RemoveUnorderedList => "removed bullet markers".into(),
        AppliedOption::RemoveOrderedList => "removed list numbering".into(),
        AppliedOption::TableClean => "flattened tables".into(),
        AppliedOption::TableConversion(conv) => format!("tables converted ({conv})"),
        AppliedOption::TableToWord => "kept tables structured".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_mode_ends_with_newline() {
        let out = convert("# Title", &Configuration::default(), OutputMode::Text).unwrap();
        assert_eq!(out, "Title\n");
    }

    #[test]
    fn json_mode_serializes_document() {
        let out = convert("# Title", &Configuration::default(), OutputMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value.get("blocks").is_some());
    }

    #[test]
    fn html_mode_renders_heading() {
        let out = convert("# Title", &Configuration::default(), OutputMode::Html).unwrap();
        assert!(out.contains("<h1>"));
    }
}
