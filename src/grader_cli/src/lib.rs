use std::{io, path::PathBuf};

use anyhow::{anyhow, Context};
use clap::{
    builder::{OsStringValueParser, TypedValueParser},
    Parser, ValueEnum,
};
use grader_core::{
    check_source, resolve, resolve_required, Scratch, ScraperEngine, Source, SourceOptions,
};
use serde::Serialize;
use tracing::debug;

pub mod service_management;

const DEFAULT_CHECKS_FS_PATH: &str = "checks.json";

#[derive(Debug, Clone, Copy, ValueEnum, Default, Serialize)]
pub enum LogMode {
    Full,
    Json,
    #[default]
    Compact,
}

/// Grade an HTML page for the presence of CSS selectors
#[derive(Debug, Serialize, Parser, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to checks.json
    #[arg(short, long, value_name = "check_file", default_value = DEFAULT_CHECKS_FS_PATH, env = "GRADER_CHECKS", value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub checks: PathBuf,

    /// Path to index.html (an empty value means fetch --url instead)
    #[arg(short, long, value_name = "html_file", env = "GRADER_FILE", value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub file: Option<PathBuf>,

    /// URL to fetch the HTML from (ignored when --file is given)
    #[arg(short, long, required_unless_present = "file", env = "GRADER_URL")]
    pub url: Option<String>,

    /// Keep fetched HTML at this path instead of a self-deleting temporary file
    #[arg(long, value_name = "path")]
    pub scratch_file: Option<PathBuf>,

    /// Turn debugging information on (repeat for higher levels)
    #[arg(short, long, action = clap::ArgAction::Count, env = "GRADER_DEBUG")]
    pub debug: u8,

    /// Log output format
    #[clap(long, value_enum)]
    pub log_mode: Option<LogMode>,

    /// File for logs to be written to
    #[arg(long, value_parser)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Validates the input paths and picks between the local file and the URL.
    pub fn source(&self) -> anyhow::Result<Source> {
        let file = match &self.file {
            Some(path) => resolve(path)?,
            None => PathBuf::new(),
        };
        if !file.as_os_str().is_empty() {
            return Ok(Source::File(file));
        }
        self.url
            .clone()
            .map(Source::Url)
            .ok_or_else(|| anyhow!("either --file or --url must be given"))
    }

    pub fn source_options(&self) -> SourceOptions {
        SourceOptions {
            scratch: self
                .scratch_file
                .clone()
                .map(Scratch::Path)
                .unwrap_or_default(),
        }
    }
}

pub async fn execute(cli: &Cli) -> anyhow::Result<()> {
    debug!("Invoked at command line.");

    let checks = resolve_required(&cli.checks)?;
    let source = cli.source()?;
    debug!(?source, checks = %checks.display(), "grading");

    let outcome = check_source(&ScraperEngine, &source, &checks, &cli.source_options()).await?;
    if let Some(report) = outcome {
        grader_core::report(&report, io::stdout().lock())
            .with_context(|| "[grader_cli] Failed to write the report to STDOUT")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_default_to_checks_json() {
        let cli = Cli::try_parse_from(["grader", "-u", "http://localhost/"]).unwrap();
        assert_eq!(cli.checks, PathBuf::from("checks.json"));
        assert_eq!(cli.file, None);
        assert_eq!(cli.debug, 0);
    }

    #[test]
    fn short_and_long_flags() {
        let cli = Cli::try_parse_from([
            "grader", "-c", "c.json", "--file", "index.html", "-dd", "--log-mode", "json",
        ])
        .unwrap();
        assert_eq!(cli.checks, PathBuf::from("c.json"));
        assert_eq!(cli.file, Some(PathBuf::from("index.html")));
        assert_eq!(cli.debug, 2);
        assert!(matches!(cli.log_mode, Some(LogMode::Json)));
    }

    #[test]
    fn empty_checks_value_is_accepted_by_the_parser() {
        let cli = Cli::try_parse_from(["grader", "-c", "", "-u", "http://localhost/"]).unwrap();
        assert_eq!(cli.checks, PathBuf::new());
    }

    #[test]
    fn needs_file_or_url() {
        assert!(Cli::try_parse_from(["grader"]).is_err());
    }

    #[test]
    fn url_mode_when_file_is_empty() {
        let cli = Cli::try_parse_from(["grader", "-f", "", "-u", "http://localhost/"]).unwrap();
        assert_eq!(
            cli.source().unwrap(),
            Source::Url("http://localhost/".to_string())
        );
    }

    #[test]
    fn file_wins_over_url() {
        let html = tempfile::NamedTempFile::new().unwrap();
        let path = html.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["grader", "-f", path, "-u", "http://localhost/"]).unwrap();
        assert_eq!(cli.source().unwrap(), Source::File(html.path().to_path_buf()));
    }

    #[test]
    fn missing_file_is_rejected() {
        let cli = Cli::try_parse_from(["grader", "-f", "/definitely/not/here.html"]).unwrap();
        let err = cli.source().unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn scratch_file_option() {
        let cli = Cli::try_parse_from(["grader", "-u", "x", "--scratch-file", "tmpfile"]).unwrap();
        assert_eq!(
            cli.source_options().scratch,
            Scratch::Path(PathBuf::from("tmpfile"))
        );
        let cli = Cli::try_parse_from(["grader", "-u", "x"]).unwrap();
        assert_eq!(cli.source_options().scratch, Scratch::Temporary);
    }
}
