use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, error};

use crate::{
    checks::load_checks,
    document::DocumentEngine,
    error::GraderResult,
    evaluate::{evaluate, Report},
    fetch::{fetch, FetchOutcome},
    scratch::Scratch,
};

/// Where the HTML under test comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    pub scratch: Scratch,
}

/// Grades HTML already in memory against the checks file.
pub fn check_html_bytes<E: DocumentEngine>(
    engine: &E,
    html: &[u8],
    checks_path: &Path,
) -> GraderResult<Report> {
    let document = engine.parse(html);
    let checks = load_checks(checks_path)?;
    debug!(checks = checks.len(), "checks loaded");
    evaluate(engine, &document, &checks)
}

/// Grades a local HTML file against the checks file.
pub fn check_html_file<E: DocumentEngine>(
    engine: &E,
    html_path: &Path,
    checks_path: &Path,
) -> GraderResult<Report> {
    let html = fs::read(html_path)?;
    debug!(path = %html_path.display(), bytes = html.len(), "HTML loaded");
    check_html_bytes(engine, &html, checks_path)
}

/// Grades `source`, fetching it first when it is a URL.
///
/// `Ok(None)` means the fetch failed; the failure has been logged and
/// there is nothing to report.
pub async fn check_source<E: DocumentEngine>(
    engine: &E,
    source: &Source,
    checks_path: &Path,
    options: &SourceOptions,
) -> GraderResult<Option<Report>> {
    match source {
        Source::File(html_path) => check_html_file(engine, html_path, checks_path).map(Some),
        Source::Url(url) => match fetch(url).await {
            FetchOutcome::Failed(message) => {
                error!("Error: {message}");
                Ok(None)
            }
            FetchOutcome::Fetched(body) => {
                let staged = options.scratch.stage(&body)?;
                check_html_file(engine, staged.path(), checks_path).map(Some)
            }
        },
    }
}
