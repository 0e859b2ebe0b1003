use scraper::{Html, Selector};
use tracing::trace;

use crate::error::{GraderError, GraderResult};

/// A parser plus selector engine that the evaluator queries through.
pub trait DocumentEngine {
    /// The queryable form of a parsed page.
    type Document;

    /// Parses raw HTML best-effort; malformed markup never fails here.
    fn parse(&self, bytes: &[u8]) -> Self::Document;

    /// Number of elements in `document` matching `selector`.
    fn count(&self, document: &Self::Document, selector: &str) -> GraderResult<usize>;
}

/// [`DocumentEngine`] backed by `scraper` (html5ever + selectors).
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperEngine;

impl DocumentEngine for ScraperEngine {
    type Document = Html;

    fn parse(&self, bytes: &[u8]) -> Html {
        let html = String::from_utf8_lossy(bytes);
        let document = Html::parse_document(&html);
        if !document.errors.is_empty() {
            trace!(errors = document.errors.len(), "HTML parsed with recoverable errors");
        }
        document
    }

    fn count(&self, document: &Html, selector: &str) -> GraderResult<usize> {
        let parsed = Selector::parse(selector).map_err(|err| GraderError::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("{err:#?}"),
        })?;
        Ok(document.select(&parsed).count())
    }
}
