use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::{checks::Checks, document::DocumentEngine, error::GraderResult};

/// Selector to "present in the document" flag, keyed in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report(BTreeMap<String, bool>);

impl Report {
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.0.get(selector).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, bool)> for Report {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Report(iter.into_iter().collect())
    }
}

/// Queries every selector against `document`.
///
/// Stops at the first selector the engine rejects, so a report is either
/// complete or not produced at all.
pub fn evaluate<E: DocumentEngine>(
    engine: &E,
    document: &E::Document,
    checks: &Checks,
) -> GraderResult<Report> {
    let mut out = BTreeMap::new();
    for selector in checks.sorted() {
        let matches = engine.count(document, selector)?;
        debug!(selector, matches, "selector evaluated");
        out.insert(selector.to_string(), matches > 0);
    }
    Ok(Report(out))
}
