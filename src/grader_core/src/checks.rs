use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{GraderError, GraderResult};

/// The selectors listed in a checks file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checks(Vec<String>);

impl Checks {
    pub fn new(selectors: Vec<String>) -> Self {
        Checks(selectors)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selectors in lexicographic order; the evaluation order and the report key order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.0.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
    }
}

impl std::str::FromStr for Checks {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

/// Reads a checks file, a JSON array of CSS selector strings.
pub fn load_checks(path: &Path) -> GraderResult<Checks> {
    let content = fs::read_to_string(path)?;
    content.parse::<Checks>().map_err(|source| GraderError::Checks {
        path: path.to_path_buf(),
        source,
    })
}
