//! Checks an HTML page for elements matching a list of CSS selectors.
//!
//! The page comes from a local file or a URL; the selectors come from a
//! JSON array in a checks file. The outcome is a [`Report`] mapping each
//! selector to whether at least one element matched it.

pub mod checks;
pub mod document;
pub mod error;
pub mod evaluate;
pub mod fetch;
pub mod report;
pub mod resolve;
pub mod scratch;
pub mod source;

pub use checks::{load_checks, Checks};
pub use document::{DocumentEngine, ScraperEngine};
pub use error::{GraderError, GraderResult};
pub use evaluate::{evaluate, Report};
pub use fetch::{fetch, FetchOutcome};
pub use report::report;
pub use resolve::{resolve, resolve_required};
pub use scratch::{Scratch, Staged};
pub use source::{check_html_bytes, check_html_file, check_source, Source, SourceOptions};
