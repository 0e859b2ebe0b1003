use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{error::GraderResult, evaluate::Report};

const INDENT: &[u8] = b"    ";

impl Report {
    /// JSON object with a four-space indent.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut ser)?;
        String::from_utf8(buf)
            .map_err(|err| serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, err)))
    }
}

/// Writes the rendered report followed by a newline.
pub fn report<W: Write>(report: &Report, mut out: W) -> GraderResult<()> {
    let json = report.to_json_pretty().map_err(io::Error::from)?;
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Report {
        [("h2".to_string(), false), ("h1".to_string(), true)]
            .into_iter()
            .collect()
    }

    #[test]
    fn four_space_indent_sorted_keys() {
        assert_eq!(
            sample().to_json_pretty().unwrap(),
            "{\n    \"h1\": true,\n    \"h2\": false\n}"
        );
    }

    #[test]
    fn empty_report_is_empty_object() {
        assert_eq!(Report::default().to_json_pretty().unwrap(), "{}");
    }

    #[test]
    fn writes_trailing_newline() {
        let mut out = Vec::new();
        report(&sample(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["h1"], serde_json::Value::Bool(true));
    }

    #[test]
    fn selector_set_survives_rendering() {
        let report: Report = ["#header a", "div.footer", "h1"]
            .iter()
            .map(|s| (s.to_string(), false))
            .collect();
        let parsed: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
        let keys: Vec<&str> = parsed.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["#header a", "div.footer", "h1"]);
    }
}
