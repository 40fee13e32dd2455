use crate::utils::error::Result;
use serde::Serialize;

/// Default width of the sample-entry preview printed after a run.
pub const PREVIEW_WIDTH: usize = 400;

const PREVIEW_PLACEHOLDER: &str = " ... }";

/// Serialize with a caller-chosen indent. The two pipelines publish with
/// different indent widths, so the stock `to_string_pretty` is not enough.
pub fn pretty_json<T: Serialize>(value: &T, indent: &str) -> Result<String> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8(buf).expect("serializer produced invalid UTF-8"))
}

/// Collapse all whitespace runs to single spaces and cut at a word boundary,
/// appending a placeholder when the text had to be shortened.
pub fn shorten(text: &str, width: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.len() <= width {
        return collapsed;
    }

    let budget = width.saturating_sub(PREVIEW_PLACEHOLDER.len());
    let mut cut = 0;
    for (idx, _) in collapsed.match_indices(' ') {
        if idx > budget {
            break;
        }
        cut = idx;
    }

    let mut out = collapsed[..cut].to_string();
    out.push_str(PREVIEW_PLACEHOLDER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_json_indent_width() {
        let value = serde_json::json!({"a": [1]});
        let two = pretty_json(&value, "  ").unwrap();
        let four = pretty_json(&value, "    ").unwrap();
        assert!(two.contains("\n  \"a\""));
        assert!(four.contains("\n    \"a\""));
        // both re-parse to the same structure
        let re_two: serde_json::Value = serde_json::from_str(&two).unwrap();
        let re_four: serde_json::Value = serde_json::from_str(&four).unwrap();
        assert_eq!(re_two, re_four);
    }

    #[test]
    fn test_shorten_leaves_short_text_alone() {
        assert_eq!(shorten("{ \"a\": 1 }", 400), "{ \"a\": 1 }");
    }

    #[test]
    fn test_shorten_collapses_whitespace() {
        assert_eq!(shorten("{\n    \"a\": 1\n}", 400), "{ \"a\": 1 }");
    }

    #[test]
    fn test_shorten_truncates_at_word_boundary() {
        let long = "word ".repeat(200);
        let out = shorten(&long, 50);
        assert!(out.len() <= 50);
        assert!(out.ends_with(" ... }"));
        assert!(!out.contains("wor ..."));
    }
}
