//! Text helpers for generated files

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Normalize an embedded multi-line block.
///
/// Leading blank lines and trailing whitespace are removed, and the
/// indentation of the first non-blank line is stripped from every line.
/// Lines indented deeper keep their extra indentation.
pub fn dedent(text: &str) -> String {
    let mut lines = text
        .trim_end()
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .peekable();

    let indent = match lines.peek() {
        Some(first) => first.chars().take_while(|c| c.is_whitespace()).count(),
        None => return String::new(),
    };

    lines
        .map(|line| strip_indent(line, indent))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip at most `width` leading whitespace characters
fn strip_indent(line: &str, width: usize) -> &str {
    let start = line
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .take(width)
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    &line[start..]
}

/// Serialize a value as JSON indented with one tab per level
pub fn to_tab_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    String::from_utf8(buf).context("Serialized JSON is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dedent_strips_common_indent() {
        let text = "
            first
              nested
            last
        ";
        assert_eq!(dedent(text), "first\n  nested\nlast");
    }

    #[test]
    fn test_dedent_measures_first_line_only() {
        let text = "\n  a\n      b\n    c";
        assert_eq!(dedent(text), "a\n    b\n  c");
    }

    #[test]
    fn test_dedent_keeps_inner_blank_lines() {
        let text = "\n\n    one\n\n    two\n\n   \n";
        assert_eq!(dedent(text), "one\n\ntwo");
    }

    #[test]
    fn test_dedent_does_not_eat_content_of_shallow_lines() {
        let text = "\n    deep\n  shallow";
        assert_eq!(dedent(text), "deep\nshallow");
    }

    #[test]
    fn test_dedent_is_idempotent() {
        let text = "
            export function add(a: number, b: number) {
            \treturn a + b
            }
        ";
        let once = dedent(text);
        assert_eq!(dedent(&once), once);
        assert_eq!(once, "export function add(a: number, b: number) {\n\treturn a + b\n}");
    }

    #[test]
    fn test_dedent_counts_characters_not_bytes() {
        assert_eq!(dedent("\u{3000}a\n \u{3000}b"), "a\n\u{3000}b");
        assert_eq!(dedent("\n\u{3000}\u{3000}x\n\u{3000}\u{3000}\u{3000}y"), "x\n\u{3000}y");
    }

    #[test]
    fn test_dedent_blank_input() {
        assert_eq!(dedent(""), "");
        assert_eq!(dedent("   \n\t\n"), "");
    }

    #[test]
    fn test_tab_json_object() {
        let text = to_tab_json(&json!({ "a": 1, "b": 2 })).unwrap();
        assert_eq!(text, "{\n\t\"a\": 1,\n\t\"b\": 2\n}");
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_tab_json_nested_values() {
        let text = to_tab_json(&json!({ "list": [true, null, "x"] })).unwrap();
        assert_eq!(text, "{\n\t\"list\": [\n\t\ttrue,\n\t\tnull,\n\t\t\"x\"\n\t]\n}");
    }
}
