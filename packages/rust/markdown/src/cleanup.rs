//! Post-render cleanup passes for the Markdown output.
//!
//! Each cleanup pass is a function `&str -> String` applied in sequence.

use std::sync::LazyLock;

use regex::Regex;

/// Run the full cleanup pipeline on rendered Markdown text.
pub(crate) fn run_pipeline(md: &str) -> String {
    let mut result = md.to_string();

    result = normalize_whitespace(&result);
    result = collapse_blank_lines(&result);
    result = ensure_trailing_newline(&result);

    result
}

/// Trim trailing whitespace on every line.
fn normalize_whitespace(md: &str) -> String {
    md.lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse runs of 2+ blank lines into exactly one.
fn collapse_blank_lines(md: &str) -> String {
    static MULTI_BLANK_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

    MULTI_BLANK_RE.replace_all(md, "\n\n").to_string()
}

/// Ensure the file ends with exactly one newline.
fn ensure_trailing_newline(md: &str) -> String {
    let trimmed = md.trim_end_matches('\n');
    format!("{trimmed}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_whitespace_trims_trailing() {
        let input = "**1-1** []   \n答案\t\n---";
        let result = normalize_whitespace(input);
        assert_eq!(result, "**1-1** []\n答案\n---");
    }

    #[test]
    fn collapse_blank_lines_keeps_single() {
        let input = "a\n\nb";
        assert_eq!(collapse_blank_lines(input), input);
    }

    #[test]
    fn collapse_blank_lines_collapses_excess() {
        let input = "a\n\n\n\nb";
        assert_eq!(collapse_blank_lines(input), "a\n\nb");
    }

    #[test]
    fn ensure_trailing_newline_adds_if_missing() {
        assert_eq!(ensure_trailing_newline("# 标题"), "# 标题\n");
    }

    #[test]
    fn ensure_trailing_newline_normalizes_multiple() {
        assert_eq!(ensure_trailing_newline("---\n\n\n"), "---\n");
    }

    #[test]
    fn full_pipeline() {
        let input = "# 标题   \n\n\n\n**1-1** [] q\n\n---\n\n";
        let result = run_pipeline(input);
        assert_eq!(result, "# 标题\n\n**1-1** [] q\n\n---\n");
    }
}
