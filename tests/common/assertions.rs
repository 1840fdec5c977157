//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use color_grep::models::ScanSummary;

use super::app::CliOutput;

/// Assert the process exited with `expected`
pub fn assert_exit(output: &CliOutput, expected: i32) {
    assert_eq!(
        output.code,
        Some(expected),
        "Expected exit code {}, got {:?}.\nstdout: {}\nstderr: {}",
        expected,
        output.code,
        output.stdout,
        output.stderr
    );
}

/// Assert matched tokens, in scan order, as `file-name:line:text`
pub fn assert_matches(summary: &ScanSummary, expected: &[&str]) {
    let found: Vec<String> = summary
        .matches
        .iter()
        .map(|m| {
            let name = match &m.source {
                color_grep::models::InputSource::Stdin => "(stdin)".to_string(),
                color_grep::models::InputSource::File(path) => path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            };
            format!("{name}:{}:{}", m.line, m.text)
        })
        .collect();
    assert_eq!(found, expected);
}

/// Assert the output looks like an HTML report
pub fn assert_html_report(html: &str) {
    assert!(
        html.starts_with("<!DOCTYPE html>"),
        "Expected HTML document, got: {}",
        &html[..80.min(html.len())]
    );
    assert!(html.trim_end().ends_with("</html>"));
}
