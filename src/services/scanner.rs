//! Finds hex color tokens in text and keeps the ones close to a reference.

use crate::error::ScanError;
use crate::models::{AppConfig, ColorMatch, InputSource, ScanSummary};
use crate::services::walker;
use delta_e::{parse_color, ReferenceSet, Srgb};
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

static HEX_TOKEN: OnceLock<Regex> = OnceLock::new();

fn hex_token_pattern() -> &'static Regex {
    HEX_TOKEN.get_or_init(|| {
        Regex::new(r"#[0-9A-Fa-f]{6}").expect("hex token pattern is a valid regex")
    })
}

/// Every `#` followed by exactly six hex digits in `line`.
///
/// A token directly followed by a seventh hex digit is dropped, so
/// `#1234567` and `#RRGGBBAA` never match on their first six digits. Any
/// other character may follow, including `_` and non-ASCII letters.
pub fn hex_tokens(line: &str) -> impl Iterator<Item = regex::Match<'_>> {
    hex_token_pattern().find_iter(line).filter(move |token| {
        !line
            .as_bytes()
            .get(token.end())
            .is_some_and(u8::is_ascii_hexdigit)
    })
}

/// A match within a single line
#[derive(Debug, Clone, PartialEq)]
pub struct LineMatch {
    /// 1-based byte column of the `#`
    pub column: usize,
    pub text: String,
    pub color: Srgb,
    pub reference: Srgb,
    pub distance: f64,
}

/// Every token in `line` within `epsilon` of its nearest reference.
///
/// The comparison is inclusive, so an epsilon of zero finds exact matches.
pub fn scan_line(line: &str, references: &ReferenceSet, epsilon: f64) -> Vec<LineMatch> {
    hex_tokens(line)
        .filter_map(|token| {
            let color = match parse_color(token.as_str()) {
                Ok(color) => color,
                Err(e) => {
                    tracing::debug!(token = token.as_str(), %e, "Skipping unparseable token");
                    return None;
                }
            };
            let (idx, distance) = references.nearest_srgb(color);
            (distance <= epsilon).then(|| LineMatch {
                column: token.start() + 1,
                text: token.as_str().to_string(),
                color,
                reference: references.color(idx),
                distance,
            })
        })
        .collect()
}

/// Scans inputs for colors close to a reference set
#[derive(Debug, Clone)]
pub struct Scanner {
    references: ReferenceSet,
    epsilon: f64,
}

impl Scanner {
    pub fn new(references: ReferenceSet, epsilon: f64) -> Self {
        tracing::debug!(
            references = references.len(),
            epsilon,
            normalization = ?references.normalization(),
            "Scanner initialized"
        );
        Self {
            references,
            epsilon,
        }
    }

    pub fn references(&self) -> &ReferenceSet {
        &self.references
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// See [`scan_line`]
    pub fn scan_line(&self, line: &str) -> Vec<LineMatch> {
        scan_line(line, &self.references, self.epsilon)
    }

    /// Scan a reader line by line, appending to `summary`.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so binary-ish files
    /// still yield the tokens they contain. On a read error the matches
    /// found so far are kept.
    pub fn scan_reader<R: BufRead>(
        &self,
        source: &InputSource,
        mut reader: R,
        summary: &mut ScanSummary,
    ) -> io::Result<()> {
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;
            summary.lines_scanned += 1;

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            for m in self.scan_line(line) {
                summary.matches.push(ColorMatch {
                    source: source.clone(),
                    line: line_no,
                    column: m.column,
                    text: m.text,
                    color: m.color,
                    reference: m.reference,
                    distance: m.distance,
                });
            }
        }

        Ok(())
    }

    /// Scan a single file, recording a failure instead of returning it
    pub fn scan_file(&self, path: &Path, summary: &mut ScanSummary) {
        tracing::debug!(path = %path.display(), "Scanning file");
        let source = InputSource::File(path.to_path_buf());
        let result = File::open(path)
            .and_then(|file| self.scan_reader(&source, BufReader::new(file), summary));

        match result {
            Ok(()) => summary.files_scanned += 1,
            Err(e) => {
                tracing::debug!(path = %path.display(), %e, "Failed to scan file");
                summary.errors.push(ScanError::io(path, e));
            }
        }
    }

    /// Scan every input: files, directories (walked per `config`) and stdin.
    pub fn scan_inputs(
        &self,
        inputs: &[InputSource],
        config: &AppConfig,
        recursive: bool,
        stdin: &mut dyn BufRead,
    ) -> ScanSummary {
        let mut summary = ScanSummary::default();

        for input in inputs {
            match input {
                InputSource::Stdin => {
                    match self.scan_reader(input, &mut *stdin, &mut summary) {
                        Ok(()) => summary.files_scanned += 1,
                        Err(e) => summary.errors.push(ScanError::io("-", e)),
                    }
                }
                InputSource::File(path) => {
                    let walked = walker::collect_files(path, config, recursive);
                    summary.errors.extend(walked.errors);
                    for file in &walked.files {
                        self.scan_file(file, &mut summary);
                    }
                }
            }
        }

        tracing::info!(
            files = summary.files_scanned,
            lines = summary.lines_scanned,
            matches = summary.matches.len(),
            errors = summary.errors.len(),
            "Scan complete"
        );
        summary
    }
}
