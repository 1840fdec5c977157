use crate::assets::{AssetLoader, REPORT_TEMPLATE};
use crate::error::ReportError;
use crate::models::{ColorMatch, NormalizationSetting, OutputFormat, ScanSummary};
use delta_e::{parse_color, to_lab};
use serde::Serialize;
use std::collections::HashMap;
use std::io::{self, Write};
use tera::{Context, Tera};

/// Lightness above which dark text is used over a swatch
const LIGHT_SWATCH_L: f64 = 50.0;

/// One match, flattened for templates
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub source: String,
    pub line: usize,
    pub column: usize,
    pub text: String,
    pub color: String,
    pub reference: String,
    pub distance: f64,
    pub exact: bool,
}

impl From<&ColorMatch> for ReportRow {
    fn from(m: &ColorMatch) -> Self {
        Self {
            source: m.source.to_string(),
            line: m.line,
            column: m.column,
            text: m.text.clone(),
            color: m.color.to_hex(),
            reference: m.reference.to_hex(),
            distance: m.distance,
            exact: m.is_exact(),
        }
    }
}

/// Everything the HTML template can see
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub references: Vec<String>,
    pub epsilon: f64,
    pub normalization: NormalizationSetting,
    /// Unix timestamp, formatted in the template with `format_time`
    pub generated_at: i64,
    pub files_scanned: usize,
    pub lines_scanned: usize,
    pub matches: Vec<ReportRow>,
    pub errors: Vec<String>,
}

impl ReportContext {
    pub fn new(
        references: &delta_e::ReferenceSet,
        epsilon: f64,
        summary: &ScanSummary,
    ) -> Self {
        Self {
            references: references.colors().iter().map(|c| c.to_hex()).collect(),
            epsilon,
            normalization: references.normalization().into(),
            generated_at: chrono::Utc::now().timestamp(),
            files_scanned: summary.files_scanned,
            lines_scanned: summary.lines_scanned,
            matches: summary.matches.iter().map(ReportRow::from).collect(),
            errors: summary.errors.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Formats a match the way grep formats a hit
pub fn format_text_line(m: &ColorMatch) -> String {
    format!(
        "{}:{}:{}: {} ~ {} dE00={:.4}",
        m.source,
        m.line,
        m.column,
        m.text,
        m.reference.to_hex(),
        m.distance
    )
}

/// Write one line per match
pub fn write_text<W: Write>(mut out: W, matches: &[ColorMatch]) -> io::Result<()> {
    for m in matches {
        writeln!(out, "{}", format_text_line(m))?;
    }
    out.flush()
}

/// Renders scan results as text or HTML
pub struct ReportService {
    loader: AssetLoader,
}

impl ReportService {
    pub fn new(loader: AssetLoader) -> Self {
        Self { loader }
    }

    /// Register custom Tera filters
    fn register_filters(tera: &mut Tera) {
        // text_on: black or white, whichever reads better on the given swatch
        tera.register_filter(
            "text_on",
            |value: &tera::Value, _args: &HashMap<String, tera::Value>| {
                let hex = tera::try_get_value!("text_on", "value", String, value);
                let color = parse_color(&hex)
                    .map_err(|e| tera::Error::msg(format!("text_on: {e}")))?;
                let text = if to_lab(color).l > LIGHT_SWATCH_L {
                    "#000000"
                } else {
                    "#FFFFFF"
                };
                Ok(tera::Value::String(text.to_string()))
            },
        );

        // delta: fixed-precision distance
        tera.register_filter(
            "delta",
            |value: &tera::Value, args: &HashMap<String, tera::Value>| {
                let distance = tera::try_get_value!("delta", "value", f64, value);
                let precision = args
                    .get("precision")
                    .and_then(|v| v.as_u64())
                    .unwrap_or(2) as usize;
                Ok(tera::Value::String(format!("{distance:.precision$}")))
            },
        );

        // format_time filter
        tera.register_filter(
            "format_time",
            |value: &tera::Value, args: &HashMap<String, tera::Value>| {
                let ts = tera::try_get_value!("format_time", "value", i64, value);
                let fmt = args
                    .get("format")
                    .and_then(|v| v.as_str())
                    .unwrap_or("%Y-%m-%d %H:%M UTC");

                use chrono::{TimeZone, Utc};
                if let Some(dt) = Utc.timestamp_opt(ts, 0).single() {
                    Ok(tera::Value::String(dt.format(fmt).to_string()))
                } else {
                    Ok(tera::Value::String("unknown".to_string()))
                }
            },
        );
    }

    /// Render the HTML report
    ///
    /// The template is loaded on every call, so an external override is
    /// picked up without restarting anything.
    pub fn render_html(&self, context: &ReportContext) -> Result<String, ReportError> {
        let source = self
            .loader
            .read_template_string(REPORT_TEMPLATE)
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ReportError::TemplateNotFound(REPORT_TEMPLATE.to_string()),
                _ => ReportError::Io(e),
            })?;

        let mut tera = Tera::default();
        tera.add_raw_template(REPORT_TEMPLATE, &source)?;
        Self::register_filters(&mut tera);

        let context = Context::from_serialize(context)?;
        let html = tera.render(REPORT_TEMPLATE, &context)?;

        tracing::debug!(bytes = html.len(), "Rendered HTML report");
        Ok(html)
    }

    /// Write the report in `format` to `out`
    pub fn write<W: Write>(
        &self,
        format: OutputFormat,
        context: &ReportContext,
        matches: &[ColorMatch],
        mut out: W,
    ) -> Result<(), ReportError> {
        match format {
            OutputFormat::Text => write_text(out, matches)?,
            OutputFormat::Html => {
                let html = self.render_html(context)?;
                out.write_all(html.as_bytes())?;
                out.flush()?;
            }
        }
        Ok(())
    }
}
