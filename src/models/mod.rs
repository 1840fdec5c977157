pub mod color_match;
pub mod config;

pub use color_match::{ColorMatch, InputSource, ScanSummary};
pub use config::{AppConfig, NormalizationSetting, OutputFormat};
