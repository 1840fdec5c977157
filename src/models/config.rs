use crate::assets::AssetLoader;
use crate::error::ConfigError;
use delta_e::{parse_color, Normalization, ParseColorError, Srgb};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Maximum CIEDE2000 distance for a match
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    /// Report format
    #[serde(default)]
    pub format: OutputFormat,

    /// XYZ normalization used for every conversion
    #[serde(default)]
    pub normalization: NormalizationSetting,

    /// Reference colors always searched for
    #[serde(default)]
    pub colors: Vec<String>,

    /// Extensions scanned while walking directories (without the dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Walk into dot-directories and scan dot-files
    #[serde(default)]
    pub include_hidden: bool,
}

fn default_epsilon() -> f64 {
    delta_e::JUST_NOTICEABLE_DIFFERENCE
}

fn default_extensions() -> Vec<String> {
    [
        "css", "scss", "sass", "less", "html", "htm", "svg", "js", "jsx", "ts", "tsx", "vue",
        "json", "md", "txt", "xml", "yaml", "yml", "toml",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Report format
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `path:line:column:` line per match
    #[default]
    Text,
    /// Self-contained HTML page with swatches
    Html,
}

/// Serialized form of [`Normalization`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationSetting {
    #[default]
    Standard,
    Legacy,
}

impl From<NormalizationSetting> for Normalization {
    fn from(setting: NormalizationSetting) -> Self {
        match setting {
            NormalizationSetting::Standard => Normalization::Standard,
            NormalizationSetting::Legacy => Normalization::Legacy,
        }
    }
}

impl From<Normalization> for NormalizationSetting {
    fn from(normalization: Normalization) -> Self {
        match normalization {
            Normalization::Standard => NormalizationSetting::Standard,
            Normalization::Legacy => NormalizationSetting::Legacy,
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    ///
    /// Never fails: a broken config is logged and replaced by defaults.
    pub fn load(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::debug!(
                        epsilon = config.epsilon,
                        colors = config.colors.len(),
                        extensions = config.extensions.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read and parse a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Normalization as the conversion type
    pub fn lab_normalization(&self) -> Normalization {
        self.normalization.into()
    }

    /// Reference colors: `primary` first, then the configured colors.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn reference_colors(&self, primary: &[Srgb]) -> Result<Vec<Srgb>, ParseColorError> {
        let mut colors: Vec<Srgb> = Vec::with_capacity(primary.len() + self.colors.len());
        for &color in primary {
            if !colors.contains(&color) {
                colors.push(color);
            }
        }
        for text in &self.colors {
            let color = parse_color(text)?;
            if !colors.contains(&color) {
                colors.push(color);
            }
        }
        Ok(colors)
    }

    /// Whether a file found while walking should be scanned
    pub fn wants_file(&self, path: &Path) -> bool {
        if !self.include_hidden && is_hidden(path) {
            return false;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
    }

    /// Whether a directory found while walking should be entered
    pub fn wants_dir(&self, path: &Path) -> bool {
        self.include_hidden || !is_hidden(path)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.') && name != "." && name != "..")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            epsilon: default_epsilon(),
            format: OutputFormat::default(),
            normalization: NormalizationSetting::default(),
            colors: Vec::new(),
            extensions: default_extensions(),
            include_hidden: false,
        }
    }
}
