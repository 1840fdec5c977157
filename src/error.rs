use std::path::PathBuf;
use thiserror::Error;

/// A path that could not be scanned
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }

    /// The path that failed
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::Io { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
