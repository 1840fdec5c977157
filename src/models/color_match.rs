use crate::error::ScanError;
use delta_e::Srgb;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where scanned text came from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means stdin, anything else is a path
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            InputSource::Stdin
        } else {
            InputSource::File(arg.to_path_buf())
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "(stdin)"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A hex token that looks like one of the reference colors
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMatch {
    pub source: InputSource,
    /// 1-based line number
    pub line: usize,
    /// 1-based byte column of the `#`
    pub column: usize,
    /// Token as written, e.g. `#fe0000`
    pub text: String,
    pub color: Srgb,
    /// Nearest reference color
    pub reference: Srgb,
    /// CIEDE2000 distance to `reference`
    pub distance: f64,
}

impl ColorMatch {
    /// Exact match, ignoring case
    pub fn is_exact(&self) -> bool {
        self.color == self.reference
    }
}

/// Result of scanning every input
#[derive(Debug, Default)]
pub struct ScanSummary {
    pub matches: Vec<ColorMatch>,
    pub files_scanned: usize,
    pub lines_scanned: usize,
    pub errors: Vec<ScanError>,
}

impl ScanSummary {
    /// Process exit status: 2 if an input failed, else 0 on a match, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if !self.errors.is_empty() {
            2
        } else if self.matches.is_empty() {
            1
        } else {
            0
        }
    }
}
