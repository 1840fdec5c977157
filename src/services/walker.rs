//! Expands command-line paths into the list of files to scan.

use crate::error::ScanError;
use crate::models::AppConfig;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Files found under one command-line path
#[derive(Debug, Default)]
pub struct WalkResult {
    pub files: Vec<PathBuf>,
    pub errors: Vec<ScanError>,
}

/// Expand `root` into files, in a stable (sorted) order.
///
/// A file given directly is always returned, whatever its extension. A
/// directory is listed and filtered by [`AppConfig::wants_file`];
/// subdirectories are entered only when `recursive` is set and
/// [`AppConfig::wants_dir`] allows it. Symlinked directories are not
/// followed.
pub fn collect_files(root: &Path, config: &AppConfig, recursive: bool) -> WalkResult {
    let mut result = WalkResult::default();

    let walker = WalkDir::new(root).sort_by_file_name().follow_links(false);
    let walker = if recursive { walker } else { walker.max_depth(1) };

    for entry in walker
        .into_iter()
        .filter_entry(|entry| enters(entry, config))
    {
        match entry {
            Ok(entry) if entry.depth() == 0 && !entry.file_type().is_dir() => {
                result.files.push(entry.into_path());
            }
            Ok(entry) if is_file(&entry) => {
                if config.wants_file(entry.path()) {
                    result.files.push(entry.into_path());
                }
            }
            Ok(entry) => {
                if entry.depth() > 0 {
                    tracing::trace!(path = %entry.path().display(), "Skipping entry");
                }
            }
            Err(e) => {
                let path = e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                result.errors.push(ScanError::io(path, io::Error::from(e)));
            }
        }
    }

    tracing::debug!(
        root = %root.display(),
        files = result.files.len(),
        errors = result.errors.len(),
        "Collected files"
    );
    result
}

// The root itself is always walked, even when it is a hidden directory.
fn enters(entry: &DirEntry, config: &AppConfig) -> bool {
    entry.depth() == 0 || !entry.file_type().is_dir() || config.wants_dir(entry.path())
}

fn is_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}
