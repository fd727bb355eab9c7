//! Folder resolution and scanning for picture files.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::{Configuration, DEFAULT_EXTENSIONS};
use crate::error::Error;

/// Options controlling folder scanning.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional maximum recursion depth. `None` or `Some(0)` means unlimited.
    pub max_depth: Option<usize>,
    /// Allowed extensions (lowercase, without dot).
    pub exts: Vec<String>,
    /// Follow symbolic links while walking.
    pub follow_links: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            max_depth: None,
            exts: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            follow_links: false,
        }
    }
}

impl From<&Configuration> for ScanOptions {
    fn from(cfg: &Configuration) -> Self {
        Self {
            recursive: cfg.recursive,
            max_depth: cfg.max_depth,
            exts: cfg.extensions.clone(),
            follow_links: cfg.follow_links,
        }
    }
}

/// Return `true` if `path` has one of the allowed extensions.
#[must_use]
pub fn is_supported_image<S: AsRef<str>>(path: &Path, exts: &[S]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| exts.iter().any(|e| e.as_ref().eq_ignore_ascii_case(ext)))
}

/// Turn a selected folder into a canonical, readable directory.
///
/// # Errors
/// Returns [`Error::BadDir`] if the path is empty, missing, not a
/// directory, or can't be listed.
pub fn resolve_folder(folder: &Path) -> Result<PathBuf, Error> {
    if folder.as_os_str().is_empty() {
        return Err(Error::BadDir("empty folder path".into()));
    }
    let canonical = folder
        .canonicalize()
        .map_err(|_| Error::BadDir(folder.display().to_string()))?;
    if !canonical.is_dir() {
        return Err(Error::BadDir(format!("{} is not a directory", canonical.display())));
    }
    std::fs::read_dir(&canonical)
        .map_err(|_| Error::BadDir(format!("{} is unreadable", canonical.display())))?;
    Ok(canonical)
}

/// Scan `root` for pictures, returning them in file-name-sorted walk order.
///
/// An empty result is not an error; the caller gets an empty list.
///
/// # Errors
/// Returns [`Error::Io`] if the root itself can't be walked.
pub fn scan_folder(root: &Path, opts: &ScanOptions) -> Result<Vec<PathBuf>, Error> {
    let mut wd = WalkDir::new(root)
        .follow_links(opts.follow_links)
        .sort_by_file_name();
    if !opts.recursive {
        wd = wd.max_depth(1);
    } else if let Some(d) = opts.max_depth
        && d > 0
    {
        wd = wd.max_depth(d);
    }

    let mut out = Vec::new();
    for entry in wd.into_iter().filter_entry(|e| !should_skip_dir(e)) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(Error::Io(err.into())),
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        // `Path::is_file` follows symlinks, so linked pictures are kept.
        if path.is_file() && is_supported_image(path, &opts.exts) {
            out.push(path.to_path_buf());
        }
    }

    if out.is_empty() {
        warn!(root = %root.display(), "no pictures found");
    } else {
        info!(root = %root.display(), count = out.len(), "scanned pictures");
    }
    Ok(out)
}

fn should_skip_dir(entry: &DirEntry) -> bool {
    // Never skip the root; tempfile roots can be dot-dirs.
    if entry.depth() == 0 {
        return false;
    }
    if !entry.file_type().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|n| n.starts_with('.'))
}
