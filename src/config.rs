use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

/// Extensions recognised when no `extensions` list is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff"];

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    /// Folder opened at startup. Empty means start without pictures.
    pub photo_library_path: PathBuf,
    /// Whether to descend into subdirectories when scanning a folder.
    pub recursive: bool,
    /// Optional maximum scan depth. `None` or `Some(0)` means unlimited.
    pub max_depth: Option<usize>,
    /// Allowed picture extensions (lowercase, without dot).
    pub extensions: Vec<String>,
    /// Follow symbolic links while scanning.
    pub follow_links: bool,
    /// Read EXIF orientation when describing the current picture.
    pub read_exif: bool,
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_yaml_file(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found; using defaults");
            Ok(Self::default())
        }
    }

    /// Validate invariants serde defaults can't express.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            !self.extensions.is_empty(),
            "extensions must list at least one file extension"
        );
        for ext in &self.extensions {
            ensure!(!ext.is_empty(), "extensions must not contain empty entries");
            ensure!(
                !ext.starts_with('.'),
                "extension {ext:?} must be given without a leading dot"
            );
            ensure!(
                *ext == ext.to_ascii_lowercase(),
                "extension {ext:?} must be lowercase"
            );
        }
        Ok(self)
    }

    /// The startup folder, if one is configured.
    #[must_use]
    pub fn startup_folder(&self) -> Option<&Path> {
        if self.photo_library_path.as_os_str().is_empty() {
            None
        } else {
            Some(&self.photo_library_path)
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            photo_library_path: PathBuf::new(),
            recursive: true,
            max_depth: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            follow_links: false,
            read_exif: true,
        }
    }
}
