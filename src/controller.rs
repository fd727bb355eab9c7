//! Single point of access from the presentation layer to the playlist.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Error;
use crate::playlist::Playlist;
use crate::scan::{self, ScanOptions};

/// Owns exactly one [`Playlist`] and swaps it out wholesale on folder changes.
///
/// Folders opened during the session are kept in `history`, most recent
/// first and without duplicates, for [`AppController::next_folder`] and
/// [`AppController::prev_folder`].
#[derive(Debug, Default)]
pub struct AppController {
    playlist: Playlist,
    folder: Option<PathBuf>,
    history: Vec<PathBuf>,
    paused: bool,
}

/// Direction through the folder history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FolderStep {
    /// Toward more recently opened folders, wrapping to the oldest.
    Newer,
    /// Toward older folders, wrapping to the most recent.
    Older,
}

impl AppController {
    /// A controller with an empty playlist; every query yields `None`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the playlist with one over `paths`, positioned on the first
    /// item, and return that item.
    pub fn select_folder(&mut self, paths: Vec<PathBuf>) -> Option<&Path> {
        debug!(count = paths.len(), "replacing playlist");
        self.playlist = Playlist::new(paths);
        self.playlist.current()
    }

    pub fn current(&self) -> Option<&Path> {
        self.playlist.current()
    }

    pub fn on_next(&mut self) -> Option<&Path> {
        self.playlist.advance()
    }

    pub fn on_prev(&mut self) -> Option<&Path> {
        self.playlist.retreat()
    }

    /// Resolve and scan `folder`, then select the result. The folder is
    /// remembered for [`AppController::reindex`] and moved to the front of
    /// the folder history.
    ///
    /// # Errors
    /// Propagates [`scan::resolve_folder`] and [`scan::scan_folder`] failures;
    /// the current playlist and history are left untouched in that case.
    pub fn open_folder(&mut self, folder: &Path, opts: &ScanOptions) -> Result<Option<&Path>, Error> {
        let folder = scan::resolve_folder(folder)?;
        let paths = scan::scan_folder(&folder, opts)?;
        info!(folder = %folder.display(), count = paths.len(), "folder selected");
        self.history.retain(|f| *f != folder);
        self.history.insert(0, folder.clone());
        self.folder = Some(folder);
        Ok(self.select_folder(paths))
    }

    /// Rescan the last opened folder and start over from its first picture.
    ///
    /// # Errors
    /// Returns [`Error::BadDir`] when no folder has been opened yet.
    pub fn reindex(&mut self, opts: &ScanOptions) -> Result<Option<&Path>, Error> {
        let folder = self
            .folder
            .clone()
            .ok_or_else(|| Error::BadDir("no folder opened yet".into()))?;
        let paths = scan::scan_folder(&folder, opts)?;
        info!(folder = %folder.display(), count = paths.len(), "folder reindexed");
        Ok(self.select_folder(paths))
    }

    /// Switch to the next more recently opened folder, wrapping to the oldest.
    ///
    /// Returns the folder switched to, or `None` when the history is empty.
    /// Folders that no longer exist are dropped from the history and skipped.
    ///
    /// # Errors
    /// Propagates [`scan::scan_folder`] failures.
    pub fn next_folder(&mut self, opts: &ScanOptions) -> Result<Option<PathBuf>, Error> {
        self.step_folder(FolderStep::Newer, opts)
    }

    /// Switch to the next older folder, wrapping to the most recent.
    ///
    /// # Errors
    /// Propagates [`scan::scan_folder`] failures.
    pub fn prev_folder(&mut self, opts: &ScanOptions) -> Result<Option<PathBuf>, Error> {
        self.step_folder(FolderStep::Older, opts)
    }

    fn step_folder(&mut self, step: FolderStep, opts: &ScanOptions) -> Result<Option<PathBuf>, Error> {
        loop {
            let len = self.history.len();
            if len == 0 {
                return Ok(None);
            }
            let pos = self
                .folder
                .as_ref()
                .and_then(|cur| self.history.iter().position(|f| f == cur));
            let idx = match (step, pos) {
                (FolderStep::Newer, Some(i)) => (i + len - 1) % len,
                (FolderStep::Newer, None) => len - 1,
                (FolderStep::Older, Some(i)) => (i + 1) % len,
                (FolderStep::Older, None) => 0,
            };
            let candidate = self.history[idx].clone();
            if !candidate.is_dir() {
                warn!(folder = %candidate.display(), "folder vanished; dropping from history");
                self.history.remove(idx);
                continue;
            }
            let paths = scan::scan_folder(&candidate, opts)?;
            info!(folder = %candidate.display(), count = paths.len(), ?step, "folder switched");
            self.folder = Some(candidate.clone());
            self.select_folder(paths);
            return Ok(Some(candidate));
        }
    }

    /// Flip the play/pause flag. Navigation is unaffected.
    pub fn on_toggle_play(&mut self) -> bool {
        self.paused = !self.paused;
        info!(paused = self.paused, "play/pause toggled");
        self.paused
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub const fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    #[must_use]
    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    /// Folders opened this session, most recent first.
    #[must_use]
    pub fn history(&self) -> &[PathBuf] {
        &self.history
    }
}
