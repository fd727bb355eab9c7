//! Cyclic navigator over the pictures of one folder.

use std::path::{Path, PathBuf};

/// A ring over picture paths with a cursor that wraps in both directions.
///
/// The item list is fixed at construction; a new folder means a new
/// `Playlist`. When `items` is non-empty, `idx` is always in `0..items.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    items: Vec<PathBuf>,
    idx: usize,
}

impl Playlist {
    /// Build a playlist positioned on the first item. `items` may be empty.
    #[must_use]
    pub fn new(items: Vec<PathBuf>) -> Self {
        Self { items, idx: 0 }
    }

    /// Number of items contained.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the playlist is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cursor position, or `None` for an empty playlist.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.idx)
        }
    }

    /// Borrow the current item without moving.
    #[must_use]
    pub fn current(&self) -> Option<&Path> {
        self.items.get(self.idx).map(PathBuf::as_path)
    }

    /// Step forward, wrapping past the end, and return the new current item.
    pub fn advance(&mut self) -> Option<&Path> {
        if self.items.is_empty() {
            return None;
        }
        self.idx = (self.idx + 1) % self.items.len();
        self.current()
    }

    /// Step backward, wrapping from the first item to the last, and return
    /// the new current item.
    pub fn retreat(&mut self) -> Option<&Path> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        // `usize` can't go negative; add `len` before subtracting.
        self.idx = (self.idx + len - 1) % len;
        self.current()
    }

    /// Borrow the internal list (read-only).
    #[must_use]
    pub fn as_slice(&self) -> &[PathBuf] {
        &self.items
    }
}

impl FromIterator<PathBuf> for Playlist {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
