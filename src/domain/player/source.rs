// SPDX-License-Identifier: MPL-2.0
//! Selected media file and its playable handle.

use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque id of a bound media source.
///
/// Every selection gets a fresh handle, so results that arrive late for a
/// replaced file can be told apart from results for the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceHandle(u64);

impl SourceHandle {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "source#{}", self.0)
    }
}

/// A user-selected local file exposed to the media element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSource {
    handle: SourceHandle,
    path: PathBuf,
}

impl MediaSource {
    #[must_use]
    pub fn new(handle: SourceHandle, path: PathBuf) -> Self {
        Self { handle, path }
    }

    #[must_use]
    pub fn handle(&self) -> SourceHandle {
        self.handle
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display, falling back to the full path.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_uses_file_name() {
        let source = MediaSource::new(SourceHandle::new(1), PathBuf::from("/videos/clip.mp4"));
        assert_eq!(source.display_name(), "clip.mp4");
        assert_eq!(source.handle().id(), 1);
    }

    #[test]
    fn handle_display_includes_id() {
        assert_eq!(SourceHandle::new(7).to_string(), "source#7");
    }
}
