// SPDX-License-Identifier: MPL-2.0
//! Allocation and release of media source handles.

use crate::domain::player::{MediaSource, SourceHandle};
use std::path::PathBuf;
use tracing::debug;

/// Hands out a fresh [`SourceHandle`] per selection and keeps the current one.
#[derive(Debug, Default)]
pub struct SourceRegistry {
    next_id: u64,
    current: Option<MediaSource>,
}

impl SourceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `path` as the current source, releasing the previous one.
    pub fn bind(&mut self, path: PathBuf) -> &MediaSource {
        self.release();
        self.next_id += 1;
        let source = MediaSource::new(SourceHandle::new(self.next_id), path);
        debug!(handle = %source.handle(), path = %source.path().display(), "bound media source");
        self.current.insert(source)
    }

    /// Releases the current source, if any.
    pub fn release(&mut self) -> Option<MediaSource> {
        let released = self.current.take();
        if let Some(source) = &released {
            debug!(handle = %source.handle(), "released media source");
        }
        released
    }

    #[must_use]
    pub fn current(&self) -> Option<&MediaSource> {
        self.current.as_ref()
    }

    /// Returns true if `handle` is the bound source.
    #[must_use]
    pub fn is_current(&self, handle: SourceHandle) -> bool {
        self.current
            .as_ref()
            .is_some_and(|source| source.handle() == handle)
    }
}
