// SPDX-License-Identifier: MPL-2.0
//! Filesystem-backed image resolver.
//!
//! Remote URLs are passed through untouched (downloading is someone else's
//! job). Everything else is treated as a storage path, relative to an optional
//! library root, and is ready only if a file exists there.

use crate::application::port::{ImageResolver, ImageStatus};
use crate::domain::attachment::ImageSource;
use std::path::{Path, PathBuf};

/// Resolves image references against the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalImageResolver {
    root: Option<PathBuf>,
}

impl LocalImageResolver {
    /// Creates a resolver; relative paths are joined onto `root` when given.
    #[must_use]
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    fn local_path(&self, source: &ImageSource) -> PathBuf {
        let raw = source.as_str().strip_prefix("file://").unwrap_or(source.as_str());
        let path = Path::new(raw);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl ImageResolver for LocalImageResolver {
    fn resolve(&self, source: &ImageSource) -> ImageStatus {
        if source.as_str().trim().is_empty() {
            return ImageStatus::Unavailable;
        }
        if source.is_remote() {
            return ImageStatus::Ready(source.as_str().to_string());
        }

        let path = self.local_path(source);
        if path.is_file() {
            tracing::debug!(source = %source, path = %path.display(), "image resolved");
            ImageStatus::Ready(path.to_string_lossy().into_owned())
        } else {
            tracing::warn!(source = %source, path = %path.display(), "image unavailable");
            ImageStatus::Unavailable
        }
    }
}
