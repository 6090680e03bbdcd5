// SPDX-License-Identifier: MPL-2.0
//! Image resolution port definition.
//!
//! This module defines the [`ImageResolver`] trait that turns an attachment's
//! or product's opaque [`ImageSource`] into something a tile can render. Fetching,
//! caching and decoding stay on the adapter side; the panel only needs the
//! three-state [`ImageStatus`] to pick a rendering branch.

use crate::domain::attachment::ImageSource;

/// Resolution state of an image reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageStatus {
    /// Resolution has not completed yet.
    #[default]
    Loading,
    /// The image can be rendered from this URL or path.
    Ready(String),
    /// The reference points to nothing renderable.
    Unavailable,
}

impl ImageStatus {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, ImageStatus::Ready(_))
    }

    /// Returns the renderable location, if resolved.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match self {
            ImageStatus::Ready(location) => Some(location),
            ImageStatus::Loading | ImageStatus::Unavailable => None,
        }
    }
}

/// Trait for resolving image references.
///
/// Implementations may block (filesystem checks, cache lookups); callers run
/// them inside an Iced `Task` so the UI thread never waits on them.
pub trait ImageResolver: Send + Sync {
    /// Resolves a single reference. Never fails: problems map to
    /// [`ImageStatus::Unavailable`].
    fn resolve(&self, source: &ImageSource) -> ImageStatus;
}
