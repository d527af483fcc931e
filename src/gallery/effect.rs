// SPDX-License-Identifier: MPL-2.0
use crate::domain::RequestToken;

/// Side effects requested by the controller and executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch a random sample; answer with [`super::Event::RandomLoaded`].
    FetchRandom { token: RequestToken },
    /// Fetch one page of keyword results; answer with [`super::Event::SearchLoaded`].
    Search {
        token: RequestToken,
        query: String,
        page: u32,
    },
    /// Scroll the gallery back to its top.
    ScrollToTop,
    /// Download thumbnails for the grid.
    LoadPreviews(Vec<String>),
    /// Download the full-resolution artwork for the composer.
    LoadArtwork { url: String },
    /// Rasterize the composed card and save it under `file_name`.
    Export { file_name: String },
}
