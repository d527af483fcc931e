// SPDX-License-Identifier: MPL-2.0
//! Downloaded image data.
//!
//! - [`preview_cache`]: LRU cache of grid thumbnails keyed by URL
//! - [`artwork`]: the full-resolution photograph shown in the composer

pub mod artwork;
pub mod preview_cache;

pub use artwork::Artwork;
pub use preview_cache::{PreviewCache, PreviewStats, DEFAULT_PREVIEW_CAPACITY};
