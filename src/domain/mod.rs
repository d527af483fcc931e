// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with no I/O.
//!
//! This module contains the value objects shared by the provider client,
//! the gallery controller and the card renderer. It only depends on `serde`
//! derives so that every type can be constructed freely in tests.
//!
//! # Modules
//!
//! - [`image`]: Provider photographs ([`Image`](image::Image))
//! - [`search`]: Paging value objects ([`PageNumber`](search::PageNumber),
//!   [`TotalPages`](search::TotalPages), [`RequestToken`](search::RequestToken))

pub mod image;
pub mod search;

pub use image::Image;
pub use search::{PageNumber, RequestToken, SearchPage, TotalPages};
