// SPDX-License-Identifier: MPL-2.0
//! Search paging value objects.
//!
//! These wrappers keep page arithmetic inside valid bounds so the gallery
//! controller never has to clamp by hand.

mod newtypes;

pub use newtypes::{PageNumber, RequestToken, TotalPages};

use super::Image;

/// Number of photographs requested per search page.
pub const PAGE_SIZE: u32 = 4;

/// Number of photographs requested for the random sample.
pub const RANDOM_SAMPLE_SIZE: u32 = 4;

/// Highest page count ever shown to the user, whatever the provider reports.
pub const MAX_PAGES: u32 = 5;

/// One page of keyword search results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPage {
    pub results: Vec<Image>,
    /// Page count as reported by the provider (uncapped).
    pub total_pages: u32,
}

impl SearchPage {
    #[must_use]
    pub fn new(results: Vec<Image>, total_pages: u32) -> Self {
        Self {
            results,
            total_pages,
        }
    }
}
