// SPDX-License-Identifier: MPL-2.0
//! Photographs returned by the image provider.

use serde::{Deserialize, Serialize};

/// A photograph returned by the provider.
///
/// Images are immutable once received. The gallery owns the current result
/// set and replaces it wholesale on every search or page change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Provider-assigned identifier, unique within a result set.
    pub id: String,
    /// Small rendition used in the grid.
    pub preview_url: String,
    /// Full-resolution rendition used on the card.
    pub full_url: String,
    /// Alternative text. May be empty.
    pub description: String,
}

impl Image {
    pub fn new(
        id: impl Into<String>,
        preview_url: impl Into<String>,
        full_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            preview_url: preview_url.into(),
            full_url: full_url.into(),
            description: description.into(),
        }
    }

    /// Returns the description, or `None` when the provider sent nothing usable.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        let trimmed = self.description.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
