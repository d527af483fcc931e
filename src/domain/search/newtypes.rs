// SPDX-License-Identifier: MPL-2.0
//! Paging newtypes.

use super::MAX_PAGES;

// =============================================================================
// PageNumber
// =============================================================================

/// One-based page index, never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: Self = Self(1);

    /// Creates a page number, raising 0 to 1.
    #[must_use]
    pub fn new(page: u32) -> Self {
        Self(page.max(1))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self.0 == 1
    }

    /// Returns the following page if it does not exceed `total`.
    #[must_use]
    pub fn next_within(self, total: TotalPages) -> Option<Self> {
        (self.0 < total.value()).then(|| Self(self.0 + 1))
    }

    /// Returns the preceding page, or `None` on the first page.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        (self.0 > 1).then(|| Self(self.0 - 1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for PageNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// TotalPages
// =============================================================================

/// Page count shown to the user, always within `1..=MAX_PAGES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TotalPages(u32);

impl TotalPages {
    pub const ONE: Self = Self(1);

    /// Caps a provider-reported page count.
    #[must_use]
    pub fn from_provider(reported: u32) -> Self {
        Self(reported.clamp(1, MAX_PAGES))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn contains(self, page: PageNumber) -> bool {
        page.value() <= self.0
    }
}

impl Default for TotalPages {
    fn default() -> Self {
        Self::ONE
    }
}

impl std::fmt::Display for TotalPages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// RequestToken
// =============================================================================

/// Sequence number attached to every provider request.
///
/// Only the response carrying the most recently issued token is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Returns the token that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_number_never_drops_below_one() {
        assert_eq!(PageNumber::new(0).value(), 1);
        assert_eq!(PageNumber::FIRST.previous(), None);
    }

    #[test]
    fn total_pages_is_capped_for_every_reported_value() {
        for reported in 1..=50 {
            assert_eq!(
                TotalPages::from_provider(reported).value(),
                reported.min(MAX_PAGES)
            );
        }
    }

    #[test]
    fn total_pages_zero_becomes_one() {
        assert_eq!(TotalPages::from_provider(0), TotalPages::ONE);
    }

    #[test]
    fn next_stops_at_total() {
        let total = TotalPages::from_provider(2);
        let second = PageNumber::FIRST.next_within(total).expect("page 2 exists");
        assert_eq!(second.value(), 2);
        assert_eq!(second.next_within(total), None);
    }

    #[test]
    fn request_tokens_increase() {
        let first = RequestToken::default();
        assert!(first.next() > first);
    }
}
