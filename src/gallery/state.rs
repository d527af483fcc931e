// SPDX-License-Identifier: MPL-2.0
use crate::domain::{Image, PageNumber, RequestToken, TotalPages};

/// Query text and paging position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    /// Raw search field content, as typed.
    pub query_text: String,
    pub current_page: PageNumber,
    pub total_pages: TotalPages,
    pub is_loading: bool,
}

impl SearchState {
    /// Returns the trimmed query, or `None` when the field is blank.
    #[must_use]
    pub fn active_query(&self) -> Option<&str> {
        let trimmed = self.query_text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// The image being composed and the name printed on the card.
///
/// `selected_image == None` means the composer overlay is closed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub selected_image: Option<Image>,
    pub display_name: String,
}

impl Selection {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected_image.is_some()
    }
}

/// Why the grid has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The provider answered with zero photographs.
    NoResults,
    /// The request failed.
    ProviderUnavailable,
    /// No access key is configured.
    NotConfigured,
}

/// What the grid area displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Ready(Vec<Image>),
    Empty(EmptyReason),
}

impl ViewState {
    /// Photographs currently displayed (empty unless [`ViewState::Ready`]).
    #[must_use]
    pub fn images(&self) -> &[Image] {
        match self {
            ViewState::Ready(images) => images,
            _ => &[],
        }
    }
}

/// Complete controller state.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub(super) search: SearchState,
    pub(super) view: ViewState,
    pub(super) selection: Selection,
    pub(super) latest_token: RequestToken,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Token of the most recently issued fetch.
    #[must_use]
    pub fn latest_token(&self) -> RequestToken {
        self.latest_token
    }

    /// Pagination is shown only for keyword searches spanning several pages.
    #[must_use]
    pub fn shows_pagination(&self) -> bool {
        self.search.active_query().is_some() && self.search.total_pages.value() > 1
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.search.active_query().is_some() && !self.search.current_page.is_first()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.search.active_query().is_some()
            && self
                .search
                .current_page
                .next_within(self.search.total_pages)
                .is_some()
    }
}
