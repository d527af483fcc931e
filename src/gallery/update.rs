// SPDX-License-Identifier: MPL-2.0
//! State transitions.

use super::{EmptyReason, Effect, Event, SearchState, State, ViewState};
use crate::domain::{Image, PageNumber, RequestToken, SearchPage, TotalPages};
use crate::error::Error;
use crate::export::export_file_name;

/// Applies `event` to `state`, returning the new state and the effects to run.
#[must_use]
pub fn reduce(mut state: State, event: Event) -> (State, Vec<Effect>) {
    let effects = state.update(event);
    (state, effects)
}

impl State {
    /// Applies `event` in place and returns the effects to run.
    pub fn update(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Mounted => self.begin_fetch(),
            Event::QueryChanged(text) => self.set_query(text),
            Event::NextPage => {
                let Some(page) = self.navigable().and_then(|search| {
                    search.current_page.next_within(search.total_pages)
                }) else {
                    return Vec::new();
                };
                self.go_to_page(page)
            }
            Event::PreviousPage => {
                let Some(page) = self
                    .navigable()
                    .and_then(|search| search.current_page.previous())
                else {
                    return Vec::new();
                };
                self.go_to_page(page)
            }
            Event::RandomLoaded { token, result } => {
                if !self.accepts(token) {
                    return Vec::new();
                }
                self.set_total_pages(TotalPages::ONE);
                match result {
                    Ok(images) => self.show(images),
                    Err(err) => self.fail(&err),
                }
            }
            Event::SearchLoaded { token, result } => {
                if !self.accepts(token) {
                    return Vec::new();
                }
                match result {
                    Ok(SearchPage {
                        results,
                        total_pages,
                    }) => {
                        self.set_total_pages(TotalPages::from_provider(total_pages));
                        self.show(results)
                    }
                    Err(err) => {
                        self.set_total_pages(TotalPages::ONE);
                        self.fail(&err)
                    }
                }
            }
            Event::ImageSelected(image) => {
                let url = image.full_url.clone();
                self.selection.selected_image = Some(image);
                vec![Effect::LoadArtwork { url }]
            }
            Event::OverlayClosed => {
                self.selection.selected_image = None;
                Vec::new()
            }
            Event::DisplayNameChanged(name) => {
                self.selection.display_name = name;
                Vec::new()
            }
            Event::ExportRequested => {
                if !self.selection.is_open() {
                    return Vec::new();
                }
                vec![Effect::Export {
                    file_name: export_file_name(&self.selection.display_name),
                }]
            }
        }
    }

    /// Stores the raw text; only a change of the trimmed query refetches.
    fn set_query(&mut self, text: String) -> Vec<Effect> {
        let previous = self.search.active_query().map(str::to_owned);
        self.search.query_text = text;
        if self.search.active_query() == previous.as_deref() {
            return Vec::new();
        }
        self.search.current_page = PageNumber::FIRST;
        self.begin_fetch()
    }

    /// Paging is only possible for an active keyword search.
    fn navigable(&self) -> Option<&SearchState> {
        self.search.active_query().map(|_| &self.search)
    }

    fn go_to_page(&mut self, page: PageNumber) -> Vec<Effect> {
        self.search.current_page = page;
        let mut effects = vec![Effect::ScrollToTop];
        effects.extend(self.begin_fetch());
        effects
    }

    /// Issues the fetch matching the current query and page.
    fn begin_fetch(&mut self) -> Vec<Effect> {
        self.latest_token = self.latest_token.next();
        let token = self.latest_token;

        self.search.is_loading = true;
        self.view = ViewState::Loading;
        self.selection.selected_image = None;

        let effect = match self.search.active_query() {
            Some(query) => Effect::Search {
                token,
                query: query.to_string(),
                page: self.search.current_page.value(),
            },
            None => {
                self.set_total_pages(TotalPages::ONE);
                Effect::FetchRandom { token }
            }
        };
        tracing::debug!(
            %token,
            query = self.search.active_query().unwrap_or_default(),
            page = self.search.current_page.value(),
            "fetch issued"
        );
        vec![effect]
    }

    /// Replaces the page count, pulling the current page back inside it.
    fn set_total_pages(&mut self, total: TotalPages) {
        self.search.total_pages = total;
        if !total.contains(self.search.current_page) {
            tracing::debug!(
                page = self.search.current_page.value(),
                %total,
                "current page no longer exists"
            );
            self.search.current_page = PageNumber::new(total.value());
        }
    }

    fn accepts(&self, token: RequestToken) -> bool {
        if token == self.latest_token {
            return true;
        }
        tracing::debug!(%token, latest = %self.latest_token, "discarding stale response");
        false
    }

    fn show(&mut self, images: Vec<Image>) -> Vec<Effect> {
        self.search.is_loading = false;
        if images.is_empty() {
            self.view = ViewState::Empty(EmptyReason::NoResults);
            return Vec::new();
        }

        let urls = images.iter().map(|image| image.preview_url.clone()).collect();
        self.view = ViewState::Ready(images);
        vec![Effect::LoadPreviews(urls)]
    }

    fn fail(&mut self, err: &Error) -> Vec<Effect> {
        self.search.is_loading = false;
        let reason = match err {
            Error::Configuration(_) => EmptyReason::NotConfigured,
            _ => EmptyReason::ProviderUnavailable,
        };
        tracing::warn!(error = %err, ?reason, "image fetch failed");
        self.view = ViewState::Empty(reason);
        Vec::new()
    }
}
