// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::domain::search::MAX_PAGES;
use crate::domain::{Image, PageNumber, RequestToken, SearchPage, TotalPages};
use crate::error::{Error, ProviderError};

fn image(id: &str) -> Image {
    Image::new(
        id,
        format!("https://cdn/{id}-small"),
        format!("https://cdn/{id}-regular"),
        format!("photo {id}"),
    )
}

fn images(count: usize) -> Vec<Image> {
    (0..count).map(|i| image(&format!("img{i}"))).collect()
}

fn unavailable() -> Error {
    Error::Provider(ProviderError::Network("connection refused".into()))
}

fn search_token(effects: &[Effect]) -> RequestToken {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Search { token, .. } | Effect::FetchRandom { token } => Some(*token),
            _ => None,
        })
        .expect("a fetch effect")
}

/// Types `query` and answers the resulting search with `total_pages`.
fn searched(query: &str, total_pages: u32) -> State {
    let mut state = State::new();
    state.update(Event::Mounted);
    let effects = state.update(Event::QueryChanged(query.to_string()));
    let token = search_token(&effects);
    state.update(Event::SearchLoaded {
        token,
        result: Ok(SearchPage::new(images(4), total_pages)),
    });
    state
}

fn answer_search(state: &mut State, effects: &[Effect], total_pages: u32) {
    let token = search_token(effects);
    state.update(Event::SearchLoaded {
        token,
        result: Ok(SearchPage::new(images(4), total_pages)),
    });
}

// =============================================================================
// Mount / random sample
// =============================================================================

#[test]
fn mount_fetches_random_sample() {
    let mut state = State::new();
    let effects = state.update(Event::Mounted);

    assert_eq!(
        effects,
        vec![Effect::FetchRandom {
            token: state.latest_token()
        }]
    );
    assert!(state.search().is_loading);
    assert_eq!(state.view(), &ViewState::Loading);
}

#[test]
fn random_sample_becomes_ready_with_single_page() {
    let mut state = State::new();
    let token = search_token(&state.update(Event::Mounted));

    let effects = state.update(Event::RandomLoaded {
        token,
        result: Ok(images(4)),
    });

    assert_eq!(state.view().images().len(), 4);
    assert_eq!(state.search().total_pages, TotalPages::ONE);
    assert!(!state.search().is_loading);
    assert!(!state.shows_pagination());
    match effects.as_slice() {
        [Effect::LoadPreviews(urls)] => {
            assert_eq!(urls[0], "https://cdn/img0-small");
            assert_eq!(urls.len(), 4);
        }
        other => panic!("expected preview loading, got {:?}", other),
    }
}

#[test]
fn random_failure_shows_empty_view_without_propagating() {
    let mut state = State::new();
    let token = search_token(&state.update(Event::Mounted));

    let effects = state.update(Event::RandomLoaded {
        token,
        result: Err(unavailable()),
    });

    assert!(effects.is_empty());
    assert_eq!(
        state.view(),
        &ViewState::Empty(EmptyReason::ProviderUnavailable)
    );
    assert!(state.view().images().is_empty());
    assert!(!state.search().is_loading);
}

#[test]
fn missing_credentials_are_reported_distinctly() {
    let mut state = State::new();
    let token = search_token(&state.update(Event::Mounted));

    state.update(Event::RandomLoaded {
        token,
        result: Err(Error::Configuration("no key".into())),
    });

    assert_eq!(state.view(), &ViewState::Empty(EmptyReason::NotConfigured));
}

// =============================================================================
// Query handling
// =============================================================================

#[test]
fn setting_query_resets_page_before_fetching() {
    let mut state = searched("sunset", 12);
    let effects = state.update(Event::NextPage);
    answer_search(&mut state, &effects, 12);
    assert_eq!(state.search().current_page, PageNumber::new(2));

    for query in ["flowers", "a", "  nature  ", "sunset again"] {
        let effects = state.update(Event::QueryChanged(query.to_string()));
        assert_eq!(state.search().current_page, PageNumber::FIRST);
        match effects.as_slice() {
            [Effect::Search { page, query: sent, .. }] => {
                assert_eq!(*page, 1);
                assert_eq!(sent, query.trim());
            }
            other => panic!("expected a first-page search, got {:?}", other),
        }
        answer_search(&mut state, &effects, 3);
        let effects = state.update(Event::NextPage);
        answer_search(&mut state, &effects, 3);
    }
}

#[test]
fn identical_query_is_a_no_op() {
    let mut state = searched("sunset", 3);
    let token = state.latest_token();

    let effects = state.update(Event::QueryChanged("sunset".into()));

    assert!(effects.is_empty());
    assert_eq!(state.latest_token(), token);
}

#[test]
fn clearing_query_fetches_random_exactly_once_and_resets_pages() {
    let mut state = searched("sunset", 12);
    let effects = state.update(Event::NextPage);
    answer_search(&mut state, &effects, 12);
    let effects = state.update(Event::NextPage);
    answer_search(&mut state, &effects, 12);
    assert_eq!(state.search().current_page, PageNumber::new(3));

    let effects = state.update(Event::QueryChanged(String::new()));

    let random_fetches = effects
        .iter()
        .filter(|effect| matches!(effect, Effect::FetchRandom { .. }))
        .count();
    assert_eq!(random_fetches, 1);
    assert_eq!(effects.len(), 1);
    assert_eq!(state.search().total_pages, TotalPages::ONE);
    assert_eq!(state.search().current_page, PageNumber::FIRST);
}

#[test]
fn whitespace_query_counts_as_empty() {
    let mut state = State::new();
    state.update(Event::Mounted);

    let effects = state.update(Event::QueryChanged("   ".into()));

    assert!(effects.is_empty(), "still the same random sample");
    assert_eq!(state.search().query_text, "   ");
    assert_eq!(state.search().active_query(), None);

    let mut state = searched("sunset", 3);
    let effects = state.update(Event::QueryChanged("  ".into()));
    assert!(matches!(effects.as_slice(), [Effect::FetchRandom { .. }]));
}

#[test]
fn surrounding_whitespace_edits_keep_current_results() {
    let mut state = searched("sunset", 3);
    let effects = state.update(Event::NextPage);
    answer_search(&mut state, &effects, 3);
    let token = state.latest_token();

    for text in ["sunset ", " sunset ", "sunset"] {
        let effects = state.update(Event::QueryChanged(text.to_string()));
        assert!(effects.is_empty(), "{:?} refetched", text);
        assert_eq!(state.search().query_text, text);
    }

    assert_eq!(state.latest_token(), token);
    assert_eq!(state.search().current_page, PageNumber::new(2));
    assert_eq!(state.view().images().len(), 4);
}

// =============================================================================
// Paging
// =============================================================================

#[test]
fn total_pages_is_capped_at_five() {
    for reported in 1..=40 {
        let state = searched("sunset", reported);
        assert_eq!(
            state.search().total_pages.value(),
            reported.min(MAX_PAGES),
            "reported {}",
            reported
        );
    }
}

#[test]
fn zero_reported_pages_still_shows_one_page() {
    let mut state = State::new();
    state.update(Event::Mounted);
    let effects = state.update(Event::QueryChanged("zzzz".into()));
    let token = search_token(&effects);

    state.update(Event::SearchLoaded {
        token,
        result: Ok(SearchPage::new(Vec::new(), 0)),
    });

    assert_eq!(state.search().total_pages, TotalPages::ONE);
    assert_eq!(state.view(), &ViewState::Empty(EmptyReason::NoResults));
}

#[test]
fn previous_is_a_no_op_on_first_page() {
    let mut state = searched("sunset", 4);
    let token = state.latest_token();

    let effects = state.update(Event::PreviousPage);

    assert!(effects.is_empty());
    assert_eq!(state.search().current_page, PageNumber::FIRST);
    assert_eq!(state.latest_token(), token);
    assert!(!state.can_go_previous());
}

#[test]
fn sunset_scenario_stops_at_last_visible_page() {
    let mut state = searched("sunset", 12);
    assert_eq!(state.search().total_pages.value(), 5);
    assert!(state.shows_pagination());

    for _ in 0..5 {
        let effects = state.update(Event::NextPage);
        if !effects.is_empty() {
            answer_search(&mut state, &effects, 12);
        }
    }
    assert_eq!(state.search().current_page, PageNumber::new(5));
    assert!(!state.can_go_next());

    let effects = state.update(Event::NextPage);
    assert!(effects.is_empty());
    assert_eq!(state.search().current_page, PageNumber::new(5));
}

#[test]
fn navigation_scrolls_to_top_and_fetches_page() {
    let mut state = searched("sunset", 3);

    let effects = state.update(Event::NextPage);

    assert_eq!(effects[0], Effect::ScrollToTop);
    match &effects[1] {
        Effect::Search { query, page, .. } => {
            assert_eq!(query, "sunset");
            assert_eq!(*page, 2);
        }
        other => panic!("expected search, got {:?}", other),
    }

    let effects = state.update(Event::PreviousPage);
    assert_eq!(effects[0], Effect::ScrollToTop);
    assert_eq!(state.search().current_page, PageNumber::FIRST);
}

#[test]
fn paging_is_disabled_for_random_sample() {
    let mut state = State::new();
    let token = search_token(&state.update(Event::Mounted));
    state.update(Event::RandomLoaded {
        token,
        result: Ok(images(4)),
    });

    assert!(state.update(Event::NextPage).is_empty());
    assert!(state.update(Event::PreviousPage).is_empty());
}

#[test]
fn search_error_resets_to_single_empty_page() {
    let mut state = searched("sunset", 4);
    let effects = state.update(Event::NextPage);
    let token = search_token(&effects);

    state.update(Event::SearchLoaded {
        token,
        result: Err(unavailable()),
    });

    assert_eq!(
        state.view(),
        &ViewState::Empty(EmptyReason::ProviderUnavailable)
    );
    assert_eq!(state.search().total_pages, TotalPages::ONE);
    assert!(!state.shows_pagination());
}

/// Walks a 12-page "sunset" search forward to `page`, answering each fetch.
fn searched_to_page(page: u32) -> State {
    let mut state = searched("sunset", 12);
    for _ in 1..page {
        let effects = state.update(Event::NextPage);
        answer_search(&mut state, &effects, 12);
    }
    assert_eq!(state.search().current_page, PageNumber::new(page));
    state
}

fn assert_page_within_total(state: &State) {
    let search = state.search();
    assert!(
        search.current_page.value() <= search.total_pages.value(),
        "page {} of {}",
        search.current_page,
        search.total_pages
    );
}

#[test]
fn failed_page_fetch_keeps_page_within_total() {
    let mut state = searched_to_page(3);
    let effects = state.update(Event::NextPage);
    assert_eq!(state.search().current_page, PageNumber::new(4));

    state.update(Event::SearchLoaded {
        token: search_token(&effects),
        result: Err(unavailable()),
    });

    assert_page_within_total(&state);
    assert_eq!(state.search().current_page, PageNumber::FIRST);
    assert!(state.update(Event::PreviousPage).is_empty());
    assert!(state.update(Event::NextPage).is_empty());
}

#[test]
fn shrinking_page_count_moves_to_last_page() {
    let mut state = searched_to_page(3);
    let effects = state.update(Event::NextPage);

    state.update(Event::SearchLoaded {
        token: search_token(&effects),
        result: Ok(SearchPage::new(images(4), 2)),
    });

    assert_page_within_total(&state);
    assert_eq!(state.search().current_page, PageNumber::new(2));
    assert!(!state.can_go_next());

    match state.update(Event::PreviousPage).as_slice() {
        [Effect::ScrollToTop, Effect::Search { page: 1, .. }] => {}
        other => panic!("expected a page 1 search, got {:?}", other),
    }
}

// =============================================================================
// Stale responses
// =============================================================================

#[test]
fn stale_response_never_overwrites_newer_state() {
    let mut state = State::new();
    state.update(Event::Mounted);
    let first = search_token(&state.update(Event::QueryChanged("cats".into())));
    let second = search_token(&state.update(Event::QueryChanged("dogs".into())));
    assert!(second > first);

    state.update(Event::SearchLoaded {
        token: second,
        result: Ok(SearchPage::new(vec![image("dog")], 2)),
    });
    let effects = state.update(Event::SearchLoaded {
        token: first,
        result: Ok(SearchPage::new(vec![image("cat")], 5)),
    });

    assert!(effects.is_empty());
    assert_eq!(state.view().images()[0].id, "dog");
    assert_eq!(state.search().total_pages.value(), 2);
}

#[test]
fn stale_random_sample_is_discarded_after_search() {
    let mut state = State::new();
    let random = search_token(&state.update(Event::Mounted));
    state.update(Event::QueryChanged("sunset".into()));

    state.update(Event::RandomLoaded {
        token: random,
        result: Ok(images(4)),
    });

    assert_eq!(state.view(), &ViewState::Loading);
    assert!(state.search().is_loading);
}

// =============================================================================
// Selection and export
// =============================================================================

#[test]
fn selecting_image_opens_overlay_with_full_resolution_artwork() {
    let mut state = searched("sunset", 1);
    let picked = Image::new("x", "https://cdn/x-small", "https://cdn/x-regular", "");

    let effects = state.update(Event::ImageSelected(picked.clone()));

    assert_eq!(
        effects,
        vec![Effect::LoadArtwork {
            url: "https://cdn/x-regular".into()
        }]
    );
    assert_eq!(state.selection().selected_image.as_ref(), Some(&picked));
    assert_eq!(picked.caption(), None);
}

#[test]
fn closing_overlay_clears_selection_but_keeps_name() {
    let mut state = searched("sunset", 1);
    state.update(Event::DisplayNameChanged("Ada".into()));
    state.update(Event::ImageSelected(image("x")));

    state.update(Event::OverlayClosed);

    assert!(!state.selection().is_open());
    assert_eq!(state.selection().display_name, "Ada");
}

#[test]
fn new_fetch_invalidates_selection() {
    let mut state = searched("sunset", 3);
    state.update(Event::ImageSelected(image("x")));

    state.update(Event::NextPage);

    assert!(!state.selection().is_open());
}

#[test]
fn export_uses_display_name_or_default() {
    let mut state = searched("sunset", 1);
    state.update(Event::ImageSelected(image("x")));

    assert_eq!(
        state.update(Event::ExportRequested),
        vec![Effect::Export {
            file_name: "thank-you.png".into()
        }]
    );

    state.update(Event::DisplayNameChanged("Ada".into()));
    assert_eq!(
        state.update(Event::ExportRequested),
        vec![Effect::Export {
            file_name: "Ada.png".into()
        }]
    );
}

#[test]
fn export_without_selection_is_ignored() {
    let mut state = searched("sunset", 1);
    assert!(state.update(Event::ExportRequested).is_empty());
}

#[test]
fn reduce_matches_in_place_update() {
    let (state, effects) = reduce(State::new(), Event::QueryChanged("sea".into()));

    assert_eq!(state.search().query_text, "sea");
    assert!(matches!(effects.as_slice(), [Effect::Search { page: 1, .. }]));
}
