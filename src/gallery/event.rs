// SPDX-License-Identifier: MPL-2.0
use crate::domain::{Image, RequestToken, SearchPage};
use crate::error::Error;

/// Inputs to the gallery controller.
#[derive(Debug, Clone)]
pub enum Event {
    /// The gallery became visible.
    Mounted,
    /// The search field content changed.
    QueryChanged(String),
    NextPage,
    PreviousPage,
    /// Answer to [`super::Effect::FetchRandom`].
    RandomLoaded {
        token: RequestToken,
        result: Result<Vec<Image>, Error>,
    },
    /// Answer to [`super::Effect::Search`].
    SearchLoaded {
        token: RequestToken,
        result: Result<SearchPage, Error>,
    },
    ImageSelected(Image),
    OverlayClosed,
    DisplayNameChanged(String),
    ExportRequested,
}
