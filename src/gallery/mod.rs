// SPDX-License-Identifier: MPL-2.0
//! Gallery and composer controller.
//!
//! The controller owns every piece of user-facing state (query, paging,
//! results, selection, display name) and is driven by [`Event`]s. It performs
//! no I/O: each transition returns the [`Effect`]s the application shell must
//! run, and provider responses come back as events tagged with the
//! [`RequestToken`](crate::domain::RequestToken) they were issued with.

mod effect;
mod event;
mod state;
mod update;

#[cfg(test)]
mod tests;

pub use effect::Effect;
pub use event::Event;
pub use state::{EmptyReason, SearchState, Selection, State, ViewState};
pub use update::reduce;
