// SPDX-License-Identifier: MPL-2.0
//! `iced_cardmaker` builds thank-you cards from Unsplash photographs with the
//! Iced GUI framework.
//!
//! Photographs are searched through the [`provider`], browsed and selected in
//! the [`gallery`] controller, composed by [`card`] and saved as PNG by
//! [`export`].

#![doc(html_root_url = "https://docs.rs/iced_cardmaker/0.1.0")]

pub mod app;
pub mod card;
pub mod domain;
pub mod error;
pub mod export;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod media;
pub mod provider;
pub mod ui;
