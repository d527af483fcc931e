// SPDX-License-Identifier: MPL-2.0
//! Thank-you card composition.
//!
//! [`layout`] turns the current selection into a [`CardLayout`] in logical
//! card units. The on-screen composer and the exported bitmap are both drawn
//! from that layout: the composer with iced widgets, the export through the
//! SVG document built by [`svg::document`].

pub mod layout;
pub mod svg;

pub use layout::{
    layout, name_or_placeholder, CardLayout, Rect, TextBlock, CARD_ELEMENT_ID, CARD_HEIGHT,
    CARD_WIDTH, HEADLINE, NAME_PLACEHOLDER,
};
pub use svg::CardDocument;
