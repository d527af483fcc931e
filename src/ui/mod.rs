// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views are pure functions of controller state, following the Elm-style
//! "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Search field, name field, thumbnail grid and pagination
//! - [`composer`] - Card preview overlay with Cancel and Download actions
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Canvas widgets (spinner, empty-state glyph)
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod composer;
pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
