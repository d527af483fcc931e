// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the gallery and the composer.

pub mod button;
pub mod container;
