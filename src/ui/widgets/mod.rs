// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod photo_glyph;

pub use animated_spinner::AnimatedSpinner;
pub use photo_glyph::PhotoGlyph;
