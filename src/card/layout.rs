// SPDX-License-Identifier: MPL-2.0
//! Card geometry in logical units.

use crate::gallery::Selection;

/// Identifier of the card render target.
pub const CARD_ELEMENT_ID: &str = "card-design";

/// Card width in logical units (4:5 portrait).
pub const CARD_WIDTH: f32 = 500.0;

/// Card height in logical units.
pub const CARD_HEIGHT: f32 = 625.0;

/// Greeting printed at the top of every card.
pub const HEADLINE: &str = "Thank You!";

/// Printed when the user has not entered a name.
pub const NAME_PLACEHOLDER: &str = "Your Name";

const CARD_RADIUS: f32 = 24.0;
const CARD_PADDING: f32 = 40.0;
const IMAGE_RADIUS: f32 = 16.0;
/// Space kept free between the artwork and the bottom padding.
const IMAGE_BOTTOM_GAP: f32 = 24.0;
/// Artwork frame width over height (4:5 portrait).
const IMAGE_ASPECT: f32 = 4.0 / 5.0;

const HEADLINE_SIZE: f32 = 36.0;
const HEADLINE_BASELINE: f32 = 96.0;
const NAME_SIZE: f32 = 30.0;
/// Distance from the card bottom to the name baseline.
const NAME_BOTTOM_OFFSET: f32 = 98.0;

const _: () = {
    assert!(CARD_WIDTH * 5.0 == CARD_HEIGHT * 4.0);
    assert!(CARD_PADDING * 2.0 < CARD_WIDTH);
    assert!((CARD_HEIGHT - 2.0 * CARD_PADDING - IMAGE_BOTTOM_GAP) * IMAGE_ASPECT
        <= CARD_WIDTH - 2.0 * CARD_PADDING);
    assert!(NAME_BOTTOM_OFFSET < CARD_HEIGHT - HEADLINE_BASELINE);
};

/// Axis-aligned rectangle in card units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One horizontally centered line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub center_x: f32,
    pub baseline_y: f32,
    pub font_size: f32,
    /// CSS font weight (400 regular, 600 semibold, 700 bold).
    pub weight: u16,
}

impl TextBlock {
    /// Top edge of the line box, for widget placement.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.baseline_y - self.font_size
    }
}

/// Everything needed to draw one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    /// Full-resolution artwork, drawn cover-fit inside `image_frame`.
    pub image_url: String,
    pub image_frame: Rect,
    pub image_radius: f32,
    pub headline: TextBlock,
    pub name: TextBlock,
}

/// Returns the name to print, falling back to [`NAME_PLACEHOLDER`].
#[must_use]
pub fn name_or_placeholder(display_name: &str) -> &str {
    let trimmed = display_name.trim();
    if trimmed.is_empty() {
        NAME_PLACEHOLDER
    } else {
        trimmed
    }
}

/// Lays out the card for `selection`, or `None` when nothing is selected.
#[must_use]
pub fn layout(selection: &Selection) -> Option<CardLayout> {
    let image = selection.selected_image.as_ref()?;
    let center_x = CARD_WIDTH / 2.0;
    let frame_height = CARD_HEIGHT - 2.0 * CARD_PADDING - IMAGE_BOTTOM_GAP;
    let frame_width = frame_height * IMAGE_ASPECT;

    Some(CardLayout {
        width: CARD_WIDTH,
        height: CARD_HEIGHT,
        corner_radius: CARD_RADIUS,
        image_url: image.full_url.clone(),
        image_frame: Rect {
            x: center_x - frame_width / 2.0,
            y: CARD_PADDING,
            width: frame_width,
            height: frame_height,
        },
        image_radius: IMAGE_RADIUS,
        headline: TextBlock {
            text: HEADLINE.to_string(),
            center_x,
            baseline_y: HEADLINE_BASELINE,
            font_size: HEADLINE_SIZE,
            weight: 700,
        },
        name: TextBlock {
            text: name_or_placeholder(&selection.display_name).to_string(),
            center_x,
            baseline_y: CARD_HEIGHT - NAME_BOTTOM_OFFSET,
            font_size: NAME_SIZE,
            weight: 600,
        },
    })
}
