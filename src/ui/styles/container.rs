// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{gradient, Background, Border, Color, Radians, Theme};

/// Raised surface for the empty state and the page indicator.
pub fn panel(theme: &Theme) -> container::Style {
    let light = !theme.extended_palette().is_dark;
    container::Style {
        background: Some(Background::Color(if light {
            palette::WHITE
        } else {
            palette::SLATE_800
        })),
        border: Border {
            color: if light {
                palette::SLATE_200
            } else {
                palette::SLATE_700
            },
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Dimmed backdrop behind the composer.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Slate gradient behind the card artwork, matching the exported bitmap.
pub fn card(_theme: &Theme) -> container::Style {
    let background = gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_4 * 3.0))
        .add_stop(0.0, palette::SLATE_900)
        .add_stop(0.5, palette::SLATE_800)
        .add_stop(1.0, palette::SLATE_900);

    container::Style {
        background: Some(Background::Gradient(background.into())),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Rounded clip around the card artwork.
pub fn artwork_frame(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
