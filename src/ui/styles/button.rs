// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn is_light(theme: &Theme) -> bool {
    !theme.extended_palette().is_dark
}

/// Main call to action (Next, Download Card).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_600,
        button::Status::Pressed => palette::PRIMARY_700,
        button::Status::Active => palette::PRIMARY_500,
        button::Status::Disabled => Color {
            a: opacity::DISABLED,
            ..palette::PRIMARY_500
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: background,
            width: 0.0,
            radius: radius::MD.into(),
        },
        shadow: if status == button::Status::Disabled {
            shadow::NONE
        } else {
            shadow::SM
        },
        snap: true,
    }
}

/// Outlined secondary action (Previous).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let (surface, text, border) = if is_light(theme) {
        (WHITE, palette::SLATE_700, palette::SLATE_200)
    } else {
        (palette::SLATE_800, palette::SLATE_100, palette::SLATE_600)
    };

    let (background, border_color, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            let hover = if is_light(theme) {
                palette::SLATE_50
            } else {
                palette::SLATE_700
            };
            (hover, palette::SLATE_300, text)
        }
        button::Status::Active => (surface, border, text),
        button::Status::Disabled => (
            surface,
            border,
            Color {
                a: opacity::DISABLED,
                ..text
            },
        ),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Translucent button on the dark composer backdrop (Cancel).
pub fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::GHOST_HOVER,
        _ => opacity::GHOST,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round white close button above the card.
pub fn close(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::SLATE_100,
        _ => WHITE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::SLATE_800,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        snap: true,
    }
}

/// Clickable grid thumbnail.
pub fn thumbnail(theme: &Theme, status: button::Status) -> button::Style {
    let surface = if is_light(theme) {
        WHITE
    } else {
        palette::SLATE_800
    };
    let (border_color, card_shadow) = match status {
        button::Status::Hovered | button::Status::Pressed => (palette::PRIMARY_500, shadow::LG),
        _ => (Color::TRANSPARENT, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(surface)),
        text_color: if is_light(theme) {
            palette::SLATE_700
        } else {
            palette::SLATE_100
        },
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::LG.into(),
        },
        shadow: card_shadow,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn disabled_primary_is_faded() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        match style.background {
            Some(Background::Color(bg)) => assert!(bg.a < 1.0),
            other => panic!("Expected background color, got {:?}", other),
        }
    }

    #[test]
    fn ghost_button_alpha_changes_on_hover() {
        let normal = ghost(&Theme::Dark, button::Status::Active);
        let hover = ghost(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn thumbnail_highlights_on_hover() {
        let hover = thumbnail(&Theme::Light, button::Status::Hovered);
        assert_eq!(hover.border.color, palette::PRIMARY_500);
    }
}
