// SPDX-License-Identifier: MPL-2.0
//! Composer overlay: the card preview above a dimmed backdrop.
//!
//! The preview is drawn from the same [`CardLayout`] the exported bitmap is
//! rendered from, scaled to fit the window.

use crate::card::{self, CardLayout, TextBlock};
use crate::gallery::{Event, Selection};
use crate::i18n::fluent::I18n;
use crate::media::Artwork;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{button, opaque, Column, Container, Image, Row, Stack, Text};
use iced::{ContentFit, Element, Font, Length, Padding, Size};

/// Vertical space reserved for the close button and the action row.
const CHROME_HEIGHT: f32 = 180.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selection: &'a Selection,
    /// Artwork for the selected image, once downloaded.
    pub artwork: Option<&'a Artwork>,
    pub spinner_rotation: f32,
    pub window: Size,
}

/// Scale factor applied to card units so the preview fits `window`.
#[must_use]
pub fn preview_scale(window: Size) -> f32 {
    let by_width = window.width - 2.0 * spacing::MD;
    let by_height = (window.height - CHROME_HEIGHT) * card::CARD_WIDTH / card::CARD_HEIGHT;
    let width = by_width
        .min(by_height)
        .clamp(sizing::CARD_PREVIEW_MIN_WIDTH, sizing::CARD_PREVIEW_MAX_WIDTH);
    width / card::CARD_WIDTH
}

/// Renders the overlay, or `None` when nothing is selected.
pub fn view(ctx: ViewContext<'_>) -> Option<Element<'_, Event>> {
    let layout = card::layout(ctx.selection)?;
    let scale = preview_scale(ctx.window);

    let close = button(
        Text::new("✕")
            .size(typography::TITLE_SM)
            .center()
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(Event::OverlayClosed)
    .width(Length::Fixed(sizing::CLOSE_BUTTON))
    .height(Length::Fixed(sizing::CLOSE_BUTTON))
    .style(styles::button::close);

    let cancel = button(Text::new(ctx.i18n.tr("composer-cancel")).size(typography::BODY_LG))
        .on_press(Event::OverlayClosed)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::ghost);

    // Export needs the artwork embedded, so downloading waits for it.
    let download = button(Text::new(ctx.i18n.tr("composer-download")).size(typography::BODY_LG))
        .on_press_maybe(
            ctx.artwork
                .filter(|artwork| artwork.url == layout.image_url)
                .map(|_| Event::ExportRequested),
        )
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    let card_width = layout.width * scale;
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            Container::new(close)
                .width(Length::Fixed(card_width))
                .align_x(Horizontal::Right),
        )
        .push(card_preview(&ctx, &layout, scale))
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(cancel)
                .push(download),
        );

    let backdrop = Container::new(opaque(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::MD)
        .style(styles::container::backdrop);

    Some(opaque(backdrop))
}

fn card_preview<'a>(ctx: &ViewContext<'a>, layout: &CardLayout, scale: f32) -> Element<'a, Event> {
    let frame = layout.image_frame;
    let frame_width = frame.width * scale;
    let frame_height = frame.height * scale;

    let artwork: Element<'a, Event> = match ctx.artwork {
        Some(artwork) if artwork.url == layout.image_url => Image::new(artwork.handle().clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(frame_width))
            .height(Length::Fixed(frame_height))
            .into(),
        _ => Container::new(
            Column::new()
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(AnimatedSpinner::new(palette::WHITE, ctx.spinner_rotation).into_element())
                .push(
                    Text::new(ctx.i18n.tr("composer-loading-artwork"))
                        .size(typography::BODY)
                        .color(palette::SLATE_300),
                ),
        )
        .width(Length::Fixed(frame_width))
        .height(Length::Fixed(frame_height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
    };

    let artwork_layer = Container::new(
        Container::new(artwork)
            .style(styles::container::artwork_frame)
            .clip(true),
    )
    .padding(Padding {
        top: frame.y * scale,
        left: frame.x * scale,
        ..Padding::ZERO
    });

    let width = layout.width * scale;
    let height = layout.height * scale;

    Container::new(
        Stack::new()
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .push(artwork_layer)
            .push(text_layer(&layout.headline, scale, width))
            .push(text_layer(&layout.name, scale, width)),
    )
    .width(Length::Fixed(width))
    .height(Length::Fixed(height))
    .style(styles::container::card)
    .into()
}

/// One centered line of card text placed at its layout position.
fn text_layer<'a>(block: &TextBlock, scale: f32, card_width: f32) -> Element<'a, Event> {
    let weight = if block.weight >= 700 {
        Weight::Bold
    } else {
        Weight::Semibold
    };

    Container::new(
        Text::new(block.text.clone())
            .size(block.font_size * scale)
            .color(palette::WHITE)
            .font(Font {
                weight,
                ..Font::default()
            }),
    )
    .width(Length::Fixed(card_width))
    .align_x(Horizontal::Center)
    .padding(Padding {
        top: block.top() * scale,
        ..Padding::ZERO
    })
    .into()
}
