// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: header, search and name fields, thumbnail grid, pagination.

use crate::domain::Image;
use crate::gallery::{EmptyReason, Event, State, ViewState};
use crate::i18n::fluent::I18n;
use crate::media::PreviewCache;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{AnimatedSpinner, PhotoGlyph};
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{
    button, text_input, Column, Container, Image as ImageWidget, Row, Scrollable, Space, Text,
};
use iced::widget::{text, Id};
use iced::{ContentFit, Element, Font, Length, Theme};

/// Identifier of the gallery scrollable, used to scroll back to the top.
pub const GALLERY_SCROLLABLE_ID: &str = "gallery-scrollable";

const CAPTION_HEIGHT: f32 = 44.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub previews: &'a PreviewCache,
    pub spinner_rotation: f32,
    pub window_width: f32,
}

/// Number of grid columns for a window `width` in logical pixels.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    if width < sizing::BREAKPOINT_SM {
        1
    } else if width < sizing::BREAKPOINT_LG {
        2
    } else if width < sizing::BREAKPOINT_XL {
        3
    } else {
        4
    }
}

/// Width available to the grid once the page padding is removed.
fn grid_width(window_width: f32) -> f32 {
    (window_width - 2.0 * spacing::LG)
        .min(sizing::GRID_MAX_WIDTH)
        .max(1.0)
}

/// Height of one thumbnail so it keeps a 4:3 frame at `columns` per row.
fn thumbnail_height(window_width: f32, columns: usize) -> f32 {
    let gaps = spacing::LG * columns.saturating_sub(1) as f32;
    let tile_width = (grid_width(window_width) - gaps) / columns.max(1) as f32;
    (tile_width / sizing::THUMBNAIL_ASPECT).max(1.0)
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Event> {
    let mut content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(header(ctx.i18n))
        .push(search_field(&ctx))
        .push(name_field(&ctx))
        .push(results(&ctx));

    if ctx.state.shows_pagination() {
        content = content.push(pagination(&ctx));
    }

    let page = Container::new(content.max_width(sizing::GRID_MAX_WIDTH))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::LG);

    Scrollable::new(page)
        .id(Id::new(GALLERY_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn header(i18n: &I18n) -> Element<'_, Event> {
    let title = Text::new(i18n.tr("app-title"))
        .size(typography::TITLE_XL)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });
    let subtitle = Text::new(i18n.tr("app-subtitle"))
        .size(typography::BODY_LG)
        .style(muted_text);

    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(title)
        .push(subtitle)
        .into()
}

fn search_field<'a>(ctx: &ViewContext<'a>) -> Element<'a, Event> {
    let placeholder = ctx.i18n.tr("gallery-search-placeholder");
    let input = text_input(&placeholder, &ctx.state.search().query_text)
        .on_input(Event::QueryChanged)
        .size(typography::BODY_LG)
        .padding(spacing::MD);

    Container::new(input)
        .max_width(sizing::SEARCH_WIDTH)
        .width(Length::Fill)
        .into()
}

fn name_field<'a>(ctx: &ViewContext<'a>) -> Element<'a, Event> {
    let placeholder = ctx.i18n.tr("gallery-name-placeholder");
    let label = Text::new(ctx.i18n.tr("gallery-name-label"))
        .size(typography::BODY)
        .font(Font {
            weight: Weight::Semibold,
            ..Font::default()
        });
    let input = text_input(&placeholder, &ctx.state.selection().display_name)
        .on_input(Event::DisplayNameChanged)
        .size(typography::BODY_LG)
        .padding(spacing::SM);

    Container::new(Column::new().spacing(spacing::XS).push(label).push(input))
        .max_width(sizing::NAME_WIDTH)
        .width(Length::Fill)
        .into()
}

fn results<'a>(ctx: &ViewContext<'a>) -> Element<'a, Event> {
    match ctx.state.view() {
        ViewState::Idle | ViewState::Loading => loading(ctx),
        ViewState::Empty(reason) => empty(ctx.i18n, *reason),
        ViewState::Ready(images) => grid(ctx, images),
    }
}

fn loading<'a>(ctx: &ViewContext<'a>) -> Element<'a, Event> {
    let spinner = AnimatedSpinner::new(palette::PRIMARY_500, ctx.spinner_rotation).into_element();
    let label = Text::new(ctx.i18n.tr("gallery-loading"))
        .size(typography::TITLE_SM)
        .style(muted_text);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(spinner)
            .push(label),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding(spacing::XXL)
    .into()
}

fn empty(i18n: &I18n, reason: EmptyReason) -> Element<'_, Event> {
    let key = match reason {
        EmptyReason::NoResults => "gallery-empty-no-results",
        EmptyReason::ProviderUnavailable => "gallery-empty-unavailable",
        EmptyReason::NotConfigured => "gallery-empty-not-configured",
    };

    let body = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(PhotoGlyph::new(palette::SLATE_400, sizing::ICON_XXL).into_element())
        .push(
            Text::new(i18n.tr(key))
                .size(typography::TITLE_SM)
                .center()
                .style(muted_text),
        );

    Container::new(body)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::XXL)
        .style(styles::container::panel)
        .into()
}

fn grid<'a>(ctx: &ViewContext<'a>, images: &'a [Image]) -> Element<'a, Event> {
    let columns = columns_for_width(ctx.window_width);
    let height = thumbnail_height(ctx.window_width, columns);

    let mut rows = Column::new().spacing(spacing::LG).width(Length::Fill);
    for chunk in images.chunks(columns) {
        let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);
        for image in chunk {
            row = row.push(thumbnail(ctx, image, height));
        }
        // Pad the last row so tiles keep the same width.
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }

    rows.into()
}

fn thumbnail<'a>(ctx: &ViewContext<'a>, image: &'a Image, height: f32) -> Element<'a, Event> {
    let picture: Element<'a, Event> = match ctx.previews.peek(&image.preview_url) {
        Some(handle) => ImageWidget::new(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into(),
        None => Container::new(
            AnimatedSpinner::new(palette::SLATE_400, ctx.spinner_rotation)
                .size(sizing::ICON_LG)
                .into_element(),
        )
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
    };

    let caption_text = match image.caption() {
        Some(caption) => caption.to_string(),
        None => ctx.i18n.tr("gallery-caption-placeholder"),
    };
    let caption = Container::new(
        Text::new(caption_text)
            .size(typography::CAPTION)
            .wrapping(text::Wrapping::WordOrGlyph),
    )
    .height(Length::Fixed(CAPTION_HEIGHT))
    .padding([spacing::XS, spacing::SM])
    .clip(true);

    button(Column::new().push(picture).push(caption))
        .on_press(Event::ImageSelected(image.clone()))
        .padding(0)
        .width(Length::FillPortion(1))
        .style(styles::button::thumbnail)
        .into()
}

fn pagination<'a>(ctx: &ViewContext<'a>) -> Element<'a, Event> {
    let search = ctx.state.search();
    let current = search.current_page.value().to_string();
    let total = search.total_pages.value().to_string();

    let previous = button(Text::new(ctx.i18n.tr("pagination-previous")).size(typography::BODY))
        .on_press_maybe(ctx.state.can_go_previous().then_some(Event::PreviousPage))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::secondary);

    let next = button(Text::new(ctx.i18n.tr("pagination-next")).size(typography::BODY))
        .on_press_maybe(ctx.state.can_go_next().then_some(Event::NextPage))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    let indicator = Container::new(
        Text::new(ctx.i18n.tr_with_args(
            "pagination-indicator",
            &[("current", current.as_str()), ("total", total.as_str())],
        ))
        .size(typography::BODY),
    )
    .padding([spacing::SM, spacing::MD])
    .style(styles::container::panel);

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(previous)
        .push(indicator)
        .push(next)
        .into()
}

fn muted_text(theme: &Theme) -> text::Style {
    let color = if theme.extended_palette().is_dark {
        palette::SLATE_400
    } else {
        palette::SLATE_600
    };
    text::Style { color: Some(color) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_breakpoints() {
        assert_eq!(columns_for_width(320.0), 1);
        assert_eq!(columns_for_width(639.0), 1);
        assert_eq!(columns_for_width(640.0), 2);
        assert_eq!(columns_for_width(1023.0), 2);
        assert_eq!(columns_for_width(1024.0), 3);
        assert_eq!(columns_for_width(1280.0), 4);
        assert_eq!(columns_for_width(3840.0), 4);
    }

    #[test]
    fn thumbnails_keep_four_by_three_frame() {
        // 1328 - 48 padding = 1280 grid, 3 gaps of 24 => 302 per tile.
        let height = thumbnail_height(1328.0, 4);
        assert!((height - 302.0 * 3.0 / 4.0).abs() < 0.01);
    }

    #[test]
    fn grid_never_exceeds_max_width() {
        assert_eq!(grid_width(5000.0), sizing::GRID_MAX_WIDTH);
        assert!(thumbnail_height(0.0, 1) >= 1.0);
    }
}
