// SPDX-License-Identifier: MPL-2.0
use super::*;
use crate::domain::Image;
use crate::export::RenderTargets;
use crate::gallery::{EmptyReason, Event, ViewState};
use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::PathBuf;

fn sample_image(id: &str) -> Image {
    Image::new(
        id,
        format!("https://cdn.test/{id}-small"),
        format!("https://cdn.test/{id}-regular"),
        "",
    )
}

fn png_bytes() -> Vec<u8> {
    let img = RgbaImage::from_pixel(4, 4, Rgba([200, 120, 40, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).expect("encode png");
    out.into_inner()
}

fn artwork_for(image: &Image) -> Artwork {
    Artwork::from_download(image.full_url.clone(), png_bytes()).expect("decode artwork")
}

/// App with `image` shown in the grid and selected.
fn app_with_selection(image: &Image) -> App {
    let mut app = App::default();
    let _ = app.update(Message::Gallery(Event::Mounted));
    let token = app.gallery.latest_token();
    let _ = app.update(Message::Gallery(Event::RandomLoaded {
        token,
        result: Ok(vec![image.clone()]),
    }));
    let _ = app.update(Message::Gallery(Event::ImageSelected(image.clone())));
    app
}

#[test]
fn unconfigured_provider_ends_in_not_configured_state() {
    let mut app = App::default();
    let _ = app.update(Message::Gallery(Event::Mounted));
    assert_eq!(app.gallery.view(), &ViewState::Loading);

    let token = app.gallery.latest_token();
    let err = app.provider.as_ref().err().cloned().expect("default has no provider");
    let _ = app.update(Message::Gallery(Event::RandomLoaded {
        token,
        result: Err(err),
    }));

    assert_eq!(
        app.gallery.view(),
        &ViewState::Empty(EmptyReason::NotConfigured)
    );
}

#[test]
fn boot_reports_config_warning_and_missing_provider() {
    let flags = Flags {
        config_warning: Some("notification-config-load-error".to_string()),
        ..Flags::default()
    };
    let (app, _task) = App::boot(
        flags,
        Err(Error::Configuration("no key".to_string())),
    );

    assert_eq!(app.notifications.visible_count(), 2);
    assert_eq!(app.gallery.view(), &ViewState::Loading);
}

#[test]
fn artwork_for_selected_image_enables_export_target() {
    let image = sample_image("a");
    let mut app = app_with_selection(&image);
    assert!(app.is_animating(), "spinner runs while artwork downloads");
    assert!(app.render_targets().locate(CARD_ELEMENT_ID).is_none());

    let _ = app.update(Message::ArtworkLoaded {
        url: image.full_url.clone(),
        result: Ok(artwork_for(&image)),
    });

    assert!(app.artwork_ready());
    let document = app
        .render_targets()
        .locate(CARD_ELEMENT_ID)
        .expect("card should be renderable");
    assert!(document.svg.contains("Thank You!"));
    assert!(document.svg.contains("Your Name"));
}

#[test]
fn stale_artwork_is_discarded() {
    let first = sample_image("a");
    let second = sample_image("b");
    let mut app = app_with_selection(&second);

    let _ = app.update(Message::ArtworkLoaded {
        url: first.full_url.clone(),
        result: Ok(artwork_for(&first)),
    });

    assert!(app.artwork.is_none());
    assert!(!app.artwork_ready());
}

#[test]
fn closing_the_overlay_drops_artwork() {
    let image = sample_image("a");
    let mut app = app_with_selection(&image);
    let _ = app.update(Message::ArtworkLoaded {
        url: image.full_url.clone(),
        result: Ok(artwork_for(&image)),
    });

    let _ = app.update(Message::Gallery(Event::OverlayClosed));

    assert!(app.artwork.is_none());
    assert!(app.render_targets().locate(CARD_ELEMENT_ID).is_none());
}

#[test]
fn artwork_failure_shows_warning() {
    let image = sample_image("a");
    let mut app = app_with_selection(&image);

    let _ = app.update(Message::ArtworkLoaded {
        url: image.full_url.clone(),
        result: Err(Error::Io("connection reset".to_string())),
    });

    assert_eq!(app.notifications.visible_count(), 1);
    assert!(app.artwork.is_none());
}

#[test]
fn missing_render_target_is_silent() {
    let mut app = App::default();
    let _ = app.update(Message::ExportFinished(Err(Error::RenderTargetMissing(
        CARD_ELEMENT_ID.to_string(),
    ))));
    let _ = app.update(Message::ExportFinished(Ok(None)));

    assert!(!app.notifications.has_notifications());
}

#[test]
fn export_outcomes_are_reported() {
    let mut app = App::default();
    let _ = app.update(Message::ExportFinished(Ok(Some(PathBuf::from(
        "/tmp/Ada.png",
    )))));
    let _ = app.update(Message::ExportFinished(Err(Error::Io(
        "permission denied".to_string(),
    ))));

    assert_eq!(app.notifications.visible_count(), 2);
}

#[test]
fn preview_download_fills_cache() {
    let image = sample_image("a");
    let mut app = app_with_selection(&image);
    let _ = app.update(Message::Gallery(Event::OverlayClosed));
    assert!(app.is_animating(), "thumbnail spinner runs until download");

    let _ = app.update(Message::PreviewLoaded {
        url: image.preview_url.clone(),
        result: Ok(png_bytes()),
    });

    assert!(app.previews.contains(&image.preview_url));
    assert!(!app.is_animating());
}

#[test]
fn failed_preview_download_leaves_cache_untouched() {
    let mut app = App::default();
    let _ = app.update(Message::PreviewLoaded {
        url: "https://cdn.test/x-small".to_string(),
        result: Err(Error::Io("timeout".to_string())),
    });
    assert!(app.previews.is_empty());
}

#[test]
fn window_resize_and_spinner_tick_update_view_inputs() {
    let mut app = App::default();

    let _ = app.update(Message::WindowResized(Size::new(600.0, 700.0)));
    let _ = app.update(Message::SpinnerTick);

    assert_eq!(app.window_size, Size::new(600.0, 700.0));
    assert!(app.spinner_rotation > 0.0);
}

#[test]
fn title_is_localized_app_name() {
    let app = App::default();
    assert!(!app.title().is_empty());
    assert!(!app.title().starts_with("MISSING"));
}
