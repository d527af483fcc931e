// SPDX-License-Identifier: MPL-2.0
//! Message handlers and the effect runner.
//!
//! The gallery controller describes what should happen as [`Effect`]s; this
//! module turns them into iced tasks. Provider calls run on the tokio
//! executor, decoding and rasterization on the blocking pool.

use super::{paths, App, Message, ProviderHandle};
use crate::card::CARD_ELEMENT_ID;
use crate::domain::search::PAGE_SIZE;
use crate::domain::RequestToken;
use crate::error::Error;
use crate::export::{export_card, Destination};
use crate::gallery::{Effect, Event};
use crate::media::Artwork;
use crate::ui::gallery::GALLERY_SCROLLABLE_ID;
use crate::ui::notifications::Notification;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

/// Feeds `event` to the controller and runs the resulting effects.
pub(super) fn handle_gallery_event(app: &mut App, event: Event) -> Task<Message> {
    let effects = app.gallery.update(event);

    if !app.gallery.selection().is_open() {
        app.artwork = None;
    }

    Task::batch(effects.into_iter().map(|effect| run_effect(app, effect)))
}

fn run_effect(app: &mut App, effect: Effect) -> Task<Message> {
    match effect {
        Effect::FetchRandom { token } => fetch_random(&app.provider, token),
        Effect::Search { token, query, page } => search(&app.provider, token, query, page),
        Effect::ScrollToTop => operation::snap_to(
            Id::new(GALLERY_SCROLLABLE_ID),
            RelativeOffset { x: 0.0, y: 0.0 },
        ),
        Effect::LoadPreviews(urls) => load_previews(app, &urls),
        Effect::LoadArtwork { url } => load_artwork(app, url),
        Effect::Export { file_name } => export(app, file_name),
    }
}

fn fetch_random(provider: &ProviderHandle, token: RequestToken) -> Task<Message> {
    let provider = match provider {
        Ok(provider) => Arc::clone(provider),
        Err(err) => {
            return Task::done(Message::Gallery(Event::RandomLoaded {
                token,
                result: Err(err.clone()),
            }))
        }
    };

    Task::perform(
        async move { provider.fetch_random().await },
        move |result| Message::Gallery(Event::RandomLoaded { token, result }),
    )
}

fn search(provider: &ProviderHandle, token: RequestToken, query: String, page: u32) -> Task<Message> {
    let provider = match provider {
        Ok(provider) => Arc::clone(provider),
        Err(err) => {
            return Task::done(Message::Gallery(Event::SearchLoaded {
                token,
                result: Err(err.clone()),
            }))
        }
    };

    Task::perform(
        async move { provider.search(&query, page, PAGE_SIZE).await },
        move |result| Message::Gallery(Event::SearchLoaded { token, result }),
    )
}

/// Downloads the thumbnails that are not cached yet.
fn load_previews(app: &mut App, urls: &[String]) -> Task<Message> {
    let Ok(provider) = &app.provider else {
        return Task::none();
    };

    let tasks: Vec<Task<Message>> = app
        .previews
        .missing(urls)
        .into_iter()
        .map(|url| {
            let provider = Arc::clone(provider);
            let request_url = url.clone();
            let url = url.clone();
            Task::perform(
                async move { provider.fetch_image(&request_url).await },
                move |result| Message::PreviewLoaded { url, result },
            )
        })
        .collect();

    Task::batch(tasks)
}

fn load_artwork(app: &mut App, url: String) -> Task<Message> {
    if app.artwork.as_ref().is_some_and(|artwork| artwork.url == url) {
        return Task::none();
    }
    app.artwork = None;

    let provider = match &app.provider {
        Ok(provider) => Arc::clone(provider),
        Err(err) => {
            return Task::done(Message::ArtworkLoaded {
                url,
                result: Err(err.clone()),
            })
        }
    };

    let request_url = url.clone();
    Task::perform(
        async move {
            let bytes = provider.fetch_image(&request_url).await?;
            tokio::task::spawn_blocking(move || Artwork::from_download(request_url, bytes))
                .await
                .map_err(|err| Error::Export(err.to_string()))?
        },
        move |result| Message::ArtworkLoaded { url, result },
    )
}

/// Saves the card, asking for a destination first when configured to.
fn export(app: &App, file_name: String) -> Task<Message> {
    let targets = app.render_targets();
    let scale = app.config.export.effective_scale();
    let ask_destination = app.config.export.ask_destination.unwrap_or(false);
    let directory = paths::export_dir(app.config.export.output_dir.as_ref());

    Task::perform(
        async move {
            let destination = if ask_destination {
                let picked = rfd::AsyncFileDialog::new()
                    .set_file_name(&file_name)
                    .set_directory(&directory)
                    .add_filter("PNG", &["png"])
                    .save_file()
                    .await
                    .map(|handle| handle.path().to_path_buf());
                match picked {
                    Some(path) => Destination::File(path),
                    None => return Ok(None),
                }
            } else {
                Destination::Directory(directory)
            };

            tokio::task::spawn_blocking(move || {
                export_card(&targets, CARD_ELEMENT_ID, &file_name, &destination, scale)
            })
            .await
            .map_err(|err| Error::Export(err.to_string()))?
            .map(Some)
        },
        Message::ExportFinished,
    )
}

pub(super) fn handle_preview_loaded(
    app: &mut App,
    url: String,
    result: Result<Vec<u8>, Error>,
) -> Task<Message> {
    match result {
        Ok(bytes) => {
            app.previews.insert(url, bytes);
            let stats = app.previews.stats();
            tracing::debug!(
                cached = app.previews.len(),
                hit_rate = stats.hit_rate(),
                "thumbnail cached"
            );
        }
        Err(err) => tracing::warn!(%url, error = %err, "thumbnail download failed"),
    }
    Task::none()
}

/// Installs downloaded artwork unless the selection moved on meanwhile.
pub(super) fn handle_artwork_loaded(
    app: &mut App,
    url: String,
    result: Result<Artwork, Error>,
) -> Task<Message> {
    let selected = app
        .gallery
        .selection()
        .selected_image
        .as_ref()
        .map(|image| image.full_url.as_str());
    if selected != Some(url.as_str()) {
        tracing::debug!(%url, "discarding artwork for a closed selection");
        return Task::none();
    }

    match result {
        Ok(artwork) => app.artwork = Some(artwork),
        Err(err) => {
            tracing::warn!(%url, error = %err, "artwork download failed");
            app.notifications
                .push(Notification::warning("notification-artwork-load-error"));
        }
    }
    Task::none()
}

pub(super) fn handle_export_finished(
    app: &mut App,
    result: Result<Option<PathBuf>, Error>,
) -> Task<Message> {
    match result {
        Ok(Some(path)) => app.notifications.push(
            Notification::success("notification-export-success")
                .with_arg("path", path.display().to_string()),
        ),
        Ok(None) => tracing::debug!("export cancelled in save dialog"),
        Err(Error::RenderTargetMissing(element)) => {
            tracing::debug!(%element, "export skipped: card is not rendered");
        }
        Err(err) => app.notifications.push(Notification::from_error(&err)),
    }
    Task::none()
}
