// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::config::Config;
use crate::error::Error;
use crate::gallery;
use crate::media::Artwork;
use crate::ui::notifications;
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the gallery controller.
    Gallery(gallery::Event),
    /// A grid thumbnail finished downloading.
    PreviewLoaded {
        url: String,
        result: Result<Vec<u8>, Error>,
    },
    /// The composer artwork finished downloading and decoding.
    ArtworkLoaded {
        url: String,
        result: Result<Artwork, Error>,
    },
    /// `Ok(None)` when the save dialog was cancelled.
    ExportFinished(Result<Option<PathBuf>, Error>),
    Notification(notifications::NotificationMessage),
    /// Advances the loading spinners.
    SpinnerTick,
    WindowResized(Size),
}

/// Startup inputs gathered by `main` before the window opens.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    pub config: Config,
    /// i18n key of a warning raised while loading `settings.toml`.
    pub config_warning: Option<String>,
}
