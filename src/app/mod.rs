// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the composer.
//!
//! The `App` struct wires together the gallery controller, the image provider,
//! the preview cache and localization, and translates controller effects into
//! iced tasks (see [`update`]).

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;

pub use message::{Flags, Message};

use crate::card::{self, CARD_ELEMENT_ID};
use crate::error::Error;
use crate::export::TargetSnapshot;
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::media::{Artwork, PreviewCache};
use crate::provider::{ImageProvider, ProviderSettings, UnsplashClient};
use crate::ui::notifications::{self, Notification, Toast};
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::animated_spinner;
use crate::ui::{composer, gallery as gallery_view};
use config::Config;
use iced::widget::Stack;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// The configured provider, or the reason it could not be built.
type ProviderHandle = Result<Arc<dyn ImageProvider>, Error>;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    gallery: gallery::State,
    previews: PreviewCache,
    /// Artwork of the selected image, once downloaded.
    artwork: Option<Artwork>,
    provider: ProviderHandle,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    spinner_rotation: f32,
    window_size: Size,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("view", self.gallery.view())
            .field("selection_open", &self.gallery.selection().is_open())
            .field("provider_ready", &self.provider.is_ok())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 850;
pub const MIN_WINDOW_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Resolves the credential and builds the Unsplash client.
fn build_provider(config: &Config) -> ProviderHandle {
    let env_key = std::env::var(config::ENV_ACCESS_KEY).ok();
    let settings = ProviderSettings::resolve(&config.provider, env_key)?;
    tracing::info!(base_url = %settings.base_url, "image provider configured");
    let client: Arc<dyn ImageProvider> = Arc::new(UnsplashClient::new(settings)?);
    Ok(client)
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            gallery: gallery::State::new(),
            previews: PreviewCache::default(),
            artwork: None,
            provider: Err(Error::Configuration(
                "image provider not initialized".to_string(),
            )),
            notifications: notifications::Manager::new(),
            theme_mode: ThemeMode::System,
            spinner_rotation: 0.0,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        }
    }
}

impl App {
    /// Initializes application state and issues the first random fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let provider = build_provider(&flags.config);
        Self::boot(flags, provider)
    }

    fn boot(flags: Flags, provider: ProviderHandle) -> (Self, Task<Message>) {
        let Flags {
            lang,
            config,
            config_warning,
        } = flags;

        let mut app = App {
            i18n: I18n::new(lang, &config),
            theme_mode: config.general.theme_mode,
            config,
            provider,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if let Err(err) = &app.provider {
            tracing::warn!(error = %err, "image provider unavailable");
            app.notifications.push(Notification::from_error(err));
        }

        let task = app.update(Message::Gallery(gallery::Event::Mounted));
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    /// Whether the selected image's artwork is ready for the composer.
    fn artwork_ready(&self) -> bool {
        match (&self.gallery.selection().selected_image, &self.artwork) {
            (Some(image), Some(artwork)) => artwork.url == image.full_url,
            _ => false,
        }
    }

    /// Whether any spinner is on screen.
    fn is_animating(&self) -> bool {
        let selection_pending = self.gallery.selection().is_open() && !self.artwork_ready();
        let previews_pending = self
            .gallery
            .view()
            .images()
            .iter()
            .any(|image| !self.previews.contains(&image.preview_url));

        self.gallery.search().is_loading || selection_pending || previews_pending
    }

    /// The card currently rendered in the composer, keyed by element id.
    ///
    /// Empty while nothing is selected or the artwork is still downloading.
    fn render_targets(&self) -> TargetSnapshot {
        let mut targets = TargetSnapshot::default();
        let Some(layout) = card::layout(self.gallery.selection()) else {
            return targets;
        };
        if let Some(artwork) = self
            .artwork
            .as_ref()
            .filter(|artwork| artwork.url == layout.image_url)
        {
            targets.insert(
                CARD_ELEMENT_ID,
                card::svg::document(&layout, artwork.mime(), artwork.data()),
            );
        }
        targets
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_spinner_subscription(self.is_animating()),
            subscription::create_notification_subscription(
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(event) => update::handle_gallery_event(self, event),
            Message::PreviewLoaded { url, result } => {
                update::handle_preview_loaded(self, url, result)
            }
            Message::ArtworkLoaded { url, result } => {
                update::handle_artwork_loaded(self, url, result)
            }
            Message::ExportFinished(result) => update::handle_export_finished(self, result),
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::SpinnerTick => {
                self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let gallery = gallery_view::view(gallery_view::ViewContext {
            i18n: &self.i18n,
            state: &self.gallery,
            previews: &self.previews,
            spinner_rotation: self.spinner_rotation,
            window_width: self.window_size.width,
        })
        .map(Message::Gallery);

        let mut stack = Stack::new().push(gallery);

        if let Some(overlay) = composer::view(composer::ViewContext {
            i18n: &self.i18n,
            selection: self.gallery.selection(),
            artwork: self.artwork.as_ref(),
            spinner_rotation: self.spinner_rotation,
            window: self.window_size,
        }) {
            stack = stack.push(overlay.map(Message::Gallery));
        }

        stack
            .push(Toast::view_overlay(&self.notifications, &self.i18n).map(Message::Notification))
            .into()
    }
}

#[cfg(test)]
mod tests;
