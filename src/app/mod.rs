// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! About and Contact screens.
//!
//! The `App` struct wires together the domains (gallery, content source,
//! localization, notifications) and translates messages into side effects
//! like content fetches, window mode changes or opening links.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Shortcut};
pub use screen::Screen;
pub use subscription::shortcut_for;

use crate::app::config::{Config, SourceOverrides};
use crate::content::{Freshness, Source};
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Where the catalog comes from and how fresh the shown copy is.
#[derive(Debug, Clone)]
pub struct ContentState {
    pub source: Source,
    pub freshness: Freshness,
    /// A load is running; further refreshes are ignored until it answers.
    pub loading: bool,
}

impl ContentState {
    #[must_use]
    pub fn new(source: Source, config: &Config) -> Self {
        Self {
            source,
            freshness: Freshness::new(config.revalidate_interval()),
            loading: false,
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme: AppTheme,
    screen: Screen,
    /// Created once the first catalog arrives.
    gallery: Option<gallery::State>,
    content: ContentState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    window_id: Option<window::Id>,
    window_width: f32,
    fullscreen: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("gallery", &self.gallery)
            .field("source", &self.content.source.kind())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        // Close requests go through `App::update` so the gallery is torn down first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot closure; the flags are consumed on the first call.
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

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        Self {
            i18n: I18n::default(),
            theme: AppTheme::new(config.general.theme_mode),
            screen: Screen::Gallery,
            gallery: None,
            content: ContentState::new(Source::Sample, &config),
            notifications: notifications::Manager::new(),
            window_id: None,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            fullscreen: false,
            config,
        }
    }
}

impl App {
    /// Initializes application state and starts loading the catalog from the
    /// source the flags and settings select.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.as_deref().map(std::path::PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir);
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let overrides = SourceOverrides {
            catalog: flags.catalog.map(std::path::PathBuf::from),
            endpoint: flags.endpoint,
        };
        let source = config.source(&overrides);
        tracing::info!(kind = ?source.kind(), "starting with content source");

        let mut app = App {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            content: ContentState::new(source, &config),
            config,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        app.content.loading = true;
        let task = update::load_content(app.content.source.clone());
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr_with_args(
            "window-title",
            &[("artist", self.config.site.artist_name())],
        );

        let artwork = self
            .gallery
            .as_ref()
            .filter(|_| self.screen == Screen::Gallery)
            .and_then(gallery::State::current_artwork);

        match artwork {
            Some(artwork) => format!("{} - {app_name}", artwork.title()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(
            self.gallery
                .as_ref()
                .and_then(|gallery| gallery.wake_interval(Instant::now())),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            config: &self.config,
            screen: &mut self.screen,
            gallery: &mut self.gallery,
            content: &mut self.content,
            notifications: &mut self.notifications,
            window_id: &mut self.window_id,
            window_width: &mut self.window_width,
            fullscreen: &mut self.fullscreen,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message, now)
            }
            Message::Header(header_message) => {
                update::handle_header_message(&mut ctx, &header_message, now)
            }
            Message::About(about_message) => {
                update::handle_about_message(&mut ctx, &about_message, now)
            }
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, &contact_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::ContentLoaded(loaded) => update::handle_content_loaded(&mut ctx, loaded, now),
            Message::Shortcut { window, shortcut } => {
                update::handle_shortcut(&mut ctx, window, shortcut, now)
            }
            Message::WindowResized { window, width } => {
                update::handle_window_resized(&mut ctx, window, width, now)
            }
            Message::Tick(at) => update::handle_tick(&mut ctx, at),
            Message::WindowCloseRequested(window) => {
                update::handle_close_requested(&mut ctx, window)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: &self.theme,
            site: &self.config.site,
            screen: self.screen,
            gallery: self.gallery.as_ref(),
            content_loading: self.content.loading,
            notifications: &self.notifications,
            fullscreen: self.fullscreen,
        })
    }
}
