// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! `App::update` builds an [`UpdateContext`] over its fields and hands each
//! message to one of the handlers below.

use super::message::Shortcut;
use super::{notifications, ContentState, Message, Screen};
use crate::app::config::Config;
use crate::content::{self, Loaded};
use crate::i18n::fluent::I18n;
use crate::outbound;
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::contact::{self, Event as ContactEvent};
use crate::ui::gallery::{self, Effect as GalleryEffect, Settings as GallerySettings};
use crate::ui::header::{self, Event as HeaderEvent};
use iced::{window, Task};
use std::time::{Duration, Instant};

/// Lifetime of short status toasts such as the auto-advance toggle.
const STATUS_TOAST_DURATION: Duration = Duration::from_secs(2);

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub screen: &'a mut Screen,
    pub gallery: &'a mut Option<gallery::State>,
    pub content: &'a mut ContentState,
    pub notifications: &'a mut notifications::Manager,
    pub window_id: &'a mut Option<window::Id>,
    pub window_width: &'a mut f32,
    pub fullscreen: &'a mut bool,
}

/// Handles gallery component messages and acts on the effects it reports.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
    now: Instant,
) -> Task<Message> {
    let Some(gallery) = ctx.gallery.as_mut() else {
        return Task::none();
    };

    let (effect, task) = gallery.handle_message(message, now);
    let gallery_task = task.map(Message::Gallery);

    match effect {
        GalleryEffect::None => {}
        GalleryEffect::Inquire(id) => {
            let url = gallery
                .catalog()
                .get(&id)
                .map(|artwork| outbound::inquiry_mailto(ctx.config.site.contact_email(), artwork));
            if let Some(url) = url {
                open_link(ctx.notifications, &url);
            }
        }
        GalleryEffect::Notify(key) => {
            ctx.notifications.push(
                notifications::Notification::info(key).auto_dismiss(STATUS_TOAST_DURATION),
            );
        }
    }

    gallery_task
}

/// Handles header messages (screen links and the drawer button).
pub fn handle_header_message(
    ctx: &mut UpdateContext<'_>,
    message: &header::Message,
    now: Instant,
) -> Task<Message> {
    match header::update(message, *ctx.screen) {
        HeaderEvent::None => Task::none(),
        HeaderEvent::Navigate(screen) => switch_screen(ctx, screen, now),
        HeaderEvent::ToggleDrawer => {
            handle_gallery_message(ctx, gallery::Message::ToggleDrawer, now)
        }
    }
}

/// Handles about screen messages.
pub fn handle_about_message(
    ctx: &mut UpdateContext<'_>,
    message: &about::Message,
    now: Instant,
) -> Task<Message> {
    match about::update(message) {
        AboutEvent::None => Task::none(),
        AboutEvent::OpenContact => switch_screen(ctx, Screen::Contact, now),
        AboutEvent::OpenGallery => switch_screen(ctx, Screen::Gallery, now),
    }
}

/// Handles contact screen messages.
pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: &contact::Message,
) -> Task<Message> {
    match contact::update(message, &ctx.config.site) {
        ContactEvent::OpenUrl(url) => {
            open_link(ctx.notifications, &url);
            Task::none()
        }
    }
}

/// Switches screens. Leaving the gallery tears it down so no timer outlives
/// it; coming back mounts it again on the first artwork.
pub fn switch_screen(ctx: &mut UpdateContext<'_>, target: Screen, now: Instant) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }

    let leaving_gallery = *ctx.screen == Screen::Gallery;
    *ctx.screen = target;

    let Some(gallery) = ctx.gallery.as_mut() else {
        return Task::none();
    };
    if leaving_gallery {
        gallery.teardown();
        Task::none()
    } else if target == Screen::Gallery {
        gallery.remount(now).map(Message::Gallery)
    } else {
        Task::none()
    }
}

/// Installs a freshly loaded catalog.
///
/// The first catalog creates the gallery; later ones replace its catalog and
/// re-mount it. A fallback to the sample catalog is reported as a warning.
pub fn handle_content_loaded(
    ctx: &mut UpdateContext<'_>,
    loaded: Loaded,
    now: Instant,
) -> Task<Message> {
    ctx.content.loading = false;
    let count = loaded.catalog.len();

    match &loaded.fallback {
        None => {
            ctx.content.freshness.mark_fetched(now);
            ctx.notifications.clear_matching("notification-content-fallback");
            tracing::info!(kind = ?loaded.kind, artworks = count, "catalog loaded");
        }
        Some(err) => {
            ctx.notifications.push(
                notifications::Notification::warning("notification-content-fallback")
                    .with_arg("reason", ctx.i18n.tr(err.i18n_key())),
            );
        }
    }

    let on_gallery = *ctx.screen == Screen::Gallery;
    let task = match ctx.gallery.as_mut() {
        Some(gallery) => {
            let task = gallery.replace_catalog(loaded.catalog, now);
            if loaded.fallback.is_none() {
                ctx.notifications.push(
                    notifications::Notification::success("notification-catalog-refreshed")
                        .with_arg("count", count.to_string()),
                );
            }
            if !on_gallery {
                gallery.teardown();
            }
            task
        }
        None => {
            let (mut gallery, task) = gallery::State::new(
                loaded.catalog,
                GallerySettings::from_config(ctx.config),
                *ctx.window_width,
                now,
            );
            if !on_gallery {
                gallery.teardown();
            }
            *ctx.gallery = Some(gallery);
            task
        }
    };

    task.map(Message::Gallery)
}

/// Refetches the catalog when the source can change and the cached copy is
/// older than the revalidation interval.
pub fn refresh_content(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    if !ctx.content.source.is_refreshable() {
        tracing::debug!("built-in catalog, nothing to refresh");
        return Task::none();
    }
    if ctx.content.loading {
        return Task::none();
    }
    if !ctx.content.freshness.is_stale(now) {
        tracing::debug!(
            max_age_secs = ctx.content.freshness.max_age().as_secs(),
            "catalog still fresh, refresh skipped"
        );
        return Task::none();
    }

    ctx.content.loading = true;
    load_content(ctx.content.source.clone())
}

/// Starts loading `source` in the background.
pub fn load_content(source: content::Source) -> Task<Message> {
    Task::perform(content::load(source), Message::ContentLoaded)
}

/// Handles a keyboard shortcut.
pub fn handle_shortcut(
    ctx: &mut UpdateContext<'_>,
    window: window::Id,
    shortcut: Shortcut,
    now: Instant,
) -> Task<Message> {
    *ctx.window_id = Some(window);

    match shortcut {
        Shortcut::ToggleFullscreen => {
            let desired = !*ctx.fullscreen;
            update_fullscreen_mode(ctx.fullscreen, ctx.window_id.as_ref(), desired)
        }
        Shortcut::Refresh => refresh_content(ctx, now),
        Shortcut::Escape => {
            let drawer_open = ctx
                .gallery
                .as_ref()
                .is_some_and(gallery::State::is_drawer_open);
            if drawer_open {
                handle_gallery_message(ctx, gallery::Message::Escape, now)
            } else {
                update_fullscreen_mode(ctx.fullscreen, ctx.window_id.as_ref(), false)
            }
        }
        Shortcut::Next | Shortcut::Previous | Shortcut::ToggleAutoAdvance | Shortcut::ToggleInfo
            if *ctx.screen == Screen::Gallery =>
        {
            let message = match shortcut {
                Shortcut::Next => gallery::Message::Next,
                Shortcut::Previous => gallery::Message::Previous,
                Shortcut::ToggleAutoAdvance => gallery::Message::ToggleAutoAdvance,
                _ => gallery::Message::ToggleInfo,
            };
            handle_gallery_message(ctx, message, now)
        }
        Shortcut::Next | Shortcut::Previous | Shortcut::ToggleAutoAdvance | Shortcut::ToggleInfo => {
            Task::none()
        }
    }
}

/// Records the new width and lets the gallery pick its layout.
pub fn handle_window_resized(
    ctx: &mut UpdateContext<'_>,
    window: window::Id,
    width: f32,
    now: Instant,
) -> Task<Message> {
    *ctx.window_id = Some(window);
    *ctx.window_width = width;
    handle_gallery_message(ctx, gallery::Message::WindowResized { width }, now)
}

/// Drives toast auto-dismiss and the gallery's deadlines.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, at: Instant) -> Task<Message> {
    ctx.notifications.tick(at);

    let mounted = ctx.gallery.as_ref().is_some_and(gallery::State::is_mounted);
    if mounted {
        handle_gallery_message(ctx, gallery::Message::Tick(at), at)
    } else {
        Task::none()
    }
}

/// Tears the gallery down, then closes the window.
pub fn handle_close_requested(ctx: &mut UpdateContext<'_>, window: window::Id) -> Task<Message> {
    if let Some(gallery) = ctx.gallery.as_mut() {
        gallery.teardown();
    }
    window::close(window)
}

/// Updates fullscreen mode to the desired state.
fn update_fullscreen_mode(
    fullscreen: &mut bool,
    window_id: Option<&window::Id>,
    desired: bool,
) -> Task<Message> {
    if *fullscreen == desired {
        return Task::none();
    }

    let Some(window_id) = window_id else {
        return Task::none();
    };

    *fullscreen = desired;
    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(*window_id, mode)
}

/// Opens `url` with the platform handler, reporting failures as a toast.
fn open_link(notifications: &mut notifications::Manager, url: &str) {
    if let Err(err) = outbound::open(url) {
        tracing::warn!(%url, %err, "could not open link");
        notifications.push(notifications::Notification::error(
            "notification-link-error",
        ));
    }
}
