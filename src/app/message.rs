// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::content::Loaded;
use crate::ui::about;
use crate::ui::contact;
use crate::ui::gallery;
use crate::ui::header;
use crate::ui::notifications;
use iced::window;
use std::time::Instant;

/// Keyboard shortcuts recognised outside of focused widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Next,
    Previous,
    ToggleAutoAdvance,
    ToggleInfo,
    ToggleFullscreen,
    Refresh,
    Escape,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Header(header::Message),
    About(about::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// The content source answered (possibly with the fallback catalog).
    ContentLoaded(Loaded),
    Shortcut {
        window: window::Id,
        shortcut: Shortcut,
    },
    WindowResized {
        window: window::Id,
        width: f32,
    },
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// TOML catalog to show instead of the configured source.
    pub catalog: Option<String>,
    /// Content backend query endpoint, overriding `[content] endpoint`.
    pub endpoint: Option<String>,
}
