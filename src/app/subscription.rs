// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are turned into application messages here: keyboard
//! shortcuts, touch input for swipes, window resizes and close requests.
//! The tick only runs while something time-based is pending.

use super::message::Shortcut;
use super::{Message, Screen};
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Tick used while toasts wait for auto-dismiss.
const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

/// Creates the event subscription for the current screen.
///
/// Keyboard shortcuts are only routed when no widget captured the key.
/// Touch events reach the gallery only on the Gallery screen, so a swipe on
/// About or Contact scrolls the page and nothing else.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Gallery => event::listen_with(|event, status, window_id| {
            if let event::Event::Touch(touch) = &event {
                return Some(Message::Gallery(gallery::Message::Touch(*touch)));
            }
            route_common(&event, status, window_id)
        }),
        Screen::About | Screen::Contact => {
            event::listen_with(|event, status, window_id| route_common(&event, status, window_id))
        }
    }
}

fn route_common(
    event: &event::Event,
    status: event::Status,
    window_id: window::Id,
) -> Option<Message> {
    match event {
        // Handle window close request for cleanup
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(
            window::Event::Opened { size, .. } | window::Event::Resized(size),
        ) => Some(Message::WindowResized {
            window: window_id,
            width: size.width,
        }),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match status {
                event::Status::Ignored => {
                    shortcut_for(key, *modifiers).map(|shortcut| Message::Shortcut {
                        window: window_id,
                        shortcut,
                    })
                }
                event::Status::Captured => None,
            }
        }
        _ => None,
    }
}

/// Maps a key press to a shortcut. Keys held with Ctrl, Alt or Logo are left
/// to the platform.
#[must_use]
pub fn shortcut_for(key: &Key, modifiers: keyboard::Modifiers) -> Option<Shortcut> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }
    match key.as_ref() {
        Key::Named(Named::ArrowRight | Named::Space) => Some(Shortcut::Next),
        Key::Named(Named::ArrowLeft) => Some(Shortcut::Previous),
        Key::Named(Named::F11) => Some(Shortcut::ToggleFullscreen),
        Key::Named(Named::F5) => Some(Shortcut::Refresh),
        Key::Named(Named::Escape) => Some(Shortcut::Escape),
        Key::Character(c) if c.eq_ignore_ascii_case("p") => Some(Shortcut::ToggleAutoAdvance),
        Key::Character(c) if c.eq_ignore_ascii_case("i") => Some(Shortcut::ToggleInfo),
        _ => None,
    }
}

/// Periodic tick, at the fastest rate anything currently needs.
///
/// `gallery_interval` comes from the gallery component and is `None` when it
/// has no pending deadline and nothing animating; with no toasts either, no
/// tick runs at all.
pub fn create_tick_subscription(
    gallery_interval: Option<Duration>,
    has_notifications: bool,
) -> Subscription<Message> {
    let notification_interval = has_notifications.then_some(NOTIFICATION_TICK);
    let interval = match (gallery_interval, notification_interval) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    };

    match interval {
        Some(interval) => time::every(interval).map(Message::Tick),
        None => Subscription::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::Modifiers;

    fn character(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn arrows_and_space_navigate() {
        let none = Modifiers::default();
        assert_eq!(
            shortcut_for(&Key::Named(Named::ArrowRight), none),
            Some(Shortcut::Next)
        );
        assert_eq!(
            shortcut_for(&Key::Named(Named::Space), none),
            Some(Shortcut::Next)
        );
        assert_eq!(
            shortcut_for(&Key::Named(Named::ArrowLeft), none),
            Some(Shortcut::Previous)
        );
    }

    #[test]
    fn letters_match_either_case() {
        let none = Modifiers::default();
        assert_eq!(
            shortcut_for(&character("p"), none),
            Some(Shortcut::ToggleAutoAdvance)
        );
        assert_eq!(
            shortcut_for(&character("P"), Modifiers::SHIFT),
            Some(Shortcut::ToggleAutoAdvance)
        );
        assert_eq!(shortcut_for(&character("i"), none), Some(Shortcut::ToggleInfo));
        assert_eq!(shortcut_for(&character("x"), none), None);
    }

    #[test]
    fn control_chords_are_ignored() {
        assert_eq!(shortcut_for(&character("p"), Modifiers::CTRL), None);
        assert_eq!(
            shortcut_for(&Key::Named(Named::ArrowRight), Modifiers::ALT),
            None
        );
    }
}
