// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the visitor can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Gallery,
    About,
    Contact,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Gallery, Screen::About, Screen::Contact];

    /// i18n key of the header link.
    #[must_use]
    pub fn nav_key(self) -> &'static str {
        match self {
            Screen::Gallery => "nav-gallery",
            Screen::About => "nav-about",
            Screen::Contact => "nav-contact",
        }
    }
}
